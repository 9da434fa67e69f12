use thiserror::Error;

use crate::models::CommunityIden;

#[derive(Error, Debug)]
pub enum GeneralError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),

    #[error("Invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Failure of a read or write against the entity or session store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("More than one community matches {0}")]
    Ambiguous(CommunityIden),

    #[error("Password hashing error: {0}")]
    PasswordHash(argon2::password_hash::Error),
}

/// Outcome of resolving a community-scoped page.
#[derive(Error, Debug)]
pub enum PageError {
    #[error("Community with {0} not found")]
    NotFound(CommunityIden),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Error, Debug)]
pub enum PostError {
    #[error("Title must be at least {0} characters long")]
    TitleTooShort(usize),

    #[error("Title must be at most {0} characters long")]
    TitleTooLong(usize),

    #[error("Community with {0} not found")]
    CommunityNotFound(CommunityIden),

    #[error(transparent)]
    Store(#[from] StoreError),
}
