use crate::models::SessionUser;

/// Account dropdown for a signed-in user. The identity is passed through
/// as given.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccountMenu {
    pub user: SessionUser,
}

impl AccountMenu {
    pub fn new(user: SessionUser) -> Self {
        Self { user }
    }

    pub fn display_name(&self) -> &str {
        self.user
            .name
            .as_deref()
            .or(self.user.username.as_deref())
            .unwrap_or(&self.user.email)
    }

    /// Shown in the avatar when the user has no image.
    pub fn initial(&self) -> String {
        self.display_name()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}
