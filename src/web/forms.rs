use serde::Deserialize;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct AuthQuery {
    pub error: Option<String>,
}

#[derive(Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

#[derive(Deserialize)]
pub struct PostCreateForm {
    pub title: String,
    pub content: Option<String>,
    pub community_id: Uuid,
}
