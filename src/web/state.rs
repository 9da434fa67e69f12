use std::sync::Arc;

use crate::services::{EntityStore, SessionProvider};

#[derive(Clone)]
pub struct AppState {
    pub entities: Arc<dyn EntityStore>,
    pub sessions: SessionProvider,
    pub secure_cookies: bool,
}

impl AppState {
    pub fn new(entities: Arc<dyn EntityStore>, sessions: SessionProvider, secure_cookies: bool) -> Self {
        Self {
            entities,
            sessions,
            secure_cookies,
        }
    }
}
