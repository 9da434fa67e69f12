use uuid::Uuid;

use crate::frontend::components::FormHandle;
use crate::models::{POST_TITLE_MAX_CHARS, POST_TITLE_MIN_CHARS};

pub const POST_CREATE_ACTION: &str = "/api/subreddit/post/create";

/// Post authoring form for one community.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Editor {
    pub community_id: Uuid,
    pub form: FormHandle,
    pub action: &'static str,
    pub title_min: usize,
    pub title_max: usize,
}

impl Editor {
    pub fn new(community_id: Uuid, form: FormHandle) -> Self {
        Self {
            community_id,
            form,
            action: POST_CREATE_ACTION,
            title_min: POST_TITLE_MIN_CHARS,
            title_max: POST_TITLE_MAX_CHARS,
        }
    }
}
