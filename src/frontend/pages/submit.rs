use crate::common::PageError;
use crate::frontend::components::{Editor, SubmitButton, POST_FORM};
use crate::models::{Community, CommunityIden};
use crate::services::EntityStore;

/// Create-post page of a single community.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SubmitPage {
    pub community: Community,
    pub editor: Editor,
    pub submit: SubmitButton,
}

impl SubmitPage {
    /// One lookup by `slug`, then either a page bound to the community or
    /// [`PageError::NotFound`]. Store failures propagate untouched.
    pub async fn resolve(store: &dyn EntityStore, slug: &str) -> Result<Self, PageError> {
        let community = store
            .find_community_by_name(slug)
            .await?
            .ok_or_else(|| PageError::NotFound(CommunityIden::from(slug)))?;

        Ok(Self::for_community(community))
    }

    pub fn for_community(community: Community) -> Self {
        Self {
            editor: Editor::new(community.id, POST_FORM),
            submit: SubmitButton::new(POST_FORM, "Post"),
            community,
        }
    }

    /// Breadcrumb under the heading, e.g. `in r/cats`.
    pub fn breadcrumb(&self) -> String {
        format!("in r/{}", self.community.name)
    }
}
