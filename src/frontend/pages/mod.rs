//! Page resolution for Breadit: turn request inputs into render-ready data.

mod home;
mod search;
mod submit;

pub use home::{HomePage, HOME_COMMUNITY_LIMIT};
pub use search::{SearchPage, SEARCH_PAGE_LIMIT};
pub use submit::SubmitPage;
