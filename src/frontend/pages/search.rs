use crate::common::StoreError;
use crate::models::Community;
use crate::services::EntityStore;

pub const SEARCH_PAGE_LIMIT: i64 = 25;

/// Results for the navbar search form. A blank query shows an empty page
/// without touching the store.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SearchPage {
    pub query: String,
    pub communities: Vec<Community>,
}

impl SearchPage {
    pub async fn load(store: &dyn EntityStore, query: Option<&str>) -> Result<Self, StoreError> {
        let query = query.map(str::trim).unwrap_or_default().to_string();
        if query.is_empty() {
            return Ok(Self {
                query,
                communities: Vec::new(),
            });
        }

        let communities = store.search_communities(&query, SEARCH_PAGE_LIMIT).await?;
        Ok(Self { query, communities })
    }

    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }
}
