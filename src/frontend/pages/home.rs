use crate::common::StoreError;
use crate::models::Community;
use crate::services::EntityStore;

pub const HOME_COMMUNITY_LIMIT: i64 = 25;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HomePage {
    pub communities: Vec<Community>,
}

impl HomePage {
    pub async fn load(store: &dyn EntityStore) -> Result<Self, StoreError> {
        let communities = store.recent_communities(HOME_COMMUNITY_LIMIT).await?;
        Ok(Self { communities })
    }
}
