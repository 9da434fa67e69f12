use actix_web::{get, post, web, HttpResponse};

use crate::common::{PostError, StoreError};
use crate::models::{CommunityIden, CommunitySummary, PostCreate, Session};
use crate::web::forms::{PostCreateForm, SearchQuery};
use crate::web::helpers::see_other;
use crate::web::state::AppState;

pub const SEARCH_RESULT_LIMIT: i64 = 5;

#[get("/api/search")]
pub async fn search(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse, StoreError> {
    let q = query.q.as_deref().map(str::trim).unwrap_or_default();
    if q.is_empty() {
        return Ok(HttpResponse::BadRequest().body("Invalid query"));
    }

    let results: Vec<CommunitySummary> = state
        .entities
        .search_communities(q, SEARCH_RESULT_LIMIT)
        .await?
        .into_iter()
        .map(CommunitySummary::from)
        .collect();

    Ok(HttpResponse::Ok().json(results))
}

#[post("/api/subreddit/post/create")]
pub async fn create_post(
    state: web::Data<AppState>,
    session: Session,
    form: web::Form<PostCreateForm>,
) -> Result<HttpResponse, PostError> {
    let Some(user) = session.user else {
        return Ok(HttpResponse::Unauthorized().body("Unauthorized"));
    };

    let data = PostCreate::new(
        &form.title,
        form.content.as_deref(),
        form.community_id,
        user.id,
    )?;

    let community = state
        .entities
        .find_community_by_id(data.community_id)
        .await?
        .ok_or(PostError::CommunityNotFound(CommunityIden::Id(data.community_id)))?;

    let post = state.entities.create_post(&data).await?;
    log::info!("User {} posted {} in r/{}", user.id, post.id, community.name);

    Ok(see_other("/"))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(search).service(create_post);
}
