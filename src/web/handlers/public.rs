use actix_web::{get, web, HttpResponse};

use crate::common::StoreError;
use crate::frontend::components::Navbar;
use crate::frontend::pages::{HomePage, SearchPage};
use crate::models::Session;
use crate::web::forms::SearchQuery;
use crate::web::helpers::{not_found_response, render};
use crate::web::state::AppState;
use crate::web::templates::{HomeTemplate, SearchTemplate};

#[get("/")]
pub async fn home(
    state: web::Data<AppState>,
    session: Session,
) -> Result<HttpResponse, StoreError> {
    let page = HomePage::load(state.entities.as_ref()).await?;

    Ok(render(HomeTemplate {
        navbar: Navbar::for_session(&session),
        page,
    }))
}

#[get("/search")]
pub async fn search_results(
    state: web::Data<AppState>,
    session: Session,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse, StoreError> {
    let page = SearchPage::load(state.entities.as_ref(), query.q.as_deref()).await?;

    Ok(render(SearchTemplate {
        navbar: Navbar::for_session(&session),
        page,
    }))
}

pub async fn not_found() -> HttpResponse {
    not_found_response()
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(home).service(search_results);
}
