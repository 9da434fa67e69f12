use actix_web::{routes, web, HttpResponse};

use crate::common::PageError;
use crate::frontend::components::Navbar;
use crate::frontend::pages::SubmitPage;
use crate::models::Session;
use crate::web::helpers::render;
use crate::web::state::AppState;
use crate::web::templates::SubmitTemplate;

#[routes]
#[get("/r/{slug}/submit")]
#[get("/communities/{slug}/submit")]
pub async fn submit_page(
    state: web::Data<AppState>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse, PageError> {
    let slug = path.into_inner();
    let page = SubmitPage::resolve(state.entities.as_ref(), &slug).await?;

    Ok(render(SubmitTemplate {
        navbar: Navbar::for_session(&session),
        page,
    }))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(submit_page);
}
