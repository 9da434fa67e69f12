pub mod api;
pub mod auth;
pub mod public;
pub mod submit;

use actix_web::web;

/// Registers every route plus the 404 fallback.
pub fn configure(cfg: &mut web::ServiceConfig) {
    public::configure(cfg);
    submit::configure(cfg);
    auth::configure(cfg);
    api::configure(cfg);
    cfg.default_service(web::to(public::not_found));
}
