use actix_web::{get, post, web, HttpRequest, HttpResponse};

use crate::frontend::components::{button_variants, ButtonStyle, Navbar};
use crate::models::Session;
use crate::web::forms::{AuthQuery, SignInForm};
use crate::web::helpers::{removal_cookie, render, see_other, session_cookie, session_token};
use crate::web::state::AppState;
use crate::web::templates::SignInTemplate;

#[get("/sign-in")]
pub async fn sign_in_page(session: Session, query: web::Query<AuthQuery>) -> HttpResponse {
    if session.is_authenticated() {
        return see_other("/");
    }

    let error = query.error.as_deref().map(|code| match code {
        "invalid" => "Invalid email or password".to_string(),
        "internal" => "An internal error occurred. Please try again.".to_string(),
        _ => "Sign in failed".to_string(),
    });

    render(SignInTemplate {
        navbar: Navbar::for_session(&session),
        error,
        submit_class: format!("{} w-full", button_variants(ButtonStyle::default())),
    })
}

#[post("/sign-in")]
pub async fn sign_in_submit(
    state: web::Data<AppState>,
    form: web::Form<SignInForm>,
) -> HttpResponse {
    match state.sessions.sign_in(&form.email, &form.password).await {
        Ok(Some(record)) => {
            let cookie = session_cookie(record.token, state.sessions.ttl(), state.secure_cookies);
            HttpResponse::SeeOther()
                .cookie(cookie)
                .insert_header(("Location", "/"))
                .finish()
        }
        Ok(None) => see_other("/sign-in?error=invalid"),
        Err(e) => {
            log::error!("Sign in failed: {e}");
            see_other("/sign-in?error=internal")
        }
    }
}

#[post("/sign-out")]
pub async fn sign_out(state: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    if let Some(token) = session_token(&req) {
        if let Err(e) = state.sessions.sign_out(token).await {
            log::error!("Failed to delete session: {e}");
        }
    }

    HttpResponse::SeeOther()
        .cookie(removal_cookie(state.secure_cookies))
        .insert_header(("Location", "/"))
        .finish()
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(sign_in_page)
        .service(sign_in_submit)
        .service(sign_out);
}
