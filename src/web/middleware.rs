use actix_web::{
    Error, FromRequest, HttpMessage, HttpRequest,
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorInternalServerError,
    web,
};
use futures_util::future::{Ready, err, ok};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use crate::models::Session;
use crate::web::helpers::{is_static_path, session_token};
use crate::web::state::AppState;

/// Resolves the request's [`Session`] once, before any handler runs, and
/// stores it in the request extensions. A failed read fails the request.
/// Static assets pass through without a session read.
pub struct SessionLoader;

impl<S, B> Transform<S, ServiceRequest> for SessionLoader
where
    S: Service<
            ServiceRequest,
            Response = ServiceResponse<B>,
            Error = Error,
        > + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = SessionLoaderMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(SessionLoaderMiddleware {
            service: Rc::new(service),
        })
    }
}

pub struct SessionLoaderMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for SessionLoaderMiddleware<S>
where
    S: Service<
            ServiceRequest,
            Response = ServiceResponse<B>,
            Error = Error,
        > + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = Pin<
        Box<dyn Future<Output = Result<Self::Response, Self::Error>>>,
    >;

    fn poll_ready(
        &self,
        cx: &mut Context<'_>,
    ) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if is_static_path(req.path()) {
            return Box::pin(self.service.call(req));
        }

        let service = Rc::clone(&self.service);
        let provider = req
            .app_data::<web::Data<AppState>>()
            .map(|state| state.sessions.clone());
        let token = session_token(req.request());

        Box::pin(async move {
            let Some(provider) = provider else {
                log::error!("SessionLoader mounted without AppState");
                return Err(ErrorInternalServerError("session provider missing"));
            };

            let session = provider.current_session(token).await?;
            req.extensions_mut().insert(session);

            service.call(req).await
        })
    }
}

impl FromRequest for Session {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        match req.extensions().get::<Session>() {
            Some(session) => ok(session.clone()),
            None => {
                log::error!("Session extracted on a route not wrapped by SessionLoader");
                err(ErrorInternalServerError("session not resolved"))
            }
        }
    }
}
