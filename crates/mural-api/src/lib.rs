pub mod auth;
pub mod chat;
pub mod error;
pub mod middleware;
pub mod register;
pub mod site;

use std::sync::Arc;

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Router, middleware as axum_middleware};

use mural_pages::Pages;
use mural_store::{MessageStore, UserStore};

use crate::auth::CredentialVerifier;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub users: Arc<dyn UserStore>,
    pub messages: Arc<dyn MessageStore>,
    pub verifier: Arc<dyn CredentialVerifier>,
    pub pages: Pages,
}

/// All dynamic routes with the login gate applied, including the 404
/// fallback. The session layer and the static file service are wired by
/// the caller, outside this router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(site::home))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", get(auth::logout))
        .route("/cadastro", get(register::register_page).post(register::register))
        .route("/batepapo", get(chat::chat_page).post(chat::post_message))
        .fallback(site::not_found)
        .layer(axum_middleware::from_fn(middleware::require_login))
        .with_state(state)
}

/// 302 Found, matching classic form-post redirect semantics.
pub fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_owned())]).into_response()
}
