//! Router Composition
//! Mission: Wire public, login, and token-gated routes into one app

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers;
use crate::auth::{access_guard, CredentialTable, SessionIssuer, TokenCodec};
use crate::config::Config;
use crate::directory::Directory;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub issuer: Arc<SessionIssuer>,
    pub directory: Arc<Directory>,
    pub base_url: String,
    pub issues_refresh: bool,
}

/// Create the full API router from configuration.
///
/// The credential table, directory, and codecs are built here once and
/// shared read-only; nothing mutates them afterwards.
pub fn create_router(config: &Config) -> Router {
    let issuer = Arc::new(SessionIssuer::new(CredentialTable::default(), config));
    let access_codec = Arc::new(TokenCodec::new(config.access_secret.clone()));

    let state = AppState {
        issues_refresh: issuer.issues_refresh(),
        issuer,
        directory: Arc::new(Directory::seed()),
        base_url: format!("http://localhost:{}", config.port),
    };

    // Login routes (no auth). The refresh route only exists in the
    // dual-token variant, matching the original deployments.
    let mut login_routes = Router::new()
        .route("/api/login/ping", get(handlers::ping))
        .route("/api/login/authenticate", post(handlers::authenticate));
    if state.issues_refresh {
        login_routes = login_routes.route("/api/login/refresh-token", post(handlers::refresh_token));
    }
    let login_routes = login_routes.with_state(state.clone());

    // Protected static-data routes behind the access guard
    let protected_routes = Router::new()
        .route("/api/admin", get(handlers::list_admins))
        .route("/api/admin/:id", get(handlers::get_admin))
        .route("/api/customers", get(handlers::list_customers))
        .route("/api/customers/:id", get(handlers::get_customer))
        .route_layer(middleware::from_fn_with_state(access_codec, access_guard))
        .with_state(state.clone());

    // Public metadata route
    let public_routes = Router::new()
        .route("/", get(handlers::root_catalog))
        .with_state(state);

    Router::new()
        .merge(public_routes)
        .merge(login_routes)
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
