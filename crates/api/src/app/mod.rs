//! HTTP application wiring (axum router + service wiring).
//!
//! This folder is structured like:
//! - `services.rs`: shared state wiring (the ledger store)
//! - `routes/`: HTTP routes + handlers (one file per domain area)
//! - `dto.rs`: request DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::post};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app() -> Router {
    let services = Arc::new(services::build_services());
    let resolver = middleware::ResolverState {
        ledger: services.ledger.clone(),
    };

    // Every route except account creation goes through the account resolver.
    let resolved = routes::router().layer(axum::middleware::from_fn_with_state(
        resolver,
        middleware::resolve_account,
    ));

    Router::new()
        .route("/account", post(routes::accounts::create_account))
        .merge(resolved)
        .layer(ServiceBuilder::new().layer(Extension(services)))
}
