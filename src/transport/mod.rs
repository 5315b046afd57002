//! HTTP surface over [`QuoteService`].

/// Error mapping to HTTP responses.
pub mod error;
/// Route handlers.
pub mod handlers;

use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    routing::{delete, get},
};

use crate::{context::CallContext, service::quote_service::QuoteService};

/// Shared handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Service every handler delegates to.
    pub service: Arc<QuoteService>,
    /// Deadline given to each request's store call.
    pub request_timeout: Duration,
}

impl AppState {
    /// Bundles a service with the per-request deadline.
    pub fn new(service: Arc<QuoteService>, request_timeout: Duration) -> Self {
        Self {
            service,
            request_timeout,
        }
    }

    /// Fresh context for one request.
    pub fn context(&self) -> CallContext {
        CallContext::with_timeout(self.request_timeout)
    }
}

/// Builds the quote routes.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/quotes", get(handlers::list_quotes).post(handlers::create_quote))
        .route("/quotes/random", get(handlers::random_quote))
        .route("/quotes/{id}", delete(handlers::delete_quote))
        .with_state(state)
}
