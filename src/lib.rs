//! In-memory quote catalog with recycled identifiers, served over HTTP.
//!
//! # Examples
//!
//! Direct use of [`core::store::QuoteStore`]:
//! ```
//! use quotebook::{context::CallContext, core::store::{QuoteStore, StoreError}, quote::Quote};
//!
//! let store = QuoteStore::new();
//! let ctx = CallContext::background();
//!
//! let mut first = Quote::new("Seneca", "Luck is what happens when preparation meets opportunity.");
//! store.insert(&ctx, &mut first).expect("insert");
//! assert_eq!(first.id, 1);
//!
//! let mut again = Quote::new("Seneca", first.text.clone());
//! assert!(matches!(store.insert(&ctx, &mut again), Err(StoreError::DuplicateQuote { .. })));
//!
//! store.delete(&ctx, first.id).expect("delete");
//! let mut next = Quote::new("Epictetus", "No man is free who is not master of himself.");
//! store.insert(&ctx, &mut next).expect("insert");
//! assert_eq!(next.id, 1);
//! ```
//!
//! Serving the HTTP routes:
//! ```no_run
//! use std::{sync::Arc, time::Duration};
//!
//! use quotebook::{
//!     core::store::QuoteStore,
//!     service::quote_service::QuoteService,
//!     transport::{AppState, router},
//! };
//!
//! # #[tokio::main]
//! # async fn main() {
//! let service = Arc::new(QuoteService::new(Arc::new(QuoteStore::new())));
//! let app = router(AppState::new(service, Duration::from_secs(5)));
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await.expect("bind");
//! axum::serve(listener, app).await.expect("serve");
//! # }
//! ```
#![deny(missing_docs)]

/// Server configuration from the environment.
pub mod config;
/// Cancellable calling context.
pub mod context;
/// Core in-memory store, id pool and index helpers.
pub mod core;
/// Quote and author records.
pub mod quote;
/// Validation and logging service layer.
pub mod service;
/// Tracing subscriber bootstrap.
pub mod telemetry;
/// HTTP routes and error mapping.
pub mod transport;
/// Shared primitive ids.
pub mod types;
