//! In-memory membership REST service.
//!
//! # Overview
//! Serves create/read/update/delete on `/membership_api/{key}` backed by a
//! single [`RecordStore`]. Request bodies are url-encoded forms; every
//! response is a `{"id", "value"}` JSON envelope.
//!
//! # Design
//! - `store` owns the map behind a reader/writer lock and reports typed
//!   outcomes.
//! - `routes` parses the path and body, calls one store primitive and hands
//!   the outcome to `response`, which alone knows the wire sentinels.
//! - Structurally invalid requests surface as `RequestError`; missing or
//!   duplicate keys are 200 responses, not errors.

pub mod config;
pub mod error;
pub mod form;
pub mod response;
pub mod routes;
pub mod store;

use std::future::Future;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use config::{RouterOptions, ServerConfig};
pub use error::{RequestError, ServerError};
pub use response::MemberEnvelope;
pub use routes::AppState;
pub use store::{Outcome, RecordStore, SharedStore};

/// Router over a fresh, empty store with default options.
pub fn app() -> Router {
    app_with(RecordStore::shared(), RouterOptions::default())
}

/// Router over `store`, so callers can keep a handle to inspect it.
pub fn app_with(store: SharedStore, options: RouterOptions) -> Router {
    routes::router(AppState { store, options }).layer(TraceLayer::new_for_http())
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Serve `router` until `shutdown` resolves, letting in-flight requests
/// finish.
pub async fn serve_until<F>(listener: TcpListener, router: Router, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}
