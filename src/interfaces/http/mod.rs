//! HTTP transport for the vending machine.
//!
//! ```text
//! PUT    /                 insert a coin        204  X-Coins: total
//! DELETE /                 cancel, return coins 204  X-Coins: returned
//! GET    /inventory        all quantities       200  [5, 5, 5]
//! GET    /inventory/{id}   one quantity         200  5
//! PUT    /inventory/{id}   purchase             200  {"quantity": 1}
//! ```
//!
//! Anything else answers 404.

pub mod handlers;
pub mod middleware;
pub mod response;

use crate::application::engine::VendingEngine;
use crate::error::Result;
use axum::{
    Router,
    routing::{get, put},
};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Engine handle shared by every request handler.
pub type SharedEngine = Arc<VendingEngine>;

/// Build the router serving every vending route.
///
/// Trailing slashes are accepted on the inventory routes. Unknown paths and
/// unsupported verbs on known paths both fall through to 404.
pub fn build_router(engine: SharedEngine) -> Router {
    Router::new()
        .route("/", put(handlers::insert_coin).delete(handlers::cancel))
        .route("/inventory", get(handlers::inventory))
        .route("/inventory/", get(handlers::inventory))
        .route(
            "/inventory/{id}",
            get(handlers::item_quantity).put(handlers::purchase),
        )
        .route(
            "/inventory/{id}/",
            get(handlers::item_quantity).put(handlers::purchase),
        )
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::not_found)
        .layer(axum::middleware::from_fn(middleware::access_log))
        .with_state(engine)
}

/// Serve the vending routes on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, engine: SharedEngine, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, build_router(engine))
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}
