//! Router construction.
//!
//! Wires every endpoint to its handler and shares one `AccountStore` with all
//! of them through axum `State`.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::{handlers, store::AccountStore};

/// Build the application router around the given store.
pub fn create_router(store: AccountStore) -> Router {
    Router::new()
        .route("/", get(handlers::health::home))
        .route("/health", get(handlers::health::health_check))
        .route(
            "/accounts/{account_number}/balance",
            get(handlers::accounts::get_balance),
        )
        .route(
            "/accounts/{account_number}/deposit",
            post(handlers::accounts::deposit),
        )
        .route(
            "/accounts/{account_number}/withdraw",
            post(handlers::accounts::withdraw),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}
