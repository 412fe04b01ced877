//! Liveness and health check endpoints for service monitoring.

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{models::account::MessageResponse, store::AccountStore};

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: String,

    /// Number of accounts held in memory
    pub accounts: usize,

    /// Current server timestamp
    pub timestamp: DateTime<Utc>,
}

/// Root liveness handler. Does not touch the account store.
///
/// # Response (200 OK)
///
/// ```json
/// { "message": "ATM API is running" }
/// ```
pub async fn home() -> Json<MessageResponse> {
    tracing::info!("Home endpoint accessed");

    Json(MessageResponse {
        message: "ATM API is running",
    })
}

/// Health check handler.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "status": "healthy",
///   "accounts": 2,
///   "timestamp": "2025-12-21T19:00:00Z"
/// }
/// ```
pub async fn health_check(State(store): State<AccountStore>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        accounts: store.account_count(),
        timestamp: Utc::now(),
    })
}
