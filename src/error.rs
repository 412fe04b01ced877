//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::models::money::AmountError;

/// Errors returned by account operations.
///
/// Each variant maps to a specific HTTP status code and error message.
/// None of them are fatal; a failed request leaves every balance untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    /// Requested account does not exist.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Account not found")]
    AccountNotFound,

    /// Amount is missing, not a number, or not positive.
    ///
    /// Returns HTTP 400 Bad Request.
    /// The String is the message shown to the client.
    #[error("{0}")]
    InvalidAmount(String),

    /// Withdrawal exceeds the current balance.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Insufficient funds")]
    InsufficientFunds,
}

impl AppError {
    pub fn invalid_amount() -> Self {
        AppError::InvalidAmount("Invalid amount".to_string())
    }

    pub fn non_positive_amount() -> Self {
        AppError::InvalidAmount("Amount must be positive".to_string())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::AccountNotFound => StatusCode::NOT_FOUND,
            AppError::InvalidAmount(_) | AppError::InsufficientFunds => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<AmountError> for AppError {
    fn from(_: AmountError) -> Self {
        AppError::invalid_amount()
    }
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// ```json
/// { "error": "Human-readable error message" }
/// ```
///
/// # Status Code Mapping
///
/// - `AccountNotFound` → 404 Not Found
/// - `InvalidAmount` → 400 Bad Request
/// - `InsufficientFunds` → 400 Bad Request
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));

        (self.status_code(), body).into_response()
    }
}

/// Failures while loading configuration at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Environment variables could not be deserialized.
    #[error("Failed to read environment: {0}")]
    Env(#[from] envy::Error),

    /// An entry of `SEED_ACCOUNTS` is malformed.
    #[error("Invalid seed account entry `{entry}`: {reason}")]
    InvalidSeedAccount { entry: String, reason: String },
}
