//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (path params, raw body)
//! 2. Validates it and calls the account store
//! 3. Returns HTTP response (JSON, status code)

/// Balance, deposit and withdraw endpoints
pub mod accounts;
/// Liveness and health endpoints
pub mod health;
