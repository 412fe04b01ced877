//! Account HTTP handlers.
//!
//! This module implements the account-related API endpoints:
//! - GET /accounts/{account_number}/balance - Check balance
//! - POST /accounts/{account_number}/deposit - Add money to account
//! - POST /accounts/{account_number}/withdraw - Remove money from account
//!
//! Every request is checked in the same order: the account must exist, the
//! amount must be a number, it must be positive, and a withdrawal must be
//! covered by the balance. The first failing check decides the response.

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
};

use crate::{
    error::AppError,
    models::{
        account::{AmountRequest, BalanceResponse, TransactionResponse},
        money::Cents,
    },
    store::AccountStore,
};

/// Get the balance of an account.
///
/// # Response
///
/// - **Success (200 OK)**: `{"account_number": "12345", "balance": 500.0}`
/// - **Error (404)**: Account not found
pub async fn get_balance(
    State(store): State<AccountStore>,
    Path(account_number): Path<String>,
) -> Result<Json<BalanceResponse>, AppError> {
    let balance = store
        .get_balance(&account_number)
        .await
        .inspect_err(|_| {
            tracing::warn!(%account_number, "Balance check failed: account not found");
        })?;

    tracing::info!(%account_number, %balance, "Balance check");

    Ok(Json(BalanceResponse {
        account_number,
        balance,
    }))
}

/// Deposit money into an account.
///
/// # Request Body
///
/// ```json
/// { "amount": 100 }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: `{"account_number": "12345", "new_balance": 600.0}`
/// - **Error (404)**: Account not found
/// - **Error (400)**: Amount missing, not a number, or not positive
pub async fn deposit(
    State(store): State<AccountStore>,
    Path(account_number): Path<String>,
    body: Bytes,
) -> Result<Json<TransactionResponse>, AppError> {
    let amount = read_amount(&store, &account_number, &body, "Deposit")?;

    let new_balance = store
        .deposit(&account_number, amount)
        .await
        .inspect_err(|error| {
            tracing::warn!(%account_number, %amount, %error, "Deposit failed");
        })?;

    tracing::info!(%account_number, %amount, %new_balance, "Deposit successful");

    Ok(Json(TransactionResponse {
        account_number,
        new_balance,
    }))
}

/// Withdraw money from an account.
///
/// # Request Body
///
/// ```json
/// { "amount": 50 }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: `{"account_number": "12345", "new_balance": 550.0}`
/// - **Error (404)**: Account not found
/// - **Error (400)**: Amount missing, not a number, not positive, or larger
///   than the balance
pub async fn withdraw(
    State(store): State<AccountStore>,
    Path(account_number): Path<String>,
    body: Bytes,
) -> Result<Json<TransactionResponse>, AppError> {
    let amount = read_amount(&store, &account_number, &body, "Withdraw")?;

    let new_balance = store
        .withdraw(&account_number, amount)
        .await
        .inspect_err(|error| {
            tracing::warn!(%account_number, %amount, %error, "Withdraw failed");
        })?;

    tracing::info!(%account_number, %amount, %new_balance, "Withdraw successful");

    Ok(Json(TransactionResponse {
        account_number,
        new_balance,
    }))
}

/// Check the account exists, then parse the amount out of the body.
///
/// Positivity and funds are left to the store, which checks them under the
/// account lock.
fn read_amount(
    store: &AccountStore,
    account_number: &str,
    body: &[u8],
    operation: &str,
) -> Result<Cents, AppError> {
    if !store.contains(account_number) {
        tracing::warn!(%account_number, "{operation} failed: account not found");
        return Err(AppError::AccountNotFound);
    }

    AmountRequest::from_body(body).amount().map_err(|error| {
        tracing::warn!(%account_number, %error, "{operation} failed: invalid amount input");
        AppError::from(error)
    })
}
