//! Account API request/response types.
//!
//! This module defines:
//! - `AmountRequest`: Request body for deposits and withdrawals
//! - `BalanceResponse`: Response body for balance checks
//! - `TransactionResponse`: Response body after a deposit or withdrawal
//! - `MessageResponse`: Liveness message

use serde::Serialize;
use serde_json::Value;

use super::money::{AmountError, Cents};

/// Request body for deposits and withdrawals.
///
/// # JSON Example
///
/// ```json
/// { "amount": 100 }
/// ```
///
/// The amount stays untyped here so the handler can tell a missing amount
/// from one that is present but not a number.
#[derive(Debug)]
pub struct AmountRequest {
    pub amount: Option<Value>,
}

impl AmountRequest {
    /// Read a request body without failing.
    ///
    /// A body that is not a JSON object is handled like one without `amount`.
    /// A repeated `amount` key keeps the last value.
    pub fn from_body(body: &[u8]) -> Self {
        let amount = match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(mut fields)) => fields.remove("amount"),
            _ => None,
        };

        Self { amount }
    }

    /// Typed amount. A missing or `null` amount counts as zero.
    pub fn amount(&self) -> Result<Cents, AmountError> {
        match &self.amount {
            None | Some(Value::Null) => Ok(Cents::ZERO),
            Some(value) => Cents::from_json(value),
        }
    }
}

/// Response body for `GET /accounts/{account_number}/balance`.
///
/// ```json
/// { "account_number": "12345", "balance": 500.0 }
/// ```
#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    pub account_number: String,
    pub balance: Cents,
}

/// Response body after a successful deposit or withdrawal.
///
/// ```json
/// { "account_number": "12345", "new_balance": 600.0 }
/// ```
#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    pub account_number: String,
    pub new_balance: Cents,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(br#"{"amount": 25}"#.as_slice(), Ok(Cents::new(2_500)))]
    #[case(br#"{"amount": "25.10"}"#.as_slice(), Ok(Cents::new(2_510)))]
    #[case(br#"{"amount": null}"#.as_slice(), Ok(Cents::ZERO))]
    #[case(br#"{"other": 1}"#.as_slice(), Ok(Cents::ZERO))]
    #[case(br#"{}"#.as_slice(), Ok(Cents::ZERO))]
    #[case(br#"not json"#.as_slice(), Ok(Cents::ZERO))]
    #[case(br#"5"#.as_slice(), Ok(Cents::ZERO))]
    #[case(b"".as_slice(), Ok(Cents::ZERO))]
    #[case(br#"{"amount": "ten"}"#.as_slice(), Err(AmountError::NotANumber))]
    #[case(br#"{"amount": false}"#.as_slice(), Err(AmountError::NotANumber))]
    #[case(br#"{"amount": 1, "amount": 2}"#.as_slice(), Ok(Cents::new(200)))]
    #[case(br#"{"amount": 3, "note": {"nested": [1, 2]}}"#.as_slice(), Ok(Cents::new(300)))]
    fn reads_amount_from_body(#[case] body: &[u8], #[case] expected: Result<Cents, AmountError>) {
        assert_eq!(AmountRequest::from_body(body).amount(), expected);
    }

    #[test]
    fn balance_response_shape() {
        let response = BalanceResponse {
            account_number: "12345".to_string(),
            balance: Cents::new(50_000),
        };
        assert_eq!(
            serde_json::to_value(response).unwrap(),
            serde_json::json!({ "account_number": "12345", "balance": 500.0 })
        );
    }
}
