//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to automatically deserialize environment variables into a type-safe struct.

use serde::Deserialize;

use crate::{error::ConfigError, models::money::Cents};

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `SERVER_HOST` (optional): address to bind, defaults to 0.0.0.0
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 5000
/// - `SEED_ACCOUNTS` (optional): accounts created at startup as
///   comma-separated `number=balance` pairs, defaults to `12345=500,67890=1000`
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub server_host: String,

    #[serde(default = "default_port")]
    pub server_port: u16,

    #[serde(default = "default_seed_accounts")]
    pub seed_accounts: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_seed_accounts() -> String {
    "12345=500,67890=1000".to_string()
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and deserializes them into a Config struct.
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values cannot be parsed into
    /// expected types (e.g. a non-numeric `SERVER_PORT`).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(envy::from_env::<Config>()?)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Parse `seed_accounts` into account numbers and opening balances.
    ///
    /// # Errors
    ///
    /// Rejects entries without `=`, with an empty account number, or with a
    /// balance that is not a non-negative amount of at most two decimals.
    pub fn seed_accounts(&self) -> Result<Vec<(String, Cents)>, ConfigError> {
        self.seed_accounts
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(parse_seed_entry)
            .collect()
    }
}

fn parse_seed_entry(entry: &str) -> Result<(String, Cents), ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidSeedAccount {
        entry: entry.to_string(),
        reason,
    };

    let (account_number, balance) = entry
        .split_once('=')
        .ok_or_else(|| invalid("expected `number=balance`".to_string()))?;

    let account_number = account_number.trim();
    if account_number.is_empty() {
        return Err(invalid("account number is empty".to_string()));
    }

    let balance: Cents = balance.parse().map_err(|e| invalid(format!("{e}")))?;
    if balance < Cents::ZERO {
        return Err(invalid("balance is negative".to_string()));
    }

    Ok((account_number.to_string(), balance))
}
