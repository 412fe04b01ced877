//! In-memory account store.
//!
//! Holds every account balance for the lifetime of the process. The set of
//! accounts is fixed when the store is built, so the map itself is shared
//! read-only and only the balances sit behind locks.
//!
//! # Concurrency
//!
//! Each balance has its own `tokio::sync::Mutex`. Every read and every
//! mutation of an account takes that lock, so operations on one account are
//! applied in a single total order: two withdrawals can never both pass the
//! funds check against the same balance. Different accounts never contend.

use std::{collections::HashMap, sync::Arc};

use tokio::sync::Mutex;

use crate::{error::AppError, models::money::Cents};

/// Shared handle to all account balances.
///
/// Cloning is cheap: clones point at the same accounts. Axum hands a clone to
/// each request through `State`.
#[derive(Debug, Clone)]
pub struct AccountStore {
    accounts: Arc<HashMap<String, Mutex<Cents>>>,
}

impl AccountStore {
    /// Build a store from `(account_number, balance)` pairs.
    ///
    /// A repeated account number keeps the last balance given for it.
    pub fn from_seed<I>(seed: I) -> Self
    where
        I: IntoIterator<Item = (String, Cents)>,
    {
        let mut accounts = HashMap::new();
        for (account_number, balance) in seed {
            if accounts
                .insert(account_number.clone(), Mutex::new(balance))
                .is_some()
            {
                tracing::warn!(%account_number, "Duplicate seed account, keeping last balance");
            }
        }

        Self {
            accounts: Arc::new(accounts),
        }
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    pub fn contains(&self, account_number: &str) -> bool {
        self.accounts.contains_key(account_number)
    }

    fn account(&self, account_number: &str) -> Result<&Mutex<Cents>, AppError> {
        self.accounts
            .get(account_number)
            .ok_or(AppError::AccountNotFound)
    }

    /// Current balance of an account.
    ///
    /// # Errors
    ///
    /// - `AccountNotFound`: no account with this number
    pub async fn get_balance(&self, account_number: &str) -> Result<Cents, AppError> {
        let balance = self.account(account_number)?.lock().await;
        Ok(*balance)
    }

    /// Add money to an account and return the new balance.
    ///
    /// # Errors
    ///
    /// - `AccountNotFound`: no account with this number
    /// - `InvalidAmount`: amount is zero or negative, or the new balance
    ///   would overflow
    pub async fn deposit(&self, account_number: &str, amount: Cents) -> Result<Cents, AppError> {
        let account = self.account(account_number)?;
        if !amount.is_positive() {
            return Err(AppError::non_positive_amount());
        }

        let mut balance = account.lock().await;
        let new_balance = balance
            .checked_add(amount)
            .ok_or_else(AppError::invalid_amount)?;
        *balance = new_balance;

        Ok(new_balance)
    }

    /// Remove money from an account and return the new balance.
    ///
    /// The funds check and the update happen under the same lock.
    ///
    /// # Errors
    ///
    /// - `AccountNotFound`: no account with this number
    /// - `InvalidAmount`: amount is zero or negative
    /// - `InsufficientFunds`: amount exceeds the current balance
    pub async fn withdraw(&self, account_number: &str, amount: Cents) -> Result<Cents, AppError> {
        let account = self.account(account_number)?;
        if !amount.is_positive() {
            return Err(AppError::non_positive_amount());
        }

        let mut balance = account.lock().await;
        if amount > *balance {
            return Err(AppError::InsufficientFunds);
        }

        let new_balance = *balance - amount;
        *balance = new_balance;

        Ok(new_balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn cents(major: i64) -> Cents {
        Cents::new(major * 100)
    }

    #[fixture]
    fn store() -> AccountStore {
        AccountStore::from_seed([
            ("12345".to_string(), cents(500)),
            ("67890".to_string(), cents(1000)),
        ])
    }

    #[rstest]
    #[tokio::test]
    async fn deposit_then_withdraw_scenario(store: AccountStore) {
        assert_eq!(store.deposit("12345", cents(100)).await, Ok(cents(600)));
        assert_eq!(store.withdraw("12345", cents(50)).await, Ok(cents(550)));
        assert_eq!(
            store.withdraw("12345", cents(10_000)).await,
            Err(AppError::InsufficientFunds)
        );
        assert_eq!(store.get_balance("12345").await, Ok(cents(550)));
    }

    #[rstest]
    #[case("12345", 1)]
    #[case("12345", 9_999)]
    #[case("67890", 123_456)]
    #[tokio::test]
    async fn deposit_and_withdraw_round_trip(
        store: AccountStore,
        #[case] account: &str,
        #[case] amount: i64,
    ) {
        let before = store.get_balance(account).await.unwrap();
        store.deposit(account, Cents::new(amount)).await.unwrap();
        store.withdraw(account, Cents::new(amount)).await.unwrap();
        assert_eq!(store.get_balance(account).await, Ok(before));
    }

    #[rstest]
    #[tokio::test]
    async fn withdrawing_more_than_balance_leaves_it_untouched(store: AccountStore) {
        let result = store.withdraw("12345", Cents::new(50_001)).await;
        assert_eq!(result, Err(AppError::InsufficientFunds));
        assert_eq!(store.get_balance("12345").await, Ok(cents(500)));
    }

    #[rstest]
    #[tokio::test]
    async fn withdrawing_entire_balance_reaches_zero(store: AccountStore) {
        assert_eq!(store.withdraw("12345", cents(500)).await, Ok(Cents::ZERO));
    }

    #[rstest]
    #[case(0)]
    #[case(-1)]
    #[case(-5_000)]
    #[tokio::test]
    async fn non_positive_amounts_are_rejected(store: AccountStore, #[case] amount: i64) {
        let amount = Cents::new(amount);
        assert_eq!(
            store.deposit("12345", amount).await,
            Err(AppError::non_positive_amount())
        );
        assert_eq!(
            store.withdraw("12345", amount).await,
            Err(AppError::non_positive_amount())
        );
        assert_eq!(store.get_balance("12345").await, Ok(cents(500)));
    }

    #[rstest]
    #[tokio::test]
    async fn unknown_account_is_checked_before_amount(store: AccountStore) {
        assert_eq!(store.get_balance("99999").await, Err(AppError::AccountNotFound));
        assert_eq!(
            store.deposit("99999", Cents::ZERO).await,
            Err(AppError::AccountNotFound)
        );
        assert_eq!(
            store.withdraw("99999", cents(1)).await,
            Err(AppError::AccountNotFound)
        );
        assert_eq!(store.account_count(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn non_positive_amount_is_checked_before_funds(store: AccountStore) {
        assert_eq!(
            store.withdraw("12345", Cents::new(-100_000)).await,
            Err(AppError::non_positive_amount())
        );
    }

    #[tokio::test]
    async fn deposit_overflow_is_rejected() {
        let store = AccountStore::from_seed([("max".to_string(), Cents::new(i64::MAX))]);
        assert_eq!(
            store.deposit("max", Cents::new(1)).await,
            Err(AppError::invalid_amount())
        );
        assert_eq!(store.get_balance("max").await, Ok(Cents::new(i64::MAX)));
    }

    #[tokio::test]
    async fn duplicate_seed_keeps_last_balance() {
        let store = AccountStore::from_seed([
            ("1".to_string(), cents(5)),
            ("1".to_string(), cents(7)),
        ]);
        assert_eq!(store.account_count(), 1);
        assert_eq!(store.get_balance("1").await, Ok(cents(7)));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn concurrent_withdrawals_never_double_spend() {
        const WITHDRAWALS: i64 = 100;
        let store = AccountStore::from_seed([("12345".to_string(), cents(500))]);
        let share = Cents::new(50_000 / WITHDRAWALS);

        let handles: Vec<_> = (0..WITHDRAWALS)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.withdraw("12345", share).await })
            })
            .collect();

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                successes += 1;
            }
        }

        assert_eq!(successes, WITHDRAWALS);
        assert_eq!(store.get_balance("12345").await, Ok(Cents::ZERO));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn oversubscribed_withdrawals_stop_at_zero() {
        let store = AccountStore::from_seed([("12345".to_string(), cents(10))]);

        let handles: Vec<_> = (0..50)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.withdraw("12345", cents(1)).await })
            })
            .collect();

        let mut successes = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(balance) => {
                    assert!(balance >= Cents::ZERO);
                    successes += 1;
                }
                Err(error) => assert_eq!(error, AppError::InsufficientFunds),
            }
        }

        assert_eq!(successes, 10);
        assert_eq!(store.get_balance("12345").await, Ok(Cents::ZERO));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn concurrent_deposits_are_not_lost() {
        let store = AccountStore::from_seed([("67890".to_string(), cents(1000))]);

        let handles: Vec<_> = (0..200)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.deposit("67890", Cents::new(1)).await })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(
            store.get_balance("67890").await,
            Ok(Cents::new(100_200))
        );
    }
}
