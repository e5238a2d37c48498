//! Shared test utilities for creating test environments.
//!
//! This module is only compiled when running tests (`#[cfg(test)]`).

use crate::model::{Amount, PartialExpense, UserProfile};
use crate::{Home, Store};
use chrono::NaiveDate;
use std::str::FromStr;
use tempfile::TempDir;

/// Test environment that sets up a spendwise home directory.
/// Holds TempDir to keep the directory alive for the duration of the test.
pub struct TestEnv {
    _temp_dir: TempDir,
    home: Home,
}

impl TestEnv {
    /// Creates a test environment with an empty home directory.
    pub async fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let home = Home::new(temp_dir.path().join("spendwise")).await.unwrap();
        Self {
            _temp_dir: temp_dir,
            home,
        }
    }

    /// Returns a clone of the Home.
    pub fn home(&self) -> Home {
        self.home.clone()
    }

    /// Loads the store snapshot as of `today`.
    pub async fn store(&self, today: NaiveDate) -> Store {
        Store::load(self.home(), today).await
    }

    /// Loads the store and registers the default test profile (Asha, 9876543210).
    pub async fn registered_store(&self, today: NaiveDate) -> Store {
        let mut store = self.store(today).await;
        store
            .register(UserProfile::new("Asha", "9876543210").unwrap())
            .unwrap();
        store.persist().await.unwrap();
        store
    }
}

/// A partial expense with just an amount, for tests that don't care about the rest.
pub fn partial_amount(amount: &str) -> PartialExpense {
    PartialExpense {
        amount: Some(Amount::from_str(amount).unwrap()),
        ..PartialExpense::default()
    }
}

/// Shorthand for constructing a date in tests.
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
