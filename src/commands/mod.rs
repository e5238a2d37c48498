//! Command handlers for the spendwise CLI.
//!
//! This module contains implementations for all CLI subcommands. Each handler loads
//! nothing itself: it receives the already-loaded [`Store`], mutates it, persists,
//! and describes the outcome through an [`Out`].

mod add;
mod dashboard;
mod history;
mod notifications;
mod register;
mod reset;
mod scan;
mod settings;

use crate::model::UserProfile;
use crate::{Result, Store};
use anyhow::bail;
use serde::Serialize;
use std::fmt::Debug;
use tracing::{debug, info};

pub use add::add;
pub use dashboard::{dashboard, DashboardView};
pub use history::history;
pub use notifications::notifications;
pub use register::register;
pub use reset::reset;
pub use scan::scan;
pub use settings::{settings_income, settings_limit, settings_show};

/// The output type for a command. This allows the command to return a consistent
/// message and, optionally, structured data.
#[derive(Debug, Clone, Serialize)]
pub struct Out<T>
where
    T: Serialize + Clone + Debug,
{
    /// A message that can be printed to the user regarding the outcome of the command
    /// execution.
    message: String,

    /// Any structured data that needs to be output from the call.
    structure: Option<T>,
}

impl<T, S> From<S> for Out<T>
where
    T: Debug + Clone + Serialize,
    S: Into<String>,
{
    fn from(value: S) -> Self {
        Out::new_message(value)
    }
}

impl<T> Out<T>
where
    T: Serialize + Clone + Debug,
{
    /// Create a new `Out` object that has `Some(structure)`.
    pub fn new<S>(message: S, structure: T) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
            structure: Some(structure),
        }
    }

    /// Create a new `Out` object that has `None` for `structure`.
    pub fn new_message<S>(message: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
            structure: None,
        }
    }

    /// Get the `message`.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the structured data stored in `structure`.
    pub fn structure(&self) -> Option<&T> {
        self.structure.as_ref()
    }

    /// Print the message to `info!` and the structured data (if it exists) as JSON to
    /// `debug!`.
    pub fn print(&self) {
        info!("{}", self.message);
        if let Some(structure) = self.structure() {
            if let Ok(json) = serde_json::to_string_pretty(structure) {
                debug!("Command output:\n\n{json}\n\n");
            }
        }
    }
}

/// Returns the registered profile, or fails with a pointer to `register`. Every
/// command except `register` and `reset` requires a profile.
pub(crate) fn require_profile(store: &Store) -> Result<&UserProfile> {
    match store.profile() {
        Some(profile) => Ok(profile),
        None => bail!(
            "No profile found. Run `spendwise register --name <name> --mobile <number>` first"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{date, TestEnv};

    #[test]
    fn test_out_message_only() {
        let out: Out<()> = "hello".into();
        assert_eq!(out.message(), "hello");
        assert!(out.structure().is_none());
    }

    #[test]
    fn test_out_with_structure() {
        let out = Out::new("hello", 42u32);
        assert_eq!(out.message(), "hello");
        assert_eq!(out.structure(), Some(&42));
    }

    #[tokio::test]
    async fn test_require_profile_fails_when_unregistered() {
        let env = TestEnv::new().await;
        let store = env.store(date(2026, 8, 7)).await;
        let result = require_profile(&store);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("spendwise register"));
    }

    #[tokio::test]
    async fn test_require_profile_returns_profile() {
        let env = TestEnv::new().await;
        let store = env.registered_store(date(2026, 8, 7)).await;
        assert_eq!(require_profile(&store).unwrap().name(), "Asha");
    }
}
