//! The persistent state of the application: profile, settings, ledger and pending
//! notifications, stored as JSON documents under the spendwise home.

use crate::model::{AppSettings, Expense, Ledger, Notifications, PartialExpense, UserProfile};
use crate::{utils, Home, Result};
use anyhow::{bail, Context};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use tracing::debug;

/// In-memory snapshot of every persisted store.
///
/// Loading is lenient: a missing or malformed document is treated as "no data" and
/// replaced with its default, never surfaced as an error. Writing goes the other way:
/// the stores persist as a unit, so whenever one changes `persist` rewrites every
/// document.
#[derive(Debug, Clone)]
pub struct Store {
    home: Home,
    profile: Option<UserProfile>,
    settings: AppSettings,
    ledger: Ledger,
    notifications: Notifications,
}

impl Store {
    /// Loads the snapshot from disk, applying the ledger retention filter as of
    /// `today`. Entries older than two calendar months are dropped here, on load, not
    /// when records are added.
    pub async fn load(home: Home, today: NaiveDate) -> Self {
        let profile = read_document::<UserProfile>(home.profile()).await;
        let settings = read_document::<AppSettings>(home.settings())
            .await
            .unwrap_or_default();
        let ledger = read_document::<Ledger>(home.ledger())
            .await
            .unwrap_or_default()
            .retained(today);
        let notifications = read_document::<Notifications>(home.notifications())
            .await
            .unwrap_or_default();
        Self {
            home,
            profile,
            settings,
            ledger,
            notifications,
        }
    }

    /// Rewrites every document. The profile document is only written once a profile
    /// exists.
    pub async fn persist(&self) -> Result<()> {
        if let Some(profile) = &self.profile {
            write_document(self.home.profile(), profile).await?;
        }
        write_document(self.home.settings(), &self.settings).await?;
        write_document(self.home.ledger(), &self.ledger).await?;
        write_document(self.home.notifications(), &self.notifications).await?;
        Ok(())
    }

    /// Clears every persisted document and resets the in-memory state to the
    /// pre-registration defaults.
    pub async fn reset(&mut self) -> Result<()> {
        self.profile = None;
        self.settings = AppSettings::default();
        self.ledger = Ledger::default();
        self.notifications = Notifications::default();
        for path in [
            self.home.profile(),
            self.home.settings(),
            self.home.ledger(),
            self.home.notifications(),
        ] {
            utils::remove(path).await?;
        }
        Ok(())
    }

    /// Registers the user: stores the profile and derives the notification phone
    /// number from the mobile. Fails if a profile already exists — the profile is
    /// immutable and has no edit flow.
    pub fn register(&mut self, profile: UserProfile) -> Result<()> {
        if self.profile.is_some() {
            bail!("A profile is already registered. Run `spendwise reset` to start over");
        }
        self.settings.set_phone_number(profile.phone_number());
        self.profile = Some(profile);
        Ok(())
    }

    /// Prepends a new expense built from `partial` and returns the created record.
    pub fn add_expense(&mut self, partial: PartialExpense, today: NaiveDate) -> &Expense {
        self.ledger.add(partial, today)
    }

    pub fn home(&self) -> &Home {
        &self.home
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut AppSettings {
        &mut self.settings
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut Notifications {
        &mut self.notifications
    }
}

/// Reads and parses one document, mapping absence or malformation to `None`.
async fn read_document<T>(path: &Path) -> Option<T>
where
    T: DeserializeOwned,
{
    match utils::deserialize::<T>(path).await {
        Ok(value) => Some(value),
        Err(e) => {
            debug!("Treating {} as empty: {e:#}", path.display());
            None
        }
    }
}

async fn write_document<T>(path: &Path, value: &T) -> Result<()>
where
    T: Serialize,
{
    let data = serde_json::to_string_pretty(value).context("Unable to serialize document")?;
    utils::write(path, data).await
}
