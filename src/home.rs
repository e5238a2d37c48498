use crate::Result;
use anyhow::Context;
use std::path::{Path, PathBuf};
use tokio::fs;

/// The `Home` object represents the file paths of the `$SPENDWISE_HOME` directory:
/// one JSON document per persisted store.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Home {
    root: PathBuf,
    profile: PathBuf,
    ledger: PathBuf,
    settings: PathBuf,
    notifications: PathBuf,
}

impl Home {
    /// This will create the `spendwise_home` directory, if it does not exist, and
    /// canonicalize itself.
    pub async fn new(spendwise_home: impl Into<PathBuf>) -> Result<Self> {
        let maybe_relative = spendwise_home.into();
        make_dir(&maybe_relative)
            .await
            .context("Unable to create spendwise home directory")?;
        let root = fs::canonicalize(&maybe_relative).await.with_context(|| {
            format!(
                "Unable to canonicalize the path {}",
                maybe_relative.to_string_lossy()
            )
        })?;
        Ok(Self {
            profile: root.join("profile.json"),
            ledger: root.join("ledger.json"),
            settings: root.join("settings.json"),
            notifications: root.join("notifications.json"),
            root,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn profile(&self) -> &Path {
        &self.profile
    }

    pub fn ledger(&self) -> &Path {
        &self.ledger
    }

    pub fn settings(&self) -> &Path {
        &self.settings
    }

    pub fn notifications(&self) -> &Path {
        &self.notifications
    }
}

async fn make_dir(p: &Path) -> Result<()> {
    fs::create_dir_all(p)
        .await
        .with_context(|| format!("Unable to create directory at {}", p.to_string_lossy()))
}

#[tokio::test]
async fn test_home() {
    use tempfile::TempDir;
    let dir = TempDir::new().unwrap();
    let home_dir = dir.path().to_owned();
    let home = Home::new(home_dir).await.unwrap();
    assert!(home.root().is_dir());
    assert!(home.profile().ends_with("profile.json"));
    assert!(home.ledger().ends_with("ledger.json"));
    assert!(home.settings().ends_with("settings.json"));
    assert!(home.notifications().ends_with("notifications.json"));
}

#[tokio::test]
async fn test_home_creates_missing_directory() {
    use tempfile::TempDir;
    let dir = TempDir::new().unwrap();
    let home_dir = dir.path().join("nested").join("spendwise");
    let home = Home::new(home_dir).await.unwrap();
    assert!(home.root().is_dir());
}
