use crate::Result;
use anyhow::bail;
use serde::{Deserialize, Serialize};

/// The registered user identity.
///
/// Created once at registration and immutable afterwards; there is no edit flow. Only
/// a full reset removes it.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct UserProfile {
    name: String,
    mobile: String,
}

impl UserProfile {
    /// Validates the mobile number and creates the profile.
    ///
    /// # Errors
    /// Returns an error when `mobile` is not a 10-digit Indian mobile number: digits
    /// only, starting with 6-9.
    pub fn new(name: impl Into<String>, mobile: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let mobile = mobile.into();
        if !is_valid_mobile(&mobile) {
            bail!("'{mobile}' is not a valid mobile number: expected 10 digits starting with 6-9");
        }
        Ok(Self { name, mobile })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mobile(&self) -> &str {
        &self.mobile
    }

    /// The SMS notification number derived from the mobile at registration.
    pub fn phone_number(&self) -> String {
        format!("+91 {}", self.mobile)
    }
}

/// A valid mobile number has exactly ten ASCII digits and starts with 6-9.
pub fn is_valid_mobile(mobile: &str) -> bool {
    mobile.len() == 10
        && mobile.chars().all(|c| c.is_ascii_digit())
        && matches!(mobile.chars().next(), Some('6'..='9'))
}
