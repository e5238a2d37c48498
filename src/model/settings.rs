use crate::model::Amount;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The default weekly spending limit, in rupees, for a fresh install.
const DEFAULT_WEEKLY_LIMIT: i64 = 5000;

/// User-tunable application settings.
///
/// `weekly_limit` and `monthly_income` are mutable through the settings subcommand.
/// `phone_number` is set once, implicitly, at registration and is read-only after
/// that — it always reflects the mobile on the profile.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AppSettings {
    weekly_limit: Amount,
    phone_number: String,
    /// Baseline used to derive the monthly savings figure.
    #[serde(default)]
    monthly_income: Amount,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            weekly_limit: Amount::new(Decimal::from(DEFAULT_WEEKLY_LIMIT)),
            phone_number: String::new(),
            monthly_income: Amount::default(),
        }
    }
}

impl AppSettings {
    pub fn weekly_limit(&self) -> Amount {
        self.weekly_limit
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn monthly_income(&self) -> Amount {
        self.monthly_income
    }

    pub fn set_weekly_limit(&mut self, limit: Amount) {
        self.weekly_limit = limit;
    }

    pub fn set_monthly_income(&mut self, income: Amount) {
        self.monthly_income = income;
    }

    /// Set at registration only; there is no user-facing way to change it.
    pub(crate) fn set_phone_number(&mut self, phone_number: String) {
        self.phone_number = phone_number;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = AppSettings::default();
        assert_eq!(settings.weekly_limit().to_string(), "₹5,000.00");
        assert_eq!(settings.phone_number(), "");
        assert!(settings.monthly_income().is_zero());
    }

    #[test]
    fn test_round_trip() {
        let mut settings = AppSettings::default();
        settings.set_weekly_limit("7500".parse().unwrap());
        settings.set_phone_number("+91 9876543210".to_string());
        let json = serde_json::to_string(&settings).unwrap();
        let read: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, read);
    }

    #[test]
    fn test_missing_income_defaults_to_zero() {
        // Documents written before the income baseline existed still load.
        let json = r#"{"weekly_limit": "₹5,000.00", "phone_number": ""}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert!(settings.monthly_income().is_zero());
    }
}
