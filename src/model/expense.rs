use crate::model::{Amount, Category};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single spending record.
///
/// Records are append-only: once created they are never updated or deleted, only
/// dropped by the ledger's retention filter.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Expense {
    pub(crate) id: Uuid,
    pub(crate) amount: Amount,
    pub(crate) category: Category,
    pub(crate) description: String,
    pub(crate) date: NaiveDate,
}

impl Expense {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

/// The fields a producer can supply for a new expense.
///
/// There are two producers: the manual `add` command and the bill-scanner result file.
/// Missing fields take their documented defaults when the full record is created
/// (amount 0, category `Other`, empty description, today's date).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PartialExpense {
    #[serde(default)]
    pub amount: Option<Amount>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}
