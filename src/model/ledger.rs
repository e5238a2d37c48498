//! The expense ledger: an ordered, append-and-prune collection of spending records.

use crate::model::{Amount, Expense, PartialExpense};
use chrono::{Months, NaiveDate};
use uuid::Uuid;

/// Number of calendar months of history kept by the retention filter.
const RETENTION_MONTHS: u32 = 2;

/// The ordered collection of expense records, most recent first.
///
/// The ledger is append-and-prune only: records are prepended by `add` and dropped by
/// `retained` when they age out of the two-month window. There is no update or delete.
#[derive(Default, Debug, Clone, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    expenses: Vec<Expense>,
}

impl Ledger {
    pub fn new(expenses: Vec<Expense>) -> Self {
        Self { expenses }
    }

    /// Applies the retention window: drops every record whose date is not strictly
    /// after `today` minus two calendar months. The order of the survivors is
    /// preserved.
    pub fn retained(self, today: NaiveDate) -> Self {
        let cutoff = retention_cutoff(today);
        Self {
            expenses: self
                .expenses
                .into_iter()
                .filter(|e| e.date > cutoff)
                .collect(),
        }
    }

    /// Creates a full record from `partial` and prepends it.
    ///
    /// Missing fields take their defaults: amount 0, category `Other`, empty
    /// description, and `today` for the date. A fresh id is generated for the record.
    /// Returns the created record so the caller can run the spending-limit check.
    pub fn add(&mut self, partial: PartialExpense, today: NaiveDate) -> &Expense {
        let expense = Expense {
            id: Uuid::new_v4(),
            amount: partial.amount.unwrap_or_default(),
            category: partial.category.unwrap_or_default(),
            description: partial.description.unwrap_or_default(),
            date: partial.date.unwrap_or(today),
        };
        self.expenses.insert(0, expense);
        &self.expenses[0]
    }

    /// Sum of all retained records.
    pub fn total(&self) -> Amount {
        self.expenses.iter().map(Expense::amount).sum()
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

/// The retention cutoff: dates at or before this are dropped on load.
pub(crate) fn retention_cutoff(today: NaiveDate) -> NaiveDate {
    today
        .checked_sub_months(Months::new(RETENTION_MONTHS))
        .unwrap_or(NaiveDate::MIN)
}
