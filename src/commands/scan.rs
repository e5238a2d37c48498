use crate::commands::{add, require_profile, Out};
use crate::model::{Expense, PartialExpense};
use crate::{utils, Result, Store};
use chrono::NaiveDate;
use std::path::Path;
use tracing::warn;

/// Imports an expense from a bill-scanner result file.
///
/// The scanner itself is an external tool; its output is a JSON document with
/// optional `amount`, `category`, `description` and `date` fields. A result that
/// cannot be read or parsed records nothing: the ledger is left untouched and the
/// user can fall back to manual entry. A usable result goes through the same path as
/// `add`, including the spending-limit check.
pub async fn scan(store: Store, file: &Path, today: NaiveDate) -> Result<Out<Expense>> {
    require_profile(&store)?;
    let partial: PartialExpense = match utils::deserialize(file).await {
        Ok(partial) => partial,
        Err(e) => {
            warn!("Ignoring unusable scan result: {e:#}");
            return Ok(Out::new_message(format!(
                "Could not read a scan result from {}. Nothing was recorded; use \
                 `spendwise add` to enter the expense manually",
                file.display()
            )));
        }
    };
    add(store, partial, false, today).await
}
