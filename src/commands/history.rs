use crate::commands::{require_profile, Out};
use crate::model::Expense;
use crate::{Result, Store};

/// Lists the retained ledger, most recent first.
///
/// The load already applied the two-month retention filter; persisting here writes
/// the pruned ledger back so old entries do not linger on disk.
pub async fn history(store: Store) -> Result<Out<Vec<Expense>>> {
    require_profile(&store)?;
    store.persist().await?;

    if store.ledger().is_empty() {
        return Ok(Out::new(
            "No expenses found. Start tracking!",
            Vec::new(),
        ));
    }

    let mut lines = vec![format!(
        "Recent transactions, past 2 months ({}):",
        store.ledger().len()
    )];
    for expense in store.ledger().expenses() {
        let what = if expense.description().is_empty() {
            expense.category().to_string()
        } else {
            expense.description().to_string()
        };
        lines.push(format!(
            "{}  {:>12}  {}",
            expense.date().format("%b %d, %Y"),
            expense.amount().to_string(),
            what
        ));
    }
    Ok(Out::new(
        lines.join("\n"),
        store.ledger().expenses().to_vec(),
    ))
}
