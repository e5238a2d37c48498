use crate::commands::{require_profile, Out};
use crate::report::{self, DayTotal, MonthSummary};
use crate::{Result, Store};
use chrono::NaiveDate;
use serde::Serialize;

/// The dashboard aggregates: the weekly breakdown and the monthly summary.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub weekly: Vec<DayTotal>,
    pub monthly: Vec<MonthSummary>,
}

/// Renders the weekly breakdown and monthly summary for the current ledger.
pub async fn dashboard(store: Store, today: NaiveDate) -> Result<Out<DashboardView>> {
    require_profile(&store)?;
    store.persist().await?;

    let weekly = report::weekly_breakdown(store.ledger(), today);
    let monthly = report::monthly_summary(store.ledger(), store.settings().monthly_income());

    let mut lines = vec![String::from("This week:")];
    for day in &weekly {
        lines.push(format!("  {:<10} {:>12}", day.day, day.amount.to_string()));
    }
    lines.push(String::from("Monthly summary:"));
    if monthly.is_empty() {
        lines.push(String::from("  (no expenses recorded)"));
    }
    for month in &monthly {
        lines.push(format!(
            "  {:<10} spent {:>12}   savings {:>12}",
            month.month,
            month.total.to_string(),
            month.savings.to_string()
        ));
    }

    Ok(Out::new(lines.join("\n"), DashboardView { weekly, monthly }))
}
