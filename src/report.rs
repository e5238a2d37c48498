//! Read-side projections over the ledger: the spending-limit check and the dashboard
//! aggregates. Nothing here holds state; everything is recomputed from the current
//! ledger on each call.

use crate::model::{Amount, Ledger};
use chrono::{Datelike, Days, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

/// Weekday labels in dashboard order.
pub const DAYS_OF_WEEK: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// One weekday bucket of the weekly breakdown.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct DayTotal {
    pub day: &'static str,
    pub amount: Amount,
}

/// One calendar-month bucket of the monthly summary.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct MonthSummary {
    pub month: String,
    pub total: Amount,
    pub savings: Amount,
}

/// Checks the running total against the weekly limit.
///
/// The total is the sum over the entire retained ledger, not a calendar or rolling
/// week — that is the inherited contract of this check, bounded in practice by the
/// two-month retention window. `check_limit_weekly` is the rolling-window variant.
/// Returns the alert text when the total strictly exceeds `limit`.
pub fn check_limit(ledger: &Ledger, limit: Amount, phone: &str) -> Option<String> {
    alert(ledger.total(), limit, phone)
}

/// Rolling-window variant of `check_limit`: only expenses from the trailing seven
/// days (up to and including `today`) count toward the total.
pub fn check_limit_weekly(
    ledger: &Ledger,
    limit: Amount,
    phone: &str,
    today: NaiveDate,
) -> Option<String> {
    let start = week_start(today);
    let total = ledger
        .expenses()
        .iter()
        .filter(|e| e.date() > start && e.date() <= today)
        .map(|e| e.amount())
        .sum();
    alert(total, limit, phone)
}

fn alert(total: Amount, limit: Amount, phone: &str) -> Option<String> {
    (total.value() > limit.value()).then(|| {
        format!(
            "ALERT: Weekly limit of ₹{} exceeded! SMS sent to {phone}",
            limit.value().normalize()
        )
    })
}

/// Buckets the trailing seven days of spending by weekday label.
///
/// Every weekday appears in the result, Monday first, with a zero amount when nothing
/// was spent that day.
pub fn weekly_breakdown(ledger: &Ledger, today: NaiveDate) -> Vec<DayTotal> {
    let start = week_start(today);
    let mut totals = [Decimal::ZERO; 7];
    for e in ledger.expenses() {
        if e.date() > start && e.date() <= today {
            totals[e.date().weekday().num_days_from_monday() as usize] += e.amount().value();
        }
    }
    DAYS_OF_WEEK
        .iter()
        .zip(totals)
        .map(|(&day, total)| DayTotal {
            day,
            amount: Amount::new(total),
        })
        .collect()
}

/// Buckets the ledger by calendar month, most recent month first.
///
/// `savings` is the configured monthly income baseline minus the month's total; it
/// goes negative when a month overspends the baseline.
pub fn monthly_summary(ledger: &Ledger, monthly_income: Amount) -> Vec<MonthSummary> {
    let mut months: std::collections::BTreeMap<(i32, u32), Decimal> =
        std::collections::BTreeMap::new();
    for e in ledger.expenses() {
        *months
            .entry((e.date().year(), e.date().month()))
            .or_default() += e.amount().value();
    }
    months
        .into_iter()
        .rev()
        .map(|((year, month), total)| MonthSummary {
            month: month_label(year, month),
            total: Amount::new(total),
            savings: Amount::new(monthly_income.value() - total),
        })
        .collect()
}

fn month_label(year: i32, month: u32) -> String {
    match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(first) => first.format("%b %Y").to_string(),
        None => format!("{month} {year}"),
    }
}

fn week_start(today: NaiveDate) -> NaiveDate {
    today.checked_sub_days(Days::new(7)).unwrap_or(NaiveDate::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PartialExpense;
    use std::str::FromStr;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ledger_with(entries: &[(&str, NaiveDate)]) -> Ledger {
        let mut ledger = Ledger::default();
        for (amount, d) in entries {
            ledger.add(
                PartialExpense {
                    amount: Some(Amount::from_str(amount).unwrap()),
                    date: Some(*d),
                    ..PartialExpense::default()
                },
                *d,
            );
        }
        ledger
    }

    #[test]
    fn test_check_limit_exceeded() {
        let ledger = ledger_with(&[("6000", date(2026, 8, 5))]);
        let limit = Amount::from_str("5000").unwrap();
        let alert = check_limit(&ledger, limit, "+91 9876543210").unwrap();
        assert_eq!(
            alert,
            "ALERT: Weekly limit of ₹5000 exceeded! SMS sent to +91 9876543210"
        );
    }

    #[test]
    fn test_check_limit_not_exceeded() {
        let ledger = ledger_with(&[("100", date(2026, 8, 5))]);
        let limit = Amount::from_str("5000").unwrap();
        assert!(check_limit(&ledger, limit, "+91 9876543210").is_none());
    }

    #[test]
    fn test_check_limit_boundary_is_strict() {
        // Exactly at the limit: no alert. One paisa over: alert.
        let at = ledger_with(&[("5000", date(2026, 8, 5))]);
        let over = ledger_with(&[("5000.01", date(2026, 8, 5))]);
        let limit = Amount::from_str("5000").unwrap();
        assert!(check_limit(&at, limit, "p").is_none());
        assert!(check_limit(&over, limit, "p").is_some());
    }

    #[test]
    fn test_check_limit_sums_whole_ledger() {
        // Two old-but-retained entries push the running total over the limit even
        // though neither falls in the current week.
        let ledger = ledger_with(&[
            ("3000", date(2026, 7, 1)),
            ("3000", date(2026, 7, 15)),
        ]);
        let limit = Amount::from_str("5000").unwrap();
        assert!(check_limit(&ledger, limit, "p").is_some());
    }

    #[test]
    fn test_check_limit_weekly_ignores_older_entries() {
        let today = date(2026, 8, 7);
        let ledger = ledger_with(&[
            ("3000", date(2026, 7, 1)),
            ("3000", date(2026, 7, 15)),
        ]);
        let limit = Amount::from_str("5000").unwrap();
        assert!(check_limit_weekly(&ledger, limit, "p", today).is_none());
    }

    #[test]
    fn test_check_limit_weekly_counts_recent_entries() {
        let today = date(2026, 8, 7);
        let ledger = ledger_with(&[
            ("3000", date(2026, 8, 2)),
            ("3000", date(2026, 8, 6)),
        ]);
        let limit = Amount::from_str("5000").unwrap();
        assert!(check_limit_weekly(&ledger, limit, "p", today).is_some());
    }

    #[test]
    fn test_weekly_breakdown_has_all_days_in_order() {
        let breakdown = weekly_breakdown(&Ledger::default(), date(2026, 8, 7));
        let days: Vec<&str> = breakdown.iter().map(|d| d.day).collect();
        assert_eq!(days, DAYS_OF_WEEK);
        assert!(breakdown.iter().all(|d| d.amount.is_zero()));
    }

    #[test]
    fn test_weekly_breakdown_buckets_by_weekday() {
        // 2026-08-07 is a Friday; 2026-08-05 a Wednesday.
        let today = date(2026, 8, 7);
        let ledger = ledger_with(&[
            ("100", date(2026, 8, 5)),
            ("50", date(2026, 8, 5)),
            ("75", date(2026, 8, 7)),
        ]);
        let breakdown = weekly_breakdown(&ledger, today);
        assert_eq!(breakdown[2].day, "Wednesday");
        assert_eq!(breakdown[2].amount.to_string(), "₹150.00");
        assert_eq!(breakdown[4].day, "Friday");
        assert_eq!(breakdown[4].amount.to_string(), "₹75.00");
        assert!(breakdown[0].amount.is_zero());
    }

    #[test]
    fn test_weekly_breakdown_excludes_entries_outside_window() {
        let today = date(2026, 8, 7);
        let ledger = ledger_with(&[
            ("100", date(2026, 7, 20)), // older than 7 days
            ("25", date(2026, 8, 6)),
        ]);
        let breakdown = weekly_breakdown(&ledger, today);
        let total: Amount = breakdown.iter().map(|d| d.amount).sum();
        assert_eq!(total.to_string(), "₹25.00");
    }

    #[test]
    fn test_monthly_summary_most_recent_first() {
        let ledger = ledger_with(&[
            ("100", date(2026, 6, 15)),
            ("200", date(2026, 7, 10)),
            ("300", date(2026, 8, 1)),
        ]);
        let summary = monthly_summary(&ledger, Amount::default());
        let months: Vec<&str> = summary.iter().map(|m| m.month.as_str()).collect();
        assert_eq!(months, ["Aug 2026", "Jul 2026", "Jun 2026"]);
    }

    #[test]
    fn test_monthly_summary_totals_and_savings() {
        let income = Amount::from_str("10000").unwrap();
        let ledger = ledger_with(&[
            ("2500", date(2026, 8, 1)),
            ("1500", date(2026, 8, 20)),
            ("12000", date(2026, 7, 5)),
        ]);
        let summary = monthly_summary(&ledger, income);
        assert_eq!(summary[0].month, "Aug 2026");
        assert_eq!(summary[0].total.to_string(), "₹4,000.00");
        assert_eq!(summary[0].savings.to_string(), "₹6,000.00");
        // An overspent month has negative savings.
        assert_eq!(summary[1].month, "Jul 2026");
        assert_eq!(summary[1].savings.to_string(), "-₹2,000.00");
    }

    #[test]
    fn test_monthly_summary_empty_ledger() {
        assert!(monthly_summary(&Ledger::default(), Amount::default()).is_empty());
    }
}
