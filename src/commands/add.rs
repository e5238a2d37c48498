use crate::commands::{require_profile, Out};
use crate::model::{Expense, PartialExpense};
use crate::{report, Result, Store};
use chrono::NaiveDate;

/// Records a new expense and runs the spending-limit check on the updated ledger.
///
/// Missing fields take their defaults: amount 0, category `Other`, empty description,
/// today's date. The check runs on the ledger including the record just added; when
/// the running total exceeds the weekly limit, the alert is queued as a notification
/// and echoed in the command output. With `rolling_week` the check counts only the
/// trailing seven days instead of the whole retained ledger.
pub async fn add(
    mut store: Store,
    partial: PartialExpense,
    rolling_week: bool,
    today: NaiveDate,
) -> Result<Out<Expense>> {
    require_profile(&store)?;
    let expense = store.add_expense(partial, today).clone();

    let settings = store.settings();
    let alert = if rolling_week {
        report::check_limit_weekly(
            store.ledger(),
            settings.weekly_limit(),
            settings.phone_number(),
            today,
        )
    } else {
        report::check_limit(store.ledger(), settings.weekly_limit(), settings.phone_number())
    };
    if let Some(alert) = &alert {
        store.notifications_mut().push(alert.clone());
    }
    store.persist().await?;

    let mut message = format!(
        "Recorded {} for {} on {}",
        expense.amount(),
        expense.category(),
        expense.date()
    );
    if let Some(alert) = alert {
        message.push('\n');
        message.push_str(&alert);
    }
    Ok(Out::new(message, expense))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use crate::test::{date, partial_amount, TestEnv};

    #[tokio::test]
    async fn test_add_records_expense() {
        let env = TestEnv::new().await;
        let today = date(2026, 8, 7);
        env.registered_store(today).await;
        let partial = PartialExpense {
            category: Some(Category::Food),
            description: Some("lunch".to_string()),
            ..partial_amount("450")
        };
        let out = add(env.store(today).await, partial, false, today)
            .await
            .unwrap();
        assert!(out.message().contains("₹450.00"));
        assert!(out.message().contains("Food"));

        let reloaded = env.store(today).await;
        assert_eq!(reloaded.ledger().len(), 1);
        assert_eq!(reloaded.ledger().expenses()[0].description(), "lunch");
    }

    #[tokio::test]
    async fn test_add_over_limit_queues_alert() {
        let env = TestEnv::new().await;
        let today = date(2026, 8, 7);
        env.registered_store(today).await;
        let out = add(env.store(today).await, partial_amount("6000"), false, today)
            .await
            .unwrap();
        assert!(out.message().contains("Weekly limit of ₹5000 exceeded"));
        assert!(out.message().contains("+91 9876543210"));

        let reloaded = env.store(today).await;
        assert_eq!(reloaded.notifications().len(), 1);
    }

    #[tokio::test]
    async fn test_add_under_limit_is_quiet() {
        let env = TestEnv::new().await;
        let today = date(2026, 8, 7);
        env.registered_store(today).await;
        let out = add(env.store(today).await, partial_amount("100"), false, today)
            .await
            .unwrap();
        assert!(!out.message().contains("ALERT"));

        let reloaded = env.store(today).await;
        assert!(reloaded.notifications().is_empty());
    }

    #[tokio::test]
    async fn test_add_sums_across_invocations() {
        let env = TestEnv::new().await;
        let today = date(2026, 8, 7);
        env.registered_store(today).await;
        add(env.store(today).await, partial_amount("3000"), false, today)
            .await
            .unwrap();
        let out = add(env.store(today).await, partial_amount("3000"), false, today)
            .await
            .unwrap();
        assert!(out.message().contains("ALERT"));
    }

    #[tokio::test]
    async fn test_add_rolling_week_ignores_old_spending() {
        let env = TestEnv::new().await;
        let today = date(2026, 8, 7);
        env.registered_store(today).await;
        // A month-old expense over the limit by itself.
        let old = PartialExpense {
            date: Some(date(2026, 7, 1)),
            ..partial_amount("6000")
        };
        add(env.store(today).await, old, false, today).await.unwrap();

        // The rolling-week check only sees this week's 100.
        let out = add(
            env.store(today).await,
            partial_amount("100"),
            true,
            today,
        )
        .await
        .unwrap();
        assert!(!out.message().contains("ALERT"));
    }

    #[tokio::test]
    async fn test_add_requires_registration() {
        let env = TestEnv::new().await;
        let today = date(2026, 8, 7);
        let result = add(env.store(today).await, partial_amount("100"), false, today).await;
        assert!(result.is_err());
    }
}
