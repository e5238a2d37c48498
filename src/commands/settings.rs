use crate::commands::{require_profile, Out};
use crate::model::{Amount, AppSettings};
use crate::{Result, Store};

/// Shows the current settings.
pub async fn settings_show(store: Store) -> Result<Out<AppSettings>> {
    require_profile(&store)?;
    store.persist().await?;
    let settings = store.settings().clone();
    let phone = if settings.phone_number().is_empty() {
        "(not set)"
    } else {
        settings.phone_number()
    };
    let message = format!(
        "Weekly limit: {}\nSMS notifications: {}\nMonthly income baseline: {}",
        settings.weekly_limit(),
        phone,
        settings.monthly_income()
    );
    Ok(Out::new(message, settings))
}

/// Sets the weekly spending limit. Negative or non-numeric input has already been
/// coerced to zero by the argument parser, so this never rejects a value.
pub async fn settings_limit(mut store: Store, limit: Amount) -> Result<Out<AppSettings>> {
    require_profile(&store)?;
    store.settings_mut().set_weekly_limit(limit);
    store.persist().await?;
    Ok(Out::new(
        format!("Weekly limit set to {limit}"),
        store.settings().clone(),
    ))
}

/// Sets the monthly income baseline used for the savings figure.
pub async fn settings_income(mut store: Store, income: Amount) -> Result<Out<AppSettings>> {
    require_profile(&store)?;
    store.settings_mut().set_monthly_income(income);
    store.persist().await?;
    Ok(Out::new(
        format!("Monthly income baseline set to {income}"),
        store.settings().clone(),
    ))
}
