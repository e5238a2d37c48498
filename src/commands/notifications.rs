use crate::commands::{require_profile, Out};
use crate::{Result, Store};

/// Shows the most recent pending alert, or clears the backlog with `dismiss`.
///
/// Older alerts stay queued behind the surfaced one but are never shown; dismissing
/// removes all of them, not just the one displayed.
pub async fn notifications(mut store: Store, dismiss: bool) -> Result<Out<String>> {
    require_profile(&store)?;

    if dismiss {
        let count = store.notifications().len();
        store.notifications_mut().dismiss_all();
        store.persist().await?;
        return Ok(format!("Dismissed {count} notification(s)").into());
    }

    store.persist().await?;
    match store.notifications().latest() {
        Some(latest) => {
            let latest = latest.to_string();
            Ok(Out::new(latest.clone(), latest))
        }
        None => Ok("No pending notifications".into()),
    }
}
