use crate::commands::Out;
use crate::{Result, Store};

/// Clears all stored data: profile, settings, ledger and notifications.
///
/// After a reset the app is back at its unregistered state and the next command will
/// ask for registration. This works whether or not a profile exists.
pub async fn reset(mut store: Store) -> Result<Out<()>> {
    store.reset().await?;
    Ok("Cleared all spendwise data. Run `spendwise register` to start again".into())
}
