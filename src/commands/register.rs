use crate::commands::Out;
use crate::model::UserProfile;
use crate::{Result, Store};

/// Creates the user profile and links the SMS notification phone number.
///
/// The mobile number must be 10 digits starting with 6-9. Registration happens once;
/// running it again fails until the data is reset.
///
/// # Errors
/// - Returns an error if the mobile number does not match the expected pattern. No
///   profile is created in that case.
/// - Returns an error if a profile already exists.
/// - Returns an error if the stores cannot be written.
pub async fn register(mut store: Store, name: &str, mobile: &str) -> Result<Out<UserProfile>> {
    let profile = UserProfile::new(name, mobile)?;
    store.register(profile.clone())?;
    store.persist().await?;
    let message = format!(
        "Welcome, {}! Spending alerts will go to {}",
        profile.name(),
        store.settings().phone_number()
    );
    Ok(Out::new(message, profile))
}
