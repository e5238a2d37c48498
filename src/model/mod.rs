//! Types that represent the core data model, such as `Expense` and `AppSettings`.
mod amount;
mod category;
mod expense;
mod ledger;
mod notifications;
mod profile;
mod settings;

pub use amount::Amount;
pub use category::Category;
pub use expense::{Expense, PartialExpense};
pub use ledger::Ledger;
pub use notifications::Notifications;
pub use profile::{is_valid_mobile, UserProfile};
pub use settings::AppSettings;
