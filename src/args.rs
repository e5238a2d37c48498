//! These structs provide the CLI interface for the spendwise CLI.

use crate::model::{Amount, Category, PartialExpense};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::error;
use tracing_subscriber::filter::LevelFilter;

/// spendwise: a command-line personal expense tracker.
///
/// Track day-to-day spending from your terminal: register a profile once, add
/// expenses manually or from a bill-scanner result file, and review weekly and
/// monthly summaries. When cumulative spending exceeds your configured weekly limit,
/// an alert is raised for the phone number linked to your profile.
///
/// All data is stored locally under $SPENDWISE_HOME (default ~/spendwise) as plain
/// JSON files. Only the most recent two months of history are retained.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn new(common: Common, command: Command) -> Self {
        Self { common, command }
    }

    pub fn common(&self) -> &Common {
        &self.common
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Register your profile. Run this first.
    ///
    /// Registration stores your name and mobile number and links the mobile to the
    /// SMS alert notifications. The mobile must be a 10-digit number starting with
    /// 6-9. You register once; use `reset` to start over from scratch.
    Register(RegisterArgs),

    /// Record an expense and run the spending-limit check.
    Add(AddArgs),

    /// Import an expense from a bill-scanner result file.
    ///
    /// The bill scanner is an external tool. This command reads the JSON document it
    /// produced ({"amount", "category", "description", "date"}, all optional) and
    /// records it as a regular expense. If the file cannot be read or parsed, nothing
    /// is recorded and you can fall back to `add`.
    Scan(ScanArgs),

    /// List the expenses recorded over the past two months.
    History,

    /// Show the weekly breakdown and monthly summary.
    Dashboard,

    /// Show or change application settings.
    Settings(SettingsArgs),

    /// Show the pending spending-limit alert, or dismiss all of them.
    Notifications(NotificationsArgs),

    /// Delete the profile, ledger, settings and notifications, returning the app to
    /// its unregistered state.
    Reset,
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG. See the tracing-subscriber crate for
    /// instructions.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// The directory where spendwise data is held. Defaults to ~/spendwise
    #[arg(long, env = "SPENDWISE_HOME", default_value_t = default_spendwise_home())]
    spendwise_home: DisplayPath,
}

impl Common {
    pub fn new(log_level: LevelFilter, spendwise_home: PathBuf) -> Self {
        Self {
            log_level,
            spendwise_home: spendwise_home.into(),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn spendwise_home(&self) -> &DisplayPath {
        &self.spendwise_home
    }
}

/// Args for the `spendwise register` command.
#[derive(Debug, Parser, Clone)]
pub struct RegisterArgs {
    /// Your display name.
    #[arg(long)]
    name: String,

    /// Your mobile number: 10 digits, starting with 6-9.
    #[arg(long)]
    mobile: String,
}

impl RegisterArgs {
    pub fn new(name: impl Into<String>, mobile: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mobile: mobile.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mobile(&self) -> &str {
        &self.mobile
    }
}

/// Args for the `spendwise add` command.
#[derive(Debug, Parser, Clone)]
pub struct AddArgs {
    /// The amount spent, in rupees. Non-numeric input counts as 0.
    #[arg(long)]
    amount: Option<Amount>,

    /// The spending category. Defaults to "other".
    #[arg(long, value_enum)]
    category: Option<Category>,

    /// What the expense was for.
    #[arg(long)]
    description: Option<String>,

    /// The expense date (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Check the limit against the trailing seven days instead of the whole
    /// retained ledger.
    #[arg(long)]
    rolling_week: bool,
}

impl AddArgs {
    pub fn new(
        amount: Option<Amount>,
        category: Option<Category>,
        description: Option<String>,
        date: Option<NaiveDate>,
        rolling_week: bool,
    ) -> Self {
        Self {
            amount,
            category,
            description,
            date,
            rolling_week,
        }
    }

    pub fn rolling_week(&self) -> bool {
        self.rolling_week
    }

    /// The expense fields provided on the command line, ready for the ledger.
    pub fn partial(&self) -> PartialExpense {
        PartialExpense {
            amount: self.amount,
            category: self.category,
            description: self.description.clone(),
            date: self.date,
        }
    }
}

/// Args for the `spendwise scan` command.
#[derive(Debug, Parser, Clone)]
pub struct ScanArgs {
    /// The scanner result file to import.
    file: PathBuf,
}

impl ScanArgs {
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self { file: file.into() }
    }

    pub fn file(&self) -> &Path {
        &self.file
    }
}

/// Args for the `spendwise settings` command.
#[derive(Debug, Parser, Clone)]
pub struct SettingsArgs {
    #[command(subcommand)]
    action: SettingsSubcommand,
}

impl SettingsArgs {
    pub fn new(action: SettingsSubcommand) -> Self {
        Self { action }
    }

    pub fn action(&self) -> &SettingsSubcommand {
        &self.action
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum SettingsSubcommand {
    /// Show the current settings.
    Show,

    /// Set the weekly spending limit, in rupees. Negative or non-numeric input
    /// counts as 0.
    Limit(AmountArg),

    /// Set the monthly income baseline used for the savings figure. Negative or
    /// non-numeric input counts as 0.
    Income(AmountArg),
}

/// A single positional rupee amount.
#[derive(Debug, Parser, Clone)]
pub struct AmountArg {
    /// The amount, in rupees.
    #[arg(allow_negative_numbers = true)]
    amount: Amount,
}

impl AmountArg {
    pub fn new(amount: Amount) -> Self {
        Self { amount }
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }
}

/// Args for the `spendwise notifications` command.
#[derive(Debug, Parser, Clone)]
pub struct NotificationsArgs {
    /// Clear every pending alert instead of showing the latest one.
    #[arg(long)]
    dismiss: bool,
}

impl NotificationsArgs {
    pub fn new(dismiss: bool) -> Self {
        Self { dismiss }
    }

    pub fn dismiss(&self) -> bool {
        self.dismiss
    }
}

fn default_spendwise_home() -> DisplayPath {
    DisplayPath(match dirs::home_dir() {
        Some(home) => home.join("spendwise"),
        None => {
            error!(
                "There was an error when trying to get your home directory. You can get around \
                this by providing --spendwise-home or SPENDWISE_HOME instead of relying on the \
                default spendwise home directory. If you continue using the program right now, \
                you may have problems!",
            );
            PathBuf::from("spendwise")
        }
    })
}

#[derive(Debug, Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DisplayPath(PathBuf);

impl From<PathBuf> for DisplayPath {
    fn from(value: PathBuf) -> Self {
        DisplayPath(value)
    }
}

impl Deref for DisplayPath {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for DisplayPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl Display for DisplayPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_string_lossy())
    }
}

impl FromStr for DisplayPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(PathBuf::from(s)))
    }
}

impl DisplayPath {
    pub fn new(path: PathBuf) -> Self {
        Self(path)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}
