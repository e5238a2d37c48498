use chrono::Local;
use clap::Parser;
use spendwise::args::{Args, Command, SettingsSubcommand};
use spendwise::{commands, Home, Result, Store};
use std::process::ExitCode;
use tracing::{debug, error, trace};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    let log_level = args.common().log_level();
    init_logger(log_level);
    debug!("Log level set to {}", log_level.to_string().to_lowercase());

    match main_inner(args).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Exiting with error: {e}");
            ExitCode::FAILURE
        }
    }
}

pub async fn main_inner(args: Args) -> Result<()> {
    trace!("{args:?}");
    let home = Home::new(args.common().spendwise_home().path()).await?;
    let today = Local::now().date_naive();
    let store = Store::load(home, today).await;

    // Route to appropriate command handler
    let _: () = match args.command() {
        Command::Register(register_args) => {
            commands::register(store, register_args.name(), register_args.mobile())
                .await?
                .print()
        }

        Command::Add(add_args) => {
            commands::add(store, add_args.partial(), add_args.rolling_week(), today)
                .await?
                .print()
        }

        Command::Scan(scan_args) => commands::scan(store, scan_args.file(), today)
            .await?
            .print(),

        Command::History => commands::history(store).await?.print(),

        Command::Dashboard => commands::dashboard(store, today).await?.print(),

        Command::Settings(settings_args) => match settings_args.action() {
            SettingsSubcommand::Show => commands::settings_show(store).await?.print(),
            SettingsSubcommand::Limit(limit_args) => {
                commands::settings_limit(store, limit_args.amount())
                    .await?
                    .print()
            }
            SettingsSubcommand::Income(income_args) => {
                commands::settings_income(store, income_args.amount())
                    .await?
                    .print()
            }
        },

        Command::Notifications(notifications_args) => {
            commands::notifications(store, notifications_args.dismiss())
                .await?
                .print()
        }

        Command::Reset => commands::reset(store).await?.print(),
    };
    Ok(())
}

/// Initializes the tracing subscriber.
pub fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => {
            // RUST_LOG exists; use it.
            EnvFilter::from_default_env()
        }
        None => {
            // RUST_LOG does not exist; use default log level for this crate only.
            EnvFilter::new(format!(
                "{}={},{}={}",
                env!("CARGO_CRATE_NAME"),
                level,
                env!("CARGO_BIN_NAME"),
                level
            ))
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
