use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use spenddash::cli::{handle_report_command, handle_rule_command, ReportCommands, RuleCommands};
use spenddash::config::{paths::SpendDashPaths, settings::Settings};
use spenddash::storage::RuleStore;

#[derive(Parser)]
#[command(
    name = "spenddash",
    author = "Kaylee Beyene",
    version,
    about = "Category-ranked spending dashboard for the terminal",
    long_about = "spenddash turns per-category monthly totals exported by your \
                  reporting tool into ranked monthly stacks, with persisted \
                  per-direction rules deciding which categories count."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build reports from breakdown files
    #[command(subcommand)]
    Report(ReportCommands),

    /// Edit and inspect category inclusion rules
    #[command(subcommand)]
    Rule(RuleCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    init_logger();
    let cli = Cli::parse();

    let paths = SpendDashPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let store = RuleStore::new(paths.rules_file());
    let mut rules = store.load();

    match cli.command {
        Some(Commands::Report(cmd)) => {
            handle_report_command(&settings, &rules, cmd)?;
        }
        Some(Commands::Rule(cmd)) => {
            handle_rule_command(&settings, &store, &mut rules, cmd)?;
        }
        Some(Commands::Config) => {
            println!("spenddash configuration");
            println!("=======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Rules file:     {}", paths.rules_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!("  Default direction: {}", settings.default_direction);
            println!("  Average basis:     {:?}", settings.average_basis);
        }
        None => {
            println!("spenddash - Category-ranked spending dashboard");
            println!();
            println!("Run 'spenddash --help' for usage information.");
            println!("Run 'spenddash report stacked --help' to build your first report.");
        }
    }

    Ok(())
}

/// Initializes the tracing subscriber.
fn init_logger() {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => {
            // RUST_LOG exists; use it.
            EnvFilter::from_default_env()
        }
        None => {
            // RUST_LOG does not exist; show warnings from this crate only.
            EnvFilter::new(format!("{}=warn", env!("CARGO_CRATE_NAME")))
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
