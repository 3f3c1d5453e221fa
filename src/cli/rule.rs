//! Rule CLI commands
//!
//! Edits are read-modify-write on the session's rule pair: every mutation
//! replaces one direction's rule and persists the pair through the store.
//! Persistence failures are logged inside the store and never fail the
//! command.

use std::path::PathBuf;

use clap::Subcommand;

use crate::cli::report::load_breakdown;
use crate::config::Settings;
use crate::display::rule::{describe_rule, render_rule_list, render_rule_show};
use crate::error::SpendDashResult;
use crate::models::{Direction, DirectionRules};
use crate::storage::RuleStore;

/// Rule subcommands
#[derive(Subcommand)]
pub enum RuleCommands {
    /// Show checkboxes for every category in a breakdown file
    List {
        /// Breakdown JSON supplying the category universe
        #[arg(long)]
        input: PathBuf,

        /// Direction to list (defaults to the configured one)
        #[arg(long, value_enum)]
        direction: Option<Direction>,
    },

    /// Flip one category's checkbox
    Toggle {
        /// Category name, exactly as the breakdown spells it
        name: String,

        /// Direction to edit (defaults to the configured one)
        #[arg(long, value_enum)]
        direction: Option<Direction>,
    },

    /// Select every category (reset to the opt-out default)
    #[command(name = "select-all")]
    SelectAll {
        /// Direction to edit (defaults to the configured one)
        #[arg(long, value_enum)]
        direction: Option<Direction>,
    },

    /// Deselect every category
    #[command(name = "clear-all")]
    ClearAll {
        /// Direction to edit (defaults to the configured one)
        #[arg(long, value_enum)]
        direction: Option<Direction>,
    },

    /// Print both directions' rules
    Show,
}

/// Handle a rule command
pub fn handle_rule_command(
    settings: &Settings,
    store: &RuleStore,
    rules: &mut DirectionRules,
    cmd: RuleCommands,
) -> SpendDashResult<()> {
    match cmd {
        RuleCommands::List { input, direction } => {
            let direction = direction.unwrap_or(settings.default_direction);
            let breakdown = load_breakdown(&input)?;
            print!(
                "{}",
                render_rule_list(rules.get(direction), direction, &breakdown.distinct_names())
            );
        }

        RuleCommands::Toggle { name, direction } => {
            let direction = direction.unwrap_or(settings.default_direction);
            let toggled = rules.get(direction).toggle(&name);
            let checked = toggled.is_checked(&name);
            *rules.get_mut(direction) = toggled;
            store.save(rules);

            println!(
                "{} is now {} for {} ({})",
                name,
                if checked { "selected" } else { "deselected" },
                direction,
                describe_rule(rules.get(direction)),
            );
        }

        RuleCommands::SelectAll { direction } => {
            let direction = direction.unwrap_or(settings.default_direction);
            let reset = rules.get(direction).select_all();
            *rules.get_mut(direction) = reset;
            store.save(rules);
            println!("{}: {}", direction, describe_rule(rules.get(direction)));
        }

        RuleCommands::ClearAll { direction } => {
            let direction = direction.unwrap_or(settings.default_direction);
            let cleared = rules.get(direction).clear_all();
            *rules.get_mut(direction) = cleared;
            store.save(rules);
            println!("{}: {}", direction, describe_rule(rules.get(direction)));
        }

        RuleCommands::Show => {
            for direction in Direction::ALL {
                print!("{}", render_rule_show(rules.get(direction), direction));
            }
        }
    }

    Ok(())
}
