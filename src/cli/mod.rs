//! CLI command definitions and handlers

pub mod report;
pub mod rule;

pub use report::{handle_report_command, ReportCommands};
pub use rule::{handle_rule_command, RuleCommands};
