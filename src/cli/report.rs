//! Report CLI commands
//!
//! Reads collaborator breakdown files from disk, runs the aggregation, and
//! prints the result in the requested format.

use std::path::{Path, PathBuf};

use clap::{Subcommand, ValueEnum};

use crate::config::Settings;
use crate::display::report::{render_cashflow, render_stacked_table, render_summary};
use crate::error::{SpendDashError, SpendDashResult};
use crate::models::{CategoryTotal, Direction, DirectionRules, Month, MonthlyBreakdown};
use crate::reports::{AverageBasis, CashflowSummary, DirectionSummary, StackedReport};

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Ranked monthly stacks with summaries
    Stacked {
        /// Breakdown JSON for the income side (or the only side, see --direction)
        #[arg(long)]
        input: PathBuf,

        /// Breakdown JSON for the expense side (required with --direction both)
        #[arg(long)]
        expense_input: Option<PathBuf>,

        /// Calendar year to report over (defaults to the input's year)
        #[arg(long)]
        year: Option<i32>,

        /// Which side(s) of the ledger to report
        #[arg(long, value_enum, default_value_t = ReportSide::Both)]
        direction: ReportSide,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Average basis (defaults to the configured one)
        #[arg(long, value_enum)]
        average: Option<AverageBasis>,
    },
}

/// Direction selector for report commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportSide {
    Income,
    Expense,
    Both,
}

/// Output format for report commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

/// Handle a report command
pub fn handle_report_command(
    settings: &Settings,
    rules: &DirectionRules,
    cmd: ReportCommands,
) -> SpendDashResult<()> {
    match cmd {
        ReportCommands::Stacked {
            input,
            expense_input,
            year,
            direction,
            format,
            average,
        } => {
            let basis = average.unwrap_or(settings.average_basis);

            let (income, expense) = match direction {
                ReportSide::Income => (Some(load_breakdown(&input)?), None),
                ReportSide::Expense => (None, Some(load_breakdown(&input)?)),
                ReportSide::Both => {
                    let expense_path = expense_input.ok_or_else(|| {
                        SpendDashError::Validation(
                            "--direction both needs --expense-input alongside --input".to_string(),
                        )
                    })?;
                    (
                        Some(load_breakdown(&input)?),
                        Some(load_breakdown(&expense_path)?),
                    )
                }
            };

            let report_year = resolve_year(year, income.as_ref(), expense.as_ref())?;
            let months = Month::year_series(report_year);

            let empty: Vec<CategoryTotal> = Vec::new();
            let income_rows = income.as_ref().map(|b| b.items.as_slice()).unwrap_or(&empty);
            let expense_rows = expense.as_ref().map(|b| b.items.as_slice()).unwrap_or(&empty);

            let report = StackedReport::generate(income_rows, expense_rows, rules, &months);

            let income_summary = income
                .is_some()
                .then(|| DirectionSummary::compute(&report.income, basis));
            let expense_summary = expense
                .is_some()
                .then(|| DirectionSummary::compute(&report.expense, basis));

            match format {
                OutputFormat::Table => {
                    print_table(
                        settings,
                        &report,
                        income_summary.as_ref(),
                        expense_summary.as_ref(),
                        report_year,
                    );
                }
                OutputFormat::Json => {
                    let cashflow = (income_summary.is_some() && expense_summary.is_some())
                        .then(|| CashflowSummary::from_report(&report));
                    let payload = serde_json::json!({
                        "year": report_year,
                        "rows": report.month_stacks(),
                        "income_summary": income_summary,
                        "expense_summary": expense_summary,
                        "cashflow": cashflow,
                    });
                    println!("{}", serde_json::to_string_pretty(&payload)?);
                }
                OutputFormat::Csv => {
                    report.export_csv(std::io::stdout().lock())?;
                }
            }

            Ok(())
        }
    }
}

fn print_table(
    settings: &Settings,
    report: &StackedReport,
    income_summary: Option<&DirectionSummary>,
    expense_summary: Option<&DirectionSummary>,
    year: i32,
) {
    let symbol = &settings.currency_symbol;

    println!("Stacked report for {}", year);
    if income_summary.is_some() && expense_summary.is_some() {
        print!(
            "{}",
            render_cashflow(&CashflowSummary::from_report(report), symbol)
        );
    }
    println!();

    if let Some(summary) = income_summary {
        print!("{}", render_stacked_table(report, Direction::Income, symbol));
        print!("{}", render_summary(summary, symbol));
        println!();
    }
    if let Some(summary) = expense_summary {
        print!("{}", render_stacked_table(report, Direction::Expense, symbol));
        print!("{}", render_summary(summary, symbol));
    }
}

/// Load a collaborator breakdown file
pub fn load_breakdown(path: &Path) -> SpendDashResult<MonthlyBreakdown> {
    if !path.exists() {
        return Err(SpendDashError::bad_input(path, "file not found"));
    }
    let contents =
        std::fs::read_to_string(path).map_err(|e| SpendDashError::bad_input(path, e))?;
    serde_json::from_str(&contents).map_err(|e| SpendDashError::bad_input(path, e))
}

fn resolve_year(
    year: Option<i32>,
    income: Option<&MonthlyBreakdown>,
    expense: Option<&MonthlyBreakdown>,
) -> SpendDashResult<i32> {
    if let Some(year) = year {
        return Ok(year);
    }
    match (income, expense) {
        (Some(i), Some(e)) if i.year != e.year => Err(SpendDashError::Validation(format!(
            "Input years differ ({} vs {}); pass --year to pick one",
            i.year, e.year
        ))),
        (Some(b), _) | (None, Some(b)) => Ok(b.year),
        (None, None) => Err(SpendDashError::Validation(
            "No input to take the year from".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_breakdown(dir: &TempDir, name: &str, json: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn test_load_breakdown() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_breakdown(
            &temp_dir,
            "expense.json",
            r#"{"year": 2025, "items": [{"month": "2025-01", "name": "Rent", "total": 1200.0}]}"#,
        );

        let breakdown = load_breakdown(&path).unwrap();
        assert_eq!(breakdown.year, 2025);
        assert_eq!(breakdown.items.len(), 1);
    }

    #[test]
    fn test_load_breakdown_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_breakdown(&temp_dir.path().join("gone.json")).unwrap_err();
        assert!(matches!(err, SpendDashError::Input(_)));
    }

    #[test]
    fn test_load_breakdown_bad_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_breakdown(&temp_dir, "bad.json", "{");
        assert!(load_breakdown(&path).is_err());
    }

    #[test]
    fn test_resolve_year_prefers_flag() {
        let breakdown = MonthlyBreakdown::new(2024, vec![]);
        assert_eq!(
            resolve_year(Some(2025), Some(&breakdown), None).unwrap(),
            2025
        );
        assert_eq!(resolve_year(None, Some(&breakdown), None).unwrap(), 2024);
    }

    #[test]
    fn test_resolve_year_rejects_mismatch() {
        let a = MonthlyBreakdown::new(2024, vec![]);
        let b = MonthlyBreakdown::new(2025, vec![]);
        let err = resolve_year(None, Some(&a), Some(&b)).unwrap_err();
        assert!(err.is_validation());
    }
}
