//! Report formatting for terminal output
//!
//! The core computes symbol-free amounts; everything currency- and
//! layout-related happens here.

use crate::models::{Direction, Money};
use crate::reports::{AverageBasis, CashflowSummary, DirectionSummary, StackedReport};

const TABLE_WIDTH: usize = 64;

/// Format an amount with the configured currency symbol
pub fn format_money(amount: Money, symbol: &str) -> String {
    amount.format_with_symbol(symbol)
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Simple proportional bar for month rows
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Truncate a string to a maximum number of characters with ellipsis
///
/// Counts characters rather than bytes; column padding in the table does
/// the same, and category names are not guaranteed to be ASCII.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return "...".chars().take(max_len).collect();
    }
    let kept: String = s.chars().take(max_len - 3).collect();
    format!("{}...", kept)
}

pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Render one direction of a stacked report as a month-by-month table
///
/// Each month block lists that month's ranked categories with their share
/// of the month. Months without activity still get a row, so the table has
/// the same months the chart would.
pub fn render_stacked_table(report: &StackedReport, direction: Direction, symbol: &str) -> String {
    let series = report.series(direction);
    let mut output = String::new();

    output.push_str(&format!(
        "{} by category, ranked ({} months, {} rank slots)\n",
        direction.label(),
        series.months.len(),
        series.max_ranks,
    ));
    output.push_str(&double_separator(TABLE_WIDTH));
    output.push('\n');

    let max_month_total = (0..series.months.len())
        .map(|i| series.month_total(i))
        .max()
        .unwrap_or_else(Money::zero);

    for (i, month) in series.months.iter().enumerate() {
        let month_total = series.month_total(i);
        let bar = format_bar(
            month_total.to_decimal(),
            max_month_total.to_decimal(),
            16,
        );

        output.push_str(&format!(
            "{} ({})  {} {:>12}\n",
            month.short_label(),
            month,
            bar,
            format_money(month_total, symbol),
        ));

        let stack = &series.stacks[i];
        if stack.is_empty() {
            output.push_str("    (no activity)\n");
        }
        for (rank, entry) in stack.iter().enumerate() {
            let share = if month_total.is_zero() {
                0.0
            } else {
                (entry.value.cents() as f64 / month_total.cents() as f64) * 100.0
            };
            output.push_str(&format!(
                "  #{:<2} {:<28} {:>12} {:>7}\n",
                rank + 1,
                truncate(&entry.name, 28),
                format_money(entry.value, symbol),
                format_percentage(share),
            ));
        }
    }

    output.push_str(&separator(TABLE_WIDTH));
    output.push('\n');
    output
}

/// Render one direction's headline figures
pub fn render_summary(summary: &DirectionSummary, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{} total: {}\n",
        summary.direction.label(),
        format_money(summary.total, symbol),
    ));
    let (divisor, basis_label) = match summary.basis {
        AverageBasis::ActiveMonths => (summary.active_months, "active months"),
        AverageBasis::CalendarMonths => (summary.calendar_months, "calendar months"),
    };
    output.push_str(&format!(
        "Monthly average: {} (over {} {})\n",
        format_money(summary.average, symbol),
        divisor,
        basis_label,
    ));

    match (&summary.highest, &summary.lowest) {
        (Some(highest), Some(lowest)) => {
            output.push_str(&format!(
                "Highest: {} ({})   Lowest: {} ({})\n",
                highest.month.short_label(),
                format_money(highest.total, symbol),
                lowest.month.short_label(),
                format_money(lowest.total, symbol),
            ));
        }
        _ => output.push_str("No active months\n"),
    }

    output
}

/// Render the income/expense/net header line
pub fn render_cashflow(cashflow: &CashflowSummary, symbol: &str) -> String {
    format!(
        "Income: {}   Expense: {}   Net: {}\n",
        format_money(cashflow.income, symbol),
        format_money(cashflow.expense, symbol),
        format_money(cashflow.net, symbol),
    )
}
