//! Direction summaries
//!
//! Aggregates a ranked series down to the figures the dashboard header
//! shows: total, monthly average, and the best and worst months. Months
//! with no selected activity are "inactive"; they pull the calendar-basis
//! average down but never appear as a lowest month.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::models::{Direction, Money, Month};
use crate::reports::stacked::{RankedSeries, StackedReport};

/// Which months the average divides over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "snake_case")]
pub enum AverageBasis {
    /// Divide by months with activity (the dashboard default)
    #[default]
    #[value(name = "active")]
    ActiveMonths,
    /// Divide by every month in the series
    #[value(name = "calendar")]
    CalendarMonths,
}

/// A month paired with its stack total, for extrema reporting
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthTotal {
    pub month: Month,
    pub total: Money,
}

/// One direction's headline figures over a month series
#[derive(Debug, Clone, Serialize)]
pub struct DirectionSummary {
    pub direction: Direction,
    /// Sum of every month's stack total
    pub total: Money,
    /// Monthly average under `basis`
    pub average: Money,
    pub basis: AverageBasis,
    /// Months with a non-zero stack total
    pub active_months: usize,
    /// Length of the month series
    pub calendar_months: usize,
    /// Best month among active months; `None` when nothing was active
    pub highest: Option<MonthTotal>,
    /// Worst active month; inactive months never qualify
    pub lowest: Option<MonthTotal>,
}

impl DirectionSummary {
    /// Summarize a ranked series
    ///
    /// Ties on the extrema keep the earliest month in the series.
    pub fn compute(series: &RankedSeries, basis: AverageBasis) -> Self {
        let month_totals: Vec<Money> = (0..series.months.len())
            .map(|i| series.month_total(i))
            .collect();

        let total: Money = month_totals.iter().copied().sum();
        let active_months = month_totals.iter().filter(|t| !t.is_zero()).count();

        let divisor = match basis {
            AverageBasis::ActiveMonths => active_months,
            AverageBasis::CalendarMonths => series.months.len(),
        };
        let average = total.divide_by(divisor);

        let mut highest: Option<MonthTotal> = None;
        let mut lowest: Option<MonthTotal> = None;
        for (month, month_total) in series.months.iter().zip(&month_totals) {
            if month_total.is_zero() {
                continue;
            }
            let candidate = MonthTotal {
                month: *month,
                total: *month_total,
            };
            if highest.map_or(true, |h| candidate.total > h.total) {
                highest = Some(candidate);
            }
            if lowest.map_or(true, |l| candidate.total < l.total) {
                lowest = Some(candidate);
            }
        }

        Self {
            direction: series.direction,
            total,
            average,
            basis,
            active_months,
            calendar_months: series.months.len(),
            highest,
            lowest,
        }
    }
}

/// Income vs. expense for the same period
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CashflowSummary {
    pub income: Money,
    pub expense: Money,
    pub net: Money,
}

impl CashflowSummary {
    pub fn new(income: Money, expense: Money) -> Self {
        Self {
            income,
            expense,
            net: income - expense,
        }
    }

    /// Net both sides of a stacked report
    pub fn from_report(report: &StackedReport) -> Self {
        Self::new(report.income.series_total(), report.expense.series_total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryRule, CategoryTotal, DirectionRules};

    fn row(month_key: &str, name: &str, cents: i64) -> CategoryTotal {
        CategoryTotal::new(month_key.parse().unwrap(), name, Money::from_cents(cents))
    }

    fn months(keys: &[&str]) -> Vec<Month> {
        keys.iter().map(|k| k.parse().unwrap()).collect()
    }

    fn series(raw: &[CategoryTotal], month_keys: &[&str]) -> RankedSeries {
        RankedSeries::build(
            Direction::Expense,
            raw,
            &CategoryRule::default(),
            &months(month_keys),
        )
    }

    #[test]
    fn test_summary_over_a_gap_month() {
        let raw = vec![
            row("2025-01", "Groceries", 10000),
            row("2025-03", "Groceries", 20000),
        ];
        let series = series(&raw, &["2025-01", "2025-02", "2025-03"]);

        let summary = DirectionSummary::compute(&series, AverageBasis::ActiveMonths);
        assert_eq!(summary.total, Money::from_cents(30000));
        assert_eq!(summary.active_months, 2);
        assert_eq!(summary.average, Money::from_cents(15000));
        assert_eq!(summary.highest.unwrap().month.to_string(), "2025-03");
        assert_eq!(summary.lowest.unwrap().month.to_string(), "2025-01");

        let calendar = DirectionSummary::compute(&series, AverageBasis::CalendarMonths);
        assert_eq!(calendar.average, Money::from_cents(10000));
    }

    #[test]
    fn test_empty_series_has_no_extrema() {
        let series = series(&[], &["2025-01", "2025-02"]);
        let summary = DirectionSummary::compute(&series, AverageBasis::ActiveMonths);

        assert_eq!(summary.total, Money::zero());
        assert_eq!(summary.average, Money::zero());
        assert_eq!(summary.active_months, 0);
        assert!(summary.highest.is_none());
        assert!(summary.lowest.is_none());
    }

    #[test]
    fn test_extrema_ties_keep_the_earliest_month() {
        let raw = vec![
            row("2025-01", "Groceries", 10000),
            row("2025-03", "Groceries", 10000),
        ];
        let series = series(&raw, &["2025-01", "2025-02", "2025-03"]);
        let summary = DirectionSummary::compute(&series, AverageBasis::ActiveMonths);

        assert_eq!(summary.highest.unwrap().month.to_string(), "2025-01");
        assert_eq!(summary.lowest.unwrap().month.to_string(), "2025-01");
    }

    #[test]
    fn test_single_active_month_is_both_extrema() {
        let raw = vec![row("2025-02", "Rent", 120000)];
        let series = series(&raw, &["2025-01", "2025-02"]);
        let summary = DirectionSummary::compute(&series, AverageBasis::ActiveMonths);

        assert_eq!(summary.highest, summary.lowest);
        assert_eq!(summary.highest.unwrap().total, Money::from_cents(120000));
    }

    #[test]
    fn test_cashflow_nets_the_directions() {
        let income = vec![row("2025-01", "Salary", 500000)];
        let expense = vec![row("2025-01", "Rent", 169000)];
        let report = StackedReport::generate(
            &income,
            &expense,
            &DirectionRules::default(),
            &months(&["2025-01"]),
        );

        let cashflow = CashflowSummary::from_report(&report);
        assert_eq!(cashflow.income, Money::from_cents(500000));
        assert_eq!(cashflow.expense, Money::from_cents(169000));
        assert_eq!(cashflow.net, Money::from_cents(331000));
    }

    #[test]
    fn test_summary_serializes_decimals() {
        let raw = vec![row("2025-01", "Groceries", 15050)];
        let series = series(&raw, &["2025-01"]);
        let summary = DirectionSummary::compute(&series, AverageBasis::ActiveMonths);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["direction"], "expense");
        assert_eq!(json["total"], 150.5);
        assert_eq!(json["highest"]["month"], "2025-01");
        assert_eq!(json["basis"], "active_months");
    }
}
