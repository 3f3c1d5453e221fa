//! Ranked monthly stacks
//!
//! Turns raw per-category monthly totals into the matrix behind a stacked
//! chart: for every month, the selected categories ranked by value, padded
//! to a common width so rank index `i` names the same chart series in every
//! month. All months come from the caller; a month with no data still gets
//! a (padded) row rather than disappearing from the axis.

use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{SpendDashError, SpendDashResult};
use crate::models::{CategoryRule, CategoryTotal, Direction, DirectionRules, Money, Month};

/// One ranked category within a month's stack
///
/// Values are strictly positive; zero and negative raw totals never make it
/// into a stack.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry {
    pub name: String,
    pub value: Money,
}

/// One direction's ranked stacks across a month series
#[derive(Debug, Clone)]
pub struct RankedSeries {
    pub direction: Direction,
    /// Caller-supplied months, order preserved
    pub months: Vec<Month>,
    /// One stack per month, parallel to `months`, ranked high to low
    pub stacks: Vec<Vec<RankedEntry>>,
    /// Deepest stack in the series; the matrix width for this direction
    pub max_ranks: usize,
}

impl RankedSeries {
    /// Rank one direction's totals under its inclusion rule
    ///
    /// Negative raw totals are dropped, duplicate (month, name) rows are
    /// summed, and ties sort by name so equal values always rank the same
    /// way.
    pub fn build(
        direction: Direction,
        raw: &[CategoryTotal],
        rule: &CategoryRule,
        months: &[Month],
    ) -> Self {
        let available: BTreeSet<String> = raw.iter().map(|t| t.name.clone()).collect();
        let selected = rule.apply(&available);

        let mut totals: BTreeMap<Month, BTreeMap<&str, Money>> = BTreeMap::new();
        for row in raw {
            if !row.total.is_positive() || !selected.contains(row.name.as_str()) {
                continue;
            }
            let slot = totals
                .entry(row.month)
                .or_default()
                .entry(row.name.as_str())
                .or_insert(Money::zero());
            *slot += row.total;
        }

        let mut stacks = Vec::with_capacity(months.len());
        let mut max_ranks = 0;
        for month in months {
            let mut entries: Vec<RankedEntry> = totals
                .get(month)
                .map(|by_name| {
                    by_name
                        .iter()
                        .map(|(name, value)| RankedEntry {
                            name: name.to_string(),
                            value: *value,
                        })
                        .collect()
                })
                .unwrap_or_default();

            entries.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.name.cmp(&b.name)));
            max_ranks = max_ranks.max(entries.len());
            stacks.push(entries);
        }

        Self {
            direction,
            months: months.to_vec(),
            stacks,
            max_ranks,
        }
    }

    /// Sum of one month's stack (zero for an empty stack)
    pub fn month_total(&self, month_index: usize) -> Money {
        self.stacks
            .get(month_index)
            .map(|stack| stack.iter().map(|e| e.value).sum())
            .unwrap_or_else(Money::zero)
    }

    /// Sum across the whole series
    pub fn series_total(&self) -> Money {
        (0..self.stacks.len()).map(|i| self.month_total(i)).sum()
    }

    /// Entry at a rank position, `None` for a padded slot
    pub fn rank_slot(&self, month_index: usize, rank: usize) -> Option<&RankedEntry> {
        self.stacks.get(month_index).and_then(|stack| stack.get(rank))
    }
}

/// Both directions' ranked series over one month series
#[derive(Debug, Clone)]
pub struct StackedReport {
    pub months: Vec<Month>,
    pub income: RankedSeries,
    pub expense: RankedSeries,
}

impl StackedReport {
    /// Rank both directions under their respective rules
    pub fn generate(
        income_raw: &[CategoryTotal],
        expense_raw: &[CategoryTotal],
        rules: &DirectionRules,
        months: &[Month],
    ) -> Self {
        Self {
            months: months.to_vec(),
            income: RankedSeries::build(Direction::Income, income_raw, &rules.income, months),
            expense: RankedSeries::build(Direction::Expense, expense_raw, &rules.expense, months),
        }
    }

    pub fn series(&self, direction: Direction) -> &RankedSeries {
        match direction {
            Direction::Income => &self.income,
            Direction::Expense => &self.expense,
        }
    }

    /// Materialize one row per month, padded to each direction's width
    pub fn month_stacks(&self) -> Vec<MonthStack<'_>> {
        self.months
            .iter()
            .enumerate()
            .map(|(i, month)| MonthStack {
                month: *month,
                label: month.short_label(),
                income: &self.income.stacks[i],
                expense: &self.expense.stacks[i],
                income_width: self.income.max_ranks,
                expense_width: self.expense.max_ranks,
            })
            .collect()
    }

    /// Write the padded matrix as CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> SpendDashResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        let mut header = vec!["month".to_string(), "label".to_string()];
        for direction in Direction::ALL {
            for rank in 0..self.series(direction).max_ranks {
                header.push(format!("{}_rank_{}", direction, rank));
                header.push(format!("{}_rank_{}_name", direction, rank));
            }
        }
        csv_writer
            .write_record(&header)
            .map_err(|e| SpendDashError::Export(e.to_string()))?;

        for stack in self.month_stacks() {
            let mut record = vec![stack.month.to_string(), stack.label.to_string()];
            for direction in Direction::ALL {
                for rank in 0..stack.width(direction) {
                    match stack.rank_slot(direction, rank) {
                        Some(entry) => {
                            record.push(entry.value.to_string());
                            record.push(entry.name.clone());
                        }
                        None => {
                            record.push(Money::zero().to_string());
                            record.push(String::new());
                        }
                    }
                }
            }
            csv_writer
                .write_record(&record)
                .map_err(|e| SpendDashError::Export(e.to_string()))?;
        }

        csv_writer
            .flush()
            .map_err(|e| SpendDashError::Export(e.to_string()))?;
        Ok(())
    }
}

/// One month's row of the stacked matrix
///
/// Serializes flat for charting: `month`, `label`, then positional
/// `{direction}_rank_{i}` / `{direction}_rank_{i}_name` pairs up to each
/// direction's width. Padded slots carry value 0 and omit the name key, so
/// every row in a payload has the same value columns.
#[derive(Debug, Clone)]
pub struct MonthStack<'a> {
    pub month: Month,
    pub label: &'static str,
    income: &'a [RankedEntry],
    expense: &'a [RankedEntry],
    income_width: usize,
    expense_width: usize,
}

impl MonthStack<'_> {
    /// The month's actual (unpadded) stack for a direction
    pub fn stack(&self, direction: Direction) -> &[RankedEntry] {
        match direction {
            Direction::Income => self.income,
            Direction::Expense => self.expense,
        }
    }

    /// Matrix width for a direction (the series-wide `max_ranks`)
    pub fn width(&self, direction: Direction) -> usize {
        match direction {
            Direction::Income => self.income_width,
            Direction::Expense => self.expense_width,
        }
    }

    /// Entry at a rank position, `None` for a padded slot
    pub fn rank_slot(&self, direction: Direction, rank: usize) -> Option<&RankedEntry> {
        self.stack(direction).get(rank)
    }

    /// Sum of the month's stack for a direction
    pub fn total(&self, direction: Direction) -> Money {
        self.stack(direction).iter().map(|e| e.value).sum()
    }
}

impl Serialize for MonthStack<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("month", &self.month)?;
        map.serialize_entry("label", self.label)?;
        for direction in Direction::ALL {
            for rank in 0..self.width(direction) {
                match self.rank_slot(direction, rank) {
                    Some(entry) => {
                        map.serialize_entry(&format!("{}_rank_{}", direction, rank), &entry.value)?;
                        map.serialize_entry(
                            &format!("{}_rank_{}_name", direction, rank),
                            &entry.name,
                        )?;
                    }
                    None => {
                        map.serialize_entry(
                            &format!("{}_rank_{}", direction, rank),
                            &Money::zero(),
                        )?;
                    }
                }
            }
        }
        map.end()
    }
}
