//! Per-category monthly totals supplied by the reporting collaborator
//!
//! These rows are the aggregator's only input. They arrive already grouped
//! by (month, category) for a single year and direction; this crate never
//! sees individual transactions.

use crate::models::money::Money;
use crate::models::month::Month;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One category's total for one calendar month
///
/// `id` is absent for the uncategorized bucket; the collaborator supplies
/// its display name, so ranking treats it like any other category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub month: Month,
    pub name: String,
    pub total: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl CategoryTotal {
    pub fn new(month: Month, name: impl Into<String>, total: Money) -> Self {
        Self {
            month,
            name: name.into(),
            total,
            id: None,
        }
    }
}

/// Collaborator envelope: one year of per-category monthly totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyBreakdown {
    pub year: i32,
    pub items: Vec<CategoryTotal>,
}

impl MonthlyBreakdown {
    pub fn new(year: i32, items: Vec<CategoryTotal>) -> Self {
        Self { year, items }
    }

    /// Every category name present in the payload, sorted and deduplicated
    ///
    /// Rule listing shows this set so the user can check names that exist in
    /// the data rather than typing them blind.
    pub fn distinct_names(&self) -> Vec<String> {
        let names: BTreeSet<&str> = self.items.iter().map(|t| t.name.as_str()).collect();
        names.into_iter().map(String::from).collect()
    }
}
