//! Category inclusion rules
//!
//! A rule decides which categories participate in a report, per direction.
//! Three modes cover the whole space: `All` is opt-out (everything selected
//! except an exclusion list), `None` selects nothing, and `Custom` is opt-in
//! (only an inclusion list). `All` with exclusions keeps selecting categories
//! that appear after the rule was edited; `Custom` does not. That asymmetry
//! is the point of keeping two lists instead of one.
//!
//! Rules are plain values. Every transition returns a new rule and leaves
//! the receiver untouched, so callers decide when a changed rule becomes
//! the session's rule and when it gets persisted.

use crate::models::direction::Direction;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Selection mode for a direction's rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleMode {
    /// Everything selected except `excluded`; future categories included
    All,
    /// Nothing selected
    None,
    /// Only `included` selected; future categories excluded
    Custom,
}

/// One direction's inclusion rule
///
/// Only one of the two sets is meaningful at a time: `excluded` in `All`
/// mode, `included` in `None`/`Custom`. The inactive set is kept empty by
/// the transitions below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub mode: RuleMode,
    #[serde(default)]
    pub excluded: BTreeSet<String>,
    #[serde(default)]
    pub included: BTreeSet<String>,
}

impl Default for CategoryRule {
    /// Everything selected, nothing excluded
    fn default() -> Self {
        Self {
            mode: RuleMode::All,
            excluded: BTreeSet::new(),
            included: BTreeSet::new(),
        }
    }
}

impl CategoryRule {
    /// Whether `name` is currently selected under this rule
    pub fn is_checked(&self, name: &str) -> bool {
        match self.mode {
            RuleMode::All => !self.excluded.contains(name),
            RuleMode::None | RuleMode::Custom => self.included.contains(name),
        }
    }

    /// Flip one category's checkbox, returning the resulting rule
    ///
    /// The whole transition table lives in this one match. `All` never
    /// leaves `All`: unchecking every known category still means "all
    /// future categories", which is why the mode exists at all.
    pub fn toggle(&self, name: &str) -> Self {
        let mut next = self.clone();
        match (self.mode, self.is_checked(name)) {
            (RuleMode::All, true) => {
                next.excluded.insert(name.to_string());
            }
            (RuleMode::All, false) => {
                next.excluded.remove(name);
            }
            (RuleMode::None | RuleMode::Custom, true) => {
                next.included.remove(name);
                next.mode = if next.included.is_empty() {
                    RuleMode::None
                } else {
                    RuleMode::Custom
                };
            }
            (RuleMode::None | RuleMode::Custom, false) => {
                next.included.insert(name.to_string());
                next.mode = RuleMode::Custom;
            }
        }
        next
    }

    /// Reset to the default opt-out rule (everything selected)
    pub fn select_all(&self) -> Self {
        Self::default()
    }

    /// Deselect everything
    pub fn clear_all(&self) -> Self {
        Self {
            mode: RuleMode::None,
            excluded: BTreeSet::new(),
            included: BTreeSet::new(),
        }
    }

    /// Resolve the rule against the categories actually present in a payload
    ///
    /// This is the only place a rule meets a concrete universe of names.
    /// `All` admits names unseen when the rule was edited; `None`/`Custom`
    /// keep them out.
    pub fn apply(&self, available: &BTreeSet<String>) -> BTreeSet<String> {
        match self.mode {
            RuleMode::All => available.difference(&self.excluded).cloned().collect(),
            RuleMode::None | RuleMode::Custom => {
                self.included.intersection(available).cloned().collect()
            }
        }
    }
}

/// The pair of rules a session carries, one per direction
///
/// Threaded explicitly through report calls; nothing in the crate holds a
/// process-wide rule singleton.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DirectionRules {
    #[serde(default)]
    pub income: CategoryRule,
    #[serde(default)]
    pub expense: CategoryRule,
}

impl DirectionRules {
    pub fn get(&self, direction: Direction) -> &CategoryRule {
        match direction {
            Direction::Income => &self.income,
            Direction::Expense => &self.expense,
        }
    }

    pub fn get_mut(&mut self, direction: Direction) -> &mut CategoryRule {
        match direction {
            Direction::Income => &mut self.income,
            Direction::Expense => &mut self.expense,
        }
    }

    /// Replace one direction's rule, returning the updated pair
    pub fn with_rule(mut self, direction: Direction, rule: CategoryRule) -> Self {
        *self.get_mut(direction) = rule;
        self
    }
}
