//! Inclusion-rule persistence
//!
//! Rules live in a single `rules.json` blob keyed by direction. Persistence
//! is deliberately forgiving: a report must never fail because the rule
//! file is missing, stale, or half-written. `load` always produces usable
//! rules and `save` never propagates an error; the in-memory pair stays
//! authoritative for the session either way.

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::models::{CategoryRule, Direction, DirectionRules};

use super::file_io::{read_json_required, write_json_atomic};

/// File-backed store for the per-direction rule pair
pub struct RuleStore {
    path: PathBuf,
}

impl RuleStore {
    /// Create a store over the given rules file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load both rules, degrading to defaults instead of failing
    ///
    /// Degradation is per direction: a readable `income` entry next to a
    /// mangled `expense` entry keeps the real income rule.
    pub fn load(&self) -> DirectionRules {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No rule file yet, using defaults");
            return DirectionRules::default();
        }

        let raw: serde_json::Value = match read_json_required(&self.path) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "Unreadable rule file, using defaults");
                return DirectionRules::default();
            }
        };

        DirectionRules {
            income: Self::direction_rule(&raw, Direction::Income),
            expense: Self::direction_rule(&raw, Direction::Expense),
        }
    }

    fn direction_rule(raw: &serde_json::Value, direction: Direction) -> CategoryRule {
        match raw.get(direction.as_str()) {
            None => CategoryRule::default(),
            Some(entry) => serde_json::from_value(entry.clone()).unwrap_or_else(|e| {
                warn!(%direction, error = %e, "Invalid persisted rule, using default");
                CategoryRule::default()
            }),
        }
    }

    /// Persist both rules, swallowing write failures
    pub fn save(&self, rules: &DirectionRules) {
        if let Err(e) = write_json_atomic(&self.path, rules) {
            warn!(path = %self.path.display(), error = %e, "Failed to persist rules, keeping in-memory state");
        }
    }
}
