//! Money direction (income vs. expense)

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of the ledger a category total belongs to
///
/// Inclusion rules and ranked series are kept separately per direction, so
/// most collaborators take a `Direction` argument and the CLI exposes it as
/// a `--direction` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Income,
    /// The dashboard opens on the expense view
    #[default]
    Expense,
}

impl Direction {
    /// Both directions, income first
    pub const ALL: [Direction; 2] = [Direction::Income, Direction::Expense];

    /// Lowercase key used in persisted rules and chart field names
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Income => "income",
            Direction::Expense => "expense",
        }
    }

    /// Capitalized label for report headers
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Income => "Income",
            Direction::Expense => "Expense",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Direction::Income).unwrap(), "\"income\"");
        let d: Direction = serde_json::from_str("\"expense\"").unwrap();
        assert_eq!(d, Direction::Expense);
    }

    #[test]
    fn test_all_order() {
        assert_eq!(Direction::ALL, [Direction::Income, Direction::Expense]);
    }
}
