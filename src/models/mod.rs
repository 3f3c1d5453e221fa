//! Core data models
//!
//! Plain value types shared by storage, reports, and the CLI. Nothing in
//! here touches the filesystem.

pub mod direction;
pub mod money;
pub mod month;
pub mod rule;
pub mod totals;

pub use direction::Direction;
pub use money::Money;
pub use month::Month;
pub use rule::{CategoryRule, DirectionRules, RuleMode};
pub use totals::{CategoryTotal, MonthlyBreakdown};
