//! Report generation
//!
//! Pure computation over caller-supplied inputs: ranked stacks for the
//! chart matrix, summaries for the headline figures. No I/O here.

pub mod stacked;
pub mod summary;

pub use stacked::{MonthStack, RankedEntry, RankedSeries, StackedReport};
pub use summary::{AverageBasis, CashflowSummary, DirectionSummary, MonthTotal};
