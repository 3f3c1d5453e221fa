//! spenddash - Category-ranked spending dashboard core
//!
//! This library turns per-category monthly totals (produced by a reporting
//! collaborator) into the data behind a stacked spending dashboard: a
//! persisted per-direction inclusion rule decides which categories count,
//! and a ranked aggregation produces positionally stable monthly stacks
//! plus headline summaries.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (months, money, rules, totals)
//! - `storage`: JSON file storage layer
//! - `reports`: Ranked stacks and summaries
//! - `display`: Terminal formatting
//! - `cli`: Command definitions and handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use spenddash::models::{DirectionRules, Month};
//! use spenddash::reports::StackedReport;
//!
//! let months = Month::year_series(2025);
//! let report = StackedReport::generate(&income, &expense, &rules, &months);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{SpendDashError, SpendDashResult};
