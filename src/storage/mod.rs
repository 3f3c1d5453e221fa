//! Persistence layer
//!
//! JSON files under the app data directory, written atomically.

pub mod file_io;
pub mod rules;

pub use rules::RuleStore;
