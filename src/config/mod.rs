//! Configuration: paths and user settings

pub mod paths;
pub mod settings;

pub use paths::SpendDashPaths;
pub use settings::Settings;
