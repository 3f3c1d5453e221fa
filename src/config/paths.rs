//! Path management
//!
//! XDG-compliant resolution of the app data directory.
//!
//! ## Path Resolution Order
//!
//! 1. `SPENDDASH_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/spenddash` or `~/.config/spenddash`
//! 3. Windows: `%APPDATA%\spenddash`

use std::path::PathBuf;

use crate::error::SpendDashError;

/// Resolved locations of everything the app persists
#[derive(Debug, Clone)]
pub struct SpendDashPaths {
    base_dir: PathBuf,
}

impl SpendDashPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, SpendDashError> {
        let base_dir = if let Ok(custom) = std::env::var("SPENDDASH_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Use a fixed base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding the persisted data files
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Path to the persisted inclusion rules
    pub fn rules_file(&self) -> PathBuf {
        self.data_dir().join("rules.json")
    }

    /// Create the base and data directories if missing
    pub fn ensure_directories(&self) -> Result<(), SpendDashError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SpendDashError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| SpendDashError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, SpendDashError> {
    // Unix (Linux/macOS): XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                SpendDashError::Config("Could not determine home directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("spenddash"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, SpendDashError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| SpendDashError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("spenddash"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendDashPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.rules_file(),
            temp_dir.path().join("data").join("rules.json")
        );
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        env::set_var("SPENDDASH_DATA_DIR", temp_dir.path());

        let paths = SpendDashPaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());

        env::remove_var("SPENDDASH_DATA_DIR");
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendDashPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();
        assert!(paths.data_dir().exists());
    }
}
