//! Path management for the expense tracker
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENSE_TRACKER_DIR` environment variable (if set)
//! 2. The platform config directory, e.g. `~/.config/expense-tracker`
//! 3. The current directory, when no home directory can be determined

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::ExpenseError;

/// Environment variable that overrides the base directory
pub const BASE_DIR_ENV: &str = "EXPENSE_TRACKER_DIR";

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    /// Base directory for settings and the default data file
    base_dir: PathBuf,
}

impl ExpensePaths {
    /// Resolve the base directory from the environment and platform
    pub fn new() -> Self {
        let base_dir = match std::env::var_os(BASE_DIR_ENV) {
            Some(custom) => PathBuf::from(custom),
            None => resolve_default_path(),
        };

        Self { base_dir }
    }

    /// Create ExpensePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("settings.json")
    }

    /// Resolve a data file name against the base directory
    ///
    /// Absolute paths are returned unchanged.
    pub fn data_file(&self, name: impl AsRef<Path>) -> PathBuf {
        self.base_dir.join(name)
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), ExpenseError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ExpenseError::Io(format!("Failed to create base directory: {}", e)))
    }
}

impl Default for ExpensePaths {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve_default_path() -> PathBuf {
    ProjectDirs::from("", "", "expense-tracker")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("settings.json"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();

        env::set_var(BASE_DIR_ENV, temp_dir.path());
        let paths = ExpensePaths::new();
        env::remove_var(BASE_DIR_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_data_file_resolution() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.data_file("expenses.db"), temp_dir.path().join("expenses.db"));

        let absolute = temp_dir.path().join("elsewhere").join("data.db");
        assert_eq!(paths.data_file(&absolute), absolute);
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().join("nested").join("base"));

        paths.ensure_directories().unwrap();
        assert!(paths.base_dir().exists());
    }
}
