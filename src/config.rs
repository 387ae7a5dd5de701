//! Configuration loading for BhramanNav

use crate::error::{BhramanError, Result};
use serde::Deserialize;
use std::path::Path;

/// Main configuration structure
#[derive(Clone, Debug, Deserialize)]
pub struct BhramanConfig {
    #[serde(default)]
    pub maze: MazeConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Maze input settings
#[derive(Clone, Debug, Deserialize)]
pub struct MazeConfig {
    /// Path to the ASCII maze file (default: maps/default.maze)
    #[serde(default = "default_map_path")]
    pub map_path: String,
}

/// Output configuration
#[derive(Clone, Debug, Deserialize)]
pub struct OutputConfig {
    /// Print the explored map after the run (default: true)
    #[serde(default = "default_print_map")]
    pub print_map: bool,
}

// Default value functions
fn default_map_path() -> String {
    "maps/default.maze".to_string()
}
fn default_print_map() -> bool {
    true
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            map_path: default_map_path(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            print_map: default_print_map(),
        }
    }
}

impl Default for BhramanConfig {
    fn default() -> Self {
        Self {
            maze: MazeConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl BhramanConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| BhramanError::Config(format!("Failed to read config file: {}", e)))?;
        let config: BhramanConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = BhramanConfig::default();
        assert_eq!(config.maze.map_path, "maps/default.maze");
        assert!(config.output.print_map);
    }

    #[test]
    fn test_load_partial_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[maze]\nmap_path = \"maps/lab.maze\"").unwrap();

        let config = BhramanConfig::load(file.path()).unwrap();
        assert_eq!(config.maze.map_path, "maps/lab.maze");
        // Unspecified sections fall back to defaults.
        assert!(config.output.print_map);
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[maze").unwrap();

        assert!(BhramanConfig::load(file.path()).is_err());
    }
}
