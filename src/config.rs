//! Run configuration
//!
//! The part of the host runner's configuration the splitter needs: which spec patterns to run and
//! which paths to leave out. Loaded from a JSON file (`specsplit.json` by default):
//!
//! ```json
//! { "specs": ["./test/specs/**/*.js"], "exclude": ["/node_modules/"] }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "specsplit.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write config file at {config_path}: {source}")]
    ConfigWriteError {
        config_path: PathBuf,
        source: std::io::Error,
    },
}

/// Spec selection for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Glob patterns (or plain paths) of spec files.
    pub specs: Vec<String>,
    /// Glob patterns, or path fragments matched as substrings.
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
    /// Directory relative patterns resolve against; the config file's directory when loaded.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

fn default_exclude() -> Vec<String> {
    vec!["/node_modules/".to_string()]
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            specs: Vec::new(),
            exclude: default_exclude(),
            base_dir: None,
        }
    }
}

impl RunConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the spec patterns
    pub fn with_specs<I, S>(mut self, specs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.specs = specs.into_iter().map(Into::into).collect();
        self
    }

    /// Set the exclude patterns
    pub fn with_exclude<I, S>(mut self, exclude: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude = exclude.into_iter().map(Into::into).collect();
        self
    }

    /// Set the directory relative patterns resolve against
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Directory relative patterns resolve against (`.` when unset).
    pub fn base_dir(&self) -> &Path {
        self.base_dir.as_deref().unwrap_or_else(|| Path::new("."))
    }

    /// Load a config file; relative patterns in it resolve against the file's directory.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Self, ConfigError> {
        let config_path = config_path.as_ref();
        let content = std::fs::read_to_string(config_path).map_err(|source| ConfigError::ConfigReadError {
            config_path: config_path.to_path_buf(),
            source,
        })?;

        let mut config: RunConfig =
            serde_json::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        let dir = config_path.parent().filter(|p| !p.as_os_str().is_empty());
        config.base_dir = Some(dir.map_or_else(|| PathBuf::from("."), Path::to_path_buf));
        tracing::debug!(path = %config_path.display(), specs = config.specs.len(), "loaded run config");
        Ok(config)
    }

    /// Write the config as pretty JSON, creating parent directories.
    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> Result<(), ConfigError> {
        let config_path = config_path.as_ref();
        let write_error = |source| ConfigError::ConfigWriteError {
            config_path: config_path.to_path_buf(),
            source,
        };
        if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }
        let content = serde_json::to_string_pretty(self).map_err(|source| ConfigError::ConfigParseError {
            config_path: config_path.to_path_buf(),
            source,
        })?;
        std::fs::write(config_path, content).map_err(write_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_exclude_matches_host_default() {
        let config = RunConfig::default();
        assert!(config.specs.is_empty());
        assert_eq!(config.exclude, vec!["/node_modules/".to_string()]);
        assert_eq!(config.base_dir(), Path::new("."));
    }

    #[test]
    fn test_builder() {
        let config = RunConfig::new()
            .with_specs(["a/*.js", "b.js"])
            .with_exclude(Vec::<String>::new())
            .with_base_dir("/tmp/project");
        assert_eq!(config.specs, vec!["a/*.js", "b.js"]);
        assert!(config.exclude.is_empty());
        assert_eq!(config.base_dir(), Path::new("/tmp/project"));
    }

    #[test]
    fn test_missing_exclude_uses_default() {
        let config: RunConfig = serde_json::from_str(r#"{"specs": ["x.js"]}"#).unwrap();
        assert_eq!(config.exclude, default_exclude());
    }

    #[test]
    fn test_load_sets_base_dir_to_config_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join(DEFAULT_CONFIG_FILE);
        RunConfig::new().with_specs(["specs/*.js"]).save_to_path(&path).unwrap();

        let loaded = RunConfig::load_from_path(&path).unwrap();
        assert_eq!(loaded.specs, vec!["specs/*.js"]);
        assert_eq!(loaded.base_dir(), temp_dir.path().join("nested"));
    }

    #[test]
    fn test_load_errors() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.json");
        assert!(matches!(
            RunConfig::load_from_path(&missing),
            Err(ConfigError::ConfigReadError { .. })
        ));

        let bad = temp_dir.path().join("bad.json");
        std::fs::write(&bad, "{ specs: nope").unwrap();
        let err = RunConfig::load_from_path(&bad).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("bad.json"));
    }
}
