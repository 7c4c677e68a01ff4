//! Prepared-run persistence
//!
//! `specsplit split` and `specsplit cleanup` run as separate processes around the test runner, so the
//! [`PreparedRun`] travels between them as a JSON file.

use std::path::Path;

use super::{PreparedRun, SplitError};

/// Default state file, in the working directory.
pub const DEFAULT_STATE_FILE: &str = ".specsplit-state.json";

impl PreparedRun {
    /// Write the prepared run as pretty JSON.
    pub fn save_state<P: AsRef<Path>>(&self, path: P) -> Result<(), SplitError> {
        let path = path.as_ref();
        let state_error = |message: String| SplitError::State {
            path: path.to_path_buf(),
            message,
        };
        let content = serde_json::to_string_pretty(self).map_err(|e| state_error(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| state_error(format!("failed to write: {}", e)))?;
        tracing::debug!(path = %path.display(), generated = self.generated.len(), "saved run state");
        Ok(())
    }

    /// Read a prepared run written by [`PreparedRun::save_state`].
    pub fn load_state<P: AsRef<Path>>(path: P) -> Result<Self, SplitError> {
        let path = path.as_ref();
        let state_error = |message: String| SplitError::State {
            path: path.to_path_buf(),
            message,
        };
        let content = std::fs::read_to_string(path).map_err(|e| state_error(format!("failed to read: {}", e)))?;
        serde_json::from_str(&content).map_err(|e| state_error(format!("invalid state: {}", e)))
    }
}
