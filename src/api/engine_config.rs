use serde::{Deserialize, Serialize};

use crate::error::{RadarError, RadarResult};

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadarEngineConfig {
    /// Chart radius in pixels; the bounding square has side `2 * radius`.
    pub radius: f64,
    /// Animation progress applied until the host drives it explicitly.
    #[serde(default = "default_initial_progress")]
    pub initial_progress: f64,
}

impl RadarEngineConfig {
    /// Creates a config with the chart fully revealed.
    #[must_use]
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            initial_progress: default_initial_progress(),
        }
    }

    /// Sets the initial animation progress.
    #[must_use]
    pub fn with_initial_progress(mut self, progress: f64) -> Self {
        self.initial_progress = progress;
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> RadarResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| RadarError::InvalidArgument(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> RadarResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| RadarError::InvalidArgument(format!("failed to parse config: {e}")))
    }
}

fn default_initial_progress() -> f64 {
    1.0
}
