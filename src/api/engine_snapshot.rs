use serde::Serialize;

use crate::core::RadarLayout;
use crate::error::{RadarError, RadarResult};
use crate::interaction::ExplorerView;
use crate::render::Renderer;

use super::RadarEngine;

/// Serializable snapshot of engine state for debugging and host persistence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarEngineSnapshot {
    pub radius: f64,
    pub progress: f64,
    pub explorer_view: ExplorerView,
    pub active_category: Option<String>,
    pub hovered_skill: Option<String>,
    /// Layout of the active category at current progress, if any.
    pub layout: Option<RadarLayout>,
}

impl<R: Renderer> RadarEngine<R> {
    pub fn snapshot(&self) -> RadarResult<RadarEngineSnapshot> {
        Ok(RadarEngineSnapshot {
            radius: self.config().radius,
            progress: self.progress(),
            explorer_view: self.explorer_view(),
            active_category: self.active_category().map(|c| c.id.clone()),
            hovered_skill: self.hovered_skill().map(str::to_owned),
            layout: self.layout()?,
        })
    }

    /// Pretty JSON rendering of `snapshot`.
    pub fn snapshot_json_pretty(&self) -> RadarResult<String> {
        let snapshot = self.snapshot()?;
        serde_json::to_string_pretty(&snapshot)
            .map_err(|e| RadarError::InvalidArgument(format!("failed to serialize snapshot: {e}")))
    }
}
