use tracing::{debug, trace, warn};

use crate::core::{RadarLayout, SkillCatalog, SkillCategory, Viewport, compute_radar_layout};
use crate::error::{RadarError, RadarResult};
use crate::interaction::{ExplorerState, ExplorerView};
use crate::render::{RenderFrame, Renderer};

use super::frame_builder::build_radar_frame;
use super::validation::{validate_engine_config, validate_radar_style};
use super::{RadarEngineConfig, RadarStyle};

/// Main orchestration facade consumed by host applications.
///
/// `RadarEngine` coordinates the skill catalog, explorer state, animation
/// progress, and renderer calls.
pub struct RadarEngine<R: Renderer> {
    renderer: R,
    config: RadarEngineConfig,
    style: RadarStyle,
    catalog: SkillCatalog,
    explorer: ExplorerState,
    progress: f64,
}

impl<R: Renderer> RadarEngine<R> {
    pub fn new(renderer: R, config: RadarEngineConfig) -> RadarResult<Self> {
        let config = validate_engine_config(config)?;
        debug!(radius = config.radius, "radar engine init");

        Ok(Self {
            renderer,
            config,
            style: RadarStyle::default(),
            catalog: SkillCatalog::default(),
            explorer: ExplorerState::default(),
            progress: config.initial_progress,
        })
    }

    #[must_use]
    pub fn config(&self) -> RadarEngineConfig {
        self.config
    }

    #[must_use]
    pub fn style(&self) -> RadarStyle {
        self.style
    }

    pub fn set_style(&mut self, style: RadarStyle) -> RadarResult<()> {
        self.style = validate_radar_style(style)?;
        Ok(())
    }

    /// Replaces the skill catalog.
    ///
    /// A selection referring to a category that no longer exists is cleared.
    pub fn set_catalog(&mut self, catalog: SkillCatalog) {
        debug!(category_count = catalog.len(), "set skill catalog");
        let stale = match self.explorer.active_category() {
            Some(active) if !catalog.contains(active) => Some(active.to_owned()),
            _ => None,
        };
        if let Some(active) = stale {
            warn!(category = %active, "active category missing from new catalog");
            self.explorer.clear_active_category();
        }
        self.catalog = catalog;
    }

    #[must_use]
    pub fn catalog(&self) -> &SkillCatalog {
        &self.catalog
    }

    /// Activates a category, or deactivates it when already active.
    ///
    /// Returns the now-active category data, `None` after deactivation.
    pub fn toggle_category(&mut self, id: &str) -> RadarResult<Option<&SkillCategory>> {
        if !self.catalog.contains(id) {
            return Err(RadarError::InvalidArgument(format!(
                "unknown category id `{id}`"
            )));
        }

        let active = self.explorer.toggle_category(id);
        trace!(category = id, active, "toggle category");
        Ok(if active { self.catalog.get(id) } else { None })
    }

    #[must_use]
    pub fn active_category(&self) -> Option<&SkillCategory> {
        self.explorer
            .active_category()
            .and_then(|id| self.catalog.get(id))
    }

    /// Marks a skill of the active category as hovered, or clears the hover.
    pub fn set_hovered_skill(&mut self, name: Option<&str>) -> RadarResult<()> {
        if let Some(name) = name {
            let category = self.active_category().ok_or_else(|| {
                RadarError::InvalidArgument(
                    "cannot hover a skill without an active category".to_owned(),
                )
            })?;
            if !category.skills.iter().any(|skill| skill.name == name) {
                return Err(RadarError::InvalidArgument(format!(
                    "unknown skill `{}` in category `{}`",
                    name, category.id
                )));
            }
        }
        self.explorer.set_hovered_skill(name);
        Ok(())
    }

    #[must_use]
    pub fn hovered_skill(&self) -> Option<&str> {
        self.explorer.hovered_skill()
    }

    #[must_use]
    pub fn explorer_view(&self) -> ExplorerView {
        self.explorer.view()
    }

    pub fn toggle_explorer_view(&mut self) {
        self.explorer.toggle_view();
    }

    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Updates the caller-driven animation progress.
    pub fn set_progress(&mut self, progress: f64) -> RadarResult<()> {
        if !progress.is_finite() || !(0.0..=1.0).contains(&progress) {
            return Err(RadarError::InvalidArgument(
                "progress must be finite and in [0, 1]".to_owned(),
            ));
        }
        trace!(progress, "set animation progress");
        self.progress = progress;
        Ok(())
    }

    /// Computes the layout of the active category at current progress.
    ///
    /// Returns `None` while no category is active.
    pub fn layout(&self) -> RadarResult<Option<RadarLayout>> {
        match self.active_category() {
            Some(category) => Ok(Some(compute_radar_layout(
                &category.skills,
                self.config.radius,
                self.progress,
            )?)),
            None => Ok(None),
        }
    }

    /// Builds the current frame and dispatches it to the renderer backend.
    ///
    /// Without an active category an empty frame is rendered so backends can
    /// clear their surface.
    pub fn render(&mut self) -> RadarResult<()> {
        let frame = match self.active_category() {
            Some(category) => {
                let layout =
                    compute_radar_layout(&category.skills, self.config.radius, self.progress)?;
                build_radar_frame(category, &layout, self.style, self.explorer.hovered_skill())?
            }
            None => RenderFrame::new(Viewport::square_for_radius(self.config.radius)),
        };
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
