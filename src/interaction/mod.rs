use serde::{Deserialize, Serialize};

/// Presentation mode of the category overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExplorerView {
    Grid,
    List,
}

/// View-local state of the skill explorer.
///
/// Tracks which category is expanded, which skill is hovered, and the
/// grid/list presentation toggle. All fields are plain request-scoped state;
/// the engine owns one instance and mutates it through explicit calls.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerState {
    view: ExplorerView,
    active_category: Option<String>,
    hovered_skill: Option<String>,
}

impl Default for ExplorerState {
    fn default() -> Self {
        Self {
            view: ExplorerView::Grid,
            active_category: None,
            hovered_skill: None,
        }
    }
}

impl ExplorerState {
    #[must_use]
    pub fn view(&self) -> ExplorerView {
        self.view
    }

    pub fn toggle_view(&mut self) {
        self.view = match self.view {
            ExplorerView::Grid => ExplorerView::List,
            ExplorerView::List => ExplorerView::Grid,
        };
    }

    #[must_use]
    pub fn active_category(&self) -> Option<&str> {
        self.active_category.as_deref()
    }

    /// Activates a category, or deactivates it when already active.
    ///
    /// Returns `true` when the category ends up active. Hover state is
    /// cleared on every toggle since it refers to the previous selection.
    pub fn toggle_category(&mut self, id: &str) -> bool {
        self.hovered_skill = None;
        if self.active_category.as_deref() == Some(id) {
            self.active_category = None;
            false
        } else {
            self.active_category = Some(id.to_owned());
            true
        }
    }

    pub fn clear_active_category(&mut self) {
        self.active_category = None;
        self.hovered_skill = None;
    }

    #[must_use]
    pub fn hovered_skill(&self) -> Option<&str> {
        self.hovered_skill.as_deref()
    }

    pub fn set_hovered_skill(&mut self, name: Option<&str>) {
        self.hovered_skill = name.map(str::to_owned);
    }
}
