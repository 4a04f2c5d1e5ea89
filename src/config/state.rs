// src/config/state.rs
use super::options::AppOptions;

/// Which center view is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    Documents,
    Table,
}

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Indices into the loaded feed selected in the left panel
    pub selected_articles: Vec<usize>,

    /// Active center view (Documents / Table)
    pub view: ViewMode,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            selected_articles: Vec::new(),
            view: ViewMode::Documents,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
