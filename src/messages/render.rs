//! Render state - data structure sent from App layer to UI for rendering

use crate::messages::ui_events::InputMode;
use crate::view::View;

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    pub view: View,

    // Search box
    pub query: String,
    pub cursor_position: usize,
    pub input_mode: InputMode,

    // Grid
    pub selected: usize,

    // Status bar
    pub endpoint: String,
    pub total_countries: usize,
    pub flags_pending: usize,
    pub load_time_ms: Option<u64>,

    // Popups
    pub show_help: bool,
}

impl RenderState {
    /// Whether the search box is on screen
    pub fn has_search(&self) -> bool {
        matches!(self.view, View::Loaded { search: Some(_), .. })
    }
}
