//! App state - pure data structure with no I/O logic

use std::collections::HashMap;

use crate::config::Config;
use crate::messages::ui_events::InputMode;
use crate::messages::RenderState;
use crate::models::{FlagStatus, LoadState};
use crate::view::{build_view, View, ViewOptions};

/// Main application state - pure data, no I/O
pub struct AppState {
    pub config: Config,
    view_options: ViewOptions,

    // Country list
    pub load: LoadState,
    pub load_requested: bool,
    pub next_request_id: u64,
    pub pending_request_id: Option<u64>,
    pub load_time_ms: Option<u64>,

    // Search box
    pub query: String,
    pub cursor_position: usize,
    pub input_mode: InputMode,

    // Grid
    pub selected: usize,
    pub grid_columns: u16,

    /// Flag image status keyed by record index; an entry means a load was requested
    pub flags: HashMap<usize, FlagStatus>,

    // Popups
    pub show_help: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let view_options = config.view_options();
        AppState {
            config,
            view_options,
            load: LoadState::Loading,
            load_requested: false,
            next_request_id: 1,
            pending_request_id: None,
            load_time_ms: None,
            query: String::new(),
            cursor_position: 0,
            input_mode: InputMode::Normal,
            selected: 0,
            grid_columns: 1,
            flags: HashMap::new(),
            show_help: false,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Current derived view
    pub fn view(&self) -> View {
        build_view(&self.load, &self.query, &self.flags, &self.view_options)
    }

    /// Whether the search box is shown and accepts input
    pub fn search_available(&self) -> bool {
        self.config.search_enabled && self.load.records().is_some()
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        let view = self.view();
        let selected = self.selected.min(view.cards().len().saturating_sub(1));
        let flags_pending = self
            .flags
            .values()
            .filter(|status| **status == FlagStatus::Pending)
            .count();

        RenderState {
            view,
            query: self.query.clone(),
            cursor_position: self.cursor_position,
            input_mode: self.input_mode,
            selected,
            endpoint: self.config.endpoint.clone(),
            total_countries: self.load.records().map_or(0, |records| records.len()),
            flags_pending,
            load_time_ms: self.load_time_ms,
            show_help: self.show_help,
        }
    }
}
