//! Command handlers - business logic for processing UI events and network responses

use crate::app::AppState;
use crate::filter::matching_indices;
use crate::messages::ui_events::InputMode;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::FlagStatus;

impl AppState {
    // ========================
    // Country list
    // ========================

    /// The one and only country-list request of this run
    pub fn start_load(&mut self) -> Option<NetworkCommand> {
        if self.load_requested || !self.load.is_loading() {
            return None;
        }
        self.load_requested = true;

        let id = self.next_id();
        self.pending_request_id = Some(id);
        Some(NetworkCommand::FetchCountries {
            id,
            url: self.config.endpoint.clone(),
        })
    }

    pub fn handle_response(&mut self, response: NetworkResponse) {
        match response {
            NetworkResponse::FlagLoaded { index } => {
                self.settle_flag(index, FlagStatus::Loaded);
            }
            NetworkResponse::FlagFailed { index, .. } => {
                self.settle_flag(index, FlagStatus::Fallback);
            }
            countries => {
                if countries.request_id() != self.pending_request_id {
                    tracing::debug!(id = ?countries.request_id(), "Ignoring stale countries response");
                    return;
                }
                self.pending_request_id = None;
                self.load_time_ms = match &countries {
                    NetworkResponse::CountriesLoaded { time_ms, .. }
                    | NetworkResponse::CountriesFailed { time_ms, .. } => Some(*time_ms),
                    _ => None,
                };
                if let Some(result) = countries.into_load_result() {
                    self.load.settle(result);
                }
            }
        }
    }

    fn settle_flag(&mut self, index: usize, status: FlagStatus) {
        // Each flag settles once; a fallback is never retried
        if let Some(current) = self.flags.get_mut(&index) {
            if *current == FlagStatus::Pending {
                *current = status;
            }
        }
    }

    /// Flag loads for cards in the current view that have not been requested yet
    pub fn flag_requests(&mut self) -> Vec<NetworkCommand> {
        let Some(records) = self.load.records() else {
            return Vec::new();
        };
        let query = if self.config.search_enabled { self.query.as_str() } else { "" };

        let mut commands = Vec::new();
        for index in matching_indices(records, query) {
            if self.flags.contains_key(&index) {
                continue;
            }
            commands.push(NetworkCommand::LoadFlag {
                index,
                url: records[index].flag.clone(),
            });
        }
        for command in &commands {
            if let NetworkCommand::LoadFlag { index, .. } = command {
                self.flags.insert(*index, FlagStatus::Pending);
            }
        }
        commands
    }

    // ========================
    // Search box editing
    // ========================

    pub fn start_editing(&mut self) {
        if self.search_available() {
            self.input_mode = InputMode::Editing;
            self.cursor_position = self.query.len();
        }
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position = self.query[..self.cursor_position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.query.len() {
            self.cursor_position = self.query[self.cursor_position..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_position + i)
                .unwrap_or(self.query.len());
        }
    }

    pub fn enter_char(&mut self, c: char) {
        if self.input_mode != InputMode::Editing {
            return;
        }
        let cursor_pos = self.cursor_position.min(self.query.len());
        self.query.insert(cursor_pos, c);
        self.cursor_position = cursor_pos + c.len_utf8();
        self.query_changed();
    }

    pub fn delete_char(&mut self) {
        if self.input_mode != InputMode::Editing || self.cursor_position == 0 {
            return;
        }
        let prev_pos = self.query[..self.cursor_position]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);
        self.query.remove(prev_pos);
        self.cursor_position = prev_pos;
        self.query_changed();
    }

    pub fn clear_query(&mut self) {
        if self.query.is_empty() {
            return;
        }
        self.query.clear();
        self.cursor_position = 0;
        self.query_changed();
    }

    fn query_changed(&mut self) {
        self.selected = 0;
        tracing::debug!(query = %self.query, "Query changed");
    }

    // ========================
    // Grid selection
    // ========================

    fn visible_count(&self) -> usize {
        self.view().cards().len()
    }

    fn columns(&self) -> usize {
        usize::from(self.grid_columns.max(1))
    }

    pub fn set_grid_columns(&mut self, columns: u16) {
        self.grid_columns = columns.max(1);
    }

    pub fn select_up(&mut self) {
        self.selected = self.selected.saturating_sub(self.columns());
    }

    pub fn select_down(&mut self) {
        let next = self.selected + self.columns();
        if next < self.visible_count() {
            self.selected = next;
        }
    }

    pub fn select_left(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_right(&mut self) {
        if self.selected + 1 < self.visible_count() {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.visible_count().saturating_sub(1);
    }

    // ========================
    // Popups
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::LoadError;
    use crate::models::{CountryRecord, LoadState};

    fn countries() -> Vec<CountryRecord> {
        vec![
            CountryRecord::new("France", "f.png", "FR"),
            CountryRecord::new("Germany", "g.png", "DE"),
            CountryRecord::new("Nigeria", "n.png", "NG"),
        ]
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::default();
        let Some(NetworkCommand::FetchCountries { id, .. }) = state.start_load() else {
            panic!("expected a fetch command");
        };
        state.handle_response(NetworkResponse::CountriesLoaded {
            id,
            records: countries(),
            time_ms: 12,
        });
        state
    }

    fn type_query(state: &mut AppState, text: &str) {
        state.start_editing();
        for c in text.chars() {
            state.enter_char(c);
        }
    }

    #[test]
    fn test_start_load_only_once() {
        let mut state = AppState::default();
        assert!(state.start_load().is_some());
        assert!(state.start_load().is_none());
    }

    #[test]
    fn test_start_load_uses_configured_endpoint() {
        let config = Config {
            endpoint: "http://localhost:9999/all".to_string(),
            ..Config::default()
        };
        let mut state = AppState::new(config);
        match state.start_load() {
            Some(NetworkCommand::FetchCountries { url, .. }) => {
                assert_eq!(url, "http://localhost:9999/all")
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_successful_load() {
        let state = loaded_state();
        assert_eq!(state.load.records().map(|r| r.len()), Some(3));
        assert_eq!(state.pending_request_id, None);
        assert_eq!(state.load_time_ms, Some(12));
        assert_eq!(state.view().cards().len(), 3);
    }

    #[test]
    fn test_failed_load_is_terminal() {
        let mut state = AppState::default();
        let Some(NetworkCommand::FetchCountries { id, .. }) = state.start_load() else {
            panic!("expected a fetch command");
        };
        state.handle_response(NetworkResponse::CountriesFailed {
            id,
            error: LoadError::Http(500),
            time_ms: 3,
        });
        assert_eq!(state.load, LoadState::Error("Failed to fetch: 500".to_string()));
        assert!(state.start_load().is_none());
        assert!(state.flag_requests().is_empty());
    }

    #[test]
    fn test_stale_response_ignored() {
        let mut state = AppState::default();
        state.start_load();
        state.handle_response(NetworkResponse::CountriesLoaded {
            id: 42,
            records: countries(),
            time_ms: 1,
        });
        assert!(state.load.is_loading());
    }

    #[test]
    fn test_typing_filters_and_resets_selection() {
        let mut state = loaded_state();
        state.set_grid_columns(1);
        state.select_down();
        assert_eq!(state.selected, 1);

        type_query(&mut state, "ger");
        assert_eq!(state.selected, 0);

        let view = state.view();
        let names: Vec<&str> = view.cards().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Germany", "Nigeria"]);
    }

    #[test]
    fn test_editing_not_available_while_loading() {
        let mut state = AppState::default();
        state.start_editing();
        assert_eq!(state.input_mode, InputMode::Normal);
        state.enter_char('x');
        assert!(state.query.is_empty());
    }

    #[test]
    fn test_editing_not_available_when_search_disabled() {
        let mut state = AppState::new(Config {
            search_enabled: false,
            ..Config::default()
        });
        state.start_load();
        state.handle_response(NetworkResponse::CountriesLoaded {
            id: 1,
            records: countries(),
            time_ms: 1,
        });
        state.start_editing();
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_cursor_editing_with_multibyte_chars() {
        let mut state = loaded_state();
        type_query(&mut state, "çö");
        assert_eq!(state.cursor_position, "çö".len());

        state.move_cursor_left();
        state.enter_char('x');
        assert_eq!(state.query, "çxö");

        state.move_cursor_right();
        state.delete_char();
        assert_eq!(state.query, "çx");

        state.clear_query();
        assert!(state.query.is_empty());
        assert_eq!(state.cursor_position, 0);
    }

    #[test]
    fn test_flag_requests_once_per_record() {
        let mut state = loaded_state();
        type_query(&mut state, "france");

        let first = state.flag_requests();
        assert_eq!(first.len(), 1);
        assert!(matches!(&first[0], NetworkCommand::LoadFlag { index: 0, url } if url == "f.png"));

        state.clear_query();
        let second = state.flag_requests();
        let indices: Vec<usize> = second
            .iter()
            .filter_map(|c| match c {
                NetworkCommand::LoadFlag { index, .. } => Some(*index),
                _ => None,
            })
            .collect();
        assert_eq!(indices, vec![1, 2]);
        assert!(state.flag_requests().is_empty());
    }

    #[test]
    fn test_failed_flag_switches_to_placeholder() {
        let mut state = loaded_state();
        state.flag_requests();
        state.handle_response(NetworkResponse::FlagFailed {
            index: 1,
            reason: "HTTP 404".to_string(),
        });
        state.handle_response(NetworkResponse::FlagLoaded { index: 0 });

        let view = state.view();
        assert_eq!(view.cards()[0].image_src, "f.png");
        assert_eq!(view.cards()[1].image_src, state.config.placeholder_flag_url);
        assert_eq!(view.cards()[2].flag_status, FlagStatus::Pending);

        // A late success does not undo the fallback
        state.handle_response(NetworkResponse::FlagLoaded { index: 1 });
        assert_eq!(state.view().cards()[1].flag_status, FlagStatus::Fallback);
    }

    #[test]
    fn test_grid_navigation() {
        let mut state = loaded_state();
        state.set_grid_columns(2);

        state.select_right();
        assert_eq!(state.selected, 1);
        state.select_right();
        assert_eq!(state.selected, 2);
        state.select_right();
        assert_eq!(state.selected, 2);

        state.select_up();
        assert_eq!(state.selected, 0);
        state.select_down();
        assert_eq!(state.selected, 2);
        // No card below the last row
        state.select_down();
        assert_eq!(state.selected, 2);

        state.select_first();
        assert_eq!(state.selected, 0);
        state.select_last();
        assert_eq!(state.selected, 2);
    }

    #[test]
    fn test_render_state_clamps_selection() {
        let mut state = loaded_state();
        state.select_last();
        state.query = "germany".to_string();
        let render = state.to_render_state();
        assert_eq!(render.selected, 0);
        assert_eq!(render.total_countries, 3);
    }
}
