//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Search box editing
    StartEditing,
    StopEditing,
    CharInput(char),
    Backspace,
    CursorLeft,
    CursorRight,
    ClearQuery,

    // Grid selection
    SelectUp,
    SelectDown,
    SelectLeft,
    SelectRight,
    SelectFirst,
    SelectLast,
    /// Terminal width changed the number of grid columns
    GridResized { columns: u16 },

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(
    key: KeyEvent,
    input_mode: InputMode,
    show_help: bool,
    has_search: bool,
) -> Option<UiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => return Some(UiEvent::Quit),
            KeyCode::Char('u') if input_mode == InputMode::Editing => {
                return Some(UiEvent::ClearQuery)
            }
            _ => {}
        }
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    // Unbound Ctrl/Alt chords never reach the search box
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }

    match input_mode {
        InputMode::Normal => match key.code {
            KeyCode::Char('q') => Some(UiEvent::Quit),
            KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
            KeyCode::Char('/') | KeyCode::Char('e') if has_search => Some(UiEvent::StartEditing),
            KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::SelectUp),
            KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::SelectDown),
            KeyCode::Left | KeyCode::Char('h') => Some(UiEvent::SelectLeft),
            KeyCode::Right | KeyCode::Char('l') => Some(UiEvent::SelectRight),
            KeyCode::Home => Some(UiEvent::SelectFirst),
            KeyCode::End => Some(UiEvent::SelectLast),
            _ => None,
        },
        InputMode::Editing => match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(UiEvent::StopEditing),
            KeyCode::Left => Some(UiEvent::CursorLeft),
            KeyCode::Right => Some(UiEvent::CursorRight),
            KeyCode::Up => Some(UiEvent::SelectUp),
            KeyCode::Down => Some(UiEvent::SelectDown),
            KeyCode::Backspace => Some(UiEvent::Backspace),
            KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
            _ => None,
        },
    }
}
