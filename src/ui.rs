//! Drawing - turns a RenderState into ratatui widgets

use ratatui::{prelude::*, widgets::*};

use crate::constants::{
    APP_NAME, APP_VERSION, CARD_HEIGHT, CARD_WIDTH, LOADING_TEXT, NO_RESULTS_TEXT,
    SEARCH_PLACEHOLDER,
};
use crate::messages::ui_events::InputMode;
use crate::messages::RenderState;
use crate::models::FlagStatus;
use crate::view::{Card, View};

/// Number of card columns that fit in `width`
pub fn grid_columns(width: u16) -> u16 {
    (width / CARD_WIDTH).max(1)
}

pub fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let search_height = if state.has_search() { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Title bar
            Constraint::Length(search_height), // Search box
            Constraint::Min(0),                // Body
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    draw_title_bar(f, state, chunks[0]);
    if state.has_search() {
        draw_search_box(f, state, chunks[1]);
    }
    draw_body(f, state, chunks[2]);
    draw_status_bar(f, state, chunks[3]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_title_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            format!(" {} ", APP_NAME),
            Style::default().fg(Color::Black).bg(Color::Cyan).bold(),
        ),
        Span::styled(format!(" v{} ", APP_VERSION), Style::default().fg(Color::DarkGray)),
        Span::styled(state.endpoint.as_str(), Style::default().fg(Color::Gray)),
    ]);
    f.render_widget(Paragraph::new(title), area);
}

fn draw_search_box(f: &mut Frame, state: &RenderState, area: Rect) {
    let editing = state.input_mode == InputMode::Editing;
    let border_style = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Search (/ to edit) ");

    let input = if state.query.is_empty() && !editing {
        Paragraph::new(SEARCH_PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(state.query.as_str())
    };
    f.render_widget(input.block(block), area);

    if editing {
        let max_x = area.x + area.width.saturating_sub(2);
        let cursor_cols = state.query[..state.cursor_position.min(state.query.len())]
            .chars()
            .count() as u16;
        let cursor_x = (area.x + cursor_cols + 1).min(max_x);
        f.set_cursor_position(Position::new(cursor_x, area.y + 1));
    }
}

fn draw_body(f: &mut Frame, state: &RenderState, area: Rect) {
    match &state.view {
        View::Loading => draw_message(f, area, LOADING_TEXT, Style::default().fg(Color::Gray)),
        View::Error(message) => draw_message(
            f,
            area,
            &format!("Error: {}", message),
            Style::default().fg(Color::Red).bold(),
        ),
        View::Loaded { cards, .. } if cards.is_empty() => {
            draw_message(f, area, NO_RESULTS_TEXT, Style::default().fg(Color::Gray))
        }
        View::Loaded { cards, .. } => draw_grid(f, cards, state.selected, area),
    }
}

/// A single centered line of text
fn draw_message(f: &mut Frame, area: Rect, text: &str, style: Style) {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, vertical[1]);
}

fn draw_grid(f: &mut Frame, cards: &[Card], selected: usize, area: Rect) {
    let columns = usize::from(grid_columns(area.width));
    let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));

    // Scroll so the selected row stays on screen
    let selected_row = selected / columns;
    let first_row = selected_row.saturating_sub(visible_rows - 1);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); visible_rows])
        .split(area);

    for (row_offset, row_area) in row_areas.iter().enumerate() {
        let row = first_row + row_offset;
        let start = row * columns;
        if start >= cards.len() {
            break;
        }

        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(*row_area);

        for (col, cell) in cells.iter().enumerate() {
            let index = start + col;
            if let Some(card) = cards.get(index) {
                draw_card(f, card, index == selected, *cell);
            }
        }
    }
}

fn draw_card(f: &mut Frame, card: &Card, is_selected: bool, area: Rect) {
    let border_style = if is_selected {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if is_selected { BorderType::Thick } else { BorderType::Rounded })
        .border_style(border_style)
        .title(format!(" {} ", card.key));

    let (icon, icon_color) = flag_icon(card.flag_status);
    let name_style = if is_selected {
        Style::default().fg(Color::Yellow).bold()
    } else {
        Style::default().bold()
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ", icon), Style::default().fg(icon_color)),
            Span::styled(card.image_src.as_str(), Style::default().fg(Color::Blue)),
        ]),
        Line::from(Span::styled(card.name.as_str(), name_style)),
        Line::from(Span::styled(card.alt.as_str(), Style::default().fg(Color::DarkGray))),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

/// Flag status icon and color
pub fn flag_icon(status: FlagStatus) -> (&'static str, Color) {
    match status {
        FlagStatus::Pending => ("…", Color::DarkGray),
        FlagStatus::Loaded => ("⚑", Color::Green),
        FlagStatus::Fallback => ("⚐", Color::Yellow),
    }
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let hints = match (&state.view, state.input_mode) {
        (View::Loading, _) => " Loading... | q:quit ".to_string(),
        (View::Error(_), _) => " q:quit ".to_string(),
        (View::Loaded { .. }, InputMode::Editing) => {
            " Esc/Enter:stop editing | ←/→:move | Ctrl+U:clear ".to_string()
        }
        (View::Loaded { .. }, InputMode::Normal) => {
            let search = if state.has_search() { "/:search | " } else { "" };
            format!(" {}arrows:select | ?:help | q:quit ", search)
        }
    };

    let mut summary = String::new();
    if let View::Loaded { cards, .. } = &state.view {
        summary.push_str(&format!("{} of {} countries", cards.len(), state.total_countries));
        if state.flags_pending > 0 {
            summary.push_str(&format!(" | {} flags loading", state.flags_pending));
        }
    }
    if let Some(ms) = state.load_time_ms {
        if !summary.is_empty() {
            summary.push_str(" | ");
        }
        summary.push_str(&format!("{}ms", ms));
    }

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(hints, Style::default().fg(Color::DarkGray)),
        Span::styled(summary, Style::default().fg(Color::Gray)),
    ]));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = r#"
 FLAGDEX - Keyboard Shortcuts

 SEARCH
   / or e             Edit the search box
   Esc / Enter        Stop editing
   Ctrl+U             Clear the search
   ← / →              Move the cursor

 GRID
   arrows / hjkl      Move the selection
   Home / End         First / last country

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
