//! Screen layout and rendering
//!
//! Pure translation from application state to widgets: the display pane
//! (secondary expression line above the current value), the keypad, the
//! history tape, and a help footer. The same layout function drives both
//! rendering and mouse hit-testing.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::App;
use crate::keypad::KeypadWidget;

/// Screen regions, shared between rendering and mouse handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Areas {
    /// Display pane (expression line + current value)
    pub display: Rect,
    /// Keypad grid
    pub keypad: Rect,
    /// History tape sidebar
    pub history: Rect,
    /// Help footer
    pub help: Rect,
}

/// Splits the terminal area into the screen regions
#[must_use]
pub fn layout(area: Rect) -> Areas {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(28)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),  // Display
            Constraint::Min(12),    // Keypad
            Constraint::Length(1),  // Help
        ])
        .split(columns[0]);

    Areas {
        display: left[0],
        keypad: left[1],
        help: left[2],
        history: columns[1],
    }
}

/// Maps a click inside the history pane to a tape index (0 = newest)
#[must_use]
pub fn history_hit(area: Rect, x: u16, y: u16) -> Option<usize> {
    if area.width < 3 || area.height < 3 {
        return None;
    }
    let inside_x = x > area.x && x < area.x + area.width - 1;
    let inside_y = y > area.y && y < area.y + area.height - 1;
    (inside_x && inside_y).then(|| usize::from(y - area.y - 1))
}

/// Renders the whole screen
pub fn render(app: &App, frame: &mut Frame) {
    let areas = layout(frame.area());
    frame.render_widget(display_widget(app), areas.display);
    frame.render_widget(KeypadWidget::new(app.keypad()), areas.keypad);
    frame.render_widget(history_widget(app), areas.history);
    frame.render_widget(help_widget(), areas.help);
}

/// Builds the display pane widget
#[must_use]
pub fn display_widget(app: &App) -> Paragraph<'_> {
    // Secondary line: "<previous> <operator>" while an operation is pending.
    let expression = app.engine().expression().unwrap_or_default();

    let value = app.engine().display();
    let value_style = if app.engine().is_error() {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    };

    Paragraph::new(vec![
        Line::from(Span::styled(
            expression,
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(value.to_string(), value_style)),
    ])
    .alignment(Alignment::Right)
    .block(
        Block::default()
            .title(" Display ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    )
}

/// Builds the history tape widget, newest entry first
#[must_use]
pub fn history_widget(app: &App) -> List<'_> {
    let items: Vec<ListItem> = if app.tape().is_empty() {
        vec![ListItem::new(Span::styled(
            "No history yet",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))]
    } else {
        app.tape()
            .iter()
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(entry.expression.clone(), Style::default().fg(Color::Gray)),
                    Span::raw(" "),
                    Span::styled(entry.result.clone(), Style::default().fg(Color::Cyan)),
                ]))
            })
            .collect()
    };

    List::new(items).block(
        Block::default()
            .title(" History Tape ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue)),
    )
}

/// Builds the help footer widget
#[must_use]
pub fn help_widget() -> Paragraph<'static> {
    Paragraph::new(Span::styled(
        " q quit | Esc clear | Del CE | n ± | Ctrl+L clear tape | click keypad/history",
        Style::default().fg(Color::DarkGray),
    ))
}
