//! Visual keypad
//!
//! The calculator's button grid. Buttons carry the engine action they
//! trigger, highlight when the matching key is typed, and hit-test mouse
//! clicks back to an action.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};
use tapecalc::prelude::{Action, Operator};

/// A single keypad button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    /// The symbol shown on the button
    pub label: &'static str,
    /// Whether the button is currently highlighted
    pub pressed: bool,
    /// The engine action this button triggers
    pub action: Action,
}

impl KeypadButton {
    const fn new(label: &'static str, action: Action) -> Self {
        Self {
            label,
            pressed: false,
            action,
        }
    }
}

/// The keypad layout - a 5x4 grid of buttons
/// ```text
/// [AC] [⌫] [%] [÷]
/// [ 7] [ 8] [ 9] [×]
/// [ 4] [ 5] [ 6] [-]
/// [ 1] [ 2] [ 3] [+]
/// [ 0] [ .] [ ±] [=]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order (5 rows x 4 cols)
    buttons: Vec<KeypadButton>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard calculator keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            // Row 1: AC ⌫ % ÷
            KeypadButton::new("AC", Action::Clear),
            KeypadButton::new("⌫", Action::Backspace),
            KeypadButton::new("%", Action::Percent),
            KeypadButton::new("÷", Action::Operator(Operator::Divide)),
            // Row 2: 7 8 9 ×
            KeypadButton::new("7", Action::Digit(7)),
            KeypadButton::new("8", Action::Digit(8)),
            KeypadButton::new("9", Action::Digit(9)),
            KeypadButton::new("×", Action::Operator(Operator::Multiply)),
            // Row 3: 4 5 6 -
            KeypadButton::new("4", Action::Digit(4)),
            KeypadButton::new("5", Action::Digit(5)),
            KeypadButton::new("6", Action::Digit(6)),
            KeypadButton::new("-", Action::Operator(Operator::Subtract)),
            // Row 4: 1 2 3 +
            KeypadButton::new("1", Action::Digit(1)),
            KeypadButton::new("2", Action::Digit(2)),
            KeypadButton::new("3", Action::Digit(3)),
            KeypadButton::new("+", Action::Operator(Operator::Add)),
            // Row 5: 0 . ± =
            KeypadButton::new("0", Action::Digit(0)),
            KeypadButton::new(".", Action::Decimal),
            KeypadButton::new("±", Action::ToggleSign),
            KeypadButton::new("=", Action::Equals),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Finds the button that triggers the given action
    #[must_use]
    pub fn find_by_action(&self, action: Action) -> Option<usize> {
        self.buttons.iter().position(|b| b.action == action)
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.pressed = false;
        }
    }

    /// Highlights the button that triggers the given action
    pub fn highlight(&mut self, action: Action) {
        self.release_all();
        if let Some(index) = self.find_by_action(action) {
            self.buttons[index].pressed = true;
        }
    }

    /// Returns an iterator over buttons with their (row, col) positions
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.buttons.iter().enumerate().map(move |(i, btn)| {
            let row = i / self.cols;
            let col = i % self.cols;
            ((row, col), btn)
        })
    }

    /// Converts a click position inside the rendered area to a button index
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // Account for the border (1 cell on each side)
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let btn_width = (area.width - 2) / self.cols as u16;
        let btn_height = (area.height - 2) / self.rows as u16;

        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = ((rel_x - 1) / btn_width) as usize;
        let row = ((rel_y - 1) / btn_height) as usize;

        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        if inner.width < 4 || inner.height < 5 {
            return; // Too small to render
        }

        let btn_width = inner.width / self.keypad.cols as u16;
        let btn_height = inner.height / self.keypad.rows as u16;

        for ((row, col), btn) in self.keypad.buttons_with_positions() {
            let x = inner.x + (col as u16 * btn_width);
            let y = inner.y + (row as u16 * btn_height);

            let style = if btn.pressed {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                match btn.action {
                    Action::Digit(_) | Action::Decimal => Style::default().fg(Color::White),
                    Action::Operator(_) => Style::default().fg(Color::Yellow),
                    Action::Equals => Style::default().fg(Color::Green),
                    Action::Clear => Style::default().fg(Color::Red),
                    _ => Style::default().fg(Color::Cyan),
                }
            };

            if btn_width >= 3 {
                let label = format!("[{}]", btn.label);
                let width = label.chars().count() as u16;
                let label_x = x + btn_width.saturating_sub(width) / 2;
                let label_y = y + btn_height / 2;

                if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                    buf.set_span(label_x, label_y, &Span::styled(label, style), btn_width);
                }
            }
        }
    }
}
