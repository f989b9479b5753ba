//! Keyboard input handling
//!
//! Maps raw key events onto the engine's logical actions. All behavioral
//! rules live in the engine; this layer only translates.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tapecalc::prelude::{Action, Operator};

/// What a key press asks the application to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward a logical action to the engine
    Input(Action),
    /// Clear the history tape
    ClearTape,
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        // Handle Ctrl+key combinations
        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('l') => KeyAction::ClearTape,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c) => Self::char_action(c),
            KeyCode::Enter => KeyAction::Input(Action::Equals),
            KeyCode::Backspace => KeyAction::Input(Action::Backspace),
            KeyCode::Delete => KeyAction::Input(Action::ClearEntry),
            KeyCode::Esc => KeyAction::Input(Action::Clear),
            _ => KeyAction::None,
        }
    }

    fn char_action(c: char) -> KeyAction {
        if let Some(digit) = c.to_digit(10) {
            return KeyAction::Input(Action::Digit(digit as u8));
        }
        if let Some(op) = Operator::from_key(c) {
            return KeyAction::Input(Action::Operator(op));
        }
        match c {
            '.' => KeyAction::Input(Action::Decimal),
            '=' => KeyAction::Input(Action::Equals),
            '%' => KeyAction::Input(Action::Percent),
            'n' => KeyAction::Input(Action::ToggleSign),
            'q' => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }
}
