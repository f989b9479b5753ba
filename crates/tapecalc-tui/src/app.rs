//! Application state
//!
//! Wires the engine to its collaborators: the history tape it feeds, the
//! keypad it highlights, and the quit flag the event loop watches.

use tapecalc::prelude::{Action, Engine, HistoryTape};

use crate::input::KeyAction;
use crate::keypad::Keypad;
use crate::ui;

/// Calculator application state
#[derive(Debug)]
pub struct App {
    /// The calculator state machine
    engine: Engine,
    /// Session history, fed by successful equals presses
    tape: HistoryTape,
    /// Visual keypad
    keypad: Keypad,
    /// Whether the app should quit
    should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Creates an app with the default tape capacity
    #[must_use]
    pub fn new() -> Self {
        Self::with_tape_capacity(HistoryTape::DEFAULT_MAX_ENTRIES)
    }

    /// Creates an app with a custom tape capacity
    #[must_use]
    pub fn with_tape_capacity(max_entries: usize) -> Self {
        Self {
            engine: Engine::new(),
            tape: HistoryTape::with_capacity(max_entries),
            keypad: Keypad::new(),
            should_quit: false,
        }
    }

    /// Returns the engine
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Returns the history tape
    #[must_use]
    pub fn tape(&self) -> &HistoryTape {
        &self.tape
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a mapped key action
    pub fn handle_key(&mut self, action: KeyAction) {
        match action {
            KeyAction::Input(action) => self.dispatch(action),
            KeyAction::ClearTape => {
                tracing::debug!("history tape cleared");
                self.tape.clear();
            }
            KeyAction::Quit => self.should_quit = true,
            KeyAction::None => {}
        }
    }

    /// Dispatches a logical action to the engine, recording any history
    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!(?action, "dispatch");
        self.keypad.highlight(action);
        if let Some(entry) = self.engine.apply(action) {
            tracing::debug!(expression = %entry.expression, result = %entry.result, "recorded");
            self.tape.push(entry);
        }
    }

    /// Handles a left click at the given screen position
    pub fn click(&mut self, areas: &ui::Areas, x: u16, y: u16) {
        if let Some(index) = self.keypad.hit_test(areas.keypad, x, y) {
            if let Some(button) = self.keypad.get(index) {
                let action = button.action;
                self.dispatch(action);
            }
        } else if let Some(index) = ui::history_hit(areas.history, x, y) {
            if let Some(entry) = self.tape.get(index) {
                tracing::debug!(id = %entry.id, "history recall");
                self.engine.select_entry(entry);
            }
        }
    }
}
