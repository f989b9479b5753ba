//! Calculator engine: the keypad state machine
//!
//! The engine consumes discrete logical actions and mutates a small state
//! record (edited value, pending operand, pending operator, edit flags).
//! It is independent of any UI: adapters translate pointer and key events
//! into [`Action`] values and render [`Engine::display`] back out. A
//! successful [`Action::Equals`] yields a [`HistoryEntry`] for the caller's
//! tape; the engine itself never owns the tape.

use crate::history::HistoryEntry;
use crate::operator::Operator;
use crate::value::{format_value, parse_value, round_significant};

/// Maximum digits accepted in the edited value (sign and decimal point
/// excluded from the count)
pub const MAX_DIGITS: usize = 16;

/// Display text shown after a failed operation
pub const ERROR_DISPLAY: &str = "Error";

/// A logical calculator action
///
/// The closed input set the engine understands. Adapters pre-validate raw
/// UI events into these, so the engine never sees malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Type a digit (0-9)
    Digit(u8),
    /// Type the decimal point
    Decimal,
    /// Choose an operator, folding any chained operation first
    Operator(Operator),
    /// Evaluate the pending operation
    Equals,
    /// Reset to the initial state
    Clear,
    /// Reset only the edited value
    ClearEntry,
    /// Drop the last typed character
    Backspace,
    /// Negate the edited value
    ToggleSign,
    /// Divide the edited value by 100
    Percent,
}

/// The calculator state machine
///
/// Created once per session and mutated in place by every action; `Clear`
/// is the only full reset. Invariants: the display is always a valid numeric
/// literal or the `"Error"` sentinel, holds at most one decimal point and at
/// most [`MAX_DIGITS`] digits, and a pending operator is stored if and only
/// if a previous operand is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine {
    /// Textual value being edited or displayed
    current: String,
    /// Operand stored while an operator is pending
    previous: Option<String>,
    /// Operator awaiting its right-hand operand
    pending: Option<Operator>,
    /// Next digit replaces the display instead of appending
    awaiting_operand: bool,
    /// The display holds a completed result
    just_evaluated: bool,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates an engine in the initial state (display `"0"`)
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: "0".to_string(),
            previous: None,
            pending: None,
            awaiting_operand: false,
            just_evaluated: false,
        }
    }

    /// Applies one logical action.
    ///
    /// Returns the history record produced by a successful `Equals`; every
    /// other action (and a failed `Equals`) returns `None`.
    pub fn apply(&mut self, action: Action) -> Option<HistoryEntry> {
        match action {
            Action::Digit(digit) => self.digit(digit),
            Action::Decimal => self.decimal(),
            Action::Operator(op) => self.operator(op),
            Action::Equals => return self.equals(),
            Action::Clear => *self = Self::new(),
            Action::ClearEntry => self.clear_entry(),
            Action::Backspace => self.backspace(),
            Action::ToggleSign => self.toggle_sign(),
            Action::Percent => self.percent(),
        }
        None
    }

    /// The value currently shown on the display
    #[must_use]
    pub fn display(&self) -> &str {
        &self.current
    }

    /// The secondary display line, `"<previous> <op>"`, while an operation
    /// is pending; `None` otherwise
    #[must_use]
    pub fn expression(&self) -> Option<String> {
        match (&self.previous, self.pending) {
            (Some(previous), Some(op)) => Some(format!("{previous} {op}")),
            _ => None,
        }
    }

    /// True while the display shows the error sentinel
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.current == ERROR_DISPLAY
    }

    /// Recalls a history entry's result onto the display.
    ///
    /// Leaves any pending operation untouched, so a recalled value can serve
    /// as the right-hand operand.
    pub fn select_entry(&mut self, entry: &HistoryEntry) {
        self.current = entry.result.clone();
        self.awaiting_operand = false;
        self.just_evaluated = false;
    }

    fn digit(&mut self, digit: u8) {
        let Some(d) = char::from_digit(u32::from(digit), 10) else {
            return;
        };
        // A fresh result, a pending operator, or the error sentinel all mean
        // the next digit starts a new number.
        if self.is_error() || self.just_evaluated || self.awaiting_operand {
            self.current = d.to_string();
            self.awaiting_operand = false;
            self.just_evaluated = false;
        } else if self.current == "0" {
            self.current = d.to_string();
        } else if digit_count(&self.current) < MAX_DIGITS {
            self.current.push(d);
        }
    }

    fn decimal(&mut self) {
        if self.is_error() || self.just_evaluated || self.awaiting_operand {
            self.current = "0.".to_string();
            self.awaiting_operand = false;
            self.just_evaluated = false;
        } else if !self.current.contains('.') {
            self.current.push('.');
        }
    }

    fn operator(&mut self, op: Operator) {
        if self.is_error() {
            return;
        }
        match self.pending.zip(self.previous.as_deref().map(parse_value)) {
            // An operand was typed since the last operator: fold the chain
            // before taking the new operator.
            Some((prior, a)) if !self.awaiting_operand => {
                let b = parse_value(&self.current);
                match prior.apply(a, b) {
                    Ok(result) => {
                        tracing::debug!(op = %prior, a, b, result, "chained evaluation");
                        let text = format_value(result);
                        self.previous = Some(text.clone());
                        self.current = text;
                    }
                    Err(err) => {
                        tracing::debug!(op = %prior, a, b, %err, "chained evaluation failed");
                        self.fail();
                        return;
                    }
                }
            }
            // First operator, or no operand typed yet (the new operator
            // replaces the old one): store the displayed value.
            _ => self.previous = Some(self.current.clone()),
        }
        self.pending = Some(op);
        self.awaiting_operand = true;
        self.just_evaluated = false;
    }

    fn equals(&mut self) -> Option<HistoryEntry> {
        let (op, a) = self.pending.zip(self.previous.as_deref().map(parse_value))?;
        let b = parse_value(&self.current);
        match op.apply(a, b) {
            Ok(result) => {
                tracing::debug!(%op, a, b, result, "evaluated");
                let text = format_value(result);
                let expression = format!("{} {op} {} =", format_value(a), format_value(b));
                self.current = text.clone();
                self.previous = None;
                self.pending = None;
                self.awaiting_operand = true;
                self.just_evaluated = true;
                Some(HistoryEntry::new(expression, text))
            }
            Err(err) => {
                tracing::debug!(%op, a, b, %err, "evaluation failed");
                self.fail();
                self.awaiting_operand = true;
                None
            }
        }
    }

    fn clear_entry(&mut self) {
        self.current = "0".to_string();
        self.just_evaluated = false;
    }

    fn backspace(&mut self) {
        if self.awaiting_operand || self.just_evaluated || self.is_error() {
            return;
        }
        self.current.pop();
        // Dropping the last digit of "-5" leaves a bare sign, which is not a
        // numeric literal; treat it as emptied.
        if self.current.is_empty() || self.current == "-" {
            self.current = "0".to_string();
        }
    }

    fn toggle_sign(&mut self) {
        if self.current == "0" || self.is_error() {
            return;
        }
        self.current = format_value(-parse_value(&self.current));
    }

    fn percent(&mut self) {
        if self.is_error() {
            return;
        }
        let value = parse_value(&self.current);
        self.current = format_value(round_significant(value / 100.0));
        // A percent result counts as completed: the next digit starts fresh.
        self.just_evaluated = true;
    }

    /// Enters the terminal error display state
    fn fail(&mut self) {
        self.current = ERROR_DISPLAY.to_string();
        self.previous = None;
        self.pending = None;
    }
}

fn digit_count(text: &str) -> usize {
    text.chars().filter(char::is_ascii_digit).count()
}
