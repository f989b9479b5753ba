//! Tapecalc - keypad calculator engine with a session history tape
//!
//! The engine is a pure state machine: it consumes discrete logical actions
//! (digits, operators, equals, editing commands) and produces a displayed
//! value plus, for successful `Equals` presses, history records. UI layers
//! are thin adapters over [`engine::Action`]; the engine itself has no
//! rendering or event-loop dependencies and is driven directly from tests.
//!
//! # Example
//!
//! ```rust
//! use tapecalc::prelude::*;
//!
//! let mut engine = Engine::new();
//! let mut tape = HistoryTape::new();
//!
//! for action in [
//!     Action::Digit(5),
//!     Action::Operator(Operator::Divide),
//!     Action::Digit(2),
//! ] {
//!     engine.apply(action);
//! }
//! if let Some(entry) = engine.apply(Action::Equals) {
//!     tape.push(entry);
//! }
//!
//! assert_eq!(engine.display(), "2.5");
//! assert_eq!(tape.latest().unwrap().expression, "5 ÷ 2 =");
//! ```

// Allow common test patterns
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod engine;
pub mod error;
pub mod history;
pub mod operator;
pub mod value;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::engine::{Action, Engine, ERROR_DISPLAY, MAX_DIGITS};
    pub use crate::error::{CalcError, CalcResult};
    pub use crate::history::{HistoryEntry, HistoryTape};
    pub use crate::operator::Operator;
    pub use crate::value::{format_value, parse_value, round_significant};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let mut engine = Engine::new();
        engine.apply(Action::Digit(2));
        engine.apply(Action::Operator(Operator::Add));
        engine.apply(Action::Digit(3));
        let entry = engine.apply(Action::Equals);
        assert_eq!(engine.display(), "5");
        assert!(entry.is_some());
    }

    #[test]
    fn test_engine_feeds_tape() {
        let mut engine = Engine::new();
        let mut tape = HistoryTape::new();

        engine.apply(Action::Digit(6));
        engine.apply(Action::Operator(Operator::Multiply));
        engine.apply(Action::Digit(7));
        if let Some(entry) = engine.apply(Action::Equals) {
            tape.push(entry);
        }

        assert_eq!(tape.len(), 1);
        assert_eq!(tape.latest().unwrap().display(), "6 × 7 = 42");
    }
}
