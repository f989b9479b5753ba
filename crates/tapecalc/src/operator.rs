//! The arithmetic operator set

use std::fmt;

use crate::error::{CalcError, CalcResult};
use crate::value::round_significant;

/// Type-safe operator enum - the four keypad operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operator {
    /// Returns the operator symbol for display and history expressions
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Maps a typed character to an operator.
    ///
    /// Accepts both the ASCII keys (`* /`) and the display symbols (`× ÷`).
    #[must_use]
    pub const fn from_key(key: char) -> Option<Self> {
        match key {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' | '×' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operator to two operands.
    ///
    /// Every result is rounded to 12 significant decimal digits before being
    /// handed back, so chained operations accumulate from corrected values.
    pub fn apply(self, a: f64, b: f64) -> CalcResult<f64> {
        let result = match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    return Err(CalcError::DivideByZero);
                }
                a / b
            }
        };
        Ok(round_significant(result))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
