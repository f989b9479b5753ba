//! Error types for the calculator engine

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors that can occur while applying an arithmetic operation
///
/// Division by zero is the only failure mode: action inputs arrive
/// pre-validated by the adapter layer, and the engine only ever parses
/// numeric text it produced itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("Division by zero")]
    DivideByZero,
}
