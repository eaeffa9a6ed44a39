//! Error types for the shift calendar engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Row-level problems are not errors: parsers report them as
//! [`RowDiagnostic`](crate::models::RowDiagnostic)s and keep scanning.

use thiserror::Error;

/// The main error type for the shift calendar engine.
///
/// Every variant is scoped to the smallest unit it concerns (a roster, a
/// single employee or the configuration); none of them aborts a batch.
///
/// # Example
///
/// ```
/// use shift_calendar::error::EngineError;
///
/// let error = EngineError::NoShiftsForEmployee {
///     employee: "A.Papadopoulos".to_string(),
/// };
/// assert_eq!(error.to_string(), "No shifts found for employee: A.Papadopoulos");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The base month/year a roster is interpreted against is not a real month.
    #[error("Invalid roster period {month}/{year}")]
    InvalidPeriod {
        /// The requested base month.
        month: u32,
        /// The requested base year.
        year: i32,
    },

    /// The requested employee has no shifts in any of the roster's tables.
    #[error("No shifts found for employee: {employee}")]
    NoShiftsForEmployee {
        /// The employee name as requested.
        employee: String,
    },

    /// A calendar could not be persisted by the output sink.
    #[error("Failed to write calendar for '{employee}' to {location}: {message}")]
    OutputWrite {
        /// The employee whose calendar failed to persist.
        employee: String,
        /// Where the sink tried to write.
        location: String,
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
