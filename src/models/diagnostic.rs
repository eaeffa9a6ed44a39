//! Structured diagnostics for skipped roster rows.

use serde::{Deserialize, Serialize};

/// Why a data row was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    /// The resolved year/month/day is not a calendar date.
    InvalidDate {
        /// Resolved year.
        year: i32,
        /// Resolved month.
        month: u32,
        /// Day number from the row.
        day: u32,
    },
    /// The date cell looked like a date but could not be read.
    MalformedDate {
        /// The raw cell text.
        value: String,
    },
    /// The row is a data row but names nobody.
    EmptyAssignment,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::InvalidDate { year, month, day } => {
                write!(f, "invalid date {:04}-{:02}-{:02}", year, month, day)
            }
            SkipReason::MalformedDate { value } => write!(f, "malformed date '{}'", value),
            SkipReason::EmptyAssignment => write!(f, "no employee assigned"),
        }
    }
}

/// A row that was skipped while scanning a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowDiagnostic {
    /// Index of the table within its roster (0 when parsed standalone).
    pub table: usize,
    /// Zero-based row index within the table.
    pub row: usize,
    /// Why the row was skipped.
    pub reason: SkipReason,
}

impl RowDiagnostic {
    /// Creates a diagnostic for a standalone table.
    pub fn new(row: usize, reason: SkipReason) -> Self {
        Self {
            table: 0,
            row,
            reason,
        }
    }
}

impl std::fmt::Display for RowDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "table {} row {}: {}", self.table, self.row, self.reason)
    }
}
