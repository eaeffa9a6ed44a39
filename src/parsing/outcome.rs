//! Result type shared by the table parsers.

use serde::{Deserialize, Serialize};

use crate::models::{RowDiagnostic, ShiftRecord, SkipReason};

/// Records and diagnostics produced by scanning one table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOutcome {
    /// Shift records in row order.
    pub records: Vec<ShiftRecord>,
    /// Data rows that were skipped, with the reason.
    pub diagnostics: Vec<RowDiagnostic>,
    /// Number of rows classified as data (parsed or skipped).
    pub data_rows: usize,
}

impl ParseOutcome {
    /// Returns true if the table contained at least one data row.
    pub fn has_data(&self) -> bool {
        self.data_rows > 0
    }

    pub(super) fn skip(&mut self, row: usize, reason: SkipReason) {
        self.diagnostics.push(RowDiagnostic::new(row, reason));
    }
}
