//! Roster input and parsed-roster models.

use serde::{Deserialize, Serialize};

use super::{RowDiagnostic, ShiftRecord, Specialty, TableLayout};

/// One table of extracted rows.
///
/// Cells are expected trimmed and fully blank rows already filtered out by
/// the table extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterTable {
    /// How the rows are laid out.
    pub layout: TableLayout,
    /// Rows of cell strings, top to bottom.
    pub rows: Vec<Vec<String>>,
}

/// A roster document: its base period and its tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterInput {
    /// Month the roster starts in (1-12).
    pub month: u32,
    /// Year the roster starts in.
    pub year: i32,
    /// The document's tables, in document order.
    pub tables: Vec<RosterTable>,
}

/// Records parsed from one specialty on-call table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialtyRoster {
    /// The specialty these records cover.
    pub specialty: Specialty,
    /// The on-call records.
    pub records: Vec<ShiftRecord>,
}

/// The result of parsing every table of a roster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedRoster {
    /// Primary and triple-shift records, in table order.
    pub main: Vec<ShiftRecord>,
    /// One entry per specialty table, in table order.
    pub specialties: Vec<SpecialtyRoster>,
    /// Rows skipped across all tables.
    pub diagnostics: Vec<RowDiagnostic>,
    /// Indices of tables that had no data rows.
    pub empty_tables: Vec<usize>,
}

impl ParsedRoster {
    /// Total number of records across all lists.
    pub fn shift_count(&self) -> usize {
        self.main.len()
            + self
                .specialties
                .iter()
                .map(|s| s.records.len())
                .sum::<usize>()
    }

    /// Iterates over every record, main list first.
    pub fn all_records(&self) -> impl Iterator<Item = &ShiftRecord> {
        self.main
            .iter()
            .chain(self.specialties.iter().flat_map(|s| s.records.iter()))
    }
}
