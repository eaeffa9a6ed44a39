//! Whole-roster parsing.
//!
//! Runs every table through the parser for its layout with fresh date state,
//! then splits the records into the main list (primary and triple-shift
//! tables) and one list per specialty table.

use tracing::{debug, info, warn};

use crate::error::EngineResult;
use crate::models::{ParsedRoster, RosterInput, Specialty, SpecialtyRoster, TableLayout};

use super::date_inference::validate_period;
use super::outcome::ParseOutcome;
use super::primary::parse_primary_table;
use super::specialty::parse_specialty_table;
use super::triple_shift::parse_triple_shift_table;

/// Parses all tables of a roster.
///
/// Skipped rows are collected (tagged with their table index) and logged at
/// warn level; tables without any data row are listed in
/// [`ParsedRoster::empty_tables`].
///
/// # Errors
///
/// Returns [`EngineError::InvalidPeriod`](crate::error::EngineError::InvalidPeriod)
/// if the roster's base month is not in 1..=12 or its year cannot be
/// represented. No table is scanned in that case.
///
/// # Example
///
/// ```
/// use shift_calendar::models::{RosterInput, RosterTable, TableLayout};
/// use shift_calendar::parsing::parse_roster;
///
/// let cells = |row: &[&str]| row.iter().map(|c| c.to_string()).collect::<Vec<_>>();
/// let roster = RosterInput {
///     month: 3,
///     year: 2025,
///     tables: vec![
///         RosterTable {
///             layout: TableLayout::Primary,
///             rows: vec![cells(&["1", "", "Σάββατο", "Lee"])],
///         },
///         RosterTable {
///             layout: TableLayout::CathLab,
///             rows: vec![cells(&["01-03-2025", "Σάββατο", "Smith"])],
///         },
///     ],
/// };
/// let parsed = parse_roster(&roster)?;
/// assert_eq!(parsed.main.len(), 1);
/// assert_eq!(parsed.specialties[0].records.len(), 1);
/// # Ok::<(), shift_calendar::error::EngineError>(())
/// ```
pub fn parse_roster(roster: &RosterInput) -> EngineResult<ParsedRoster> {
    validate_period(roster.month, roster.year)?;

    let mut parsed = ParsedRoster::default();

    for (table_index, table) in roster.tables.iter().enumerate() {
        let outcome = match table.layout {
            TableLayout::Primary => parse_primary_table(&table.rows, roster.month, roster.year)?,
            TableLayout::TripleShift => {
                parse_triple_shift_table(&table.rows, roster.month, roster.year)?
            }
            TableLayout::CathLab | TableLayout::Electrophysiology => {
                let specialty = table.layout.specialty().unwrap_or(Specialty::Unassigned);
                parse_specialty_table(&table.rows, specialty)
            }
        };
        let ParseOutcome {
            records,
            diagnostics,
            data_rows,
        } = outcome;

        debug!(
            table = table_index,
            layout = %table.layout,
            data_rows,
            records = records.len(),
            "Parsed roster table"
        );
        if data_rows == 0 {
            info!(table = table_index, layout = %table.layout, "Table has no data rows");
            parsed.empty_tables.push(table_index);
        }

        for mut diagnostic in diagnostics {
            diagnostic.table = table_index;
            warn!(
                table = table_index,
                row = diagnostic.row,
                reason = %diagnostic.reason,
                "Skipped roster row"
            );
            parsed.diagnostics.push(diagnostic);
        }

        match table.layout.specialty() {
            Some(specialty) => parsed.specialties.push(SpecialtyRoster { specialty, records }),
            None => parsed.main.extend(records),
        }
    }

    Ok(parsed)
}
