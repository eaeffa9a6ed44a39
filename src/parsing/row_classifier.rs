//! Data-row detection.
//!
//! Roster tables mix data rows with captions, column headers and separator
//! rows. A row counts as data only when it is wide enough for its layout and
//! its first cell is a day number (or, for specialty tables, a full date).

use crate::models::TableLayout;

use super::specialty::parse_date_cell;

/// Character used in rosters to flag on-call assignments.
pub const ON_CALL_MARKER: char = '*';

/// Strips leading and trailing marker characters and surrounding whitespace.
///
/// ```
/// use shift_calendar::parsing::strip_marker;
///
/// assert_eq!(strip_marker("*12"), "12");
/// assert_eq!(strip_marker(" Smith* "), "Smith");
/// ```
pub fn strip_marker(cell: &str) -> &str {
    cell.trim().trim_matches(ON_CALL_MARKER).trim()
}

/// Returns true if the cell, once unmarked, is a non-empty run of digits.
fn is_day_number(cell: &str) -> bool {
    let day = strip_marker(cell);
    !day.is_empty() && day.chars().all(|c| c.is_ascii_digit())
}

/// Returns true if the row's first cell is a full `DD-MM-YYYY` style date.
pub(super) fn is_dated_row(row: &[String]) -> bool {
    row.first()
        .is_some_and(|cell| parse_date_cell(strip_marker(cell)).is_some())
}

/// Decides whether `row` is a data row for `layout`.
///
/// # Example
///
/// ```
/// use shift_calendar::models::TableLayout;
/// use shift_calendar::parsing::is_data_row;
///
/// let row: Vec<String> = ["5", "", "Τετάρτη", "Smith"].iter().map(|s| s.to_string()).collect();
/// assert!(is_data_row(&row, TableLayout::Primary));
///
/// let header: Vec<String> = ["Ημ/νία", "Μήνας", "Ημέρα", "Ιατρός"].iter().map(|s| s.to_string()).collect();
/// assert!(!is_data_row(&header, TableLayout::Primary));
/// ```
pub fn is_data_row(row: &[String], layout: TableLayout) -> bool {
    if row.len() < layout.min_columns() {
        return false;
    }
    match layout {
        TableLayout::Primary | TableLayout::TripleShift => is_day_number(&row[0]),
        TableLayout::CathLab | TableLayout::Electrophysiology => is_dated_row(row),
    }
}
