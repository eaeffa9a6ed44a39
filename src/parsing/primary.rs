//! Primary roster layout: `[day, month-label?, day-of-week, employee-cell]`.
//!
//! The employee cell may list several names, one per line. A name carrying the
//! on-call marker is an on-call assignment; the others are regular shifts.

use crate::error::EngineResult;
use crate::models::{ShiftKind, ShiftRecord, SkipReason, TableLayout};

use super::date_inference::{DateInferencer, resolve_row_date};
use super::outcome::ParseOutcome;
use super::row_classifier::{ON_CALL_MARKER, is_data_row};

const DAY_OF_WEEK_COLUMN: usize = 2;
const EMPLOYEE_COLUMN: usize = 3;

/// Splits an employee cell into `(name, kind)` pairs.
///
/// Markers are removed wherever they appear in the name.
///
/// # Example
///
/// ```
/// use shift_calendar::models::ShiftKind;
/// use shift_calendar::parsing::split_employee_cell;
///
/// let names = split_employee_cell("Smith\n*Jones");
/// assert_eq!(
///     names,
///     vec![
///         ("Smith".to_string(), ShiftKind::Regular),
///         ("Jones".to_string(), ShiftKind::OnCall),
///     ]
/// );
/// ```
pub fn split_employee_cell(cell: &str) -> Vec<(String, ShiftKind)> {
    cell.lines()
        .filter_map(|line| {
            let kind = if line.contains(ON_CALL_MARKER) {
                ShiftKind::OnCall
            } else {
                ShiftKind::Regular
            };
            let name = line.replace(ON_CALL_MARKER, "");
            let name = name.trim();
            (!name.is_empty()).then(|| (name.to_string(), kind))
        })
        .collect()
}

/// Parses a primary-layout table.
///
/// Non-data rows are ignored. Data rows whose date cannot be resolved, or
/// that name nobody, are reported in the outcome's diagnostics.
///
/// # Errors
///
/// Returns [`EngineError::InvalidPeriod`](crate::error::EngineError::InvalidPeriod)
/// if `month` is not in 1..=12.
///
/// # Example
///
/// ```
/// use shift_calendar::parsing::parse_primary_table;
///
/// let rows: Vec<Vec<String>> = vec![
///     vec!["Ημ.".into(), "Μήνας".into(), "Ημέρα".into(), "Ιατροί".into()],
///     vec!["1".into(), "".into(), "Σάββατο".into(), "Smith\n*Jones".into()],
/// ];
/// let outcome = parse_primary_table(&rows, 3, 2025)?;
/// assert_eq!(outcome.records.len(), 2);
/// assert_eq!(outcome.records[1].kind().label(), "On-Call Shift");
/// # Ok::<(), shift_calendar::error::EngineError>(())
/// ```
pub fn parse_primary_table(
    rows: &[Vec<String>],
    month: u32,
    year: i32,
) -> EngineResult<ParseOutcome> {
    let layout = TableLayout::Primary;
    let mut dates = DateInferencer::new(month, year)?;
    let mut outcome = ParseOutcome::default();

    for (index, row) in rows.iter().enumerate() {
        if !is_data_row(row, layout) {
            continue;
        }
        outcome.data_rows += 1;

        let date = match resolve_row_date(&mut dates, row) {
            Ok(date) => date,
            Err(reason) => {
                outcome.skip(index, reason);
                continue;
            }
        };
        let day_of_week = row[DAY_OF_WEEK_COLUMN].trim();

        let names = split_employee_cell(&row[EMPLOYEE_COLUMN]);
        if names.is_empty() {
            outcome.skip(index, SkipReason::EmptyAssignment);
            continue;
        }
        outcome.records.extend(
            names
                .iter()
                .filter_map(|(name, kind)| ShiftRecord::new(name, date, day_of_week, *kind)),
        );
    }

    Ok(outcome)
}
