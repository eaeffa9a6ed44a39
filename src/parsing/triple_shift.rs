//! Triple-shift roster layout.
//!
//! Columns are `[day, month-label?, day-of-week, shift-A, shift-B, shift-C]`
//! with one name per shift category. Any cell may be blank, so a row yields
//! between zero and three records.

use crate::error::EngineResult;
use crate::models::{ShiftKind, ShiftRecord, TableLayout};

use super::date_inference::{DateInferencer, resolve_row_date};
use super::outcome::ParseOutcome;
use super::row_classifier::{ON_CALL_MARKER, is_data_row};

const DAY_OF_WEEK_COLUMN: usize = 2;

/// Shift columns in order, with the category each one stands for.
const SHIFT_COLUMNS: [(usize, ShiftKind); 3] = [
    (3, ShiftKind::Major24h),
    (4, ShiftKind::Minor24h),
    (5, ShiftKind::Tep12h),
];

/// Parses a triple-shift table.
///
/// # Errors
///
/// Returns [`EngineError::InvalidPeriod`](crate::error::EngineError::InvalidPeriod)
/// if `month` is not in 1..=12.
///
/// # Example
///
/// ```
/// use shift_calendar::parsing::parse_triple_shift_table;
///
/// let rows = vec![vec!["5", "", "Mon", "Smith", "Jones", "Lee"]
///     .into_iter()
///     .map(String::from)
///     .collect::<Vec<_>>()];
/// let outcome = parse_triple_shift_table(&rows, 3, 2025)?;
/// let labels: Vec<_> = outcome.records.iter().map(|r| r.kind().label()).collect();
/// assert_eq!(labels, ["Μεγάλη Shift (24h)", "Μικρή Shift (24h)", "TEP Shift (12h)"]);
/// # Ok::<(), shift_calendar::error::EngineError>(())
/// ```
pub fn parse_triple_shift_table(
    rows: &[Vec<String>],
    month: u32,
    year: i32,
) -> EngineResult<ParseOutcome> {
    let layout = TableLayout::TripleShift;
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

        for (column, kind) in SHIFT_COLUMNS {
            let name = row[column].replace(ON_CALL_MARKER, "");
            if let Some(record) = ShiftRecord::new(&name, date, day_of_week, kind) {
                outcome.records.push(record);
            }
        }
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_full_row_yields_three_records() {
        let rows = vec![row(&["5", "", "Mon", "Smith", "Jones", "Lee"])];
        let outcome = parse_triple_shift_table(&rows, 3, 2025).unwrap();

        assert_eq!(outcome.records.len(), 3);
        let expected = [
            ("Smith", "Μεγάλη Shift (24h)"),
            ("Jones", "Μικρή Shift (24h)"),
            ("Lee", "TEP Shift (12h)"),
        ];
        for (record, (name, label)) in outcome.records.iter().zip(expected) {
            assert_eq!(record.employee(), name);
            assert_eq!(record.kind().label(), label);
            assert_eq!(record.date(), NaiveDate::from_ymd_opt(2025, 3, 5).unwrap());
            assert_eq!(record.day_of_week(), "Mon");
        }
    }

    #[test]
    fn test_blank_cells_yield_fewer_records() {
        let rows = vec![
            row(&["6", "", "Tue", "", "Jones", ""]),
            row(&["7", "", "Wed", "", "", ""]),
        ];
        let outcome = parse_triple_shift_table(&rows, 3, 2025).unwrap();
        assert_eq!(outcome.data_rows, 2);
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].kind(), ShiftKind::Minor24h);
        assert!(outcome.diagnostics.is_empty());
    }

    #[test]
    fn test_markers_are_stripped() {
        let rows = vec![row(&["8", "", "Thu", "*Smith", "Jones*", " * "])];
        let outcome = parse_triple_shift_table(&rows, 3, 2025).unwrap();
        let names: Vec<&str> = outcome.records.iter().map(|r| r.employee()).collect();
        assert_eq!(names, vec!["Smith", "Jones"]);
        assert_eq!(outcome.records[0].kind(), ShiftKind::Major24h);
    }

    #[test]
    fn test_month_label_and_rollover() {
        let rows = vec![
            row(&["31", "ΔΕΚΕΜΒΡΙΟΣ", "Tue", "A", "B", "C"]),
            row(&["1", "ΙΑΝΟΥΑΡΙΟΥ", "Wed", "D", "E", "F"]),
        ];
        let outcome = parse_triple_shift_table(&rows, 12, 2024).unwrap();
        assert_eq!(
            outcome.records[3].date(),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_narrow_rows_are_noise() {
        let rows = vec![row(&["5", "", "Mon", "Smith", "Jones"])];
        let outcome = parse_triple_shift_table(&rows, 3, 2025).unwrap();
        assert!(!outcome.has_data());
    }
}
