//! Specialty on-call layout: `[date-string, day-of-week, employee]`.
//!
//! Dates are printed in full as `DD-MM-YYYY` or `DD/MM/YYYY`, so no month
//! inference is needed. Cath lab and electrophysiology rosters share this
//! layout; the caller says which specialty a table belongs to.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::models::{ShiftKind, ShiftRecord, SkipReason, Specialty};

use super::outcome::ParseOutcome;
use super::row_classifier::{ON_CALL_MARKER, is_dated_row, strip_marker};

const DATE_COLUMN: usize = 0;
const DAY_OF_WEEK_COLUMN: usize = 1;
const EMPLOYEE_COLUMN: usize = 2;
const MIN_COLUMNS: usize = 3;

/// `DD-MM-YYYY` or `DD/MM/YYYY`; both separators are captured so they can be compared.
static RE_DATE_CELL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{1,2})([-/])([0-9]{1,2})([-/])([0-9]{4})$")
        .expect("valid date cell regex")
});

/// Splits a `DD-MM-YYYY` or `DD/MM/YYYY` cell into `(day, month, year)`.
///
/// Day and month may have one or two digits, the year exactly four, and both
/// separators must be the same. The numbers are not checked against the
/// calendar.
///
/// ```
/// use shift_calendar::parsing::parse_date_cell;
///
/// assert_eq!(parse_date_cell("14-03-2025"), Some((14, 3, 2025)));
/// assert_eq!(parse_date_cell("14/03/2025"), Some((14, 3, 2025)));
/// assert_eq!(parse_date_cell("2025-03-14"), None);
/// ```
pub fn parse_date_cell(cell: &str) -> Option<(u32, u32, i32)> {
    let caps = RE_DATE_CELL.captures(cell.trim())?;
    if caps[2] != caps[4] {
        return None;
    }
    Some((caps[1].parse().ok()?, caps[3].parse().ok()?, caps[5].parse().ok()?))
}

/// Parses a specialty on-call table, labelling every record with `specialty`.
///
/// Rows whose first cell is not a date are skipped silently; dates that do
/// not exist (31-04-2025) and rows naming nobody are reported as diagnostics.
///
/// # Example
///
/// ```
/// use shift_calendar::models::Specialty;
/// use shift_calendar::parsing::parse_specialty_table;
///
/// let rows: Vec<Vec<String>> = vec![
///     vec!["14-03-2025".into(), "Παρασκευή".into(), "Lee".into()],
///     vec!["15/03/2025".into(), "Σάββατο".into(), "Smith".into()],
/// ];
/// let outcome = parse_specialty_table(&rows, Specialty::CathLab);
/// assert_eq!(outcome.records.len(), 2);
/// assert_eq!(outcome.records[0].kind().label(), "Cath Lab On-Call");
/// ```
pub fn parse_specialty_table(rows: &[Vec<String>], specialty: Specialty) -> ParseOutcome {
    let kind = ShiftKind::Specialty(specialty);
    let mut outcome = ParseOutcome::default();

    for (index, row) in rows.iter().enumerate() {
        if row.len() < MIN_COLUMNS || !is_dated_row(row) {
            continue;
        }
        outcome.data_rows += 1;

        let Some((day, month, year)) = parse_date_cell(strip_marker(&row[DATE_COLUMN])) else {
            continue;
        };
        let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
            outcome.skip(index, SkipReason::InvalidDate { year, month, day });
            continue;
        };

        let name = row[EMPLOYEE_COLUMN].replace(ON_CALL_MARKER, "");
        match ShiftRecord::new(&name, date, row[DAY_OF_WEEK_COLUMN].trim(), kind) {
            Some(record) => outcome.records.push(record),
            None => outcome.skip(index, SkipReason::EmptyAssignment),
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_both_separators_give_the_same_date() {
        let rows = vec![
            row(&["14-03-2025", "Παρασκευή", "Lee"]),
            row(&["14/03/2025", "Παρασκευή", "Smith"]),
        ];
        let outcome = parse_specialty_table(&rows, Specialty::Electrophysiology);
        assert_eq!(outcome.records.len(), 2);
        assert!(outcome.records.iter().all(|r| r.date() == date(2025, 3, 14)));
        assert_eq!(
            outcome.records[0].kind(),
            ShiftKind::Specialty(Specialty::Electrophysiology)
        );
    }

    #[test]
    fn test_iso_dates_are_not_accepted() {
        let rows = vec![row(&["2025-03-14", "Παρασκευή", "Lee"])];
        let outcome = parse_specialty_table(&rows, Specialty::CathLab);
        assert!(outcome.records.is_empty());
        assert!(!outcome.has_data());
        assert!(outcome.diagnostics.is_empty());
    }

    #[test]
    fn test_date_cell_shapes() {
        assert_eq!(parse_date_cell("1-3-2025"), Some((1, 3, 2025)));
        assert_eq!(parse_date_cell("01/03-2025"), None);
        assert_eq!(parse_date_cell("01-03/2025"), None);
        assert_eq!(parse_date_cell("14-03-25"), None);
        assert_eq!(parse_date_cell("14.03.2025"), None);
        assert_eq!(parse_date_cell("14-03-2025-1"), None);
        assert_eq!(parse_date_cell("aa-03-2025"), None);
        assert_eq!(parse_date_cell(""), None);
    }

    #[test]
    fn test_mixed_separators_in_one_cell_are_not_a_date() {
        let rows = vec![
            row(&["01/03-2025", "Σάββατο", "Lee"]),
            row(&["02/03/2025", "Κυριακή", "Lee"]),
        ];
        let outcome = parse_specialty_table(&rows, Specialty::CathLab);
        assert_eq!(outcome.data_rows, 1);
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].date(), date(2025, 3, 2));
    }

    #[test]
    fn test_nonexistent_date_is_reported() {
        let rows = vec![
            row(&["31-04-2025", "Πέμπτη", "Lee"]),
            row(&["01-05-2025", "Πέμπτη", "Lee"]),
        ];
        let outcome = parse_specialty_table(&rows, Specialty::CathLab);
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.diagnostics.len(), 1);
        assert_eq!(
            outcome.diagnostics[0].reason,
            SkipReason::InvalidDate {
                year: 2025,
                month: 4,
                day: 31
            }
        );
    }

    #[test]
    fn test_blank_employee_is_reported() {
        let rows = vec![row(&["02-05-2025", "Παρασκευή", ""])];
        let outcome = parse_specialty_table(&rows, Specialty::CathLab);
        assert_eq!(outcome.diagnostics[0].reason, SkipReason::EmptyAssignment);
    }

    #[test]
    fn test_headers_are_skipped_and_unassigned_label_is_kept() {
        let rows = vec![
            row(&["ΗΜΕΡΟΜΗΝΙΑ", "ΗΜΕΡΑ", "ΙΑΤΡΟΣ"]),
            row(&["03-05-2025", "Σάββατο", "*Lee"]),
        ];
        let outcome = parse_specialty_table(&rows, Specialty::Unassigned);
        assert_eq!(outcome.data_rows, 1);
        assert_eq!(outcome.records[0].employee(), "Lee");
        assert_eq!(outcome.records[0].kind().label(), "On-Call Specialty");
    }
}
