//! Month/year inference for day-numbered roster tables.
//!
//! Rosters are printed as one continuous table that may run past the end of
//! its starting month, and month labels are used inconsistently. The
//! [`DateInferencer`] carries the rolling month/year across the rows of one
//! table and resolves each row's day number to an absolute date.
//!
//! Month changes are recovered from two cues, in priority order:
//!
//! 1. An explicit month name in the row's label cell.
//! 2. A day-number discontinuity: the day drops below 10 right after a day
//!    above 20. This is a heuristic. It matches how rosters are printed but can
//!    misfire on irregular layouts (for example a table listing only a few
//!    scattered days).

use chrono::{Datelike, NaiveDate};

use crate::error::{EngineError, EngineResult};
use crate::models::SkipReason;

use super::months::month_from_text;
use super::row_classifier::strip_marker;

/// Rolling date state for one table scan.
///
/// Create one per table; the state never outlives the scan.
///
/// # Example
///
/// ```
/// use shift_calendar::parsing::DateInferencer;
///
/// let mut dates = DateInferencer::new(12, 2024).unwrap();
/// let months: Vec<_> = [30, 31, 1]
///     .into_iter()
///     .map(|day| dates.resolve(day, None).unwrap())
///     .map(|date| date.format("%Y-%m-%d").to_string())
///     .collect();
/// assert_eq!(months, ["2024-12-30", "2024-12-31", "2025-01-01"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateInferencer {
    base_month: u32,
    base_year: i32,
    current_month: u32,
    current_year: i32,
    last_day: u32,
}

impl DateInferencer {
    /// Starts a scan at the given base month and year.
    ///
    /// Returns [`EngineError::InvalidPeriod`] if `month` is not in 1..=12 or
    /// `year` is outside the range `chrono` can represent.
    pub fn new(month: u32, year: i32) -> EngineResult<Self> {
        validate_period(month, year)?;
        Ok(Self {
            base_month: month,
            base_year: year,
            current_month: month,
            current_year: year,
            last_day: 0,
        })
    }

    /// The month currently in effect.
    pub fn current_month(&self) -> u32 {
        self.current_month
    }

    /// The year currently in effect.
    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    /// Advances the state for a row and returns its date.
    ///
    /// `explicit_month` is the month named in the row's label cell, if any.
    /// The state advances even when the resulting date is invalid, so later
    /// rows still see this row's day number.
    pub fn resolve(
        &mut self,
        day: u32,
        explicit_month: Option<u32>,
    ) -> Result<NaiveDate, SkipReason> {
        match explicit_month {
            Some(month) => self.apply_label(month),
            None => {
                if day < self.last_day && self.last_day > 20 && day < 10 {
                    self.advance_month();
                }
            }
        }
        self.last_day = day;

        NaiveDate::from_ymd_opt(self.current_year, self.current_month, day).ok_or(
            SkipReason::InvalidDate {
                year: self.current_year,
                month: self.current_month,
                day,
            },
        )
    }

    fn apply_label(&mut self, month: u32) {
        // Repeated labels (merged cells are extracted once per row) must not
        // push the year forward more than once.
        let crosses_new_year = month < self.base_month
            && self.base_month >= 11
            && month <= 2
            && self.current_year == self.base_year;
        if crosses_new_year {
            self.current_year = self.current_year.saturating_add(1);
        }
        self.current_month = month;
    }

    fn advance_month(&mut self) {
        if self.current_month == 12 {
            self.current_month = 1;
            self.current_year = self.current_year.saturating_add(1);
        } else {
            self.current_month += 1;
        }
    }
}

/// Checks that a base period names a real month in a representable year.
pub(super) fn validate_period(month: u32, year: i32) -> EngineResult<()> {
    let years = NaiveDate::MIN.year()..=NaiveDate::MAX.year();
    if !(1..=12).contains(&month) || !years.contains(&year) {
        return Err(EngineError::InvalidPeriod { month, year });
    }
    Ok(())
}

/// Resolves the date of a `[day, month-label?, ...]` row.
pub(super) fn resolve_row_date(
    dates: &mut DateInferencer,
    row: &[String],
) -> Result<NaiveDate, SkipReason> {
    let day_cell = strip_marker(&row[0]);
    let day = day_cell
        .parse::<u32>()
        .map_err(|_| SkipReason::MalformedDate {
            value: day_cell.to_string(),
        })?;
    let explicit_month = row.get(1).and_then(|label| month_from_text(label));
    dates.resolve(day, explicit_month)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn months_for(
        base_month: u32,
        base_year: i32,
        rows: &[(u32, Option<u32>)],
    ) -> Vec<(i32, u32)> {
        let mut dates = DateInferencer::new(base_month, base_year).unwrap();
        rows.iter()
            .map(|(day, label)| {
                let _ = dates.resolve(*day, *label);
                (dates.current_year(), dates.current_month())
            })
            .collect()
    }

    #[test]
    fn test_rejects_invalid_base_month() {
        assert!(matches!(
            DateInferencer::new(0, 2025),
            Err(EngineError::InvalidPeriod { month: 0, .. })
        ));
        assert!(DateInferencer::new(13, 2025).is_err());
    }

    #[test]
    fn test_rejects_unrepresentable_year() {
        assert!(matches!(
            DateInferencer::new(12, i32::MAX),
            Err(EngineError::InvalidPeriod { month: 12, year: i32::MAX })
        ));
        assert!(DateInferencer::new(1, i32::MIN).is_err());
    }

    #[test]
    fn test_rollover_at_last_representable_year_is_a_skipped_row() {
        let year = NaiveDate::MAX.year();
        let mut dates = DateInferencer::new(12, year).unwrap();
        assert!(dates.resolve(31, None).is_ok());
        assert!(matches!(
            dates.resolve(1, None),
            Err(SkipReason::InvalidDate { month: 1, .. })
        ));
    }

    #[test]
    fn test_day_rollover_advances_month() {
        let rows: Vec<_> = [28, 29, 30, 31, 1, 2].iter().map(|d| (*d, None)).collect();
        let months: Vec<u32> = months_for(3, 2025, &rows).iter().map(|(_, m)| *m).collect();
        assert_eq!(months, vec![3, 3, 3, 3, 4, 4]);
    }

    #[test]
    fn test_day_rollover_wraps_year() {
        let rows: Vec<_> = [30, 31, 1].iter().map(|d| (*d, None)).collect();
        assert_eq!(
            months_for(12, 2024, &rows),
            vec![(2024, 12), (2024, 12), (2025, 1)]
        );
    }

    #[test]
    fn test_small_drop_does_not_roll_over() {
        // 15 -> 3: last day not above 20.
        let rows: Vec<_> = [14, 15, 3].iter().map(|d| (*d, None)).collect();
        assert_eq!(months_for(3, 2025, &rows)[2], (2025, 3));
        // 25 -> 12: new day not below 10.
        let rows: Vec<_> = [25, 12].iter().map(|d| (*d, None)).collect();
        assert_eq!(months_for(3, 2025, &rows)[1], (2025, 3));
    }

    #[test]
    fn test_label_sets_month() {
        let rows = [(1, Some(4)), (2, None), (3, None)];
        assert_eq!(
            months_for(3, 2025, &rows),
            vec![(2025, 4), (2025, 4), (2025, 4)]
        );
    }

    #[test]
    fn test_label_overrides_day_rollover() {
        // Without the label, 31 -> 1 would move to April.
        let rows = [(30, None), (31, None), (1, Some(3)), (2, None), (3, None)];
        let months: Vec<u32> = months_for(3, 2025, &rows).iter().map(|(_, m)| *m).collect();
        assert_eq!(months, vec![3, 3, 3, 3, 3]);
    }

    #[test]
    fn test_january_label_after_december_base_increments_year() {
        let rows = [(31, Some(12)), (1, Some(1)), (2, Some(1)), (3, None)];
        assert_eq!(
            months_for(12, 2024, &rows),
            vec![(2024, 12), (2025, 1), (2025, 1), (2025, 1)]
        );
    }

    #[test]
    fn test_february_label_after_november_base_increments_year() {
        let rows = [(30, None), (1, Some(2))];
        assert_eq!(months_for(11, 2024, &rows)[1], (2025, 2));
    }

    #[test]
    fn test_label_after_day_rollover_into_january_keeps_year() {
        let rows = [(31, None), (1, None), (2, Some(1))];
        assert_eq!(
            months_for(12, 2024, &rows),
            vec![(2024, 12), (2025, 1), (2025, 1)]
        );
    }

    #[test]
    fn test_january_label_with_mid_year_base_keeps_year() {
        let rows = [(1, Some(1))];
        assert_eq!(months_for(6, 2025, &rows), vec![(2025, 1)]);
    }

    #[test]
    fn test_invalid_date_still_advances_state() {
        let mut dates = DateInferencer::new(2, 2025).unwrap();
        assert_eq!(
            dates.resolve(30, None),
            Err(SkipReason::InvalidDate {
                year: 2025,
                month: 2,
                day: 30
            })
        );
        let next = dates.resolve(1, None).unwrap();
        assert_eq!(next, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
    }

    proptest! {
        #[test]
        fn prop_month_end_sequence_rolls_over_once(base_month in 1u32..=12, year in 2000i32..2100) {
            let mut dates = DateInferencer::new(base_month, year).unwrap();
            let expected_next = if base_month == 12 { (year + 1, 1) } else { (year, base_month + 1) };
            let resolved: Vec<(i32, u32)> = [28u32, 29, 30, 31, 1, 2]
                .into_iter()
                .map(|day| {
                    let _ = dates.resolve(day, None);
                    (dates.current_year(), dates.current_month())
                })
                .collect();
            for month in &resolved[..4] {
                prop_assert_eq!(*month, (year, base_month));
            }
            for month in &resolved[4..] {
                prop_assert_eq!(*month, expected_next);
            }
        }

        #[test]
        fn prop_ascending_days_never_change_month(base_month in 1u32..=12, days in proptest::collection::vec(1u32..=28, 1..20)) {
            let mut sorted = days.clone();
            sorted.sort_unstable();
            let mut dates = DateInferencer::new(base_month, 2025).unwrap();
            for day in sorted {
                let date = dates.resolve(day, None).unwrap();
                prop_assert_eq!(date.month(), base_month);
                prop_assert_eq!(date.day(), day);
            }
        }
    }
}
