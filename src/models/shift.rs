//! Shift record model and related types.
//!
//! This module defines [`ShiftRecord`], the normalized output of every table
//! parser, together with the closed [`ShiftKind`] tag and the [`TableLayout`]
//! a record originates from.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Specialty on-call rosters kept in their own tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Specialty {
    /// Specialty table whose specialty the caller did not name.
    Unassigned,
    /// Cardiac catheterisation lab.
    CathLab,
    /// Electrophysiology lab.
    Electrophysiology,
}

impl Specialty {
    /// Returns the label used for this specialty in calendars.
    pub fn label(&self) -> &'static str {
        match self {
            Specialty::Unassigned => "On-Call Specialty",
            Specialty::CathLab => "Cath Lab On-Call",
            Specialty::Electrophysiology => "Electrophysiology On-Call",
        }
    }
}

/// The type of a shift, tagged per source layout.
///
/// The display label is kept separate from the tag; see [`ShiftKind::label`].
///
/// # Example
///
/// ```
/// use shift_calendar::models::ShiftKind;
///
/// assert_eq!(ShiftKind::OnCall.label(), "On-Call Shift");
/// assert_eq!(ShiftKind::Tep12h.to_string(), "TEP Shift (12h)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftKind {
    /// Primary layout, name without marker.
    Regular,
    /// Primary layout, name carrying the on-call marker.
    OnCall,
    /// Triple-shift layout, first column (24h).
    Major24h,
    /// Triple-shift layout, second column (24h).
    Minor24h,
    /// Triple-shift layout, third column (12h).
    Tep12h,
    /// Specialty on-call layout.
    Specialty(Specialty),
}

impl ShiftKind {
    /// Returns the human-readable label for this shift type.
    pub fn label(&self) -> &'static str {
        match self {
            ShiftKind::Regular => "Regular Shift",
            ShiftKind::OnCall => "On-Call Shift",
            ShiftKind::Major24h => "Μεγάλη Shift (24h)",
            ShiftKind::Minor24h => "Μικρή Shift (24h)",
            ShiftKind::Tep12h => "TEP Shift (12h)",
            ShiftKind::Specialty(specialty) => specialty.label(),
        }
    }
}

impl std::fmt::Display for ShiftKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The row layout of a roster table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableLayout {
    /// `[day, month-label?, day-of-week, employee-cell]`.
    Primary,
    /// `[day, month-label?, day-of-week, shift-A, shift-B, shift-C]`.
    TripleShift,
    /// `[date-string, day-of-week, employee]` for the cath lab.
    CathLab,
    /// `[date-string, day-of-week, employee]` for electrophysiology.
    Electrophysiology,
}

impl TableLayout {
    /// Minimum number of cells a data row of this layout must have.
    pub fn min_columns(&self) -> usize {
        match self {
            TableLayout::Primary => 4,
            TableLayout::TripleShift => 6,
            TableLayout::CathLab | TableLayout::Electrophysiology => 3,
        }
    }

    /// Returns the specialty for specialty layouts.
    pub fn specialty(&self) -> Option<Specialty> {
        match self {
            TableLayout::CathLab => Some(Specialty::CathLab),
            TableLayout::Electrophysiology => Some(Specialty::Electrophysiology),
            TableLayout::Primary | TableLayout::TripleShift => None,
        }
    }
}

impl std::fmt::Display for TableLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableLayout::Primary => write!(f, "primary"),
            TableLayout::TripleShift => write!(f, "triple_shift"),
            TableLayout::CathLab => write!(f, "cath_lab"),
            TableLayout::Electrophysiology => write!(f, "electrophysiology"),
        }
    }
}

/// A single dated shift assignment.
///
/// Records are immutable once built. The employee name is normalized (markers
/// stripped, trimmed) and never empty; `day_of_week` is copied verbatim from
/// the source and is not checked against `date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    employee: String,
    date: NaiveDate,
    day_of_week: String,
    kind: ShiftKind,
}

impl ShiftRecord {
    /// Creates a record, returning `None` when the employee name is blank.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_calendar::models::{ShiftKind, ShiftRecord};
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    /// let record = ShiftRecord::new(" Smith ", date, "Σάββατο", ShiftKind::Regular).unwrap();
    /// assert_eq!(record.employee(), "Smith");
    ///
    /// assert!(ShiftRecord::new("   ", date, "Σάββατο", ShiftKind::Regular).is_none());
    /// ```
    pub fn new(
        employee: &str,
        date: NaiveDate,
        day_of_week: &str,
        kind: ShiftKind,
    ) -> Option<Self> {
        let employee = employee.trim();
        if employee.is_empty() {
            return None;
        }
        Some(Self {
            employee: employee.to_string(),
            date,
            day_of_week: day_of_week.to_string(),
            kind,
        })
    }

    /// The normalized employee name.
    pub fn employee(&self) -> &str {
        &self.employee
    }

    /// The day the shift occurs.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The day-of-week label as printed in the roster.
    pub fn day_of_week(&self) -> &str {
        &self.day_of_week
    }

    /// The shift type tag.
    pub fn kind(&self) -> ShiftKind {
        self.kind
    }

    /// Returns true if this record belongs to `name`, ignoring case.
    pub fn is_for(&self, name: &str) -> bool {
        self.employee.to_lowercase() == name.trim().to_lowercase()
    }
}
