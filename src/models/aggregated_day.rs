//! Per-employee daily aggregate consumed by the calendar emitter.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Specialty;

/// Another employee working on the same day.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CoworkerShift {
    /// The coworker's name.
    pub employee: String,
    /// Label of the coworker's shift.
    pub shift_type: String,
}

impl std::fmt::Display for CoworkerShift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.employee, self.shift_type)
    }
}

/// The employee on specialty on-call duty on a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialtyOnCall {
    /// The specialty.
    pub specialty: Specialty,
    /// The employee holding it.
    pub employee: String,
}

impl std::fmt::Display for SpecialtyOnCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.specialty.label(), self.employee)
    }
}

/// Everything one employee does on one date.
///
/// # Example
///
/// ```
/// use shift_calendar::models::AggregatedDay;
/// use chrono::NaiveDate;
///
/// let day = AggregatedDay {
///     date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
///     day_of_week: "Σάββατο".to_string(),
///     shift_types: vec!["Regular Shift".to_string(), "Cath Lab On-Call".to_string()],
///     coworkers: vec![],
///     specialty_on_call: vec![],
/// };
/// assert_eq!(day.shift_summary(), "Regular Shift, Cath Lab On-Call");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedDay {
    /// The date.
    pub date: NaiveDate,
    /// Day-of-week label of the first record seen for this date.
    pub day_of_week: String,
    /// Shift labels in encounter order, without duplicates.
    pub shift_types: Vec<String>,
    /// Other employees working that day, sorted.
    pub coworkers: Vec<CoworkerShift>,
    /// Specialty on-call held by someone else that day.
    pub specialty_on_call: Vec<SpecialtyOnCall>,
}

impl AggregatedDay {
    /// Comma-joined shift labels.
    pub fn shift_summary(&self) -> String {
        self.shift_types.join(", ")
    }
}
