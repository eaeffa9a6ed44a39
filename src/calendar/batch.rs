//! Calendar generation for one or many employees.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::ParsedRoster;
use crate::output::OutputSink;

use super::{CalendarEmitter, aggregate_employee};

/// Outcome of generating one employee's calendar in a batch.
#[derive(Debug, Serialize)]
pub struct EmployeeOutcome {
    /// Employee the calendar was generated for.
    pub employee: String,
    /// Output location on success.
    #[serde(serialize_with = "serialize_result")]
    pub result: EngineResult<String>,
}

impl EmployeeOutcome {
    /// True if the calendar was written.
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

fn serialize_result<S>(result: &EngineResult<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match result {
        Ok(location) => serializer.serialize_str(location),
        Err(e) => serializer.serialize_str(&e.to_string()),
    }
}

/// Aggregates and emits the calendar for a single employee.
///
/// # Errors
///
/// Returns [`EngineError::NoShiftsForEmployee`] if the employee appears in no
/// list of the roster.
pub fn calendar_for_employee(
    roster: &ParsedRoster,
    employee: &str,
    emitter: &CalendarEmitter,
    dtstamp: DateTime<Utc>,
) -> EngineResult<String> {
    let days = aggregate_employee(employee, &roster.main, &roster.specialties);
    if days.is_empty() {
        return Err(EngineError::NoShiftsForEmployee {
            employee: employee.to_string(),
        });
    }
    Ok(emitter.emit(employee, &days, dtstamp))
}

/// Generates a calendar for every listed employee and hands it to `sink`.
///
/// A failure for one employee is recorded in that employee's outcome and
/// does not stop the batch. Outcomes keep the order of `employees`.
pub fn generate_calendars(
    roster: &ParsedRoster,
    employees: &[String],
    emitter: &CalendarEmitter,
    dtstamp: DateTime<Utc>,
    sink: &mut dyn OutputSink,
) -> Vec<EmployeeOutcome> {
    let outcomes: Vec<EmployeeOutcome> = employees
        .iter()
        .map(|employee| {
            let result = calendar_for_employee(roster, employee, emitter, dtstamp)
                .and_then(|calendar| sink.write_calendar(employee, calendar.as_bytes()));

            match &result {
                Ok(location) => info!(employee = %employee, location = %location, "Calendar written"),
                Err(e) => warn!(employee = %employee, error = %e, "Calendar generation failed"),
            }

            EmployeeOutcome {
                employee: employee.clone(),
                result,
            }
        })
        .collect();

    let written = outcomes.iter().filter(|o| o.is_success()).count();
    info!(
        requested = employees.len(),
        written = written,
        "Batch calendar generation complete"
    );

    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ShiftKind, ShiftRecord};
    use crate::output::MemorySink;
    use chrono::{NaiveDate, TimeZone};

    struct FailingSink;

    impl OutputSink for FailingSink {
        fn write_calendar(&mut self, employee: &str, _calendar: &[u8]) -> EngineResult<String> {
            Err(EngineError::OutputWrite {
                employee: employee.to_string(),
                location: "nowhere".to_string(),
                message: "read-only".to_string(),
            })
        }
    }

    fn roster() -> ParsedRoster {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        ParsedRoster {
            main: vec![
                ShiftRecord::new("Lee", date, "Σάββατο", ShiftKind::Regular).unwrap(),
                ShiftRecord::new("Smith", date, "Σάββατο", ShiftKind::OnCall).unwrap(),
            ],
            ..ParsedRoster::default()
        }
    }

    fn emitter() -> CalendarEmitter {
        CalendarEmitter::new("-//Test//EN", "shifts.example.com")
    }

    fn stamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 2, 20, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_single_calendar() {
        let ics = calendar_for_employee(&roster(), "Lee", &emitter(), stamp()).unwrap();
        assert!(ics.contains("Lee-20250301@shifts.example.com"));
    }

    #[test]
    fn test_unknown_employee_has_no_shifts() {
        match calendar_for_employee(&roster(), "Nobody", &emitter(), stamp()) {
            Err(EngineError::NoShiftsForEmployee { employee }) => assert_eq!(employee, "Nobody"),
            other => panic!("Expected NoShiftsForEmployee, got {:?}", other),
        }
    }

    #[test]
    fn test_batch_continues_past_failures() {
        let employees = vec!["Nobody".to_string(), "Lee".to_string(), "Smith".to_string()];
        let mut sink = MemorySink::new();

        let outcomes = generate_calendars(&roster(), &employees, &emitter(), stamp(), &mut sink);

        assert_eq!(outcomes.len(), 3);
        assert!(!outcomes[0].is_success());
        assert_eq!(outcomes[1].result.as_deref().unwrap(), "memory:Lee");
        assert!(outcomes[2].is_success());
        assert!(sink.get("Lee").is_some());
        assert!(sink.get("Nobody").is_none());
    }

    #[test]
    fn test_sink_errors_are_scoped_to_employee() {
        let employees = vec!["Lee".to_string(), "Smith".to_string()];
        let outcomes =
            generate_calendars(&roster(), &employees, &emitter(), stamp(), &mut FailingSink);

        assert!(outcomes.iter().all(|o| matches!(
            o.result,
            Err(EngineError::OutputWrite { .. })
        )));
        assert_eq!(outcomes[1].employee, "Smith");
    }

    #[test]
    fn test_outcome_serializes_error_text() {
        let outcome = EmployeeOutcome {
            employee: "Nobody".to_string(),
            result: Err(EngineError::NoShiftsForEmployee {
                employee: "Nobody".to_string(),
            }),
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["result"], "No shifts found for employee: Nobody");
    }
}
