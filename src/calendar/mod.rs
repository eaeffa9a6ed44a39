//! Calendar building: aggregation, iCalendar emission and batch output.
//!
//! A parsed roster flows through this module in three steps:
//!
//! 1. [`aggregate_employee`] collapses one employee's records into days.
//! 2. [`CalendarEmitter`] serializes those days as iCalendar text.
//! 3. [`generate_calendars`] repeats both for many employees and writes
//!    each result to an [`OutputSink`](crate::output::OutputSink).

mod aggregation;
mod batch;
mod directory;
mod emitter;

pub use aggregation::aggregate_employee;
pub use batch::{EmployeeOutcome, calendar_for_employee, generate_calendars};
pub use directory::{EmployeeMatch, list_employees, resolve_employee};
pub use emitter::{CalendarEmitter, escape_text};
