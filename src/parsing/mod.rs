//! Roster table interpretation.
//!
//! This module turns rows of extracted cell text into dated
//! [`ShiftRecord`](crate::models::ShiftRecord)s: data-row classification,
//! month/year inference, the three table layouts (primary, triple-shift and
//! specialty on-call), whole-roster parsing and file-name period detection.
//!
//! Parsers are pure. Skipped rows come back as diagnostics; only
//! [`parse_roster`] logs.

mod date_inference;
mod months;
mod outcome;
mod period;
mod pipeline;
mod primary;
mod row_classifier;
mod specialty;
mod triple_shift;

pub use date_inference::DateInferencer;
pub use months::month_from_text;
pub use outcome::ParseOutcome;
pub use period::{RosterPeriod, detect_period};
pub use pipeline::parse_roster;
pub use primary::{parse_primary_table, split_employee_cell};
pub use row_classifier::{ON_CALL_MARKER, is_data_row, strip_marker};
pub use specialty::{parse_date_cell, parse_specialty_table};
pub use triple_shift::parse_triple_shift_table;
