//! Core data models for the shift calendar engine.
//!
//! This module contains all the domain models used throughout the engine.

mod aggregated_day;
mod diagnostic;
mod roster;
mod shift;

pub use aggregated_day::{AggregatedDay, CoworkerShift, SpecialtyOnCall};
pub use diagnostic::{RowDiagnostic, SkipReason};
pub use roster::{ParsedRoster, RosterInput, RosterTable, SpecialtyRoster};
pub use shift::{ShiftKind, ShiftRecord, Specialty, TableLayout};
