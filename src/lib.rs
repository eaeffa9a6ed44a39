//! Shift Calendar Engine
//!
//! This crate turns tabular shift rosters (rows of cell text extracted from
//! word-processing documents) into per-employee iCalendar files. Rows are
//! interpreted per table layout with the month and year inferred from day
//! numbers and month labels; each employee's records are then merged per day
//! and cross-referenced with coworkers and specialty on-call colleagues.
//!
//! # Example
//!
//! ```
//! use shift_calendar::calendar::{CalendarEmitter, calendar_for_employee};
//! use shift_calendar::models::{RosterInput, RosterTable, TableLayout};
//! use shift_calendar::parsing::parse_roster;
//! use chrono::Utc;
//!
//! let cells = |row: &[&str]| row.iter().map(|c| c.to_string()).collect::<Vec<_>>();
//! let roster = RosterInput {
//!     month: 3,
//!     year: 2025,
//!     tables: vec![RosterTable {
//!         layout: TableLayout::Primary,
//!         rows: vec![cells(&["1", "ΜΑΡΤΙΟΣ", "Σάββατο", "A.Papadopoulos\nB.Georgiou*"])],
//!     }],
//! };
//!
//! let parsed = parse_roster(&roster)?;
//! let emitter = CalendarEmitter::new("-//Employee Shift Calendar//example.com//", "shifts.example.com");
//! let ics = calendar_for_employee(&parsed, "A.Papadopoulos", &emitter, Utc::now())?;
//! assert!(ics.contains("Regular Shift - Σάββατο"));
//! # Ok::<(), shift_calendar::error::EngineError>(())
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod parsing;
