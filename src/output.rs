//! Output sinks for generated calendars.
//!
//! The engine hands each employee's finished calendar to an [`OutputSink`];
//! where the bytes end up is the sink's business.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use crate::error::{EngineError, EngineResult};

/// Destination for one employee's calendar bytes.
pub trait OutputSink {
    /// Persists `calendar` for `employee` and returns where it went.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutputWrite`] if the calendar cannot be stored.
    fn write_calendar(&mut self, employee: &str, calendar: &[u8]) -> EngineResult<String>;
}

/// File name for an employee's calendar.
///
/// Spaces, path separators and other characters unsafe in file names become
/// underscores, as does a leading dot, so the name never leaves the output
/// directory.
///
/// ```
/// use shift_calendar::output::calendar_file_name;
///
/// assert_eq!(calendar_file_name("Anna Lee", "_shifts.ics"), "Anna_Lee_shifts.ics");
/// assert_eq!(calendar_file_name("../Lee", ".ics"), "_._Lee.ics");
/// ```
pub fn calendar_file_name(employee: &str, suffix: &str) -> String {
    let stem: String = employee
        .chars()
        .enumerate()
        .map(|(i, c)| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            '.' if i == 0 => '_',
            c if c.is_whitespace() || c.is_control() => '_',
            c => c,
        })
        .collect();
    format!("{}{}", stem, suffix)
}

/// Writes one `.ics` file per employee into a directory.
///
/// Existing files are overwritten.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    directory: PathBuf,
    file_suffix: String,
}

impl DirectorySink {
    /// Creates a sink writing `<name><file_suffix>` files into `directory`.
    pub fn new(directory: impl Into<PathBuf>, file_suffix: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            file_suffix: file_suffix.into(),
        }
    }
}

impl OutputSink for DirectorySink {
    fn write_calendar(&mut self, employee: &str, calendar: &[u8]) -> EngineResult<String> {
        let path = self
            .directory
            .join(calendar_file_name(employee, &self.file_suffix));
        let location = path.display().to_string();

        fs::write(&path, calendar).map_err(|e| EngineError::OutputWrite {
            employee: employee.to_string(),
            location: location.clone(),
            message: e.to_string(),
        })?;

        Ok(location)
    }
}

/// Keeps calendars in memory, keyed by employee.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    calendars: BTreeMap<String, Vec<u8>>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored calendar for `employee`.
    pub fn get(&self, employee: &str) -> Option<&[u8]> {
        self.calendars.get(employee).map(Vec::as_slice)
    }

    /// Consumes the sink, returning all stored calendars.
    pub fn into_calendars(self) -> BTreeMap<String, Vec<u8>> {
        self.calendars
    }
}

impl OutputSink for MemorySink {
    fn write_calendar(&mut self, employee: &str, calendar: &[u8]) -> EngineResult<String> {
        self.calendars
            .insert(employee.to_string(), calendar.to_vec());
        Ok(format!("memory:{}", employee))
    }
}
