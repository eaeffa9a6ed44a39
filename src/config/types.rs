//! Configuration types for calendar generation.
//!
//! These structures are deserialized from `calendar.yaml`.

use serde::Deserialize;

/// Calendar metadata shared by every generated file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CalendarSection {
    /// The `PRODID` written into each calendar.
    pub product_id: String,
    /// Domain part of every event `UID`.
    pub uid_domain: String,
}

/// Settings for calendars written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputSection {
    /// Appended to the employee name to form the file name.
    pub file_suffix: String,
}

/// Complete calendar configuration.
///
/// [`Default`] matches the shipped `config/default/calendar.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CalendarConfig {
    /// Calendar metadata.
    pub calendar: CalendarSection,
    /// File output settings.
    pub output: OutputSection,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            calendar: CalendarSection {
                product_id: "-//Employee Shift Calendar//example.com//".to_string(),
                uid_domain: "shifts.example.com".to_string(),
            },
            output: OutputSection {
                file_suffix: "_shifts.ics".to_string(),
            },
        }
    }
}
