//! iCalendar emission for aggregated days.

use chrono::{DateTime, NaiveDate, Utc};
use ical::generator::{Emitter, IcalCalendarBuilder, IcalEventBuilder};
use ical::property::Property;

use crate::config::CalendarConfig;
use crate::models::AggregatedDay;

const DATE_FORMAT: &str = "%Y%m%d";
const TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Escapes a TEXT property value.
///
/// The generator writes values verbatim, so free text is escaped before it
/// is set.
///
/// ```
/// use shift_calendar::calendar::escape_text;
///
/// assert_eq!(escape_text("a, b; c\nd"), "a\\, b\\; c\\nd");
/// ```
pub fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            ';' => escaped.push_str("\\;"),
            ',' => escaped.push_str("\\,"),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            other => escaped.push(other),
        }
    }
    escaped
}

fn text_property(name: &str, value: &str) -> Property {
    Property {
        name: name.to_string(),
        params: None,
        value: Some(escape_text(value)),
    }
}

fn date_property(name: &str, date: NaiveDate) -> Property {
    Property {
        name: name.to_string(),
        params: Some(vec![("VALUE".to_string(), vec!["DATE".to_string()])]),
        value: Some(date.format(DATE_FORMAT).to_string()),
    }
}

/// Serializes aggregated days into an iCalendar document.
///
/// Every day becomes one all-day `VEVENT` spanning `[date, date + 1)`. UIDs
/// depend only on the employee name and the date, so regenerating a calendar
/// replaces the previously imported events instead of duplicating them.
///
/// # Example
///
/// ```
/// use shift_calendar::calendar::CalendarEmitter;
/// use shift_calendar::models::AggregatedDay;
/// use chrono::{NaiveDate, TimeZone, Utc};
///
/// let emitter = CalendarEmitter::new("-//Test//EN", "shifts.example.com");
/// let day = AggregatedDay {
///     date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
///     day_of_week: "Σάββατο".to_string(),
///     shift_types: vec!["Regular Shift".to_string()],
///     coworkers: vec![],
///     specialty_on_call: vec![],
/// };
/// let stamp = Utc.with_ymd_and_hms(2025, 2, 20, 9, 0, 0).unwrap();
/// let ics = emitter.emit("Anna Lee", &[day], stamp);
///
/// assert!(ics.contains("AnnaLee-20250301@shifts.example.com"));
/// assert!(ics.contains("20250302"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEmitter {
    product_id: String,
    uid_domain: String,
}

impl CalendarEmitter {
    /// Creates an emitter with an explicit product id and UID domain.
    pub fn new(product_id: impl Into<String>, uid_domain: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            uid_domain: uid_domain.into(),
        }
    }

    /// Creates an emitter from the calendar section of the configuration.
    pub fn from_config(config: &CalendarConfig) -> Self {
        Self::new(
            config.calendar.product_id.clone(),
            config.calendar.uid_domain.clone(),
        )
    }

    /// Stable event identifier for an employee's day.
    pub fn event_uid(&self, employee: &str, date: NaiveDate) -> String {
        format!(
            "{}-{}@{}",
            employee.replace(' ', ""),
            date.format(DATE_FORMAT),
            self.uid_domain
        )
    }

    /// Emits a calendar with one event per day, in the order given.
    ///
    /// `dtstamp` is written as every event's `DTSTAMP`; all other output is a
    /// pure function of `employee` and `days`.
    pub fn emit(&self, employee: &str, days: &[AggregatedDay], dtstamp: DateTime<Utc>) -> String {
        let stamp = dtstamp.format(TIMESTAMP_FORMAT).to_string();
        let mut calendar = IcalCalendarBuilder::version("2.0")
            .gregorian()
            .prodid(self.product_id.as_str())
            .build();

        for day in days {
            let uid = self.event_uid(employee, day.date);
            let start = day.date.format(DATE_FORMAT).to_string();
            let end = day.date.succ_opt().unwrap_or(day.date);
            let summary = format!("{} - {}", day.shift_summary(), day.day_of_week);

            let event = IcalEventBuilder::tzid("UTC")
                .uid(uid.as_str())
                .changed(stamp.as_str())
                .one_day(start.as_str())
                .set(date_property("DTEND", end))
                .set(text_property("SUMMARY", &summary))
                .set(text_property("DESCRIPTION", &describe(day)))
                .build();
            calendar.events.push(event);
        }

        calendar.generate()
    }
}

/// Event description: own shifts, coworkers and specialty on-call.
fn describe(day: &AggregatedDay) -> String {
    let mut description = format!("Your shifts: {}", day.shift_summary());

    if day.coworkers.is_empty() {
        description.push_str("\n\nNo other employees scheduled on this day.");
    } else {
        description.push_str("\n\nOther employees on this day:");
        for coworker in &day.coworkers {
            description.push_str(&format!("\n{}", coworker));
        }
    }

    if !day.specialty_on_call.is_empty() {
        description.push('\n');
        for on_call in &day.specialty_on_call {
            description.push_str(&format!("\n{}", on_call));
        }
    }

    description
}
