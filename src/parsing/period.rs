//! Base period detection from roster file names.
//!
//! Roster documents are usually named after the month they cover, e.g.
//! `ΕΦΗΜΕΡΙΕΣ ΜΑΡΤΙΟΣ 2025.docx`.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::months::month_from_text;

/// A base month/year and whether it was read from the file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterPeriod {
    /// Month (1-12).
    pub month: u32,
    /// Year.
    pub year: i32,
    /// True if the month was found in the file name.
    pub detected: bool,
}

static RE_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"20[0-9]{2}").expect("valid year regex"));

/// Finds the first `20NN` year in `text`.
fn year_from_text(text: &str) -> Option<i32> {
    RE_YEAR.find(text)?.as_str().parse().ok()
}

/// Infers the roster period from a file name.
///
/// A month name without a year keeps the fallback year; a file name without a
/// month name yields the fallback period unchanged.
///
/// # Example
///
/// ```
/// use shift_calendar::parsing::detect_period;
///
/// let period = detect_period("ΕΦΗΜΕΡΙΕΣ ΜΑΡΤΙΟΣ 2025.docx", (10, 2026));
/// assert_eq!((period.month, period.year, period.detected), (3, 2025, true));
///
/// let period = detect_period("roster.docx", (10, 2026));
/// assert_eq!((period.month, period.year, period.detected), (10, 2026, false));
/// ```
pub fn detect_period(file_name: &str, fallback: (u32, i32)) -> RosterPeriod {
    let (fallback_month, fallback_year) = fallback;
    match month_from_text(file_name) {
        Some(month) => RosterPeriod {
            month,
            year: year_from_text(file_name).unwrap_or(fallback_year),
            detected: true,
        },
        None => RosterPeriod {
            month: fallback_month,
            year: fallback_year,
            detected: false,
        },
    }
}
