//! Request types for the shift calendar API.
//!
//! Every endpoint takes a roster (base period plus extracted tables); the
//! calendar endpoints add the employee selection next to it.

use serde::{Deserialize, Serialize};

use crate::models::RosterInput;

/// Request body for the `/calendar` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarRequest {
    /// The roster to read shifts from.
    #[serde(flatten)]
    pub roster: RosterInput,
    /// Employee to build the calendar for.
    pub employee: String,
}

/// Request body for the `/calendars` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchRequest {
    /// The roster to read shifts from.
    #[serde(flatten)]
    pub roster: RosterInput,
    /// Employees to build calendars for; every employee when absent.
    #[serde(default)]
    pub employees: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TableLayout;

    #[test]
    fn test_deserialize_calendar_request() {
        let json = r#"{
            "month": 3,
            "year": 2025,
            "tables": [
                {"layout": "primary", "rows": [["1", "", "Σάββατο", "Lee"]]},
                {"layout": "cath_lab", "rows": [["01-03-2025", "Σάββατο", "Smith"]]}
            ],
            "employee": "Lee"
        }"#;

        let request: CalendarRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.employee, "Lee");
        assert_eq!(request.roster.month, 3);
        assert_eq!(request.roster.tables.len(), 2);
        assert_eq!(request.roster.tables[1].layout, TableLayout::CathLab);
    }

    #[test]
    fn test_batch_request_employees_default_to_none() {
        let json = r#"{"month": 1, "year": 2026, "tables": []}"#;
        let request: BatchRequest = serde_json::from_str(json).unwrap();
        assert!(request.employees.is_none());
    }

    #[test]
    fn test_unknown_layout_is_rejected() {
        let json = r#"{"month": 1, "year": 2026, "tables": [{"layout": "weekly", "rows": []}]}"#;
        assert!(serde_json::from_str::<RosterInput>(json).is_err());
    }
}
