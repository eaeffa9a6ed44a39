//! Response types for the shift calendar API.
//!
//! This module defines the JSON bodies returned by the endpoints and the
//! mapping from [`EngineError`] to HTTP errors.

use std::collections::BTreeMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::RowDiagnostic;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a no-shifts error, suggesting a close name when one exists.
    pub fn no_shifts(employee: &str, suggestion: Option<&str>) -> Self {
        let message = format!("No shifts found for employee: {}", employee);
        match suggestion {
            Some(name) => {
                Self::with_details("NO_SHIFTS", message, format!("Did you mean '{}'?", name))
            }
            None => Self::new("NO_SHIFTS", message),
        }
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidPeriod { month, year } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_PERIOD",
                    format!("Invalid roster period {}/{}", month, year),
                    "The month must be between 1 and 12 and the year within the supported date range",
                ),
            },
            EngineError::NoShiftsForEmployee { employee } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::no_shifts(&employee, None),
            },
            EngineError::OutputWrite {
                employee, message, ..
            } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "OUTPUT_ERROR",
                    format!("Failed to store calendar for {}", employee),
                    message,
                ),
            },
        }
    }
}

/// Response body for the `/employees` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeesResponse {
    /// Distinct employee names, sorted.
    pub employees: Vec<String>,
    /// Number of shift records parsed across all tables.
    pub shift_count: usize,
    /// Rows that were skipped.
    pub diagnostics: Vec<RowDiagnostic>,
    /// Indices of tables without data rows.
    pub empty_tables: Vec<usize>,
}

/// Per-employee entry of the `/calendars` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarEntry {
    /// The generated iCalendar document.
    Calendar(String),
    /// Why no calendar was generated.
    Error(String),
}

/// Response body for the `/calendars` endpoint, keyed by employee.
pub type BatchResponse = BTreeMap<String, CalendarEntry>;
