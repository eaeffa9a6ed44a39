//! HTTP request handlers for the shift calendar API.
//!
//! This module contains the handler functions for all API endpoints.

use std::collections::HashSet;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calendar::{
    EmployeeMatch, calendar_for_employee, generate_calendars, list_employees, resolve_employee,
};
use crate::error::EngineError;
use crate::models::{ParsedRoster, RosterInput};
use crate::output::MemorySink;
use crate::parsing::parse_roster;

use super::request::{BatchRequest, CalendarRequest};
use super::response::{
    ApiError, ApiErrorResponse, BatchResponse, CalendarEntry, EmployeesResponse,
};
use super::state::AppState;

const CALENDAR_CONTENT_TYPE: &str = "text/calendar; charset=utf-8";

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees", post(employees_handler))
        .route("/calendar", post(calendar_handler))
        .route("/calendars", post(calendars_handler))
        .with_state(state)
}

/// Handler for POST /employees endpoint.
///
/// Parses the roster and reports who is on it, how many shifts were read and
/// which rows were skipped.
async fn employees_handler(payload: Result<Json<RosterInput>, JsonRejection>) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing employee listing request");

    let roster = match payload {
        Ok(Json(roster)) => roster,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };
    let parsed = match parse(correlation_id, &roster) {
        Ok(parsed) => parsed,
        Err(response) => return response,
    };

    let response = EmployeesResponse {
        employees: list_employees(&parsed),
        shift_count: parsed.shift_count(),
        diagnostics: parsed.diagnostics,
        empty_tables: parsed.empty_tables,
    };
    info!(
        correlation_id = %correlation_id,
        employees = response.employees.len(),
        shift_count = response.shift_count,
        "Employee listing completed"
    );

    (StatusCode::OK, Json(response)).into_response()
}

/// Handler for POST /calendar endpoint.
///
/// Returns one employee's calendar as `text/calendar`. Names are matched
/// ignoring case; a partial match is reported as a suggestion, not served.
async fn calendar_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalendarRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calendar request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };
    let parsed = match parse(correlation_id, &request.roster) {
        Ok(parsed) => parsed,
        Err(response) => return response,
    };

    let employee = match resolve_employee(&request.employee, &list_employees(&parsed)) {
        EmployeeMatch::Exact(name) => name,
        EmployeeMatch::Suggested(name) => {
            warn!(
                correlation_id = %correlation_id,
                employee = %request.employee,
                suggestion = %name,
                "Employee not found, close match exists"
            );
            return json_error(
                StatusCode::NOT_FOUND,
                ApiError::no_shifts(&request.employee, Some(&name)),
            );
        }
        EmployeeMatch::NotFound => {
            return engine_error_response(
                correlation_id,
                EngineError::NoShiftsForEmployee {
                    employee: request.employee,
                },
            );
        }
    };

    match calendar_for_employee(&parsed, &employee, state.emitter(), Utc::now()) {
        Ok(calendar) => {
            info!(
                correlation_id = %correlation_id,
                employee = %employee,
                bytes = calendar.len(),
                "Calendar generated"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, CALENDAR_CONTENT_TYPE)],
                calendar,
            )
                .into_response()
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /calendars endpoint.
///
/// Generates calendars for the requested employees, or for everyone on the
/// roster when none are named. Per-employee failures are reported inline.
async fn calendars_handler(
    State(state): State<AppState>,
    payload: Result<Json<BatchRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing batch calendar request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };
    let parsed = match parse(correlation_id, &request.roster) {
        Ok(parsed) => parsed,
        Err(response) => return response,
    };

    let roster_employees = list_employees(&parsed);
    let employees: Vec<String> = match request.employees {
        Some(requested) => {
            let mut seen = HashSet::new();
            requested
                .into_iter()
                .map(|name| match resolve_employee(&name, &roster_employees) {
                    EmployeeMatch::Exact(canonical) => canonical,
                    _ => name,
                })
                .filter(|name| seen.insert(name.to_lowercase()))
                .collect()
        }
        None => roster_employees,
    };

    let mut sink = MemorySink::new();
    let outcomes = generate_calendars(&parsed, &employees, state.emitter(), Utc::now(), &mut sink);
    let mut calendars = sink.into_calendars();

    let mut response = BatchResponse::new();
    for outcome in outcomes {
        let entry = match (outcome.result, calendars.remove(&outcome.employee)) {
            (Ok(_), Some(bytes)) => {
                CalendarEntry::Calendar(String::from_utf8_lossy(&bytes).into_owned())
            }
            (Ok(location), None) => {
                CalendarEntry::Error(format!("Calendar missing from {}", location))
            }
            (Err(err), _) => CalendarEntry::Error(err.to_string()),
        };
        response.insert(outcome.employee, entry);
    }

    info!(
        correlation_id = %correlation_id,
        employees = response.len(),
        "Batch calendar request completed"
    );

    (StatusCode::OK, Json(response)).into_response()
}

/// Parses the roster, logging every skipped row against the request.
fn parse(correlation_id: Uuid, roster: &RosterInput) -> Result<ParsedRoster, Response> {
    let parsed =
        parse_roster(roster).map_err(|err| engine_error_response(correlation_id, err))?;
    if !parsed.diagnostics.is_empty() {
        warn!(
            correlation_id = %correlation_id,
            skipped_rows = parsed.diagnostics.len(),
            "Roster parsed with skipped rows"
        );
    }
    Ok(parsed)
}

fn engine_error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(correlation_id = %correlation_id, error = %err, "Request failed");
    ApiErrorResponse::from(err).into_response()
}

fn json_error(status: StatusCode, error: ApiError) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_error(StatusCode::BAD_REQUEST, error)
}
