//! HTTP API module for the shift calendar engine.
//!
//! Exposes roster inspection and calendar generation over JSON so a
//! document-extraction front end can drive the engine headlessly.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{BatchRequest, CalendarRequest};
pub use response::{ApiError, BatchResponse, CalendarEntry, EmployeesResponse};
pub use state::AppState;
