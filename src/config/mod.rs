//! Configuration loading for calendar generation.
//!
//! Calendar metadata (product id, UID domain) and output naming live in a
//! `calendar.yaml` file so deployments can brand their calendars without a
//! rebuild.
//!
//! # Example
//!
//! ```no_run
//! use shift_calendar::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/default").unwrap();
//! println!("PRODID: {}", loader.config().calendar.product_id);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CalendarConfig, CalendarSection, OutputSection};
