//! Shared types for the Boost admin client
//!
//! Record models, identity and collection merging, the calendar date codec,
//! and the request/response shapes exchanged with the REST backend.
//! Nothing in this crate performs I/O.

pub mod date;
pub mod identity;
pub mod models;
pub mod request;
pub mod response;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use date::{CalendarDate, DATE_FORMAT, from_wire_format, to_wire_format};
pub use identity::{EntityId, Identified, merge_missing, same_record};
pub use models::{Employee, Employer, Entity, Quote, Related};
pub use request::{RequestOptions, create_request_option};
pub use response::{Alert, HttpResponse, ProblemDetails};
