//! Boost Client - data access for the Boost admin UI
//!
//! Typed REST access to Employers, Employees and Quotes, route resolution
//! for detail/edit views, and the form state those views keep.

pub mod client;
pub mod config;
pub mod error;
#[cfg(feature = "logger")]
pub mod logger;
pub mod navigation;
pub mod resolver;
pub mod service;
pub mod view;

pub use client::{HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use client::OneshotHttpClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use navigation::{HistoryNavigator, NOT_FOUND_ROUTE, NavigationEvent, Navigator};
pub use resolver::{Resolution, RouteParams, RouteResolver};
pub use service::{
    EmployeeService, EmployerService, EntityArrayResponse, EntityResponse, EntityService,
    QuoteService,
};
pub use view::{DeleteDialog, DeleteOutcome, EntityDetail, EntityEditor, EntityList};

// Re-export shared types for convenience
pub use shared::{
    CalendarDate, Employee, Employer, Entity, EntityId, HttpResponse, Identified, Quote, Related,
    RequestOptions,
};
