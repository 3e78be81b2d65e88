//! Data models
//!
//! Client-side projections of the backend records. Every field is optional
//! so an empty record can back a "create new" form.

pub mod employee;
pub mod employer;
pub mod quote;

// Re-exports
pub use employee::*;
pub use employer::*;
pub use quote::*;

use serde::{Serialize, de::DeserializeOwned};

use crate::identity::Identified;

/// A record kind exposed through its own REST resource
pub trait Entity:
    Identified + Clone + Default + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Display name used in logs
    const NAME: &'static str;

    /// Resource path relative to the API base address (e.g. `api/quotes`)
    const RESOURCE: &'static str;
}

/// Records that may reference exactly one Employer
pub trait Related {
    /// Currently referenced employer
    fn employer(&self) -> Option<&Employer> {
        None
    }

    /// Replace the employer reference; kinds without one ignore this
    fn set_employer(&mut self, _employer: Option<Employer>) {}

    /// Whether this kind carries an employer reference at all
    fn has_employer_reference() -> bool {
        false
    }
}
