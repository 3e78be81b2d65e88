//! Quote Model

use serde::{Deserialize, Serialize};

use super::{Employer, Entity, Related};
use crate::date::{CalendarDate, optional_date};
use crate::identity::{EntityId, Identified};

/// Quote entity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "optional_date::is_absent",
        with = "optional_date"
    )]
    pub quote_date: Option<CalendarDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employer: Option<Employer>,
}

impl Quote {
    pub fn new(name: impl Into<String>, quote_date: CalendarDate, employer: Employer) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            quote_date: Some(quote_date),
            employer: Some(employer),
        }
    }
}

impl Identified for Quote {
    fn identifier(&self) -> Option<EntityId> {
        self.id
    }
}

impl Entity for Quote {
    const NAME: &'static str = "Quote";
    const RESOURCE: &'static str = "api/quotes";
}

impl Related for Quote {
    fn employer(&self) -> Option<&Employer> {
        self.employer.as_ref()
    }

    fn set_employer(&mut self, employer: Option<Employer>) {
        self.employer = employer;
    }

    fn has_employer_reference() -> bool {
        true
    }
}
