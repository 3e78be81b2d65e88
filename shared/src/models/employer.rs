//! Employer Model

use serde::{Deserialize, Serialize};

use super::{Employee, Entity, Related};
use crate::identity::{EntityId, Identified};

/// Employer entity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Read-only side of the Employee.employer relation, never written back
    #[serde(default, skip_serializing)]
    pub employees: Option<Vec<Employee>>,
}

impl Employer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Reference to an existing employer carrying only its identifier
    pub fn reference(id: EntityId) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }
}

impl Identified for Employer {
    fn identifier(&self) -> Option<EntityId> {
        self.id
    }
}

impl Entity for Employer {
    const NAME: &'static str = "Employer";
    const RESOURCE: &'static str = "api/employers";
}

impl Related for Employer {}
