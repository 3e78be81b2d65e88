//! Employee Model

use serde::{Deserialize, Serialize};

use super::{Employer, Entity, Related};
use crate::date::{CalendarDate, optional_date};
use crate::identity::{EntityId, Identified};

/// Employee entity
///
/// `employer` is only empty while a new employee is being edited.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "optional_date::is_absent",
        with = "optional_date"
    )]
    pub date_of_birth: Option<CalendarDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employer: Option<Employer>,
}

impl Employee {
    pub fn new(name: impl Into<String>, date_of_birth: CalendarDate, employer: Employer) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            date_of_birth: Some(date_of_birth),
            employer: Some(employer),
        }
    }
}

impl Identified for Employee {
    fn identifier(&self) -> Option<EntityId> {
        self.id
    }
}

impl Entity for Employee {
    const NAME: &'static str = "Employee";
    const RESOURCE: &'static str = "api/employees";
}

impl Related for Employee {
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_date_of_birth_wire_format() {
        let employee = Employee::new(
            "Ann",
            CalendarDate::from_ymd(1990, 7, 14),
            Employer::reference(3),
        );
        let json = serde_json::to_value(&employee).unwrap();
        assert_eq!(
            json,
            json!({ "name": "Ann", "dateOfBirth": "1990-07-14", "employer": { "id": 3 } })
        );
    }

    #[test]
    fn test_null_employer_from_backend() {
        let employee: Employee =
            serde_json::from_value(json!({ "id": 5, "name": "Bo", "employer": null })).unwrap();
        assert!(employee.employer.is_none());
        assert_eq!(employee.date_of_birth, None);

        // an unset employer is left out so a merge patch never clears it
        let json = serde_json::to_value(&employee).unwrap();
        assert_eq!(json, json!({ "id": 5, "name": "Bo" }));
    }

    #[test]
    fn test_invalid_date_of_birth_is_omitted() {
        let employee = Employee {
            id: Some(4),
            date_of_birth: Some(CalendarDate::parse("1990-13-01")),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&employee).unwrap(), json!({ "id": 4 }));
    }
}
