//! Calendar date codec
//!
//! Date fields travel as `YYYY-MM-DD` strings. In memory they are
//! [`CalendarDate`] values, which may be invalid when the wire text could
//! not be parsed. Neither direction ever fails.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Wire format shared by every date field of every entity
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// In-memory calendar date
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CalendarDate {
    /// A real calendar day
    Valid(NaiveDate),
    /// Unparseable wire text, kept verbatim
    Invalid(String),
}

impl CalendarDate {
    /// Build a date from year/month/day, `Invalid` if the day does not exist
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Self {
        match NaiveDate::from_ymd_opt(year, month, day) {
            Some(date) => Self::Valid(date),
            None => Self::Invalid(format!("{:04}-{:02}-{:02}", year, month, day)),
        }
    }

    /// Parse wire text; malformed input yields `Invalid` instead of an error
    pub fn parse(value: &str) -> Self {
        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(Self::Valid)
            .unwrap_or_else(|_| Self::Invalid(value.to_string()))
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// The underlying date, if valid
    pub fn as_naive(&self) -> Option<NaiveDate> {
        match self {
            Self::Valid(date) => Some(*date),
            Self::Invalid(_) => None,
        }
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self::Valid(date)
    }
}

/// In-memory date -> wire string. Absent and invalid dates both become `None`.
pub fn to_wire_format(date: Option<&CalendarDate>) -> Option<String> {
    date.and_then(CalendarDate::as_naive)
        .map(|d| d.format(DATE_FORMAT).to_string())
}

/// Wire string -> in-memory date. Absent or empty input becomes `None`.
pub fn from_wire_format(value: Option<&str>) -> Option<CalendarDate> {
    value.filter(|v| !v.is_empty()).map(CalendarDate::parse)
}

/// Serde adapter for `Option<CalendarDate>` fields.
///
/// ```ignore
/// #[serde(
///     default,
///     skip_serializing_if = "crate::date::optional_date::is_absent",
///     with = "crate::date::optional_date"
/// )]
/// pub quote_date: Option<CalendarDate>,
/// ```
pub mod optional_date {
    use super::*;

    /// `skip_serializing_if` predicate: absent and invalid dates both stay off the wire
    pub fn is_absent(date: &Option<CalendarDate>) -> bool {
        to_wire_format(date.as_ref()).is_none()
    }

    pub fn serialize<S>(date: &Option<CalendarDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        to_wire_format(date.as_ref()).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<CalendarDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(from_wire_format(raw.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_day_granularity() {
        for (y, m, d) in [(2023, 5, 1), (1970, 1, 1), (2000, 2, 29), (1899, 12, 31)] {
            let date = CalendarDate::from_ymd(y, m, d);
            let wire = to_wire_format(Some(&date));
            assert_eq!(from_wire_format(wire.as_deref()), Some(date));
        }
    }

    #[test]
    fn test_wire_format_shape() {
        let date = CalendarDate::from_ymd(2023, 5, 1);
        assert_eq!(to_wire_format(Some(&date)).as_deref(), Some("2023-05-01"));
    }

    #[test]
    fn test_absent_dates() {
        assert_eq!(to_wire_format(None), None);
        assert_eq!(from_wire_format(None), None);
        assert_eq!(from_wire_format(Some("")), None);
    }

    #[test]
    fn test_invalid_dates_never_fail() {
        let parsed = from_wire_format(Some("not-a-date")).unwrap();
        assert!(!parsed.is_valid());
        assert_eq!(parsed, CalendarDate::Invalid("not-a-date".into()));
        assert_eq!(to_wire_format(Some(&parsed)), None);

        let impossible = CalendarDate::from_ymd(2023, 2, 30);
        assert!(!impossible.is_valid());
        assert_eq!(to_wire_format(Some(&impossible)), None);
    }

    #[test]
    fn test_serde_adapter() {
        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct Holder {
            #[serde(default, with = "optional_date")]
            day: Option<CalendarDate>,
        }

        let json = serde_json::to_value(Holder {
            day: Some(CalendarDate::from_ymd(2024, 12, 24)),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({ "day": "2024-12-24" }));

        let back: Holder = serde_json::from_value(json).unwrap();
        assert_eq!(back.day, Some(CalendarDate::from_ymd(2024, 12, 24)));

        let missing: Holder = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.day, None);
        let null: Holder = serde_json::from_str(r#"{"day":null}"#).unwrap();
        assert_eq!(null.day, None);

        let invalid = Holder {
            day: Some(CalendarDate::Invalid("garbage".into())),
        };
        assert_eq!(
            serde_json::to_value(invalid).unwrap(),
            serde_json::json!({ "day": null })
        );
    }

    #[test]
    fn test_is_absent() {
        assert!(optional_date::is_absent(&None));
        assert!(optional_date::is_absent(&Some(CalendarDate::Invalid("31/02".into()))));
        assert!(!optional_date::is_absent(&Some(CalendarDate::from_ymd(2023, 5, 1))));
    }
}
