//! Serde helper functions for datasets and query parameters.
//!
//! Query strings routinely carry empty values (`?state=`), which should be
//! treated as absent rather than as an empty region code.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use crate::calendar::parse_date;

/// Deserialize an optional string, treating empty strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}

/// Deserialize a date in canonical `YYYY-MM-DD` form.
///
/// Unlike chrono's own impl this rejects unpadded or signed years.
pub fn deserialize_canonical_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_date(&s).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct TestQuery {
        #[serde(default, deserialize_with = "deserialize_optional_string")]
        state: Option<String>,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct TestRecord {
        #[serde(deserialize_with = "deserialize_canonical_date")]
        date: NaiveDate,
    }

    #[test]
    fn test_deserialize_optional_string_empty() {
        let json = r#"{"state": ""}"#;
        let result: TestQuery = serde_json::from_str(json).unwrap();
        assert_eq!(result.state, None);
    }

    #[test]
    fn test_deserialize_optional_string_whitespace() {
        let json = r#"{"state": "   "}"#;
        let result: TestQuery = serde_json::from_str(json).unwrap();
        assert_eq!(result.state, None);
    }

    #[test]
    fn test_deserialize_optional_string_value() {
        let json = r#"{"state": "BY"}"#;
        let result: TestQuery = serde_json::from_str(json).unwrap();
        assert_eq!(result.state, Some("BY".to_string()));
    }

    #[test]
    fn test_deserialize_optional_string_missing() {
        let result: TestQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(result.state, None);
    }

    #[test]
    fn test_deserialize_canonical_date() {
        let json = r#"{"date": "2025-10-03"}"#;
        let result: TestRecord = serde_json::from_str(json).unwrap();
        assert_eq!(result.date, NaiveDate::from_ymd_opt(2025, 10, 3).unwrap());
    }

    #[test]
    fn test_deserialize_canonical_date_rejects_loose_forms() {
        for raw in ["2025-10-3", "+2025-10-03", "2025-13-01", "20251003"] {
            let json = format!(r#"{{"date": "{raw}"}}"#);
            assert!(
                serde_json::from_str::<TestRecord>(&json).is_err(),
                "{raw} should be rejected"
            );
        }
    }
}
