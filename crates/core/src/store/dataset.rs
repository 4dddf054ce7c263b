use chrono::Datelike;

use crate::calendar::{CountryCalendar, CountryCode};

use super::{Result, StoreError};

/// Parses the JSON text of a country dataset.
///
/// Every entry must fall inside the year it is filed under, otherwise
/// year-based lookups would silently miss it.
pub fn parse_dataset(country: &CountryCode, text: &str) -> Result<CountryCalendar> {
    let calendar: CountryCalendar =
        serde_json::from_str(text).map_err(|e| StoreError::Malformed {
            country: country.to_string(),
            reason: e.to_string(),
        })?;

    for (year, entries) in &calendar.years {
        if let Some(entry) = entries.iter().find(|entry| entry.date.year() != *year) {
            return Err(StoreError::Malformed {
                country: country.to_string(),
                reason: format!("{} ({}) is filed under year {year}", entry.date, entry.name),
            });
        }
    }

    Ok(calendar)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(raw: &str) -> CountryCode {
        CountryCode::parse(raw).unwrap()
    }

    #[test]
    fn test_parse_minimal_dataset() {
        let text = r#"{
            "name": "Testland",
            "states": ["N", "S"],
            "years": {
                "2025": [
                    {"date": "2025-01-01", "name": "New Year", "type": "public", "states": ["all"]},
                    {"date": "2025-06-01", "name": "North Day", "type": "regional", "states": ["N"]}
                ]
            }
        }"#;

        let calendar = parse_dataset(&code("tl"), text).unwrap();

        assert_eq!(calendar.name, "Testland");
        assert_eq!(calendar.regions, vec!["N", "S"]);
        assert_eq!(calendar.entries_for(2025).unwrap().len(), 2);
        assert_eq!(calendar.year_range(), Some((2025, 2025)));
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        let err = parse_dataset(&code("tl"), "{not json").unwrap_err();
        assert!(matches!(err, StoreError::Malformed { ref country, .. } if country == "tl"));
    }

    #[test]
    fn test_parse_rejects_entry_in_wrong_year() {
        let text = r#"{
            "name": "Testland",
            "states": [],
            "years": {
                "2025": [
                    {"date": "2026-01-01", "name": "New Year", "type": "public", "states": ["all"]}
                ]
            }
        }"#;

        let err = parse_dataset(&code("tl"), text).unwrap_err();
        assert_eq!(
            err,
            StoreError::Malformed {
                country: "tl".to_string(),
                reason: "2026-01-01 (New Year) is filed under year 2025".to_string(),
            }
        );
    }
}
