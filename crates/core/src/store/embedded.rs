//! Holiday datasets compiled into the binary.

use crate::calendar::CountryCode;

use super::{CalendarSource, Result};

const DATASETS: [(&str, &str); 3] = [
    ("de", include_str!("../../data/holidays-de.json")),
    ("at", include_str!("../../data/holidays-at.json")),
    ("ch", include_str!("../../data/holidays-ch.json")),
];

/// Calendar source backed by the bundled datasets for Germany, Austria and
/// Switzerland.
#[derive(Debug, Clone)]
pub struct EmbeddedSource {
    countries: Vec<CountryCode>,
}

impl Default for EmbeddedSource {
    fn default() -> Self {
        Self::new()
    }
}

impl EmbeddedSource {
    pub fn new() -> Self {
        Self {
            countries: DATASETS
                .iter()
                .filter_map(|(code, _)| CountryCode::parse(code).ok())
                .collect(),
        }
    }
}

impl CalendarSource for EmbeddedSource {
    fn countries(&self) -> &[CountryCode] {
        &self.countries
    }

    fn read(&self, country: &CountryCode) -> Result<Option<String>> {
        Ok(DATASETS
            .iter()
            .find(|(code, _)| *code == country.as_str())
            .map(|(_, text)| (*text).to_string()))
    }
}
