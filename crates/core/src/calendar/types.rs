use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::HolidayError;

/// Region marker meaning "observed everywhere in the country".
pub const ALL_REGIONS: &str = "all";

/// A lower-cased country code such as `de`.
///
/// Parsing only checks the shape of the code. Whether a dataset exists for it
/// is decided by the calendar store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CountryCode(String);

impl CountryCode {
    /// Parses a country code, trimming and lower-casing the input.
    pub fn parse(raw: &str) -> Result<Self, HolidayError> {
        let code = raw.trim().to_ascii_lowercase();
        let well_formed =
            (2..=3).contains(&code.len()) && code.bytes().all(|b| b.is_ascii_lowercase());

        if !well_formed {
            return Err(HolidayError::UnknownCountry(raw.trim().to_string()));
        }
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CountryCode {
    type Err = HolidayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The regions in which a holiday is observed.
///
/// Datasets store this as a list of region codes where the `"all"` element
/// stands for every region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub enum Applicability {
    /// Observed in every region of the country.
    Everywhere,
    /// Observed only in the listed regions.
    Regions(Vec<String>),
}

impl Applicability {
    /// Returns true if the holiday is observed in `region` (case-insensitive).
    pub fn applies_to(&self, region: &str) -> bool {
        match self {
            Applicability::Everywhere => true,
            Applicability::Regions(codes) => codes.iter().any(|c| c.eq_ignore_ascii_case(region)),
        }
    }

    pub fn is_everywhere(&self) -> bool {
        matches!(self, Applicability::Everywhere)
    }
}

impl From<Vec<String>> for Applicability {
    fn from(codes: Vec<String>) -> Self {
        if codes.iter().any(|c| c.eq_ignore_ascii_case(ALL_REGIONS)) {
            Applicability::Everywhere
        } else {
            Applicability::Regions(codes)
        }
    }
}

impl From<Applicability> for Vec<String> {
    fn from(applicability: Applicability) -> Self {
        match applicability {
            Applicability::Everywhere => vec![ALL_REGIONS.to_string()],
            Applicability::Regions(codes) => codes,
        }
    }
}

/// One observed holiday occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayEntry {
    #[serde(deserialize_with = "crate::serde::deserialize_canonical_date")]
    pub date: NaiveDate,
    pub name: String,
    /// Dataset-defined classification (e.g. `public`, `regional`).
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "states")]
    pub regions: Applicability,
}

impl HolidayEntry {
    /// Creates a holiday observed in every region.
    pub fn nationwide(date: NaiveDate, name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
            kind: kind.into(),
            regions: Applicability::Everywhere,
        }
    }

    /// Creates a holiday observed only in the given regions.
    pub fn regional<I, S>(
        date: NaiveDate,
        name: impl Into<String>,
        kind: impl Into<String>,
        regions: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            date,
            name: name.into(),
            kind: kind.into(),
            regions: Applicability::Regions(regions.into_iter().map(Into::into).collect()),
        }
    }
}

/// The read-only holiday dataset of one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryCalendar {
    /// Display name of the country.
    pub name: String,
    /// Valid sub-national region codes (states, cantons).
    #[serde(rename = "states", default)]
    pub regions: Vec<String>,
    /// Holiday entries per calendar year, in dataset order.
    pub years: BTreeMap<i32, Vec<HolidayEntry>>,
}

impl CountryCalendar {
    /// Returns the entries for `year`, or `None` when the dataset has no data for it.
    pub fn entries_for(&self, year: i32) -> Option<&[HolidayEntry]> {
        self.years.get(&year).map(Vec::as_slice)
    }

    /// Returns the first and last year covered by the dataset.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let first = *self.years.keys().next()?;
        let last = *self.years.keys().next_back()?;
        Some((first, last))
    }

    /// Human-readable year coverage, e.g. `2025-2026`.
    pub fn describe_years(&self) -> String {
        match self.year_range() {
            Some((first, last)) if first == last => first.to_string(),
            Some((first, last)) => format!("{first}-{last}"),
            None => "none".to_string(),
        }
    }
}
