use serde::{Serialize, Serializer};

use super::types::{HolidayEntry, ALL_REGIONS};

/// The region a query is scoped to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RegionScope {
    /// No region given: every entry of the country applies.
    #[default]
    All,
    /// A specific region code, stored upper-cased.
    Region(String),
}

impl RegionScope {
    /// Builds a scope from an optional raw parameter.
    ///
    /// Absent, blank and `"all"` (any case) mean every region. Region codes
    /// are not checked against the country's declared regions.
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => RegionScope::All,
            Some(code) if code.eq_ignore_ascii_case(ALL_REGIONS) => RegionScope::All,
            Some(code) => RegionScope::Region(code.to_ascii_uppercase()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RegionScope::All => ALL_REGIONS,
            RegionScope::Region(code) => code,
        }
    }

    /// Returns true if `entry` is observed within this scope.
    pub fn includes(&self, entry: &HolidayEntry) -> bool {
        match self {
            RegionScope::All => true,
            RegionScope::Region(code) => entry.regions.applies_to(code),
        }
    }
}

impl Serialize for RegionScope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Filters entries down to those observed in `scope`, preserving order.
///
/// An unknown region code is not an error: only nationwide entries survive.
pub fn filter_entries<'a>(
    entries: &'a [HolidayEntry],
    scope: &RegionScope,
) -> Vec<&'a HolidayEntry> {
    entries.iter().filter(|entry| scope.includes(entry)).collect()
}
