use crate::calendar::CountryCode;

use super::Result;

/// Backing storage for raw country datasets.
pub trait CalendarSource: Send + Sync {
    /// The closed set of countries this source serves.
    fn countries(&self) -> &[CountryCode];

    /// Reads the raw dataset text for `country`.
    ///
    /// Returns `Ok(None)` when the source has no data for the country.
    fn read(&self, country: &CountryCode) -> Result<Option<String>>;
}
