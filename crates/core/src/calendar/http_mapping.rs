//! Pure functions for mapping holiday errors to HTTP status codes.

use super::HolidayError;

/// Maps a [`HolidayError`] to an HTTP status code.
///
/// Input problems map to 400 (Bad Request). Dataset faults are not the
/// caller's fault and map to 500 (Internal Server Error).
///
/// # Examples
///
/// ```
/// use feiertag_core::calendar::{holiday_error_to_status_code, HolidayError};
///
/// let error = HolidayError::UnknownCountry("xx".to_string());
/// assert_eq!(holiday_error_to_status_code(&error), 400);
/// ```
pub fn holiday_error_to_status_code(error: &HolidayError) -> u16 {
    match error {
        HolidayError::UnknownCountry(_) => 400,
        HolidayError::YearNotAvailable { .. } => 400,
        HolidayError::InvalidRange { .. } => 400,
        HolidayError::NoUpcomingHoliday => 400,
        HolidayError::InvalidDate(_) => 400,
        HolidayError::RangeTooLarge { .. } => 400,
        HolidayError::Dataset { .. } => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_validation_errors_map_to_400() {
        let start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();

        assert_eq!(
            holiday_error_to_status_code(&HolidayError::InvalidRange { start, end }),
            400
        );
        assert_eq!(
            holiday_error_to_status_code(&HolidayError::NoUpcomingHoliday),
            400
        );
        assert_eq!(
            holiday_error_to_status_code(&HolidayError::YearNotAvailable {
                year: 1999,
                available: "2025-2026".to_string()
            }),
            400
        );
    }

    #[test]
    fn test_dataset_error_maps_to_500() {
        let error = HolidayError::Dataset {
            country: "de".to_string(),
            reason: "truncated file".to_string(),
        };
        assert_eq!(holiday_error_to_status_code(&error), 500);
    }
}
