mod dates;
mod engine;
mod error;
mod http_mapping;
mod region;
mod reports;
mod types;

pub use dates::{is_canonical_date, is_weekend, parse_date, weekday_index, WeekdayLocale};
pub use engine::{classify_day, DayKind, EngineOptions, HolidayEngine};
pub use error::HolidayError;
pub use http_mapping::holiday_error_to_status_code;
pub use region::{filter_entries, RegionScope};
pub use reports::{
    BusinessDayCount, HolidayCheck, HolidayList, HolidaySummary, HolidayView, RegionList,
    UpcomingHoliday,
};
pub use types::{Applicability, CountryCalendar, CountryCode, HolidayEntry, ALL_REGIONS};
