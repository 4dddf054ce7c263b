//! Holiday queries over the loaded country datasets.
//!
//! Every operation is a pure function of the store contents and its
//! arguments; the only ambient input is "today", used when the caller omits
//! a year or reference date.

use std::collections::HashSet;

use chrono::{Datelike, Local, NaiveDate};

use crate::store::CalendarStore;

use super::dates::{is_weekend, WeekdayLocale};
use super::error::HolidayError;
use super::region::{filter_entries, RegionScope};
use super::reports::{
    BusinessDayCount, HolidayCheck, HolidayList, HolidaySummary, HolidayView, RegionList,
    UpcomingHoliday,
};
use super::types::{CountryCode, HolidayEntry};

/// Tunables for [`HolidayEngine`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineOptions {
    /// Language for weekday names.
    pub locale: WeekdayLocale,
    /// Maximum inclusive length of a business-day range. `None` is unbounded.
    pub max_range_days: Option<u32>,
}

/// How a single calendar day counts in a business-day calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind {
    Weekend,
    Holiday,
    Business,
}

/// Classifies a day. Weekends win over holidays falling on them.
pub fn classify_day(date: NaiveDate, holidays: &HashSet<NaiveDate>) -> DayKind {
    if is_weekend(date) {
        DayKind::Weekend
    } else if holidays.contains(&date) {
        DayKind::Holiday
    } else {
        DayKind::Business
    }
}

/// Answers holiday queries against a [`CalendarStore`].
#[derive(Debug, Clone, Copy)]
pub struct HolidayEngine<'a> {
    store: &'a CalendarStore,
    options: EngineOptions,
}

impl<'a> HolidayEngine<'a> {
    pub fn new(store: &'a CalendarStore) -> Self {
        Self {
            store,
            options: EngineOptions::default(),
        }
    }

    pub fn with_options(mut self, options: EngineOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> EngineOptions {
        self.options
    }

    /// Lists the holidays of `year` (default: the current year).
    ///
    /// Fails with [`HolidayError::YearNotAvailable`] when the dataset has no
    /// data for the year.
    pub fn list_holidays(
        &self,
        country: &CountryCode,
        year: Option<i32>,
        scope: &RegionScope,
    ) -> Result<HolidayList, HolidayError> {
        let calendar = self.store.load(country)?;
        let year = year.unwrap_or_else(|| Local::now().year());

        let entries =
            calendar
                .entries_for(year)
                .ok_or_else(|| HolidayError::YearNotAvailable {
                    year,
                    available: calendar.describe_years(),
                })?;

        let holidays: Vec<HolidayView> = filter_entries(entries, scope)
            .into_iter()
            .map(|entry| self.view(entry))
            .collect();

        Ok(HolidayList {
            country: calendar.name.clone(),
            country_code: country.clone(),
            year,
            state: scope.clone(),
            count: holidays.len(),
            holidays,
        })
    }

    /// Checks whether `date` is a holiday.
    ///
    /// A year missing from the dataset is answered with "not a holiday"
    /// instead of an error.
    pub fn is_holiday(
        &self,
        country: &CountryCode,
        date: NaiveDate,
        scope: &RegionScope,
    ) -> Result<HolidayCheck, HolidayError> {
        let calendar = self.store.load(country)?;

        let matched = calendar
            .entries_for(date.year())
            .and_then(|entries| {
                entries
                    .iter()
                    .find(|entry| entry.date == date && scope.includes(entry))
            });

        Ok(HolidayCheck {
            date,
            is_holiday: matched.is_some(),
            holiday: matched.map(|entry| HolidaySummary {
                name: entry.name.clone(),
                kind: entry.kind.clone(),
            }),
            day_of_week: self.options.locale.weekday_name(date),
        })
    }

    /// Finds the first holiday strictly after `from` (default: today).
    ///
    /// Only the year of `from` and the following year are searched.
    pub fn next_holiday(
        &self,
        country: &CountryCode,
        from: Option<NaiveDate>,
        scope: &RegionScope,
    ) -> Result<UpcomingHoliday, HolidayError> {
        let calendar = self.store.load(country)?;
        let from = from.unwrap_or_else(|| Local::now().date_naive());

        let next = [from.year(), from.year() + 1]
            .into_iter()
            .filter_map(|year| calendar.entries_for(year))
            .flatten()
            .filter(|entry| entry.date > from && scope.includes(entry))
            .min_by_key(|entry| entry.date)
            .ok_or(HolidayError::NoUpcomingHoliday)?;

        Ok(UpcomingHoliday {
            date: next.date,
            name: next.name.clone(),
            kind: next.kind.clone(),
            day_of_week: self.options.locale.weekday_name(next.date),
            days_until: (next.date - from).num_days(),
        })
    }

    /// Counts business, weekend and holiday days in `start..=end`.
    pub fn business_days(
        &self,
        country: &CountryCode,
        start: NaiveDate,
        end: NaiveDate,
        scope: &RegionScope,
    ) -> Result<BusinessDayCount, HolidayError> {
        if start > end {
            return Err(HolidayError::InvalidRange { start, end });
        }

        let span = (end - start).num_days() + 1;
        if let Some(max) = self.options.max_range_days {
            if span > i64::from(max) {
                return Err(HolidayError::RangeTooLarge { days: span, max });
            }
        }

        let calendar = self.store.load(country)?;

        let holidays: HashSet<NaiveDate> = (start.year()..=end.year())
            .filter_map(|year| calendar.entries_for(year))
            .flat_map(|entries| filter_entries(entries, scope))
            .map(|entry| entry.date)
            .collect();

        let mut count = BusinessDayCount {
            start_date: start,
            end_date: end,
            country: calendar.name.clone(),
            state: scope.clone(),
            business_days: 0,
            total_days: 0,
            weekend_days: 0,
            holiday_days: 0,
        };

        for day in start.iter_days().take_while(|day| *day <= end) {
            count.total_days += 1;
            match classify_day(day, &holidays) {
                DayKind::Weekend => count.weekend_days += 1,
                DayKind::Holiday => count.holiday_days += 1,
                DayKind::Business => count.business_days += 1,
            }
        }

        Ok(count)
    }

    /// Returns the declared region codes of a country.
    pub fn get_regions(&self, country: &CountryCode) -> Result<RegionList, HolidayError> {
        let calendar = self.store.load(country)?;

        Ok(RegionList {
            country: calendar.name.clone(),
            country_code: country.clone(),
            states: calendar.regions.clone(),
        })
    }

    /// The first and last year with data for a country.
    pub fn available_years(
        &self,
        country: &CountryCode,
    ) -> Result<Option<(i32, i32)>, HolidayError> {
        Ok(self.store.load(country)?.year_range())
    }

    fn view(&self, entry: &HolidayEntry) -> HolidayView {
        HolidayView {
            date: entry.date,
            name: entry.name.clone(),
            kind: entry.kind.clone(),
            day_of_week: self.options.locale.weekday_name(entry.date),
        }
    }
}
