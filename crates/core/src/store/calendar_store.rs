//! Memoizing access to country datasets.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use crate::calendar::{CountryCalendar, CountryCode};

use super::{parse_dataset, CalendarSource, EmbeddedSource, Result, StoreError};

/// Loads country datasets from a [`CalendarSource`] and keeps the parsed
/// result for the lifetime of the store.
///
/// Loaded calendars are immutable and shared through `Arc`, so readers never
/// hold the lock while answering queries. Two threads loading the same
/// country for the first time may both parse it; the first insert wins and
/// both observe equal data.
pub struct CalendarStore {
    source: Box<dyn CalendarSource>,
    loaded: RwLock<HashMap<CountryCode, Arc<CountryCalendar>>>,
}

impl fmt::Debug for CalendarStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalendarStore")
            .field("countries", &self.source.countries())
            .finish_non_exhaustive()
    }
}

impl Default for CalendarStore {
    fn default() -> Self {
        Self::embedded()
    }
}

impl CalendarStore {
    /// Creates a store over the given source. Nothing is read until the
    /// first load.
    pub fn new(source: impl CalendarSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            loaded: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a store over the bundled datasets.
    pub fn embedded() -> Self {
        Self::new(EmbeddedSource::new())
    }

    /// The countries this store can serve.
    pub fn supported_countries(&self) -> &[CountryCode] {
        self.source.countries()
    }

    pub fn supports(&self, country: &CountryCode) -> bool {
        self.source.countries().contains(country)
    }

    /// Returns the calendar for `country`, parsing it on first access.
    ///
    /// Countries outside the source's supported set fail with
    /// [`StoreError::NotFound`] without touching the source.
    pub fn load(&self, country: &CountryCode) -> Result<Arc<CountryCalendar>> {
        if !self.supports(country) {
            return Err(StoreError::NotFound {
                country: country.to_string(),
            });
        }

        if let Some(calendar) = self.cached(country) {
            return Ok(calendar);
        }

        let text = self
            .source
            .read(country)?
            .ok_or_else(|| StoreError::NotFound {
                country: country.to_string(),
            })?;
        let calendar = Arc::new(parse_dataset(country, &text)?);

        tracing::debug!(
            country = %country,
            name = %calendar.name,
            years = %calendar.describe_years(),
            entries = calendar.years.values().map(Vec::len).sum::<usize>(),
            "Loaded holiday dataset"
        );

        let mut loaded = self.loaded.write().unwrap_or_else(PoisonError::into_inner);
        Ok(Arc::clone(loaded.entry(country.clone()).or_insert(calendar)))
    }

    /// Loads every supported country, returning the failures.
    pub fn preload(&self) -> Vec<(CountryCode, StoreError)> {
        self.source
            .countries()
            .iter()
            .filter_map(|country| self.load(country).err().map(|e| (country.clone(), e)))
            .collect()
    }

    fn cached(&self, country: &CountryCode) -> Option<Arc<CountryCalendar>> {
        self.loaded
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(country)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const TESTLAND: &str = r#"{
        "name": "Testland",
        "states": ["N", "S"],
        "years": {
            "2025": [
                {"date": "2025-01-01", "name": "New Year", "type": "public", "states": ["all"]}
            ]
        }
    }"#;

    /// Source that counts reads and serves fixed datasets.
    struct CountingSource {
        countries: Vec<CountryCode>,
        datasets: Vec<(&'static str, &'static str)>,
        reads: Arc<AtomicUsize>,
    }

    impl CountingSource {
        fn new(codes: &[&str], datasets: Vec<(&'static str, &'static str)>) -> Self {
            Self {
                countries: codes.iter().map(|c| CountryCode::parse(c).unwrap()).collect(),
                datasets,
                reads: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    impl CalendarSource for CountingSource {
        fn countries(&self) -> &[CountryCode] {
            &self.countries
        }

        fn read(&self, country: &CountryCode) -> Result<Option<String>> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            Ok(self
                .datasets
                .iter()
                .find(|(code, _)| *code == country.as_str())
                .map(|(_, text)| text.to_string()))
        }
    }

    fn code(raw: &str) -> CountryCode {
        CountryCode::parse(raw).unwrap()
    }

    #[test]
    fn test_load_parses_once_and_caches() {
        let source = CountingSource::new(&["tl"], vec![("tl", TESTLAND)]);
        let reads = Arc::clone(&source.reads);
        let store = CalendarStore::new(source);

        let first = store.load(&code("tl")).unwrap();
        let second = store.load(&code("tl")).unwrap();

        assert_eq!(first.name, "Testland");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(reads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unsupported_country_is_rejected_before_reading() {
        let source = CountingSource::new(&["tl"], vec![("tl", TESTLAND), ("xx", TESTLAND)]);
        let reads = Arc::clone(&source.reads);
        let store = CalendarStore::new(source);

        let err = store.load(&code("xx")).unwrap_err();

        assert_eq!(
            err,
            StoreError::NotFound {
                country: "xx".to_string()
            }
        );
        assert_eq!(reads.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_supported_country_without_data_is_not_found() {
        let store = CalendarStore::new(CountingSource::new(&["tl", "zz"], vec![("tl", TESTLAND)]));

        assert!(matches!(
            store.load(&code("zz")),
            Err(StoreError::NotFound { .. })
        ));
    }

    #[test]
    fn test_malformed_dataset_is_not_cached() {
        let source = CountingSource::new(&["tl"], vec![("tl", "{\"name\": ")]);
        let reads = Arc::clone(&source.reads);
        let store = CalendarStore::new(source);

        assert!(matches!(
            store.load(&code("tl")),
            Err(StoreError::Malformed { .. })
        ));
        assert!(store.load(&code("tl")).is_err());
        assert_eq!(reads.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_preload_reports_failures() {
        let store = CalendarStore::new(CountingSource::new(
            &["tl", "zz"],
            vec![("tl", TESTLAND), ("zz", "{}")],
        ));

        let failures = store.preload();

        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, code("zz"));
    }

    #[test]
    fn test_embedded_store_serves_bundled_countries() {
        let store = CalendarStore::embedded();

        assert!(store.preload().is_empty());
        assert_eq!(store.load(&code("de")).unwrap().name, "Deutschland");
        assert_eq!(store.load(&code("at")).unwrap().name, "Österreich");
        assert_eq!(store.load(&code("ch")).unwrap().name, "Schweiz");
    }

    #[test]
    fn test_concurrent_first_loads_agree() {
        let store = Arc::new(CalendarStore::embedded());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || store.load(&code("de")).unwrap())
            })
            .collect();

        let calendars: Vec<Arc<CountryCalendar>> =
            handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert!(calendars.windows(2).all(|pair| pair[0] == pair[1]));
    }
}
