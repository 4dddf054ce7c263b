//! Shared application state.
//!
//! The state owns the calendar store behind an `Arc` so that cloning it per
//! request is cheap. Handlers run a short-lived `HolidayEngine` over the
//! shared store through `AppState::query`.

use std::sync::Arc;

use feiertag_core::{
    calendar::{CountryCode, EngineOptions, HolidayEngine, HolidayError},
    store::CalendarStore,
};

use crate::{config::Config, storage::DirectorySource};

#[derive(Debug, Clone)]
pub struct AppState {
    /// Memoizing dataset store.
    pub store: Arc<CalendarStore>,
    /// Options applied to every engine built from this state.
    pub options: EngineOptions,
}

impl AppState {
    pub fn new(store: CalendarStore, options: EngineOptions) -> Self {
        Self {
            store: Arc::new(store),
            options,
        }
    }

    /// Builds the state from configuration, choosing the dataset source.
    pub fn from_config(config: &Config) -> Self {
        let store = match &config.data_dir {
            Some(dir) => {
                let source = DirectorySource::new(dir.clone(), config.supported_countries.clone());
                tracing::info!(
                    dir = %source.dir().display(),
                    countries = ?config.supported_countries,
                    "Serving holiday datasets from directory"
                );
                CalendarStore::new(source)
            }
            None => {
                tracing::info!("Serving bundled holiday datasets");
                CalendarStore::embedded()
            }
        };

        Self::new(store, config.engine_options())
    }

    /// Runs an engine query on the blocking pool.
    ///
    /// The first load of a directory-backed dataset reads from disk, and a
    /// malformed dataset is re-read on every request.
    pub async fn query<T, F>(&self, query: F) -> anyhow::Result<T>
    where
        F: FnOnce(HolidayEngine<'_>) -> Result<T, HolidayError> + Send + 'static,
        T: Send + 'static,
    {
        let store = Arc::clone(&self.store);
        let options = self.options;

        let result = tokio::task::spawn_blocking(move || {
            query(HolidayEngine::new(&store).with_options(options))
        })
        .await?;

        Ok(result?)
    }

    /// Looks up a supported country.
    pub fn supported_country(&self, code: &CountryCode) -> bool {
        self.store.supports(code)
    }

    /// Supported country codes as a human-readable list ("de, at, ch").
    pub fn supported_list(&self) -> String {
        self.store
            .supported_countries()
            .iter()
            .map(CountryCode::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(CalendarStore::embedded(), EngineOptions::default())
    }
}
