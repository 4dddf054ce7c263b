use std::{
    fs, io,
    path::{Path, PathBuf},
};

use feiertag_core::{
    calendar::CountryCode,
    store::{CalendarSource, Result, StoreError},
};

/// Reads `holidays-{code}.json` files from a data directory.
///
/// Files are read on demand; the calendar store caches the parsed result.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
    countries: Vec<CountryCode>,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>, countries: Vec<CountryCode>) -> Self {
        Self {
            dir: dir.into(),
            countries,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the dataset file for `country`.
    pub fn path_for(&self, country: &CountryCode) -> PathBuf {
        self.dir.join(format!("holidays-{country}.json"))
    }
}

impl CalendarSource for DirectorySource {
    fn countries(&self) -> &[CountryCode] {
        &self.countries
    }

    fn read(&self, country: &CountryCode) -> Result<Option<String>> {
        let path = self.path_for(country);

        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "Holiday dataset file not found");
                Ok(None)
            }
            Err(e) => Err(StoreError::Unreadable {
                country: country.to_string(),
                reason: format!("{}: {e}", path.display()),
            }),
        }
    }
}
