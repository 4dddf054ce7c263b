use std::{env, path::PathBuf};

use feiertag_core::calendar::{CountryCode, EngineOptions, WeekdayLocale};

/// Default cap on business-day ranges, roughly ten years.
const DEFAULT_MAX_RANGE_DAYS: u32 = 3660;

const DEFAULT_COUNTRIES: [&str; 3] = ["de", "at", "ch"];

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding `holidays-{code}.json` files. `None` serves the
    /// bundled datasets.
    pub data_dir: Option<PathBuf>,
    /// Countries served from `data_dir` (default: de, at, ch)
    pub supported_countries: Vec<CountryCode>,
    /// Maximum business-day range in days (default: 3660, `None` = unbounded)
    pub max_range_days: Option<u32>,
    /// Language of weekday names (default: German)
    pub weekday_locale: WeekdayLocale,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DATA_DIR` - Dataset directory (default: bundled datasets)
    /// - `SUPPORTED_COUNTRIES` - Comma-separated country codes (default: "de,at,ch")
    /// - `MAX_RANGE_DAYS` - Business-day range cap, `0` disables it (default: 3660)
    /// - `WEEKDAY_LOCALE` - `de` or `en` (default: "de")
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let supported_countries: Vec<CountryCode> = lookup("SUPPORTED_COUNTRIES")
            .map(|raw| {
                raw.split(',')
                    .filter(|code| !code.trim().is_empty())
                    .filter_map(|code| match CountryCode::parse(code) {
                        Ok(code) => Some(code),
                        Err(err) => {
                            tracing::warn!(error = %err, "Ignoring entry in SUPPORTED_COUNTRIES");
                            None
                        }
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            data_dir: lookup("DATA_DIR")
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from),
            supported_countries: if supported_countries.is_empty() {
                default_countries()
            } else {
                supported_countries
            },
            max_range_days: match lookup("MAX_RANGE_DAYS").and_then(|v| v.trim().parse().ok()) {
                Some(0) => None,
                Some(days) => Some(days),
                None => Some(DEFAULT_MAX_RANGE_DAYS),
            },
            weekday_locale: lookup("WEEKDAY_LOCALE")
                .and_then(|tag| WeekdayLocale::from_tag(&tag))
                .unwrap_or_default(),
        }
    }

    /// Engine options derived from this configuration.
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            locale: self.weekday_locale,
            max_range_days: self.max_range_days,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn default_countries() -> Vec<CountryCode> {
    DEFAULT_COUNTRIES
        .iter()
        .filter_map(|code| CountryCode::parse(code).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    fn codes(config: &Config) -> Vec<&str> {
        config
            .supported_countries
            .iter()
            .map(CountryCode::as_str)
            .collect()
    }

    #[test]
    fn test_default_values() {
        let config = Config::default();

        assert_eq!(config.data_dir, None);
        assert_eq!(codes(&config), vec!["de", "at", "ch"]);
        assert_eq!(config.max_range_days, Some(3660));
        assert_eq!(config.weekday_locale, WeekdayLocale::German);
    }

    #[test]
    fn test_values_from_environment() {
        let config = config_from(&[
            ("DATA_DIR", "/srv/holidays"),
            ("SUPPORTED_COUNTRIES", "DE, li ,,"),
            ("MAX_RANGE_DAYS", "400"),
            ("WEEKDAY_LOCALE", "en-US"),
        ]);

        assert_eq!(config.data_dir, Some(PathBuf::from("/srv/holidays")));
        assert_eq!(codes(&config), vec!["de", "li"]);
        assert_eq!(config.max_range_days, Some(400));
        assert_eq!(config.weekday_locale, WeekdayLocale::English);
    }

    #[test]
    fn test_zero_disables_range_cap() {
        let config = config_from(&[("MAX_RANGE_DAYS", "0")]);
        assert_eq!(config.max_range_days, None);
    }

    #[test]
    fn test_unparsable_values_fall_back_to_defaults() {
        let config = config_from(&[
            ("DATA_DIR", "  "),
            ("SUPPORTED_COUNTRIES", "germany,1"),
            ("MAX_RANGE_DAYS", "ten years"),
            ("WEEKDAY_LOCALE", "fr"),
        ]);

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_engine_options() {
        let config = config_from(&[("MAX_RANGE_DAYS", "31"), ("WEEKDAY_LOCALE", "en")]);

        assert_eq!(
            config.engine_options(),
            EngineOptions {
                locale: WeekdayLocale::English,
                max_range_days: Some(31),
            }
        );
    }
}
