//! Resolved configuration and its sources.

use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use swar_time::{CivilDate, TimeOfDay};

use crate::error::ConfigError;

/// Sunrise used when no lookup or override is available.
pub const DEFAULT_SUNRISE: TimeOfDay = TimeOfDay {
    hour: 7,
    minute: 12,
    second: 0,
};

/// Widest real-world offset (UTC+14 / UTC-14).
pub const MAX_UTC_OFFSET_MINUTES: i32 = 14 * 60;

pub const DEFAULT_LOG_LEVEL: &str = "info";

pub const ENV_SUNRISE: &str = "SWAR_SUNRISE";
pub const ENV_UTC_OFFSET_MINUTES: &str = "SWAR_UTC_OFFSET_MINUTES";
pub const ENV_LANGUAGE: &str = "SWAR_LANGUAGE";
pub const ENV_LOG: &str = "SWAR_LOG";

/// Display language for labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Gujarati,
}

impl Language {
    pub fn name(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Gujarati => "gujarati",
        }
    }
}

impl FromStr for Language {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "english" | "en" => Ok(Self::English),
            "gujarati" | "gu" => Ok(Self::Gujarati),
            other => Err(ConfigError::InvalidValue(format!(
                "unknown language '{other}' (expected english or gujarati)"
            ))),
        }
    }
}

/// On-disk layout. Every field is optional; absent fields keep defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    default_sunrise: Option<String>,
    utc_offset_minutes: Option<i32>,
    language: Option<Language>,
    log_level: Option<String>,
    sunrise_table: Option<BTreeMap<String, String>>,
}

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwarConfig {
    /// Sunrise assumed when the sunrise provider fails.
    pub default_sunrise: TimeOfDay,
    /// Fixed offset from UTC for local "now". `None` follows the machine's
    /// own timezone.
    pub utc_offset_minutes: Option<i32>,
    /// Label language.
    pub language: Language,
    /// `tracing` env-filter directive.
    pub log_level: String,
    /// Known sunrise times by date, consulted before the default.
    pub sunrise_table: BTreeMap<CivilDate, TimeOfDay>,
}

impl Default for SwarConfig {
    fn default() -> Self {
        Self {
            default_sunrise: DEFAULT_SUNRISE,
            utc_offset_minutes: None,
            language: Language::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            sunrise_table: BTreeMap::new(),
        }
    }
}

impl SwarConfig {
    /// Load from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        let mut config = Self::default();
        if let Some(s) = file.default_sunrise {
            config.default_sunrise = s.parse()?;
        }
        if let Some(offset) = file.utc_offset_minutes {
            config.set_utc_offset_minutes(offset)?;
        }
        if let Some(lang) = file.language {
            config.language = lang;
        }
        if let Some(level) = file.log_level {
            config.log_level = level;
        }
        for (date, time) in file.sunrise_table.unwrap_or_default() {
            let date: CivilDate = date.parse()?;
            let time: TimeOfDay = time.parse()?;
            config.sunrise_table.insert(date, time);
        }
        Ok(config)
    }

    /// Apply `SWAR_*` environment variable overrides.
    pub fn merge_env_vars(&mut self) -> Result<(), ConfigError> {
        self.merge_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    pub fn merge_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(s) = lookup(ENV_SUNRISE) {
            self.default_sunrise = s.parse()?;
        }
        if let Some(s) = lookup(ENV_UTC_OFFSET_MINUTES) {
            let offset: i32 = s.trim().parse().map_err(|_| {
                ConfigError::InvalidValue(format!(
                    "{ENV_UTC_OFFSET_MINUTES}: '{s}' is not an integer"
                ))
            })?;
            self.set_utc_offset_minutes(offset)?;
        }
        if let Some(s) = lookup(ENV_LANGUAGE) {
            self.language = s.parse()?;
        }
        if let Some(s) = lookup(ENV_LOG) {
            self.log_level = s;
        }
        Ok(())
    }

    /// Set the clock offset, rejecting values beyond ±14 hours.
    pub fn set_utc_offset_minutes(&mut self, offset: i32) -> Result<(), ConfigError> {
        if offset.abs() > MAX_UTC_OFFSET_MINUTES {
            return Err(ConfigError::InvalidValue(format!(
                "utc_offset_minutes {offset} outside ±{MAX_UTC_OFFSET_MINUTES}"
            )));
        }
        self.utc_offset_minutes = Some(offset);
        Ok(())
    }
}
