//! Configuration for swar tools.
//!
//! A TOML file supplies user defaults (fallback sunrise, an optional fixed
//! clock offset, display language, log filter). Without an offset "now"
//! follows the machine's timezone. Environment variables override the file;
//! command-line flags override both and are applied by the binary.
//!
//! ```toml
//! default_sunrise = "06:45"
//! utc_offset_minutes = 330
//! language = "gujarati"
//! log_level = "debug"
//!
//! [sunrise_table]
//! "2024-01-15" = "07:14"
//! ```

pub mod config;
pub mod error;

pub use config::{
    DEFAULT_LOG_LEVEL, DEFAULT_SUNRISE, ENV_LANGUAGE, ENV_LOG, ENV_SUNRISE, ENV_UTC_OFFSET_MINUTES,
    Language, MAX_UTC_OFFSET_MINUTES, SwarConfig,
};
pub use error::ConfigError;
