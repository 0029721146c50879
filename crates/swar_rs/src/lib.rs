//! Convenience wrapper for the swar schedule.
//!
//! Wires the pure schedule engine to its collaborators: a sunrise provider
//! with a default-time fallback, a clock that produces local "now", and
//! per-language label tables for rendering.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use swar_rs::*;
//!
//! let config = SwarConfig::default();
//! let table = TableSunrise::new(config.sunrise_table.clone());
//! let provider = FallbackSunrise::new(table, config.default_sunrise);
//! let clock = SystemClock::new(config.utc_offset_minutes);
//! let day = swar_day(Paksha::Shukla, 1, None, &provider, &clock).unwrap();
//! let labels = Labels::for_language(config.language);
//! println!("{}", labels.phase(day.start_phase));
//! ```

pub mod clock;
pub mod convenience;
pub mod error;
pub mod labels;
pub mod sunrise;

pub use clock::{Clock, FixedClock, SystemClock};
pub use convenience::{swar_day, vedic_day_sunrise};
pub use error::{SunriseError, SwarRsError};
pub use labels::Labels;
pub use sunrise::{FallbackSunrise, ManualSunrise, SunriseProvider, TableSunrise};

// Re-export the types callers need so a single `use swar_rs::*` suffices.
pub use swar_base::{Paksha, Phase, Tattva};
pub use swar_config::{Language, SwarConfig};
pub use swar_schedule::{ActiveState, DaySchedule, ScheduleSlot, TattvaInfo};
pub use swar_time::{CivilDate, LocalDateTime, TimeOfDay};
