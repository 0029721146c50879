//! Swar Shastra value types and the sunrise starting-phase rule.
//!
//! This crate provides:
//! - `Phase` (Left/Right swar), `Paksha`, `TithiKind`
//! - The five tattvas and their fixed minute durations
//! - `resolve_starting_phase`: paksha + tithi → swar flowing at sunrise
//!
//! Everything here is plain data and pure functions. Display text in any
//! particular language is a presentation concern and lives elsewhere.

pub mod error;
pub mod swar;
pub mod tattva;

pub use error::SwarError;
pub use swar::{
    ALL_PAKSHAS, ALL_PHASES, CHANDRA_TITHIS, Paksha, Phase, SURYA_TITHIS, TITHIS_PER_PAKSHA,
    TithiKind, resolve_starting_phase, tithi_kind,
};
pub use tattva::{ALL_TATTVAS, TATTVA_CYCLE_MINUTES, Tattva, tattva_from_cycle_minute};
