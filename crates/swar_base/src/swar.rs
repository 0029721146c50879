//! Swar (dominant nostril) phases and the sunrise starting-phase rule.
//!
//! At sunrise the swar is fixed by the paksha and the tithi prevailing at
//! sunrise. In Shukla paksha the Chandra tithis (1-3, 7-9, 13-15) open
//! with the left swar and the Surya tithis (4-6, 10-12) with the right.
//! Krishna paksha is the mirror image.
//!
//! Clean-room: traditional Swar Shastra rule, public domain.

use crate::error::SwarError;

/// Dominant side of the breath for a time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Left nostril: Chandra swar, Ida nadi.
    Left,
    /// Right nostril: Surya swar, Pingala nadi.
    Right,
}

/// Both phases, Left first.
pub const ALL_PHASES: [Phase; 2] = [Phase::Left, Phase::Right];

impl Phase {
    /// The other side. Consecutive schedule slots always flip.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Sanskrit swar name.
    pub fn swar_name(self) -> &'static str {
        match self {
            Self::Left => "Chandra",
            Self::Right => "Surya",
        }
    }

    /// Nadi carrying this swar.
    pub fn nadi_name(self) -> &'static str {
        match self {
            Self::Left => "Ida",
            Self::Right => "Pingala",
        }
    }
}

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paksha {
    /// Waxing fortnight.
    Shukla,
    /// Waning fortnight.
    Krishna,
}

pub const ALL_PAKSHAS: [Paksha; 2] = [Paksha::Shukla, Paksha::Krishna];

impl Paksha {
    pub fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

/// Which luminary governs a tithi for swar purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TithiKind {
    /// Moon-governed tithi.
    Chandra,
    /// Sun-governed tithi.
    Surya,
}

/// Tithis counted within one paksha.
pub const TITHIS_PER_PAKSHA: u8 = 15;

/// Moon-governed tithis within a paksha.
pub const CHANDRA_TITHIS: [u8; 9] = [1, 2, 3, 7, 8, 9, 13, 14, 15];

/// Sun-governed tithis within a paksha.
pub const SURYA_TITHIS: [u8; 6] = [4, 5, 6, 10, 11, 12];

/// Classify a tithi (1-15 within its paksha).
pub fn tithi_kind(tithi: u8) -> Result<TithiKind, SwarError> {
    if !(1..=TITHIS_PER_PAKSHA).contains(&tithi) {
        return Err(SwarError::InvalidInput("tithi must be in 1..=15"));
    }
    if CHANDRA_TITHIS.contains(&tithi) {
        Ok(TithiKind::Chandra)
    } else {
        Ok(TithiKind::Surya)
    }
}

/// Swar flowing at sunrise for the given paksha and sunrise tithi.
///
/// The sunrise tithi governs the full 24 hours that follow, even if the
/// tithi itself ends during the day.
pub fn resolve_starting_phase(paksha: Paksha, tithi: u8) -> Result<Phase, SwarError> {
    let phase = match (paksha, tithi_kind(tithi)?) {
        (Paksha::Shukla, TithiKind::Chandra) | (Paksha::Krishna, TithiKind::Surya) => Phase::Left,
        (Paksha::Shukla, TithiKind::Surya) | (Paksha::Krishna, TithiKind::Chandra) => Phase::Right,
    };
    Ok(phase)
}
