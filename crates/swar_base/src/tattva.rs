//! The five tattvas (elements) and their sub-cycle within a swar window.
//!
//! Within each swar the tattvas follow one another in a fixed 60-minute
//! cycle: Prithvi 20, Jal 16, Agni 12, Vayu 8, Akash 4 minutes. A two-hour
//! swar window holds two identical repetitions of the cycle.

/// One of the five elemental sub-phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tattva {
    /// Earth.
    Prithvi,
    /// Water.
    Jal,
    /// Fire.
    Agni,
    /// Air.
    Vayu,
    /// Ether.
    Akash,
}

/// All five tattvas in cycle order (index 0 = Prithvi).
pub const ALL_TATTVAS: [Tattva; 5] = [
    Tattva::Prithvi,
    Tattva::Jal,
    Tattva::Agni,
    Tattva::Vayu,
    Tattva::Akash,
];

/// Length of one full tattva cycle in minutes.
pub const TATTVA_CYCLE_MINUTES: u32 = 60;

impl Tattva {
    /// 0-based position in the cycle.
    pub const fn index(self) -> u8 {
        match self {
            Self::Prithvi => 0,
            Self::Jal => 1,
            Self::Agni => 2,
            Self::Vayu => 3,
            Self::Akash => 4,
        }
    }

    /// Duration of this tattva within the cycle.
    pub const fn duration_minutes(self) -> u32 {
        match self {
            Self::Prithvi => 20,
            Self::Jal => 16,
            Self::Agni => 12,
            Self::Vayu => 8,
            Self::Akash => 4,
        }
    }

    /// Minute of the cycle at which this tattva begins.
    pub fn offset_minutes(self) -> u32 {
        ALL_TATTVAS[..self.index() as usize]
            .iter()
            .map(|t| t.duration_minutes())
            .sum()
    }
}

/// Tattva prevailing at `minute` of the cycle.
///
/// `minute` is reduced modulo 60 first. A minute that lands exactly on a
/// cumulative boundary belongs to the next tattva (`minute < cumulative`).
pub fn tattva_from_cycle_minute(minute: u32) -> Tattva {
    let minute = minute % TATTVA_CYCLE_MINUTES;
    let mut cumulative = 0;
    for tattva in ALL_TATTVAS {
        cumulative += tattva.duration_minutes();
        if minute < cumulative {
            return tattva;
        }
    }
    // Durations sum to the cycle length, so the loop always returns.
    Tattva::Akash
}
