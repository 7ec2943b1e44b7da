use std::fmt;

use serde::{Deserialize, Serialize};

/// Family a unit belongs to. Closed set; a tag, never a behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitSystem {
    /// The seven SI base units plus radian and steradian.
    SiBase,
    /// Units derived from SI base units (newton, joule, km/h, ...).
    SiDerived,
    /// Non-SI units accepted for use with SI (minute, liter, electronvolt, ...).
    SiAccepted,
    /// centimeter-gram-second
    Cgs,
    /// CGS electrostatic
    CgsEsu,
    /// CGS electromagnetic
    CgsEmu,
    Imperial,
    UsCustomary,
    /// meter-tonne-second
    Mts,
    /// Atomic units
    Au,
    Other,
}

impl UnitSystem {
    pub const fn abbreviation(&self) -> &'static str {
        match self {
            UnitSystem::SiBase => "SI",
            UnitSystem::SiDerived => "SI-D",
            UnitSystem::SiAccepted => "SI-A",
            UnitSystem::Cgs => "CGS",
            UnitSystem::CgsEsu => "CGS-ESU",
            UnitSystem::CgsEmu => "CGS-EMU",
            UnitSystem::Imperial => "Imperial",
            UnitSystem::UsCustomary => "US",
            UnitSystem::Mts => "MTS",
            UnitSystem::Au => "AU",
            UnitSystem::Other => "Other",
        }
    }

    /// Base, derived or accepted SI.
    pub const fn is_si(&self) -> bool {
        matches!(self, UnitSystem::SiBase | UnitSystem::SiDerived | UnitSystem::SiAccepted)
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}
