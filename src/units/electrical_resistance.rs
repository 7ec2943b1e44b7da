use super::linear;
use crate::kind::ElectricalResistance;
use crate::unit::{Unit, UnitSystem};

pub const OHM: Unit<ElectricalResistance> = Unit::si("Ω", "ohm").in_system(UnitSystem::SiDerived);
pub const MILLIOHM: Unit<ElectricalResistance> = OHM.derive_linear(1.0e-3, "mΩ", "milliohm");
pub const KILOOHM: Unit<ElectricalResistance> = OHM.derive_linear(1.0e3, "kΩ", "kiloohm");
pub const MEGAOHM: Unit<ElectricalResistance> = OHM.derive_linear(1.0e6, "MΩ", "megaohm");
pub const ABOHM: Unit<ElectricalResistance> = linear("abΩ", "abohm", 1.0e-9, UnitSystem::CgsEmu);

pub const STANDARD: Unit<ElectricalResistance> = OHM;
pub const ALL: &[Unit<ElectricalResistance>] = &[OHM, MILLIOHM, KILOOHM, MEGAOHM, ABOHM];
