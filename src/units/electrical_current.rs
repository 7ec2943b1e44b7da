use super::linear;
use crate::kind::ElectricalCurrent;
use crate::unit::{Unit, UnitSystem};

pub const AMPERE: Unit<ElectricalCurrent> = Unit::si("A", "ampere");
pub const MILLIAMPERE: Unit<ElectricalCurrent> =
    AMPERE.derive_linear(1.0e-3, "mA", "milliampere").in_system(UnitSystem::SiDerived);
pub const KILOAMPERE: Unit<ElectricalCurrent> =
    AMPERE.derive_linear(1.0e3, "kA", "kiloampere").in_system(UnitSystem::SiDerived);
pub const ABAMPERE: Unit<ElectricalCurrent> = linear("abA", "abampere", 10.0, UnitSystem::CgsEmu);
pub const STATAMPERE: Unit<ElectricalCurrent> = linear("statA", "statampere", 3.335_641e-10, UnitSystem::CgsEsu);

pub const STANDARD: Unit<ElectricalCurrent> = AMPERE;
pub const ALL: &[Unit<ElectricalCurrent>] = &[AMPERE, MILLIAMPERE, KILOAMPERE, ABAMPERE, STATAMPERE];
