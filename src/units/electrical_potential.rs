use super::linear;
use crate::kind::ElectricalPotential;
use crate::unit::{Unit, UnitSystem};

pub const VOLT: Unit<ElectricalPotential> = Unit::si("V", "volt").in_system(UnitSystem::SiDerived);
pub const MILLIVOLT: Unit<ElectricalPotential> = VOLT.derive_linear(1.0e-3, "mV", "millivolt");
pub const KILOVOLT: Unit<ElectricalPotential> = VOLT.derive_linear(1.0e3, "kV", "kilovolt");
pub const ABVOLT: Unit<ElectricalPotential> = linear("abV", "abvolt", 1.0e-8, UnitSystem::CgsEmu);
pub const STATVOLT: Unit<ElectricalPotential> = linear("statV", "statvolt", 299.792_458, UnitSystem::CgsEsu);

pub const STANDARD: Unit<ElectricalPotential> = VOLT;
pub const ALL: &[Unit<ElectricalPotential>] = &[VOLT, MILLIVOLT, KILOVOLT, ABVOLT, STATVOLT];
