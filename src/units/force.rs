use super::linear;
use crate::kind::Force;
use crate::unit::{Unit, UnitSystem};

pub const NEWTON: Unit<Force> = Unit::si("N", "newton").in_system(UnitSystem::SiDerived);
pub const KILONEWTON: Unit<Force> = NEWTON.derive_linear(1.0e3, "kN", "kilonewton");
pub const DYNE: Unit<Force> = linear("dyn", "dyne", 1.0e-5, UnitSystem::Cgs);
pub const KILOGRAM_FORCE: Unit<Force> = linear("kgf", "kilogram-force", 9.806_65, UnitSystem::Other);
pub const POUND_FORCE: Unit<Force> = linear("lbf", "pound-force", 4.448_221_615_260_5, UnitSystem::Imperial);
pub const STHENE: Unit<Force> = linear("sn", "sthene", 1.0e3, UnitSystem::Mts);

pub const STANDARD: Unit<Force> = NEWTON;
pub const ALL: &[Unit<Force>] = &[NEWTON, KILONEWTON, DYNE, KILOGRAM_FORCE, POUND_FORCE, STHENE];
