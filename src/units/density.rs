use super::linear;
use crate::kind::Density;
use crate::unit::{Unit, UnitSystem};

pub const KG_PER_CUBIC_METER: Unit<Density> =
    Unit::si("kg/m3", "kilogram per cubic meter").in_system(UnitSystem::SiDerived);
pub const GRAM_PER_CUBIC_CENTIMETER: Unit<Density> =
    linear("g/cm3", "gram per cubic centimeter", 1.0e3, UnitSystem::Cgs);
pub const POUND_PER_CUBIC_FOOT: Unit<Density> =
    linear("lb/ft3", "pound per cubic foot", 16.018_463_373_960_14, UnitSystem::Imperial);

pub const STANDARD: Unit<Density> = KG_PER_CUBIC_METER;
pub const ALL: &[Unit<Density>] = &[KG_PER_CUBIC_METER, GRAM_PER_CUBIC_CENTIMETER, POUND_PER_CUBIC_FOOT];
