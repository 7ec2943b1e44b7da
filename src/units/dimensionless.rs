use super::linear;
use crate::kind::Dimensionless;
use crate::unit::{Unit, UnitSystem};

/// The unit of pure numbers; it has an empty abbreviation.
pub const UNIT: Unit<Dimensionless> = Unit::si("", "unit");
pub const PERCENT: Unit<Dimensionless> = linear("%", "percent", 0.01, UnitSystem::Other);
pub const PER_MILLE: Unit<Dimensionless> = linear("‰", "per mille", 0.001, UnitSystem::Other);
pub const PPM: Unit<Dimensionless> = linear("ppm", "parts per million", 1.0e-6, UnitSystem::Other);

pub const STANDARD: Unit<Dimensionless> = UNIT;
pub const ALL: &[Unit<Dimensionless>] = &[UNIT, PERCENT, PER_MILLE, PPM];
