use super::linear;
use crate::kind::Mass;
use crate::unit::{Unit, UnitSystem};

pub const KILOGRAM: Unit<Mass> = Unit::si("kg", "kilogram");
pub const GRAM: Unit<Mass> = KILOGRAM.derive_linear(1.0e-3, "g", "gram").in_system(UnitSystem::SiDerived);
pub const MILLIGRAM: Unit<Mass> = GRAM.derive_linear(1.0e-3, "mg", "milligram");
pub const MICROGRAM: Unit<Mass> = GRAM.derive_linear(1.0e-6, "μg", "microgram");
pub const TONNE: Unit<Mass> = linear("t", "tonne", 1000.0, UnitSystem::Mts);
pub const POUND: Unit<Mass> = linear("lb", "pound", 0.453_592_37, UnitSystem::Imperial);
pub const OUNCE: Unit<Mass> = POUND.derive_linear(1.0 / 16.0, "oz", "ounce");
pub const DALTON: Unit<Mass> = linear("Da", "dalton", 1.660_539_066_60e-27, UnitSystem::SiAccepted);

pub const STANDARD: Unit<Mass> = KILOGRAM;
pub const ALL: &[Unit<Mass>] = &[KILOGRAM, GRAM, MILLIGRAM, MICROGRAM, TONNE, POUND, OUNCE, DALTON];
