use super::linear;
use crate::kind::Volume;
use crate::unit::{Unit, UnitSystem};

pub const CUBIC_METER: Unit<Volume> = Unit::si("m3", "cubic meter").in_system(UnitSystem::SiDerived);
pub const CUBIC_CENTIMETER: Unit<Volume> = linear("cm3", "cubic centimeter", 1.0e-6, UnitSystem::SiDerived);
pub const LITER: Unit<Volume> = linear("L", "liter", 1.0e-3, UnitSystem::SiAccepted);
pub const MILLILITER: Unit<Volume> = LITER.derive_linear(1.0e-3, "mL", "milliliter");
pub const CUBIC_FOOT: Unit<Volume> = linear("ft3", "cubic foot", 0.028_316_846_592, UnitSystem::Imperial);
pub const GALLON_US: Unit<Volume> = linear("gal(US)", "gallon (US)", 3.785_411_784e-3, UnitSystem::UsCustomary);
pub const GALLON_IMP: Unit<Volume> = linear("gal(imp)", "gallon (imperial)", 4.546_09e-3, UnitSystem::Imperial);
pub const BARREL: Unit<Volume> = GALLON_US.derive_linear(42.0, "bbl", "barrel");

pub const STANDARD: Unit<Volume> = CUBIC_METER;
pub const ALL: &[Unit<Volume>] =
    &[CUBIC_METER, CUBIC_CENTIMETER, LITER, MILLILITER, CUBIC_FOOT, GALLON_US, GALLON_IMP, BARREL];
