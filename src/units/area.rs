use super::linear;
use crate::kind::Area;
use crate::unit::{Unit, UnitSystem};

pub const SQUARE_METER: Unit<Area> = Unit::si("m2", "square meter").in_system(UnitSystem::SiDerived);
pub const SQUARE_KILOMETER: Unit<Area> = linear("km2", "square kilometer", 1.0e6, UnitSystem::SiDerived);
pub const SQUARE_CENTIMETER: Unit<Area> = linear("cm2", "square centimeter", 1.0e-4, UnitSystem::SiDerived);
pub const SQUARE_MILLIMETER: Unit<Area> = linear("mm2", "square millimeter", 1.0e-6, UnitSystem::SiDerived);
pub const ARE: Unit<Area> = linear("a", "are", 100.0, UnitSystem::SiAccepted);
pub const HECTARE: Unit<Area> = ARE.derive_linear(100.0, "ha", "hectare");
pub const SQUARE_FOOT: Unit<Area> = linear("ft2", "square foot", 0.092_903_04, UnitSystem::Imperial);
pub const SQUARE_YARD: Unit<Area> = SQUARE_FOOT.derive_linear(9.0, "yd2", "square yard");
pub const ACRE: Unit<Area> = SQUARE_FOOT.derive_linear(43_560.0, "ac", "acre");
pub const SQUARE_MILE: Unit<Area> = SQUARE_FOOT.derive_linear(27_878_400.0, "mi2", "square mile");

pub const STANDARD: Unit<Area> = SQUARE_METER;
pub const ALL: &[Unit<Area>] = &[
    SQUARE_METER,
    SQUARE_KILOMETER,
    SQUARE_CENTIMETER,
    SQUARE_MILLIMETER,
    ARE,
    HECTARE,
    SQUARE_FOOT,
    SQUARE_YARD,
    ACRE,
    SQUARE_MILE,
];
