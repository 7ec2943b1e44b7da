//! Length units, and the position units of [`Position`](crate::kind::Position).

use super::linear;
use crate::kind::{Length, Position};
use crate::unit::{Unit, UnitSystem};

pub const METER: Unit<Length> = Unit::si("m", "meter");
pub const KILOMETER: Unit<Length> = METER.derive_linear(1000.0, "km", "kilometer").in_system(UnitSystem::SiDerived);
pub const DECIMETER: Unit<Length> = METER.derive_linear(0.1, "dm", "decimeter").in_system(UnitSystem::SiDerived);
pub const CENTIMETER: Unit<Length> = METER.derive_linear(0.01, "cm", "centimeter").in_system(UnitSystem::SiDerived);
pub const MILLIMETER: Unit<Length> = METER.derive_linear(1.0e-3, "mm", "millimeter").in_system(UnitSystem::SiDerived);
pub const MICROMETER: Unit<Length> = METER.derive_linear(1.0e-6, "μm", "micrometer").in_system(UnitSystem::SiDerived);
pub const NANOMETER: Unit<Length> = METER.derive_linear(1.0e-9, "nm", "nanometer").in_system(UnitSystem::SiDerived);
pub const ANGSTROM: Unit<Length> = linear("Å", "angstrom", 1.0e-10, UnitSystem::Other);
pub const INCH: Unit<Length> = linear("in", "inch", 0.0254, UnitSystem::Imperial);
pub const FOOT: Unit<Length> = linear("ft", "foot", 0.3048, UnitSystem::Imperial);
pub const YARD: Unit<Length> = FOOT.derive_linear(3.0, "yd", "yard");
pub const FURLONG: Unit<Length> = FOOT.derive_linear(660.0, "fur", "furlong");
pub const MILE: Unit<Length> = FOOT.derive_linear(5280.0, "mi", "mile");
pub const NAUTICAL_MILE: Unit<Length> = linear("NM", "nautical mile", 1852.0, UnitSystem::Other);
pub const ASTRONOMICAL_UNIT: Unit<Length> = linear("AU", "astronomical unit", 149_597_870_700.0, UnitSystem::SiAccepted);
pub const LIGHTYEAR: Unit<Length> = linear("ly", "lightyear", 9_460_730_472_580_800.0, UnitSystem::Other);
pub const PARSEC: Unit<Length> = linear("pc", "parsec", 3.085_677_581_491_367_3e16, UnitSystem::Other);

pub const STANDARD: Unit<Length> = METER;
pub const ALL: &[Unit<Length>] = &[
    METER,
    KILOMETER,
    DECIMETER,
    CENTIMETER,
    MILLIMETER,
    MICROMETER,
    NANOMETER,
    ANGSTROM,
    INCH,
    FOOT,
    YARD,
    FURLONG,
    MILE,
    NAUTICAL_MILE,
    ASTRONOMICAL_UNIT,
    LIGHTYEAR,
    PARSEC,
];

pub const METER_ABS: Unit<Position> = Unit::si("m", "meter");
pub const KILOMETER_ABS: Unit<Position> = linear("km", "kilometer", 1000.0, UnitSystem::SiDerived);
pub const CENTIMETER_ABS: Unit<Position> = linear("cm", "centimeter", 0.01, UnitSystem::SiDerived);
pub const MILLIMETER_ABS: Unit<Position> = linear("mm", "millimeter", 1.0e-3, UnitSystem::SiDerived);
pub const FOOT_ABS: Unit<Position> = linear("ft", "foot", 0.3048, UnitSystem::Imperial);
pub const MILE_ABS: Unit<Position> = linear("mi", "mile", 1609.344, UnitSystem::Imperial);
pub const NAUTICAL_MILE_ABS: Unit<Position> = linear("NM", "nautical mile", 1852.0, UnitSystem::Other);

pub const STANDARD_ABS: Unit<Position> = METER_ABS;
pub const ALL_ABS: &[Unit<Position>] = &[
    METER_ABS,
    KILOMETER_ABS,
    CENTIMETER_ABS,
    MILLIMETER_ABS,
    FOOT_ABS,
    MILE_ABS,
    NAUTICAL_MILE_ABS,
];
