use super::linear;
use crate::kind::Pressure;
use crate::unit::{Unit, UnitSystem};

pub const PASCAL: Unit<Pressure> = Unit::si("Pa", "pascal").in_system(UnitSystem::SiDerived);
pub const HECTOPASCAL: Unit<Pressure> = PASCAL.derive_linear(100.0, "hPa", "hectopascal");
pub const KILOPASCAL: Unit<Pressure> = PASCAL.derive_linear(1.0e3, "kPa", "kilopascal");
pub const BAR: Unit<Pressure> = linear("bar", "bar", 1.0e5, UnitSystem::Other);
pub const MILLIBAR: Unit<Pressure> = BAR.derive_linear(1.0e-3, "mbar", "millibar");
pub const ATMOSPHERE: Unit<Pressure> = linear("atm", "standard atmosphere", 101_325.0, UnitSystem::Other);
pub const TORR: Unit<Pressure> = ATMOSPHERE.derive_linear(1.0 / 760.0, "torr", "torr");
pub const MM_HG: Unit<Pressure> = linear("mmHg", "millimeter of mercury", 133.322_387_415, UnitSystem::Other);
pub const PSI: Unit<Pressure> = linear("psi", "pound per square inch", 6894.757_293_168, UnitSystem::Imperial);

pub const STANDARD: Unit<Pressure> = PASCAL;
pub const ALL: &[Unit<Pressure>] =
    &[PASCAL, HECTOPASCAL, KILOPASCAL, BAR, MILLIBAR, ATMOSPHERE, TORR, MM_HG, PSI];
