use super::linear;
use crate::kind::Power;
use crate::unit::{Unit, UnitSystem};

pub const WATT: Unit<Power> = Unit::si("W", "watt").in_system(UnitSystem::SiDerived);
pub const MILLIWATT: Unit<Power> = WATT.derive_linear(1.0e-3, "mW", "milliwatt");
pub const KILOWATT: Unit<Power> = WATT.derive_linear(1.0e3, "kW", "kilowatt");
pub const MEGAWATT: Unit<Power> = WATT.derive_linear(1.0e6, "MW", "megawatt");
pub const HORSEPOWER: Unit<Power> = linear("hp", "horsepower", 745.699_871_582_270_2, UnitSystem::Imperial);
pub const ERG_PER_SECOND: Unit<Power> = linear("erg/s", "erg per second", 1.0e-7, UnitSystem::Cgs);

pub const STANDARD: Unit<Power> = WATT;
pub const ALL: &[Unit<Power>] = &[WATT, MILLIWATT, KILOWATT, MEGAWATT, HORSEPOWER, ERG_PER_SECOND];
