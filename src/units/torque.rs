//! Torque units. Torque shares its dimensions with energy but is a separate kind.

use super::linear;
use crate::kind::Torque;
use crate::unit::{Unit, UnitSystem};

pub const NEWTON_METER: Unit<Torque> = Unit::si("N.m", "newton meter").in_system(UnitSystem::SiDerived);
pub const METER_KILOGRAM_FORCE: Unit<Torque> = linear("m.kgf", "meter kilogram-force", 9.806_65, UnitSystem::Other);
pub const POUND_FOOT: Unit<Torque> = linear("lbf.ft", "pound-foot", 1.355_817_948_331_400_4, UnitSystem::Imperial);
pub const POUND_INCH: Unit<Torque> = POUND_FOOT.derive_linear(1.0 / 12.0, "lbf.in", "pound-inch");

pub const STANDARD: Unit<Torque> = NEWTON_METER;
pub const ALL: &[Unit<Torque>] = &[NEWTON_METER, METER_KILOGRAM_FORCE, POUND_FOOT, POUND_INCH];
