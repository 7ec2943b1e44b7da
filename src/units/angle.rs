//! Angle units, and the bearing units of [`Direction`](crate::kind::Direction).
//!
//! Directions are stored as radians counter-clockwise from east. The `NORTH_*`
//! units put zero at north by shifting the origin a quarter turn.

use std::f64::consts::{FRAC_PI_2, PI};

use super::{linear, offset};
use crate::kind::{Angle, Direction};
use crate::unit::{Unit, UnitSystem};

pub const RADIAN: Unit<Angle> = Unit::si("rad", "radian");
pub const DEGREE: Unit<Angle> = linear("°", "degree", PI / 180.0, UnitSystem::SiAccepted);
pub const ARCMINUTE: Unit<Angle> = DEGREE.derive_linear(1.0 / 60.0, "'", "arcminute");
pub const ARCSECOND: Unit<Angle> = DEGREE.derive_linear(1.0 / 3600.0, "\"", "arcsecond");
pub const GRAD: Unit<Angle> = linear("grad", "gradian", PI / 200.0, UnitSystem::Other);
pub const TURN: Unit<Angle> = linear("tr", "turn", 2.0 * PI, UnitSystem::Other);

pub const STANDARD: Unit<Angle> = RADIAN;
pub const ALL: &[Unit<Angle>] = &[RADIAN, DEGREE, ARCMINUTE, ARCSECOND, GRAD, TURN];

pub const EAST_RADIAN: Unit<Direction> = Unit::si("rad", "radian from east");
pub const EAST_DEGREE: Unit<Direction> = linear("°", "degree from east", PI / 180.0, UnitSystem::SiAccepted);
pub const NORTH_RADIAN: Unit<Direction> = offset("rad(N)", "radian from north", 1.0, FRAC_PI_2, UnitSystem::Other);
pub const NORTH_DEGREE: Unit<Direction> =
    offset("°(N)", "degree from north", PI / 180.0, 90.0, UnitSystem::Other);

pub const STANDARD_ABS: Unit<Direction> = EAST_RADIAN;
pub const ALL_ABS: &[Unit<Direction>] = &[EAST_RADIAN, EAST_DEGREE, NORTH_RADIAN, NORTH_DEGREE];
