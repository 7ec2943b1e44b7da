use super::linear;
use crate::kind::Speed;
use crate::unit::{Unit, UnitSystem};

pub const METER_PER_SECOND: Unit<Speed> = Unit::si("m/s", "meter per second").in_system(UnitSystem::SiDerived);
pub const KM_PER_HOUR: Unit<Speed> = linear("km/h", "kilometer per hour", 1.0 / 3.6, UnitSystem::SiAccepted);
pub const MILE_PER_HOUR: Unit<Speed> = linear("mi/h", "mile per hour", 0.447_04, UnitSystem::Imperial);
pub const FOOT_PER_SECOND: Unit<Speed> = linear("ft/s", "foot per second", 0.3048, UnitSystem::Imperial);
pub const KNOT: Unit<Speed> = linear("kt", "knot", 1852.0 / 3600.0, UnitSystem::Other);

pub const STANDARD: Unit<Speed> = METER_PER_SECOND;
pub const ALL: &[Unit<Speed>] = &[METER_PER_SECOND, KM_PER_HOUR, MILE_PER_HOUR, FOOT_PER_SECOND, KNOT];
