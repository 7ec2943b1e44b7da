use super::linear;
use crate::kind::Acceleration;
use crate::unit::{Unit, UnitSystem};

pub const METER_PER_SECOND_2: Unit<Acceleration> =
    Unit::si("m/s2", "meter per second squared").in_system(UnitSystem::SiDerived);
pub const KM_PER_HOUR_2: Unit<Acceleration> =
    linear("km/h2", "kilometer per hour squared", 1000.0 / (3600.0 * 3600.0), UnitSystem::SiAccepted);
pub const FOOT_PER_SECOND_2: Unit<Acceleration> =
    linear("ft/s2", "foot per second squared", 0.3048, UnitSystem::Imperial);
/// Standard gravity.
pub const STANDARD_GRAVITY: Unit<Acceleration> = linear("g", "standard gravity", 9.806_65, UnitSystem::Other);
pub const GAL: Unit<Acceleration> = linear("Gal", "gal", 0.01, UnitSystem::Cgs);

pub const STANDARD: Unit<Acceleration> = METER_PER_SECOND_2;
pub const ALL: &[Unit<Acceleration>] =
    &[METER_PER_SECOND_2, KM_PER_HOUR_2, FOOT_PER_SECOND_2, STANDARD_GRAVITY, GAL];
