use super::linear;
use crate::kind::FlowVolume;
use crate::unit::{Unit, UnitSystem};

pub const CUBIC_METER_PER_SECOND: Unit<FlowVolume> =
    Unit::si("m3/s", "cubic meter per second").in_system(UnitSystem::SiDerived);
pub const CUBIC_METER_PER_HOUR: Unit<FlowVolume> =
    linear("m3/h", "cubic meter per hour", 1.0 / 3600.0, UnitSystem::SiAccepted);
pub const LITER_PER_SECOND: Unit<FlowVolume> = linear("L/s", "liter per second", 1.0e-3, UnitSystem::SiAccepted);
pub const LITER_PER_MINUTE: Unit<FlowVolume> =
    linear("L/min", "liter per minute", 1.0e-3 / 60.0, UnitSystem::SiAccepted);
pub const GALLON_US_PER_MINUTE: Unit<FlowVolume> =
    linear("gal(US)/min", "gallon (US) per minute", 3.785_411_784e-3 / 60.0, UnitSystem::UsCustomary);

pub const STANDARD: Unit<FlowVolume> = CUBIC_METER_PER_SECOND;
pub const ALL: &[Unit<FlowVolume>] = &[
    CUBIC_METER_PER_SECOND,
    CUBIC_METER_PER_HOUR,
    LITER_PER_SECOND,
    LITER_PER_MINUTE,
    GALLON_US_PER_MINUTE,
];
