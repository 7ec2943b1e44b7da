use super::linear;
use crate::kind::Frequency;
use crate::unit::{Unit, UnitSystem};

pub const HERTZ: Unit<Frequency> = Unit::si("Hz", "hertz").in_system(UnitSystem::SiDerived);
pub const KILOHERTZ: Unit<Frequency> = HERTZ.derive_linear(1.0e3, "kHz", "kilohertz");
pub const MEGAHERTZ: Unit<Frequency> = HERTZ.derive_linear(1.0e6, "MHz", "megahertz");
pub const GIGAHERTZ: Unit<Frequency> = HERTZ.derive_linear(1.0e9, "GHz", "gigahertz");
pub const PER_MINUTE: Unit<Frequency> = linear("/min", "per minute", 1.0 / 60.0, UnitSystem::SiAccepted);
pub const PER_HOUR: Unit<Frequency> = linear("/h", "per hour", 1.0 / 3600.0, UnitSystem::SiAccepted);
pub const RPM: Unit<Frequency> = linear("rpm", "revolutions per minute", 1.0 / 60.0, UnitSystem::Other);

pub const STANDARD: Unit<Frequency> = HERTZ;
pub const ALL: &[Unit<Frequency>] = &[HERTZ, KILOHERTZ, MEGAHERTZ, GIGAHERTZ, PER_MINUTE, PER_HOUR, RPM];
