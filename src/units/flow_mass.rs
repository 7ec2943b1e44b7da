use super::linear;
use crate::kind::FlowMass;
use crate::unit::{Unit, UnitSystem};

pub const KG_PER_SECOND: Unit<FlowMass> = Unit::si("kg/s", "kilogram per second").in_system(UnitSystem::SiDerived);
pub const KG_PER_HOUR: Unit<FlowMass> = linear("kg/h", "kilogram per hour", 1.0 / 3600.0, UnitSystem::SiAccepted);
pub const GRAM_PER_SECOND: Unit<FlowMass> = linear("g/s", "gram per second", 1.0e-3, UnitSystem::SiDerived);
pub const POUND_PER_SECOND: Unit<FlowMass> = linear("lb/s", "pound per second", 0.453_592_37, UnitSystem::Imperial);

pub const STANDARD: Unit<FlowMass> = KG_PER_SECOND;
pub const ALL: &[Unit<FlowMass>] = &[KG_PER_SECOND, KG_PER_HOUR, GRAM_PER_SECOND, POUND_PER_SECOND];
