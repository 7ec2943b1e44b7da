use super::linear;
use crate::kind::LinearDensity;
use crate::unit::{Unit, UnitSystem};

pub const KG_PER_METER: Unit<LinearDensity> = Unit::si("kg/m", "kilogram per meter").in_system(UnitSystem::SiDerived);
/// Gram per kilometer, used for yarns and fibres.
pub const TEX: Unit<LinearDensity> = linear("tex", "tex", 1.0e-6, UnitSystem::Other);
pub const DENIER: Unit<LinearDensity> = TEX.derive_linear(1.0 / 9.0, "den", "denier");
pub const POUND_PER_FOOT: Unit<LinearDensity> =
    linear("lb/ft", "pound per foot", 0.453_592_37 / 0.3048, UnitSystem::Imperial);

pub const STANDARD: Unit<LinearDensity> = KG_PER_METER;
pub const ALL: &[Unit<LinearDensity>] = &[KG_PER_METER, TEX, DENIER, POUND_PER_FOOT];
