use super::linear;
use crate::kind::ElectricalCharge;
use crate::unit::{Unit, UnitSystem};

pub const COULOMB: Unit<ElectricalCharge> = Unit::si("C", "coulomb").in_system(UnitSystem::SiDerived);
pub const MILLIAMPERE_HOUR: Unit<ElectricalCharge> =
    linear("mAh", "milliampere-hour", 3.6, UnitSystem::SiAccepted);
pub const AMPERE_HOUR: Unit<ElectricalCharge> = MILLIAMPERE_HOUR.derive_linear(1.0e3, "Ah", "ampere-hour");
pub const ELEMENTARY_CHARGE: Unit<ElectricalCharge> =
    linear("e", "elementary charge", 1.602_176_634e-19, UnitSystem::Other);
pub const ABCOULOMB: Unit<ElectricalCharge> = linear("abC", "abcoulomb", 10.0, UnitSystem::CgsEmu);

pub const STANDARD: Unit<ElectricalCharge> = COULOMB;
pub const ALL: &[Unit<ElectricalCharge>] =
    &[COULOMB, MILLIAMPERE_HOUR, AMPERE_HOUR, ELEMENTARY_CHARGE, ABCOULOMB];
