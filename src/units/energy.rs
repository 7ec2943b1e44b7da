use super::linear;
use crate::kind::Energy;
use crate::unit::{Unit, UnitSystem};

pub const JOULE: Unit<Energy> = Unit::si("J", "joule").in_system(UnitSystem::SiDerived);
pub const KILOJOULE: Unit<Energy> = JOULE.derive_linear(1.0e3, "kJ", "kilojoule");
pub const MEGAJOULE: Unit<Energy> = JOULE.derive_linear(1.0e6, "MJ", "megajoule");
pub const WATT_HOUR: Unit<Energy> = linear("Wh", "watt-hour", 3600.0, UnitSystem::SiAccepted);
pub const KILOWATT_HOUR: Unit<Energy> = WATT_HOUR.derive_linear(1.0e3, "kWh", "kilowatt-hour");
pub const CALORIE: Unit<Energy> = linear("cal", "calorie", 4.184, UnitSystem::Other);
pub const KILOCALORIE: Unit<Energy> = CALORIE.derive_linear(1.0e3, "kcal", "kilocalorie");
pub const ELECTRONVOLT: Unit<Energy> = linear("eV", "electronvolt", 1.602_176_634e-19, UnitSystem::SiAccepted);
pub const ERG: Unit<Energy> = linear("erg", "erg", 1.0e-7, UnitSystem::Cgs);
pub const BTU: Unit<Energy> = linear("BTU", "British thermal unit", 1055.055_852_62, UnitSystem::Imperial);

pub const STANDARD: Unit<Energy> = JOULE;
pub const ALL: &[Unit<Energy>] = &[
    JOULE,
    KILOJOULE,
    MEGAJOULE,
    WATT_HOUR,
    KILOWATT_HOUR,
    CALORIE,
    KILOCALORIE,
    ELECTRONVOLT,
    ERG,
    BTU,
];
