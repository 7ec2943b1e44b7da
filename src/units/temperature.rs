//! Temperature differences, and the absolute scales of
//! [`AbsoluteTemperature`](crate::kind::AbsoluteTemperature).
//!
//! A relative and an absolute unit share their abbreviation and factor; only the
//! absolute one carries an offset. `20 °C` as a reading is 293.15 K, while a
//! difference of `20 °C` is 20 K.

use super::{linear, offset};
use crate::kind::{AbsoluteTemperature, Temperature};
use crate::unit::{Unit, UnitSystem};

pub const KELVIN: Unit<Temperature> = Unit::si("K", "kelvin");
pub const DEGREE_CELSIUS: Unit<Temperature> = linear("°C", "degree Celsius", 1.0, UnitSystem::SiDerived);
pub const DEGREE_FAHRENHEIT: Unit<Temperature> =
    linear("°F", "degree Fahrenheit", 5.0 / 9.0, UnitSystem::UsCustomary);
pub const DEGREE_RANKINE: Unit<Temperature> = linear("°R", "degree Rankine", 5.0 / 9.0, UnitSystem::Other);
pub const DEGREE_REAUMUR: Unit<Temperature> = linear("°Ré", "degree Reaumur", 5.0 / 4.0, UnitSystem::Other);

pub const STANDARD: Unit<Temperature> = KELVIN;
pub const ALL: &[Unit<Temperature>] =
    &[KELVIN, DEGREE_CELSIUS, DEGREE_FAHRENHEIT, DEGREE_RANKINE, DEGREE_REAUMUR];

pub const KELVIN_ABS: Unit<AbsoluteTemperature> = Unit::si("K", "kelvin");
pub const DEGREE_CELSIUS_ABS: Unit<AbsoluteTemperature> =
    offset("°C", "degree Celsius", 1.0, 273.15, UnitSystem::SiDerived);
pub const DEGREE_FAHRENHEIT_ABS: Unit<AbsoluteTemperature> =
    offset("°F", "degree Fahrenheit", 5.0 / 9.0, 459.67, UnitSystem::UsCustomary);
pub const DEGREE_RANKINE_ABS: Unit<AbsoluteTemperature> =
    linear("°R", "degree Rankine", 5.0 / 9.0, UnitSystem::Other);
pub const DEGREE_REAUMUR_ABS: Unit<AbsoluteTemperature> =
    offset("°Ré", "degree Reaumur", 5.0 / 4.0, 218.52, UnitSystem::Other);

pub const STANDARD_ABS: Unit<AbsoluteTemperature> = KELVIN_ABS;
pub const ALL_ABS: &[Unit<AbsoluteTemperature>] = &[
    KELVIN_ABS,
    DEGREE_CELSIUS_ABS,
    DEGREE_FAHRENHEIT_ABS,
    DEGREE_RANKINE_ABS,
    DEGREE_REAUMUR_ABS,
];
