//! Quantity kinds: zero-sized type tags carrying the dimensions, standard unit
//! and unit catalog of one physical quantity.
//!
//! Relative kinds ([`Length`], [`Duration`], [`Temperature`], ...) measure amounts
//! and differences. An absolute kind is written [`Abs<K>`] and measures a reading
//! against a fixed origin; it exists only for relative kinds implementing
//! [`AbsoluteCounterpart`]. The aliases [`Time`], [`AbsoluteTemperature`],
//! [`Position`] and [`Direction`] name the four built-in ones.

pub mod table;

pub use table::{KindDiv, KindMul};

use std::fmt::Debug;
use std::hash::Hash;
use std::marker::PhantomData;

use crate::error::Result;
use crate::unit::{RegistryBuilder, SiDimensions, Unit};
use crate::units;

/// A physical quantity kind.
pub trait QuantityKind: Copy + Debug + Default + Eq + Hash + Send + Sync + 'static {
    const NAME: &'static str;
    const DIMENSIONS: SiDimensions;
    /// The base-SI unit every value of this kind is stored in.
    const STANDARD: Unit<Self>;
    const UNITS: &'static [Unit<Self>];
    const ABSOLUTE: bool = false;

    /// Catalog lookup by abbreviation.
    fn unit_by_id(id: &str) -> Option<Unit<Self>> {
        Self::UNITS.iter().copied().find(|u| u.id() == id)
    }
}

/// Marker for kinds that measure amounts rather than readings.
pub trait RelativeKind: QuantityKind {}

/// A relative kind that has an absolute twin, e.g. `Duration` and `Time`.
pub trait AbsoluteCounterpart: RelativeKind {
    const ABS_NAME: &'static str;
    const ABS_STANDARD: Unit<Abs<Self>>;
    const ABS_UNITS: &'static [Unit<Abs<Self>>];
}

/// Absolute kind over the relative kind `K`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Abs<K>(PhantomData<K>);

impl<K: AbsoluteCounterpart> QuantityKind for Abs<K> {
    const NAME: &'static str = K::ABS_NAME;
    const DIMENSIONS: SiDimensions = K::DIMENSIONS;
    const STANDARD: Unit<Self> = K::ABS_STANDARD;
    const UNITS: &'static [Unit<Self>] = K::ABS_UNITS;
    const ABSOLUTE: bool = true;
}

/// Dimensions from exponents of (kg, m, s, A, K).
const fn si(mass: i8, length: i8, time: i8, current: i8, temperature: i8) -> SiDimensions {
    SiDimensions::new(0, 0, mass, length, time, current, temperature, 0, 0)
}

macro_rules! relative_kind {
    ($(#[$meta:meta])* $kind:ident, $dims:expr, $units:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $kind;

        impl QuantityKind for $kind {
            const NAME: &'static str = stringify!($kind);
            const DIMENSIONS: SiDimensions = $dims;
            const STANDARD: Unit<Self> = units::$units::STANDARD;
            const UNITS: &'static [Unit<Self>] = units::$units::ALL;
        }

        impl RelativeKind for $kind {}
    };
}

macro_rules! absolute_kind {
    ($(#[$meta:meta])* $abs:ident of $kind:ident, $units:ident) => {
        $(#[$meta])*
        pub type $abs = Abs<$kind>;

        impl AbsoluteCounterpart for $kind {
            const ABS_NAME: &'static str = stringify!($abs);
            const ABS_STANDARD: Unit<Abs<Self>> = units::$units::STANDARD_ABS;
            const ABS_UNITS: &'static [Unit<Abs<Self>>] = units::$units::ALL_ABS;
        }
    };
}

relative_kind!(
    /// Pure numbers, ratios and fractions.
    Dimensionless, SiDimensions::DIMENSIONLESS, dimensionless
);
relative_kind!(Length, si(0, 1, 0, 0, 0), length);
relative_kind!(Area, si(0, 2, 0, 0, 0), area);
relative_kind!(Volume, si(0, 3, 0, 0, 0), volume);
relative_kind!(
    /// A time span; the relative twin of [`Time`].
    Duration, si(0, 0, 1, 0, 0), duration
);
relative_kind!(Frequency, si(0, 0, -1, 0, 0), frequency);
relative_kind!(Speed, si(0, 1, -1, 0, 0), speed);
relative_kind!(Acceleration, si(0, 1, -2, 0, 0), acceleration);
relative_kind!(Mass, si(1, 0, 0, 0, 0), mass);
relative_kind!(Force, si(1, 1, -2, 0, 0), force);
relative_kind!(Energy, si(1, 2, -2, 0, 0), energy);
relative_kind!(
    /// Moment of force. Same dimensions as [`Energy`], never mixed with it.
    Torque, si(1, 2, -2, 0, 0), torque
);
relative_kind!(Power, si(1, 2, -3, 0, 0), power);
relative_kind!(Pressure, si(1, -1, -2, 0, 0), pressure);
relative_kind!(Density, si(1, -3, 0, 0, 0), density);
relative_kind!(
    /// Volumetric flow rate.
    FlowVolume, si(0, 3, -1, 0, 0), flow_volume
);
relative_kind!(
    /// Mass flow rate.
    FlowMass, si(1, 0, -1, 0, 0), flow_mass
);
relative_kind!(ElectricalCurrent, si(0, 0, 0, 1, 0), electrical_current);
relative_kind!(ElectricalCharge, si(0, 0, 1, 1, 0), electrical_charge);
relative_kind!(ElectricalPotential, si(1, 2, -3, -1, 0), electrical_potential);
relative_kind!(ElectricalResistance, si(1, 2, -3, -2, 0), electrical_resistance);
relative_kind!(
    /// Plane angle, tracked as its own `rad` dimension.
    Angle, SiDimensions::new(1, 0, 0, 0, 0, 0, 0, 0, 0), angle
);
relative_kind!(
    /// A temperature difference.
    Temperature, si(0, 0, 0, 0, 1), temperature
);
relative_kind!(
    /// Mass per unit of length.
    LinearDensity, si(1, -1, 0, 0, 0), linear_density
);

absolute_kind!(
    /// An instant, measured from an epoch.
    Time of Duration, duration
);
absolute_kind!(
    /// A temperature reading on an absolute or offset scale.
    AbsoluteTemperature of Temperature, temperature
);
absolute_kind!(
    /// A location along a line, measured from an origin.
    Position of Length, length
);
absolute_kind!(
    /// A bearing, measured from a reference direction.
    Direction of Angle, angle
);

/// Registers every built-in kind with `builder`.
pub fn register_catalog(builder: &mut RegistryBuilder) -> Result<&mut RegistryBuilder> {
    builder
        .register_kind::<Dimensionless>()?
        .register_kind::<Length>()?
        .register_kind::<Area>()?
        .register_kind::<Volume>()?
        .register_kind::<Duration>()?
        .register_kind::<Frequency>()?
        .register_kind::<Speed>()?
        .register_kind::<Acceleration>()?
        .register_kind::<Mass>()?
        .register_kind::<Force>()?
        .register_kind::<Energy>()?
        .register_kind::<Torque>()?
        .register_kind::<Power>()?
        .register_kind::<Pressure>()?
        .register_kind::<Density>()?
        .register_kind::<FlowVolume>()?
        .register_kind::<FlowMass>()?
        .register_kind::<ElectricalCurrent>()?
        .register_kind::<ElectricalCharge>()?
        .register_kind::<ElectricalPotential>()?
        .register_kind::<ElectricalResistance>()?
        .register_kind::<Angle>()?
        .register_kind::<Temperature>()?
        .register_kind::<LinearDensity>()?
        .register_kind::<Time>()?
        .register_kind::<AbsoluteTemperature>()?
        .register_kind::<Position>()?
        .register_kind::<Direction>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard_is_first_and_base_si<K: QuantityKind>() {
        assert!(K::STANDARD.scale().is_base_si(), "{}", K::NAME);
        assert!(K::UNITS.contains(&K::STANDARD), "{} catalog lacks its standard unit", K::NAME);
    }

    #[test]
    fn every_kind_has_a_base_si_standard() {
        standard_is_first_and_base_si::<Dimensionless>();
        standard_is_first_and_base_si::<Length>();
        standard_is_first_and_base_si::<Speed>();
        standard_is_first_and_base_si::<Pressure>();
        standard_is_first_and_base_si::<LinearDensity>();
        standard_is_first_and_base_si::<Time>();
        standard_is_first_and_base_si::<AbsoluteTemperature>();
        standard_is_first_and_base_si::<Position>();
        standard_is_first_and_base_si::<Direction>();
    }

    #[test]
    fn absolute_kinds_share_dimensions_with_their_relative_twin() {
        assert_eq!(Time::DIMENSIONS, Duration::DIMENSIONS);
        assert_eq!(AbsoluteTemperature::DIMENSIONS, Temperature::DIMENSIONS);
        assert!(Time::ABSOLUTE);
        assert!(!Duration::ABSOLUTE);
        assert_eq!(Position::NAME, "Position");
    }

    #[test]
    fn torque_and_energy_are_distinct_kinds() {
        assert_eq!(Torque::DIMENSIONS, Energy::DIMENSIONS);
        assert_ne!(Torque::NAME, Energy::NAME);
        assert_eq!(Torque::unit_by_id("N.m"), Some(units::torque::NEWTON_METER));
        assert_eq!(Energy::unit_by_id("N.m"), None);
        standard_is_first_and_base_si::<Torque>();
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(Length::unit_by_id("km"), Some(units::length::KILOMETER));
        assert_eq!(Length::unit_by_id("parsec-ish"), None);
        assert_eq!(
            AbsoluteTemperature::unit_by_id("°F"),
            Some(units::temperature::DEGREE_FAHRENHEIT_ABS)
        );
    }
}
