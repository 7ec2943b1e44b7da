//! Units of measurement: scales, unit systems, SI dimensions and the unit registry.
//!
//! A [`Unit<K>`] is a small `Copy` record tagged with its quantity kind `K` at the type
//! level, so a length unit can never be handed to a mass value. Units compare by key
//! (kind + id), never by conversion factor.

pub mod dimensions;
pub mod registry;
pub mod scale;
pub mod system;

pub use dimensions::SiDimensions;
pub use registry::{RegistryBuilder, UnitDescriptor, UnitKey, UnitRegistry};
pub use scale::Scale;
pub use system::UnitSystem;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::kind::{Abs, AbsoluteCounterpart, QuantityKind};

/// A named, scaled measurement reference for quantity kind `K`.
pub struct Unit<K> {
    id: &'static str,
    name: &'static str,
    scale: Scale,
    system: UnitSystem,
    _kind: PhantomData<fn() -> K>,
}

impl<K> Unit<K> {
    /// Define a unit. `id` doubles as the abbreviation key.
    pub const fn new(id: &'static str, name: &'static str, scale: Scale, system: UnitSystem) -> Self {
        Unit { id, name, scale, system, _kind: PhantomData }
    }

    /// The identity-scaled SI unit of a kind.
    pub const fn si(id: &'static str, name: &'static str) -> Self {
        Unit::new(id, name, Scale::SI, UnitSystem::SiBase)
    }

    /// New unit whose factor is `self.factor * factor`, keeping the unit system.
    pub const fn derive_linear(&self, factor: f64, abbreviation: &'static str, name: &'static str) -> Self {
        Unit::new(abbreviation, name, self.scale.derive(factor), self.system)
    }

    /// Same unit, tagged with another unit system.
    pub const fn in_system(self, system: UnitSystem) -> Self {
        Unit::new(self.id, self.name, self.scale, system)
    }

    pub const fn id(&self) -> &'static str {
        self.id
    }

    pub const fn abbreviation(&self) -> &'static str {
        self.id
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn scale(&self) -> Scale {
        self.scale
    }

    pub const fn system(&self) -> UnitSystem {
        self.system
    }

    #[inline]
    pub fn to_standard(&self, value: f64) -> f64 {
        self.scale.to_standard(value)
    }

    #[inline]
    pub fn from_standard(&self, value: f64) -> f64 {
        self.scale.from_standard(value)
    }
}

impl<K: QuantityKind> Unit<K> {
    /// Canonical SI unit of this unit's kind.
    pub const fn standard_unit(&self) -> Unit<K> {
        K::STANDARD
    }

    pub fn is_standard(&self) -> bool {
        *self == K::STANDARD
    }

    /// Express `value` (in this unit) in `target`.
    pub fn convert(&self, value: f64, target: Unit<K>) -> f64 {
        if *self == target {
            return value;
        }
        target.from_standard(self.to_standard(value))
    }

    pub fn key(&self) -> UnitKey {
        UnitKey::new(K::NAME, self.id)
    }

    /// Kind-erased description, as stored in a [`UnitRegistry`].
    pub fn descriptor(&self) -> UnitDescriptor {
        UnitDescriptor {
            key: self.key(),
            name: self.name,
            scale: self.scale,
            system: self.system,
            dimensions: K::DIMENSIONS,
            absolute: K::ABSOLUTE,
        }
    }
}

impl<K: AbsoluteCounterpart> Unit<Abs<K>> {
    /// The catalog unit measuring differences on this absolute scale.
    ///
    /// Prefers the relative unit with the same id and factor, then any relative unit
    /// with the same factor, then the standard unit. The result is always one of
    /// `K::UNITS`, so it can be looked up again by id.
    pub fn relative_unit(&self) -> Unit<K> {
        let factor = self.scale.factor();
        let same_factor = |u: &Unit<K>| {
            let f = u.scale().factor();
            u.scale().offset() == 0.0 && (f - factor).abs() <= 1e-12 * factor.abs()
        };
        K::unit_by_id(self.id)
            .filter(same_factor)
            .or_else(|| K::UNITS.iter().copied().find(same_factor))
            .unwrap_or(K::STANDARD)
    }
}

impl<K> Clone for Unit<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for Unit<K> {}

impl<K> PartialEq for Unit<K> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<K> Eq for Unit<K> {}

impl<K> Hash for Unit<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<K: QuantityKind> fmt::Debug for Unit<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unit")
            .field("kind", &K::NAME)
            .field("id", &self.id)
            .field("scale", &self.scale)
            .field("system", &self.system)
            .finish()
    }
}

impl<K> fmt::Display for Unit<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::{AbsoluteTemperature, Length, Temperature};
    use crate::units::{length, temperature};

    #[test]
    fn derive_linear_multiplies_factor() {
        let foot = length::FOOT;
        let furlong = foot.derive_linear(660.0, "fur", "furlong");
        assert_eq!(furlong.scale().factor(), foot.scale().factor() * 660.0);
        assert_eq!(furlong.standard_unit(), length::METER);
        assert_eq!(furlong.system(), foot.system());
        assert_eq!(furlong, length::FURLONG);
    }

    #[test]
    fn equality_is_by_key_not_factor() {
        let fake: Unit<Length> = Unit::new("fm1", "fictitious meter", Scale::SI, UnitSystem::Other);
        assert_eq!(fake.scale(), length::METER.scale());
        assert_ne!(fake, length::METER);
        assert!(!fake.is_standard());
        assert!(length::METER.is_standard());
    }

    #[test]
    fn convert_between_units() {
        assert_eq!(length::KILOMETER.convert(1.5, length::METER), 1500.0);
        let c = temperature::DEGREE_CELSIUS_ABS.convert(100.0, temperature::DEGREE_FAHRENHEIT_ABS);
        assert!((c - 212.0).abs() < 1e-9);
    }

    #[test]
    fn absolute_unit_has_relative_counterpart() {
        let rel: Unit<Temperature> = temperature::DEGREE_FAHRENHEIT_ABS.relative_unit();
        assert_eq!(rel, temperature::DEGREE_FAHRENHEIT);
        assert_eq!(rel.scale(), Scale::linear(5.0 / 9.0));
        let abs: Unit<AbsoluteTemperature> = temperature::KELVIN_ABS;
        assert!(abs.is_standard());
        assert_eq!(abs.key().kind(), "AbsoluteTemperature");
    }

    fn relative_units_are_in_catalog<K: AbsoluteCounterpart>() {
        for abs in K::ABS_UNITS {
            let rel = abs.relative_unit();
            assert_eq!(K::unit_by_id(rel.id()), Some(rel), "{} from {}", rel.id(), abs.id());
            let f = abs.scale().factor();
            assert!((rel.scale().factor() - f).abs() <= 1e-12 * f, "{} factor", abs.id());
        }
    }

    #[test]
    fn every_absolute_unit_maps_to_a_catalog_relative_unit() {
        relative_units_are_in_catalog::<crate::kind::Duration>();
        relative_units_are_in_catalog::<crate::kind::Angle>();
        relative_units_are_in_catalog::<Temperature>();
        relative_units_are_in_catalog::<Length>();
        assert_eq!(crate::units::duration::EPOCH_J2000.relative_unit(), crate::units::duration::SECOND);
        assert_eq!(crate::units::duration::EPOCH_YEAR_1.relative_unit(), crate::units::duration::SECOND);
        assert_eq!(crate::units::angle::NORTH_DEGREE.relative_unit(), crate::units::angle::DEGREE);
        assert_eq!(crate::units::angle::NORTH_RADIAN.relative_unit(), crate::units::angle::RADIAN);
    }
}
