//! Initialize-once registry of units, keyed by quantity kind.
//!
//! A [`RegistryBuilder`] collects units, rejects duplicates and, on `build`, verifies
//! that every kind has a base-SI standard unit. The resulting [`UnitRegistry`] is
//! read-only. [`UnitRegistry::global`] holds the built-in catalog, built lazily on
//! first use and frozen afterwards.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::LazyLock;

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Result, UnitError};
use crate::kind::{self, QuantityKind};
use crate::unit::{Scale, SiDimensions, Unit, UnitSystem};

/// Identity of a unit: its kind name plus its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct UnitKey {
    kind: &'static str,
    id: &'static str,
}

impl UnitKey {
    pub const fn new(kind: &'static str, id: &'static str) -> Self {
        UnitKey { kind, id }
    }

    pub const fn kind(&self) -> &'static str {
        self.kind
    }

    pub const fn id(&self) -> &'static str {
        self.id
    }
}

impl fmt::Display for UnitKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.kind, self.id)
    }
}

/// Kind-erased unit record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitDescriptor {
    pub key: UnitKey,
    pub name: &'static str,
    pub scale: Scale,
    pub system: UnitSystem,
    pub dimensions: SiDimensions,
    pub absolute: bool,
}

#[derive(Debug, Clone)]
struct KindEntry {
    dimensions: SiDimensions,
    absolute: bool,
    standard: Option<usize>,
    units: Vec<UnitDescriptor>,
    by_id: HashMap<&'static str, usize>,
}

impl KindEntry {
    fn new(dimensions: SiDimensions, absolute: bool) -> Self {
        KindEntry { dimensions, absolute, standard: None, units: Vec::new(), by_id: HashMap::new() }
    }
}

/// Collects unit definitions before freezing them into a [`UnitRegistry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    kinds: BTreeMap<&'static str, KindEntry>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one unit of kind `K`. Fails on a repeated id for the same kind.
    pub fn register<K: QuantityKind>(&mut self, unit: Unit<K>) -> Result<&mut Self> {
        let entry = self
            .kinds
            .entry(K::NAME)
            .or_insert_with(|| KindEntry::new(K::DIMENSIONS, K::ABSOLUTE));
        if entry.by_id.contains_key(unit.id()) {
            return Err(UnitError::DuplicateUnit { kind: K::NAME, id: unit.id() });
        }
        let slot = entry.units.len();
        entry.units.push(unit.descriptor());
        entry.by_id.insert(unit.id(), slot);
        if unit == K::STANDARD {
            entry.standard = Some(slot);
        }
        debug!(kind = K::NAME, id = unit.id(), factor = unit.scale().factor(), "registered unit");
        Ok(self)
    }

    /// Register the whole catalog of kind `K`.
    pub fn register_kind<K: QuantityKind>(&mut self) -> Result<&mut Self> {
        for unit in K::UNITS {
            self.register(*unit)?;
        }
        Ok(self)
    }

    /// Freeze. Every kind must own a standard unit with an identity scale.
    pub fn build(self) -> Result<UnitRegistry> {
        for (name, entry) in &self.kinds {
            match entry.standard {
                Some(slot) if entry.units[slot].scale.is_base_si() => {}
                _ => return Err(UnitError::MissingStandardUnit(*name)),
            }
        }
        let units: usize = self.kinds.values().map(|e| e.units.len()).sum();
        info!(kinds = self.kinds.len(), units, "unit registry frozen");
        Ok(UnitRegistry { kinds: self.kinds })
    }
}

/// Read-only lookup of units by kind and id.
#[derive(Debug, Clone)]
pub struct UnitRegistry {
    kinds: BTreeMap<&'static str, KindEntry>,
}

static GLOBAL: LazyLock<UnitRegistry> = LazyLock::new(|| {
    kind::register_catalog(&mut RegistryBuilder::new())
        .and_then(|builder| std::mem::take(builder).build())
        .unwrap_or_else(|e| panic!("built-in unit catalog is inconsistent: {e}"))
});

impl UnitRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// The built-in catalog of every kind this crate defines.
    pub fn global() -> &'static UnitRegistry {
        &GLOBAL
    }

    /// Names of the registered kinds, sorted.
    pub fn kinds(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.kinds.keys().copied()
    }

    pub fn contains_kind(&self, kind: &str) -> bool {
        self.kinds.contains_key(kind)
    }

    /// All units registered for `kind`, in registration order.
    pub fn units_of(&self, kind: &str) -> &[UnitDescriptor] {
        self.kinds.get(kind).map(|e| e.units.as_slice()).unwrap_or(&[])
    }

    pub fn descriptor(&self, kind: &str, id: &str) -> Option<&UnitDescriptor> {
        let entry = self.kinds.get(kind)?;
        entry.by_id.get(id).map(|&slot| &entry.units[slot])
    }

    pub fn standard_descriptor(&self, kind: &str) -> Option<&UnitDescriptor> {
        let entry = self.kinds.get(kind)?;
        entry.standard.map(|slot| &entry.units[slot])
    }

    /// SI dimensions registered for `kind`.
    pub fn dimensions(&self, kind: &str) -> Option<SiDimensions> {
        self.kinds.get(kind).map(|e| e.dimensions)
    }

    pub fn is_absolute(&self, kind: &str) -> Option<bool> {
        self.kinds.get(kind).map(|e| e.absolute)
    }

    /// Typed lookup by id (the abbreviation key).
    pub fn unit<K: QuantityKind>(&self, id: &str) -> Result<Unit<K>> {
        self.descriptor(K::NAME, id)
            .map(|d| Unit::new(d.key.id(), d.name, d.scale, d.system))
            .ok_or_else(|| UnitError::UnknownUnit { kind: K::NAME, id: id.to_string() })
    }

    /// Typed lookup by full name, e.g. `"kilometer"`.
    pub fn unit_by_name<K: QuantityKind>(&self, name: &str) -> Result<Unit<K>> {
        self.units_of(K::NAME)
            .iter()
            .find(|d| d.name == name)
            .map(|d| Unit::new(d.key.id(), d.name, d.scale, d.system))
            .ok_or_else(|| UnitError::UnknownUnit { kind: K::NAME, id: name.to_string() })
    }

    /// Kinds sharing the given dimensions (e.g. Energy and Torque).
    pub fn kinds_with_dimensions(&self, dims: SiDimensions) -> Vec<&'static str> {
        self.kinds
            .iter()
            .filter(|(_, e)| e.dimensions == dims)
            .map(|(name, _)| *name)
            .collect()
    }

    /// Self-check: every kind has a base-SI standard unit and every unit's
    /// scale inverts its own conversion.
    pub fn check_complete(&self) -> Result<()> {
        for (name, entry) in &self.kinds {
            let standard = entry
                .standard
                .map(|slot| &entry.units[slot])
                .ok_or(UnitError::MissingStandardUnit(*name))?;
            if !standard.scale.is_base_si() {
                return Err(UnitError::MissingStandardUnit(*name));
            }
            for unit in &entry.units {
                for sample in [0.0, 1.0, -273.15, 1.0e6] {
                    let back = unit.scale.from_standard(unit.scale.to_standard(sample));
                    let tolerance = 1e-9 * (sample.abs() + unit.scale.offset().abs()).max(1.0);
                    if (back - sample).abs() > tolerance {
                        return Err(UnitError::InconsistentUnit(format!(
                            "unit {} does not round-trip {sample} (got {back})",
                            unit.key
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::{Duration, Length, Speed};
    use crate::units::{duration, length};

    fn init_logs() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        init_logs();
        let mut b = UnitRegistry::builder();
        b.register(length::METER).unwrap();
        let err = b.register(length::METER).unwrap_err();
        assert_eq!(err, UnitError::DuplicateUnit { kind: "Length", id: "m" });
    }

    #[test]
    fn missing_standard_unit_fails_build() {
        let mut b = UnitRegistry::builder();
        b.register(length::KILOMETER).unwrap();
        assert_eq!(b.build().unwrap_err(), UnitError::MissingStandardUnit("Length"));
    }

    #[test]
    fn explicit_registry_lookup() {
        init_logs();
        let mut b = UnitRegistry::builder();
        b.register_kind::<Length>().unwrap().register_kind::<Duration>().unwrap();
        let custom = length::FOOT.derive_linear(6.0, "fathom-ft", "six feet");
        b.register(custom).unwrap();
        let reg = b.build().unwrap();
        assert_eq!(reg.unit::<Length>("km").unwrap(), length::KILOMETER);
        assert_eq!(reg.unit::<Length>("fathom-ft").unwrap().scale().factor(), 0.3048 * 6.0);
        assert_eq!(reg.unit_by_name::<Duration>("fortnight").unwrap(), duration::FORTNIGHT);
        assert!(matches!(reg.unit::<Speed>("m/s"), Err(UnitError::UnknownUnit { .. })));
        assert_eq!(reg.standard_descriptor("Length").unwrap().key.id(), "m");
        reg.check_complete().unwrap();
    }

    #[test]
    fn global_catalog_is_complete() {
        init_logs();
        let reg = UnitRegistry::global();
        reg.check_complete().unwrap();
        assert!(reg.contains_kind("Speed"));
        assert!(reg.contains_kind("Time"));
        assert_eq!(reg.is_absolute("AbsoluteTemperature"), Some(true));
        assert_eq!(reg.is_absolute("Temperature"), Some(false));
        let length_dims = reg.dimensions("Length").unwrap();
        let kinds = reg.kinds_with_dimensions(length_dims);
        assert!(kinds.contains(&"Length") && kinds.contains(&"Position"));
    }
}
