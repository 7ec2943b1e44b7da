//! Built-in unit catalogs, one module per quantity kind.
//!
//! Every module exposes its units as constants, a `STANDARD` alias for the base-SI
//! unit and an `ALL` slice used for registration and lookup. Modules of kinds with
//! an absolute twin also carry `*_ABS` constants, `STANDARD_ABS` and `ALL_ABS`.
//!
//! ```
//! use measura::units::length::{FOOT, FURLONG};
//!
//! assert_eq!(FURLONG.scale().factor(), FOOT.scale().factor() * 660.0);
//! ```

use crate::unit::{Scale, Unit, UnitSystem};

pub mod acceleration;
pub mod angle;
pub mod area;
pub mod density;
pub mod dimensionless;
pub mod duration;
pub mod electrical_charge;
pub mod electrical_current;
pub mod electrical_potential;
pub mod electrical_resistance;
pub mod energy;
pub mod flow_mass;
pub mod flow_volume;
pub mod force;
pub mod frequency;
pub mod length;
pub mod linear_density;
pub mod mass;
pub mod power;
pub mod pressure;
pub mod speed;
pub mod temperature;
pub mod torque;
pub mod volume;

/// Linear unit with the given factor to the standard unit.
pub(crate) const fn linear<K>(id: &'static str, name: &'static str, factor: f64, system: UnitSystem) -> Unit<K> {
    Unit::new(id, name, Scale::linear(factor), system)
}

/// Absolute unit whose zero sits `offset` units below the standard zero.
pub(crate) const fn offset<K>(
    id: &'static str,
    name: &'static str,
    factor: f64,
    offset: f64,
    system: UnitSystem,
) -> Unit<K> {
    Unit::new(id, name, Scale::offset_linear(factor, offset), system)
}
