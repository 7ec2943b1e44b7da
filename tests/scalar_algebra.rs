//! Scalar algebra tests for measura
//!
//! These tests exercise scales, units and scalars through the public API: conversion
//! round trips, equality across units, the absolute/relative rules and cross-kind
//! products and quotients from the multiplication table.

use approx::assert_relative_eq;
use measura::kind::{
    AbsoluteTemperature, Acceleration, Dimensionless, Direction, Duration, Energy, Force, Length, Mass, Power,
    QuantityKind, Speed, Temperature, Time,
};
use measura::units::{angle, duration, energy, force, length, mass, temperature};
use measura::{Scalar, Scale, SiScalar, UnitError};

/// Round trip through the standard unit for zero, negative and large values.
#[test]
fn scale_round_trip() {
    let scales = [
        Scale::SI,
        Scale::linear(0.3048),
        Scale::offset_linear(5.0 / 9.0, 459.67),
        Scale::offset_linear(1.0, 273.15),
    ];
    for scale in scales {
        for v in [0.0, -40.0, 1.0e12, -7.5e-3] {
            let back = scale.from_standard(scale.to_standard(v));
            assert_relative_eq!(back, v, epsilon = 1e-9, max_relative = 1e-12);
        }
    }
}

#[test]
fn derived_units_multiply_factors() {
    let furlong = length::FOOT.derive_linear(660.0, "fur", "furlong");
    assert_eq!(furlong.scale().factor(), length::FOOT.scale().factor() * 660.0);
    assert_eq!(furlong.standard_unit(), length::METER);
    assert_eq!(duration::FORTNIGHT.scale().factor(), 14.0 * 86_400.0);
}

#[test]
fn equality_across_units() {
    assert_eq!(Scalar::<Length>::new(1000.0, length::METER), Scalar::new(1.0, length::KILOMETER));
    assert_ne!(Scalar::<Length>::new(1000.0, length::METER), Scalar::new(1.0, length::MILE));
    assert!(Scalar::<Mass>::new(1.0, mass::KILOGRAM) > Scalar::new(999.0, mass::GRAM));
}

#[test]
fn fahrenheit_reading() {
    let t = Scalar::<AbsoluteTemperature>::new(32.0, temperature::DEGREE_FAHRENHEIT_ABS);
    assert_relative_eq!(t.si(), 273.15, epsilon = 0.01);
    assert_relative_eq!(t.in_unit(), 32.0, epsilon = 0.0001);
    let body = Scalar::<AbsoluteTemperature>::new(37.0, temperature::DEGREE_CELSIUS_ABS);
    assert_relative_eq!(body.in_unit_of(temperature::DEGREE_FAHRENHEIT_ABS), 98.6, epsilon = 1e-9);
}

#[test]
fn furlongs_per_fortnight() {
    let d = Scalar::<Length>::new(1000.0, length::FURLONG);
    let t = Scalar::<Duration>::new(1.0, duration::FORTNIGHT);
    let v: Scalar<Speed> = d.divide_by(t);
    assert_relative_eq!(v.si(), 660.0 * 0.3048 / (14.0 * 86_400.0), max_relative = 1e-9);
}

#[test]
fn cross_kind_chain() {
    let m = Scalar::<Mass>::new(2.0, mass::KILOGRAM);
    let a = Scalar::<Acceleration>::standard(9.81);
    let f: Scalar<Force> = m * a;
    assert_eq!(f.unit(), force::NEWTON);
    let e: Scalar<Energy> = f * Scalar::<Length>::new(10.0, length::METER);
    assert_relative_eq!(e.in_unit_of(energy::JOULE), 196.2, epsilon = 1e-9);
    let p: Scalar<Power> = e / Scalar::<Duration>::new(2.0, duration::SECOND);
    assert_relative_eq!(p.si(), 98.1, epsilon = 1e-9);
    let ratio: Scalar<Dimensionless> = p / p;
    assert_eq!(ratio.value(), 1.0);
}

#[test]
fn absolute_and_relative_rules() {
    let start = Scalar::<Time>::new(0.0, duration::EPOCH_SECOND);
    let end = start + Scalar::<Duration>::new(1.5, duration::HOUR);
    let elapsed: Scalar<Duration> = end - start;
    assert_relative_eq!(elapsed.in_unit_of(duration::MINUTE), 90.0, epsilon = 1e-9);
    let back: Scalar<Time> = end - elapsed;
    assert_eq!(back, start);

    let north = Scalar::<Direction>::new(0.0, angle::NORTH_DEGREE);
    let east = Scalar::<Direction>::new(0.0, angle::EAST_DEGREE);
    assert_relative_eq!((north - east).si(), std::f64::consts::FRAC_PI_2, epsilon = 1e-12);

    let warm = Scalar::<AbsoluteTemperature>::new(25.0, temperature::DEGREE_CELSIUS_ABS);
    let delta = Scalar::<Temperature>::new(5.0, temperature::DEGREE_CELSIUS);
    let mut t = warm;
    t -= delta;
    assert_relative_eq!(t.in_unit(), 20.0, epsilon = 1e-9);
}

#[test]
fn parse_and_display() {
    let x: Scalar<Length> = "2.5 ft".parse().unwrap();
    assert_relative_eq!(x.si(), 0.762, epsilon = 1e-12);
    assert_eq!(format!("{x:.1}"), "2.5 ft");
    let err = "2.5 stone".parse::<Scalar<Mass>>().unwrap_err();
    assert_eq!(err, UnitError::UnknownUnit { kind: "Mass", id: "stone".to_string() });
}

#[test]
fn dynamic_si_values() {
    let v = Scalar::<Speed>::standard(3.0).into_si();
    let t = Scalar::<Duration>::standard(2.0).into_si();
    let d = (v * t).as_kind::<Length>().unwrap();
    assert_eq!(d.si(), 6.0);
    let s: SiScalar = "1 kg.m2.s-2".parse().unwrap();
    assert_eq!(s.dimensions(), Energy::DIMENSIONS);
    assert!(matches!(s.as_kind::<Power>(), Err(UnitError::InconsistentUnit(_))));
}
