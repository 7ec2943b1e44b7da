//! Persistence and unit registry tests for measura
//!
//! Values are written with `serde_json` and read back; the registry is queried
//! through the global catalog and through an explicitly built instance.

use approx::assert_relative_eq;
use measura::kind::{
    AbsoluteCounterpart, Angle, Direction, Duration, Energy, Length, QuantityKind, Speed, Temperature, Time, Torque,
};
use measura::units::{angle, duration, length, temperature, torque};
use measura::unit::RegistryBuilder;
use measura::{Matrix, MutableMatrix, Scalar, StorageType, UnitError, UnitRegistry, Vector};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing_subscriber::EnvFilter;

fn init_logs() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn scalar_json_round_trip() {
    let t = Scalar::<Time>::new(2.0, duration::EPOCH_DAY);
    let json = serde_json::to_string(&t).unwrap();
    assert_eq!(json, r#"{"si":172800.0,"unit":"day"}"#);
    let back: Scalar<Time> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, t);
    assert_eq!(back.unit(), duration::EPOCH_DAY);
}

#[test]
fn container_json_round_trip() {
    let v = Vector::<Temperature, f32>::new(&[1.0, 0.0, 2.0], temperature::KELVIN, StorageType::Dense).unwrap();
    let json = serde_json::to_string(&v).unwrap();
    let back: Vector<Temperature, f32> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, v);
    assert_eq!(back.storage_type(), StorageType::Dense);

    let rows = vec![vec![0.0, 1.5], vec![0.0, 0.0]];
    let m = Matrix::<Length>::new(&rows, length::KILOMETER, StorageType::Sparse).unwrap();
    let value = serde_json::to_value(&m).unwrap();
    assert_eq!(value["storage"], "SPARSE");
    assert_eq!(value["unit"], "km");
    let back: MutableMatrix<Length> = serde_json::from_value(value).unwrap();
    assert_eq!(back, m);
    assert_eq!(back.get_in_unit(0, 1).unwrap(), 1.5);
}

#[test]
fn corrupt_sparse_matrix_is_rejected() {
    let json = r#"{"storage":"SPARSE","unit":"m","nrows":2,"ncols":2,"row_ptr":[0,3,1],"col_idx":[0],"values":[1.0]}"#;
    assert!(serde_json::from_str::<Matrix<Length>>(json).is_err());
}

#[test]
fn global_registry_lookups() {
    init_logs();
    let reg = UnitRegistry::global();
    assert!(reg.contains_kind("Speed"));
    assert!(reg.contains_kind("AbsoluteTemperature"));
    assert_eq!(reg.dimensions("Speed"), Some(Speed::DIMENSIONS));
    assert_eq!(reg.is_absolute("Time"), Some(true));
    assert_eq!(reg.unit::<Duration>("ftn").unwrap(), duration::FORTNIGHT);
    assert_eq!(reg.unit_by_name::<Length>("furlong").unwrap(), length::FURLONG);
    assert!(matches!(reg.unit::<Length>("smoot"), Err(UnitError::UnknownUnit { .. })));
    let twins = reg.kinds_with_dimensions(Length::DIMENSIONS);
    assert!(twins.contains(&"Length") && twins.contains(&"Position"));
    reg.check_complete().unwrap();
}

#[test]
fn explicit_registry() {
    init_logs();
    let mut builder = RegistryBuilder::new();
    builder.register_kind::<Length>().unwrap().register_kind::<Time>().unwrap();
    let reg = builder.build().unwrap();
    assert_eq!(reg.kinds().count(), 2);
    assert_eq!(reg.standard_descriptor("Time").map(|d| d.key.id()), Some("s"));
    let mut dup = RegistryBuilder::new();
    dup.register(length::METER).unwrap();
    assert!(matches!(dup.register(length::METER), Err(UnitError::DuplicateUnit { .. })));
}

/// Writes `value` as JSON, reads it back and checks both the value and the unit id survive.
fn json_round_trip<V>(value: &V) -> V
where
    V: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
{
    let json = serde_json::to_string(value).unwrap();
    let back: V = serde_json::from_str(&json).unwrap_or_else(|e| panic!("{json}: {e}"));
    assert_eq!(&back, value, "{json}");
    back
}

/// Differences of two readings on every absolute unit of `K` persist and display
/// with a unit of the relative kind.
fn differences_persist<K: AbsoluteCounterpart>() {
    for unit in K::ABS_UNITS {
        let a = Scalar::new(10.0, *unit);
        let b = Scalar::new(4.0, *unit);
        let diff: Scalar<K> = a - b;
        assert_eq!(K::unit_by_id(diff.unit().id()), Some(diff.unit()), "{}", unit.id());
        let back = json_round_trip(&diff);
        assert_eq!(back.unit(), diff.unit());
        let parsed: Scalar<K> = diff.to_string().parse().unwrap();
        assert_eq!(parsed.unit(), diff.unit());
        assert_relative_eq!(parsed.si(), diff.si(), max_relative = 1e-12);
    }
}

#[test]
fn absolute_differences_round_trip() {
    differences_persist::<Duration>();
    differences_persist::<Angle>();
    differences_persist::<Temperature>();
    differences_persist::<Length>();

    let j2000 = Scalar::<Time>::new(10.0, duration::EPOCH_J2000) - Scalar::new(4.0, duration::EPOCH_J2000);
    assert_eq!(j2000.unit(), duration::SECOND);
    assert_eq!(serde_json::to_string(&j2000).unwrap(), r#"{"si":6.0,"unit":"s"}"#);
    let turn = Scalar::<Direction>::new(90.0, angle::NORTH_DEGREE) - Scalar::new(0.0, angle::NORTH_DEGREE);
    assert_eq!(turn.unit(), angle::DEGREE);
    assert_relative_eq!(turn.in_unit(), 90.0, epsilon = 1e-9);
}

#[test]
fn operation_results_round_trip() {
    let sum = Scalar::<Length>::new(1.0, length::KILOMETER).plus(Scalar::new(1.0, length::MILE));
    assert_eq!(json_round_trip(&sum).unit(), length::METER);
    let same = Scalar::<Length>::new(1.0, length::FOOT).plus(Scalar::new(2.0, length::FOOT));
    assert_eq!(json_round_trip(&same).unit(), length::FOOT);

    let diff = Scalar::<Time>::new(3.0, duration::EPOCH_DAY).minus(Scalar::<Time>::new(1.0, duration::EPOCH_DAY));
    assert_eq!(json_round_trip(&diff).unit(), duration::DAY);

    let speed: Scalar<Speed> =
        Scalar::<Length>::new(1000.0, length::FURLONG).divide_by(Scalar::<Duration>::new(1.0, duration::FORTNIGHT));
    let back = json_round_trip(&speed);
    let parsed: Scalar<Speed> = back.to_string().parse().unwrap();
    assert_relative_eq!(parsed.si(), speed.si(), max_relative = 1e-12);

    let readings = Vector::<Time>::new(&[10.0, 20.0], duration::EPOCH_J2000, StorageType::Sparse).unwrap();
    let origin = Vector::<Time>::new(&[4.0, 0.0], duration::EPOCH_J2000, StorageType::Dense).unwrap();
    let spans: Vector<Duration> = readings.minus(&origin).unwrap();
    assert_eq!(spans.unit(), duration::SECOND);
    assert_eq!(json_round_trip(&spans).values_si(), vec![6.0, 20.0]);

    let rows = vec![vec![0.0, 90.0], vec![180.0, 0.0]];
    let bearings = Matrix::<Direction>::new(&rows, angle::NORTH_DEGREE, StorageType::Dense).unwrap();
    let turns: Matrix<Angle> = bearings.minus(&bearings).unwrap();
    assert_eq!(turns.unit(), angle::DEGREE);
    json_round_trip(&turns);
}

#[test]
fn energy_and_torque_share_dimensions() {
    init_logs();
    let reg = UnitRegistry::global();
    let twins = reg.kinds_with_dimensions(Energy::DIMENSIONS);
    assert!(twins.contains(&"Energy") && twins.contains(&"Torque"));
    assert_eq!(reg.unit::<Torque>("lbf.ft").unwrap(), torque::POUND_FOOT);
    assert!(matches!(reg.unit::<Energy>("N.m"), Err(UnitError::UnknownUnit { .. })));

    let t: Scalar<Torque> = "12 N.m".parse().unwrap();
    let e = t.into_si().as_kind::<Energy>().unwrap();
    assert_eq!(e.si(), 12.0);
    assert_eq!(json_round_trip(&t).unit(), torque::NEWTON_METER);
}
