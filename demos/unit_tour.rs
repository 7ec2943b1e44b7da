use measura::kind::{AbsoluteTemperature, Dimensionless, Duration, Length, Speed, Temperature};
use measura::units::{dimensionless, duration, length, temperature};
use measura::{Scalar, StorageType, Vector};
use rand::Rng;

fn main() {
    // the classic: furlongs per fortnight
    let d = Scalar::<Length>::new(1000.0, length::FURLONG);
    let t = Scalar::<Duration>::new(1.0, duration::FORTNIGHT);
    let v: Scalar<Speed> = d / t;
    println!("{d} in {t} = {v:.6} = {:#}", v);

    // absolute readings and differences
    let freezing = Scalar::<AbsoluteTemperature>::new(32.0, temperature::DEGREE_FAHRENHEIT_ABS);
    let boiling = freezing + Scalar::<Temperature>::new(180.0, temperature::DEGREE_FAHRENHEIT);
    println!("{freezing:.2} -> {:.2}", boiling.with_unit(temperature::DEGREE_CELSIUS_ABS));

    // a sparse random vector, normalized in place
    let mut rng = rand::thread_rng();
    let cells: Vec<f64> = (0..12).map(|i| if i % 3 == 0 { rng.gen_range(1.0..10.0) } else { 0.0 }).collect();
    let mut weights = Vector::<Dimensionless>::new(&cells, dimensionless::UNIT, StorageType::Sparse)
        .unwrap()
        .mutable();
    weights.normalize().unwrap();
    println!("weights = {weights:.3}, sum = {}", weights.zsum());
}
