//! measura: strongly typed physical quantities over faer
//!
//! This crate provides scalars, vectors and matrices tagged with a quantity kind
//! (length, duration, absolute temperature, ...) at the type level. Values are
//! stored in SI units and carry a display unit; containers use dense (`faer`) or
//! sparse (CSR) storage. Adding a length to a mass does not compile, and dividing
//! a length by a duration yields a speed.
//!
//! ```
//! use measura::kind::{AbsoluteTemperature, Temperature};
//! use measura::units::temperature;
//! use measura::Scalar;
//!
//! let reading = Scalar::<AbsoluteTemperature>::new(32.0, temperature::DEGREE_FAHRENHEIT_ABS);
//! let warmer = reading + Scalar::<Temperature>::new(10.0, temperature::KELVIN);
//! assert!((warmer.si() - 283.15).abs() < 1e-9);
//! ```

pub mod parallel;

pub mod config;
pub mod core;
pub mod error;
pub mod kind;
pub mod storage;
pub mod unit;
pub mod units;
pub mod value;

// Re-exports for convenience
pub use config::*;
pub use core::*;
pub use error::*;
pub use storage::{MatrixData, StorageType, VectorData};
pub use unit::{Scale, SiDimensions, Unit, UnitRegistry, UnitSystem};
pub use value::{Matrix, MutableMatrix, MutableVector, Scalar, SiScalar, ValueFlags, Vector};
