//! Typed values: scalars, vectors and matrices tagged with a quantity kind.

pub mod access;
pub mod matrix;
pub mod scalar;
pub mod si;
pub mod vector;

mod serde_repr;

pub use access::{Access, Immutable, Mutable};
pub use matrix::{Matrix, MutableMatrix};
pub use scalar::Scalar;
pub use si::SiScalar;
pub use vector::{MutableVector, Vector};

use bitflags::bitflags;

use crate::error::Result;

/// Element-wise sum of two containers, following the absolute/relative rules of
/// scalar `+`. Fails when the shapes differ.
pub trait TryAdd<Rhs> {
    type Output;
    fn try_add(&self, rhs: &Rhs) -> Result<Self::Output>;
}

/// Element-wise difference, following the absolute/relative rules of scalar `-`.
pub trait TrySub<Rhs> {
    type Output;
    fn try_sub(&self, rhs: &Rhs) -> Result<Self::Output>;
}

bitflags! {
    /// Traits of a value, shown by the alternate (`{:#}`) display form.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ValueFlags: u8 {
        const MUTABLE = 1 << 0;
        const ABSOLUTE = 1 << 1;
        const SPARSE = 1 << 2;
    }
}

impl ValueFlags {
    pub(crate) fn describe(self) -> String {
        let mut parts = Vec::new();
        if self.contains(ValueFlags::MUTABLE) {
            parts.push("mutable");
        }
        if self.contains(ValueFlags::ABSOLUTE) {
            parts.push("absolute");
        }
        if self.contains(ValueFlags::SPARSE) {
            parts.push("sparse");
        }
        parts.join(",")
    }
}

/// Writes `value` honoring the formatter's precision.
pub(crate) fn write_number<T: std::fmt::Display>(f: &mut std::fmt::Formatter<'_>, value: T) -> std::fmt::Result {
    match f.precision() {
        Some(p) => write!(f, "{value:.p$}"),
        None => write!(f, "{value}"),
    }
}
