//! Kind-erased SI values.
//!
//! Products and quotients of quantities whose result kind is not in the
//! multiplication table are carried as an [`SiScalar`]: a plain SI value with its
//! dimension exponents. [`SiScalar::as_kind`] turns it back into a typed scalar once
//! the dimensions match a kind.

use std::fmt;
use std::ops::{Div, Mul};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Scalar;
use crate::error::{Result, UnitError};
use crate::kind::QuantityKind;
use crate::unit::SiDimensions;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SiScalar {
    si: f64,
    dimensions: SiDimensions,
}

impl SiScalar {
    pub const fn new(si: f64, dimensions: SiDimensions) -> Self {
        SiScalar { si, dimensions }
    }

    pub fn si(&self) -> f64 {
        self.si
    }

    pub fn dimensions(&self) -> SiDimensions {
        self.dimensions
    }

    /// Sum; both sides must have the same dimensions.
    pub fn plus(self, other: SiScalar) -> Result<SiScalar> {
        self.check_same(&other, "add")?;
        Ok(SiScalar::new(self.si + other.si, self.dimensions))
    }

    pub fn minus(self, other: SiScalar) -> Result<SiScalar> {
        self.check_same(&other, "subtract")?;
        Ok(SiScalar::new(self.si - other.si, self.dimensions))
    }

    /// Product that fails with `InconsistentUnit` when an exponent overflows.
    /// The `*` operator saturates the exponents instead.
    pub fn times(self, other: SiScalar) -> Result<SiScalar> {
        let dimensions = self.dimensions.checked_plus(other.dimensions).ok_or_else(|| {
            UnitError::InconsistentUnit(format!(
                "exponents of {} times {} overflow",
                self.dimensions, other.dimensions
            ))
        })?;
        Ok(SiScalar::new(self.si * other.si, dimensions))
    }

    /// Quotient, checked like [`times`](Self::times).
    pub fn divide(self, other: SiScalar) -> Result<SiScalar> {
        let dimensions = self.dimensions.checked_minus(other.dimensions).ok_or_else(|| {
            UnitError::InconsistentUnit(format!(
                "exponents of {} divided by {} overflow",
                self.dimensions, other.dimensions
            ))
        })?;
        Ok(SiScalar::new(self.si / other.si, dimensions))
    }

    pub fn inv(self) -> SiScalar {
        SiScalar::new(1.0 / self.si, self.dimensions.invert())
    }

    /// Typed scalar of kind `K` in its standard unit.
    pub fn as_kind<K: QuantityKind>(self) -> Result<Scalar<K>> {
        if self.dimensions != K::DIMENSIONS {
            return Err(UnitError::InconsistentUnit(format!(
                "{} has dimensions {}, not {}",
                K::NAME,
                K::DIMENSIONS,
                self.dimensions
            )));
        }
        Ok(Scalar::standard(self.si))
    }

    fn check_same(&self, other: &SiScalar, op: &str) -> Result<()> {
        if self.dimensions != other.dimensions {
            return Err(UnitError::InconsistentUnit(format!(
                "cannot {op} {} and {}",
                self.dimensions, other.dimensions
            )));
        }
        Ok(())
    }
}

/// Exponents saturate at the `i8` range; [`SiScalar::times`] reports overflow.
impl Mul for SiScalar {
    type Output = SiScalar;
    fn mul(self, rhs: SiScalar) -> SiScalar {
        SiScalar::new(self.si * rhs.si, self.dimensions.plus(rhs.dimensions))
    }
}

/// Exponents saturate at the `i8` range; [`SiScalar::divide`] reports overflow.
impl Div for SiScalar {
    type Output = SiScalar;
    fn div(self, rhs: SiScalar) -> SiScalar {
        SiScalar::new(self.si / rhs.si, self.dimensions.minus(rhs.dimensions))
    }
}

impl fmt::Display for SiScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::write_number(f, self.si)?;
        if !self.dimensions.is_dimensionless() {
            write!(f, " {}", self.dimensions)?;
        }
        Ok(())
    }
}

impl FromStr for SiScalar {
    type Err = UnitError;

    /// `"9.81 m/s2"`; a bare number is dimensionless.
    fn from_str(text: &str) -> Result<Self> {
        let text = text.trim();
        let (number, dims) = text.split_once(char::is_whitespace).unwrap_or((text, "1"));
        let si = number
            .parse::<f64>()
            .map_err(|e| UnitError::Parse(format!("bad number `{number}` in `{text}`: {e}")))?;
        Ok(SiScalar::new(si, SiDimensions::parse(dims)?))
    }
}
