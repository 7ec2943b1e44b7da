//! Conversion scales between a unit's representation and the standard (SI) one.

use serde::{Deserialize, Serialize};

/// Pure function pair converting a raw number to and from the standard unit.
///
/// `Linear` covers every multiplicative unit (kilometer, foot, hour). `OffsetLinear`
/// adds a zero shift before scaling, as needed by absolute temperatures and epochs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Scale {
    Linear { factor: f64 },
    OffsetLinear { factor: f64, offset: f64 },
}

impl Scale {
    /// The identity scale of a standard unit.
    pub const SI: Scale = Scale::Linear { factor: 1.0 };

    pub const fn linear(factor: f64) -> Self {
        Scale::Linear { factor }
    }

    pub const fn offset_linear(factor: f64, offset: f64) -> Self {
        Scale::OffsetLinear { factor, offset }
    }

    /// Multiplicative factor to the standard unit.
    pub const fn factor(&self) -> f64 {
        match *self {
            Scale::Linear { factor } | Scale::OffsetLinear { factor, .. } => factor,
        }
    }

    /// Additive offset applied before the factor (0 for linear scales).
    pub const fn offset(&self) -> f64 {
        match *self {
            Scale::Linear { .. } => 0.0,
            Scale::OffsetLinear { offset, .. } => offset,
        }
    }

    /// `(value [+ offset]) * factor`
    #[inline]
    pub fn to_standard(&self, value: f64) -> f64 {
        match *self {
            Scale::Linear { factor } => value * factor,
            Scale::OffsetLinear { factor, offset } => (value + offset) * factor,
        }
    }

    /// `(value / factor) [- offset]`
    #[inline]
    pub fn from_standard(&self, value: f64) -> f64 {
        match *self {
            Scale::Linear { factor } => value / factor,
            Scale::OffsetLinear { factor, offset } => value / factor - offset,
        }
    }

    /// True for the identity scale; conversions can then be skipped.
    pub const fn is_base_si(&self) -> bool {
        match *self {
            Scale::Linear { factor } => factor == 1.0,
            Scale::OffsetLinear { factor, offset } => factor == 1.0 && offset == 0.0,
        }
    }

    /// Scale whose factor is this one's multiplied by `factor`; offsets are dropped,
    /// since derived units are linear.
    pub const fn derive(&self, factor: f64) -> Scale {
        Scale::Linear { factor: self.factor() * factor }
    }

    /// Linear scale with the same factor; the relative counterpart of an absolute scale.
    pub const fn relative(&self) -> Scale {
        Scale::Linear { factor: self.factor() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn linear_round_trip() {
        let s = Scale::linear(0.3048);
        for v in [0.0, -12.5, 1.0e12, 3.75e-9] {
            assert_relative_eq!(s.from_standard(s.to_standard(v)), v, max_relative = 1e-14);
        }
        assert_eq!(s.to_standard(10.0), 3.048);
    }

    #[test]
    fn offset_linear_round_trip() {
        // degrees Fahrenheit to kelvin
        let s = Scale::offset_linear(5.0 / 9.0, 459.67);
        assert_relative_eq!(s.to_standard(32.0), 273.15, epsilon = 1e-9);
        for v in [0.0, -40.0, 212.0, 1.0e9] {
            assert_relative_eq!(s.from_standard(s.to_standard(v)), v, max_relative = 1e-12, epsilon = 1e-9);
        }
    }

    #[test]
    fn base_si_detection() {
        assert!(Scale::SI.is_base_si());
        assert!(Scale::offset_linear(1.0, 0.0).is_base_si());
        assert!(!Scale::offset_linear(1.0, 273.15).is_base_si());
        assert!(!Scale::linear(1000.0).is_base_si());
    }

    #[test]
    fn nan_propagates() {
        let s = Scale::offset_linear(2.0, 1.0);
        assert!(s.to_standard(f64::NAN).is_nan());
        assert_eq!(s.from_standard(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn derive_multiplies_factor() {
        let foot = Scale::linear(0.3048);
        let furlong = foot.derive(660.0);
        assert_eq!(furlong.factor(), 0.3048 * 660.0);
        assert_eq!(Scale::offset_linear(2.0, 5.0).relative(), Scale::linear(2.0));
    }
}
