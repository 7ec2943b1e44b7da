//! A single quantity: an SI value plus the unit it is displayed in.
//!
//! Scalars are `Copy`. A `mut` binding is the mutable form; [`Scalar::assign`] and
//! the compound assignment operators change it in place.
//!
//! ```
//! use measura::kind::{Duration, Length};
//! use measura::units::{duration, length};
//! use measura::Scalar;
//!
//! let distance = Scalar::<Length>::new(1000.0, length::FURLONG);
//! let time = Scalar::<Duration>::new(1.0, duration::FORTNIGHT);
//! let speed = distance / time;
//! assert!((speed.si() - 660.0 * 0.3048 / (14.0 * 86400.0)).abs() < 1e-12);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use super::{SiScalar, ValueFlags, write_number};
use crate::core::Real;
use crate::error::{Result, UnitError};
use crate::kind::{Abs, AbsoluteCounterpart, Dimensionless, KindDiv, KindMul, QuantityKind, RelativeKind};
use crate::unit::Unit;

/// A quantity of kind `K`, stored as an SI value of type `T`.
pub struct Scalar<K, T = f64> {
    si: T,
    unit: Unit<K>,
}

impl<K, T: Copy> Clone for Scalar<K, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, T: Copy> Copy for Scalar<K, T> {}

impl<K: QuantityKind, T: Real> Scalar<K, T> {
    /// `value` expressed in `unit`.
    pub fn new(value: T, unit: Unit<K>) -> Self {
        let si = if unit.scale().is_base_si() {
            value
        } else {
            T::of_f64(unit.to_standard(value.into_f64()))
        };
        Scalar { si, unit }
    }

    /// An SI value, displayed in `unit`.
    pub fn from_si(si: T, unit: Unit<K>) -> Self {
        Scalar { si, unit }
    }

    /// An SI value in the standard unit.
    pub fn standard(si: T) -> Self {
        Scalar { si, unit: K::STANDARD }
    }

    pub fn zero(unit: Unit<K>) -> Self {
        Scalar::from_si(T::zero(), unit)
    }

    #[inline]
    pub fn si(&self) -> T {
        self.si
    }

    #[inline]
    pub fn unit(&self) -> Unit<K> {
        self.unit
    }

    /// The value expressed in the display unit.
    pub fn in_unit(&self) -> T {
        self.in_unit_of(self.unit)
    }

    /// The value expressed in `target`.
    pub fn in_unit_of(&self, target: Unit<K>) -> T {
        if target.scale().is_base_si() {
            self.si
        } else {
            T::of_f64(target.from_standard(self.si.into_f64()))
        }
    }

    /// Same quantity, displayed in `target`.
    pub fn with_unit(self, target: Unit<K>) -> Self {
        Scalar { si: self.si, unit: target }
    }

    pub fn kind_name(&self) -> &'static str {
        K::NAME
    }

    pub fn flags(&self) -> ValueFlags {
        if K::ABSOLUTE { ValueFlags::ABSOLUTE } else { ValueFlags::empty() }
    }

    /// Applies `f` to the SI value in place.
    pub fn assign(&mut self, f: impl FnOnce(T) -> T) -> &mut Self {
        self.si = f(self.si);
        self
    }

    fn round_in_unit(self, f: impl FnOnce(f64) -> f64) -> Self {
        let value = f(self.in_unit().into_f64());
        Scalar::new(T::of_f64(value), self.unit)
    }

    /// Smallest whole number of display units not below the value.
    pub fn ceil(self) -> Self {
        self.round_in_unit(f64::ceil)
    }

    pub fn floor(self) -> Self {
        self.round_in_unit(f64::floor)
    }

    /// Round half to even, in the display unit.
    pub fn rint(self) -> Self {
        self.round_in_unit(f64::round_ties_even)
    }

    /// Round half away from zero, in the display unit.
    pub fn round(self) -> Self {
        self.round_in_unit(f64::round)
    }

    /// `zero * (1 - ratio) + one * ratio`, in the unit of `zero`. Ratios outside
    /// `[0, 1]` extrapolate.
    pub fn interpolate(zero: Self, one: Self, ratio: T) -> Self {
        let value = zero.in_unit() * (T::one() - ratio) + one.in_unit_of(zero.unit) * ratio;
        Scalar::new(value, zero.unit)
    }

    pub fn min(self, other: Self) -> Self {
        if other.si < self.si { other } else { self }
    }

    pub fn max(self, other: Self) -> Self {
        if other.si > self.si { other } else { self }
    }

    /// Smallest of `values`; fails when there are none.
    pub fn min_of(values: impl IntoIterator<Item = Self>) -> Result<Self> {
        values
            .into_iter()
            .reduce(Scalar::min)
            .ok_or_else(|| UnitError::InvalidArgument("min_of needs at least one value".to_string()))
    }

    pub fn max_of(values: impl IntoIterator<Item = Self>) -> Result<Self> {
        values
            .into_iter()
            .reduce(Scalar::max)
            .ok_or_else(|| UnitError::InvalidArgument("max_of needs at least one value".to_string()))
    }

    /// Total order on SI values (NaN sorts last).
    pub fn compare(&self, other: &Self) -> Ordering {
        self.si.into_f64().total_cmp(&other.si.into_f64())
    }

    pub fn gt0(&self) -> bool {
        self.si > T::zero()
    }

    pub fn ge0(&self) -> bool {
        self.si >= T::zero()
    }

    pub fn lt0(&self) -> bool {
        self.si < T::zero()
    }

    pub fn le0(&self) -> bool {
        self.si <= T::zero()
    }

    pub fn eq0(&self) -> bool {
        self.si == T::zero()
    }

    pub fn ne0(&self) -> bool {
        self.si != T::zero()
    }

    /// Sum, following the absolute/relative rules of `+`.
    pub fn plus<R>(self, rhs: R) -> <Self as Add<R>>::Output
    where
        Self: Add<R>,
    {
        self + rhs
    }

    /// Difference, following the absolute/relative rules of `-`.
    pub fn minus<R>(self, rhs: R) -> <Self as Sub<R>>::Output
    where
        Self: Sub<R>,
    {
        self - rhs
    }

    /// Product with a number (same kind) or with another quantity (kind from the
    /// multiplication table).
    pub fn times<R>(self, rhs: R) -> <Self as Mul<R>>::Output
    where
        Self: Mul<R>,
    {
        self * rhs
    }

    /// Quotient by a number (same kind) or by another quantity (kind from the
    /// division table).
    pub fn divide<R>(self, rhs: R) -> <Self as Div<R>>::Output
    where
        Self: Div<R>,
    {
        self / rhs
    }

    /// Quotient by another quantity; the result kind comes from the division table.
    pub fn divide_by<B>(self, rhs: Scalar<B, T>) -> <Self as Div<Scalar<B, T>>>::Output
    where
        Self: Div<Scalar<B, T>>,
    {
        self / rhs
    }

    /// Kind-erased SI value with its dimensions.
    pub fn into_si(self) -> SiScalar {
        SiScalar::new(self.si.into_f64(), K::DIMENSIONS)
    }

    /// Same quantity with another float width.
    pub fn cast<U: Real>(self) -> Scalar<K, U> {
        Scalar { si: U::of_f64(self.si.into_f64()), unit: self.unit }
    }
}

impl<K: RelativeKind, T: Real> Scalar<K, T> {
    pub fn abs(self) -> Self {
        Scalar { si: self.si.abs(), unit: self.unit }
    }
}

impl<K: AbsoluteCounterpart, T: Real> Scalar<Abs<K>, T> {
    /// Distance from the SI origin of the absolute scale, as a relative value.
    pub fn to_relative(self) -> Scalar<K, T> {
        Scalar::from_si(self.si, self.unit.relative_unit())
    }
}

impl<T: Real> Scalar<Dimensionless, T> {
    /// The plain number.
    pub fn value(&self) -> T {
        self.si
    }

    fn apply(self, f: impl FnOnce(T) -> T) -> Self {
        Scalar { si: f(self.si), unit: self.unit }
    }

    pub fn sin(self) -> Self {
        self.apply(T::sin)
    }
    pub fn cos(self) -> Self {
        self.apply(T::cos)
    }
    pub fn tan(self) -> Self {
        self.apply(T::tan)
    }
    pub fn asin(self) -> Self {
        self.apply(T::asin)
    }
    pub fn acos(self) -> Self {
        self.apply(T::acos)
    }
    pub fn atan(self) -> Self {
        self.apply(T::atan)
    }
    pub fn sinh(self) -> Self {
        self.apply(T::sinh)
    }
    pub fn cosh(self) -> Self {
        self.apply(T::cosh)
    }
    pub fn tanh(self) -> Self {
        self.apply(T::tanh)
    }
    pub fn exp(self) -> Self {
        self.apply(T::exp)
    }
    pub fn expm1(self) -> Self {
        self.apply(T::exp_m1)
    }
    /// Natural logarithm.
    pub fn log(self) -> Self {
        self.apply(T::ln)
    }
    pub fn log10(self) -> Self {
        self.apply(T::log10)
    }
    pub fn log1p(self) -> Self {
        self.apply(T::ln_1p)
    }
    pub fn sqrt(self) -> Self {
        self.apply(T::sqrt)
    }
    pub fn cbrt(self) -> Self {
        self.apply(T::cbrt)
    }
    pub fn pow(self, x: T) -> Self {
        self.apply(|v| v.powf(x))
    }
    /// -1, 0 or 1; NaN stays NaN.
    pub fn signum(self) -> Self {
        self.apply(|v| if v.is_zero() { v } else { v.signum() })
    }
    pub fn inv(self) -> Self {
        self.apply(T::recip)
    }
}

impl<T: Real> From<T> for Scalar<Dimensionless, T> {
    fn from(value: T) -> Self {
        Scalar::standard(value)
    }
}

// relative + relative
impl<K: RelativeKind, T: Real> Add for Scalar<K, T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        let unit = if self.unit == rhs.unit { self.unit } else { K::STANDARD };
        Scalar::from_si(self.si + rhs.si, unit)
    }
}

// absolute + relative
impl<K: AbsoluteCounterpart, T: Real> Add<Scalar<K, T>> for Scalar<Abs<K>, T> {
    type Output = Self;
    fn add(self, rhs: Scalar<K, T>) -> Self {
        let unit = if self.unit.id() == rhs.unit.id() { self.unit } else { Abs::<K>::STANDARD };
        Scalar::from_si(self.si + rhs.si, unit)
    }
}

// relative + absolute
impl<K: AbsoluteCounterpart, T: Real> Add<Scalar<Abs<K>, T>> for Scalar<K, T> {
    type Output = Scalar<Abs<K>, T>;
    fn add(self, rhs: Scalar<Abs<K>, T>) -> Scalar<Abs<K>, T> {
        rhs + self
    }
}

// relative - relative
impl<K: RelativeKind, T: Real> Sub for Scalar<K, T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        let unit = if self.unit == rhs.unit { self.unit } else { K::STANDARD };
        Scalar::from_si(self.si - rhs.si, unit)
    }
}

// absolute - absolute
impl<K: AbsoluteCounterpart, T: Real> Sub for Scalar<Abs<K>, T> {
    type Output = Scalar<K, T>;
    fn sub(self, rhs: Self) -> Scalar<K, T> {
        let unit = if self.unit == rhs.unit { self.unit.relative_unit() } else { K::STANDARD };
        Scalar::from_si(self.si - rhs.si, unit)
    }
}

// absolute - relative
impl<K: AbsoluteCounterpart, T: Real> Sub<Scalar<K, T>> for Scalar<Abs<K>, T> {
    type Output = Self;
    fn sub(self, rhs: Scalar<K, T>) -> Self {
        let unit = if self.unit.id() == rhs.unit.id() { self.unit } else { Abs::<K>::STANDARD };
        Scalar::from_si(self.si - rhs.si, unit)
    }
}

impl<K: RelativeKind, T: Real> Neg for Scalar<K, T> {
    type Output = Self;
    fn neg(self) -> Self {
        Scalar { si: -self.si, unit: self.unit }
    }
}

impl<K: RelativeKind, T: Real> AddAssign for Scalar<K, T> {
    fn add_assign(&mut self, rhs: Self) {
        self.si = self.si + rhs.si;
    }
}

impl<K: RelativeKind, T: Real> SubAssign for Scalar<K, T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.si = self.si - rhs.si;
    }
}

impl<K: AbsoluteCounterpart, T: Real> AddAssign<Scalar<K, T>> for Scalar<Abs<K>, T> {
    fn add_assign(&mut self, rhs: Scalar<K, T>) {
        self.si = self.si + rhs.si;
    }
}

impl<K: AbsoluteCounterpart, T: Real> SubAssign<Scalar<K, T>> for Scalar<Abs<K>, T> {
    fn sub_assign(&mut self, rhs: Scalar<K, T>) {
        self.si = self.si - rhs.si;
    }
}

macro_rules! scale_by_number {
    ($($t:ty),*) => {$(
        impl<K: RelativeKind> Mul<$t> for Scalar<K, $t> {
            type Output = Self;
            fn mul(self, factor: $t) -> Self {
                Scalar { si: self.si * factor, unit: self.unit }
            }
        }

        impl<K: RelativeKind> Mul<Scalar<K, $t>> for $t {
            type Output = Scalar<K, $t>;
            fn mul(self, rhs: Scalar<K, $t>) -> Scalar<K, $t> {
                rhs * self
            }
        }

        impl<K: RelativeKind> Div<$t> for Scalar<K, $t> {
            type Output = Self;
            fn div(self, divisor: $t) -> Self {
                Scalar { si: self.si / divisor, unit: self.unit }
            }
        }

        impl<K: RelativeKind> MulAssign<$t> for Scalar<K, $t> {
            fn mul_assign(&mut self, factor: $t) {
                self.si *= factor;
            }
        }

        impl<K: RelativeKind> DivAssign<$t> for Scalar<K, $t> {
            fn div_assign(&mut self, divisor: $t) {
                self.si /= divisor;
            }
        }
    )*};
}

scale_by_number!(f32, f64);

impl<A, B, T> Mul<Scalar<B, T>> for Scalar<A, T>
where
    A: KindMul<B>,
    B: QuantityKind,
    T: Real,
{
    type Output = Scalar<A::Output, T>;
    fn mul(self, rhs: Scalar<B, T>) -> Self::Output {
        Scalar::standard(self.si * rhs.si)
    }
}

impl<A, B, T> Div<Scalar<B, T>> for Scalar<A, T>
where
    A: KindDiv<B>,
    B: QuantityKind,
    T: Real,
{
    type Output = Scalar<A::Output, T>;
    fn div(self, rhs: Scalar<B, T>) -> Self::Output {
        Scalar::standard(self.si / rhs.si)
    }
}

impl<K, T: PartialEq> PartialEq for Scalar<K, T> {
    /// SI values compare; display units do not.
    fn eq(&self, other: &Self) -> bool {
        self.si == other.si
    }
}

impl<K, T: PartialOrd> PartialOrd for Scalar<K, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.si.partial_cmp(&other.si)
    }
}

impl<K: QuantityKind, T: Real> fmt::Debug for Scalar<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scalar")
            .field("kind", &K::NAME)
            .field("si", &self.si)
            .field("unit", &self.unit.id())
            .finish()
    }
}

impl<K: QuantityKind, T: Real> fmt::Display for Scalar<K, T> {
    /// `value unit`; the alternate form appends flags and the SI value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_number(f, self.in_unit())?;
        if !self.unit.abbreviation().is_empty() {
            write!(f, " {}", self.unit.abbreviation())?;
        }
        if f.alternate() {
            let flags = self.flags();
            if !flags.is_empty() {
                write!(f, " [{}]", flags.describe())?;
            }
            match K::STANDARD.abbreviation() {
                "" => write!(f, " ({})", self.si)?,
                abbr => write!(f, " ({} {abbr})", self.si)?,
            }
        }
        Ok(())
    }
}

impl<K: QuantityKind, T: Real> FromStr for Scalar<K, T> {
    type Err = UnitError;

    /// Parses `"<number> <unit>"`, or a number glued to its unit as in `"12.5km"`.
    /// The unit must match an abbreviation of the kind exactly.
    fn from_str(text: &str) -> Result<Self> {
        let text = text.trim();
        let parse_number = |s: &str| {
            s.trim()
                .parse::<f64>()
                .map_err(|e| UnitError::Parse(format!("bad number `{s}` in `{text}`: {e}")))
        };
        if let Some((number, id)) = text.split_once(char::is_whitespace) {
            let id = id.trim();
            let unit = K::unit_by_id(id)
                .ok_or_else(|| UnitError::UnknownUnit { kind: K::NAME, id: id.to_string() })?;
            return Ok(Scalar::new(T::of_f64(parse_number(number)?), unit));
        }
        let mut candidates: Vec<Unit<K>> = K::UNITS
            .iter()
            .copied()
            .filter(|u| text.ends_with(u.id()))
            .collect();
        candidates.sort_by_key(|u| std::cmp::Reverse(u.id().len()));
        for unit in candidates {
            let number = &text[..text.len() - unit.id().len()];
            if let Ok(value) = number.parse::<f64>() {
                return Ok(Scalar::new(T::of_f64(value), unit));
            }
        }
        match text.parse::<f64>() {
            Ok(_) => Err(UnitError::Parse(format!("`{text}` has no unit for kind {}", K::NAME))),
            Err(e) => Err(UnitError::Parse(format!("cannot parse `{text}` as a {} value: {e}", K::NAME))),
        }
    }
}
