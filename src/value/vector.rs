//! One-dimensional containers of quantities.

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use super::{Access, Immutable, Mutable, Scalar, TryAdd, TrySub, ValueFlags, write_number};
use crate::core::{Real, Storage};
use crate::error::{Result, UnitError, check_index};
use crate::kind::{Abs, AbsoluteCounterpart, Dimensionless, KindDiv, KindMul, QuantityKind, RelativeKind};
use crate::storage::{StorageType, VectorData};
use crate::unit::Unit;

/// A vector of kind-`K` quantities, stored as SI values with one display unit.
///
/// `M` is the access state: [`Immutable`] (default) or [`Mutable`].
pub struct Vector<K, T = f64, M = Immutable> {
    data: VectorData<T>,
    unit: Unit<K>,
    _access: PhantomData<M>,
}

pub type MutableVector<K, T = f64> = Vector<K, T, Mutable>;

impl<K, T: Clone, M> Clone for Vector<K, T, M> {
    fn clone(&self) -> Self {
        Vector { data: self.data.clone(), unit: self.unit, _access: PhantomData }
    }
}

fn check_sizes(a: usize, b: usize) -> Result<()> {
    if a != b {
        return Err(UnitError::InvalidArgument(format!("vector sizes differ: {a} and {b}")));
    }
    Ok(())
}

impl<K: QuantityKind, T: Real, M: Access> Vector<K, T, M> {
    pub(crate) fn wrap(data: VectorData<T>, unit: Unit<K>) -> Self {
        Vector { data, unit, _access: PhantomData }
    }

    /// Vector of `values` expressed in `unit`.
    pub fn new(values: &[T], unit: Unit<K>, storage: StorageType) -> Result<Self> {
        let si = values.iter().map(|&v| Scalar::new(v, unit).si()).collect();
        Ok(Vector::wrap(VectorData::new(si, storage)?, unit))
    }

    /// Vector of SI values, displayed in `unit`.
    pub fn from_si(values: Vec<T>, unit: Unit<K>, storage: StorageType) -> Result<Self> {
        Ok(Vector::wrap(VectorData::new(values, storage)?, unit))
    }

    /// Vector of individual scalars; the display unit is that of the first one.
    pub fn from_scalars(scalars: &[Scalar<K, T>], storage: StorageType) -> Result<Self> {
        let Some(first) = scalars.first() else {
            return Err(UnitError::InvalidArgument("no scalars to build a vector from".to_string()));
        };
        let si = scalars.iter().map(Scalar::si).collect();
        Ok(Vector::wrap(VectorData::new(si, storage)?, first.unit()))
    }

    /// Vector of `len` cells from an index map of values in `unit`. Absent cells
    /// hold SI zero.
    pub fn from_map(values: &BTreeMap<usize, T>, len: usize, unit: Unit<K>, storage: StorageType) -> Result<Self> {
        let pairs = values.iter().map(|(&i, &v)| (i, Scalar::new(v, unit).si()));
        Ok(Vector::wrap(VectorData::from_pairs(len, pairs, storage)?, unit))
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn unit(&self) -> Unit<K> {
        self.unit
    }

    pub fn storage_type(&self) -> StorageType {
        self.data.storage_type()
    }

    /// Number of non-zero SI cells.
    pub fn cardinality(&self) -> usize {
        self.data.cardinality()
    }

    pub fn flags(&self) -> ValueFlags {
        let mut flags = ValueFlags::empty();
        flags.set(ValueFlags::MUTABLE, M::MUTABLE);
        flags.set(ValueFlags::ABSOLUTE, K::ABSOLUTE);
        flags.set(ValueFlags::SPARSE, self.storage_type() == StorageType::Sparse);
        flags
    }

    pub(crate) fn data(&self) -> &VectorData<T> {
        &self.data
    }

    pub fn get(&self, index: usize) -> Result<Scalar<K, T>> {
        Ok(Scalar::from_si(self.get_si(index)?, self.unit))
    }

    pub fn get_si(&self, index: usize) -> Result<T> {
        check_index(index, self.size())?;
        Ok(self.data.get(index))
    }

    pub fn get_in_unit(&self, index: usize) -> Result<T> {
        Ok(self.get(index)?.in_unit())
    }

    pub fn values_si(&self) -> Vec<T> {
        self.data.to_vec()
    }

    pub fn values_in_unit(&self) -> Vec<T> {
        self.iter().map(|s| s.in_unit()).collect()
    }

    pub fn scalars(&self) -> Vec<Scalar<K, T>> {
        self.iter().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = Scalar<K, T>> + '_ {
        (0..self.size()).map(|i| Scalar::from_si(self.data.get(i), self.unit))
    }

    /// Sum of all cells, in the display unit.
    pub fn zsum(&self) -> Scalar<K, T> {
        Scalar::from_si(self.data.sum(), self.unit)
    }

    /// Same vector, dense. Returns `self` when already dense.
    pub fn to_dense(self) -> Self {
        Vector::wrap(self.data.to_dense(), self.unit)
    }

    /// Same vector, sparse. Returns `self` when already sparse.
    pub fn to_sparse(self) -> Self {
        Vector::wrap(self.data.to_sparse(), self.unit)
    }

    /// Same vector in the layout [`StorageType::auto`] picks for its contents.
    pub fn to_optimal(self) -> Self {
        match self.data.optimal_storage() {
            StorageType::Dense => self.to_dense(),
            StorageType::Sparse => self.to_sparse(),
        }
    }

    pub fn with_unit(self, unit: Unit<K>) -> Self {
        Vector::wrap(self.data, unit)
    }

    /// Mutable deep copy.
    pub fn mutable(&self) -> MutableVector<K, T> {
        Vector::wrap(self.data.copy(), self.unit)
    }

    /// Immutable deep copy.
    pub fn immutable(&self) -> Vector<K, T> {
        Vector::wrap(self.data.copy(), self.unit)
    }

    /// Immutable vector owning these cells.
    pub fn freeze(self) -> Vector<K, T> {
        Vector::wrap(self.data, self.unit)
    }

    /// Sum, following the absolute/relative rules of scalar `+`.
    pub fn plus<R>(&self, rhs: &R) -> Result<<Self as TryAdd<R>>::Output>
    where
        Self: TryAdd<R>,
    {
        self.try_add(rhs)
    }

    /// Difference, following the absolute/relative rules of scalar `-`.
    pub fn minus<R>(&self, rhs: &R) -> Result<<Self as TrySub<R>>::Output>
    where
        Self: TrySub<R>,
    {
        self.try_sub(rhs)
    }

    fn combine<K2, M2, KO>(&self, other: &Vector<K2, T, M2>, unit: Unit<KO>, f: fn(T, T) -> T) -> Result<Vector<KO, T, M>>
    where
        K2: QuantityKind,
        M2: Access,
        KO: QuantityKind,
    {
        check_sizes(self.size(), other.size())?;
        Ok(Vector::wrap(self.data.zip(&other.data, f), unit))
    }

    /// Cell-wise product; the result kind comes from the multiplication table.
    pub fn times_elements<B, M2>(&self, other: &Vector<B, T, M2>) -> Result<Vector<K::Output, T, M>>
    where
        K: KindMul<B>,
        B: QuantityKind,
        M2: Access,
    {
        self.combine(other, <K::Output as QuantityKind>::STANDARD, |a, b| a * b)
    }

    /// Cell-wise quotient; the result kind comes from the division table. Always
    /// computed densely, then stored in this vector's layout.
    pub fn divide_elements<B, M2>(&self, other: &Vector<B, T, M2>) -> Result<Vector<K::Output, T, M>>
    where
        K: KindDiv<B>,
        B: QuantityKind,
        M2: Access,
    {
        check_sizes(self.size(), other.size())?;
        let a = self.data.clone().to_dense();
        let b = other.data.clone().to_dense();
        let out = Vector::wrap(a.zip(&b, |x, y| x / y), <K::Output as QuantityKind>::STANDARD);
        Ok(match self.storage_type() {
            StorageType::Dense => out,
            StorageType::Sparse => out.to_sparse(),
        })
    }

    fn map_in_unit(&self, f: fn(f64) -> f64) -> VectorData<T> {
        let unit = self.unit;
        self.data.map(move |si| {
            let value = f(unit.from_standard(si.into_f64()));
            T::of_f64(unit.to_standard(value))
        })
    }
}

impl<K: RelativeKind, T: Real, M: Access> Vector<K, T, M> {
    /// Every cell times `factor`.
    pub fn times(&self, factor: T) -> Self {
        Vector::wrap(self.data.map(move |v| v * factor), self.unit)
    }

    pub fn divide(&self, divisor: T) -> Self {
        Vector::wrap(self.data.map(move |v| v / divisor), self.unit)
    }
}

impl<K: QuantityKind, T: Real> MutableVector<K, T> {
    pub fn set(&mut self, index: usize, value: Scalar<K, T>) -> Result<&mut Self> {
        self.set_si(index, value.si())
    }

    pub fn set_si(&mut self, index: usize, si: T) -> Result<&mut Self> {
        check_index(index, self.size())?;
        self.data.set(index, si);
        Ok(self)
    }

    pub fn set_in_unit(&mut self, index: usize, value: T) -> Result<&mut Self> {
        let si = Scalar::new(value, self.unit).si();
        self.set_si(index, si)
    }

    /// Applies `f` to every SI value.
    pub fn assign<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(T) -> T + Send + Sync,
    {
        self.data = self.data.map(f);
        self
    }

    pub fn ceil(&mut self) -> &mut Self {
        self.data = self.map_in_unit(f64::ceil);
        self
    }

    pub fn floor(&mut self) -> &mut Self {
        self.data = self.map_in_unit(f64::floor);
        self
    }

    pub fn rint(&mut self) -> &mut Self {
        self.data = self.map_in_unit(f64::round_ties_even);
        self
    }

    pub fn round(&mut self) -> &mut Self {
        self.data = self.map_in_unit(f64::round);
        self
    }
}

impl<K: RelativeKind, T: Real> MutableVector<K, T> {
    /// Scale so the cells sum to one. Fails when they sum to zero.
    pub fn normalize(&mut self) -> Result<&mut Self> {
        let sum = self.data.sum();
        if sum.is_zero() {
            return Err(UnitError::InvalidArgument("cannot normalize a vector that sums to zero".to_string()));
        }
        self.data = self.data.map(move |v| v / sum);
        Ok(self)
    }

    pub fn increment_by<M2: Access>(&mut self, other: &Vector<K, T, M2>) -> Result<&mut Self> {
        check_sizes(self.size(), other.size())?;
        self.data = self.data.zip(&other.data, |a, b| a + b);
        Ok(self)
    }

    pub fn decrement_by<M2: Access>(&mut self, other: &Vector<K, T, M2>) -> Result<&mut Self> {
        check_sizes(self.size(), other.size())?;
        self.data = self.data.zip(&other.data, |a, b| a - b);
        Ok(self)
    }

    pub fn multiply_by(&mut self, factor: T) -> &mut Self {
        self.data = self.data.map(move |v| v * factor);
        self
    }

    pub fn divide_by(&mut self, divisor: T) -> &mut Self {
        self.data = self.data.map(move |v| v / divisor);
        self
    }

    pub fn abs(&mut self) -> &mut Self {
        self.data = self.data.map(T::abs);
        self
    }

    pub fn neg(&mut self) -> &mut Self {
        self.data = self.data.map(|v| -v);
        self
    }
}

impl<K: AbsoluteCounterpart, T: Real> MutableVector<Abs<K>, T> {
    pub fn increment_by<M2: Access>(&mut self, other: &Vector<K, T, M2>) -> Result<&mut Self> {
        check_sizes(self.size(), other.size())?;
        self.data = self.data.zip(&other.data, |a, b| a + b);
        Ok(self)
    }

    pub fn decrement_by<M2: Access>(&mut self, other: &Vector<K, T, M2>) -> Result<&mut Self> {
        check_sizes(self.size(), other.size())?;
        self.data = self.data.zip(&other.data, |a, b| a - b);
        Ok(self)
    }
}

// relative + relative
impl<K: RelativeKind, T: Real, M: Access, M2: Access> TryAdd<Vector<K, T, M2>> for Vector<K, T, M> {
    type Output = Vector<K, T, M>;
    fn try_add(&self, rhs: &Vector<K, T, M2>) -> Result<Self::Output> {
        let unit = if self.unit == rhs.unit { self.unit } else { K::STANDARD };
        self.combine(rhs, unit, |a, b| a + b)
    }
}

// absolute + relative
impl<K: AbsoluteCounterpart, T: Real, M: Access, M2: Access> TryAdd<Vector<K, T, M2>> for Vector<Abs<K>, T, M> {
    type Output = Vector<Abs<K>, T, M>;
    fn try_add(&self, rhs: &Vector<K, T, M2>) -> Result<Self::Output> {
        let unit = if self.unit.id() == rhs.unit.id() { self.unit } else { Abs::<K>::STANDARD };
        self.combine(rhs, unit, |a, b| a + b)
    }
}

// relative + absolute
impl<K: AbsoluteCounterpart, T: Real, M: Access, M2: Access> TryAdd<Vector<Abs<K>, T, M2>> for Vector<K, T, M> {
    type Output = Vector<Abs<K>, T, M>;
    fn try_add(&self, rhs: &Vector<Abs<K>, T, M2>) -> Result<Self::Output> {
        let unit = if self.unit.id() == rhs.unit.id() { rhs.unit } else { Abs::<K>::STANDARD };
        self.combine(rhs, unit, |a, b| a + b)
    }
}

// relative - relative
impl<K: RelativeKind, T: Real, M: Access, M2: Access> TrySub<Vector<K, T, M2>> for Vector<K, T, M> {
    type Output = Vector<K, T, M>;
    fn try_sub(&self, rhs: &Vector<K, T, M2>) -> Result<Self::Output> {
        let unit = if self.unit == rhs.unit { self.unit } else { K::STANDARD };
        self.combine(rhs, unit, |a, b| a - b)
    }
}

// absolute - absolute
impl<K: AbsoluteCounterpart, T: Real, M: Access, M2: Access> TrySub<Vector<Abs<K>, T, M2>> for Vector<Abs<K>, T, M> {
    type Output = Vector<K, T, M>;
    fn try_sub(&self, rhs: &Vector<Abs<K>, T, M2>) -> Result<Self::Output> {
        let unit = if self.unit == rhs.unit { self.unit.relative_unit() } else { K::STANDARD };
        self.combine(rhs, unit, |a, b| a - b)
    }
}

// absolute - relative
impl<K: AbsoluteCounterpart, T: Real, M: Access, M2: Access> TrySub<Vector<K, T, M2>> for Vector<Abs<K>, T, M> {
    type Output = Vector<Abs<K>, T, M>;
    fn try_sub(&self, rhs: &Vector<K, T, M2>) -> Result<Self::Output> {
        let unit = if self.unit.id() == rhs.unit.id() { self.unit } else { Abs::<K>::STANDARD };
        self.combine(rhs, unit, |a, b| a - b)
    }
}

macro_rules! cellwise_math {
    ($($(#[$meta:meta])* $name:ident => $f:expr;)*) => {
        impl<T: Real, M: Access> Vector<Dimensionless, T, M> {
            $($(#[$meta])*
            pub fn $name(&self) -> Self {
                Vector::wrap(self.data.map($f), self.unit)
            })*

            pub fn pow(&self, x: T) -> Self {
                Vector::wrap(self.data.map(move |v| v.powf(x)), self.unit)
            }
        }
    };
}

cellwise_math! {
    sin => T::sin;
    cos => T::cos;
    tan => T::tan;
    asin => T::asin;
    acos => T::acos;
    atan => T::atan;
    sinh => T::sinh;
    cosh => T::cosh;
    tanh => T::tanh;
    exp => T::exp;
    expm1 => T::exp_m1;
    /// Natural logarithm.
    log => T::ln;
    log10 => T::log10;
    log1p => T::ln_1p;
    sqrt => T::sqrt;
    cbrt => T::cbrt;
    signum => |v: T| if v.is_zero() { v } else { v.signum() };
    inv => T::recip;
}

impl<K, T, M, M2> PartialEq<Vector<K, T, M2>> for Vector<K, T, M>
where
    K: QuantityKind,
    T: Real,
    M: Access,
    M2: Access,
{
    /// SI cells compare, independent of layout and display unit.
    fn eq(&self, other: &Vector<K, T, M2>) -> bool {
        self.size() == other.size() && (0..self.size()).all(|i| self.data.get(i) == other.data.get(i))
    }
}

impl<K: QuantityKind, T: Real, M: Access> fmt::Debug for Vector<K, T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("kind", &K::NAME)
            .field("unit", &self.unit.id())
            .field("mutable", &M::MUTABLE)
            .field("data", &self.data)
            .finish()
    }
}

impl<K: QuantityKind, T: Real, M: Access> fmt::Display for Vector<K, T, M> {
    /// `[1, 2, 3] km`; the alternate form appends the flags.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write_number(f, value.in_unit())?;
        }
        f.write_str("]")?;
        if !self.unit.abbreviation().is_empty() {
            write!(f, " {}", self.unit.abbreviation())?;
        }
        if f.alternate() {
            let flags = self.flags();
            if !flags.is_empty() {
                write!(f, " [{}]", flags.describe())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::{Area, Duration, Length, Position, Speed};
    use crate::units::{dimensionless, duration, length, speed};
    use approx::assert_relative_eq;

    fn km(values: &[f64], storage: StorageType) -> Vector<Length> {
        Vector::new(values, length::KILOMETER, storage).unwrap()
    }

    #[test]
    fn construction_and_access() {
        let v = km(&[1.0, 0.0, 2.5], StorageType::Sparse);
        assert_eq!(v.size(), 3);
        assert_eq!(v.cardinality(), 2);
        assert_eq!(v.values_si(), vec![1000.0, 0.0, 2500.0]);
        assert_eq!(v.values_in_unit(), vec![1.0, 0.0, 2.5]);
        assert_eq!(v.get(2).unwrap(), Scalar::new(2.5, length::KILOMETER));
        assert!(matches!(v.get(3), Err(UnitError::IndexOutOfRange(_))));
        assert_eq!(v.zsum().in_unit(), 3.5);
        assert!(Vector::<Length>::new(&[], length::METER, StorageType::Dense).is_err());
    }

    #[test]
    fn from_scalars_takes_first_unit() {
        let cells = [Scalar::new(1.0, length::MILE), Scalar::new(10.0, length::METER)];
        let v = Vector::<Length>::from_scalars(&cells, StorageType::Dense).unwrap();
        assert_eq!(v.unit(), length::MILE);
        assert_relative_eq!(v.get_si(1).unwrap(), 10.0);
        assert!(matches!(Vector::<Length>::from_scalars(&[], StorageType::Dense), Err(UnitError::InvalidArgument(_))));
    }

    #[test]
    fn from_map_fills_zeros() {
        let map = BTreeMap::from([(1, 2.0), (4, 3.0)]);
        let v = Vector::<Length>::from_map(&map, 6, length::KILOMETER, StorageType::Sparse).unwrap();
        assert_eq!(v.values_si(), vec![0.0, 2000.0, 0.0, 0.0, 3000.0, 0.0]);
        assert!(Vector::<Length>::from_map(&map, 4, length::METER, StorageType::Dense).is_err());
    }

    #[test]
    fn layout_conversions_keep_values() {
        let v = km(&[0.0, 3.0, 0.0, 0.0], StorageType::Dense);
        let s = v.clone().to_sparse();
        assert_eq!(s.storage_type(), StorageType::Sparse);
        assert_eq!(s, v);
        let back = s.to_dense();
        assert_eq!(back.storage_type(), StorageType::Dense);
        assert_eq!(back.values_si(), v.values_si());
        assert_eq!(v.to_optimal().storage_type(), StorageType::Sparse);
    }

    #[test]
    fn plus_minus_and_units() {
        let a = km(&[1.0, 2.0], StorageType::Dense);
        let b = km(&[0.5, 0.5], StorageType::Sparse);
        let sum = a.plus(&b).unwrap();
        assert_eq!(sum.unit(), length::KILOMETER);
        assert_eq!(sum.values_in_unit(), vec![1.5, 2.5]);
        let m = Vector::<Length>::new(&[1.0, 1.0], length::METER, StorageType::Dense).unwrap();
        let diff = a.minus(&m).unwrap();
        assert_eq!(diff.unit(), length::METER);
        assert_eq!(diff.values_si(), vec![999.0, 1999.0]);
        let short = km(&[1.0], StorageType::Dense);
        assert!(matches!(a.plus(&short), Err(UnitError::InvalidArgument(_))));
    }

    #[test]
    fn absolute_vectors() {
        let origin = Vector::<Position>::new(&[1.0, 2.0], length::KILOMETER_ABS, StorageType::Dense).unwrap();
        let moved = origin.plus(&km(&[1.0, 1.0], StorageType::Dense)).unwrap();
        assert_eq!(moved.unit(), length::KILOMETER_ABS);
        assert_eq!(moved.values_in_unit(), vec![2.0, 3.0]);
        let gap: Vector<Length> = moved.minus(&origin).unwrap();
        assert_eq!(gap.unit(), length::KILOMETER);
        assert_eq!(gap.values_in_unit(), vec![1.0, 1.0]);
        let back: Vector<Position> = moved.minus(&gap).unwrap();
        assert_eq!(back, origin);
        assert!(back.flags().contains(ValueFlags::ABSOLUTE));
    }

    #[test]
    fn cross_kind_elements() {
        let d = Vector::<Length>::new(&[100.0, 200.0], length::METER, StorageType::Dense).unwrap();
        let t = Vector::<Duration>::new(&[10.0, 20.0], duration::SECOND, StorageType::Dense).unwrap();
        let v: Vector<Speed> = d.divide_elements(&t).unwrap();
        assert_eq!(v.unit(), speed::METER_PER_SECOND);
        assert_eq!(v.values_si(), vec![10.0, 10.0]);
        let a: Vector<Area> = d.times_elements(&d).unwrap();
        assert_eq!(a.values_si(), vec![10_000.0, 40_000.0]);
        assert_eq!(d.times(2.0).divide(4.0).values_si(), vec![50.0, 100.0]);
    }

    #[test]
    fn normalize() {
        let mut v = Vector::<Dimensionless>::new(&[1.0, 2.0, 3.0, 4.0], dimensionless::UNIT, StorageType::Dense)
            .unwrap()
            .mutable();
        v.normalize().unwrap();
        for (got, want) in v.values_si().iter().zip([0.1, 0.2, 0.3, 0.4]) {
            assert_relative_eq!(*got, want, epsilon = 1e-12);
        }
        let mut zeros = Vector::<Dimensionless>::new(&[0.0, 0.0, 0.0], dimensionless::UNIT, StorageType::Sparse)
            .unwrap()
            .mutable();
        assert!(matches!(zeros.normalize(), Err(UnitError::InvalidArgument(_))));
    }

    #[test]
    fn mutable_copy_is_independent() {
        let frozen = Vector::<Dimensionless>::new(&[1.0, 4.0, 9.0], dimensionless::UNIT, StorageType::Dense).unwrap();
        let mut m = frozen.mutable();
        m.assign(f64::sqrt);
        assert_eq!(m.values_si(), vec![1.0, 2.0, 3.0]);
        assert_eq!(frozen.values_si(), vec![1.0, 4.0, 9.0]);
        let snapshot = m.immutable();
        m.set_si(0, 10.0).unwrap();
        assert_eq!(snapshot.values_si()[0], 1.0);
        assert!(matches!(m.set_in_unit(3, 1.0), Err(UnitError::IndexOutOfRange(_))));
        let done: Vector<Dimensionless> = m.freeze();
        assert_eq!(done.values_si(), vec![10.0, 2.0, 3.0]);
    }

    #[test]
    fn in_place_updates() {
        let mut v = km(&[1.6, -2.5, 0.0], StorageType::Sparse).mutable();
        v.increment_by(&km(&[0.1, 0.0, 0.0], StorageType::Dense)).unwrap();
        v.multiply_by(2.0).divide_by(2.0);
        v.round();
        assert_eq!(v.values_in_unit(), vec![2.0, -3.0, 0.0]);
        v.abs().neg();
        assert_eq!(v.values_in_unit(), vec![-2.0, -3.0, 0.0]);
        v.decrement_by(&km(&[-2.0, -3.0, 0.0], StorageType::Dense)).unwrap();
        assert_eq!(v.cardinality(), 0);
        v.set(1, Scalar::new(500.0, length::METER)).unwrap();
        assert_eq!(v.get_in_unit(1).unwrap(), 0.5);
    }

    #[test]
    fn dimensionless_math_keeps_layout() {
        let v = Vector::<Dimensionless>::new(&[0.0, 0.0, 1.0], dimensionless::UNIT, StorageType::Sparse).unwrap();
        let c = v.cos();
        assert_eq!(c.storage_type(), StorageType::Sparse);
        assert_relative_eq!(c.values_si()[0], 1.0);
        assert_relative_eq!(v.exp().log1p().values_si()[0], 2f64.ln());
        assert_eq!(v.pow(2.0).values_si(), vec![0.0, 0.0, 1.0]);
    }

    #[test]
    fn display() {
        let v = km(&[1.0, 2.5], StorageType::Dense);
        assert_eq!(v.to_string(), "[1, 2.5] km");
        assert_eq!(format!("{:.1}", v), "[1.0, 2.5] km");
        assert_eq!(format!("{:#}", v.mutable().to_sparse()), "[1, 2.5] km [mutable,sparse]");
    }
}
