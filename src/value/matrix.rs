//! Two-dimensional containers of quantities.

use std::fmt;
use std::marker::PhantomData;

use super::{Access, Immutable, Mutable, Scalar, TryAdd, TrySub, ValueFlags, Vector, write_number};
use crate::core::{MatShape, Real, Storage};
use crate::error::{Result, UnitError, check_cell, check_index};
use crate::kind::{Abs, AbsoluteCounterpart, Dimensionless, KindDiv, KindMul, QuantityKind, RelativeKind};
use crate::storage::{MatrixData, StorageType, VectorData};
use crate::unit::Unit;

/// A matrix of kind-`K` quantities, stored as SI values with one display unit.
pub struct Matrix<K, T = f64, M = Immutable> {
    data: MatrixData<T>,
    unit: Unit<K>,
    _access: PhantomData<M>,
}

pub type MutableMatrix<K, T = f64> = Matrix<K, T, Mutable>;

impl<K, T: Clone, M> Clone for Matrix<K, T, M> {
    fn clone(&self) -> Self {
        Matrix { data: self.data.clone(), unit: self.unit, _access: PhantomData }
    }
}

fn check_shapes(a: &impl MatShape, b: &impl MatShape) -> Result<()> {
    if a.nrows() != b.nrows() || a.ncols() != b.ncols() {
        return Err(UnitError::InvalidArgument(format!(
            "matrix shapes differ: {}x{} and {}x{}",
            a.nrows(),
            a.ncols(),
            b.nrows(),
            b.ncols()
        )));
    }
    Ok(())
}

impl<K: QuantityKind, T: Real, M: Access> Matrix<K, T, M> {
    pub(crate) fn wrap(data: MatrixData<T>, unit: Unit<K>) -> Self {
        Matrix { data, unit, _access: PhantomData }
    }

    /// Matrix of `rows` of values expressed in `unit`. Fails on empty or jagged rows.
    pub fn new(rows: &[Vec<T>], unit: Unit<K>, storage: StorageType) -> Result<Self> {
        let si: Vec<Vec<T>> = rows
            .iter()
            .map(|row| row.iter().map(|&v| Scalar::new(v, unit).si()).collect())
            .collect();
        Ok(Matrix::wrap(MatrixData::new(&si, storage)?, unit))
    }

    /// Matrix of SI rows, displayed in `unit`.
    pub fn from_si(rows: &[Vec<T>], unit: Unit<K>, storage: StorageType) -> Result<Self> {
        Ok(Matrix::wrap(MatrixData::new(rows, storage)?, unit))
    }

    /// Matrix of individual scalars; the display unit is that of the first cell.
    pub fn from_scalars(rows: &[Vec<Scalar<K, T>>], storage: StorageType) -> Result<Self> {
        let Some(first) = rows.first().and_then(|r| r.first()) else {
            return Err(UnitError::InvalidArgument("no scalars to build a matrix from".to_string()));
        };
        let si: Vec<Vec<T>> = rows.iter().map(|row| row.iter().map(Scalar::si).collect()).collect();
        Ok(Matrix::wrap(MatrixData::new(&si, storage)?, first.unit()))
    }

    /// `nrows` x `ncols` matrix from `(row, col, value)` triples in `unit`. Absent
    /// cells hold SI zero.
    pub fn from_triples(
        nrows: usize,
        ncols: usize,
        triples: impl IntoIterator<Item = (usize, usize, T)>,
        unit: Unit<K>,
        storage: StorageType,
    ) -> Result<Self> {
        let si = triples.into_iter().map(|(r, c, v)| (r, c, Scalar::new(v, unit).si()));
        Ok(Matrix::wrap(MatrixData::from_triples(nrows, ncols, si, storage)?, unit))
    }

    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    pub fn is_square(&self) -> bool {
        self.data.is_square()
    }

    pub fn unit(&self) -> Unit<K> {
        self.unit
    }

    pub fn storage_type(&self) -> StorageType {
        self.data.storage_type()
    }

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

    pub(crate) fn data(&self) -> &MatrixData<T> {
        &self.data
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Scalar<K, T>> {
        Ok(Scalar::from_si(self.get_si(row, col)?, self.unit))
    }

    pub fn get_si(&self, row: usize, col: usize) -> Result<T> {
        check_cell(row, col, self.rows(), self.cols())?;
        Ok(self.data.get(row, col))
    }

    pub fn get_in_unit(&self, row: usize, col: usize) -> Result<T> {
        Ok(self.get(row, col)?.in_unit())
    }

    /// SI values, row by row.
    pub fn values_si(&self) -> Vec<Vec<T>> {
        self.data.to_rows()
    }

    pub fn values_in_unit(&self) -> Vec<Vec<T>> {
        let unit = self.unit;
        self.data
            .to_rows()
            .into_iter()
            .map(|row| row.into_iter().map(|si| Scalar::from_si(si, unit).in_unit()).collect())
            .collect()
    }

    pub fn scalars(&self) -> Vec<Vec<Scalar<K, T>>> {
        let unit = self.unit;
        self.data
            .to_rows()
            .into_iter()
            .map(|row| row.into_iter().map(|si| Scalar::from_si(si, unit)).collect())
            .collect()
    }

    fn vector_of(&self, cells: Vec<T>) -> Result<Vector<K, T>> {
        let storage = self.storage_type();
        Ok(Vector::wrap(VectorData::new(cells, storage)?, self.unit))
    }

    /// Row `row` as a vector in this matrix's unit and layout.
    pub fn row(&self, row: usize) -> Result<Vector<K, T>> {
        check_index(row, self.rows())?;
        self.vector_of(self.data.row(row))
    }

    pub fn column(&self, col: usize) -> Result<Vector<K, T>> {
        check_index(col, self.cols())?;
        self.vector_of(self.data.column(col))
    }

    /// Main diagonal; square matrices only.
    pub fn diagonal(&self) -> Result<Vector<K, T>> {
        if !self.is_square() {
            return Err(UnitError::InvalidArgument(format!(
                "diagonal of a non-square {}x{} matrix",
                self.rows(),
                self.cols()
            )));
        }
        self.vector_of((0..self.rows()).map(|i| self.data.get(i, i)).collect())
    }

    /// Determinant of the SI values; square matrices only.
    pub fn determinant_si(&self) -> Result<f64> {
        self.data.determinant()
    }

    /// Sum of all cells, in the display unit.
    pub fn zsum(&self) -> Scalar<K, T> {
        Scalar::from_si(self.data.sum(), self.unit)
    }

    pub fn to_dense(self) -> Self {
        Matrix::wrap(self.data.to_dense(), self.unit)
    }

    pub fn to_sparse(self) -> Self {
        Matrix::wrap(self.data.to_sparse(), self.unit)
    }

    pub fn to_optimal(self) -> Self {
        match self.data.optimal_storage() {
            StorageType::Dense => self.to_dense(),
            StorageType::Sparse => self.to_sparse(),
        }
    }

    pub fn with_unit(self, unit: Unit<K>) -> Self {
        Matrix::wrap(self.data, unit)
    }

    pub fn mutable(&self) -> MutableMatrix<K, T> {
        Matrix::wrap(self.data.copy(), self.unit)
    }

    pub fn immutable(&self) -> Matrix<K, T> {
        Matrix::wrap(self.data.copy(), self.unit)
    }

    pub fn freeze(self) -> Matrix<K, T> {
        Matrix::wrap(self.data, self.unit)
    }

    pub fn plus<R>(&self, rhs: &R) -> Result<<Self as TryAdd<R>>::Output>
    where
        Self: TryAdd<R>,
    {
        self.try_add(rhs)
    }

    pub fn minus<R>(&self, rhs: &R) -> Result<<Self as TrySub<R>>::Output>
    where
        Self: TrySub<R>,
    {
        self.try_sub(rhs)
    }

    fn combine<K2, M2, KO>(&self, other: &Matrix<K2, T, M2>, unit: Unit<KO>, f: fn(T, T) -> T) -> Result<Matrix<KO, T, M>>
    where
        K2: QuantityKind,
        M2: Access,
        KO: QuantityKind,
    {
        check_shapes(&self.data, &other.data)?;
        Ok(Matrix::wrap(self.data.zip(&other.data, f), unit))
    }

    /// Cell-wise product; the result kind comes from the multiplication table.
    pub fn times_elements<B, M2>(&self, other: &Matrix<B, T, M2>) -> Result<Matrix<K::Output, T, M>>
    where
        K: KindMul<B>,
        B: QuantityKind,
        M2: Access,
    {
        self.combine(other, <K::Output as QuantityKind>::STANDARD, |a, b| a * b)
    }

    /// Cell-wise quotient, computed densely and stored in this matrix's layout.
    pub fn divide_elements<B, M2>(&self, other: &Matrix<B, T, M2>) -> Result<Matrix<K::Output, T, M>>
    where
        K: KindDiv<B>,
        B: QuantityKind,
        M2: Access,
    {
        check_shapes(&self.data, &other.data)?;
        let a = self.data.clone().to_dense();
        let b = other.data.clone().to_dense();
        let out = Matrix::wrap(a.zip(&b, |x, y| x / y), <K::Output as QuantityKind>::STANDARD);
        Ok(match self.storage_type() {
            StorageType::Dense => out,
            StorageType::Sparse => out.to_sparse(),
        })
    }

    fn map_in_unit(&self, f: fn(f64) -> f64) -> MatrixData<T> {
        let unit = self.unit;
        self.data.map(move |si| T::of_f64(unit.to_standard(f(unit.from_standard(si.into_f64())))))
    }
}

impl<K: RelativeKind, T: Real, M: Access> Matrix<K, T, M> {
    pub fn times(&self, factor: T) -> Self {
        Matrix::wrap(self.data.map(move |v| v * factor), self.unit)
    }

    pub fn divide(&self, divisor: T) -> Self {
        Matrix::wrap(self.data.map(move |v| v / divisor), self.unit)
    }
}

impl<K: QuantityKind, T: Real> MutableMatrix<K, T> {
    pub fn set(&mut self, row: usize, col: usize, value: Scalar<K, T>) -> Result<&mut Self> {
        self.set_si(row, col, value.si())
    }

    pub fn set_si(&mut self, row: usize, col: usize, si: T) -> Result<&mut Self> {
        check_cell(row, col, self.rows(), self.cols())?;
        self.data.set(row, col, si);
        Ok(self)
    }

    pub fn set_in_unit(&mut self, row: usize, col: usize, value: T) -> Result<&mut Self> {
        let si = Scalar::new(value, self.unit).si();
        self.set_si(row, col, si)
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

impl<K: RelativeKind, T: Real> MutableMatrix<K, T> {
    /// Scale so the cells sum to one. Fails when they sum to zero.
    pub fn normalize(&mut self) -> Result<&mut Self> {
        let sum = self.data.sum();
        if sum.is_zero() {
            return Err(UnitError::InvalidArgument("cannot normalize a matrix that sums to zero".to_string()));
        }
        self.data = self.data.map(move |v| v / sum);
        Ok(self)
    }

    pub fn increment_by<M2: Access>(&mut self, other: &Matrix<K, T, M2>) -> Result<&mut Self> {
        check_shapes(&self.data, &other.data)?;
        self.data = self.data.zip(&other.data, |a, b| a + b);
        Ok(self)
    }

    pub fn decrement_by<M2: Access>(&mut self, other: &Matrix<K, T, M2>) -> Result<&mut Self> {
        check_shapes(&self.data, &other.data)?;
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

impl<K: AbsoluteCounterpart, T: Real> MutableMatrix<Abs<K>, T> {
    pub fn increment_by<M2: Access>(&mut self, other: &Matrix<K, T, M2>) -> Result<&mut Self> {
        check_shapes(&self.data, &other.data)?;
        self.data = self.data.zip(&other.data, |a, b| a + b);
        Ok(self)
    }

    pub fn decrement_by<M2: Access>(&mut self, other: &Matrix<K, T, M2>) -> Result<&mut Self> {
        check_shapes(&self.data, &other.data)?;
        self.data = self.data.zip(&other.data, |a, b| a - b);
        Ok(self)
    }
}

impl<K: RelativeKind, T: Real, M: Access, M2: Access> TryAdd<Matrix<K, T, M2>> for Matrix<K, T, M> {
    type Output = Matrix<K, T, M>;
    fn try_add(&self, rhs: &Matrix<K, T, M2>) -> Result<Self::Output> {
        let unit = if self.unit == rhs.unit { self.unit } else { K::STANDARD };
        self.combine(rhs, unit, |a, b| a + b)
    }
}

impl<K: AbsoluteCounterpart, T: Real, M: Access, M2: Access> TryAdd<Matrix<K, T, M2>> for Matrix<Abs<K>, T, M> {
    type Output = Matrix<Abs<K>, T, M>;
    fn try_add(&self, rhs: &Matrix<K, T, M2>) -> Result<Self::Output> {
        let unit = if self.unit.id() == rhs.unit.id() { self.unit } else { Abs::<K>::STANDARD };
        self.combine(rhs, unit, |a, b| a + b)
    }
}

impl<K: AbsoluteCounterpart, T: Real, M: Access, M2: Access> TryAdd<Matrix<Abs<K>, T, M2>> for Matrix<K, T, M> {
    type Output = Matrix<Abs<K>, T, M>;
    fn try_add(&self, rhs: &Matrix<Abs<K>, T, M2>) -> Result<Self::Output> {
        let unit = if self.unit.id() == rhs.unit.id() { rhs.unit } else { Abs::<K>::STANDARD };
        self.combine(rhs, unit, |a, b| a + b)
    }
}

impl<K: RelativeKind, T: Real, M: Access, M2: Access> TrySub<Matrix<K, T, M2>> for Matrix<K, T, M> {
    type Output = Matrix<K, T, M>;
    fn try_sub(&self, rhs: &Matrix<K, T, M2>) -> Result<Self::Output> {
        let unit = if self.unit == rhs.unit { self.unit } else { K::STANDARD };
        self.combine(rhs, unit, |a, b| a - b)
    }
}

impl<K: AbsoluteCounterpart, T: Real, M: Access, M2: Access> TrySub<Matrix<Abs<K>, T, M2>> for Matrix<Abs<K>, T, M> {
    type Output = Matrix<K, T, M>;
    fn try_sub(&self, rhs: &Matrix<Abs<K>, T, M2>) -> Result<Self::Output> {
        let unit = if self.unit == rhs.unit { self.unit.relative_unit() } else { K::STANDARD };
        self.combine(rhs, unit, |a, b| a - b)
    }
}

impl<K: AbsoluteCounterpart, T: Real, M: Access, M2: Access> TrySub<Matrix<K, T, M2>> for Matrix<Abs<K>, T, M> {
    type Output = Matrix<Abs<K>, T, M>;
    fn try_sub(&self, rhs: &Matrix<K, T, M2>) -> Result<Self::Output> {
        let unit = if self.unit.id() == rhs.unit.id() { self.unit } else { Abs::<K>::STANDARD };
        self.combine(rhs, unit, |a, b| a - b)
    }
}

macro_rules! cellwise_math {
    ($($name:ident => $f:expr;)*) => {
        impl<T: Real, M: Access> Matrix<Dimensionless, T, M> {
            $(pub fn $name(&self) -> Self {
                Matrix::wrap(self.data.map($f), self.unit)
            })*

            pub fn pow(&self, x: T) -> Self {
                Matrix::wrap(self.data.map(move |v| v.powf(x)), self.unit)
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
    log => T::ln;
    log10 => T::log10;
    log1p => T::ln_1p;
    sqrt => T::sqrt;
    cbrt => T::cbrt;
    signum => |v: T| if v.is_zero() { v } else { v.signum() };
    inv => T::recip;
}

impl<K, T, M, M2> PartialEq<Matrix<K, T, M2>> for Matrix<K, T, M>
where
    K: QuantityKind,
    T: Real,
    M: Access,
    M2: Access,
{
    fn eq(&self, other: &Matrix<K, T, M2>) -> bool {
        self.data == other.data
    }
}

impl<K: QuantityKind, T: Real, M: Access> fmt::Debug for Matrix<K, T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix")
            .field("kind", &K::NAME)
            .field("unit", &self.unit.id())
            .field("mutable", &M::MUTABLE)
            .field("rows", &self.values_si())
            .finish()
    }
}

impl<K: QuantityKind, T: Real, M: Access> fmt::Display for Matrix<K, T, M> {
    /// `[[1, 2], [3, 4]] km`; the alternate form appends the flags.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (r, row) in self.values_in_unit().iter().enumerate() {
            f.write_str(if r > 0 { ", [" } else { "[" })?;
            for (c, &value) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(", ")?;
                }
                write_number(f, value)?;
            }
            f.write_str("]")?;
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
    use crate::kind::{AbsoluteTemperature, Length, Temperature};
    use crate::units::{dimensionless, length, temperature};
    use approx::assert_relative_eq;

    fn sample(storage: StorageType) -> Matrix<Length> {
        let rows = vec![vec![1.0, 0.0, 3.0], vec![0.0, 0.0, 6.0], vec![7.0, 8.0, 0.0]];
        Matrix::new(&rows, length::METER, storage).unwrap()
    }

    #[test]
    fn shape_and_access() {
        for storage in [StorageType::Dense, StorageType::Sparse] {
            let m = sample(storage);
            assert_eq!((m.rows(), m.cols()), (3, 3));
            assert!(m.is_square());
            assert_eq!(m.cardinality(), 5);
            assert_eq!(m.get_si(2, 1).unwrap(), 8.0);
            assert!(matches!(m.get(3, 0), Err(UnitError::IndexOutOfRange(_))));
            assert!(matches!(m.get(0, 3), Err(UnitError::IndexOutOfRange(_))));
            assert_eq!(m.row(1).unwrap().values_si(), vec![0.0, 0.0, 6.0]);
            assert_eq!(m.column(0).unwrap().values_si(), vec![1.0, 0.0, 7.0]);
            assert_eq!(m.diagonal().unwrap().values_si(), vec![1.0, 0.0, 0.0]);
            assert_eq!(m.zsum().si(), 25.0);
        }
    }

    #[test]
    fn jagged_and_empty_rows_fail() {
        let jagged = vec![vec![1.0, 2.0], vec![3.0]];
        assert!(matches!(Matrix::<Length>::new(&jagged, length::METER, StorageType::Dense), Err(UnitError::InvalidArgument(_))));
        assert!(Matrix::<Length>::new(&[], length::METER, StorageType::Sparse).is_err());
        assert!(Matrix::<Length>::from_scalars(&[], StorageType::Dense).is_err());
    }

    #[test]
    fn layouts_compare_equal() {
        let dense = sample(StorageType::Dense);
        let sparse = dense.clone().to_sparse();
        assert_eq!(sparse.storage_type(), StorageType::Sparse);
        assert_eq!(dense, sparse);
        assert_eq!(sparse.to_dense().values_si(), dense.values_si());
    }

    #[test]
    fn determinant_and_diagonal_need_square() {
        let m = Matrix::<Length>::new(&[vec![2.0, 0.0, 1.0], vec![1.0, 3.0, 2.0], vec![1.0, 1.0, 2.0]], length::METER, StorageType::Sparse)
            .unwrap();
        assert_relative_eq!(m.determinant_si().unwrap(), 6.0, epsilon = 1e-12);
        let wide = Matrix::<Length>::new(&[vec![1.0, 2.0]], length::METER, StorageType::Dense).unwrap();
        assert!(wide.determinant_si().is_err());
        assert!(matches!(wide.diagonal(), Err(UnitError::InvalidArgument(_))));
    }

    #[test]
    fn from_triples_and_scalars() {
        let m = Matrix::<Length>::from_triples(2, 3, [(0, 2, 1.5), (1, 0, 2.0)], length::KILOMETER, StorageType::Sparse).unwrap();
        assert_eq!(m.values_si(), vec![vec![0.0, 0.0, 1500.0], vec![2000.0, 0.0, 0.0]]);
        assert!(Matrix::<Length>::from_triples(2, 2, [(2, 0, 1.0)], length::METER, StorageType::Dense).is_err());
        let s = Matrix::<Length>::from_scalars(&m.scalars(), StorageType::Dense).unwrap();
        assert_eq!(s.unit(), length::KILOMETER);
        assert_eq!(s, m);
    }

    #[test]
    fn absolute_minus_absolute_is_relative() {
        let rows = vec![vec![20.0, 25.0]];
        let a = Matrix::<AbsoluteTemperature>::new(&rows, temperature::DEGREE_CELSIUS_ABS, StorageType::Dense).unwrap();
        let b = Matrix::<AbsoluteTemperature>::new(&[vec![10.0, 5.0]], temperature::DEGREE_CELSIUS_ABS, StorageType::Dense)
            .unwrap();
        let d: Matrix<Temperature> = a.minus(&b).unwrap();
        assert_eq!(d.unit(), temperature::DEGREE_CELSIUS);
        assert_relative_eq!(d.get_si(0, 1).unwrap(), 20.0, epsilon = 1e-9);
        let up = b.plus(&d).unwrap();
        assert_relative_eq!(up.get_in_unit(0, 0).unwrap(), 20.0, epsilon = 1e-9);
    }

    #[test]
    fn mutable_round_trip() {
        let frozen = Matrix::<Dimensionless>::new(&[vec![1.0, 4.0], vec![9.0, 16.0]], dimensionless::UNIT, StorageType::Dense)
            .unwrap();
        let mut m = frozen.mutable();
        m.assign(f64::sqrt);
        assert_eq!(m.values_si(), vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert_eq!(frozen.get_si(1, 1).unwrap(), 16.0);
        m.normalize().unwrap();
        assert_relative_eq!(m.get_si(1, 1).unwrap(), 0.4, epsilon = 1e-12);
        m.set_si(0, 0, 0.0).unwrap().multiply_by(10.0);
        assert_eq!(m.cardinality(), 3);
        assert!(m.set_si(2, 0, 1.0).is_err());
        assert_relative_eq!(m.freeze().sqrt().get_si(1, 1).unwrap(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn display() {
        let m = Matrix::<Length>::new(&[vec![1.0, 2.0], vec![3.0, 4.5]], length::KILOMETER, StorageType::Dense).unwrap();
        assert_eq!(m.to_string(), "[[1, 2], [3, 4.5]] km");
        assert_eq!(format!("{:#}", m.to_sparse()), "[[1, 2], [3, 4.5]] km [sparse]");
    }
}
