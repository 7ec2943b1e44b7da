//! Dense and sparse backing stores for vectors and matrices.
//!
//! [`VectorData`] and [`MatrixData`] hold SI values only; units live one layer up.
//! Both implement [`Storage`], whose `to_dense`/`to_sparse` hand back the same
//! store when it already has the requested layout.

pub mod dense;
pub mod sparse;

pub use sparse::{CsrMatrix, SparseVector};

use std::fmt;

use faer::Mat;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::config::StorageOptions;
use crate::core::{MatShape, Real, Storage};
use crate::error::{Result, UnitError};
use crate::parallel;

/// Layout tag of a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StorageType {
    Dense,
    Sparse,
}

impl StorageType {
    /// Sparse when at most `options.sparse_fill_ratio` of `total` cells are non-zero.
    pub fn auto(nonzero: usize, total: usize, options: &StorageOptions) -> StorageType {
        if total > 0 && (nonzero as f64) <= options.sparse_fill_ratio * total as f64 {
            StorageType::Sparse
        } else {
            StorageType::Dense
        }
    }
}

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageType::Dense => f.write_str("DENSE"),
            StorageType::Sparse => f.write_str("SPARSE"),
        }
    }
}

/// 1-D store of SI values.
#[derive(Debug, Clone)]
pub enum VectorData<T> {
    Dense(Vec<T>),
    Sparse(SparseVector<T>),
}

impl<T: Real> VectorData<T> {
    /// Store `values` in the requested layout. Fails on empty input.
    pub fn new(values: Vec<T>, storage: StorageType) -> Result<Self> {
        if values.is_empty() {
            return Err(UnitError::InvalidArgument("vector data is empty".to_string()));
        }
        Ok(match storage {
            StorageType::Dense => VectorData::Dense(values),
            StorageType::Sparse => VectorData::Sparse(SparseVector::from_dense(&values)),
        })
    }

    /// Store `(index, value)` pairs over `len` cells. Fails when `len` is zero or an
    /// index is out of range.
    pub fn from_pairs(len: usize, pairs: impl IntoIterator<Item = (usize, T)>, storage: StorageType) -> Result<Self> {
        if len == 0 {
            return Err(UnitError::InvalidArgument("vector data is empty".to_string()));
        }
        let mut data = match storage {
            StorageType::Dense => VectorData::Dense(vec![T::zero(); len]),
            StorageType::Sparse => VectorData::Sparse(SparseVector::zeros(len)),
        };
        for (index, value) in pairs {
            crate::error::check_index(index, len)?;
            data.set(index, value);
        }
        Ok(data)
    }

    pub fn len(&self) -> usize {
        match self {
            VectorData::Dense(v) => v.len(),
            VectorData::Sparse(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cell value; the caller checks bounds.
    pub fn get(&self, index: usize) -> T {
        match self {
            VectorData::Dense(v) => v[index],
            VectorData::Sparse(s) => s.get(index),
        }
    }

    /// Store one cell; the caller checks bounds.
    pub fn set(&mut self, index: usize, value: T) {
        match self {
            VectorData::Dense(v) => v[index] = value,
            VectorData::Sparse(s) => s.set(index, value),
        }
    }

    /// Dense copy of all cells.
    pub fn to_vec(&self) -> Vec<T> {
        match self {
            VectorData::Dense(v) => v.clone(),
            VectorData::Sparse(s) => s.to_dense_vec(),
        }
    }

    pub fn sum(&self) -> T {
        match self {
            VectorData::Dense(v) => parallel::sum(v, StorageOptions::global()),
            VectorData::Sparse(s) => s.values().iter().fold(T::zero(), |acc, &v| acc + v),
        }
    }

    /// `f` applied to every cell, keeping the layout.
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(T) -> T + Send + Sync,
    {
        match self {
            VectorData::Dense(v) => {
                let mut out = v.clone();
                parallel::map_in_place(&mut out, f, StorageOptions::global());
                VectorData::Dense(out)
            }
            VectorData::Sparse(s) => VectorData::Sparse(s.map(f)),
        }
    }

    /// Cell-wise `f(self, other)`. The result is sparse only when both sides are.
    /// `f(0, 0)` must be zero for sparse operands. Lengths are checked by the caller.
    pub fn zip<F>(&self, other: &VectorData<T>, f: F) -> Self
    where
        F: Fn(T, T) -> T + Send + Sync,
    {
        match (self, other) {
            (VectorData::Sparse(a), VectorData::Sparse(b)) => VectorData::Sparse(a.zip_with(b, f)),
            (VectorData::Dense(a), VectorData::Dense(b)) => {
                let mut out = a.clone();
                parallel::zip_in_place(&mut out, b, f, StorageOptions::global());
                VectorData::Dense(out)
            }
            _ => {
                let mut out = self.to_vec();
                parallel::zip_in_place(&mut out, &other.to_vec(), f, StorageOptions::global());
                VectorData::Dense(out)
            }
        }
    }

    /// Layout chosen by `StorageType::auto` for the current contents.
    pub fn optimal_storage(&self) -> StorageType {
        StorageType::auto(self.cardinality(), self.len(), StorageOptions::global())
    }
}

impl<T: Real> Storage for VectorData<T> {
    fn storage_type(&self) -> StorageType {
        match self {
            VectorData::Dense(_) => StorageType::Dense,
            VectorData::Sparse(_) => StorageType::Sparse,
        }
    }

    fn cardinality(&self) -> usize {
        match self {
            VectorData::Dense(v) => parallel::count_nonzero(v, StorageOptions::global()),
            VectorData::Sparse(s) => s.nnz(),
        }
    }

    fn to_dense(self) -> Self {
        match self {
            VectorData::Sparse(s) => {
                trace!(len = s.len(), nnz = s.nnz(), "sparse vector to dense");
                VectorData::Dense(s.to_dense_vec())
            }
            dense => dense,
        }
    }

    fn to_sparse(self) -> Self {
        match self {
            VectorData::Dense(v) => {
                trace!(len = v.len(), "dense vector to sparse");
                VectorData::Sparse(SparseVector::from_dense(&v))
            }
            sparse => sparse,
        }
    }
}

/// 2-D store of SI values.
#[derive(Debug, Clone)]
pub enum MatrixData<T> {
    Dense(Mat<T>),
    Sparse(CsrMatrix<T>),
}

impl<T: Real> MatrixData<T> {
    /// Store `rows` in the requested layout. Fails on empty or jagged input.
    pub fn new(rows: &[Vec<T>], storage: StorageType) -> Result<Self> {
        Ok(match storage {
            StorageType::Dense => MatrixData::Dense(dense::mat_from_rows(rows)?),
            StorageType::Sparse => {
                let ncols = dense::check_rows(rows)?;
                MatrixData::Sparse(CsrMatrix::from_fn(rows.len(), ncols, |i, j| rows[i][j]))
            }
        })
    }

    /// Store `(row, col, value)` triples over an `nrows` x `ncols` grid.
    pub fn from_triples(
        nrows: usize,
        ncols: usize,
        triples: impl IntoIterator<Item = (usize, usize, T)>,
        storage: StorageType,
    ) -> Result<Self> {
        if nrows == 0 || ncols == 0 {
            return Err(UnitError::InvalidArgument(format!("matrix data of size {nrows}x{ncols} is empty")));
        }
        let mut data = match storage {
            StorageType::Dense => MatrixData::Dense(Mat::from_fn(nrows, ncols, |_, _| T::zero())),
            StorageType::Sparse => MatrixData::Sparse(CsrMatrix::zeros(nrows, ncols)),
        };
        for (row, col, value) in triples {
            crate::error::check_cell(row, col, nrows, ncols)?;
            data.set(row, col, value);
        }
        Ok(data)
    }

    /// Cell value; the caller checks bounds.
    pub fn get(&self, row: usize, col: usize) -> T {
        match self {
            MatrixData::Dense(m) => m[(row, col)],
            MatrixData::Sparse(s) => s.get(row, col),
        }
    }

    /// Store one cell; the caller checks bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        match self {
            MatrixData::Dense(m) => m[(row, col)] = value,
            MatrixData::Sparse(s) => s.set(row, col, value),
        }
    }

    pub fn row(&self, row: usize) -> Vec<T> {
        (0..self.ncols()).map(|c| self.get(row, c)).collect()
    }

    pub fn column(&self, col: usize) -> Vec<T> {
        (0..self.nrows()).map(|r| self.get(r, col)).collect()
    }

    pub fn to_rows(&self) -> Vec<Vec<T>> {
        match self {
            MatrixData::Dense(m) => dense::mat_to_rows(m),
            MatrixData::Sparse(_) => (0..self.nrows()).map(|r| self.row(r)).collect(),
        }
    }

    pub fn sum(&self) -> T {
        match self {
            MatrixData::Dense(m) => dense::mat_sum(m, StorageOptions::global()),
            MatrixData::Sparse(s) => s.values().iter().fold(T::zero(), |acc, &v| acc + v),
        }
    }

    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(T) -> T + Send + Sync,
    {
        match self {
            MatrixData::Dense(m) => MatrixData::Dense(dense::mat_map(m, f, StorageOptions::global())),
            MatrixData::Sparse(s) => MatrixData::Sparse(s.map(f)),
        }
    }

    /// Cell-wise `f(self, other)`, sparse only when both sides are. Shapes are
    /// checked by the caller.
    pub fn zip<F>(&self, other: &MatrixData<T>, f: F) -> Self
    where
        F: Fn(T, T) -> T + Send + Sync,
    {
        match (self, other) {
            (MatrixData::Sparse(a), MatrixData::Sparse(b)) => MatrixData::Sparse(a.zip_with(b, f)),
            (MatrixData::Dense(a), MatrixData::Dense(b)) => {
                MatrixData::Dense(dense::mat_zip(a, b, f, StorageOptions::global()))
            }
            _ => {
                let a = self.clone().to_dense();
                let b = other.clone().to_dense();
                a.zip(&b, f)
            }
        }
    }

    pub fn determinant(&self) -> Result<f64> {
        match self {
            MatrixData::Dense(m) => dense::determinant(m),
            MatrixData::Sparse(s) => dense::determinant(&Mat::from_fn(s.nrows(), s.ncols(), |i, j| s.get(i, j))),
        }
    }

    pub fn optimal_storage(&self) -> StorageType {
        StorageType::auto(self.cardinality(), self.nrows() * self.ncols(), StorageOptions::global())
    }
}

impl<T: Real> MatShape for MatrixData<T> {
    fn nrows(&self) -> usize {
        match self {
            MatrixData::Dense(m) => m.nrows(),
            MatrixData::Sparse(s) => s.nrows(),
        }
    }

    fn ncols(&self) -> usize {
        match self {
            MatrixData::Dense(m) => m.ncols(),
            MatrixData::Sparse(s) => s.ncols(),
        }
    }
}

impl<T: Real> Storage for MatrixData<T> {
    fn storage_type(&self) -> StorageType {
        match self {
            MatrixData::Dense(_) => StorageType::Dense,
            MatrixData::Sparse(_) => StorageType::Sparse,
        }
    }

    fn cardinality(&self) -> usize {
        match self {
            MatrixData::Dense(m) => dense::mat_count_nonzero(m, StorageOptions::global()),
            MatrixData::Sparse(s) => s.nnz(),
        }
    }

    fn to_dense(self) -> Self {
        match self {
            MatrixData::Sparse(s) => {
                trace!(nrows = s.nrows(), ncols = s.ncols(), nnz = s.nnz(), "sparse matrix to dense");
                MatrixData::Dense(Mat::from_fn(s.nrows(), s.ncols(), |i, j| s.get(i, j)))
            }
            dense => dense,
        }
    }

    fn to_sparse(self) -> Self {
        match self {
            MatrixData::Dense(m) => {
                trace!(nrows = m.nrows(), ncols = m.ncols(), "dense matrix to sparse");
                MatrixData::Sparse(CsrMatrix::from_fn(m.nrows(), m.ncols(), |i, j| m[(i, j)]))
            }
            sparse => sparse,
        }
    }
}

impl<T: Real> PartialEq for VectorData<T> {
    /// Cell-by-cell equality, independent of layout.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && (0..self.len()).all(|i| self.get(i) == other.get(i))
    }
}

impl<T: Real> PartialEq for MatrixData<T> {
    /// Cell-by-cell equality, independent of layout.
    fn eq(&self, other: &Self) -> bool {
        self.nrows() == other.nrows()
            && self.ncols() == other.ncols()
            && (0..self.nrows()).all(|r| (0..self.ncols()).all(|c| self.get(r, c) == other.get(r, c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Vec<f64>> {
        vec![vec![1.0, 0.0, 3.0], vec![0.0, 0.0, 6.0], vec![7.0, 8.0, 0.0]]
    }

    #[test]
    fn matrix_cardinality() {
        for storage in [StorageType::Dense, StorageType::Sparse] {
            let m = MatrixData::new(&sample(), storage).unwrap();
            assert_eq!(m.cardinality(), 5);
            assert_eq!(m.storage_type(), storage);
        }
    }

    #[test]
    fn dense_sparse_dense_round_trip() {
        let dense = MatrixData::new(&sample(), StorageType::Dense).unwrap();
        let back = dense.clone().to_sparse().to_dense();
        assert_eq!(back.storage_type(), StorageType::Dense);
        assert_eq!(back.to_rows(), sample());
        assert_eq!(back, dense);

        let v = VectorData::new(vec![0.0, 2.5, 0.0, -1.0], StorageType::Dense).unwrap();
        let sparse = v.clone().to_sparse();
        assert_eq!(sparse.cardinality(), 2);
        assert_eq!(sparse.get(0), 0.0);
        assert_eq!(sparse.to_dense(), v);
    }

    #[test]
    fn equality_ignores_layout() {
        let cells = vec![0.0, 2.5, 0.0, -1.0];
        let dense = VectorData::new(cells.clone(), StorageType::Dense).unwrap();
        let sparse = VectorData::new(cells, StorageType::Sparse).unwrap();
        assert_eq!(dense, sparse);
        let other = VectorData::new(vec![0.0, 2.5, 0.0, 1.0], StorageType::Sparse).unwrap();
        assert_ne!(dense, other);
        let shorter = VectorData::new(vec![0.0, 2.5, 0.0], StorageType::Dense).unwrap();
        assert_ne!(dense, shorter);

        let m_dense = MatrixData::new(&sample(), StorageType::Dense).unwrap();
        let m_sparse = MatrixData::new(&sample(), StorageType::Sparse).unwrap();
        assert_eq!(m_dense, m_sparse);
    }

    #[test]
    fn conversion_to_same_layout_is_identity() {
        let v = VectorData::new(vec![1.0f32, 2.0], StorageType::Dense).unwrap();
        assert!(matches!(v.clone().to_dense(), VectorData::Dense(ref d) if *d == vec![1.0, 2.0]));
        let s = MatrixData::new(&sample(), StorageType::Sparse).unwrap();
        let again = s.clone().to_sparse();
        assert!(matches!(again, MatrixData::Sparse(_)));
    }

    #[test]
    fn empty_and_jagged_inputs_fail() {
        assert!(VectorData::<f64>::new(vec![], StorageType::Dense).is_err());
        assert!(MatrixData::<f64>::new(&[], StorageType::Sparse).is_err());
        let jagged = vec![vec![1.0, 2.0], vec![3.0]];
        assert!(matches!(
            MatrixData::new(&jagged, StorageType::Dense),
            Err(UnitError::InvalidArgument(_))
        ));
        assert!(matches!(
            VectorData::from_pairs(3, [(3, 1.0)], StorageType::Sparse),
            Err(UnitError::IndexOutOfRange(_))
        ));
    }

    #[test]
    fn mixed_layout_zip_is_dense() {
        let a = VectorData::new(vec![1.0, 0.0, 2.0], StorageType::Sparse).unwrap();
        let b = VectorData::new(vec![1.0, 1.0, 1.0], StorageType::Dense).unwrap();
        let c = a.zip(&b, |x, y| x + y);
        assert_eq!(c.storage_type(), StorageType::Dense);
        assert_eq!(c.to_vec(), vec![2.0, 1.0, 3.0]);
        let d = a.zip(&a, |x, y| x - y);
        assert_eq!(d.storage_type(), StorageType::Sparse);
        assert_eq!(d.cardinality(), 0);
    }

    #[test]
    fn auto_storage() {
        let o = StorageOptions::default();
        assert_eq!(StorageType::auto(2, 10, &o), StorageType::Sparse);
        assert_eq!(StorageType::auto(3, 10, &o), StorageType::Dense);
        assert_eq!(StorageType::Sparse.to_string(), "SPARSE");
    }
}
