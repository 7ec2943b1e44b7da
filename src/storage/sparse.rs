//! Sparse stores: a sorted index/value vector and a CSR matrix.
//!
//! Only non-zero cells are kept. Writing an exact zero removes the entry, so
//! `nnz()` is always the exact cardinality.

use serde::{Deserialize, Serialize};

use crate::core::{MatShape, Real};
use crate::error::{Result, UnitError};

/// Sparse 1-D store with strictly increasing indices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparseVector<T> {
    len: usize,
    indices: Vec<usize>,
    values: Vec<T>,
}

impl<T: Real> SparseVector<T> {
    /// All-zero vector of `len` cells.
    pub fn zeros(len: usize) -> Self {
        SparseVector { len, indices: Vec::new(), values: Vec::new() }
    }

    /// Build from raw parts. Indices must be strictly increasing and below `len`;
    /// explicit zeros are dropped.
    pub fn from_parts(len: usize, indices: Vec<usize>, values: Vec<T>) -> Result<Self> {
        if indices.len() != values.len() {
            return Err(UnitError::InvalidArgument(format!(
                "sparse vector has {} indices but {} values",
                indices.len(),
                values.len()
            )));
        }
        if let Some(w) = indices.windows(2).find(|w| w[0] >= w[1]) {
            return Err(UnitError::InvalidArgument(format!(
                "sparse indices must be strictly increasing, found {} before {}",
                w[0], w[1]
            )));
        }
        if let Some(&last) = indices.last() {
            if last >= len {
                return Err(UnitError::IndexOutOfRange(format!(
                    "sparse index {last} out of range for length {len}"
                )));
            }
        }
        let (indices, values) = indices.into_iter().zip(values).filter(|(_, v)| !v.is_zero()).unzip();
        Ok(SparseVector { len, indices, values })
    }

    pub fn from_dense(values: &[T]) -> Self {
        let (indices, nonzero) = values
            .iter()
            .enumerate()
            .filter(|(_, v)| !v.is_zero())
            .map(|(i, &v)| (i, v))
            .unzip();
        SparseVector { len: values.len(), indices, values: nonzero }
    }

    pub fn to_dense_vec(&self) -> Vec<T> {
        let mut out = vec![T::zero(); self.len];
        for (&i, &v) in self.indices.iter().zip(&self.values) {
            out[i] = v;
        }
        out
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of stored (non-zero) cells.
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Value at `index`; the caller checks bounds.
    pub fn get(&self, index: usize) -> T {
        match self.indices.binary_search(&index) {
            Ok(slot) => self.values[slot],
            Err(_) => T::zero(),
        }
    }

    /// Store `value` at `index`; zero removes the entry. The caller checks bounds.
    pub fn set(&mut self, index: usize, value: T) {
        match self.indices.binary_search(&index) {
            Ok(slot) if value.is_zero() => {
                self.indices.remove(slot);
                self.values.remove(slot);
            }
            Ok(slot) => self.values[slot] = value,
            Err(_) if value.is_zero() => {}
            Err(slot) => {
                self.indices.insert(slot, index);
                self.values.insert(slot, value);
            }
        }
    }

    /// Stored `(index, value)` pairs in index order.
    pub fn iter_nonzero(&self) -> impl Iterator<Item = (usize, T)> + '_ {
        self.indices.iter().copied().zip(self.values.iter().copied())
    }

    /// Apply `f` to every logical cell. When `f(0)` is zero only stored cells are
    /// visited; otherwise every cell becomes a candidate.
    pub fn map(&self, f: impl Fn(T) -> T) -> Self {
        if f(T::zero()).is_zero() {
            let (indices, values) = self
                .iter_nonzero()
                .map(|(i, v)| (i, f(v)))
                .filter(|(_, v)| !v.is_zero())
                .unzip();
            return SparseVector { len: self.len, indices, values };
        }
        let dense: Vec<T> = self.to_dense_vec().into_iter().map(f).collect();
        SparseVector::from_dense(&dense)
    }

    /// Cell-wise `f(self[i], other[i])`, merging the two index lists.
    /// `f(0, 0)` must be zero. Lengths are checked by the caller.
    pub fn zip_with(&self, other: &SparseVector<T>, f: impl Fn(T, T) -> T) -> Self {
        let mut indices = Vec::with_capacity(self.nnz().max(other.nnz()));
        let mut values = Vec::with_capacity(indices.capacity());
        let (mut a, mut b) = (0, 0);
        while a < self.indices.len() || b < other.indices.len() {
            let ia = self.indices.get(a).copied().unwrap_or(usize::MAX);
            let ib = other.indices.get(b).copied().unwrap_or(usize::MAX);
            let (index, value) = if ia == ib {
                a += 1;
                b += 1;
                (ia, f(self.values[a - 1], other.values[b - 1]))
            } else if ia < ib {
                a += 1;
                (ia, f(self.values[a - 1], T::zero()))
            } else {
                b += 1;
                (ib, f(T::zero(), other.values[b - 1]))
            };
            if !value.is_zero() {
                indices.push(index);
                values.push(value);
            }
        }
        SparseVector { len: self.len, indices, values }
    }
}

/// Compressed sparse row matrix.
///
/// Row `i` owns `col_idx[row_ptr[i]..row_ptr[i + 1]]`, sorted by column, with the
/// matching `values`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsrMatrix<T> {
    nrows: usize,
    ncols: usize,
    row_ptr: Vec<usize>,
    col_idx: Vec<usize>,
    values: Vec<T>,
}

impl<T: Real> CsrMatrix<T> {
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        CsrMatrix { nrows, ncols, row_ptr: vec![0; nrows + 1], col_idx: Vec::new(), values: Vec::new() }
    }

    /// Build a CSR from raw row-ptr, col-idx, and values. Explicit zeros are dropped.
    pub fn from_csr(
        nrows: usize,
        ncols: usize,
        row_ptr: Vec<usize>,
        col_idx: Vec<usize>,
        values: Vec<T>,
    ) -> Result<Self> {
        if row_ptr.len() != nrows + 1 || row_ptr[0] != 0 || row_ptr[nrows] != col_idx.len() {
            return Err(UnitError::InvalidArgument(format!(
                "row_ptr of length {} does not describe {nrows} rows over {} entries",
                row_ptr.len(),
                col_idx.len()
            )));
        }
        if col_idx.len() != values.len() {
            return Err(UnitError::InvalidArgument(format!(
                "CSR has {} column indices but {} values",
                col_idx.len(),
                values.len()
            )));
        }
        let mut out = CsrMatrix::zeros(nrows, ncols);
        for row in 0..nrows {
            let (start, end) = (row_ptr[row], row_ptr[row + 1]);
            if start > end || end > col_idx.len() {
                return Err(UnitError::InvalidArgument(format!("row_ptr is not monotone at row {row}")));
            }
            let cols = &col_idx[start..end];
            if cols.windows(2).any(|w| w[0] >= w[1]) {
                return Err(UnitError::InvalidArgument(format!(
                    "column indices of row {row} are not strictly increasing"
                )));
            }
            if let Some(&c) = cols.last() {
                if c >= ncols {
                    return Err(UnitError::IndexOutOfRange(format!(
                        "column {c} out of range for {ncols} columns"
                    )));
                }
            }
            for (&c, &v) in cols.iter().zip(&values[start..end]) {
                if !v.is_zero() {
                    out.col_idx.push(c);
                    out.values.push(v);
                }
            }
            out.row_ptr[row + 1] = out.col_idx.len();
        }
        Ok(out)
    }

    /// Sparse copy of `f(i, j)` over the full grid.
    pub fn from_fn(nrows: usize, ncols: usize, f: impl Fn(usize, usize) -> T) -> Self {
        let mut out = CsrMatrix::zeros(nrows, ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                let v = f(i, j);
                if !v.is_zero() {
                    out.col_idx.push(j);
                    out.values.push(v);
                }
            }
            out.row_ptr[i + 1] = out.col_idx.len();
        }
        out
    }

    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    pub fn row_ptr(&self) -> &[usize] {
        &self.row_ptr
    }

    pub fn col_idx(&self) -> &[usize] {
        &self.col_idx
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    fn find(&self, row: usize, col: usize) -> std::result::Result<usize, usize> {
        let (start, end) = (self.row_ptr[row], self.row_ptr[row + 1]);
        self.col_idx[start..end]
            .binary_search(&col)
            .map(|k| start + k)
            .map_err(|k| start + k)
    }

    /// Value at `(row, col)`; the caller checks bounds.
    pub fn get(&self, row: usize, col: usize) -> T {
        match self.find(row, col) {
            Ok(slot) => self.values[slot],
            Err(_) => T::zero(),
        }
    }

    /// Store `value` at `(row, col)`; zero removes the entry. The caller checks bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        match self.find(row, col) {
            Ok(slot) if value.is_zero() => {
                self.col_idx.remove(slot);
                self.values.remove(slot);
                self.row_ptr[row + 1..].iter_mut().for_each(|p| *p -= 1);
            }
            Ok(slot) => self.values[slot] = value,
            Err(_) if value.is_zero() => {}
            Err(slot) => {
                self.col_idx.insert(slot, col);
                self.values.insert(slot, value);
                self.row_ptr[row + 1..].iter_mut().for_each(|p| *p += 1);
            }
        }
    }

    /// Stored `(col, value)` pairs of one row.
    pub fn row_nonzero(&self, row: usize) -> impl Iterator<Item = (usize, T)> + '_ {
        let (start, end) = (self.row_ptr[row], self.row_ptr[row + 1]);
        self.col_idx[start..end].iter().copied().zip(self.values[start..end].iter().copied())
    }

    /// Stored `(row, col, value)` triples in row-major order.
    pub fn iter_nonzero(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        (0..self.nrows).flat_map(move |r| self.row_nonzero(r).map(move |(c, v)| (r, c, v)))
    }

    /// Apply `f` to every logical cell, as [`SparseVector::map`] does.
    pub fn map(&self, f: impl Fn(T) -> T) -> Self {
        if f(T::zero()).is_zero() {
            let mut out = CsrMatrix::zeros(self.nrows, self.ncols);
            for row in 0..self.nrows {
                for (c, v) in self.row_nonzero(row) {
                    let v = f(v);
                    if !v.is_zero() {
                        out.col_idx.push(c);
                        out.values.push(v);
                    }
                }
                out.row_ptr[row + 1] = out.col_idx.len();
            }
            return out;
        }
        CsrMatrix::from_fn(self.nrows, self.ncols, |i, j| f(self.get(i, j)))
    }

    /// Cell-wise `f(self, other)` merging rows; `f(0, 0)` must be zero.
    pub fn zip_with(&self, other: &CsrMatrix<T>, f: impl Fn(T, T) -> T) -> Self {
        let mut out = CsrMatrix::zeros(self.nrows, self.ncols);
        for row in 0..self.nrows {
            let mut lhs = self.row_nonzero(row).peekable();
            let mut rhs = other.row_nonzero(row).peekable();
            loop {
                let (col, value) = match (lhs.peek().copied(), rhs.peek().copied()) {
                    (None, None) => break,
                    (Some((ca, va)), Some((cb, vb))) if ca == cb => {
                        lhs.next();
                        rhs.next();
                        (ca, f(va, vb))
                    }
                    (Some((ca, va)), Some((cb, _))) if ca < cb => {
                        lhs.next();
                        (ca, f(va, T::zero()))
                    }
                    (Some((ca, va)), None) => {
                        lhs.next();
                        (ca, f(va, T::zero()))
                    }
                    (_, Some((cb, vb))) => {
                        rhs.next();
                        (cb, f(T::zero(), vb))
                    }
                };
                if !value.is_zero() {
                    out.col_idx.push(col);
                    out.values.push(value);
                }
            }
            out.row_ptr[row + 1] = out.col_idx.len();
        }
        out
    }
}

impl<T> MatShape for CsrMatrix<T> {
    fn nrows(&self) -> usize {
        self.nrows
    }
    fn ncols(&self) -> usize {
        self.ncols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_set_keeps_indices_sorted() {
        let mut v = SparseVector::<f64>::zeros(10);
        v.set(7, 3.0);
        v.set(2, 1.0);
        v.set(5, 2.0);
        assert_eq!(v.indices(), &[2, 5, 7]);
        assert_eq!(v.get(5), 2.0);
        assert_eq!(v.get(6), 0.0);
        v.set(5, 0.0);
        assert_eq!(v.indices(), &[2, 7]);
        assert_eq!(v.nnz(), 2);
        v.set(4, 0.0);
        assert_eq!(v.nnz(), 2);
    }

    #[test]
    fn vector_parts_are_validated() {
        assert!(SparseVector::from_parts(4, vec![0, 2], vec![1.0]).is_err());
        assert!(SparseVector::from_parts(4, vec![2, 1], vec![1.0, 2.0]).is_err());
        assert!(matches!(
            SparseVector::from_parts(4, vec![1, 4], vec![1.0, 2.0]),
            Err(UnitError::IndexOutOfRange(_))
        ));
        let v = SparseVector::from_parts(4, vec![1, 3], vec![0.0, 2.0]).unwrap();
        assert_eq!(v.to_dense_vec(), vec![0.0, 0.0, 0.0, 2.0]);
    }

    #[test]
    fn vector_map_and_zip() {
        let v = SparseVector::from_dense(&[0.0, 2.0, 0.0, -1.0]);
        assert_eq!(v.map(|x| x * 2.0).to_dense_vec(), vec![0.0, 4.0, 0.0, -2.0]);
        assert_eq!(v.map(|x| x + 1.0).to_dense_vec(), vec![1.0, 3.0, 1.0, 0.0]);
        let w = SparseVector::from_dense(&[1.0, -2.0, 0.0, 0.0]);
        let sum = v.zip_with(&w, |a, b| a + b);
        assert_eq!(sum.to_dense_vec(), vec![1.0, 0.0, 0.0, -1.0]);
        assert_eq!(sum.nnz(), 2);
    }

    #[test]
    fn csr_round_trip_and_updates() {
        let dense = [[1.0, 0.0, 3.0], [0.0, 0.0, 6.0], [7.0, 8.0, 0.0]];
        let mut m = CsrMatrix::from_fn(3, 3, |i, j| dense[i][j]);
        assert_eq!(m.nnz(), 5);
        assert_eq!(m.row_ptr(), &[0, 2, 3, 5]);
        assert_eq!(m.get(2, 1), 8.0);
        m.set(1, 1, 5.0);
        assert_eq!(m.row_ptr(), &[0, 2, 4, 6]);
        m.set(0, 0, 0.0);
        assert_eq!(m.row_ptr(), &[0, 1, 3, 5]);
        assert_eq!(m.get(1, 1), 5.0);
        assert_eq!(m.get(0, 0), 0.0);
        let doubled = m.zip_with(&m, |a, b| a + b);
        assert_eq!(doubled.get(2, 0), 14.0);
    }

    #[test]
    fn csr_from_raw_parts() {
        // 2x3 matrix [[1,2,0],[0,3,4]]
        let m = CsrMatrix::from_csr(2, 3, vec![0, 2, 4], vec![0, 1, 1, 2], vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let triples: Vec<_> = m.iter_nonzero().collect();
        assert_eq!(triples, vec![(0, 0, 1.0), (0, 1, 2.0), (1, 1, 3.0), (1, 2, 4.0)]);
        assert!(CsrMatrix::from_csr(2, 3, vec![0, 2], vec![0, 1], vec![1.0, 2.0]).is_err());
        assert!(CsrMatrix::from_csr(1, 2, vec![0, 1], vec![2], vec![1.0]).is_err());
    }
}
