//! Dense stores on top of `Vec<T>` and `faer::Mat<T>`.

use faer::Mat;

use crate::config::StorageOptions;
use crate::core::{MatShape, Real};
use crate::error::{Result, UnitError};
use crate::parallel;

/// Dense matrix from rows; fails when empty or jagged.
pub fn mat_from_rows<T: Real>(rows: &[Vec<T>]) -> Result<Mat<T>> {
    let ncols = check_rows(rows)?;
    Ok(Mat::from_fn(rows.len(), ncols, |i, j| rows[i][j]))
}

/// Column count of a rectangular, non-empty set of rows.
pub fn check_rows<T>(rows: &[Vec<T>]) -> Result<usize> {
    let Some(first) = rows.first() else {
        return Err(UnitError::InvalidArgument("matrix data has no rows".to_string()));
    };
    let ncols = first.len();
    if ncols == 0 {
        return Err(UnitError::InvalidArgument("matrix data has no columns".to_string()));
    }
    if let Some((r, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != ncols) {
        return Err(UnitError::InvalidArgument(format!(
            "jagged matrix data: row {r} has {} cells, row 0 has {ncols}",
            row.len()
        )));
    }
    Ok(ncols)
}

pub fn mat_to_rows<T: Real>(m: &Mat<T>) -> Vec<Vec<T>> {
    (0..m.nrows()).map(|i| (0..m.ncols()).map(|j| m[(i, j)]).collect()).collect()
}

/// `f` applied to every cell. Each column is one contiguous slice and goes
/// parallel above the threshold.
pub fn mat_map<T, F>(m: &Mat<T>, f: F, options: &StorageOptions) -> Mat<T>
where
    T: Real,
    F: Fn(T) -> T + Send + Sync,
{
    let mut out = m.clone();
    for j in 0..out.ncols() {
        parallel::map_in_place(out.col_as_slice_mut(j), &f, options);
    }
    out
}

/// Cell-wise `f(a, b)`; shapes are checked by the caller.
pub fn mat_zip<T, F>(a: &Mat<T>, b: &Mat<T>, f: F, options: &StorageOptions) -> Mat<T>
where
    T: Real,
    F: Fn(T, T) -> T + Send + Sync,
{
    let mut out = a.clone();
    for j in 0..out.ncols() {
        parallel::zip_in_place(out.col_as_slice_mut(j), b.col_as_slice(j), &f, options);
    }
    out
}

pub fn mat_count_nonzero<T: Real>(m: &Mat<T>, options: &StorageOptions) -> usize {
    (0..m.ncols()).map(|j| parallel::count_nonzero(m.col_as_slice(j), options)).sum()
}

pub fn mat_sum<T: Real>(m: &Mat<T>, options: &StorageOptions) -> T {
    (0..m.ncols()).fold(T::zero(), |acc, j| acc + parallel::sum(m.col_as_slice(j), options))
}

impl<T: Real> MatShape for Mat<T> {
    fn nrows(&self) -> usize {
        Mat::nrows(self)
    }
    fn ncols(&self) -> usize {
        Mat::ncols(self)
    }
}

/// Determinant from faer's LU factorization, computed in `f64`.
pub fn determinant<T: Real>(m: &Mat<T>) -> Result<f64> {
    let n = m.nrows();
    if n != m.ncols() {
        return Err(UnitError::InvalidArgument(format!(
            "determinant of a non-square {n}x{} matrix",
            m.ncols()
        )));
    }
    let wide = Mat::<f64>::from_fn(n, n, |i, j| m[(i, j)].into_f64());
    Ok(wide.determinant())
}
