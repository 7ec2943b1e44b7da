//! Bulk cell kernels shared by dense storage.
//!
//! Every kernel runs sequentially below `StorageOptions::parallel_threshold` and on
//! the rayon pool above it. Without the `rayon` feature they are always sequential.

use crate::config::StorageOptions;
use crate::core::Real;

/// Applies `f` to every cell.
pub fn map_in_place<T, F>(data: &mut [T], f: F, options: &StorageOptions)
where
    T: Real,
    F: Fn(T) -> T + Send + Sync,
{
    #[cfg(feature = "rayon")]
    {
        if options.is_parallel(data.len()) {
            use rayon::prelude::*;
            data.par_iter_mut().for_each(|v| *v = f(*v));
            return;
        }
    }
    #[cfg(not(feature = "rayon"))]
    let _ = options;
    data.iter_mut().for_each(|v| *v = f(*v));
}

/// `lhs[i] = f(lhs[i], rhs[i])`; both slices must have equal length.
pub fn zip_in_place<T, F>(lhs: &mut [T], rhs: &[T], f: F, options: &StorageOptions)
where
    T: Real,
    F: Fn(T, T) -> T + Send + Sync,
{
    debug_assert_eq!(lhs.len(), rhs.len());
    #[cfg(feature = "rayon")]
    {
        if options.is_parallel(lhs.len()) {
            use rayon::prelude::*;
            lhs.par_iter_mut().zip(rhs.par_iter()).for_each(|(a, b)| *a = f(*a, *b));
            return;
        }
    }
    #[cfg(not(feature = "rayon"))]
    let _ = options;
    lhs.iter_mut().zip(rhs).for_each(|(a, b)| *a = f(*a, *b));
}

/// Number of cells that are not exactly zero.
pub fn count_nonzero<T: Real>(data: &[T], options: &StorageOptions) -> usize {
    #[cfg(feature = "rayon")]
    {
        if options.is_parallel(data.len()) {
            use rayon::prelude::*;
            return data.par_iter().filter(|v| !v.is_zero()).count();
        }
    }
    #[cfg(not(feature = "rayon"))]
    let _ = options;
    data.iter().filter(|v| !v.is_zero()).count()
}

/// Sum of all cells.
pub fn sum<T: Real>(data: &[T], options: &StorageOptions) -> T {
    #[cfg(feature = "rayon")]
    {
        if options.is_parallel(data.len()) {
            use rayon::prelude::*;
            return data.par_iter().copied().reduce(T::zero, |acc, v| acc + v);
        }
    }
    #[cfg(not(feature = "rayon"))]
    let _ = options;
    data.iter().fold(T::zero(), |acc, &v| acc + v)
}
