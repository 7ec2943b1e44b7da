//! Core numeric and storage traits for measura.

use std::fmt::{Debug, Display};

use num_traits::Float;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::storage::StorageType;

/// Floating-point cell type of a quantity: `f64` (double) or `f32` (float).
///
/// Scales always compute in `f64`; the float variant narrows on storage.
pub trait Real:
    Float + Default + Debug + Display + Send + Sync + Serialize + DeserializeOwned + 'static
{
    /// Narrow (or copy) an `f64` into this type.
    fn of_f64(v: f64) -> Self;
    /// Widen (or copy) into `f64`.
    fn into_f64(self) -> f64;
}

impl Real for f64 {
    #[inline]
    fn of_f64(v: f64) -> Self {
        v
    }
    #[inline]
    fn into_f64(self) -> f64 {
        self
    }
}

impl Real for f32 {
    #[inline]
    fn of_f64(v: f64) -> Self {
        v as f32
    }
    #[inline]
    fn into_f64(self) -> f64 {
        self as f64
    }
}

/// Backing store of a homogeneous collection of SI values.
pub trait Storage: Clone {
    /// Dense or sparse.
    fn storage_type(&self) -> StorageType;
    /// Number of non-zero cells.
    fn cardinality(&self) -> usize;
    /// Same values, dense layout. Returns `self` untouched when already dense.
    fn to_dense(self) -> Self;
    /// Same values, sparse layout. Returns `self` untouched when already sparse.
    fn to_sparse(self) -> Self;
    /// Fully independent deep copy.
    fn copy(&self) -> Self {
        self.clone()
    }
}

/// Row/column extents of a 2-D store.
pub trait MatShape {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }
}
