//! Tuning options for value storage.
//!
//! This module provides the `StorageOptions` struct, which controls when bulk
//! operations switch to the rayon thread pool and when `StorageType::auto`
//! prefers a sparse layout. Options are passed explicitly or installed once as
//! the process-wide default.

use std::sync::OnceLock;

use tracing::info;

use crate::error::{Result, UnitError};

/// Cell count above which bulk operations run in parallel.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1000;

/// Largest non-zero fraction for which a sparse layout is chosen.
pub const DEFAULT_SPARSE_FILL_RATIO: f64 = 0.25;

static GLOBAL: OnceLock<StorageOptions> = OnceLock::new();

/// Storage and parallelism parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StorageOptions {
    /// Minimum number of cells before rayon is used
    pub parallel_threshold: usize,

    /// Maximum fraction of non-zero cells for sparse storage, in `[0, 1]`
    pub sparse_fill_ratio: f64,
}

impl Default for StorageOptions {
    fn default() -> Self {
        StorageOptions {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            sparse_fill_ratio: DEFAULT_SPARSE_FILL_RATIO,
        }
    }
}

impl StorageOptions {
    pub fn with_parallel_threshold(mut self, cells: usize) -> Self {
        self.parallel_threshold = cells;
        self
    }

    pub fn with_sparse_fill_ratio(mut self, ratio: f64) -> Self {
        self.sparse_fill_ratio = ratio;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.sparse_fill_ratio) {
            return Err(UnitError::InvalidArgument(format!(
                "sparse_fill_ratio must lie in [0, 1], got {}",
                self.sparse_fill_ratio
            )));
        }
        Ok(())
    }

    /// True when `cells` is large enough to go parallel.
    #[inline]
    pub fn is_parallel(&self, cells: usize) -> bool {
        cells > self.parallel_threshold
    }

    /// The installed process-wide options, or the defaults.
    pub fn global() -> &'static StorageOptions {
        GLOBAL.get_or_init(StorageOptions::default)
    }

    /// Make these the process-wide options. Works once, before first use of `global()`.
    pub fn install(self) -> Result<()> {
        self.validate()?;
        GLOBAL.set(self).map_err(|_| {
            UnitError::InvalidArgument("global storage options are already initialized".to_string())
        })?;
        info!(
            parallel_threshold = self.parallel_threshold,
            sparse_fill_ratio = self.sparse_fill_ratio,
            "installed global storage options"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let o = StorageOptions::default();
        assert_eq!(o.parallel_threshold, 1000);
        assert!(!o.is_parallel(1000));
        assert!(o.is_parallel(1001));
        o.validate().unwrap();
    }

    #[test]
    fn setters_and_validation() {
        let o = StorageOptions::default().with_parallel_threshold(10).with_sparse_fill_ratio(0.5);
        assert!(o.is_parallel(11));
        assert_eq!(o.sparse_fill_ratio, 0.5);
        let bad = o.with_sparse_fill_ratio(1.5);
        assert!(matches!(bad.validate(), Err(UnitError::InvalidArgument(_))));
        assert!(bad.install().is_err());
    }
}
