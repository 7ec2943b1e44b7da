//! Core traits shared by storage and value types.

pub mod traits;
pub use traits::{MatShape, Real, Storage};
