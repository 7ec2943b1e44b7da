//! Access typestate of containers.
//!
//! A container is `Immutable` or `Mutable` at the type level. Setters and
//! in-place operations only exist on the `Mutable` state; switching states
//! always copies or consumes, so the two never share cells.

mod sealed {
    pub trait Sealed {}
}

pub trait Access: sealed::Sealed + Copy + Default + std::fmt::Debug + Send + Sync + 'static {
    const MUTABLE: bool;
}

/// Read-only container; the default state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Immutable;

/// Container that can be changed in place through `&mut self`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mutable;

impl sealed::Sealed for Immutable {}
impl sealed::Sealed for Mutable {}

impl Access for Immutable {
    const MUTABLE: bool = false;
}

impl Access for Mutable {
    const MUTABLE: bool = true;
}
