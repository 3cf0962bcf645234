//! Error types for the handle registry

use crate::mem::AllocError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// `create` was called with `max == 0` or `initial > max`. Nothing
    /// was allocated.
    #[error("registry bounds are invalid (initial capacity {initial}, max capacity {max})")]
    InvalidBounds { initial: u32, max: u32 },

    /// The memory pool could not satisfy a reservation. The registry
    /// that existed before the call (if any) is unchanged and usable.
    #[error("backing allocation failed: {0}")]
    AllocationFailed(#[from] AllocError),

    /// Growth would exceed the ceiling fixed at creation. A design
    /// limit, not a transient resource shortage.
    #[error("registry is at its maximum capacity of {max_capacity}")]
    CapacityExceeded { max_capacity: u32 },
}

pub type Result<T> = std::result::Result<T, RegistryError>;
