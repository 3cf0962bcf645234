//! Injected memory-pool boundary.
//!
//! The registry never allocates behind the embedder's back: every
//! backing block is reserved against a [`MemoryPool`] first, and every
//! reservation is paired with exactly one release of the same byte
//! amount. The pool only does the accounting; the registry owns the
//! storage itself once a reservation succeeds.

use bitflags::bitflags;
use parking_lot::Mutex;
use thiserror::Error;

bitflags! {
    /// Allocation discipline requested for a backing block.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct AllocFlags: u32 {
        /// Block must stay resident (never swapped out).
        const NONPAGED = 0b01;
        /// Reservation must fail immediately instead of waiting for
        /// memory to become available.
        const ATOMIC = 0b10;
    }
}

/// Errors raised when a pool cannot satisfy a reservation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AllocError {
    #[error("memory pool exhausted: requested {requested} bytes, {available} available")]
    Exhausted { requested: usize, available: usize },
}

/// Byte-accounting capability injected into the registry.
pub trait MemoryPool: Send + Sync {
    /// Reserve `bytes` against the pool. A failed reservation must
    /// leave the pool's accounting unchanged.
    fn reserve(&self, bytes: usize, flags: AllocFlags) -> Result<(), AllocError>;

    /// Return a previous reservation. Must be called with exactly the
    /// byte amount that was reserved.
    fn release(&self, bytes: usize);
}

/// Pool that admits every reservation. For embedders that budget
/// memory elsewhere.
pub struct Unmetered;

impl MemoryPool for Unmetered {
    fn reserve(&self, _bytes: usize, _flags: AllocFlags) -> Result<(), AllocError> {
        Ok(())
    }

    fn release(&self, _bytes: usize) {}
}

/// Pool with a fixed byte budget.
///
/// Reservations that would exceed the budget fail with
/// [`AllocError::Exhausted`]. The accounting itself is thread-safe;
/// this says nothing about the registries drawing from the pool, which
/// still require external serialization for mutation.
pub struct MemoryQuota {
    budget: usize,
    used: Mutex<usize>,
}

impl MemoryQuota {
    pub fn new(budget: usize) -> Self {
        Self {
            budget,
            used: Mutex::new(0),
        }
    }

    pub fn budget(&self) -> usize {
        self.budget
    }

    /// Bytes currently reserved.
    pub fn used(&self) -> usize {
        *self.used.lock()
    }

    /// Bytes still available for reservation.
    pub fn available(&self) -> usize {
        self.budget - self.used()
    }
}

impl MemoryPool for MemoryQuota {
    fn reserve(&self, bytes: usize, _flags: AllocFlags) -> Result<(), AllocError> {
        let mut used = self.used.lock();
        let available = self.budget - *used;
        if bytes > available {
            return Err(AllocError::Exhausted {
                requested: bytes,
                available,
            });
        }
        *used += bytes;
        Ok(())
    }

    fn release(&self, bytes: usize) {
        let mut used = self.used.lock();
        *used = used.saturating_sub(bytes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmetered_admits_everything() {
        let pool = Unmetered;
        assert!(pool.reserve(usize::MAX, AllocFlags::empty()).is_ok());
        pool.release(usize::MAX);
    }

    #[test]
    fn quota_tracks_reservations() {
        let pool = MemoryQuota::new(100);
        pool.reserve(60, AllocFlags::NONPAGED).expect("within budget");
        assert_eq!(pool.used(), 60);
        assert_eq!(pool.available(), 40);
        pool.release(60);
        assert_eq!(pool.used(), 0);
    }

    #[test]
    fn quota_rejects_over_budget_without_mutating() {
        let pool = MemoryQuota::new(100);
        pool.reserve(90, AllocFlags::NONPAGED).expect("within budget");
        let err = pool
            .reserve(20, AllocFlags::NONPAGED | AllocFlags::ATOMIC)
            .expect_err("over budget");
        assert_eq!(
            err,
            AllocError::Exhausted {
                requested: 20,
                available: 10,
            }
        );
        assert_eq!(pool.used(), 90);
    }
}
