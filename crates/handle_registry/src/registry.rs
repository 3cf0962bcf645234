//! Bounded dynamic handle registry.

use std::sync::Arc;

use guestlink_types::EndpointHandle;
use tracing::{debug, warn};

use crate::errors::{RegistryError, Result};
use crate::mem::{AllocFlags, MemoryPool};

/// Bytes charged per backing block for the registry header.
const HEADER_BYTES: usize = 16;

const HANDLE_BYTES: usize = std::mem::size_of::<EndpointHandle>();

/// Capacity substituted when `create` is given an initial capacity of
/// zero. Keeps the default backing block at 64 bytes.
pub const DEFAULT_CAPACITY: u32 = 6;

/// Largest capacity whose backing-block size is still expressible in a
/// `u32`.
pub const MAX_CAPACITY: u32 = ((u32::MAX as usize - HEADER_BYTES - 1) / HANDLE_BYTES) as u32;

fn block_bytes(capacity: u32) -> usize {
    HEADER_BYTES + capacity as usize * HANDLE_BYTES
}

/// Growable, capacity-limited registry of endpoint handles.
///
/// Entries at indices `[0, len)` are the logically present handles;
/// the slots above hold the invalid sentinel. Growth doubles the
/// backing block, clipped to the `max_capacity` ceiling fixed at
/// creation, and charges the injected [`MemoryPool`] before touching
/// the storage, so a failed reservation leaves the registry fully
/// intact.
///
/// # Ordering
///
/// Removal by value swaps the last entry into the vacated slot. This
/// is a contract, not an accident: removal is O(1) and the relative
/// order of the remaining entries is **not** preserved. Code that
/// depends on iteration order is incorrect.
///
/// # Concurrency
///
/// The registry carries no internal synchronization. Mutating a
/// registry from multiple threads is undefined unless the embedder
/// serializes access (the subsystems that own registries already hold
/// their own locks while mutating). Read-only calls may run
/// concurrently with each other but not with any mutation. The
/// `&mut self` receivers encode this single-writer discipline in the
/// API. No operation blocks or performs I/O; reservations carry
/// [`AllocFlags::ATOMIC`] so the pool fails immediately instead of
/// waiting.
pub struct HandleRegistry {
    entries: Box<[EndpointHandle]>,
    size: u32,
    max_capacity: u32,
    flags: AllocFlags,
    pool: Arc<dyn MemoryPool>,
}

impl std::fmt::Debug for HandleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandleRegistry")
            .field("entries", &self.entries)
            .field("size", &self.size)
            .field("max_capacity", &self.max_capacity)
            .field("flags", &self.flags)
            .field("pool", &"<dyn MemoryPool>")
            .finish()
    }
}

impl HandleRegistry {
    /// Create a registry with `initial_capacity` slots (0 substitutes
    /// [`DEFAULT_CAPACITY`], clipped to `max_capacity`) and a growth
    /// ceiling of `max_capacity` slots.
    ///
    /// Fails with [`RegistryError::InvalidBounds`] before reserving
    /// anything if `max_capacity == 0` or
    /// `initial_capacity > max_capacity`.
    pub fn create(
        pool: Arc<dyn MemoryPool>,
        initial_capacity: u32,
        max_capacity: u32,
    ) -> Result<Self> {
        debug_assert!(max_capacity <= MAX_CAPACITY);

        if max_capacity == 0 || initial_capacity > max_capacity {
            return Err(RegistryError::InvalidBounds {
                initial: initial_capacity,
                max: max_capacity,
            });
        }

        let capacity = if initial_capacity == 0 {
            DEFAULT_CAPACITY.min(max_capacity)
        } else {
            initial_capacity
        };

        let flags = AllocFlags::NONPAGED | AllocFlags::ATOMIC;
        pool.reserve(block_bytes(capacity), flags)?;
        let entries = vec![EndpointHandle::INVALID; capacity as usize].into_boxed_slice();

        Ok(Self {
            entries,
            size: 0,
            max_capacity,
            flags,
            pool,
        })
    }

    /// Number of logically present handles.
    pub fn len(&self) -> usize {
        self.size as usize
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Slots currently allocated in the backing block.
    pub fn capacity(&self) -> u32 {
        self.entries.len() as u32
    }

    /// Ceiling the registry may grow to; fixed at creation.
    pub fn max_capacity(&self) -> u32 {
        self.max_capacity
    }

    /// Append a handle, growing the backing block if needed.
    ///
    /// Fails with [`RegistryError::CapacityExceeded`] once the ceiling
    /// is reached and with [`RegistryError::AllocationFailed`] when the
    /// pool rejects the grown block; in both cases the registry is
    /// unchanged.
    pub fn append(&mut self, handle: EndpointHandle) -> Result<()> {
        if self.size == self.capacity() {
            self.grow()?;
        }
        self.entries[self.size as usize] = handle;
        self.size += 1;
        Ok(())
    }

    fn grow(&mut self) -> Result<()> {
        let capacity = self.capacity();
        if capacity >= self.max_capacity {
            return Err(RegistryError::CapacityExceeded {
                max_capacity: self.max_capacity,
            });
        }

        let bump = capacity.min(self.max_capacity - capacity);
        let new_capacity = capacity + bump;
        if let Err(err) = self.pool.reserve(block_bytes(new_capacity), self.flags) {
            warn!(
                requested = block_bytes(new_capacity),
                "registry growth allocation failed"
            );
            return Err(err.into());
        }

        let mut grown = vec![EndpointHandle::INVALID; new_capacity as usize].into_boxed_slice();
        grown[..capacity as usize].copy_from_slice(&self.entries);
        self.entries = grown;
        self.pool.release(block_bytes(capacity));
        debug!(
            capacity = new_capacity,
            max_capacity = self.max_capacity,
            "registry grew backing block"
        );
        Ok(())
    }

    /// Remove the first entry equal to `handle`.
    ///
    /// The last entry is swapped into the vacated slot (see the type
    /// docs on ordering) and the vacated tail slot is cleared to the
    /// invalid sentinel. Returns `None` without mutating when no entry
    /// matches; absence is an ordinary outcome, not an error.
    pub fn remove(&mut self, handle: EndpointHandle) -> Option<EndpointHandle> {
        let len = self.len();
        let index = self.entries[..len].iter().position(|e| *e == handle)?;
        let removed = self.entries[index];
        self.entries[index] = self.entries[len - 1];
        self.entries[len - 1] = EndpointHandle::INVALID;
        self.size -= 1;
        Some(removed)
    }

    /// Remove and return the entry in the last logical slot, or `None`
    /// when the registry is empty.
    pub fn remove_tail(&mut self) -> Option<EndpointHandle> {
        if self.size == 0 {
            return None;
        }
        let last = self.len() - 1;
        let removed = self.entries[last];
        self.entries[last] = EndpointHandle::INVALID;
        self.size -= 1;
        Some(removed)
    }

    /// Entry at `index`, or `None` when `index >= len()`. Out-of-range
    /// access is a defined query, not an error.
    pub fn entry(&self, index: usize) -> Option<EndpointHandle> {
        if index >= self.len() {
            return None;
        }
        Some(self.entries[index])
    }

    /// Whether any entry equals `handle`.
    pub fn contains(&self, handle: EndpointHandle) -> bool {
        self.entries[..self.len()].iter().any(|e| *e == handle)
    }

    /// Independent right-sized copy of the present entries.
    ///
    /// The copy's capacity *and* ceiling both equal the source's
    /// current length, so a snapshot can never grow; callers wanting a
    /// growable duplicate create a fresh registry and append. A failed
    /// reservation leaves the source unaffected.
    pub fn snapshot(&self) -> Result<Self> {
        let capacity = self.size;
        self.pool.reserve(block_bytes(capacity), self.flags)?;
        let mut entries = vec![EndpointHandle::INVALID; capacity as usize].into_boxed_slice();
        entries.copy_from_slice(&self.entries[..capacity as usize]);

        Ok(Self {
            entries,
            size: self.size,
            max_capacity: capacity,
            flags: self.flags,
            pool: Arc::clone(&self.pool),
        })
    }

    /// Borrow the present entries, or `None` when the registry is
    /// empty. The borrow ties the view to the registry: it cannot
    /// outlive the next mutation.
    pub fn handles(&self) -> Option<&[EndpointHandle]> {
        if self.size == 0 {
            return None;
        }
        Some(&self.entries[..self.len()])
    }
}

impl Drop for HandleRegistry {
    fn drop(&mut self) {
        self.pool.release(block_bytes(self.capacity()));
    }
}
