//! Bounded dynamic registry of communication-endpoint handles.
//!
//! The registry tracks which endpoints exist inside a host/guest
//! message-passing subsystem. It is a growable, capacity-limited
//! container: growth doubles the backing block up to a hard ceiling
//! fixed at creation, every allocation goes through an injected
//! [`mem::MemoryPool`] and may fail, and removal swaps the last entry
//! into the vacated slot rather than preserving order.
//!
//! The registry performs no internal locking. Embedders that mutate a
//! registry from more than one thread must serialize access themselves;
//! see [`registry::HandleRegistry`] for the full contract.

pub mod errors;
pub mod mem;
pub mod registry;

pub use errors::*;
pub use mem::*;
pub use registry::{HandleRegistry, DEFAULT_CAPACITY, MAX_CAPACITY};
