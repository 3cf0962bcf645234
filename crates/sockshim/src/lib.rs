//! Socket-compatibility shim for the host/guest transport.
//!
//! Canonical socket states, shutdown and event flag sets, and the
//! cross-platform error code table the transport wrappers translate
//! through. Constants and pure mappings only: the state machine that
//! moves sockets between these states lives with the transport, not
//! here.

pub mod errors;
pub mod state;

pub use errors::*;
pub use state::*;
