//! Socket states and flag sets shared across platform wrappers.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a transport socket.
///
/// Discriminants are wire-stable; platform wrappers exchange the raw
/// values directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum SocketState {
    Free = 0,
    Unconnected = 1,
    Connecting = 2,
    Connected = 3,
    Disconnecting = 4,
    Disconnected = 5,
    /// No standard state slot exists for listening sockets, so the
    /// shim defines its own, kept well outside the connected-lifecycle
    /// range.
    Listen = 255,
}

impl SocketState {
    pub fn from_raw(raw: u8) -> Option<SocketState> {
        match raw {
            0 => Some(SocketState::Free),
            1 => Some(SocketState::Unconnected),
            2 => Some(SocketState::Connecting),
            3 => Some(SocketState::Connected),
            4 => Some(SocketState::Disconnecting),
            5 => Some(SocketState::Disconnected),
            255 => Some(SocketState::Listen),
            _ => None,
        }
    }

    pub fn as_raw(&self) -> u8 {
        *self as u8
    }
}

bitflags! {
    /// Which directions of a connection have been shut down.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ShutdownMode: u8 {
        const RCV = 0b01;
        const SEND = 0b10;
        /// Both directions; the value the wrappers mask against.
        const MASK = 0b11;
    }
}

bitflags! {
    /// Readiness events signalled on a transport socket.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SockEvents: u32 {
        const READ = 0x1;
        const WRITE = 0x2;
        const ACCEPT = 0x8;
        const CONNECT = 0x10;
        const CLOSE = 0x20;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_discriminants_are_stable() {
        assert_eq!(SocketState::Free.as_raw(), 0);
        assert_eq!(SocketState::Unconnected.as_raw(), 1);
        assert_eq!(SocketState::Connecting.as_raw(), 2);
        assert_eq!(SocketState::Connected.as_raw(), 3);
        assert_eq!(SocketState::Disconnecting.as_raw(), 4);
        assert_eq!(SocketState::Disconnected.as_raw(), 5);
        assert_eq!(SocketState::Listen.as_raw(), 255);
    }

    #[test]
    fn state_raw_roundtrip() {
        for raw in [0u8, 1, 2, 3, 4, 5, 255] {
            let state = SocketState::from_raw(raw).expect("known state");
            assert_eq!(state.as_raw(), raw);
        }
        assert_eq!(SocketState::from_raw(6), None);
        assert_eq!(SocketState::from_raw(254), None);
    }

    #[test]
    fn listen_state_stays_out_of_lifecycle_range() {
        assert!(SocketState::Listen.as_raw() > SocketState::Disconnected.as_raw());
    }

    #[test]
    fn shutdown_mask_covers_both_directions() {
        assert_eq!(ShutdownMode::RCV | ShutdownMode::SEND, ShutdownMode::MASK);
        assert_eq!(ShutdownMode::all(), ShutdownMode::MASK);
        assert!(ShutdownMode::MASK.contains(ShutdownMode::RCV));
        assert!(ShutdownMode::MASK.contains(ShutdownMode::SEND));
    }

    #[test]
    fn event_bits_are_disjoint() {
        let all = [
            SockEvents::READ,
            SockEvents::WRITE,
            SockEvents::ACCEPT,
            SockEvents::CONNECT,
            SockEvents::CLOSE,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in all.iter().skip(i + 1) {
                assert!((*a & *b).is_empty());
            }
        }
    }

    #[test]
    fn state_serde_uses_snake_case_tags() {
        let json = serde_json::to_string(&SocketState::Disconnecting).expect("serialize state");
        assert_eq!(json, r#""disconnecting""#);
    }
}
