use serde::{Deserialize, Serialize};

/// Reason a queue-pair endpoint was detached from its peer.
///
/// Carried on detach notifications at the transport boundary; the
/// transport itself decides when detaches happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetachCause {
    /// Ordinary detach initiated by either side.
    Regular,
    /// The peer was migrated to another host mid-connection.
    Migration,
}

impl DetachCause {
    /// Decode a raw cause byte from a detach notification.
    pub fn from_raw(raw: u8) -> Option<DetachCause> {
        match raw {
            0 => Some(DetachCause::Regular),
            1 => Some(DetachCause::Migration),
            _ => None,
        }
    }

    pub fn as_raw(&self) -> u8 {
        match self {
            DetachCause::Regular => 0,
            DetachCause::Migration => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_codes_are_stable() {
        assert_eq!(DetachCause::Regular.as_raw(), 0);
        assert_eq!(DetachCause::Migration.as_raw(), 1);
        assert_eq!(DetachCause::from_raw(0), Some(DetachCause::Regular));
        assert_eq!(DetachCause::from_raw(1), Some(DetachCause::Migration));
        assert_eq!(DetachCause::from_raw(2), None);
    }

    #[test]
    fn serde_uses_snake_case_tags() {
        let json = serde_json::to_string(&DetachCause::Migration).expect("serialize cause");
        assert_eq!(json, r#""migration""#);
    }
}
