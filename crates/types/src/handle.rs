use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identifier of the peer context an endpoint lives in.
///
/// The all-ones value is reserved as the invalid sentinel and never
/// names a real context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContextId(pub u32);

impl ContextId {
    pub const INVALID: ContextId = ContextId(u32::MAX);

    pub fn is_valid(&self) -> bool {
        *self != Self::INVALID
    }
}

/// Identifier of a resource within a context.
///
/// Shares the all-ones invalid sentinel convention with [`ContextId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(pub u32);

impl ResourceId {
    pub const INVALID: ResourceId = ResourceId(u32::MAX);

    pub fn is_valid(&self) -> bool {
        *self != Self::INVALID
    }
}

/// Opaque identifier for a communication endpoint.
///
/// A fixed-size pair of context and resource identifiers. Consumers
/// compare handles only for equality; no ordering or interpretation of
/// the components is defined beyond the invalid sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EndpointHandle {
    context: ContextId,
    resource: ResourceId,
}

impl EndpointHandle {
    /// Sentinel signaling "no such endpoint".
    pub const INVALID: EndpointHandle = EndpointHandle {
        context: ContextId::INVALID,
        resource: ResourceId::INVALID,
    };

    pub fn new(context: ContextId, resource: ResourceId) -> Self {
        Self { context, resource }
    }

    /// Build a handle from raw component values.
    pub fn from_raw(context: u32, resource: u32) -> Self {
        Self::new(ContextId(context), ResourceId(resource))
    }

    pub fn context(&self) -> ContextId {
        self.context
    }

    pub fn resource(&self) -> ResourceId {
        self.resource
    }

    /// A handle is valid unless it equals the invalid sentinel.
    pub fn is_valid(&self) -> bool {
        *self != Self::INVALID
    }
}

impl fmt::Display for EndpointHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.context.0, self.resource.0)
    }
}

/// Errors emitted when parsing the textual `context:resource` form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HandleParseError {
    #[error("endpoint handle must be 'context:resource', got '{0}'")]
    MissingSeparator(String),
    #[error("endpoint handle component is not a u32: {0}")]
    InvalidComponent(String),
}

impl FromStr for EndpointHandle {
    type Err = HandleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (context, resource) = s
            .split_once(':')
            .ok_or_else(|| HandleParseError::MissingSeparator(s.to_string()))?;
        let context = context
            .parse::<u32>()
            .map_err(|_| HandleParseError::InvalidComponent(context.to_string()))?;
        let resource = resource
            .parse::<u32>()
            .map_err(|_| HandleParseError::InvalidComponent(resource.to_string()))?;
        Ok(EndpointHandle::from_raw(context, resource))
    }
}
