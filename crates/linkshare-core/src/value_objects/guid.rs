//! Guid - externally addressable identifier for posts and comments
//!
//! A random UUID (v4) that hides the sequential [`RecordId`](super::RecordId)
//! from callers. Serialized as the canonical hyphenated string.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque public identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Guid(Uuid);

impl Guid {
    /// Generate a fresh random guid
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID
    #[inline]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the inner UUID by value
    #[inline]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }

    /// Parse from string representation
    ///
    /// The input is taken verbatim; surrounding whitespace is rejected.
    pub fn parse(s: &str) -> Result<Self, GuidParseError> {
        Uuid::parse_str(s)
            .map(Guid)
            .map_err(|_| GuidParseError::InvalidFormat)
    }
}

impl Default for Guid {
    fn default() -> Self {
        Self::new()
    }
}

/// Error when parsing a Guid from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GuidParseError {
    #[error("invalid guid format")]
    InvalidFormat,
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl From<Uuid> for Guid {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<Guid> for Uuid {
    fn from(guid: Guid) -> Self {
        guid.0
    }
}

impl std::str::FromStr for Guid {
    type Err = GuidParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Guid::parse(s)
    }
}
