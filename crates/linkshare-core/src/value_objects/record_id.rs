//! Record ID - store-assigned sequential row identifier
//!
//! Record IDs are internal. They are used for foreign references between
//! users, posts, votes and comments, and never handed to untrusted callers;
//! those only ever see a [`Guid`](super::Guid).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sequential 64-bit row identifier assigned by the store
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RecordId(i64);

impl RecordId {
    /// Create a new RecordId from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Check if the id is zero (not yet assigned by the store)
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Parse from string representation
    pub fn parse(s: &str) -> Result<Self, RecordIdParseError> {
        s.parse::<i64>()
            .map(RecordId)
            .map_err(|_| RecordIdParseError::InvalidFormat)
    }
}

/// Error when parsing a RecordId from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RecordIdParseError {
    #[error("invalid record id format")]
    InvalidFormat,
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<RecordId> for i64 {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl std::str::FromStr for RecordId {
    type Err = RecordIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordId::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_into_inner() {
        let id = RecordId::new(42);
        assert_eq!(id.into_inner(), 42);
        assert!(!id.is_zero());
        assert!(RecordId::default().is_zero());
    }

    #[test]
    fn test_parse() {
        assert_eq!(RecordId::parse("17").unwrap(), RecordId::new(17));
        assert_eq!(
            RecordId::parse("abc"),
            Err(RecordIdParseError::InvalidFormat)
        );
        assert_eq!("9".parse::<RecordId>().unwrap(), RecordId::new(9));
    }

    #[test]
    fn test_display() {
        assert_eq!(RecordId::new(123).to_string(), "123");
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&RecordId::new(5)).unwrap();
        assert_eq!(json, "5");
    }
}
