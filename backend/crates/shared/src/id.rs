//! Common ID Types
//!
//! Type-safe ID wrappers for domain entities.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;
use uuid::Uuid;

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type ClaimId = Id<markers::Claim>;
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id<T> {
    value: Uuid,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Create a new random ID (UUID v4)
    pub fn new() -> Self {
        Self {
            value: Uuid::new_v4(),
            _marker: PhantomData,
        }
    }

    /// Create from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self {
            value: uuid,
            _marker: PhantomData,
        }
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.value
    }

    /// Convert to UUID
    pub fn into_uuid(self) -> Uuid {
        self.value
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> FromStr for Id<T> {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_uuid(Uuid::parse_str(s)?))
    }
}

impl<T> serde::Serialize for Id<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

impl<'de, T> serde::Deserialize<'de> for Id<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self::from_uuid(Uuid::deserialize(deserializer)?))
    }
}

/// Marker types for [`Id`]
pub mod markers {
    /// User marker
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    pub struct User;
    /// Claim marker
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Claim;
    /// Feedback marker
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Feedback;
    /// Repair centre marker
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RepairCentre;
}

/// User ID
pub type UserId = Id<markers::User>;
/// Claim ID
pub type ClaimId = Id<markers::Claim>;
/// Feedback ID
pub type FeedbackId = Id<markers::Feedback>;
/// Repair centre ID
pub type RepairCentreId = Id<markers::RepairCentre>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_unique() {
        let a = ClaimId::new();
        let b = ClaimId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_from_str_roundtrip() {
        let id = UserId::new();
        let parsed: UserId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_from_str_rejects_garbage() {
        assert!("not-a-uuid".parse::<ClaimId>().is_err());
    }

    #[test]
    fn test_serde_roundtrip() {
        let id = FeedbackId::new();
        let json = serde_json::to_string(&id).unwrap();
        let back: FeedbackId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}
