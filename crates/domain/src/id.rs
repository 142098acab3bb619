//! Device identifier newtype.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Integer identifier of a device, as stored in the billing tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(i64);

impl DeviceId {
    /// Wrap a raw database identifier.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Access the raw identifier.
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

impl From<i64> for DeviceId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for DeviceId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| ValidationError::DeviceId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_integer_identifier() {
        let id: DeviceId = "42".parse().unwrap();
        assert_eq!(id.as_i64(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn should_reject_non_integer_identifier() {
        assert_eq!(
            DeviceId::from_str("switch-5"),
            Err(ValidationError::DeviceId)
        );
        assert_eq!(DeviceId::from_str(""), Err(ValidationError::DeviceId));
    }

    #[test]
    fn should_serialize_as_bare_number() {
        let json = serde_json::to_string(&DeviceId::new(6)).unwrap();
        assert_eq!(json, "6");
    }
}
