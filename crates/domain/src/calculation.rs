//! Calculation type — which family of billing rows a query reads.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Distinguishes aggregate billing rows from per-tenant ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum CalculationType {
    /// Aggregate rows for the whole fleet.
    #[default]
    Group,
    /// Per-tenant rows.
    Individual,
}

impl CalculationType {
    /// Literal stored in the `calculationtype` column.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Group => "Group",
            Self::Individual => "Individual",
        }
    }
}

impl fmt::Display for CalculationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalculationType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            v if v.eq_ignore_ascii_case("group") => Ok(Self::Group),
            v if v.eq_ignore_ascii_case("individual") => Ok(Self::Individual),
            _ => Err(ValidationError::CalculationType),
        }
    }
}

impl TryFrom<String> for CalculationType {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
