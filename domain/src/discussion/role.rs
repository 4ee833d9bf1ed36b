//! Role value object identifying a discussion participant

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// The fixed participant roster (Value Object)
///
/// The protocol is closed over exactly these four roles: three panelists
/// who produce substantive content each round, and one moderator who
/// frames the topic and owns the final synthesis. Which provider/model
/// backs a role is resolved at configuration time, outside the domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    PanelistA,
    PanelistB,
    PanelistC,
    Moderator,
}

/// Error returned when parsing an unknown role identifier
#[derive(Error, Debug)]
#[error("Unknown role: {0}")]
pub struct ParseRoleError(String);

impl Role {
    /// Get the string identifier for this role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::PanelistA => "panelist-a",
            Role::PanelistB => "panelist-b",
            Role::PanelistC => "panelist-c",
            Role::Moderator => "moderator",
        }
    }

    /// Fixed display name shown in transcripts and the UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::PanelistA => "Panelist A",
            Role::PanelistB => "Panelist B",
            Role::PanelistC => "Panelist C",
            Role::Moderator => "Moderator",
        }
    }

    /// The three panelists in protocol order
    pub fn panelists() -> [Role; 3] {
        [Role::PanelistA, Role::PanelistB, Role::PanelistC]
    }

    /// All four roles in protocol order
    pub fn all() -> [Role; 4] {
        [
            Role::Moderator,
            Role::PanelistA,
            Role::PanelistB,
            Role::PanelistC,
        ]
    }

    /// Check if this role is the moderator
    pub fn is_moderator(&self) -> bool {
        matches!(self, Role::Moderator)
    }

    /// Check if this role is a panelist
    pub fn is_panelist(&self) -> bool {
        !self.is_moderator()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "panelist-a" | "panelist_a" => Ok(Role::PanelistA),
            "panelist-b" | "panelist_b" => Ok(Role::PanelistB),
            "panelist-c" | "panelist_c" => Ok(Role::PanelistC),
            "moderator" => Ok(Role::Moderator),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

impl Serialize for Role {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
