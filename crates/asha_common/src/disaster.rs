//! Disaster taxonomy shared by the knowledge store, classifier and resolver.
//!
//! The set of supported disasters is closed and known at build time. Adding
//! a variant requires a matching entry in the built-in knowledge pack; the
//! resolver validates that pairing at construction.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three supported hazard types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disaster {
    Earthquake,
    Flood,
    Cyclone,
}

impl Disaster {
    /// Fixed scan order used everywhere a "first match wins" rule applies.
    pub const ALL: [Disaster; 3] = [Disaster::Earthquake, Disaster::Flood, Disaster::Cyclone];

    pub fn as_str(&self) -> &'static str {
        match self {
            Disaster::Earthquake => "earthquake",
            Disaster::Flood => "flood",
            Disaster::Cyclone => "cyclone",
        }
    }

    /// Capitalized form for answer headings.
    pub fn title(&self) -> &'static str {
        match self {
            Disaster::Earthquake => "Earthquake",
            Disaster::Flood => "Flood",
            Disaster::Cyclone => "Cyclone",
        }
    }

    /// Parse an exact disaster name, as typed on the CLI.
    pub fn from_name(name: &str) -> Option<Disaster> {
        match name.to_lowercase().as_str() {
            "earthquake" => Some(Disaster::Earthquake),
            "flood" => Some(Disaster::Flood),
            "cyclone" => Some(Disaster::Cyclone),
            _ => None,
        }
    }
}

impl fmt::Display for Disaster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Temporal guidance bucket for phase-based advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Before,
    During,
    After,
}

impl Phase {
    pub const ALL: [Phase; 3] = [Phase::Before, Phase::During, Phase::After];

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Before => "before",
            Phase::During => "during",
            Phase::After => "after",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Safety verdict attached to a hazard location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SafetyCategory {
    Safe,
    Unsafe,
}

impl SafetyCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SafetyCategory::Safe => "safe",
            SafetyCategory::Unsafe => "unsafe",
        }
    }
}

impl fmt::Display for SafetyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
