//! Tier value object - represents skill depth ranks.
//!
//! Provides type safety for tier references instead of using magic strings
//! like "trained" or "expert", so a typo'd tier can never silently tally zero.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Skill depth ranks, strictly ordered from shallowest to deepest.
///
/// Every skill in the tree belongs to exactly one tier. Trained skills have
/// no prerequisites; expert skills are unlocked by trained skills; master
/// skills are unlocked by expert skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Entry-level skill, always selectable
    Trained,
    /// Mid-tier skill, requires a trained prerequisite
    Expert,
    /// Top-tier skill, requires an expert prerequisite
    Master,
}

impl Tier {
    /// Returns the lowercase string representation (e.g., "trained").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trained => "trained",
            Self::Expert => "expert",
            Self::Master => "master",
        }
    }

    /// Returns the capitalized display name (e.g., "Trained").
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Trained => "Trained",
            Self::Expert => "Expert",
            Self::Master => "Master",
        }
    }

    /// Returns all tiers in rank order, shallowest first.
    pub fn all() -> [Tier; 3] {
        [Self::Trained, Self::Expert, Self::Master]
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Tier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trained" => Ok(Self::Trained),
            "expert" => Ok(Self::Expert),
            "master" => Ok(Self::Master),
            _ => Err(DomainError::parse(format!("Unknown tier: {s}"))),
        }
    }
}
