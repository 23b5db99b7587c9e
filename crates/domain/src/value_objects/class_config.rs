//! Class skill configuration - starting skills and bonus-slot rules.
//!
//! Each character class grants a fixed set of starting skills plus one of
//! three bonus arrangements: fixed per-tier quotas, a choice between
//! alternative quota packages, or a forced master-skill chain. The three
//! arrangements are a tagged enum so the accountant's branching is
//! exhaustive and compiler-checked.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::quota::TierQuota;
use crate::error::DomainError;

/// The four playable character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterClass {
    Marine,
    Android,
    Scientist,
    Teamster,
}

impl CharacterClass {
    /// Returns the lowercase identifier (e.g., "marine").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Marine => "marine",
            Self::Android => "android",
            Self::Scientist => "scientist",
            Self::Teamster => "teamster",
        }
    }

    /// Returns the capitalized display name (e.g., "Marine").
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Marine => "Marine",
            Self::Android => "Android",
            Self::Scientist => "Scientist",
            Self::Teamster => "Teamster",
        }
    }

    /// Returns all playable classes.
    pub fn all() -> [CharacterClass; 4] {
        [Self::Marine, Self::Android, Self::Scientist, Self::Teamster]
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CharacterClass {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "marine" => Ok(Self::Marine),
            "android" => Ok(Self::Android),
            "scientist" => Ok(Self::Scientist),
            "teamster" => Ok(Self::Teamster),
            _ => Err(DomainError::parse(format!("Unknown character class: {s}"))),
        }
    }
}

/// How a class fills its bonus skill slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum BonusPlan {
    /// Fixed per-tier quotas (teamster)
    Fixed { quota: TierQuota },
    /// Player picks one quota package from an ordered list by index
    /// (marine, android)
    Choice { options: Vec<TierQuota> },
    /// Player adopts one complete master chain instead of free picks;
    /// `bonus` is the extra quota granted on top of the chain (scientist)
    MasterChain { bonus: TierQuota },
}

impl BonusPlan {
    /// Resolves the quota that applies to a selection.
    ///
    /// For `Choice` plans, an absent or out-of-range index resolves to an
    /// all-zero quota rather than an error: "not yet chosen" is reported
    /// as nothing left to fill, and the embedding layer is expected to
    /// gate submission on the choice being made.
    pub fn quota_for(&self, choice: Option<usize>) -> TierQuota {
        match self {
            Self::Fixed { quota } => *quota,
            Self::Choice { options } => choice
                .and_then(|index| options.get(index))
                .copied()
                .unwrap_or_default(),
            Self::MasterChain { bonus } => *bonus,
        }
    }

    /// True if this plan forces adoption of a full master chain.
    pub fn requires_master_selection(&self) -> bool {
        matches!(self, Self::MasterChain { .. })
    }
}

/// Per-class skill rules: mandatory starting skills plus the bonus plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSkillConfig {
    pub starting: Vec<String>,
    pub bonus: BonusPlan,
}

impl ClassSkillConfig {
    /// Returns the built-in configuration for a class.
    pub fn for_class(class: CharacterClass) -> Self {
        match class {
            CharacterClass::Marine => Self {
                starting: vec![
                    "military_training".to_string(),
                    "athletics".to_string(),
                ],
                bonus: BonusPlan::Choice {
                    options: vec![TierQuota::new(0, 1, 0), TierQuota::new(2, 0, 0)],
                },
            },
            CharacterClass::Android => Self {
                starting: vec![
                    "linguistics".to_string(),
                    "computers".to_string(),
                    "mathematics".to_string(),
                ],
                bonus: BonusPlan::Choice {
                    options: vec![TierQuota::new(0, 1, 0), TierQuota::new(2, 0, 0)],
                },
            },
            // Scientists pick one master chain during creation; the chain
            // skills become their starting set, plus one free trained pick.
            CharacterClass::Scientist => Self {
                starting: vec![],
                bonus: BonusPlan::MasterChain {
                    bonus: TierQuota::new(1, 0, 0),
                },
            },
            CharacterClass::Teamster => Self {
                starting: vec![
                    "industrial_equipment".to_string(),
                    "zero_g".to_string(),
                ],
                bonus: BonusPlan::Fixed {
                    quota: TierQuota::new(1, 1, 0),
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_from_str() {
        assert_eq!(
            "marine".parse::<CharacterClass>().ok(),
            Some(CharacterClass::Marine)
        );
        assert_eq!(
            "Teamster".parse::<CharacterClass>().ok(),
            Some(CharacterClass::Teamster)
        );
        assert!("pilot".parse::<CharacterClass>().is_err());
    }

    #[test]
    fn test_fixed_plan_ignores_choice() {
        let plan = BonusPlan::Fixed {
            quota: TierQuota::new(1, 1, 0),
        };
        assert_eq!(plan.quota_for(None), TierQuota::new(1, 1, 0));
        assert_eq!(plan.quota_for(Some(7)), TierQuota::new(1, 1, 0));
    }

    #[test]
    fn test_choice_plan_selects_by_index() {
        let plan = BonusPlan::Choice {
            options: vec![TierQuota::new(0, 1, 0), TierQuota::new(2, 0, 0)],
        };
        assert_eq!(plan.quota_for(Some(0)), TierQuota::new(0, 1, 0));
        assert_eq!(plan.quota_for(Some(1)), TierQuota::new(2, 0, 0));
    }

    #[test]
    fn test_choice_plan_without_index_is_zero_quota() {
        let plan = BonusPlan::Choice {
            options: vec![TierQuota::new(0, 1, 0), TierQuota::new(2, 0, 0)],
        };
        assert!(plan.quota_for(None).is_zero());
        // Out-of-range index is treated the same as no choice
        assert!(plan.quota_for(Some(2)).is_zero());
    }

    #[test]
    fn test_master_chain_plan() {
        let plan = BonusPlan::MasterChain {
            bonus: TierQuota::new(1, 0, 0),
        };
        assert!(plan.requires_master_selection());
        assert_eq!(plan.quota_for(None), TierQuota::new(1, 0, 0));
    }

    #[test]
    fn test_builtin_class_table() {
        let marine = ClassSkillConfig::for_class(CharacterClass::Marine);
        assert_eq!(marine.starting, vec!["military_training", "athletics"]);
        assert!(matches!(marine.bonus, BonusPlan::Choice { ref options } if options.len() == 2));

        let scientist = ClassSkillConfig::for_class(CharacterClass::Scientist);
        assert!(scientist.starting.is_empty());
        assert!(scientist.bonus.requires_master_selection());

        let teamster = ClassSkillConfig::for_class(CharacterClass::Teamster);
        assert_eq!(
            teamster.bonus,
            BonusPlan::Fixed {
                quota: TierQuota::new(1, 1, 0)
            }
        );
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = ClassSkillConfig::for_class(CharacterClass::Android);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"type\":\"choice\""));
        let parsed: ClassSkillConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
