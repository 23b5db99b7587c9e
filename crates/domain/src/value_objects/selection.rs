//! Skill selection snapshot - the caller-owned state under validation.

use serde::{Deserialize, Serialize};

/// A character's in-progress skill picks during creation.
///
/// Owned by the embedding layer (the creation UI or API handler) and passed
/// in by value; the engine never mutates or retains it. `starting` is kept
/// separate from `selected` because starting skills never count against
/// bonus quotas - for scientists, the resolved master chain is placed in
/// `starting` by the caller once chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillSelection {
    /// Every selected skill id, starting skills included
    pub selected: Vec<String>,
    /// Mandatory class skills (or the adopted chain, for scientists)
    pub starting: Vec<String>,
    /// Index into the class's bonus options, once the player has chosen
    #[serde(default)]
    pub bonus_choice: Option<usize>,
    /// Requested master-chain root, for chain-based classes
    #[serde(default)]
    pub master_chain_root: Option<String>,
}

impl SkillSelection {
    pub fn new(selected: Vec<String>, starting: Vec<String>) -> Self {
        Self {
            selected,
            starting,
            bonus_choice: None,
            master_chain_root: None,
        }
    }

    pub fn with_bonus_choice(mut self, index: usize) -> Self {
        self.bonus_choice = Some(index);
        self
    }

    pub fn with_master_chain_root(mut self, master_id: impl Into<String>) -> Self {
        self.master_chain_root = Some(master_id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let selection = SkillSelection::new(
            vec!["athletics".to_string()],
            vec!["athletics".to_string()],
        )
        .with_bonus_choice(1);
        assert_eq!(selection.bonus_choice, Some(1));
        assert_eq!(selection.master_chain_root, None);
    }

    #[test]
    fn test_serde_optional_fields_default() {
        let json = r#"{ "selected": ["zero_g"], "starting": [] }"#;
        let parsed: SkillSelection = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.selected, vec!["zero_g"]);
        assert_eq!(parsed.bonus_choice, None);
        assert_eq!(parsed.master_chain_root, None);
    }
}
