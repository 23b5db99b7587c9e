//! Bonus-slot accounting and selection validation.
//!
//! Pure functions over the static tree and class configuration plus a
//! caller-supplied selection snapshot. Each call is a stateless
//! re-evaluation of the full selection; there is no state machine and
//! nothing is retained between calls.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::skill_tree::SkillTree;
use crate::value_objects::{ClassSkillConfig, SkillSelection, SlotBalance, Tier};

/// Outcome of validating a full skill selection.
///
/// `errors` holds user-facing deficiency messages in tier order; the
/// verdict is valid exactly when it is empty. Produced fresh on every
/// call, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationVerdict {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// Computes how many bonus slots of each tier remain unfilled.
///
/// Bonus skills are the selected ids minus the starting set, deduplicated:
/// reordering the selection, repeating an id, or re-adding a starting
/// skill never changes the result. Ids unknown to the tree carry no tier
/// and are not counted. Remainders are signed; negative means
/// over-selection and is reported by the validator rather than clamped.
pub fn remaining_bonus_slots(
    tree: &SkillTree,
    config: &ClassSkillConfig,
    selected: &[String],
    starting: &[String],
    bonus_choice: Option<usize>,
) -> SlotBalance {
    let quota = config.bonus.quota_for(bonus_choice);
    let mut balance = SlotBalance::new(
        i32::from(quota.trained),
        i32::from(quota.expert),
        i32::from(quota.master),
    );

    let starting_set: HashSet<&str> = starting.iter().map(String::as_str).collect();
    let mut counted: HashSet<&str> = HashSet::new();
    for id in selected {
        if starting_set.contains(id.as_str()) || !counted.insert(id.as_str()) {
            continue;
        }
        if let Some(skill) = tree.lookup(id) {
            balance.set(skill.tier, balance.get(skill.tier) - 1);
        }
    }
    balance
}

/// Validates a full selection against the class's bonus plan.
///
/// Each under-filled tier yields one "Must select N more ..." message in
/// tier order; any over-filled tier yields a single generic "Too many
/// skills selected" message regardless of which tiers overflowed. Unlock
/// eligibility and chain resolution are not re-checked here - the creation
/// UI applies those incrementally before submitting.
pub fn validate_selection(
    tree: &SkillTree,
    config: &ClassSkillConfig,
    selected: &[String],
    starting: &[String],
    bonus_choice: Option<usize>,
) -> ValidationVerdict {
    let remaining = remaining_bonus_slots(tree, config, selected, starting, bonus_choice);

    let mut errors = Vec::new();
    for tier in Tier::all() {
        let missing = remaining.get(tier);
        if missing > 0 {
            let plural = if missing == 1 { "" } else { "s" };
            errors.push(format!("Must select {missing} more {tier} skill{plural}"));
        }
    }
    if remaining.any_overfilled() {
        errors.push("Too many skills selected".to_string());
    }

    ValidationVerdict {
        valid: errors.is_empty(),
        errors,
    }
}

impl SkillSelection {
    /// Remaining bonus slots for this snapshot.
    pub fn remaining_slots(&self, tree: &SkillTree, config: &ClassSkillConfig) -> SlotBalance {
        remaining_bonus_slots(tree, config, &self.selected, &self.starting, self.bonus_choice)
    }

    /// Validates this snapshot against the class's bonus plan.
    pub fn validate(&self, tree: &SkillTree, config: &ClassSkillConfig) -> ValidationVerdict {
        validate_selection(tree, config, &self.selected, &self.starting, self.bonus_choice)
    }
}
