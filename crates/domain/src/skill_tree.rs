//! Skill tree - the immutable catalog of tiered skills and their edges.
//!
//! Built once at process start (from the built-in catalog or a deserialized
//! tree asset) and shared read-only by every validation. The tree is assumed
//! acyclic and internally consistent; verifying that is a build-time concern
//! for whatever produces the asset, not a runtime one.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::entities::{default_catalog, Skill};
use crate::value_objects::Tier;

/// Immutable mapping from skill id to [`Skill`], preserving catalog order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "SkillTreeData", into = "SkillTreeData")]
pub struct SkillTree {
    skills: Vec<Skill>,
    index: HashMap<String, usize>,
}

/// Wire format for tree assets: `{ "skills": [...] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SkillTreeData {
    skills: Vec<Skill>,
}

impl From<SkillTreeData> for SkillTree {
    fn from(data: SkillTreeData) -> Self {
        Self::new(data.skills)
    }
}

impl From<SkillTree> for SkillTreeData {
    fn from(tree: SkillTree) -> Self {
        Self { skills: tree.skills }
    }
}

impl PartialEq for SkillTree {
    fn eq(&self, other: &Self) -> bool {
        self.skills == other.skills
    }
}

impl SkillTree {
    /// Builds a tree from a skill list, normalizing forward edges.
    ///
    /// Each skill's `unlocks` list is rebuilt as the inverse of the
    /// declared `unlocked_by` edges, in catalog order, so the two edge
    /// sets can never disagree. Edges naming ids absent from the list are
    /// dropped rather than reported; the tree is pre-validated input.
    pub fn new(mut skills: Vec<Skill>) -> Self {
        let mut index = HashMap::with_capacity(skills.len());
        for (position, skill) in skills.iter().enumerate() {
            index.insert(skill.id.clone(), position);
        }

        for skill in &mut skills {
            skill.unlocks.clear();
        }
        let edges: Vec<(usize, String)> = skills
            .iter()
            .flat_map(|skill| {
                skill
                    .unlocked_by
                    .iter()
                    .filter_map(|prereq| index.get(prereq).copied())
                    .map(|position| (position, skill.id.clone()))
                    .collect::<Vec<_>>()
            })
            .collect();
        for (position, dependent) in edges {
            skills[position].unlocks.push(dependent);
        }

        Self { skills, index }
    }

    /// The built-in Othership skill tree.
    pub fn default_tree() -> Self {
        Self::new(default_catalog())
    }

    /// Looks up a skill by id. Absence is `None`, never an error.
    pub fn lookup(&self, id: &str) -> Option<&Skill> {
        self.index.get(id).map(|position| &self.skills[*position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Iterates skills in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Skill> {
        self.skills.iter()
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Decides whether a skill is currently selectable.
    ///
    /// Trained skills (no prerequisites) are always selectable. Expert and
    /// master skills need at least ONE of their prerequisites in
    /// `selected` - multiple prerequisites are alternatives, not a
    /// conjunction. Unknown ids return `false`: the creation UI only
    /// queries ids drawn from this same tree, so absence is a caller bug
    /// surfaced as "not selectable" rather than a panic.
    pub fn is_unlocked(&self, skill_id: &str, selected: &[String]) -> bool {
        let Some(skill) = self.lookup(skill_id) else {
            return false;
        };
        if !skill.has_prerequisites() {
            return true;
        }
        skill
            .unlocked_by
            .iter()
            .any(|prereq| selected.iter().any(|id| id == prereq))
    }

    /// Groups the given skill ids by tier for display, skipping unknown ids.
    pub fn skills_by_tier(&self, ids: &[String]) -> SkillsByTier<'_> {
        let mut grouped = SkillsByTier::default();
        for id in ids {
            if let Some(skill) = self.lookup(id) {
                match skill.tier {
                    Tier::Trained => grouped.trained.push(skill),
                    Tier::Expert => grouped.expert.push(skill),
                    Tier::Master => grouped.master.push(skill),
                }
            }
        }
        grouped
    }

    /// Resolves the full prerequisite chain for a master skill.
    ///
    /// Follows the first-declared prerequisite at each level: master to
    /// expert, expert to trained. The choice is deterministic and
    /// order-dependent; alternative branches are never searched. Returns
    /// `None` if the id is unknown, not a master skill, or either hop
    /// lacks a recorded prerequisite. Never consults selection state.
    pub fn resolve_master_chain(&self, master_id: &str) -> Option<SkillChain<'_>> {
        let master = self.lookup(master_id).filter(|s| s.tier == Tier::Master)?;
        let expert = self.lookup(master.first_prerequisite()?)?;
        let trained = self.lookup(expert.first_prerequisite()?)?;
        Some(SkillChain {
            trained,
            expert,
            master,
        })
    }
}

impl Default for SkillTree {
    fn default() -> Self {
        Self::default_tree()
    }
}

/// One complete trained -> expert -> master lineage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillChain<'a> {
    pub trained: &'a Skill,
    pub expert: &'a Skill,
    pub master: &'a Skill,
}

impl SkillChain<'_> {
    /// The chain's skill ids in tier order, ready to become a scientist's
    /// starting set.
    pub fn ids(&self) -> [&str; 3] {
        [&self.trained.id, &self.expert.id, &self.master.id]
    }
}

/// Skill references grouped by tier for display.
#[derive(Debug, Clone, Default)]
pub struct SkillsByTier<'a> {
    pub trained: Vec<&'a Skill>,
    pub expert: Vec<&'a Skill>,
    pub master: Vec<&'a Skill>,
}

impl<'a> SkillsByTier<'a> {
    pub fn get(&self, tier: Tier) -> &[&'a Skill] {
        match tier {
            Tier::Trained => &self.trained,
            Tier::Expert => &self.expert,
            Tier::Master => &self.master,
        }
    }
}
