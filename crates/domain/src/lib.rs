//! Othership domain - skill-tree resolution and selection validation.
//!
//! Pure rules engine for character creation: the tiered skill DAG, unlock
//! eligibility, per-class bonus-slot accounting, master-chain resolution,
//! and the composed validation verdict. Everything here is a synchronous
//! function over immutable inputs; the tree and class table are built once
//! at process start and shared freely across concurrent callers. I/O,
//! persistence, and transport belong to the embedding layer.

pub mod entities;
pub mod error;
pub mod selection;
pub mod skill_tree;
pub mod value_objects;

// Re-export entities
pub use entities::{default_catalog, Skill};

pub use error::DomainError;

// Re-export the validation surface
pub use selection::{remaining_bonus_slots, validate_selection, ValidationVerdict};

// Re-export the skill tree and its query types
pub use skill_tree::{SkillChain, SkillTree, SkillsByTier};

// Re-export value objects
pub use value_objects::{
    BonusPlan, CharacterClass, ClassSkillConfig, SkillSelection, SlotBalance, Tier, TierQuota,
};
