//! Value objects - Immutable objects defined by their attributes

mod class_config;
mod quota;
mod selection;
mod tier;

pub use class_config::{BonusPlan, CharacterClass, ClassSkillConfig};
pub use quota::{SlotBalance, TierQuota};
pub use selection::SkillSelection;
pub use tier::Tier;
