//! Domain entities - Core business objects with identity

mod skill;

pub use skill::{default_catalog, Skill};
