//! Skill entity - Tiered skills forming the character-creation skill tree
//!
//! Skills come either from the built-in Othership catalog or from an
//! external tree asset deserialized by the embedding layer. Prerequisite
//! edge order is semantic: chain resolution always follows the
//! first-declared prerequisite.

use serde::{Deserialize, Serialize};

use crate::value_objects::Tier;

/// A skill characters can select during creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub tier: Tier,
    /// Skills this one helps unlock (outgoing edges). Maintained by the
    /// tree builder as the inverse of `unlocked_by`.
    #[serde(default)]
    pub unlocks: Vec<String>,
    /// Skills that unlock this one (incoming edges), in declaration order.
    /// Empty for trained skills.
    #[serde(default)]
    pub unlocked_by: Vec<String>,
}

impl Skill {
    pub fn new(id: impl Into<String>, name: impl Into<String>, tier: Tier) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tier,
            unlocks: Vec::new(),
            unlocked_by: Vec::new(),
        }
    }

    pub fn trained(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, Tier::Trained)
    }

    pub fn expert(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, Tier::Expert)
    }

    pub fn master(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, Tier::Master)
    }

    pub fn with_prerequisites(mut self, ids: &[&str]) -> Self {
        self.unlocked_by = ids.iter().map(|id| (*id).to_string()).collect();
        self
    }

    /// True if selecting this skill requires a prerequisite.
    pub fn has_prerequisites(&self) -> bool {
        !self.unlocked_by.is_empty()
    }

    /// The first-declared prerequisite, used for chain resolution.
    pub fn first_prerequisite(&self) -> Option<&str> {
        self.unlocked_by.first().map(String::as_str)
    }
}

/// The built-in Othership skill catalog.
///
/// Trained skills carry no prerequisites; expert and master skills list
/// theirs in declaration order, which fixes the chain each master skill
/// resolves to.
pub fn default_catalog() -> Vec<Skill> {
    vec![
        // Trained
        Skill::trained("archaeology", "Archaeology"),
        Skill::trained("art", "Art"),
        Skill::trained("athletics", "Athletics"),
        Skill::trained("botany", "Botany"),
        Skill::trained("chemistry", "Chemistry"),
        Skill::trained("computers", "Computers"),
        Skill::trained("geology", "Geology"),
        Skill::trained("industrial_equipment", "Industrial Equipment"),
        Skill::trained("jury_rigging", "Jury-Rigging"),
        Skill::trained("linguistics", "Linguistics"),
        Skill::trained("mathematics", "Mathematics"),
        Skill::trained("military_training", "Military Training"),
        Skill::trained("rimwise", "Rimwise"),
        Skill::trained("theology", "Theology"),
        Skill::trained("zero_g", "Zero-G"),
        Skill::trained("zoology", "Zoology"),
        // Expert
        Skill::expert("asteroid_mining", "Asteroid Mining")
            .with_prerequisites(&["geology", "industrial_equipment", "zero_g"]),
        Skill::expert("ecology", "Ecology").with_prerequisites(&["botany", "geology", "zoology"]),
        Skill::expert("explosives", "Explosives")
            .with_prerequisites(&["jury_rigging", "chemistry", "military_training"]),
        Skill::expert("field_medicine", "Field Medicine")
            .with_prerequisites(&["botany", "zoology"]),
        Skill::expert("firearms", "Firearms")
            .with_prerequisites(&["military_training", "rimwise"]),
        Skill::expert("hacking", "Hacking").with_prerequisites(&["computers", "mathematics"]),
        Skill::expert("hand_to_hand_combat", "Hand-to-Hand Combat")
            .with_prerequisites(&["athletics", "military_training", "rimwise"]),
        Skill::expert("mechanical_repair", "Mechanical Repair")
            .with_prerequisites(&["industrial_equipment", "jury_rigging"]),
        Skill::expert("mysticism", "Mysticism")
            .with_prerequisites(&["theology", "art", "archaeology"]),
        Skill::expert("pathology", "Pathology").with_prerequisites(&["chemistry", "zoology"]),
        Skill::expert("pharmacology", "Pharmacology")
            .with_prerequisites(&["chemistry", "botany"]),
        Skill::expert("physics", "Physics").with_prerequisites(&["mathematics", "geology"]),
        Skill::expert("piloting", "Piloting").with_prerequisites(&["zero_g", "athletics"]),
        Skill::expert("psychology", "Psychology")
            .with_prerequisites(&["linguistics", "zoology"]),
        Skill::expert("wilderness_survival", "Wilderness Survival")
            .with_prerequisites(&["military_training", "zoology"]),
        // Master
        Skill::master("artificial_intelligence", "Artificial Intelligence")
            .with_prerequisites(&["hacking", "mechanical_repair"]),
        Skill::master("command", "Command")
            .with_prerequisites(&["wilderness_survival", "firearms", "hand_to_hand_combat"]),
        Skill::master("cybernetics", "Cybernetics")
            .with_prerequisites(&["field_medicine", "mechanical_repair"]),
        Skill::master("engineering", "Engineering")
            .with_prerequisites(&["mechanical_repair", "explosives"]),
        Skill::master("exobiology", "Exobiology")
            .with_prerequisites(&["pathology", "ecology", "field_medicine"]),
        Skill::master("hyperspace", "Hyperspace").with_prerequisites(&["piloting", "physics"]),
        Skill::master("planetology", "Planetology")
            .with_prerequisites(&["ecology", "asteroid_mining", "wilderness_survival"]),
        Skill::master("robotics", "Robotics")
            .with_prerequisites(&["mechanical_repair", "hacking"]),
        Skill::master("sophontology", "Sophontology")
            .with_prerequisites(&["psychology", "ecology"]),
        Skill::master("surgery", "Surgery")
            .with_prerequisites(&["field_medicine", "pathology"]),
        Skill::master("xenoesotericism", "Xenoesotericism")
            .with_prerequisites(&["mysticism", "psychology"]),
    ]
}
