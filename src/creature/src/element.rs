// src/creature/src/element.rs

use strum_macros::{Display, EnumIter};

/// Elemental affinity of a creature. Closed set; `Normal` is the neutral
/// element with no strengths or weaknesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Element {
    Fire,
    Water,
    Plant,
    Normal,
}

/// Attacker-indexed effectiveness chart. Rows are the attacking element,
/// columns the defending element, in declaration order (Fire, Water, Plant,
/// Normal). Neutral pairs carry an explicit 1.0 entry rather than relying
/// on a lookup miss.
const EFFECTIVENESS_CHART: [[f32; 4]; 4] = [
    // vs:  Fire  Water Plant Normal
    /* Fire   */ [0.5, 0.5, 2.0, 1.0],
    /* Water  */ [2.0, 0.5, 0.5, 1.0],
    /* Plant  */ [0.5, 2.0, 0.5, 1.0],
    /* Normal */ [1.0, 1.0, 1.0, 1.0],
];

impl Element {
    /// Damage multiplier when an attack of this element hits a defender of
    /// `defender`'s element. Total over all 16 ordered pairs.
    pub fn effectiveness(self, defender: Element) -> f32 {
        EFFECTIVENESS_CHART[self as usize][defender as usize]
    }
}
