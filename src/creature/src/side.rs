// src/creature/src/side.rs

use crate::creature::Creature;

/// One participant in a battle (the player or the opponent). Owns its
/// creatures exclusively and tracks which one is active. The current game
/// always fields exactly one creature per side, but the engine only ever
/// talks to a side through its active creature.
#[derive(Debug, Clone)]
pub struct Side {
    name: String,
    creatures: Vec<Creature>,
    active: usize,
}

impl Side {
    /// A side must own at least one creature; the first is active.
    pub fn new(name: impl Into<String>, creatures: Vec<Creature>) -> Self {
        assert!(!creatures.is_empty(), "a side needs at least one creature");
        Self {
            name: name.into(),
            creatures,
            active: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn active(&self) -> &Creature {
        &self.creatures[self.active]
    }

    pub fn active_mut(&mut self) -> &mut Creature {
        &mut self.creatures[self.active]
    }

    /// Whether any creature on this side can still fight.
    pub fn has_conscious(&self) -> bool {
        self.creatures.iter().any(|c| !c.is_downed())
    }

    /// Restore every creature to full health, as before a fresh battle.
    pub fn restore_all(&mut self) {
        for creature in &mut self.creatures {
            creature.restore();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;
    use pretty_assertions::assert_eq;

    #[test]
    fn first_creature_is_active() {
        let side = Side::new(
            "You",
            vec![Creature::new("Cinderpup", 95, 21, Element::Fire)],
        );
        assert_eq!(side.active().name, "Cinderpup");
        assert!(side.has_conscious());
    }

    #[test]
    fn restore_all_heals_the_team() {
        let mut side = Side::new(
            "Rival",
            vec![Creature::new("Tidefin", 90, 22, Element::Water)],
        );
        side.active_mut().take_damage(90);
        assert!(!side.has_conscious());

        side.restore_all();
        assert!(side.has_conscious());
        assert_eq!(side.active().hp, 90);
    }

    #[test]
    #[should_panic(expected = "at least one creature")]
    fn empty_side_is_rejected() {
        let _ = Side::new("You", vec![]);
    }
}
