// src/creature/src/creature.rs

use crate::element::Element;

/// A single battling creature. Name, max HP, attack power and element are
/// fixed at creation; only `hp` ever changes, and only through
/// `take_damage` / `heal` / `restore`, which keep `0 <= hp <= max_hp`.
#[derive(Debug, Clone)]
pub struct Creature {
    pub name: String,
    pub max_hp: u32,
    pub hp: u32,
    pub attack: u32,
    pub element: Element,
}

impl Creature {
    /// Create a creature at full health.
    pub fn new(name: impl Into<String>, max_hp: u32, attack: u32, element: Element) -> Self {
        Self {
            name: name.into(),
            max_hp,
            hp: max_hp,
            attack,
            element,
        }
    }

    pub fn is_downed(&self) -> bool {
        self.hp == 0
    }

    /// Apply damage, clamping HP at 0. Returns the health actually lost,
    /// which is less than `amount` when the creature was already close to 0.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let before = self.hp;
        self.hp = self.hp.saturating_sub(amount);
        before - self.hp
    }

    /// Apply healing, clamping HP at `max_hp`. Returns the health actually
    /// recovered, which is less than `amount` on overheal.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.hp;
        self.hp = (self.hp + amount).min(self.max_hp);
        self.hp - before
    }

    /// Restore to full health, as at the start of a fresh battle.
    pub fn restore(&mut self) {
        self.hp = self.max_hp;
    }

    /// One-line summary for menus and battle logs.
    pub fn status_line(&self) -> String {
        format!(
            "{} [{}] HP {}/{} ATK {}",
            self.name, self.element, self.hp, self.max_hp, self.attack
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn sprout() -> Creature {
        Creature::new("Sprout", 100, 20, Element::Plant)
    }

    #[test]
    fn starts_at_full_health() {
        let c = sprout();
        assert_eq!(c.hp, 100);
        assert!(!c.is_downed());
    }

    #[test]
    fn damage_clamps_at_zero_and_reports_actual_loss() {
        let mut c = sprout();
        assert_eq!(c.take_damage(30), 30);
        assert_eq!(c.hp, 70);

        // Only 70 HP left to lose.
        assert_eq!(c.take_damage(250), 70);
        assert_eq!(c.hp, 0);
        assert!(c.is_downed());

        // Hitting a downed creature changes nothing.
        assert_eq!(c.take_damage(10), 0);
        assert_eq!(c.hp, 0);
    }

    #[test]
    fn heal_clamps_at_max_and_reports_actual_gain() {
        let mut c = sprout();
        c.hp = 15;
        assert_eq!(c.heal(20), 20);
        assert_eq!(c.hp, 35);

        c.hp = 90;
        assert_eq!(c.heal(20), 10);
        assert_eq!(c.hp, 100);

        assert_eq!(c.heal(20), 0);
        assert_eq!(c.hp, 100);
    }

    #[test]
    fn restore_returns_to_full_health() {
        let mut c = sprout();
        c.take_damage(99);
        c.restore();
        assert_eq!(c.hp, c.max_hp);
        c.restore();
        assert_eq!(c.hp, c.max_hp);
    }

    proptest! {
        #[test]
        fn hp_stays_in_bounds_under_any_sequence(ops in prop::collection::vec((any::<bool>(), 0u32..500), 0..64)) {
            let mut c = sprout();
            for (is_damage, amount) in ops {
                let before = c.hp;
                let actual = if is_damage {
                    c.take_damage(amount)
                } else {
                    c.heal(amount)
                };
                prop_assert!(c.hp <= c.max_hp);
                prop_assert!(actual <= amount);
                // Unclamped operations report exactly what was requested.
                if is_damage && before >= amount {
                    prop_assert_eq!(actual, amount);
                }
                if !is_damage && before + amount <= c.max_hp {
                    prop_assert_eq!(actual, amount);
                }
            }
            c.restore();
            prop_assert_eq!(c.hp, c.max_hp);
        }
    }
}
