//! The fixed creature catalog offered at the start of a session.

use creature::{Creature, Element};

/// Fresh copies of every creature available for selection.
pub fn roster() -> Vec<Creature> {
    vec![
        Creature::new("Tidefin", 95, 21, Element::Water),
        Creature::new("Cinderpup", 88, 23, Element::Fire),
        Creature::new("Thornling", 92, 20, Element::Plant),
        Creature::new("Emberhorn", 100, 19, Element::Fire),
        Creature::new("Ripplet", 85, 24, Element::Water),
        Creature::new("Mossback", 90, 22, Element::Plant),
        Creature::new("Flarekit", 87, 23, Element::Fire),
        Creature::new("Brinetail", 93, 21, Element::Water),
        Creature::new("Petalisk", 89, 22, Element::Plant),
        Creature::new("Ashmane", 97, 20, Element::Fire),
    ]
}
