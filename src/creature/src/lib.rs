// src/creature/src/lib.rs

pub mod creature;
pub mod element;
pub mod side;

pub use crate::creature::Creature;
pub use crate::element::Element;
pub use crate::side::Side;
