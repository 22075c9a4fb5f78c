// src/lib.rs

pub mod display;
pub mod input;
pub mod player;
pub mod roster;
