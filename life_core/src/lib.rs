// lib.rs - Toroidal Game of Life core: field, rules, stepping, patterns, canvas

pub mod canvas;
pub mod engine;
pub mod grid;
pub mod patterns;
pub mod rules;

pub use canvas::Canvas;
pub use engine::{Change, Engine};
pub use grid::Field;
