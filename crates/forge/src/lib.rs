//! Hierarchical generation of celestial bodies
//!
//! Builds a tree of stars, rocky planets, giant planets and moons from a
//! textual seed. Every drawn quantity comes from the system's keyed random
//! stream, so the tree is a pure function of its name; orbit placement honors
//! sphere-of-influence and ring constraints while walking outward from each
//! parent.

pub mod body;
pub mod document;
pub mod error;
pub mod generation;
pub mod orbit;
pub mod recipe;
pub mod system;

// Re-export key types at crate root
pub use body::{Atmosphere, Body, BodyId, BodyKind, Ocean, Ring};
pub use document::BodyDocument;
pub use error::GenError;
pub use orbit::Orbit;
pub use recipe::{
    Combinator, FieldRecipe, GiantRecipe, LifeRecipe, RockyRecipe, StarRecipe, SurfaceRecipe,
};
pub use system::System;

#[cfg(test)]
mod system_test;
