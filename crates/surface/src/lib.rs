//! Noise-to-texture synthesis
//!
//! Turns a body's surface recipe into per-pixel maps: color, height, normal,
//! specular and ring images over an equirectangular latitude × longitude
//! grid. Fields are sampled in a first pass, normalized against the observed
//! min/max in a second, and cached per body and resolution; derived maps
//! reuse the cached fields of the resolution they were first requested at.

pub mod error;
pub mod fields;
pub mod grid;
pub mod maps;
pub mod pipeline;

// Re-export key types at crate root
pub use error::SurfaceError;
pub use grid::{FieldSlot, ScalarField};
pub use maps::{write_map, NormalEncoding, RingStyle};
pub use pipeline::{Atlas, Surface};
