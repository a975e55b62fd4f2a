//! Noise fields with procedurally generated shape
//!
//! Surface synthesis composes scalar noise fields whose shape parameters
//! (frequency, lacunarity, octave count, persistence, lattice seed) are
//! themselves drawn from the keyed random stream — the noise is procedural
//! twice over. A [`NoiseSpec`] is the serializable descriptor; a [`Sampler`]
//! turns one into a pure `(latitude, longitude) -> scalar` function.

pub mod perlin;
pub mod sampler;
pub mod spec;

pub use sampler::Sampler;
pub use spec::{NoiseKind, NoiseSpec};

#[cfg(test)]
mod sampler_test;
#[cfg(test)]
mod spec_test;
