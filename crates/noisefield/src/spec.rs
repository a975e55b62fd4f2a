use serde::{Deserialize, Serialize};

use keystream::RandomStream;

/// The composition style of a noise field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoiseKind {
    /// A single gradient-noise octave
    Basic,
    /// Fractal sum of octaves (fBm)
    Layered,
    /// Fractal sum of inverted-ridge octaves
    Ridged,
}

/// Descriptor for one noise field
///
/// Carries everything needed to rebuild the field: composition kind, base
/// frequency, per-octave frequency multiplier (lacunarity), octave count,
/// per-octave amplitude falloff (persistence), and the lattice seed. The
/// descriptor is drawn once at body construction and fixed for the body's
/// lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoiseSpec {
    pub kind: NoiseKind,
    pub frequency: f64,
    pub lacunarity: f64,
    pub octaves: u32,
    pub persistence: f64,
    pub seed: u64,
}

impl NoiseSpec {
    /// Draw a descriptor of the given kind from the keyed stream
    ///
    /// Frequency is log-uniform inside the caller's range; lacunarity,
    /// octave count and persistence come from fixed plausibility ranges.
    /// Every parameter uses its own sub-key so descriptors for sibling
    /// fields stay independent.
    pub fn draw(stream: &RandomStream, key: &str, kind: NoiseKind, frequency: (f64, f64)) -> Self {
        Self {
            kind,
            frequency: stream.log_uniform(&format!("{}:frequency", key), frequency.0, frequency.1),
            lacunarity: stream.uniform(&format!("{}:lacunarity", key), 1.8, 2.4),
            octaves: stream.integer(&format!("{}:octaves", key), 3, 8) as u32,
            persistence: stream.uniform(&format!("{}:persistence", key), 0.35, 0.65),
            seed: lattice_seed(stream, key),
        }
    }

    /// Draw a descriptor whose kind is itself a keyed choice
    pub fn draw_any(stream: &RandomStream, key: &str, frequency: (f64, f64)) -> Self {
        let kind = *stream.choice(
            &format!("{}:kind", key),
            &[NoiseKind::Basic, NoiseKind::Layered, NoiseKind::Ridged],
        );
        Self::draw(stream, key, kind, frequency)
    }
}

/// Lattice seed from a keyed draw, spread over 53 bits
fn lattice_seed(stream: &RandomStream, key: &str) -> u64 {
    (stream.draw(&format!("{}:seed", key)) * (1u64 << 53) as f64) as u64
}
