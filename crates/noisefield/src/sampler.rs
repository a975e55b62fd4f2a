use crate::perlin::Perlin;
use crate::spec::{NoiseKind, NoiseSpec};

/// Evaluator for one noise descriptor
///
/// Owns the seeded gradient lattice; `sample` is a pure, deterministic
/// function of the descriptor and the coordinate. Coordinates are latitude
/// and longitude in radians; the descriptor's frequency scales them into
/// lattice space.
#[derive(Debug, Clone)]
pub struct Sampler {
    spec: NoiseSpec,
    lattice: Perlin,
}

impl Sampler {
    pub fn new(spec: &NoiseSpec) -> Self {
        Self {
            spec: *spec,
            lattice: Perlin::new(spec.seed),
        }
    }

    pub fn spec(&self) -> &NoiseSpec {
        &self.spec
    }

    /// Evaluate the field at (latitude, longitude), radians
    ///
    /// Basic is a single octave in roughly [-1, 1]; Layered is an
    /// amplitude-normalized fractal sum in the same range; Ridged sums
    /// inverted-ridge octaves into roughly [0, 1] before the same
    /// normalization.
    pub fn sample(&self, latitude: f64, longitude: f64) -> f64 {
        let x = longitude * self.spec.frequency;
        let y = latitude * self.spec.frequency;

        match self.spec.kind {
            NoiseKind::Basic => self.lattice.sample(x, y),
            NoiseKind::Layered => self.fractal(x, y, |n| n),
            NoiseKind::Ridged => self.fractal(x, y, |n| 1.0 - 2.0 * n.abs()),
        }
    }

    fn fractal(&self, x: f64, y: f64, shape: impl Fn(f64) -> f64) -> f64 {
        let mut sum = 0.0;
        let mut amplitude = 1.0;
        let mut total = 0.0;
        let mut fx = x;
        let mut fy = y;

        for _ in 0..self.spec.octaves {
            sum += shape(self.lattice.sample(fx, fy)) * amplitude;
            total += amplitude;
            amplitude *= self.spec.persistence;
            fx *= self.spec.lacunarity;
            fy *= self.spec.lacunarity;
        }

        sum / total
    }
}
