//! Gradient lattice noise
//!
//! Classic 2D Perlin noise over a shuffled permutation table. The table is
//! built once per lattice seed with a ChaCha-driven Fisher-Yates shuffle, so
//! evaluation is a pure function of (seed, x, y).

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

const TABLE_SIZE: usize = 256;

/// Unit gradients for the eight lattice directions
const GRADIENTS: [(f64, f64); 8] = [
    (1.0, 0.0),
    (-1.0, 0.0),
    (0.0, 1.0),
    (0.0, -1.0),
    (std::f64::consts::FRAC_1_SQRT_2, std::f64::consts::FRAC_1_SQRT_2),
    (-std::f64::consts::FRAC_1_SQRT_2, std::f64::consts::FRAC_1_SQRT_2),
    (std::f64::consts::FRAC_1_SQRT_2, -std::f64::consts::FRAC_1_SQRT_2),
    (-std::f64::consts::FRAC_1_SQRT_2, -std::f64::consts::FRAC_1_SQRT_2),
];

/// 2D gradient noise over a seeded permutation lattice
#[derive(Debug, Clone)]
pub struct Perlin {
    perm: [u8; TABLE_SIZE * 2],
}

impl Perlin {
    pub fn new(seed: u64) -> Self {
        let mut table: [u8; TABLE_SIZE] = std::array::from_fn(|i| i as u8);
        let mut rng = ChaChaRng::seed_from_u64(seed);
        table.shuffle(&mut rng);

        let mut perm = [0u8; TABLE_SIZE * 2];
        perm[..TABLE_SIZE].copy_from_slice(&table);
        perm[TABLE_SIZE..].copy_from_slice(&table);

        Self { perm }
    }

    fn gradient(&self, xi: i64, yi: i64) -> (f64, f64) {
        let x = (xi.rem_euclid(TABLE_SIZE as i64)) as usize;
        let y = (yi.rem_euclid(TABLE_SIZE as i64)) as usize;
        let hash = self.perm[self.perm[x] as usize + y] as usize;
        GRADIENTS[hash % GRADIENTS.len()]
    }

    /// Evaluate noise at (x, y), roughly in [-1, 1]
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let x0 = x.floor();
        let y0 = y.floor();
        let xi = x0 as i64;
        let yi = y0 as i64;

        let fx = x - x0;
        let fy = y - y0;

        let dot = |gx: i64, gy: i64, dx: f64, dy: f64| {
            let (gvx, gvy) = self.gradient(gx, gy);
            gvx * dx + gvy * dy
        };

        let n00 = dot(xi, yi, fx, fy);
        let n10 = dot(xi + 1, yi, fx - 1.0, fy);
        let n01 = dot(xi, yi + 1, fx, fy - 1.0);
        let n11 = dot(xi + 1, yi + 1, fx - 1.0, fy - 1.0);

        let u = fade(fx);
        let v = fade(fy);

        let nx0 = n00 + u * (n10 - n00);
        let nx1 = n01 + u * (n11 - n01);
        nx0 + v * (nx1 - nx0)
    }
}

/// Quintic smoothstep, zero first and second derivative at the lattice
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}
