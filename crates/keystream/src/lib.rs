//! Parameter-keyed deterministic random streams
//!
//! A generated system must be a pure function of its name, yet the order in
//! which quantities are drawn varies with random branch choices during tree
//! construction. Instead of one sequential generator, every labelled quantity
//! gets its own generator, reseeded from the pair (root seed, label). Two
//! draws with the same root and label always agree, no matter how many other
//! draws happened in between.
//!
//! The root seed and every label are folded to u64 through UUID v5 (SHA-1
//! based, stable across platforms and releases); a label's generator is
//! seeded from `root.wrapping_mul(fold(label))`. Distinct labels whose folded
//! products collide will correlate — accepted as a statistical imperfection.

use std::f64::consts::PI;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use uuid::Uuid;

use chroma::{Color, Palette};

/// Fold a string to a stable u64 via UUID v5
fn fold(label: &str) -> u64 {
    Uuid::new_v5(&Uuid::NAMESPACE_OID, label.as_bytes())
        .as_u64_pair()
        .0
}

/// Keyed source of all randomness for one generated system
///
/// Cheap to clone and share; the only state is the folded root seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomStream {
    root: u64,
}

impl RandomStream {
    /// Create a stream rooted in a textual seed (usually the system name)
    pub fn new(name: &str) -> Self {
        Self { root: fold(name) }
    }

    /// Create a stream from an already-folded root seed
    pub fn from_root(root: u64) -> Self {
        Self { root }
    }

    pub fn root(&self) -> u64 {
        self.root
    }

    /// The single-use generator for a label
    ///
    /// Every public operation takes exactly the draws it needs from a fresh
    /// instance, which is what makes results independent of call order.
    fn generator(&self, key: &str) -> ChaChaRng {
        ChaChaRng::seed_from_u64(self.root.wrapping_mul(fold(key)))
    }

    /// Uniform draw in [0, 1)
    pub fn draw(&self, key: &str) -> f64 {
        self.generator(key).random::<f64>()
    }

    /// Uniform draw in [min, max)
    pub fn uniform(&self, key: &str, min: f64, max: f64) -> f64 {
        min + (max - min) * self.draw(key)
    }

    /// Log-uniform draw in [min, max); both bounds must be positive
    pub fn log_uniform(&self, key: &str, min: f64, max: f64) -> f64 {
        debug_assert!(min > 0.0 && max > 0.0, "log-uniform needs positive bounds");
        (min.ln() + (max.ln() - min.ln()) * self.draw(key)).exp()
    }

    /// Zero-centered draw via the inverse-logit transform
    ///
    /// `scale * sqrt(pi/8) * ln(x / (1 - x))` for uniform x — approximately
    /// normal with standard deviation `scale`.
    pub fn gaussian(&self, key: &str, scale: f64) -> f64 {
        let x = self.draw(key);
        scale * (PI / 8.0).sqrt() * (x / (1.0 - x)).ln()
    }

    /// Integer draw in [min, max)
    ///
    /// `min + floor((max - min) * draw)` — slightly biased for ranges that
    /// don't divide the generator's state space, kept as-is so derived values
    /// stay reproducible.
    pub fn integer(&self, key: &str, min: i64, max: i64) -> i64 {
        min + ((max - min) as f64 * self.draw(key)).floor() as i64
    }

    /// Uniform choice among options
    pub fn choice<'a, T>(&self, key: &str, options: &'a [T]) -> &'a T {
        &options[self.integer(key, 0, options.len() as i64) as usize]
    }

    /// Three independent uniform byte channels
    pub fn color(&self, key: &str) -> Color {
        let mut rng = self.generator(key);
        Color::new(rng.random(), rng.random(), rng.random())
    }

    /// Color drawn inside a palette's HSV box
    ///
    /// Hue, saturation and value are drawn independently from the same keyed
    /// generator, then converted through the six-sector HSV formula.
    pub fn palette_color(&self, key: &str, palette: &Palette) -> Color {
        let mut rng = self.generator(key);
        let span = |min: f64, max: f64, x: f64| min + (max - min) * x;
        let hue = span(palette.hue_min, palette.hue_max, rng.random::<f64>());
        let saturation = span(
            palette.saturation_min,
            palette.saturation_max,
            rng.random::<f64>(),
        );
        let value = span(palette.value_min, palette.value_max, rng.random::<f64>());
        Color::from_hsv(hue, saturation, value)
    }
}

#[cfg(test)]
mod stream_test;
