//! Scalar sample grids
//!
//! Fields are sampled over an equirectangular grid spanning the full sphere:
//! `width = 2 × height` for surface fields, `width = 1` for meridian
//! profiles. Normalization is two-pass by construction — sample everything,
//! then rescale against the observed extrema.

use std::f64::consts::PI;

/// Latitude at pixel row `y` of a grid `height` rows tall, radians
///
/// Rows map to cell centers, south pole to north pole.
pub fn latitude(y: usize, height: usize) -> f64 {
    PI * (y as f64 + 0.5) / height as f64 - PI / 2.0
}

/// Longitude at pixel column `x` of a grid `width` columns wide, radians
pub fn longitude(x: usize, width: usize) -> f64 {
    2.0 * PI * (x as f64 + 0.5) / width as f64
}

/// Dense scalar grid
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarField {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

impl ScalarField {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; width * height],
        }
    }

    /// Build by evaluating `f` at every cell
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> f64 {
        self.data[y * self.width + x]
    }

    pub fn set(&mut self, x: usize, y: usize, value: f64) {
        self.data[y * self.width + x] = value;
    }

    /// Observed (min, max) over all cells
    pub fn extrema(&self) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in &self.data {
            min = min.min(v);
            max = max.max(v);
        }
        (min, max)
    }

    /// Rescale every cell into [0, 1] against the observed extrema
    ///
    /// A second call on an already normalized field is a no-op; a flat field
    /// is left unchanged to avoid dividing by a zero span.
    pub fn normalize(&mut self) {
        let (min, max) = self.extrema();
        let span = max - min;
        if span == 0.0 {
            return;
        }
        for v in &mut self.data {
            *v = (*v - min) / span;
        }
    }

    /// Apply a mapping to every cell, given its coordinates
    pub fn map_in_place(&mut self, mut f: impl FnMut(usize, usize, f64) -> f64) {
        for y in 0..self.height {
            for x in 0..self.width {
                let i = y * self.width + x;
                self.data[i] = f(x, y, self.data[i]);
            }
        }
    }
}

/// Lazily generated field bound to the resolution it was built at
///
/// `None` until first use; regenerated only when the requested resolution
/// differs from the cached one.
#[derive(Debug, Clone, Default)]
pub struct FieldSlot {
    state: Option<(usize, ScalarField)>,
}

impl FieldSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure the field exists at `resolution`, building it if needed
    pub fn ensure(&mut self, resolution: usize, build: impl FnOnce() -> ScalarField) {
        let stale = match &self.state {
            Some((cached, _)) => *cached != resolution,
            None => true,
        };
        if stale {
            self.state = Some((resolution, build()));
        }
    }

    /// The cached field, if generated at exactly this resolution
    pub fn get(&self, resolution: usize) -> Option<&ScalarField> {
        match &self.state {
            Some((cached, field)) if *cached == resolution => Some(field),
            _ => None,
        }
    }

    pub fn resolution(&self) -> Option<usize> {
        self.state.as_ref().map(|(r, _)| *r)
    }
}
