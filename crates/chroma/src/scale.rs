use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Piecewise-linear color interpolation table
///
/// Holds an ascending sequence of positions in [0, 1] paired with colors.
/// Lookup clamps to the first/last stop and interpolates each channel
/// independently inside the bracketing segment. Duplicate positions are
/// allowed; the first matching segment wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorScale {
    stops: Vec<(f64, Color)>,
}

impl ColorScale {
    /// Build a scale from ascending (position, color) stops
    ///
    /// At least one stop is required; positions are expected ascending and
    /// are not re-sorted.
    pub fn new(stops: Vec<(f64, Color)>) -> Self {
        debug_assert!(!stops.is_empty(), "color scale needs at least one stop");
        debug_assert!(
            stops.windows(2).all(|w| w[0].0 <= w[1].0),
            "color scale stops must be ascending"
        );
        Self { stops }
    }

    /// Two-stop gradient
    pub fn gradient(from: Color, to: Color) -> Self {
        Self::new(vec![(0.0, from), (1.0, to)])
    }

    pub fn stops(&self) -> &[(f64, Color)] {
        &self.stops
    }

    /// Sample the scale at `v`
    ///
    /// Values at or below the first position return the first color exactly;
    /// at or above the last position, the last color exactly. A value landing
    /// on an interior knot returns that knot's color exactly.
    pub fn color(&self, v: f64) -> Color {
        let (first_pos, first_color) = self.stops[0];
        let (last_pos, last_color) = *self.stops.last().unwrap();

        if v <= first_pos {
            return first_color;
        }
        if v >= last_pos {
            return last_color;
        }

        for pair in self.stops.windows(2) {
            let (p0, c0) = pair[0];
            let (p1, c1) = pair[1];
            if v < p0 || v > p1 {
                continue;
            }
            if v == p0 {
                return c0;
            }
            if v == p1 {
                return c1;
            }
            // Degenerate segment: first match wins
            if p1 == p0 {
                return c0;
            }
            let t = (v - p0) / (p1 - p0);
            return c0.lerp(c1, t);
        }

        last_color
    }
}
