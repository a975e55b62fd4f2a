use serde::{Deserialize, Serialize};

/// A closed box in hue/saturation/value space
///
/// Colors for a material are drawn independently in each dimension inside
/// the box and converted to RGB. Hue bounds are in degrees and may exceed
/// 360 to express a span that wraps through red (e.g. 330..390).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub hue_min: f64,
    pub hue_max: f64,
    pub saturation_min: f64,
    pub saturation_max: f64,
    pub value_min: f64,
    pub value_max: f64,
}

impl Palette {
    pub fn new(hue: (f64, f64), saturation: (f64, f64), value: (f64, f64)) -> Self {
        Self {
            hue_min: hue.0,
            hue_max: hue.1,
            saturation_min: saturation.0,
            saturation_max: saturation.1,
            value_min: value.0,
            value_max: value.1,
        }
    }

    /// Bare rock and regolith: ochres through gray-browns
    pub fn rock() -> Self {
        Self::new((10.0, 50.0), (0.1, 0.6), (0.2, 0.8))
    }

    /// Open water: deep blues into teal
    pub fn ocean() -> Self {
        Self::new((190.0, 240.0), (0.5, 0.9), (0.25, 0.7))
    }

    /// Ice caps and frost: near-white with a cold cast
    pub fn ice() -> Self {
        Self::new((180.0, 220.0), (0.0, 0.15), (0.85, 1.0))
    }

    /// Vegetation: greens with the occasional yellow fringe
    pub fn life() -> Self {
        Self::new((70.0, 150.0), (0.4, 0.9), (0.25, 0.7))
    }

    /// Atmospheric haze: pale desaturated sky tones
    pub fn atmosphere() -> Self {
        Self::new((160.0, 260.0), (0.1, 0.5), (0.6, 1.0))
    }

    /// Giant-planet cloud bands: cream, tan, rust and the odd blue
    pub fn giant_bands() -> Self {
        Self::new((10.0, 250.0), (0.1, 0.7), (0.3, 0.95))
    }

    /// Ring material: rock and ice rubble, biased dark by the caller
    pub fn ring() -> Self {
        Self::new((20.0, 60.0), (0.0, 0.4), (0.3, 0.9))
    }
}
