//! Surface noise recipes
//!
//! Every body fixes its noise composition at construction time: which
//! descriptors feed each field, how multiple sources are merged, and which
//! color tables the surface pipeline indexes into. The recipe is data only;
//! evaluation lives in the surface crate.

use serde::{Deserialize, Serialize};

use chroma::ColorScale;
use noisefield::NoiseSpec;

/// How multiple raw noise sources collapse into one field value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Combinator {
    Min,
    Max,
    Multiply,
    /// Arithmetic mean of the sources
    Blend,
}

/// 2-3 raw sources plus the combinator merging them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRecipe {
    pub sources: Vec<NoiseSpec>,
    pub combinator: Combinator,
}

/// Vegetation overlay parameters for a living planet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeRecipe {
    pub vegetation: ColorScale,
    /// Temperature at which growth peaks (K)
    pub comfort_mean: f64,
    /// Spread of the comfort band (K)
    pub comfort_spread: f64,
    /// Latitude falloff exponent on the sin(π·y/h) weight
    pub pole_exponent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RockyRecipe {
    pub height: FieldRecipe,
    pub color: FieldRecipe,
    pub temperature: FieldRecipe,
    /// Terrain color stops indexed by the normalized color field
    pub terrain: ColorScale,
    pub life: Option<LifeRecipe>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GiantRecipe {
    /// Meridian banding profile
    pub banding: NoiseSpec,
    /// Primary color field
    pub color_a: NoiseSpec,
    /// Turbulence field warping the primary
    pub color_b: NoiseSpec,
    /// Domain-warp magnitude, already scaled by sqrt(mass/EarthMass)
    pub turbulence: f64,
    /// Cloud band colors indexed by the banded value
    pub bands: ColorScale,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarRecipe {
    /// Photosphere temperature variation
    pub temperature: NoiseSpec,
}

/// Per-variant surface composition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SurfaceRecipe {
    Star(StarRecipe),
    Rocky(Box<RockyRecipe>),
    Giant(GiantRecipe),
}
