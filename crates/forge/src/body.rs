//! Body data model
//!
//! Bodies live in a flat arena owned by [`crate::system::System`]; the
//! `children` vector is the only ownership edge, parent and star links are
//! plain ids. Shared physical attributes sit on [`Body`], per-variant fields
//! on [`BodyKind`].

use serde::{Deserialize, Serialize};

use chroma::Color;
use noisefield::NoiseSpec;

use crate::orbit::Orbit;
use crate::recipe::SurfaceRecipe;

/// Stable index of a body inside its system's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BodyId(pub usize);

/// Gaseous envelope of a planet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Atmosphere {
    pub color: Color,
    /// Visual opacity in [0, 1]; zeroed for giants once pressure is derived
    pub opacity: f64,
    /// Surface pressure (Pa)
    pub pressure: f64,
}

/// Liquid surface layer of a rocky planet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ocean {
    /// Fill level in normalized height units [0, 1]
    pub level: f64,
    pub color: Color,
}

/// Ring system around a giant planet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    /// Inner edge (m from body center)
    pub inner_radius: f64,
    /// Outer edge (m from body center)
    pub outer_radius: f64,
    /// Inclination against the body's equator (rad)
    pub inclination: f64,
    pub color: Color,
    /// Radial density band descriptor
    pub band: NoiseSpec,
}

/// Per-variant fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BodyKind {
    Star {
        /// Bolometric luminosity (W)
        luminosity: f64,
        /// Photosphere temperature (K)
        temperature: f64,
    },
    RockyPlanet {
        atmosphere: Option<Atmosphere>,
        ocean: Option<Ocean>,
        /// Multiplier on the freezing point below which cells ice over
        ice_factor: f64,
        ice_color: Color,
        life: bool,
    },
    GiantPlanet {
        atmosphere: Atmosphere,
    },
}

/// One celestial body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Qualified path from the root, e.g. "vega/minthar"
    pub path: String,
    /// Name, lowercase, unique among siblings
    pub name: String,
    pub kind: BodyKind,
    /// Mass (kg)
    pub mass: f64,
    /// Mean radius (m)
    pub radius: f64,
    /// Bulk density (kg/m³)
    pub density: f64,
    /// Sidereal rotation period (s); equals the orbital period when locked
    pub rotation_period: f64,
    /// Surface gravitational acceleration (m/s²)
    pub surface_gravity: f64,
    /// Radiative equilibrium temperature (K)
    pub effective_temperature: f64,
    /// Temperature including greenhouse/internal heating (K)
    pub surface_temperature: f64,
    /// Radius inside which this body's gravity dominates (m)
    pub sphere_of_influence: f64,
    /// Bond albedo; refined later by measuring the rendered color map
    pub albedo: f64,
    pub color: Color,
    pub ring: Option<Ring>,
    /// None only for the root star
    pub orbit: Option<Orbit>,
    /// Noise composition fixed at construction
    pub recipe: SurfaceRecipe,
    /// Discovery order; the only ownership edge in the tree
    pub children: Vec<BodyId>,
    pub parent: Option<BodyId>,
    /// Nearest star up the tree (self for stars)
    pub star: Option<BodyId>,
}

impl Body {
    pub fn is_star(&self) -> bool {
        matches!(self.kind, BodyKind::Star { .. })
    }

    pub fn has_ring(&self) -> bool {
        self.ring.is_some()
    }

    pub fn has_atmosphere(&self) -> bool {
        match &self.kind {
            BodyKind::Star { .. } => false,
            BodyKind::RockyPlanet { atmosphere, .. } => atmosphere.is_some(),
            BodyKind::GiantPlanet { .. } => true,
        }
    }

    pub fn atmosphere(&self) -> Option<&Atmosphere> {
        match &self.kind {
            BodyKind::Star { .. } => None,
            BodyKind::RockyPlanet { atmosphere, .. } => atmosphere.as_ref(),
            BodyKind::GiantPlanet { atmosphere } => Some(atmosphere),
        }
    }

    pub fn has_ocean(&self) -> bool {
        self.ocean().is_some()
    }

    pub fn ocean(&self) -> Option<&Ocean> {
        match &self.kind {
            BodyKind::RockyPlanet { ocean, .. } => ocean.as_ref(),
            _ => None,
        }
    }

    pub fn has_life(&self) -> bool {
        matches!(self.kind, BodyKind::RockyPlanet { life: true, .. })
    }

    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            BodyKind::Star { .. } => "star",
            BodyKind::RockyPlanet { .. } => "rocky planet",
            BodyKind::GiantPlanet { .. } => "giant planet",
        }
    }
}
