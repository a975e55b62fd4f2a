//! Structured body documents
//!
//! Serde views of a body for dumping to JSON or similar key-value formats.
//! Fields outside a body's capability set are omitted entirely: a rocky
//! planet without a ring carries no ring block, the root star no orbit.

use serde::{Deserialize, Serialize};

use crate::body::{Body, BodyId, BodyKind};
use crate::system::System;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbitDocument {
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub inclination: f64,
    pub ascending_node: f64,
    pub argument_of_periapsis: f64,
    pub mean_anomaly: f64,
    pub period: f64,
    pub periapsis: f64,
    pub apoapsis: f64,
    pub mean_velocity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtmosphereDocument {
    pub color: String,
    pub opacity: f64,
    pub pressure: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OceanDocument {
    pub level: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RingDocument {
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub inclination: f64,
    pub color: String,
}

/// Key-value rendering of one body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyDocument {
    pub name: String,
    pub path: String,
    pub kind: String,
    pub mass: f64,
    pub radius: f64,
    pub density: f64,
    pub rotation_period: f64,
    pub surface_gravity: f64,
    pub effective_temperature: f64,
    pub surface_temperature: f64,
    pub sphere_of_influence: f64,
    pub albedo: f64,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub luminosity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orbit: Option<OrbitDocument>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atmosphere: Option<AtmosphereDocument>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ocean: Option<OceanDocument>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub life: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ring: Option<RingDocument>,
    pub satellites: Vec<String>,
}

impl BodyDocument {
    /// Render the body with the given id
    pub fn of(system: &System, id: BodyId) -> Self {
        let body = system.body(id);

        let luminosity = match body.kind {
            BodyKind::Star { luminosity, .. } => Some(luminosity),
            _ => None,
        };

        let life = match body.kind {
            BodyKind::RockyPlanet { life, .. } => Some(life),
            _ => None,
        };

        Self {
            name: body.name.clone(),
            path: body.path.clone(),
            kind: body.kind_name().to_string(),
            mass: body.mass,
            radius: body.radius,
            density: body.density,
            rotation_period: body.rotation_period,
            surface_gravity: body.surface_gravity,
            effective_temperature: body.effective_temperature,
            surface_temperature: body.surface_temperature,
            sphere_of_influence: body.sphere_of_influence,
            albedo: body.albedo,
            color: body.color.to_hex(),
            luminosity,
            orbit: body.orbit.as_ref().map(|o| OrbitDocument {
                semi_major_axis: o.semi_major_axis,
                eccentricity: o.eccentricity,
                inclination: o.inclination,
                ascending_node: o.ascending_node,
                argument_of_periapsis: o.argument_of_periapsis,
                mean_anomaly: o.mean_anomaly,
                period: o.period,
                periapsis: o.periapsis,
                apoapsis: o.apoapsis,
                mean_velocity: o.mean_velocity,
            }),
            atmosphere: body.atmosphere().map(|a| AtmosphereDocument {
                color: a.color.to_hex(),
                opacity: a.opacity,
                pressure: a.pressure,
            }),
            ocean: body.ocean().map(|o| OceanDocument {
                level: o.level,
                color: o.color.to_hex(),
            }),
            life,
            ring: body.ring.as_ref().map(|r| RingDocument {
                inner_radius: r.inner_radius,
                outer_radius: r.outer_radius,
                inclination: r.inclination,
                color: r.color.to_hex(),
            }),
            satellites: body
                .children
                .iter()
                .map(|&c| system.body(c).name.clone())
                .collect(),
        }
    }
}

impl System {
    /// Render every body, arena order
    pub fn documents(&self) -> Vec<BodyDocument> {
        self.ids().map(|id| BodyDocument::of(self, id)).collect()
    }
}
