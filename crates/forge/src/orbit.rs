//! Keplerian orbit representation
//!
//! Six classical elements plus quantities derived once at construction.
//! An orbit is owned by exactly one body and never changes afterwards.

use serde::{Deserialize, Serialize};

use astro::{apoapsis, mean_orbital_velocity, orbital_period, periapsis};

/// Classical orbital elements with derived quantities
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Orbit {
    /// Semi-major axis (m)
    pub semi_major_axis: f64,
    /// Eccentricity (0 ≤ e < 1)
    pub eccentricity: f64,
    /// Inclination against the parent's equatorial plane (rad)
    pub inclination: f64,
    /// Longitude of the ascending node (rad)
    pub ascending_node: f64,
    /// Argument of periapsis (rad)
    pub argument_of_periapsis: f64,
    /// Mean anomaly at epoch (rad)
    pub mean_anomaly: f64,
    /// Orbital period (s)
    pub period: f64,
    /// Closest approach to the parent (m)
    pub periapsis: f64,
    /// Farthest distance from the parent (m)
    pub apoapsis: f64,
    /// Mean orbital velocity, circular approximation (m/s)
    pub mean_velocity: f64,
}

impl Orbit {
    /// Build an orbit around a parent of the given mass
    ///
    /// Derived quantities are fixed here; the struct is immutable by
    /// convention afterwards.
    pub fn new(
        semi_major_axis: f64,
        eccentricity: f64,
        inclination: f64,
        ascending_node: f64,
        argument_of_periapsis: f64,
        mean_anomaly: f64,
        parent_mass: f64,
    ) -> Self {
        Self {
            semi_major_axis,
            eccentricity,
            inclination,
            ascending_node,
            argument_of_periapsis,
            mean_anomaly,
            period: orbital_period(semi_major_axis, parent_mass),
            periapsis: periapsis(semi_major_axis, eccentricity),
            apoapsis: apoapsis(semi_major_axis, eccentricity),
            mean_velocity: mean_orbital_velocity(semi_major_axis, parent_mass),
        }
    }
}
