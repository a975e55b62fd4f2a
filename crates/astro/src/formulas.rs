//! Closed-form astrophysical formulas
//!
//! # References
//! - Ballesteros (2012) - "New insights into black bodies" (B-V fit)
//! - Hamilton & Burns (1992) - gravitational spheres of influence

use std::f64::consts::PI;

use crate::constants::*;

/// Luminosity from absolute bolometric magnitude, in watts
///
/// L = L₀ × 10^(-0.4 M) with the IAU zero point.
pub fn luminosity_from_magnitude(magnitude: f64) -> f64 {
    ZERO_POINT_LUMINOSITY * 10.0_f64.powf(-0.4 * magnitude)
}

/// Effective temperature from B-V color index, in kelvin
///
/// Ballesteros' fit, valid across the main sequence:
/// T = 4600 × (1/(0.92 b + 1.7) + 1/(0.92 b + 0.62))
pub fn bv_to_temperature(bv: f64) -> f64 {
    4600.0 * (1.0 / (0.92 * bv + 1.7) + 1.0 / (0.92 * bv + 0.62))
}

/// Star radius from luminosity and effective temperature, in meters
///
/// Stefan-Boltzmann inversion: R = sqrt(L / (4π σ T⁴))
pub fn star_radius(luminosity: f64, temperature: f64) -> f64 {
    (luminosity / (4.0 * PI * STEFAN_BOLTZMANN * temperature.powi(4))).sqrt()
}

/// Keplerian orbital period, in seconds
///
/// T = 2π sqrt(a³ / (G M))
pub fn orbital_period(semi_major_axis: f64, parent_mass: f64) -> f64 {
    2.0 * PI * (semi_major_axis.powi(3) / (G * parent_mass)).sqrt()
}

/// Closest approach of an elliptical orbit, in meters
pub fn periapsis(semi_major_axis: f64, eccentricity: f64) -> f64 {
    semi_major_axis * (1.0 - eccentricity)
}

/// Farthest point of an elliptical orbit, in meters
pub fn apoapsis(semi_major_axis: f64, eccentricity: f64) -> f64 {
    semi_major_axis * (1.0 + eccentricity)
}

/// Mean orbital velocity, circular approximation, in m/s
///
/// v = sqrt(G M / a)
pub fn mean_orbital_velocity(semi_major_axis: f64, parent_mass: f64) -> f64 {
    (G * parent_mass / semi_major_axis).sqrt()
}

/// Radiative equilibrium temperature at distance from a star, in kelvin
///
/// T = T★ sqrt(R★ / (2 d)) — the zero-albedo blackbody balance.
pub fn equilibrium_temperature(star_temperature: f64, star_radius: f64, distance: f64) -> f64 {
    star_temperature * (star_radius / (2.0 * distance)).sqrt()
}

/// Hill-sphere radius, in meters
///
/// r = q (m / (3 M))^(1/3) with q the body's periapsis around its parent.
pub fn hill_sphere(periapsis: f64, mass: f64, parent_mass: f64) -> f64 {
    periapsis * (mass / (3.0 * parent_mass)).powf(1.0 / 3.0)
}

/// Volume of a sphere, in m³
pub fn sphere_volume(radius: f64) -> f64 {
    4.0 / 3.0 * PI * radius.powi(3)
}

/// Surface gravitational acceleration, in m/s²
pub fn surface_gravity(mass: f64, radius: f64) -> f64 {
    G * mass / radius.powi(2)
}

/// Gravitational differential across a body's diameter, in m/s²
///
/// Δg = 2 G M r / d³ — the leading tidal term; compared against the lock
/// threshold by the generator.
pub fn tidal_differential(parent_mass: f64, body_radius: f64, distance: f64) -> f64 {
    2.0 * G * parent_mass * body_radius / distance.powi(3)
}
