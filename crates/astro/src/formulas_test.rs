use approx::assert_relative_eq;

use crate::constants::*;
use crate::formulas::*;

#[test]
fn solar_magnitude_recovers_solar_luminosity() {
    // The Sun's absolute bolometric magnitude is 4.74 by IAU definition
    let luminosity = luminosity_from_magnitude(4.74);
    assert_relative_eq!(luminosity, 3.828e26, max_relative = 0.01);
}

#[test]
fn solar_bv_recovers_solar_temperature() {
    // B-V ≈ 0.656 for the Sun
    let temp = bv_to_temperature(0.656);
    assert!(
        (temp - SUN_TEMPERATURE).abs() < 150.0,
        "solar B-V gave {} K",
        temp
    );
}

#[test]
fn bv_is_monotonically_cooling() {
    assert!(bv_to_temperature(-0.2) > bv_to_temperature(0.5));
    assert!(bv_to_temperature(0.5) > bv_to_temperature(1.5));
}

#[test]
fn stefan_boltzmann_inversion_recovers_solar_radius() {
    let radius = star_radius(3.828e26, SUN_TEMPERATURE);
    assert_relative_eq!(radius, SUN_RADIUS, max_relative = 0.01);
}

#[test]
fn earth_orbital_period_is_one_year() {
    let period = orbital_period(ASTRONOMICAL_UNIT, SUN_MASS);
    let year = 365.25 * 86400.0;
    assert_relative_eq!(period, year, max_relative = 0.005);
}

#[test]
fn periapsis_and_apoapsis_bracket_the_semi_major_axis() {
    let a = 1.5e11;
    let e = 0.2;
    assert_relative_eq!(periapsis(a, e), 1.2e11);
    assert_relative_eq!(apoapsis(a, e), 1.8e11);
    assert_relative_eq!(periapsis(a, 0.0), apoapsis(a, 0.0));
}

#[test]
fn earth_mean_velocity_is_about_thirty_km_per_s() {
    let v = mean_orbital_velocity(ASTRONOMICAL_UNIT, SUN_MASS);
    assert_relative_eq!(v, 29780.0, max_relative = 0.01);
}

#[test]
fn equilibrium_temperature_at_one_au() {
    // Zero-albedo blackbody at Earth's distance: ~278-279 K
    let t = equilibrium_temperature(SUN_TEMPERATURE, SUN_RADIUS, ASTRONOMICAL_UNIT);
    assert!((t - 279.0).abs() < 3.0, "1 AU equilibrium gave {} K", t);
}

#[test]
fn equilibrium_temperature_falls_with_distance() {
    let near = equilibrium_temperature(SUN_TEMPERATURE, SUN_RADIUS, ASTRONOMICAL_UNIT);
    let far = equilibrium_temperature(SUN_TEMPERATURE, SUN_RADIUS, 5.2 * ASTRONOMICAL_UNIT);
    assert!(near > far);
    // Inverse square root falloff
    assert_relative_eq!(near / far, 5.2_f64.sqrt(), max_relative = 1e-9);
}

#[test]
fn earth_hill_sphere_is_about_one_and_a_half_million_km() {
    let r = hill_sphere(periapsis(ASTRONOMICAL_UNIT, 0.0167), EARTH_MASS, SUN_MASS);
    assert_relative_eq!(r, 1.47e9, max_relative = 0.02);
}

#[test]
fn earth_surface_gravity() {
    let g = surface_gravity(EARTH_MASS, EARTH_RADIUS);
    assert_relative_eq!(g, 9.82, max_relative = 0.005);
}

#[test]
fn sphere_volume_of_unit_radius() {
    assert_relative_eq!(sphere_volume(1.0), 4.0 / 3.0 * std::f64::consts::PI);
}

#[test]
fn lunar_tidal_differential_exceeds_terrestrial() {
    // The Moon is tidally locked to the Earth, the Earth is not to the Sun:
    // the differential across the Moon dwarfs the one across the Earth.
    let moon = tidal_differential(EARTH_MASS, 1_737_400.0, 3.844e8);
    let earth = tidal_differential(SUN_MASS, EARTH_RADIUS, ASTRONOMICAL_UNIT);
    assert!(moon > 1e-6, "lunar differential {} too small", moon);
    assert!(earth < 1e-6, "terrestrial differential {} too large", earth);
}
