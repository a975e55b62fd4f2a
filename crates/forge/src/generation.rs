//! Body construction and satellite population
//!
//! All drawn quantities are keyed by the body's qualified path, so any body
//! is reproducible in isolation no matter what order the tree was walked in.
//! Orbit placement moves strictly outward: each new satellite's minimum
//! semi-major axis is a fixed multiple of the previous outermost one, which
//! also guarantees the population loop terminates once the parent's sphere
//! of influence is exhausted.

use std::f64::consts::TAU;

use astro::{
    bv_to_temperature, equilibrium_temperature, hill_sphere, luminosity_from_magnitude,
    sphere_volume, star_radius, surface_gravity, tidal_differential, EARTH_MASS, EARTH_RADIUS,
    JUPITER_MASS, JUPITER_RADIUS, STEFAN_BOLTZMANN, SUN_MASS, SUN_RADIUS, SUN_ROTATION_PERIOD,
    SUN_TEMPERATURE, G,
};
use chroma::{Color, ColorScale, Palette};
use keystream::RandomStream;
use noisefield::{NoiseKind, NoiseSpec};

use crate::body::{Atmosphere, Body, BodyId, BodyKind, Ocean, Ring};
use crate::error::GenError;
use crate::orbit::Orbit;
use crate::recipe::{
    Combinator, FieldRecipe, GiantRecipe, LifeRecipe, RockyRecipe, StarRecipe, SurfaceRecipe,
};
use crate::system::System;

/// Influence radius of a Sun-mass root star (m)
const STAR_INFLUENCE_RADIUS: f64 = 1e13;

/// Parent gravity at the innermost allowed orbit (m/s²)
const FIRST_ORBIT_GRAVITY: f64 = 0.05;

/// Growth factor between successive satellite orbits
const ORBIT_SPACING: f64 = 1.5;

/// Gravitational differential across a body above which it locks (m/s²)
const TIDAL_LOCK_THRESHOLD: f64 = 1e-6;

/// Satellites heavier than this become giant planets (kg)
const GIANT_PROMOTION_MASS: f64 = 10.0 * EARTH_MASS;

/// Extra attempts allowed beyond the target count, covering name collisions
const MAX_EXTRA_ATTEMPTS: usize = 8;

/// Deepest level that may receive satellites (root = 0)
const MAX_DEPTH: usize = 3;

/// Bolometric luminosity of the Sun (W)
const SOLAR_LUMINOSITY: f64 = 3.828e26;

// =============================================================================
// Star construction
// =============================================================================

/// Build the root star for a system name
///
/// "the sun" short-circuits to the solar reference constants; anything else
/// draws a main-sequence star from absolute magnitude and B-V color index.
pub(crate) fn make_star(stream: &RandomStream, name: &str) -> Result<Body, GenError> {
    let (mass, radius, temperature, luminosity, rotation_period) = if name == "the sun" {
        let luminosity =
            4.0 * std::f64::consts::PI * SUN_RADIUS.powi(2) * STEFAN_BOLTZMANN
                * SUN_TEMPERATURE.powi(4);
        (
            SUN_MASS,
            SUN_RADIUS,
            SUN_TEMPERATURE,
            luminosity,
            SUN_ROTATION_PERIOD,
        )
    } else {
        let key = |p: &str| format!("{}:{}", name, p);
        let magnitude = stream.uniform(&key("magnitude"), -1.0, 9.0);
        let luminosity = luminosity_from_magnitude(magnitude);
        let color_index = stream.uniform(&key("color-index"), -0.2, 1.6);
        let temperature = bv_to_temperature(color_index);
        let radius = star_radius(luminosity, temperature);
        // Main-sequence mass-luminosity relation, L ∝ M^3.5
        let mass = SUN_MASS * (luminosity / SOLAR_LUMINOSITY).powf(1.0 / 3.5);
        let rotation_period =
            stream.log_uniform(&key("rotation"), 12.0 * 86400.0, 40.0 * 86400.0);
        (mass, radius, temperature, luminosity, rotation_period)
    };

    if !(mass > 0.0 && radius > 0.0) {
        return Err(GenError::ConstraintViolation {
            body: name.to_string(),
            detail: format!("non-positive star mass {} or radius {}", mass, radius),
        });
    }

    let recipe = SurfaceRecipe::Star(StarRecipe {
        temperature: NoiseSpec::draw(
            stream,
            &format!("{}:surface:temperature", name),
            NoiseKind::Layered,
            (1.0, 6.0),
        ),
    });

    Ok(Body {
        path: name.to_string(),
        name: name.to_string(),
        kind: BodyKind::Star {
            luminosity,
            temperature,
        },
        mass,
        radius,
        density: mass / sphere_volume(radius),
        rotation_period,
        surface_gravity: surface_gravity(mass, radius),
        effective_temperature: temperature,
        surface_temperature: temperature,
        sphere_of_influence: STAR_INFLUENCE_RADIUS * (mass / SUN_MASS).powf(1.0 / 3.0),
        albedo: 0.0,
        color: Color::from_temperature(temperature),
        ring: None,
        orbit: None,
        recipe,
        children: Vec::new(),
        parent: None,
        star: None,
    })
}

// =============================================================================
// Satellite population
// =============================================================================

/// Attach satellites to a body, recursively
///
/// Direct children of the star use the target-count loop; deeper levels use
/// the single-candidate mode. A name collision burns an attempt (and its
/// ordinal) without counting as an acceptance; the loop is capped at
/// target + [`MAX_EXTRA_ATTEMPTS`] total attempts.
pub(crate) fn populate(system: &mut System, parent_id: BodyId, depth: usize) -> Result<(), GenError> {
    if depth > MAX_DEPTH {
        return Ok(());
    }

    let stream = *system.stream();
    let parent_path = system.body(parent_id).path.clone();

    let target = if depth >= 2 {
        // Deep recursion: at most one candidate, half the time
        let key = format!("{}:moon", parent_path);
        usize::from(stream.draw(&key) < 0.5)
    } else {
        let cap = match system.body(parent_id).kind {
            BodyKind::Star { .. } => 10,
            BodyKind::GiantPlanet { .. } => 7,
            BodyKind::RockyPlanet { .. } => 4,
        };
        stream.integer(&format!("{}:satellites", parent_path), 0, cap) as usize
    };

    let mut accepted = 0usize;
    let mut attempts = 0usize;
    let mut outermost: Option<f64> = None;

    while accepted < target && attempts < target + MAX_EXTRA_ATTEMPTS {
        let ordinal = attempts;
        attempts += 1;

        let child_name = system
            .names()
            .generate(&stream, &format!("{}:satellite:{}", parent_path, ordinal));
        let collides = system
            .body(parent_id)
            .children
            .iter()
            .any(|&c| system.body(c).name == child_name);
        if collides {
            tracing::debug!(
                "discarding colliding satellite name {:?} under {}",
                child_name,
                parent_path
            );
            continue;
        }

        let Some((min_axis, max_axis)) = orbit_range(system, parent_id, outermost)? else {
            // No room left inside the sphere of influence
            break;
        };

        let child_path = format!("{}/{}", parent_path, child_name);
        let axis = stream.uniform(&format!("{}:semi-major-axis", child_path), min_axis, max_axis);
        if axis > system.body(parent_id).sphere_of_influence {
            break;
        }

        let child = build_satellite(system, parent_id, &child_name, axis)?;
        tracing::debug!(
            "placed {} ({}) at {:.3e} m",
            child.path,
            child.kind_name(),
            axis
        );

        let child_id = system.push(child);
        system.body_mut(parent_id).children.push(child_id);
        populate(system, child_id, depth + 1)?;

        outermost = Some(axis);
        accepted += 1;
    }

    Ok(())
}

/// Allowed semi-major-axis range for the next satellite
///
/// The first orbit starts where the parent's gravity falls to
/// [`FIRST_ORBIT_GRAVITY`]; later orbits start at [`ORBIT_SPACING`] times the
/// outermost accepted axis. The span is one spacing factor wide, pushed out
/// of the parent's ring band and clamped to the sphere of influence. Returns
/// `None` when no room remains.
fn orbit_range(
    system: &System,
    parent_id: BodyId,
    outermost: Option<f64>,
) -> Result<Option<(f64, f64)>, GenError> {
    let parent = system.body(parent_id);

    if !(parent.mass > 0.0 && parent.radius > 0.0) {
        return Err(GenError::ConstraintViolation {
            body: parent.path.clone(),
            detail: format!(
                "non-positive parent mass {} or radius {}",
                parent.mass, parent.radius
            ),
        });
    }

    let mut min = match outermost {
        Some(axis) => ORBIT_SPACING * axis,
        None => (G * parent.mass / FIRST_ORBIT_GRAVITY).sqrt(),
    };
    let mut max = ORBIT_SPACING * min;

    if let Some(ring) = &parent.ring {
        if min > ring.inner_radius && min < ring.outer_radius {
            min = ring.outer_radius;
        }
        if max > ring.inner_radius && max < ring.outer_radius {
            max = ring.inner_radius;
        }
    }

    if !min.is_finite() || !max.is_finite() || max < min {
        return Err(GenError::ConstraintViolation {
            body: parent.path.clone(),
            detail: format!("degenerate orbit range {}..{}", min, max),
        });
    }

    let influence = parent.sphere_of_influence;
    if min >= influence {
        return Ok(None);
    }
    let max = max.min(influence);
    if max <= min {
        return Ok(None);
    }

    Ok(Some((min, max)))
}

// =============================================================================
// Satellite construction
// =============================================================================

/// Build one satellite body at the given semi-major axis
fn build_satellite(
    system: &System,
    parent_id: BodyId,
    name: &str,
    axis: f64,
) -> Result<Body, GenError> {
    let stream = *system.stream();
    let parent = system.body(parent_id);
    let star_id = system.body(parent_id).star.expect("parent always has a star");
    let star = system.body(star_id);

    let path = format!("{}/{}", parent.path, name);
    let key = |p: &str| format!("{}:{}", path, p);

    let mass = draw_mass(&stream, &key("mass"), parent);
    let giant = mass > GIANT_PROMOTION_MASS;

    // Type-specific mass-radius power law
    let radius = if giant {
        JUPITER_RADIUS * (mass / JUPITER_MASS).powf(0.06)
    } else {
        EARTH_RADIUS * (mass / EARTH_MASS).powf(0.27)
    };

    let gravity = surface_gravity(mass, radius);

    let orbit = Orbit::new(
        axis,
        stream.uniform(&key("eccentricity"), 0.0, 0.12),
        stream.gaussian(&key("inclination"), 0.06),
        stream.uniform(&key("ascending-node"), 0.0, TAU),
        stream.uniform(&key("argument-of-periapsis"), 0.0, TAU),
        stream.uniform(&key("mean-anomaly"), 0.0, TAU),
        parent.mass,
    );

    let sphere_of_influence = hill_sphere(orbit.periapsis, mass, parent.mass);

    let star_temperature = match star.kind {
        BodyKind::Star { temperature, .. } => temperature,
        _ => unreachable!("star link always points at a star"),
    };
    let star_distance = system.star_distance(parent_id, axis);
    let effective_temperature =
        equilibrium_temperature(star_temperature, star.radius, star_distance);

    let mut rotation_period = stream.log_uniform(&key("rotation"), 21_600.0, 180_000.0);
    if tidal_differential(parent.mass, radius, axis) > TIDAL_LOCK_THRESHOLD {
        rotation_period = orbit.period;
    }

    let albedo = stream.uniform(&key("albedo"), 0.05, 0.6);

    let (kind, surface_temperature, ring, color, recipe) = if giant {
        build_giant(&stream, &key, &path, mass, radius, gravity, effective_temperature,
            sphere_of_influence)?
    } else {
        build_rocky(&stream, &key, mass, gravity, effective_temperature)
    };

    Ok(Body {
        path,
        name: name.to_string(),
        kind,
        mass,
        radius,
        density: mass / sphere_volume(radius),
        rotation_period,
        surface_gravity: gravity,
        effective_temperature,
        surface_temperature,
        sphere_of_influence,
        albedo,
        color,
        ring,
        orbit: Some(orbit),
        recipe,
        children: Vec::new(),
        parent: Some(parent_id),
        star: Some(star_id),
    })
}

/// Log-uniform satellite mass bounded by the parent
///
/// Stellar parents host planet-range masses capped well below the star;
/// planetary parents host moons capped at a fiftieth of their own mass.
fn draw_mass(stream: &RandomStream, key: &str, parent: &Body) -> f64 {
    if parent.is_star() {
        let hi = (parent.mass / 1000.0).min(5e27);
        let lo = 1e23_f64.min(hi / 1000.0);
        stream.log_uniform(key, lo, hi)
    } else {
        let hi = parent.mass / 50.0;
        let lo = (parent.mass * 1e-7).max(1e16).min(hi / 10.0);
        stream.log_uniform(key, lo, hi)
    }
}

#[allow(clippy::too_many_arguments)]
fn build_giant(
    stream: &RandomStream,
    key: &dyn Fn(&str) -> String,
    path: &str,
    mass: f64,
    radius: f64,
    gravity: f64,
    effective_temperature: f64,
    sphere_of_influence: f64,
) -> Result<(BodyKind, f64, Option<Ring>, Color, SurfaceRecipe), GenError> {
    // Opacity feeds the pressure derivation only; giants render opaque
    // regardless, so the stored opacity is zero.
    let opacity = stream.draw(&key("atmosphere-opacity"));
    let pressure = 101_325.0 * opacity * gravity / 9.81;
    let atmosphere = Atmosphere {
        color: stream.palette_color(&key("atmosphere-color"), &Palette::atmosphere()),
        opacity: 0.0,
        pressure,
    };

    // Internal heating dominates far from the star
    let surface_temperature =
        effective_temperature + 100.0 * (mass / JUPITER_MASS).powf(0.3);

    let ring = if stream.draw(&key("ring")) < 0.5 {
        let inner_radius = radius * stream.uniform(&key("ring-inner"), 1.4, 2.2);
        let outer_radius =
            (inner_radius * stream.uniform(&key("ring-outer"), 1.15, 2.0)).min(sphere_of_influence);
        if !inner_radius.is_finite() || !outer_radius.is_finite() || outer_radius <= inner_radius {
            return Err(GenError::ConstraintViolation {
                body: path.to_string(),
                detail: format!("degenerate ring band {}..{}", inner_radius, outer_radius),
            });
        }
        Some(Ring {
            inner_radius,
            outer_radius,
            inclination: stream.gaussian(&key("ring-inclination"), 0.08),
            color: stream
                .palette_color(&key("ring-color"), &Palette::ring())
                .pow(stream.uniform(&key("ring-darkening"), 1.2, 2.4)),
            band: NoiseSpec::draw(stream, &key("ring-band"), NoiseKind::Layered, (2.0, 12.0)),
        })
    } else {
        None
    };

    let recipe = SurfaceRecipe::Giant(GiantRecipe {
        banding: NoiseSpec::draw(stream, &key("surface:banding"), NoiseKind::Layered, (1.5, 8.0)),
        color_a: NoiseSpec::draw_any(stream, &key("surface:color-a"), (0.8, 5.0)),
        color_b: NoiseSpec::draw_any(stream, &key("surface:color-b"), (0.8, 5.0)),
        turbulence: stream.uniform(&key("surface:turbulence"), 0.01, 0.05)
            * (mass / EARTH_MASS).sqrt(),
        bands: draw_scale(stream, &key("surface:bands"), &Palette::giant_bands(), 4, 8),
    });

    let color = stream.palette_color(&key("tint"), &Palette::giant_bands());

    Ok((
        BodyKind::GiantPlanet { atmosphere },
        surface_temperature,
        ring,
        color,
        recipe,
    ))
}

fn build_rocky(
    stream: &RandomStream,
    key: &dyn Fn(&str) -> String,
    mass: f64,
    gravity: f64,
    effective_temperature: f64,
) -> (BodyKind, f64, Option<Ring>, Color, SurfaceRecipe) {
    // Heavier worlds hold on to an envelope more easily
    let retention = gravity / (gravity + 8.0);
    let atmosphere = if stream.draw(&key("atmosphere")) < retention {
        let opacity = stream.draw(&key("atmosphere-opacity"));
        Some(Atmosphere {
            color: stream.palette_color(&key("atmosphere-color"), &Palette::atmosphere()),
            opacity,
            pressure: 101_325.0 * opacity * gravity / 9.81,
        })
    } else {
        None
    };

    let surface_temperature = match &atmosphere {
        Some(atm) => effective_temperature * (1.0 + 0.3 * atm.opacity),
        None => effective_temperature,
    };

    let ocean = if atmosphere.is_some()
        && surface_temperature < astro::BOILING_POINT + 50.0
        && stream.draw(&key("ocean")) < 0.6
    {
        Some(Ocean {
            level: stream.uniform(&key("ocean-level"), 0.25, 0.65),
            color: stream.palette_color(&key("ocean-color"), &Palette::ocean()),
        })
    } else {
        None
    };

    let life = ocean.is_some()
        && (250.0..330.0).contains(&surface_temperature)
        && stream.draw(&key("life")) < 0.5;

    let life_recipe = life.then(|| LifeRecipe {
        vegetation: draw_scale(stream, &key("surface:vegetation"), &Palette::life(), 3, 5),
        comfort_mean: stream.uniform(&key("life-comfort"), 278.0, 305.0),
        comfort_spread: stream.uniform(&key("life-spread"), 4.0, 25.0),
        pole_exponent: stream.uniform(&key("life-pole"), 1.0, 4.0),
    });

    let recipe = SurfaceRecipe::Rocky(Box::new(RockyRecipe {
        height: FieldRecipe::draw(stream, &key("surface:height"), (1.0, 8.0)),
        color: FieldRecipe::draw(stream, &key("surface:color"), (1.0, 10.0)),
        temperature: FieldRecipe::draw(stream, &key("surface:temperature"), (0.5, 4.0)),
        terrain: draw_scale(stream, &key("surface:terrain"), &Palette::rock(), 4, 7),
        life: life_recipe,
    }));

    let kind = BodyKind::RockyPlanet {
        atmosphere,
        ocean,
        ice_factor: stream.uniform(&key("ice-factor"), 0.9, 1.1),
        ice_color: stream.palette_color(&key("ice-color"), &Palette::ice()),
        life,
    };

    let color = stream.palette_color(&key("tint"), &Palette::rock());

    (kind, surface_temperature, None, color, recipe)
}

impl FieldRecipe {
    /// Draw 2-3 sources and the combinator merging them
    pub fn draw(stream: &RandomStream, key: &str, frequency: (f64, f64)) -> Self {
        let count = stream.integer(&format!("{}:count", key), 2, 4) as usize;
        let sources = (0..count)
            .map(|i| NoiseSpec::draw_any(stream, &format!("{}:{}", key, i), frequency))
            .collect();
        let combinator = *stream.choice(
            &format!("{}:combinator", key),
            &[
                Combinator::Min,
                Combinator::Max,
                Combinator::Multiply,
                Combinator::Blend,
            ],
        );
        Self { sources, combinator }
    }
}

/// Evenly-spaced color scale drawn from a palette
fn draw_scale(
    stream: &RandomStream,
    key: &str,
    palette: &Palette,
    min_stops: i64,
    max_stops: i64,
) -> ColorScale {
    let count = stream.integer(&format!("{}:stops", key), min_stops, max_stops);
    let stops = (0..count)
        .map(|i| {
            let position = i as f64 / (count - 1) as f64;
            (
                position,
                stream.palette_color(&format!("{}:{}", key, i), palette),
            )
        })
        .collect();
    ColorScale::new(stops)
}
