//! Field synthesis from surface recipes
//!
//! Each function samples noise over the grid in a first pass and normalizes
//! against the observed extrema in a second. The recipes themselves were
//! drawn at body construction; nothing here touches the random stream.

use std::f64::consts::PI;

use forge::{Combinator, FieldRecipe};
use noisefield::{NoiseSpec, Sampler};

use crate::grid::{latitude, longitude, ScalarField};

/// East-west blend softening the seam of a meridian profile
const WRAP_BLEND: f64 = 0.3;

/// Fraction of the ambient temperature a star's coolest patch keeps
const STAR_TEMP_FLOOR: f64 = 0.75;

/// Merge raw source values with the recipe's combinator
fn combine(combinator: Combinator, values: &[f64]) -> f64 {
    match combinator {
        Combinator::Min => values.iter().copied().fold(f64::INFINITY, f64::min),
        Combinator::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        Combinator::Multiply => values.iter().product(),
        Combinator::Blend => values.iter().sum::<f64>() / values.len() as f64,
    }
}

/// Sample a multi-source field over the sphere, normalized into [0, 1]
pub fn composite_field(recipe: &FieldRecipe, height: usize) -> ScalarField {
    let samplers: Vec<Sampler> = recipe.sources.iter().map(Sampler::new).collect();
    let width = height * 2;

    let mut values = Vec::with_capacity(samplers.len());
    let mut field = ScalarField::from_fn(width, height, |x, y| {
        let lat = latitude(y, height);
        let lon = longitude(x, width);
        values.clear();
        values.extend(samplers.iter().map(|s| s.sample(lat, lon)));
        combine(recipe.combinator, &values)
    });
    field.normalize();
    field
}

/// Star photosphere temperatures in kelvin
///
/// Normalized noise rescaled into [0.75, 1.0] × the ambient effective
/// temperature.
pub fn star_temperature_field(spec: &NoiseSpec, ambient: f64, height: usize) -> ScalarField {
    let sampler = Sampler::new(spec);
    let width = height * 2;

    let mut field = ScalarField::from_fn(width, height, |x, y| {
        sampler.sample(latitude(y, height), longitude(x, width))
    });
    field.normalize();
    field.map_in_place(|_, _, v| ambient * (STAR_TEMP_FLOOR + (1.0 - STAR_TEMP_FLOOR) * v));
    field
}

/// Latitude banding profile of a giant planet, 1 × height, normalized
///
/// Sampled down a single meridian; the eastern end of the sphere is blended
/// in so the profile matches where longitudes wrap.
pub fn banding_profile(spec: &NoiseSpec, height: usize) -> ScalarField {
    let sampler = Sampler::new(spec);
    let east = 2.0 * PI;

    let mut field = ScalarField::from_fn(1, height, |_, y| {
        let lat = latitude(y, height);
        (1.0 - WRAP_BLEND) * sampler.sample(lat, 0.0) + WRAP_BLEND * sampler.sample(lat, east)
    });
    field.normalize();
    field
}

/// Giant color field: primary noise domain-warped by a turbulence field
pub fn warped_color_field(
    primary: &NoiseSpec,
    turbulence: &NoiseSpec,
    magnitude: f64,
    height: usize,
) -> ScalarField {
    let primary = Sampler::new(primary);
    let turbulence = Sampler::new(turbulence);
    let width = height * 2;

    let mut field = ScalarField::from_fn(width, height, |x, y| {
        let lat = latitude(y, height);
        let lon = longitude(x, width);
        let warp = turbulence.sample(lat, lon) * magnitude;
        primary.sample(lat + warp, lon + warp)
    });
    field.normalize();
    field
}

/// Rocky surface temperatures in kelvin
///
/// The recipe's composite modulates the body's surface temperature; the
/// equator runs warm and the poles fall off with latitude.
pub fn rocky_temperature_field(
    recipe: &FieldRecipe,
    surface_temperature: f64,
    height: usize,
) -> ScalarField {
    let mut field = composite_field(recipe, height);
    field.map_in_place(|_, y, v| {
        let latitude_factor = (PI * (y as f64 + 0.5) / height as f64).sin();
        surface_temperature * (0.6 + 0.5 * latitude_factor) * (0.85 + 0.3 * v)
    });
    field
}
