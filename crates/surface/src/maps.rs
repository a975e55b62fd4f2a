//! Map rendering
//!
//! Pure functions from cached fields to RGBA pixel buffers, plus the albedo
//! measurement pass over a rendered color buffer and the image sink wrapper.

use std::f64::consts::PI;
use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};

use astro::FREEZING_POINT;
use chroma::{Color, ColorScale};
use forge::{Atmosphere, Body, BodyKind, Ring, RockyRecipe};
use noisefield::Sampler;

use crate::error::SurfaceError;
use crate::grid::ScalarField;

/// Gradient amplification applied before building normals
const NORMAL_STRENGTH: f64 = 8.0;

/// Sampling stride of the albedo measurement pass
const ALBEDO_STRIDE: usize = 10;

/// How a normal map packs its vectors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalEncoding {
    /// Unit normal in RGB, the usual tangent-space picture
    Direct,
    /// Tangent components in RG, raw height in B
    Packed,
}

/// How a ring band is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingStyle {
    /// Ring color with the band density in the alpha channel
    Opacity,
    /// Opaque black-to-ring-color gradient
    Gradient,
}

fn put(image: &mut RgbaImage, x: usize, y: usize, color: Color, alpha: u8) {
    image.put_pixel(x as u32, y as u32, Rgba([color.r, color.g, color.b, alpha]));
}

/// Latitude weighting `sin(π·y/height)`, zero at the poles
fn pole_weight(y: usize, height: usize) -> f64 {
    (PI * (y as f64 + 0.5) / height as f64).sin()
}

// =============================================================================
// Color maps
// =============================================================================

/// Star color: blackbody hue of each sampled temperature, darkened by its
/// ratio against the ambient temperature
pub fn star_color_map(temperature: &ScalarField, ambient: f64) -> RgbaImage {
    let mut image = RgbaImage::new(temperature.width() as u32, temperature.height() as u32);
    for y in 0..temperature.height() {
        for x in 0..temperature.width() {
            let sampled = temperature.get(x, y);
            let color = Color::from_temperature(sampled).scaled(sampled / ambient);
            put(&mut image, x, y, color, 255);
        }
    }
    image
}

/// Giant color: the normalized color value indexes the banding profile, the
/// banded value takes over toward the equator, and the band scale colors the
/// result
pub fn giant_color_map(
    profile: &ScalarField,
    color: &ScalarField,
    bands: &ColorScale,
) -> RgbaImage {
    let height = color.height();
    let mut image = RgbaImage::new(color.width() as u32, height as u32);
    for y in 0..height {
        let weight = pole_weight(y, height).powi(3);
        for x in 0..color.width() {
            let v = color.get(x, y);
            let row = ((v * (profile.height() - 1) as f64).round() as usize)
                .min(profile.height() - 1);
            let banded = profile.get(0, row);
            let value = v * (1.0 - weight) + banded * weight;
            put(&mut image, x, y, bands.color(value), 255);
        }
    }
    image
}

/// Rocky color: terrain scale indexed by the color field, with ocean fill,
/// vegetation blend and ice override
pub fn rocky_color_map(
    body: &Body,
    recipe: &RockyRecipe,
    height_field: &ScalarField,
    color_field: &ScalarField,
    temperature_field: &ScalarField,
) -> RgbaImage {
    let BodyKind::RockyPlanet {
        atmosphere,
        ocean,
        ice_factor,
        ice_color,
        ..
    } = &body.kind
    else {
        unreachable!("rocky recipe only attaches to rocky planets");
    };
    let ice_threshold = FREEZING_POINT * ice_factor;
    let rows = color_field.height();

    let mut image = RgbaImage::new(color_field.width() as u32, rows as u32);
    for y in 0..rows {
        for x in 0..color_field.width() {
            let elevation = height_field.get(x, y);
            let temperature = temperature_field.get(x, y);

            let mut color = match ocean {
                Some(o) if elevation < o.level => o.color,
                _ => {
                    let mut land = recipe.terrain.color(color_field.get(x, y));
                    if let Some(life) = &recipe.life {
                        let closeness = (-(temperature - life.comfort_mean).powi(2)
                            / (2.0 * life.comfort_spread.powi(2)))
                        .exp();
                        let weight = closeness * pole_weight(y, rows).powf(life.pole_exponent);
                        land = land.lerp(life.vegetation.color(color_field.get(x, y)), weight);
                    }
                    land
                }
            };

            if atmosphere.is_some() && temperature < ice_threshold {
                color = *ice_color;
            }

            put(&mut image, x, y, color, 255);
        }
    }
    image
}

// =============================================================================
// Derived maps
// =============================================================================

/// Grayscale render of a normalized height field
pub fn height_map(field: &ScalarField) -> RgbaImage {
    let mut image = RgbaImage::new(field.width() as u32, field.height() as u32);
    for y in 0..field.height() {
        for x in 0..field.width() {
            let level = (field.get(x, y).clamp(0.0, 1.0) * 255.0).round() as u8;
            put(&mut image, x, y, Color::new(level, level, level), 255);
        }
    }
    image
}

/// Tangent-space normals from the height field's finite differences
///
/// Heights are clamped to the ocean level so the sea renders flat, and the
/// gradient is tapered toward the poles where equirectangular columns
/// converge.
pub fn normal_map(
    field: &ScalarField,
    ocean_level: Option<f64>,
    encoding: NormalEncoding,
) -> RgbaImage {
    let width = field.width();
    let height = field.height();
    let floor = ocean_level.unwrap_or(f64::NEG_INFINITY);
    let at = |x: i64, y: i64| {
        let x = x.rem_euclid(width as i64) as usize;
        let y = y.clamp(0, height as i64 - 1) as usize;
        field.get(x, y).max(floor)
    };

    let mut image = RgbaImage::new(width as u32, height as u32);
    for y in 0..height {
        let taper = pole_weight(y, height);
        for x in 0..width {
            let (xi, yi) = (x as i64, y as i64);
            let sx = (at(xi + 1, yi) - at(xi - 1, yi)) * NORMAL_STRENGTH * taper;
            let sy = (at(xi, yi + 1) - at(xi, yi - 1)) * NORMAL_STRENGTH * taper;

            // Cross product of the two tangents (2, 0, sx) × (0, 2, sy)
            let (nx, ny, nz) = (-2.0 * sx, -2.0 * sy, 4.0);
            let length = (nx * nx + ny * ny + nz * nz).sqrt();
            let (nx, ny, nz) = (nx / length, ny / length, nz / length);

            let channel = |n: f64| ((n + 1.0) / 2.0 * 255.0).round() as u8;
            let color = match encoding {
                NormalEncoding::Direct => Color::new(channel(nx), channel(ny), channel(nz)),
                NormalEncoding::Packed => Color::new(
                    channel(nx),
                    channel(ny),
                    (field.get(x, y).clamp(0.0, 1.0) * 255.0).round() as u8,
                ),
            };
            put(&mut image, x, y, color, 255);
        }
    }
    image
}

/// Binary mask of liquid water: below the ocean level and above freezing
pub fn specular_map(
    height_field: &ScalarField,
    temperature_field: &ScalarField,
    ocean_level: Option<f64>,
) -> RgbaImage {
    let mut image = RgbaImage::new(height_field.width() as u32, height_field.height() as u32);
    for y in 0..height_field.height() {
        for x in 0..height_field.width() {
            let shiny = match ocean_level {
                Some(level) => {
                    height_field.get(x, y) < level
                        && temperature_field.get(x, y) > FREEZING_POINT
                }
                None => false,
            };
            let color = if shiny { Color::WHITE } else { Color::BLACK };
            put(&mut image, x, y, color, 255);
        }
    }
    image
}

/// Radial ring band from its 1-D composite noise
pub fn ring_map(ring: &Ring, resolution: usize, style: RingStyle) -> RgbaImage {
    let sampler = Sampler::new(&ring.band);

    let mut strip = ScalarField::from_fn(resolution, 1, |x, _| {
        let angle = 2.0 * PI * (x as f64 + 0.5) / resolution as f64;
        sampler.sample(0.0, angle)
    });
    strip.normalize();

    let mut image = RgbaImage::new(resolution as u32, 1);
    for x in 0..resolution {
        let density = strip.get(x, 0);
        match style {
            RingStyle::Opacity => put(
                &mut image,
                x,
                0,
                ring.color,
                (density * 255.0).round() as u8,
            ),
            RingStyle::Gradient => put(
                &mut image,
                x,
                0,
                Color::BLACK.lerp(ring.color, density),
                255,
            ),
        }
    }
    image
}

// =============================================================================
// Albedo measurement
// =============================================================================

/// Measure albedo from a rendered color buffer
///
/// Samples every tenth pixel along both axes, blends each sample toward the
/// atmosphere color by the atmosphere's opacity, and squares the mean
/// luminance.
pub fn measure_albedo(image: &RgbaImage, atmosphere: Option<&Atmosphere>) -> f64 {
    let mut total = 0.0;
    let mut count = 0usize;
    for y in (0..image.height() as usize).step_by(ALBEDO_STRIDE) {
        for x in (0..image.width() as usize).step_by(ALBEDO_STRIDE) {
            let pixel = image.get_pixel(x as u32, y as u32);
            let mut color = Color::new(pixel[0], pixel[1], pixel[2]);
            if let Some(atm) = atmosphere {
                color = color.lerp(atm.color, atm.opacity);
            }
            total += color.luminance();
            count += 1;
        }
    }
    if count == 0 {
        return 0.0;
    }
    (total / count as f64).powi(2)
}

// =============================================================================
// Image sink
// =============================================================================

/// Write a map to disk; format follows the path's extension
pub fn write_map(path: &Path, image: &RgbaImage) -> Result<PathBuf, SurfaceError> {
    image
        .save(path)
        .map_err(|source| SurfaceError::ResourceUnavailable {
            path: path.display().to_string(),
            source,
        })?;
    tracing::debug!("wrote {}x{} map to {}", image.width(), image.height(), path.display());
    Ok(path.to_path_buf())
}
