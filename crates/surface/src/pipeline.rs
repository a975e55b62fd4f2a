//! Per-body surface state
//!
//! A [`Surface`] holds the lazily generated field caches for one body and
//! renders its maps from them. Fields move through the states
//! not-generated → generated-at-resolution; the first map needing a field
//! triggers its generation, later maps at the same resolution reuse it, and
//! a different requested resolution regenerates from scratch.

use std::collections::HashMap;

use image::RgbaImage;

use forge::{BodyId, SurfaceRecipe, System};

use crate::fields;
use crate::grid::FieldSlot;
use crate::maps::{self, NormalEncoding, RingStyle};

/// Cached fields and map entry points for one body
#[derive(Debug, Clone)]
pub struct Surface {
    body: BodyId,
    height: FieldSlot,
    color: FieldSlot,
    temperature: FieldSlot,
}

impl Surface {
    pub fn new(body: BodyId) -> Self {
        Self {
            body,
            height: FieldSlot::new(),
            color: FieldSlot::new(),
            temperature: FieldSlot::new(),
        }
    }

    pub fn body(&self) -> BodyId {
        self.body
    }

    /// Generate whichever fields this body's recipe calls for
    fn ensure_fields(&mut self, system: &System, resolution: usize) {
        let body = system.body(self.body);
        match &body.recipe {
            SurfaceRecipe::Star(star) => {
                let ambient = body.effective_temperature;
                self.temperature.ensure(resolution, || {
                    tracing::debug!("sampling star temperature for {}", body.path);
                    fields::star_temperature_field(&star.temperature, ambient, resolution)
                });
            }
            SurfaceRecipe::Giant(giant) => {
                self.height.ensure(resolution, || {
                    tracing::debug!("sampling banding profile for {}", body.path);
                    fields::banding_profile(&giant.banding, resolution)
                });
                self.color.ensure(resolution, || {
                    fields::warped_color_field(
                        &giant.color_a,
                        &giant.color_b,
                        giant.turbulence,
                        resolution,
                    )
                });
            }
            SurfaceRecipe::Rocky(rocky) => {
                self.height
                    .ensure(resolution, || fields::composite_field(&rocky.height, resolution));
                self.color
                    .ensure(resolution, || fields::composite_field(&rocky.color, resolution));
                let surface_temperature = body.surface_temperature;
                self.temperature.ensure(resolution, || {
                    fields::rocky_temperature_field(
                        &rocky.temperature,
                        surface_temperature,
                        resolution,
                    )
                });
            }
        }
    }

    /// Render the color map at the given vertical resolution
    pub fn color_map(&mut self, system: &System, resolution: usize) -> RgbaImage {
        self.ensure_fields(system, resolution);
        let body = system.body(self.body);
        match &body.recipe {
            SurfaceRecipe::Star(_) => maps::star_color_map(
                self.temperature.get(resolution).unwrap(),
                body.effective_temperature,
            ),
            SurfaceRecipe::Giant(giant) => maps::giant_color_map(
                self.height.get(resolution).unwrap(),
                self.color.get(resolution).unwrap(),
                &giant.bands,
            ),
            SurfaceRecipe::Rocky(rocky) => maps::rocky_color_map(
                body,
                rocky,
                self.height.get(resolution).unwrap(),
                self.color.get(resolution).unwrap(),
                self.temperature.get(resolution).unwrap(),
            ),
        }
    }

    /// Grayscale height map; rocky planets only
    pub fn height_map(&mut self, system: &System, resolution: usize) -> Option<RgbaImage> {
        if !matches!(system.body(self.body).recipe, SurfaceRecipe::Rocky(_)) {
            return None;
        }
        self.ensure_fields(system, resolution);
        Some(maps::height_map(self.height.get(resolution).unwrap()))
    }

    /// Normal map from the height field; rocky planets only
    pub fn normal_map(
        &mut self,
        system: &System,
        resolution: usize,
        encoding: NormalEncoding,
    ) -> Option<RgbaImage> {
        if !matches!(system.body(self.body).recipe, SurfaceRecipe::Rocky(_)) {
            return None;
        }
        self.ensure_fields(system, resolution);
        let ocean_level = system.body(self.body).ocean().map(|o| o.level);
        Some(maps::normal_map(
            self.height.get(resolution).unwrap(),
            ocean_level,
            encoding,
        ))
    }

    /// Liquid-water specular mask; rocky planets only
    pub fn specular_map(&mut self, system: &System, resolution: usize) -> Option<RgbaImage> {
        if !matches!(system.body(self.body).recipe, SurfaceRecipe::Rocky(_)) {
            return None;
        }
        self.ensure_fields(system, resolution);
        let ocean_level = system.body(self.body).ocean().map(|o| o.level);
        Some(maps::specular_map(
            self.height.get(resolution).unwrap(),
            self.temperature.get(resolution).unwrap(),
            ocean_level,
        ))
    }

    /// Ring band strip; ringed bodies only
    pub fn ring_map(
        &self,
        system: &System,
        resolution: usize,
        style: RingStyle,
    ) -> Option<RgbaImage> {
        system
            .body(self.body)
            .ring
            .as_ref()
            .map(|ring| maps::ring_map(ring, resolution, style))
    }

    /// Re-derive the body's albedo by measuring its rendered color map
    ///
    /// The stored albedo becomes an output of the rendering pass rather than
    /// the drawn input parameter.
    pub fn refine_albedo(&mut self, system: &mut System, resolution: usize) -> f64 {
        let image = self.color_map(system, resolution);
        let albedo = maps::measure_albedo(&image, system.body(self.body).atmosphere());
        system.body_mut(self.body).albedo = albedo;
        tracing::debug!(
            "measured albedo {:.3} for {}",
            albedo,
            system.body(self.body).path
        );
        albedo
    }
}

/// Per-body surface cache for a whole system
#[derive(Debug, Clone, Default)]
pub struct Atlas {
    surfaces: HashMap<BodyId, Surface>,
}

impl Atlas {
    pub fn new() -> Self {
        Self::default()
    }

    /// The surface state for a body, created on first use
    pub fn surface(&mut self, body: BodyId) -> &mut Surface {
        self.surfaces.entry(body).or_insert_with(|| Surface::new(body))
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }
}
