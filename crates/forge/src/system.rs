//! System arena and entry points
//!
//! A [`System`] owns every body of one star system in a flat vector; ids are
//! indices into it. Construction is bottom-up and deterministic: the keyed
//! stream is rooted in the system name, so regenerating with the same name
//! reproduces the tree bit for bit.

use keystream::RandomStream;
use namegen::NameForge;

use crate::body::{Body, BodyId};
use crate::error::GenError;
use crate::generation;

/// One generated star system
#[derive(Debug, Clone)]
pub struct System {
    name: String,
    stream: RandomStream,
    names: NameForge,
    bodies: Vec<Body>,
}

impl System {
    /// Generate the full tree for a textual seed
    ///
    /// The seed is lowercased and becomes the root star's name. The literal
    /// name "the sun" produces the fixed solar reference star instead of a
    /// drawn one.
    pub fn generate(name: &str) -> Result<Self, GenError> {
        let name = name.to_lowercase();
        let stream = RandomStream::new(&name);

        let mut system = Self {
            stream,
            names: NameForge::new(),
            bodies: Vec::new(),
            name: name.clone(),
        };

        let star = generation::make_star(&system.stream, &name)?;
        tracing::info!(
            "generated star {} ({:.3e} kg, {:.0} m)",
            star.name,
            star.mass,
            star.radius
        );
        system.bodies.push(star);
        system.bodies[0].star = Some(BodyId(0));

        generation::populate(&mut system, BodyId(0), 1)?;
        Ok(system)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stream(&self) -> &RandomStream {
        &self.stream
    }

    pub(crate) fn names(&self) -> &NameForge {
        &self.names
    }

    /// The root star
    pub fn root(&self) -> BodyId {
        BodyId(0)
    }

    pub fn body(&self, id: BodyId) -> &Body {
        &self.bodies[id.0]
    }

    pub fn body_mut(&mut self, id: BodyId) -> &mut Body {
        &mut self.bodies[id.0]
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// All ids in arena (creation) order
    pub fn ids(&self) -> impl Iterator<Item = BodyId> {
        (0..self.bodies.len()).map(BodyId)
    }

    pub fn bodies(&self) -> impl Iterator<Item = (BodyId, &Body)> {
        self.bodies.iter().enumerate().map(|(i, b)| (BodyId(i), b))
    }

    pub(crate) fn push(&mut self, body: Body) -> BodyId {
        let id = BodyId(self.bodies.len());
        self.bodies.push(body);
        id
    }

    /// Distance from a prospective child of `parent` to the nearest star
    ///
    /// For a direct satellite of a star that is its own semi-major axis; for
    /// deeper bodies it is the axis of the ancestor that orbits the star.
    pub(crate) fn star_distance(&self, parent: BodyId, axis: f64) -> f64 {
        if self.body(parent).is_star() {
            return axis;
        }
        let mut current = parent;
        while let Some(up) = self.body(current).parent {
            if self.body(up).is_star() {
                if let Some(orbit) = &self.body(current).orbit {
                    return orbit.semi_major_axis;
                }
            }
            current = up;
        }
        axis
    }
}
