use crate::body::Body;
use crate::config::FieldConfig;
use glam::Vec2;
use rand::Rng;

/// A bounded collection of bodies for one drawing surface.
///
/// The body count is fixed at build time by [`FieldConfig::body_count`]
/// and only changes through [`Field::rebuild`], which discards every
/// existing body and re-runs the build rule against the new size. A
/// rebuild replaces the whole value in one assignment, so a running
/// update loop never observes a partially rebuilt field.
#[derive(Debug)]
pub struct Field {
    pub bodies: Vec<Body>,
    /// Width/height the bodies are bounded within. Owned by the field;
    /// updated only through [`Field::rebuild`].
    pub surface: Vec2,
}

impl Field {
    pub fn build(surface: Vec2, cfg: &FieldConfig, rng: &mut impl Rng) -> Self {
        let count = cfg.body_count(surface.x);
        let bodies = (0..count).map(|_| Body::random(surface, cfg, rng)).collect();

        Self { bodies, surface }
    }

    /// Discards all bodies and re-runs the build rule for `surface`.
    /// No body state migrates across a rebuild.
    pub fn rebuild(&mut self, surface: Vec2, cfg: &FieldConfig, rng: &mut impl Rng) {
        *self = Self::build(surface, cfg, rng);
    }
}
