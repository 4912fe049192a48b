use crate::config::FieldConfig;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Palette index, fixed at creation. The viewer maps it to a color.
    pub tint: u8,
}

impl Body {
    /// Creates a body at a uniformly random position inside `surface`,
    /// with velocity, radius, and tint drawn per the field config.
    pub fn random(surface: Vec2, cfg: &FieldConfig, rng: &mut impl Rng) -> Self {
        let pos = Vec2::new(
            rng.random_range(0.0..=surface.x),
            rng.random_range(0.0..=surface.y),
        );
        let vel = Vec2::new(
            rng.random_range(-cfg.speed..=cfg.speed),
            rng.random_range(-cfg.speed..=cfg.speed),
        );
        let radius = rng.random_range(cfg.radius_min..=cfg.radius_max);
        let tint = rng.random_range(0..cfg.palette_size);

        Self {
            pos,
            vel,
            radius,
            tint,
        }
    }
}
