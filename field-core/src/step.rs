//! Per-tick update logic for a [`Field`].
//!
//! Each body goes through the same fixed sequence once per tick:
//! 1. Position integration: `pos += vel`. Steps are unit-less and
//!    frame-rate dependent; there is no delta-time normalization.
//! 2. Boundary reflection, checked against the *already updated*
//!    position: a coordinate outside `[0, surface]` negates the
//!    matching velocity component. A body can overshoot the bound by
//!    one step before its velocity flips.
//! 3. Pointer influence, when the field config enables it and a
//!    pointer position is known: an additive velocity nudge toward
//!    the pointer with linear falloff over the influence radius.
//!
//! The pointer nudge is deliberately unbounded — no damping, no
//! velocity cap — so a body dwelling near the pointer keeps gaining
//! speed. That matches the observed behavior this simulation ports;
//! clamping it would change the motion.

use crate::config::FieldConfig;
use crate::field::Field;
use glam::Vec2;

/// Advances every body in the field by one tick.
///
/// `pointer` is the last known pointer position in surface
/// coordinates, or `None` if no pointer event has occurred yet. It is
/// ignored for fields without a [`PointerInfluence`] config.
///
/// [`PointerInfluence`]: crate::config::PointerInfluence
pub fn step(field: &mut Field, pointer: Option<Vec2>, cfg: &FieldConfig) {
    let surface = field.surface;

    for body in &mut field.bodies {
        body.pos += body.vel;

        if body.pos.x < 0.0 || body.pos.x > surface.x {
            body.vel.x = -body.vel.x;
        }
        if body.pos.y < 0.0 || body.pos.y > surface.y {
            body.vel.y = -body.vel.y;
        }

        if let (Some(influence), Some(p)) = (cfg.pointer, pointer) {
            let delta = p - body.pos;
            let dist = delta.length();
            if dist < influence.radius {
                // Linear falloff: full strength at the pointer, zero at
                // the radius. Exact overlap has no defined direction and
                // contributes nothing this tick.
                let dir = delta.normalize_or_zero();
                let force = (influence.radius - dist) / influence.radius;
                body.vel += dir * force * influence.strength;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::Body;

    fn field_with(bodies: Vec<Body>, surface: Vec2) -> Field {
        Field { bodies, surface }
    }

    fn body_at(pos: Vec2, vel: Vec2) -> Body {
        Body {
            pos,
            vel,
            radius: 1.0,
            tint: 0,
        }
    }

    #[test]
    fn integration_adds_velocity_to_position() {
        let cfg = FieldConfig::contact();
        let mut field = field_with(
            vec![body_at(Vec2::new(10.0, 20.0), Vec2::new(0.5, -0.25))],
            Vec2::new(100.0, 100.0),
        );

        step(&mut field, None, &cfg);

        assert_eq!(field.bodies[0].pos, Vec2::new(10.5, 19.75));
        assert_eq!(field.bodies[0].vel, Vec2::new(0.5, -0.25));
    }

    #[test]
    fn crossing_a_bound_negates_that_component_only() {
        let cfg = FieldConfig::contact();
        let mut field = field_with(
            vec![body_at(Vec2::new(99.75, 50.0), Vec2::new(0.5, 0.125))],
            Vec2::new(100.0, 100.0),
        );

        step(&mut field, None, &cfg);

        let b = &field.bodies[0];
        // Position overshoots for one tick; only then does vx flip.
        assert_eq!(b.pos, Vec2::new(100.25, 50.125));
        assert_eq!(b.vel, Vec2::new(-0.5, 0.125));
    }

    #[test]
    fn both_axes_reflect_independently() {
        let cfg = FieldConfig::contact();
        let mut field = field_with(
            vec![body_at(Vec2::new(0.1, 0.1), Vec2::new(-0.5, -0.5))],
            Vec2::new(100.0, 100.0),
        );

        step(&mut field, None, &cfg);

        assert_eq!(field.bodies[0].vel, Vec2::new(0.5, 0.5));
    }

    #[test]
    fn body_inside_bounds_keeps_its_velocity() {
        let cfg = FieldConfig::contact();
        let mut field = field_with(
            vec![body_at(Vec2::new(50.0, 50.0), Vec2::new(0.25, -0.25))],
            Vec2::new(100.0, 100.0),
        );

        step(&mut field, None, &cfg);

        assert_eq!(field.bodies[0].vel, Vec2::new(0.25, -0.25));
    }

    #[test]
    fn pointer_nudge_scales_linearly_with_proximity() {
        let cfg = FieldConfig::hero();
        let influence = cfg.pointer.unwrap();

        // Body 100 units left of the pointer, at rest.
        let mut field = field_with(
            vec![body_at(Vec2::new(400.0, 300.0), Vec2::ZERO)],
            Vec2::new(1000.0, 1000.0),
        );
        let pointer = Vec2::new(500.0, 300.0);

        step(&mut field, Some(pointer), &cfg);

        // Halfway into the radius: force = (200 - 100) / 200 = 0.5,
        // nudge = 0.5 * strength toward +x.
        let expected = 0.5 * influence.strength;
        let vel = field.bodies[0].vel;
        assert!((vel.x - expected).abs() < 1e-6);
        assert!(vel.y.abs() < 1e-6);
    }

    #[test]
    fn pointer_nudge_is_maximal_near_zero_distance() {
        let cfg = FieldConfig::hero();
        let influence = cfg.pointer.unwrap();

        let mut field = field_with(
            vec![body_at(Vec2::new(500.0, 300.0), Vec2::ZERO)],
            Vec2::new(1000.0, 1000.0),
        );
        // Just off the body, so the direction is defined.
        let pointer = Vec2::new(500.001, 300.0);

        step(&mut field, Some(pointer), &cfg);

        let speed = field.bodies[0].vel.length();
        assert!((speed - influence.strength).abs() < 1e-4);
    }

    #[test]
    fn pointer_outside_radius_has_no_effect() {
        let cfg = FieldConfig::hero();
        let mut field = field_with(
            vec![body_at(Vec2::new(100.0, 100.0), Vec2::new(0.1, 0.0))],
            Vec2::new(1000.0, 1000.0),
        );
        // Distance stays well past the 200 unit radius after integration.
        let pointer = Vec2::new(350.0, 100.0);

        step(&mut field, Some(pointer), &cfg);

        assert_eq!(field.bodies[0].vel, Vec2::new(0.1, 0.0));
    }

    #[test]
    fn fields_without_influence_ignore_the_pointer() {
        let cfg = FieldConfig::contact();
        let mut field = field_with(
            vec![body_at(Vec2::new(50.0, 50.0), Vec2::ZERO)],
            Vec2::new(100.0, 100.0),
        );

        step(&mut field, Some(Vec2::new(51.0, 50.0)), &cfg);

        assert_eq!(field.bodies[0].vel, Vec2::ZERO);
    }

    #[test]
    fn no_pointer_event_yet_means_no_nudge() {
        let cfg = FieldConfig::hero();
        let mut field = field_with(
            vec![body_at(Vec2::new(500.0, 300.0), Vec2::ZERO)],
            Vec2::new(1000.0, 1000.0),
        );

        step(&mut field, None, &cfg);

        assert_eq!(field.bodies[0].vel, Vec2::ZERO);
    }
}
