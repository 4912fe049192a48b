/// Pointer proximity influence parameters (see [`crate::step`]).
#[derive(Clone, Copy, Debug)]
pub struct PointerInfluence {
    /// Influence radius around the pointer, in surface units.
    pub radius: f32,
    /// Scale applied to the falloff-weighted velocity nudge.
    pub strength: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct FieldConfig {
    pub count_wide: usize,
    pub count_narrow: usize,
    /// Surfaces narrower than this use `count_narrow` bodies.
    pub narrow_below: f32,
    /// Half-range of the initial velocity components.
    pub speed: f32,
    pub radius_min: f32,
    pub radius_max: f32,
    /// Number of tints bodies are drawn from.
    pub palette_size: u8,
    /// Maximum distance at which a connecting line is drawn.
    pub link_radius: f32,
    pub pointer: Option<PointerInfluence>,
}

impl FieldConfig {
    /// Ambient hero background: density adapts to surface width,
    /// bodies react to the pointer.
    pub fn hero() -> Self {
        Self {
            count_wide: 80,
            count_narrow: 40,
            narrow_below: 768.0,
            speed: 0.15,
            radius_min: 0.5,
            radius_max: 2.5,
            palette_size: 2,
            link_radius: 120.0,
            pointer: Some(PointerInfluence {
                radius: 200.0,
                strength: 0.5,
            }),
        }
    }

    /// Contact node network: fixed density, no pointer reaction.
    pub fn contact() -> Self {
        Self {
            count_wide: 30,
            count_narrow: 30,
            narrow_below: 0.0,
            speed: 0.25,
            radius_min: 1.0,
            radius_max: 3.0,
            palette_size: 1,
            link_radius: 100.0,
            pointer: None,
        }
    }

    /// Body count for a surface of the given width.
    pub fn body_count(&self, width: f32) -> usize {
        if width < self.narrow_below {
            self.count_narrow
        } else {
            self.count_wide
        }
    }
}
