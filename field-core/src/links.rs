use crate::body::Body;
use crate::types::BodyId;

/// A connecting line between two nearby bodies.
///
/// `alpha` fades linearly from `1.0` at zero distance to `0.0` at the
/// link radius.
#[derive(Clone, Copy, Debug)]
pub struct Link {
    pub a: BodyId,
    pub b: BodyId,
    pub alpha: f32,
}

/// Collects every unordered body pair closer than `radius`.
///
/// Pairs are enumerated with `a < b`, so each link appears once. The
/// scan is O(n²); with at most 80 bodies per field that is cheap
/// enough per frame to skip any spatial index.
pub fn collect_links(bodies: &[Body], radius: f32) -> Vec<Link> {
    let mut links = Vec::new();

    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let dist = bodies[i].pos.distance(bodies[j].pos);
            if dist < radius {
                links.push(Link {
                    a: i,
                    b: j,
                    alpha: 1.0 - dist / radius,
                });
            }
        }
    }

    links
}
