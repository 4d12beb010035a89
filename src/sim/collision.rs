//! Collision volumes and intersection tests
//!
//! The player carries two hit spheres (head and body) at fixed offsets from
//! the model origin; each obstacle carries a capsule. A frame is terminal as
//! soon as any sphere/capsule pair overlaps. Every test here is a pure
//! predicate; the caller decides the consequence.

use glam::Vec3;

use crate::consts;

/// Sphere hit volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

/// Capsule hit volume: the segment from `a` to `b` swept by `radius`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Capsule {
    pub a: Vec3,
    pub b: Vec3,
    pub radius: f32,
}

impl Capsule {
    pub fn new(a: Vec3, b: Vec3, radius: f32) -> Self {
        Self { a, b, radius }
    }

    /// The same capsule shifted along the scroll axis.
    pub fn offset_scroll(&self, delta: f32) -> Self {
        let shift = Vec3::new(0.0, delta, 0.0);
        Self {
            a: self.a + shift,
            b: self.b + shift,
            radius: self.radius,
        }
    }
}

/// The player's hit spheres for a given vertical position.
pub fn player_volumes(height: f32) -> [Sphere; 2] {
    let origin = Vec3::new(consts::PLAYER_ORIGIN_X, consts::PLAYER_ORIGIN_Y, height);
    [
        Sphere {
            center: origin + consts::HEAD_OFFSET,
            radius: consts::HEAD_RADIUS,
        },
        Sphere {
            center: origin + consts::BODY_OFFSET,
            radius: consts::BODY_RADIUS,
        },
    ]
}

/// Closest point to `p` on the segment `a`..`b`.
fn closest_point_on_segment(a: Vec3, b: Vec3, p: Vec3) -> Vec3 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq < 1e-6 {
        return a; // Degenerate segment
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    a + ab * t
}

/// Whether a sphere and a capsule overlap.
pub fn sphere_capsule_overlap(sphere: &Sphere, capsule: &Capsule) -> bool {
    let closest = closest_point_on_segment(capsule.a, capsule.b, sphere.center);
    let reach = sphere.radius + capsule.radius;
    sphere.center.distance_squared(closest) <= reach * reach
}

/// Test every player volume against every obstacle volume, stopping at the
/// first overlapping pair. Obstacle count is bounded by the segment ring, so
/// the quadratic sweep stays cheap without spatial indexing.
pub fn hits_any(spheres: &[Sphere], mut obstacles: impl Iterator<Item = Capsule>) -> bool {
    obstacles.any(|capsule| {
        spheres
            .iter()
            .any(|sphere| sphere_capsule_overlap(sphere, &capsule))
    })
}
