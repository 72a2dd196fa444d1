//! Spatial queries over an area's drawable objects.
//!
//! All queries are linear scans in draw order and only consider objects that are neither
//! destroyed nor invisible.

use rapier3d::parry::query::RayCast;

use crate::{
    Area, Object,
    collision::{
        broad::aabb_from_extent,
        types::{Aabb, Ray, Vec3},
    },
    constants::{RAY_SIZE_CUTOFF, SIGHT_FIRST_SLICE, SIGHT_PROBE_DIVISOR, SIGHT_SLICES},
};

impl Area {
    /// Object hit by `ray`, preferring the smallest target.
    ///
    /// Among all pierced boxes the object with the shortest size vector wins; on equal size
    /// the one met first in draw order is kept. Small props (switches, sensors) therefore win
    /// over the wall they sit on.
    pub fn shoot_ray(&self, ray: &Ray) -> Option<&Object> {
        let mut best: Option<(&Object, f32)> = None;
        for obj in self.drawables() {
            if !obj.is_active() {
                continue;
            }
            let Some(aabb) = obj.bounding_box() else {
                continue;
            };
            let size = obj.extent_length();
            let wins = match best {
                None => size <= RAY_SIZE_CUTOFF,
                Some((_, best_size)) => size < best_size,
            };
            if wins && aabb.intersects_local_ray(ray, f32::MAX) {
                log::debug!("shot obj id: {}", obj.id());
                best = Some((obj, size));
            }
        }
        best.map(|(obj, _)| obj)
    }

    /// Every visible object whose box overlaps `aabb`, in draw order.
    pub fn check_collisions(&self, aabb: &Aabb) -> Vec<&Object> {
        self.drawables()
            .filter(|obj| obj.is_active() && obj.collides(aabb))
            .collect()
    }

    /// Coarse line-of-sight test along `ray` up to `max_distance`.
    ///
    /// A cube of edge `max_distance / 30` is placed at 20%, 30%, ... 100% of the distance.
    /// Sight is blocked as soon as any non-sensor visible box overlaps one of those cubes.
    pub fn check_in_sight(&self, ray: &Ray, max_distance: f32) -> bool {
        let direction = ray.dir.try_normalize(0.0).unwrap_or_else(Vec3::zeros);
        let edge = Vec3::repeat(max_distance / SIGHT_PROBE_DIVISOR);
        let step = max_distance / SIGHT_SLICES as f32;

        for slice in SIGHT_FIRST_SLICE..=SIGHT_SLICES {
            let origin = ray.origin.coords + direction * (slice as f32 * step);
            let probe = aabb_from_extent(origin, edge);
            let blocked = self
                .drawables()
                .any(|obj| !obj.is_sensor() && obj.is_active() && obj.collides(&probe));
            if blocked {
                return false;
            }
        }
        true
    }
}
