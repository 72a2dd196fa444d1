use rapier3d::parry::bounding_volume::BoundingVolume;

use super::{
    settings::PLAYER_HEAD_ROOM,
    types::{Aabb, Point3, Vec3},
};

/// Build an AABB spanning `origin` to `origin + size`.
///
/// Negative extents are accepted; the corners are reordered so `mins <= maxs`.
pub fn aabb_from_extent(origin: Vec3, size: Vec3) -> Aabb {
    let far = origin + size;
    Aabb::new(
        Point3::new(origin.x.min(far.x), origin.y.min(far.y), origin.z.min(far.z)),
        Point3::new(origin.x.max(far.x), origin.y.max(far.y), origin.z.max(far.z)),
    )
}

/// Smallest AABB containing every point. `None` for an empty slice.
pub fn aabb_from_points(points: &[Vec3]) -> Option<Aabb> {
    let (first, rest) = points.split_first()?;
    let mut mins = *first;
    let mut maxs = *first;
    for p in rest {
        mins = mins.inf(p);
        maxs = maxs.sup(p);
    }
    Some(Aabb::new(mins.into(), maxs.into()))
}

/// The player's movement volume at `position` (the eye).
///
/// The box is `2 * half_width` wide on X/Z, reaches `height` below the eye and
/// `PLAYER_HEAD_ROOM` above it.
pub fn player_aabb(position: Vec3, height: f32, half_width: f32) -> Aabb {
    Aabb::new(
        Point3::new(
            position.x - half_width,
            position.y - height,
            position.z - half_width,
        ),
        Point3::new(
            position.x + half_width,
            position.y + PLAYER_HEAD_ROOM,
            position.z + half_width,
        ),
    )
}

/// Closed-interval overlap test (touching faces count as overlapping).
#[inline]
pub fn aabb_overlaps(a: &Aabb, b: &Aabb) -> bool {
    a.intersects(b)
}
