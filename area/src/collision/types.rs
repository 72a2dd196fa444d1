/*!
Core collision types and math aliases shared by the collision submodules.

This module contains no algorithms. It defines the data exchanged between:
- broad:   box construction and overlap tests
- sweep:   the swept-AABB time-of-impact primitive
- resolve: the iterative player motion resolver
*/

use nalgebra as na;

/// Common math aliases for clarity and consistency.
pub type Vec3 = na::Vector3<f32>;
pub type Point3 = na::Point3<f32>;

/// Axis-aligned bounding box in world space.
pub type Aabb = rapier3d::parry::bounding_volume::Aabb;

/// Infinite ray (origin + direction). The direction does not need to be normalized.
pub type Ray = rapier3d::parry::query::Ray;

/// Earliest contact found by a swept-AABB test.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepHit {
    /// Fraction (0..1) of the motion vector at which the boxes first touch.
    /// `1.0` means the full motion is unobstructed.
    pub fraction: f32,
    /// Axis-aligned normal of the touched face, pointing back toward the mover.
    /// Zero when `fraction == 1.0`.
    pub normal: Vec3,
}

impl SweepHit {
    /// The "nothing in the way" result.
    #[inline]
    pub fn clear() -> Self {
        Self {
            fraction: 1.0,
            normal: Vec3::zeros(),
        }
    }

    #[inline]
    pub fn is_blocked(&self) -> bool {
        self.fraction < 1.0
    }
}
