/*!
Collision root module.

Axis-aligned boxes only: every solid is reduced to its world-space AABB and the player is a
box hanging below the eye position. The code is split for clarity:

- types:    shared data types (Aabb, Ray, SweepHit) and math aliases
- settings: resolver constants and tunables
- broad:    box construction and overlap tests
- sweep:    swept-AABB time-of-impact against a single static box
- resolve:  iterative player motion correction
*/

pub mod broad;
pub mod resolve;
pub mod settings;
pub mod sweep;
pub mod types;

// Re-export commonly used types and functions.
pub use broad::{aabb_from_extent, aabb_overlaps, player_aabb};
pub use resolve::{ResolveRequest, resolve_motion};
pub use settings::CollisionSettings;
pub use sweep::sweep_aabb;
pub use types::{Aabb, Point3, Ray, SweepHit, Vec3};
