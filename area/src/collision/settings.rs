/*!
Collision resolver settings and tolerances.

These constants centralize the parameters used by the swept-AABB resolver. Distances are
in level world units.
*/

/// Separation pushed along the hit normal after every obstructed sweep.
/// Keeps the next sweep from starting on the face it just touched.
pub const DEFAULT_SKIN: f32 = 1.5;

/// Maximum number of obstructed sweeps before resolution is reported as an overrun.
pub const DEFAULT_MAX_ITERATIONS: u32 = 5;

/// Half of the player's box width on the X and Z axes.
pub const PLAYER_HALF_WIDTH: f32 = 1.0;

/// How far the player's box reaches above the eye position.
pub const PLAYER_HEAD_ROOM: f32 = 1.0;

/// Tunables for [`resolve_motion`](super::resolve::resolve_motion).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollisionSettings {
    pub skin: f32,
    pub max_iterations: u32,
    pub player_half_width: f32,
}

impl Default for CollisionSettings {
    fn default() -> Self {
        Self {
            skin: DEFAULT_SKIN,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            player_half_width: PLAYER_HALF_WIDTH,
        }
    }
}
