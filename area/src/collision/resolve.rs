use super::{
    broad::player_aabb,
    settings::CollisionSettings,
    sweep::sweep_aabb,
    types::{Aabb, SweepHit, Vec3},
};
use crate::error::ResolveError;

/// Parameters for a single player motion correction.
#[derive(Clone, Copy, Debug)]
pub struct ResolveRequest {
    /// Last known (valid) eye position of the player.
    pub last_pos: Vec3,
    /// Position the player wants to reach this tick.
    pub desired_pos: Vec3,
    /// Distance from the eye down to the feet.
    pub player_height: f32,
    pub settings: CollisionSettings,
}

/// Earliest obstruction of `player` moving along `motion` over every box in `solids`.
pub fn first_hit<'a>(
    player: &Aabb,
    motion: Vec3,
    solids: impl IntoIterator<Item = &'a Aabb>,
) -> SweepHit {
    let mut best = SweepHit::clear();
    for solid in solids {
        let hit = sweep_aabb(player, solid, motion);
        if hit.fraction < best.fraction {
            best = hit;
        }
    }
    best
}

/// Swept-AABB motion correction for the player volume.
///
/// Algorithm:
/// - Build the player box once at `last_pos`.
/// - Sweep it along `target - last_pos` against every solid and keep the earliest hit `h`.
/// - Move the target to `last_pos + h * motion + skin * normal`.
/// - Stop once a sweep is unobstructed (`h >= 1`); the target is then the answer.
///
/// Each obstructed sweep shortens the motion, so against well-formed geometry the loop ends
/// after a couple of passes. More than `max_iterations` obstructed sweeps is reported as
/// [`ResolveError::IterationOverrun`].
pub fn resolve_motion<'a, I>(req: ResolveRequest, solids: I) -> Result<Vec3, ResolveError>
where
    I: IntoIterator<Item = &'a Aabb>,
    I::IntoIter: Clone,
{
    let solids = solids.into_iter();
    let player = player_aabb(req.last_pos, req.player_height, req.settings.player_half_width);

    let mut target = req.desired_pos;
    let mut iterations = 0u32;
    loop {
        let motion = target - req.last_pos;
        let hit = first_hit(&player, motion, solids.clone());

        target = req.last_pos + motion * hit.fraction + hit.normal * req.settings.skin;
        if !hit.is_blocked() {
            return Ok(target);
        }

        iterations += 1;
        if iterations > req.settings.max_iterations {
            log::warn!(
                "collision resolution from {:?} toward {:?} did not settle after {} sweeps",
                req.last_pos,
                req.desired_pos,
                iterations
            );
            return Err(ResolveError::IterationOverrun {
                iterations: req.settings.max_iterations,
            });
        }
    }
}
