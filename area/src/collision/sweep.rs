use super::types::{Aabb, SweepHit, Vec3};

/// Parameter `s` at which the line `p + s * u` crosses the plane through `v` with normal `n`.
///
/// A line parallel to the plane (`n · u == 0`) never reaches it and yields `+inf`.
#[inline]
fn line_to_plane(p: Vec3, u: Vec3, v: Vec3, n: Vec3) -> f32 {
    let n_dot_u = n.dot(&u);
    if n_dot_u == 0.0 {
        return f32::INFINITY;
    }
    n.dot(&(v - p)) / n_dot_u
}

#[inline]
fn between(x: f32, a: f32, b: f32) -> bool {
    x >= a && x <= b
}

/// One candidate face of the Minkowski-difference box.
struct Face {
    /// Axis the face is perpendicular to (0 = X, 1 = Y, 2 = Z).
    axis: usize,
    /// `true` for the max face, `false` for the min face.
    max: bool,
}

const FACES: [Face; 6] = [
    Face { axis: 0, max: false },
    Face { axis: 0, max: true },
    Face { axis: 1, max: false },
    Face { axis: 1, max: true },
    Face { axis: 2, max: false },
    Face { axis: 2, max: true },
];

/// Swept AABB test: box `a` moves along `direction`, box `b` is static.
///
/// Works on the Minkowski difference: `m = b.min - a.max`, `mh = a.size + b.size`. For each
/// axis the min face is only considered while moving toward +axis and the max face only
/// while moving toward -axis. A face counts when the crossing time `s` is in `[0, h)` and
/// the other two axes overlap at that time.
///
/// Returns the earliest hit with the face normal, or [`SweepHit::clear`] when the full motion
/// is unobstructed. Boxes that already overlap produce negative crossing times and do not
/// block.
pub fn sweep_aabb(a: &Aabb, b: &Aabb, direction: Vec3) -> SweepHit {
    let m: Vec3 = b.mins.coords - a.maxs.coords;
    let mh: Vec3 = a.extents() + b.extents();

    let mut best = SweepHit::clear();

    for face in &FACES {
        let axis = face.axis;
        let moving_toward = if face.max {
            direction[axis] < 0.0
        } else {
            direction[axis] > 0.0
        };
        if !moving_toward {
            continue;
        }

        let mut plane_point = m;
        if face.max {
            plane_point[axis] += mh[axis];
        }
        let mut normal = Vec3::zeros();
        normal[axis] = if face.max { 1.0 } else { -1.0 };

        let s = line_to_plane(Vec3::zeros(), direction, plane_point, normal);
        if !(0.0..best.fraction).contains(&s) {
            continue;
        }

        let (u, w) = ((axis + 1) % 3, (axis + 2) % 3);
        if between(s * direction[u], m[u], m[u] + mh[u])
            && between(s * direction[w], m[w], m[w] + mh[w])
        {
            best = SweepHit {
                fraction: s,
                normal,
            };
        }
    }

    best
}
