use crate::ObjectId;

/// Entrance id reserved for an area's structural template.
///
/// When present, the entrance stored under this id is a `GlobalStructure` listing the
/// global-area object ids that make up the area's static structure.
pub const STRUCTURE_ENTRANCE_ID: ObjectId = 255;

/// Object id used for the synthetic floor when an area has no structural template.
pub const FLOOR_OBJECT_ID: ObjectId = 0;

/// Minimum corner of the synthetic floor (world units).
pub const FLOOR_ORIGIN: [f32; 3] = [-4128.0, -1.0, -4128.0];

/// Extent of the synthetic floor (world units). One unit thick, top face at y = 0.
pub const FLOOR_SIZE: [f32; 3] = [4128.0 * 4.0, 1.0, 4128.0 * 4.0];

/// Number of faces coloured on a cube-like primitive.
pub const CUBE_FACES: usize = 6;

/// Colour index meaning "unset" for every area colour attribute.
pub const UNSET_COLOR: u8 = 255;

/// Initial size cutoff for ray casts.
///
/// Any object whose extent length is below this can win a ray cast.
pub const RAY_SIZE_CUTOFF: f32 = 16.0 * 8192.0;

/// Number of equal slices the sight probe divides `max_distance` into.
pub const SIGHT_SLICES: u32 = 10;

/// First slice sampled by the sight probe (2 / 10 = 20% of the distance).
pub const SIGHT_FIRST_SLICE: u32 = 2;

/// The probe cube edge is `max_distance / SIGHT_PROBE_DIVISOR`.
pub const SIGHT_PROBE_DIVISOR: f32 = 30.0;

/// Global ticks per group animation frame.
pub const TICKS_PER_GROUP_FRAME: u32 = 10;
