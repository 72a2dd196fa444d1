pub mod area;
pub mod bitmask_flags;
pub mod collision;
pub mod constants;
pub mod draw_order;
pub mod error;
pub mod object;
pub mod owner;
pub mod persist;
pub mod query;
pub mod render;
pub mod store;

#[cfg(test)]
mod test_support;

pub use area::{Area, AreaDef, AreaSettings};
pub use bitmask_flags::{ObjectFlag, ObjectFlags};
pub use collision::{Aabb, CollisionSettings, Ray, Vec3};
pub use constants::{FLOOR_OBJECT_ID, STRUCTURE_ENTRANCE_ID};
pub use draw_order::DrawOrder;
pub use error::{AreaError, ResolveError};
pub use object::{GroupFrames, GroupMember, Object, ObjectId, ObjectKind, PyramidAxis};
pub use owner::Owner;
pub use render::{DrawLog, Renderer};
