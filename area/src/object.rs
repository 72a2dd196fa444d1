//! Objects stored in an area.
//!
//! The set of kinds is fixed by the level format, so it is a closed enum rather than a trait
//! object. Geometry (origin, size, ordinates) is set when the object is built or duplicated;
//! flags and origin change at runtime and keep the cached bounding box in sync.

use crate::{
    bitmask_flags::{ObjectFlag, ObjectFlags},
    collision::{
        broad::{aabb_from_extent, aabb_from_points, aabb_overlaps},
        types::{Aabb, Vec3},
    },
    constants::TICKS_PER_GROUP_FRAME,
};

/// Identifier of an object inside one area's objects or entrances map.
pub type ObjectId = u16;

/// Direction a pyramid's apex points to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PyramidAxis {
    East,
    West,
    Up,
    Down,
    North,
    South,
}

/// One sub-object of a group, positioned relative to the group origin.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupMember {
    pub offset: Vec3,
    pub object: Object,
}

/// Sub-objects of a group plus the per-frame offsets of its keyframe animation.
///
/// A group with no frames behaves as a single zero-offset frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GroupFrames {
    pub members: Vec<GroupMember>,
    pub frames: Vec<Vec3>,
}

impl GroupFrames {
    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frames.len().max(1)
    }

    /// Frame shown at global tick `ticks`.
    #[inline]
    pub fn frame_at_tick(&self, ticks: u32) -> usize {
        (ticks / TICKS_PER_GROUP_FRAME) as usize % self.frame_count()
    }

    /// Place every member for `frame`: `group_origin + member.offset + frames[frame]`.
    pub fn assemble(&mut self, group_origin: Vec3, frame: usize) {
        let frame_offset = self.frames.get(frame).copied().unwrap_or_else(Vec3::zeros);
        for member in &mut self.members {
            member
                .object
                .set_origin(group_origin + member.offset + frame_offset);
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ObjectKind {
    /// Spawn point. `rotation` holds pitch/yaw/roll in degrees.
    Entrance { rotation: Vec3 },
    Cube,
    Rectangle,
    Pyramid { axis: PyramidAxis },
    /// Line, triangle, quadrilateral, pentagon or hexagon given by world-space vertices.
    Polygon { ordinates: Vec<Vec3> },
    Sensor { range: f32 },
    Group(GroupFrames),
    /// Ordered global-area object ids composing an area's static structure. Zero entries are
    /// placeholders.
    GlobalStructure { structure: Vec<ObjectId> },
}

impl ObjectKind {
    pub fn name(&self) -> &'static str {
        match self {
            ObjectKind::Entrance { .. } => "entrance",
            ObjectKind::Cube => "cube",
            ObjectKind::Rectangle => "rectangle",
            ObjectKind::Pyramid { .. } => "pyramid",
            ObjectKind::Polygon { .. } => "polygon",
            ObjectKind::Sensor { .. } => "sensor",
            ObjectKind::Group(_) => "group",
            ObjectKind::GlobalStructure { .. } => "global structure",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Object {
    id: ObjectId,
    kind: ObjectKind,
    origin: Vec3,
    size: Vec3,
    flags: ObjectFlags,
    /// Per-face palette indices, passed through to the renderer untouched.
    colours: Vec<u8>,
    bounding_box: Option<Aabb>,
}

impl Object {
    pub fn new(id: ObjectId, kind: ObjectKind, origin: Vec3, size: Vec3, flags: u32) -> Self {
        let mut obj = Self {
            id,
            kind,
            origin,
            size,
            flags: ObjectFlags::new(flags),
            colours: Vec::new(),
            bounding_box: None,
        };
        if let ObjectKind::Group(group) = &mut obj.kind {
            group.assemble(origin, 0);
        }
        obj.bounding_box = obj.compute_bounding_box();
        obj
    }

    pub fn with_colours(mut self, colours: Vec<u8>) -> Self {
        self.colours = colours;
        self
    }

    #[inline]
    pub fn id(&self) -> ObjectId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> &ObjectKind {
        &self.kind
    }

    pub(crate) fn group_mut(&mut self) -> Option<&mut GroupFrames> {
        match &mut self.kind {
            ObjectKind::Group(group) => Some(group),
            _ => None,
        }
    }

    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    #[inline]
    pub fn size(&self) -> Vec3 {
        self.size
    }

    #[inline]
    pub fn colours(&self) -> &[u8] {
        &self.colours
    }

    /// Raw flag bits, including bits no [`ObjectFlag`] names.
    #[inline]
    pub fn flags(&self) -> u32 {
        self.flags.bits
    }

    #[inline]
    pub fn set_flags(&mut self, bits: u32) {
        self.flags = ObjectFlags::new(bits);
    }

    /// World-space box, present only for drawable objects with some extent.
    #[inline]
    pub fn bounding_box(&self) -> Option<&Aabb> {
        self.bounding_box.as_ref()
    }

    /// Length of the size vector; ray casts prefer the smallest.
    #[inline]
    pub fn extent_length(&self) -> f32 {
        self.size.norm()
    }

    pub fn is_drawable(&self) -> bool {
        !matches!(
            self.kind,
            ObjectKind::Entrance { .. } | ObjectKind::GlobalStructure { .. }
        )
    }

    /// Planar objects are drawn after solid ones.
    pub fn is_planar(&self) -> bool {
        match self.kind {
            ObjectKind::Rectangle | ObjectKind::Polygon { .. } | ObjectKind::Sensor { .. } => true,
            ObjectKind::Cube | ObjectKind::Pyramid { .. } => {
                self.size.x == 0.0 || self.size.y == 0.0 || self.size.z == 0.0
            }
            _ => false,
        }
    }

    #[inline]
    pub fn is_sensor(&self) -> bool {
        matches!(self.kind, ObjectKind::Sensor { .. })
    }

    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.flags.has(ObjectFlag::Destroyed)
    }

    pub fn destroy(&mut self) {
        self.flags.add(ObjectFlag::Destroyed);
    }

    pub fn restore(&mut self) {
        self.flags.remove(ObjectFlag::Destroyed);
    }

    #[inline]
    pub fn is_invisible(&self) -> bool {
        self.flags.has(ObjectFlag::Invisible)
    }

    pub fn make_invisible(&mut self) {
        self.flags.add(ObjectFlag::Invisible);
    }

    pub fn make_visible(&mut self) {
        self.flags.remove(ObjectFlag::Invisible);
    }

    #[inline]
    pub fn is_initially_invisible(&self) -> bool {
        self.flags.has(ObjectFlag::InitiallyInvisible)
    }

    /// Visible and not destroyed.
    #[inline]
    pub fn is_active(&self) -> bool {
        !self
            .flags
            .has_any(&[ObjectFlag::Destroyed, ObjectFlag::Invisible])
    }

    /// Back to the level's initial state: not destroyed, hidden only if initially invisible.
    pub fn reset(&mut self) {
        let hidden = self.is_initially_invisible();
        self.flags.remove(ObjectFlag::Destroyed);
        self.flags.set(ObjectFlag::Invisible, hidden);
    }

    /// Move the object. Polygon vertices and group members follow the origin.
    pub fn set_origin(&mut self, origin: Vec3) {
        let delta = origin - self.origin;
        self.origin = origin;
        match &mut self.kind {
            ObjectKind::Polygon { ordinates } => {
                for p in ordinates.iter_mut() {
                    *p += delta;
                }
            }
            ObjectKind::Group(group) => group.assemble(origin, 0),
            _ => {}
        }
        self.bounding_box = self.compute_bounding_box();
    }

    /// Convert level units to area units by dividing all geometry by `factor`.
    ///
    /// Factors 0 and 1 leave the object unchanged.
    pub fn scale(&mut self, factor: u8) {
        if factor <= 1 {
            return;
        }
        let f = f32::from(factor);
        self.origin /= f;
        self.size /= f;
        match &mut self.kind {
            ObjectKind::Polygon { ordinates } => {
                for p in ordinates.iter_mut() {
                    *p /= f;
                }
            }
            ObjectKind::Group(group) => {
                for member in &mut group.members {
                    member.offset /= f;
                    member.object.scale(factor);
                }
                for frame in &mut group.frames {
                    *frame /= f;
                }
                group.assemble(self.origin, 0);
            }
            _ => {}
        }
        self.bounding_box = self.compute_bounding_box();
    }

    /// Independent value copy. Ownership is decided by whoever stores it.
    #[inline]
    pub fn duplicate(&self) -> Object {
        self.clone()
    }

    /// Whether this object's bounding box overlaps `aabb`.
    pub fn collides(&self, aabb: &Aabb) -> bool {
        self.bounding_box
            .as_ref()
            .is_some_and(|own| aabb_overlaps(own, aabb))
    }

    fn compute_bounding_box(&self) -> Option<Aabb> {
        match &self.kind {
            ObjectKind::Entrance { .. }
            | ObjectKind::GlobalStructure { .. }
            | ObjectKind::Group(_) => None,
            ObjectKind::Polygon { ordinates } if !ordinates.is_empty() => {
                aabb_from_points(ordinates)
            }
            _ if self.size == Vec3::zeros() => None,
            _ => Some(aabb_from_extent(self.origin, self.size)),
        }
    }
}
