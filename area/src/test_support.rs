//! Object builders shared by the unit tests.

use crate::{Object, ObjectId, ObjectKind, collision::types::Vec3};

pub fn cube(id: ObjectId, origin: [f32; 3], size: [f32; 3]) -> Object {
    Object::new(id, ObjectKind::Cube, origin.into(), size.into(), 0)
}

pub fn entrance(id: ObjectId) -> Object {
    Object::new(
        id,
        ObjectKind::Entrance {
            rotation: Vec3::zeros(),
        },
        Vec3::zeros(),
        Vec3::zeros(),
        0,
    )
}

pub fn structure(id: ObjectId, structure: Vec<ObjectId>) -> Object {
    Object::new(
        id,
        ObjectKind::GlobalStructure { structure },
        Vec3::zeros(),
        Vec3::zeros(),
        0,
    )
}
