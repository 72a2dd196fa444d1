use thiserror::Error;

use crate::ObjectId;

/// Failure of the player motion resolver.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ResolveError {
    /// The sweep loop kept finding obstructions past its bound. Either the level contains
    /// self-penetrating solids or the resolver is wrong; the position is not usable.
    #[error("collision resolution did not settle within {iterations} iterations")]
    IterationOverrun { iterations: u32 },
}

#[derive(Debug, Error)]
pub enum AreaError {
    #[error("object {id} already exists in area {area}")]
    DuplicateObject { area: u16, id: ObjectId },
    #[error("object {id} not found in area {area}")]
    MissingObject { area: u16, id: ObjectId },
    #[error("object {id} not found in global area {area}")]
    MissingGlobalObject { area: u16, id: ObjectId },
    #[error("area {area} needs a global area to restore object {id}")]
    NoGlobalArea { area: u16, id: ObjectId },
    #[error("saved object id {raw} does not fit an object id")]
    InvalidObjectId { raw: u32 },
    #[error("saved colour remap {index} -> {color} is out of range")]
    InvalidColorRemap { index: u32, color: u32 },
    #[error("area state stream: {0}")]
    Io(#[from] std::io::Error),
}
