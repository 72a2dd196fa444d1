/// Who is responsible for an object stored in an [`Area`](crate::Area).
///
/// # Why this exists
/// An area holds two populations in the same id-keyed maps: objects handed over by the level
/// loader and objects the area created itself at runtime (duplicates of global-area objects,
/// the synthetic floor, objects restored from a save). Only the second population counts as
/// "added": it is what [`Area::added_ids`](crate::Area::added_ids) reports and what a
/// remove/re-add cycle touches. Objects that live in the global area are never stored here at
/// all; other areas only see them through a shared `&Area` and always copy before storing.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Owner {
    /// Supplied by the level build.
    Level = 1,
    /// Constructed or duplicated by the area at runtime.
    Added = 2,
}

impl Owner {
    #[inline]
    pub fn is_added(self) -> bool {
        matches!(self, Owner::Added)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_added_reports_added() {
        assert!(Owner::Added.is_added());
        assert!(!Owner::Level.is_added());
    }
}
