//! Render/query order over an area's drawable objects.
//!
//! # Order
//! At build time the list is sorted: non-planar objects first, then planar ones; within each
//! class higher ids come first. Objects added afterwards are *prepended* instead of sorted in,
//! so the most recently added object is always drawn and queried first. Ray casts and the
//! resolver break ties by this order, so it is observable and must not be "fixed" by
//! re-sorting on insert.

use crate::ObjectId;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DrawOrder {
    ids: Vec<ObjectId>,
}

impl DrawOrder {
    /// Sorted build-time order from `(id, is_planar)` pairs of drawable objects.
    pub fn build(drawables: impl IntoIterator<Item = (ObjectId, bool)>) -> Self {
        let mut entries: Vec<(ObjectId, bool)> = drawables.into_iter().collect();
        entries.sort_by(|(a_id, a_planar), (b_id, b_planar)| {
            a_planar.cmp(b_planar).then_with(|| b_id.cmp(a_id))
        });
        Self {
            ids: entries.into_iter().map(|(id, _)| id).collect(),
        }
    }

    /// Insert a runtime addition ahead of everything else.
    pub fn push_front(&mut self, id: ObjectId) {
        self.ids.insert(0, id);
    }

    /// Remove `id` wherever it sits. Returns false if it was not listed.
    pub fn remove(&mut self, id: ObjectId) -> bool {
        match self.ids.iter().position(|&x| x == id) {
            Some(idx) => {
                self.ids.remove(idx);
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn contains(&self, id: ObjectId) -> bool {
        self.ids.contains(&id)
    }

    #[inline]
    pub fn ids(&self) -> &[ObjectId] {
        &self.ids
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = ObjectId> + Clone + '_ {
        self.ids.iter().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_puts_solids_first_then_higher_ids() {
        let order = DrawOrder::build([(1, false), (9, true), (4, false), (2, true), (7, false)]);
        assert_eq!(order.ids(), &[7, 4, 1, 9, 2]);
    }

    #[test]
    fn runtime_insert_goes_in_front_regardless_of_rank() {
        let mut order = DrawOrder::build([(5, false), (8, false)]);
        order.push_front(1);
        assert_eq!(order.ids(), &[1, 8, 5]);
    }

    #[test]
    fn remove_by_id_not_position() {
        let mut order = DrawOrder::build([(3, false), (2, false), (1, false)]);
        assert!(order.remove(2));
        assert!(!order.remove(2));
        assert_eq!(order.ids(), &[3, 1]);
        assert_eq!(order.len(), 2);
    }
}
