//! Id-keyed storage for an area's objects and entrances.
//!
//! Both maps are `BTreeMap`s so iteration (and therefore the save format) follows id order
//! and is identical for identical contents. Every entry carries its [`Owner`] tag; the set of
//! runtime-added ids is derived from those tags rather than tracked on the side, so it can
//! never drift from the maps.

use std::collections::BTreeMap;

use crate::{Object, ObjectId, owner::Owner};

#[derive(Clone, Debug, PartialEq)]
pub struct StoredObject {
    pub object: Object,
    pub owner: Owner,
}

#[derive(Clone, Debug, Default)]
pub struct ObjectStore {
    objects: BTreeMap<ObjectId, StoredObject>,
    entrances: BTreeMap<ObjectId, StoredObject>,
}

/// Insert every object of a level list, rejecting the first repeated id.
fn level_map(list: Vec<Object>) -> Result<BTreeMap<ObjectId, StoredObject>, ObjectId> {
    let mut map = BTreeMap::new();
    for object in list {
        let id = object.id();
        if map.contains_key(&id) {
            return Err(id);
        }
        map.insert(
            id,
            StoredObject {
                object,
                owner: Owner::Level,
            },
        );
    }
    Ok(map)
}

fn insert_unique(
    map: &mut BTreeMap<ObjectId, StoredObject>,
    object: Object,
    owner: Owner,
) -> Result<(), ObjectId> {
    let id = object.id();
    if map.contains_key(&id) {
        return Err(id);
    }
    map.insert(id, StoredObject { object, owner });
    Ok(())
}

impl ObjectStore {
    /// Take ownership of the loader's lists. `Err(id)` names a repeated id.
    ///
    /// Ids are unique per map only; an object and an entrance may share an id, and lookups
    /// through [`get`](Self::get) then see the object.
    pub fn from_level(objects: Vec<Object>, entrances: Vec<Object>) -> Result<Self, ObjectId> {
        Ok(Self {
            objects: level_map(objects)?,
            entrances: level_map(entrances)?,
        })
    }

    /// Object by id, falling back to the entrances.
    pub fn get(&self, id: ObjectId) -> Option<&Object> {
        self.object(id).or_else(|| self.entrance(id))
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut Object> {
        if self.objects.contains_key(&id) {
            return self.object_mut(id);
        }
        self.entrance_mut(id)
    }

    pub fn object(&self, id: ObjectId) -> Option<&Object> {
        self.objects.get(&id).map(|s| &s.object)
    }

    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut Object> {
        self.objects.get_mut(&id).map(|s| &mut s.object)
    }

    pub fn entrance(&self, id: ObjectId) -> Option<&Object> {
        self.entrances.get(&id).map(|s| &s.object)
    }

    pub fn entrance_mut(&mut self, id: ObjectId) -> Option<&mut Object> {
        self.entrances.get_mut(&id).map(|s| &mut s.object)
    }

    #[inline]
    pub fn contains_object(&self, id: ObjectId) -> bool {
        self.objects.contains_key(&id)
    }

    /// `Err(id)` if the objects map already holds that id.
    pub fn insert_object(&mut self, object: Object, owner: Owner) -> Result<(), ObjectId> {
        insert_unique(&mut self.objects, object, owner)
    }

    /// `Err(id)` if the entrances map already holds that id.
    pub fn insert_entrance(&mut self, object: Object, owner: Owner) -> Result<(), ObjectId> {
        insert_unique(&mut self.entrances, object, owner)
    }

    pub fn remove_object(&mut self, id: ObjectId) -> Option<StoredObject> {
        self.objects.remove(&id)
    }

    pub fn owner_of(&self, id: ObjectId) -> Option<Owner> {
        self.objects
            .get(&id)
            .or_else(|| self.entrances.get(&id))
            .map(|s| s.owner)
    }

    /// Ids the area created at runtime, objects first, each map in id order.
    pub fn added_ids(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.objects
            .iter()
            .chain(self.entrances.iter())
            .filter(|(_, s)| s.owner.is_added())
            .map(|(&id, _)| id)
    }

    pub fn objects(&self) -> impl Iterator<Item = &Object> + '_ {
        self.objects.values().map(|s| &s.object)
    }

    pub fn entrances(&self) -> impl Iterator<Item = &Object> + '_ {
        self.entrances.values().map(|s| &s.object)
    }

    pub(crate) fn stored_objects(&self) -> impl Iterator<Item = &StoredObject> + '_ {
        self.objects.values()
    }

    pub(crate) fn stored_entrances(&self) -> impl Iterator<Item = &StoredObject> + '_ {
        self.entrances.values()
    }

    /// Every object and entrance, mutably.
    pub fn all_mut(&mut self) -> impl Iterator<Item = &mut Object> + '_ {
        self.objects
            .values_mut()
            .chain(self.entrances.values_mut())
            .map(|s| &mut s.object)
    }

    #[inline]
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    #[inline]
    pub fn entrance_count(&self) -> usize {
        self.entrances.len()
    }
}
