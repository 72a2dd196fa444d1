use std::collections::BTreeMap;

use crate::{
    Object, ObjectId, ObjectKind,
    collision::{
        CollisionSettings, ResolveRequest,
        resolve::resolve_motion,
        types::{Aabb, Vec3},
    },
    constants::{
        CUBE_FACES, FLOOR_OBJECT_ID, FLOOR_ORIGIN, FLOOR_SIZE, STRUCTURE_ENTRANCE_ID, UNSET_COLOR,
    },
    draw_order::DrawOrder,
    error::{AreaError, ResolveError},
    owner::Owner,
    render::Renderer,
    store::ObjectStore,
};

/// Per-area presentation attributes and unit scale.
#[derive(Clone, Debug, PartialEq)]
pub struct AreaSettings {
    pub name: String,
    /// Level units per area unit; 0 and 1 mean unscaled.
    pub scale: u8,
    pub sky_color: u8,
    pub ground_color: u8,
    pub usual_background_color: u8,
    pub under_fire_background_color: u8,
    pub ink_color: u8,
    pub paper_color: u8,
    pub gas_pocket_radius: u32,
}

impl Default for AreaSettings {
    fn default() -> Self {
        Self {
            name: String::new(),
            scale: 0,
            sky_color: UNSET_COLOR,
            ground_color: UNSET_COLOR,
            usual_background_color: UNSET_COLOR,
            under_fire_background_color: UNSET_COLOR,
            ink_color: UNSET_COLOR,
            paper_color: UNSET_COLOR,
            gas_pocket_radius: 0,
        }
    }
}

/// Level-build input for one area, as produced by the level loader.
#[derive(Clone, Debug, Default)]
pub struct AreaDef {
    pub id: u16,
    pub flags: u16,
    pub settings: AreaSettings,
    pub objects: Vec<Object>,
    pub entrances: Vec<Object>,
}

/// The spatial world of one level area.
///
/// Owns its objects and entrances, the draw order over drawable objects, and runtime colour
/// remaps. A shared "global" area is only ever passed in as `&Area`; anything taken from it is
/// duplicated first.
#[derive(Clone, Debug)]
pub struct Area {
    id: u16,
    flags: u16,
    pub settings: AreaSettings,
    pub collision: CollisionSettings,
    pub(crate) store: ObjectStore,
    pub(crate) draw_order: DrawOrder,
    pub(crate) color_remaps: BTreeMap<u8, u8>,
}

impl Area {
    /// Take ownership of the level lists and build the sorted draw order.
    pub fn build(def: AreaDef) -> Result<Self, AreaError> {
        let store = ObjectStore::from_level(def.objects, def.entrances)
            .map_err(|id| AreaError::DuplicateObject { area: def.id, id })?;

        let draw_order = DrawOrder::build(
            store
                .objects()
                .filter(|o| o.is_drawable())
                .map(|o| (o.id(), o.is_planar())),
        );

        log::debug!(
            "built area {} ({:?}): {} objects, {} entrances, {} drawable",
            def.id,
            def.settings.name,
            store.object_count(),
            store.entrance_count(),
            draw_order.len()
        );

        Ok(Self {
            id: def.id,
            flags: def.flags,
            settings: def.settings,
            collision: CollisionSettings::default(),
            store,
            draw_order,
            color_remaps: BTreeMap::new(),
        })
    }

    #[inline]
    pub fn id(&self) -> u16 {
        self.id
    }

    #[inline]
    pub fn flags(&self) -> u16 {
        self.flags
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.settings.name
    }

    #[inline]
    pub fn scale(&self) -> u8 {
        self.settings.scale
    }

    /// Object by id, falling back to the entrances.
    #[inline]
    pub fn get(&self, id: ObjectId) -> Option<&Object> {
        self.store.get(id)
    }

    #[inline]
    pub fn object_with_id(&self, id: ObjectId) -> Option<&Object> {
        self.store.object(id)
    }

    #[inline]
    pub fn entrance_with_id(&self, id: ObjectId) -> Option<&Object> {
        self.store.entrance(id)
    }

    /// Mutable access for game logic (destroy, hide, move). Kind and extent stay fixed.
    #[inline]
    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut Object> {
        self.store.get_mut(id)
    }

    pub fn objects(&self) -> impl Iterator<Item = &Object> + '_ {
        self.store.objects()
    }

    pub fn entrances(&self) -> impl Iterator<Item = &Object> + '_ {
        self.store.entrances()
    }

    #[inline]
    pub fn draw_order(&self) -> &DrawOrder {
        &self.draw_order
    }

    /// Drawable objects in draw order.
    pub fn drawables(&self) -> impl Iterator<Item = &Object> + Clone + '_ {
        self.draw_order
            .iter()
            .filter_map(move |id| self.store.object(id))
    }

    /// Ids of objects and entrances this area created at runtime.
    pub fn added_ids(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.store.added_ids()
    }

    pub fn owner_of(&self, id: ObjectId) -> Option<Owner> {
        self.store.owner_of(id)
    }

    /// Add an object created at runtime.
    ///
    /// Drawable objects go to the front of the draw order, ahead of the sorted level objects.
    pub fn add_object(&mut self, object: Object) -> Result<(), AreaError> {
        let id = object.id();
        log::debug!("adding object {} to area {}", id, self.id);
        let drawable = object.is_drawable();
        self.store
            .insert_object(object, Owner::Added)
            .map_err(|id| AreaError::DuplicateObject { area: self.id, id })?;
        if drawable {
            self.draw_order.push_front(id);
        }
        Ok(())
    }

    /// Remove an object from the objects map and the draw order.
    pub fn remove_object(&mut self, id: ObjectId) -> Result<Object, AreaError> {
        let stored = self
            .store
            .remove_object(id)
            .ok_or(AreaError::MissingObject { area: self.id, id })?;
        self.draw_order.remove(id);
        log::debug!("removed object {} ({:?}) from area {}", id, stored.owner, self.id);
        Ok(stored.object)
    }

    /// Duplicate object `id` from `global` into this area, scaled to this area's units.
    ///
    /// The global objects map is searched first, then its entrances. An entrance lands in this
    /// area's entrances map.
    pub fn add_object_from_area(&mut self, id: ObjectId, global: &Area) -> Result<(), AreaError> {
        log::debug!(
            "adding object {} from area {} to area {} structure",
            id,
            global.id,
            self.id
        );
        if let Some(source) = global.object_with_id(id) {
            let mut object = source.duplicate();
            object.scale(self.settings.scale);
            return self.add_object(object);
        }

        let source = global
            .entrance_with_id(id)
            .ok_or(AreaError::MissingGlobalObject {
                area: global.id,
                id,
            })?;
        let mut object = source.duplicate();
        object.scale(self.settings.scale);
        self.store
            .insert_entrance(object, Owner::Added)
            .map_err(|id| AreaError::DuplicateObject { area: self.id, id })
    }

    /// Add the synthetic floor: a huge one-unit-thick cube in the ground colour.
    pub fn add_floor(&mut self) -> Result<(), AreaError> {
        let floor = Object::new(
            FLOOR_OBJECT_ID,
            ObjectKind::Cube,
            FLOOR_ORIGIN.into(),
            FLOOR_SIZE.into(),
            0,
        )
        .with_colours(vec![self.settings.ground_color; CUBE_FACES]);
        self.add_object(floor)
    }

    /// Pull in the static structure listed by entrance 255 from `global`.
    ///
    /// Without a global area or a structure template the area gets a synthetic floor instead.
    pub fn add_structure(&mut self, global: Option<&Area>) -> Result<(), AreaError> {
        let structure = match self.store.entrance(STRUCTURE_ENTRANCE_ID).map(Object::kind) {
            Some(ObjectKind::GlobalStructure { structure }) => Some(structure.clone()),
            _ => None,
        };

        let (Some(global), Some(structure)) = (global, structure) else {
            log::debug!("area {} has no structure template, adding floor", self.id);
            return self.add_floor();
        };

        for id in structure.into_iter().filter(|&id| id != 0) {
            self.add_object_from_area(id, global)?;
        }
        Ok(())
    }

    /// Back to the level's initial look: no remaps, nothing destroyed, initial visibility.
    pub fn reset_area(&mut self) {
        log::info!("resetting area {} ({:?})", self.id, self.settings.name);
        self.color_remaps.clear();
        for object in self.store.all_mut() {
            object.reset();
        }
    }

    pub fn remap_color(&mut self, index: u8, color: u8) {
        self.color_remaps.insert(index, color);
    }

    pub fn unremap_color(&mut self, index: u8) {
        self.color_remaps.remove(&index);
    }

    #[inline]
    pub fn color_remaps(&self) -> &BTreeMap<u8, u8> {
        &self.color_remaps
    }

    pub fn sensors(&self) -> Vec<&Object> {
        self.store.objects().filter(|o| o.is_sensor()).collect()
    }

    /// Dump every object and entrance at debug level.
    pub fn show(&self) {
        log::debug!("area {} name: {:?}", self.id, self.settings.name);
        for stored in self.store.stored_objects() {
            log::debug!(
                "objID: {}, type: {} ({:?})",
                stored.object.id(),
                stored.object.kind().name(),
                stored.owner
            );
        }
        for stored in self.store.stored_entrances() {
            log::debug!(
                "objID: {}, type: {} (entrance, {:?})",
                stored.object.id(),
                stored.object.kind().name(),
                stored.owner
            );
        }
    }

    /// Submit every visible drawable object to `renderer` in draw order.
    ///
    /// Groups are assembled for the frame at `ticks` and drawn member by member.
    pub fn draw<R: Renderer + ?Sized>(&mut self, renderer: &mut R, ticks: u32) {
        if self.draw_order.is_empty() {
            log::warn!("area {} has nothing to draw", self.id);
        }
        for &id in self.draw_order.ids() {
            let Some(object) = self.store.object_mut(id) else {
                continue;
            };
            if !object.is_active() {
                continue;
            }
            let origin = object.origin();
            match object.group_mut() {
                Some(group) => {
                    let frame = group.frame_at_tick(ticks);
                    group.assemble(origin, frame);
                    for member in &group.members {
                        renderer.draw(&member.object);
                    }
                }
                None => renderer.draw(object),
            }
        }
    }

    /// Bounding boxes the player collides with, in draw order: every visible, undestroyed
    /// drawable object that has a box, sensors included.
    pub fn solid_boxes(&self) -> impl Iterator<Item = &Aabb> + Clone + '_ {
        self.drawables()
            .filter(|o| o.is_active())
            .filter_map(Object::bounding_box)
    }

    /// Correct the player's desired position against every solid in the area.
    pub fn resolve_collisions(
        &self,
        last_pos: Vec3,
        desired_pos: Vec3,
        player_height: f32,
    ) -> Result<Vec3, ResolveError> {
        let req = ResolveRequest {
            last_pos,
            desired_pos,
            player_height,
            settings: self.collision,
        };
        resolve_motion(req, self.solid_boxes())
    }
}
