//! Save/restore of an area's runtime deltas.
//!
//! # Wire format
//! All integers and floats are little-endian:
//!
//! - `u32` object count, then per object in id order: `u32 id`, `u32 flags`, `f32 x, y, z`
//! - `u32` remap count, then per remap in index order: `u32 index`, `u32 color`
//!
//! Static geometry is not stored; it comes from the level data the area is rebuilt from.
//! Saving an untouched restored area reproduces the input byte for byte.

use std::{
    collections::BTreeMap,
    io::{Read, Write},
};

use crate::{Area, Object, ObjectId, collision::types::Vec3, error::AreaError};

fn write_u32<W: Write + ?Sized>(w: &mut W, v: u32) -> std::io::Result<()> {
    w.write_all(&v.to_le_bytes())
}

fn write_f32<W: Write + ?Sized>(w: &mut W, v: f32) -> std::io::Result<()> {
    w.write_all(&v.to_le_bytes())
}

fn read_u32<R: Read + ?Sized>(r: &mut R) -> std::io::Result<u32> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

fn read_f32<R: Read + ?Sized>(r: &mut R) -> std::io::Result<f32> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(f32::from_le_bytes(buf))
}

impl Area {
    /// Write flags and origin of every object plus all colour remaps.
    pub fn save_objects<W: Write + ?Sized>(&self, w: &mut W) -> Result<(), AreaError> {
        write_u32(w, self.store.object_count() as u32)?;
        for obj in self.store.objects() {
            let origin = obj.origin();
            write_u32(w, u32::from(obj.id()))?;
            write_u32(w, obj.flags())?;
            write_f32(w, origin.x)?;
            write_f32(w, origin.y)?;
            write_f32(w, origin.z)?;
        }

        write_u32(w, self.color_remaps.len() as u32)?;
        for (&index, &color) in &self.color_remaps {
            write_u32(w, u32::from(index))?;
            write_u32(w, u32::from(color))?;
        }
        Ok(())
    }

    /// Apply a stream written by [`save_objects`](Self::save_objects).
    ///
    /// Ids missing from this area were added at runtime before the save; they are duplicated
    /// again from `global`'s objects and scaled to this area's units. Existing colour remaps
    /// are replaced.
    ///
    /// The whole stream is read and checked before anything is applied, so on error the area
    /// is left as it was.
    pub fn load_objects<R: Read + ?Sized>(
        &mut self,
        r: &mut R,
        global: Option<&Area>,
    ) -> Result<(), AreaError> {
        let area_id = self.id();

        let count = read_u32(r)?;
        let mut records = Vec::new();
        let mut restored: BTreeMap<ObjectId, Object> = BTreeMap::new();
        for _ in 0..count {
            let raw_id = read_u32(r)?;
            let id = ObjectId::try_from(raw_id)
                .map_err(|_| AreaError::InvalidObjectId { raw: raw_id })?;
            let flags = read_u32(r)?;
            let origin = Vec3::new(read_f32(r)?, read_f32(r)?, read_f32(r)?);
            records.push(SavedObject { id, flags, origin });

            if self.store.contains_object(id) || restored.contains_key(&id) {
                continue;
            }
            let global = global.ok_or(AreaError::NoGlobalArea { area: area_id, id })?;
            let source = global
                .object_with_id(id)
                .ok_or(AreaError::MissingGlobalObject {
                    area: global.id(),
                    id,
                })?;
            let mut object = source.duplicate();
            object.scale(self.settings.scale);
            restored.insert(id, object);
        }

        let remap_count = read_u32(r)?;
        let mut remaps = Vec::new();
        for _ in 0..remap_count {
            let index = read_u32(r)?;
            let color = read_u32(r)?;
            match (u8::try_from(index), u8::try_from(color)) {
                (Ok(i), Ok(c)) => remaps.push((i, c)),
                _ => return Err(AreaError::InvalidColorRemap { index, color }),
            }
        }

        for (id, object) in restored {
            log::debug!("restoring object {} of area {} from global area", id, area_id);
            self.add_object(object)?;
        }
        for record in records {
            let obj = self
                .store
                .object_mut(record.id)
                .ok_or(AreaError::MissingObject { area: area_id, id: record.id })?;
            obj.set_flags(record.flags);
            obj.set_origin(record.origin);
        }

        self.color_remaps.clear();
        for (index, color) in remaps {
            self.remap_color(index, color);
        }
        Ok(())
    }
}

/// One object record of a saved stream, held until the whole stream has been checked.
struct SavedObject {
    id: ObjectId,
    flags: u32,
    origin: Vec3,
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::{AreaDef, Object, test_support::cube};

    fn level_def() -> AreaDef {
        AreaDef {
            id: 2,
            objects: vec![
                cube(1, [0.0; 3], [10.0; 3]),
                cube(2, [20.0, 0.0, 0.0], [5.0; 3]),
                Object::new(3, crate::ObjectKind::Cube, Vec3::zeros(), Vec3::repeat(1.0), 0x80),
            ],
            ..Default::default()
        }
    }

    fn global() -> Area {
        Area::build(AreaDef {
            id: 255,
            objects: vec![cube(50, [100.0; 3], [8.0; 3])],
            ..Default::default()
        })
        .expect("valid")
    }

    fn save(area: &Area) -> Vec<u8> {
        let mut out = Vec::new();
        area.save_objects(&mut out).expect("vec writes never fail");
        out
    }

    #[test]
    fn layout_is_little_endian_count_prefixed() {
        let mut area = Area::build(AreaDef {
            id: 1,
            objects: vec![cube(7, [1.0, 2.0, 3.0], [1.0; 3])],
            ..Default::default()
        })
        .expect("valid");
        area.remap_color(4, 9);

        let bytes = save(&area);
        let mut expected = Vec::new();
        expected.extend_from_slice(&1u32.to_le_bytes());
        expected.extend_from_slice(&7u32.to_le_bytes());
        expected.extend_from_slice(&0u32.to_le_bytes());
        expected.extend_from_slice(&1.0f32.to_le_bytes());
        expected.extend_from_slice(&2.0f32.to_le_bytes());
        expected.extend_from_slice(&3.0f32.to_le_bytes());
        expected.extend_from_slice(&1u32.to_le_bytes());
        expected.extend_from_slice(&4u32.to_le_bytes());
        expected.extend_from_slice(&9u32.to_le_bytes());
        assert_eq!(bytes, expected);
    }

    #[test]
    fn save_load_round_trips_runtime_state() {
        let global = global();
        let mut area = Area::build(level_def()).expect("valid");
        area.add_object_from_area(50, &global).expect("in global");
        area.object_mut(1).expect("present").destroy();
        area.object_mut(2).expect("present").set_origin(Vec3::new(-4.0, 8.5, 3.25));
        area.object_mut(50).expect("present").make_invisible();
        area.remap_color(1, 12);
        area.remap_color(200, 3);
        let saved = save(&area);

        let mut restored = Area::build(level_def()).expect("valid");
        restored
            .load_objects(&mut Cursor::new(&saved), Some(&global))
            .expect("loads");

        assert_eq!(save(&restored), saved);
        for obj in area.objects() {
            let other = restored.object_with_id(obj.id()).expect("same ids");
            assert_eq!(other.flags(), obj.flags());
            assert_eq!(other.origin(), obj.origin());
        }
        assert_eq!(restored.color_remaps(), area.color_remaps());
        assert!(restored.draw_order().contains(50));
    }

    #[test]
    fn load_replaces_existing_remaps() {
        let mut area = Area::build(level_def()).expect("valid");
        let saved = save(&area);
        area.remap_color(5, 6);
        area.load_objects(&mut Cursor::new(&saved), None).expect("loads");
        assert!(area.color_remaps().is_empty());
    }

    #[test]
    fn unknown_id_without_global_fails() {
        let mut area = Area::build(level_def()).expect("valid");
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&1u32.to_le_bytes());
        bytes.extend_from_slice(&77u32.to_le_bytes());
        bytes.extend_from_slice(&[0u8; 16]);
        bytes.extend_from_slice(&0u32.to_le_bytes());

        let err = area
            .load_objects(&mut Cursor::new(&bytes), None)
            .expect_err("no global");
        assert!(matches!(err, AreaError::NoGlobalArea { area: 2, id: 77 }));

        let err = area
            .load_objects(&mut Cursor::new(&bytes), Some(&global()))
            .expect_err("not in global");
        assert!(matches!(err, AreaError::MissingGlobalObject { area: 255, id: 77 }));
    }

    #[test]
    fn truncated_stream_is_an_io_error() {
        let mut area = Area::build(level_def()).expect("valid");
        let err = area
            .load_objects(&mut Cursor::new(&[1u8, 0, 0]), None)
            .expect_err("truncated");
        assert!(matches!(err, AreaError::Io(_)));
    }

    #[test]
    fn failed_load_leaves_the_area_untouched() {
        let mut area = Area::build(level_def()).expect("valid");
        area.remap_color(5, 6);
        let before = save(&area);

        let mut bytes = Vec::new();
        bytes.extend_from_slice(&2u32.to_le_bytes());
        bytes.extend_from_slice(&1u32.to_le_bytes());
        bytes.extend_from_slice(&0x20u32.to_le_bytes());
        for v in [7.0f32, 8.0, 9.0] {
            bytes.extend_from_slice(&v.to_le_bytes());
        }
        bytes.extend_from_slice(&77u32.to_le_bytes());
        bytes.extend_from_slice(&[0u8; 16]);
        bytes.extend_from_slice(&0u32.to_le_bytes());

        let err = area
            .load_objects(&mut Cursor::new(&bytes), None)
            .expect_err("object 77 cannot be restored");
        assert!(matches!(err, AreaError::NoGlobalArea { area: 2, id: 77 }));
        assert!(!area.object_with_id(1).expect("present").is_destroyed());
        assert_eq!(save(&area), before);
    }

    #[test]
    fn bad_remap_after_valid_objects_applies_nothing() {
        let mut area = Area::build(level_def()).expect("valid");
        let before = save(&area);

        let mut bytes = Vec::new();
        bytes.extend_from_slice(&1u32.to_le_bytes());
        bytes.extend_from_slice(&2u32.to_le_bytes());
        bytes.extend_from_slice(&0x40u32.to_le_bytes());
        bytes.extend_from_slice(&[0u8; 12]);
        bytes.extend_from_slice(&1u32.to_le_bytes());
        bytes.extend_from_slice(&3u32.to_le_bytes());
        bytes.extend_from_slice(&300u32.to_le_bytes());

        let err = area
            .load_objects(&mut Cursor::new(&bytes), None)
            .expect_err("colour out of range");
        assert!(matches!(err, AreaError::InvalidColorRemap { index: 3, color: 300 }));
        assert_eq!(save(&area), before);
    }

    #[test]
    fn restored_objects_are_scaled_like_added_ones() {
        let global = global();
        let mut def = level_def();
        def.settings.scale = 2;
        let mut area = Area::build(def.clone()).expect("valid");
        area.add_object_from_area(50, &global).expect("in global");
        let size = area.object_with_id(50).expect("added").size();
        assert_eq!(size, Vec3::repeat(4.0));
        let saved = save(&area);

        let mut restored = Area::build(def).expect("valid");
        restored
            .load_objects(&mut Cursor::new(&saved), Some(&global))
            .expect("loads");
        let obj = restored.object_with_id(50).expect("restored");
        assert_eq!(obj.size(), size);
        assert_eq!(obj.origin(), Vec3::repeat(50.0));
        assert_eq!(save(&restored), saved);
    }
}
