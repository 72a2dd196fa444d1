use num_traits::{One, PrimInt};

/// Trait implemented by flag enums declared with [`define_bitmask_flags!`].
///
/// The enum's discriminant is the bit index; the backing integer type is chosen via
/// the associated `Storage`.
pub trait FlagBitmask {
    type Storage: PrimInt;

    fn bit_index(&self) -> u8;

    fn mask(&self) -> Self::Storage {
        // NOTE: `bit_index()` must be < number of bits in `Storage`.
        Self::Storage::one() << (self.bit_index() as usize)
    }
}

/// A plain bitmask container.
///
/// Bits that no declared flag names are kept as-is, so a value read from level data or a
/// save stream is written back unchanged.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BitmaskFlags<T: PrimInt> {
    pub bits: T,
}

impl<T: PrimInt> BitmaskFlags<T> {
    pub fn new(bits: T) -> Self {
        Self { bits }
    }

    pub fn add<U: FlagBitmask<Storage = T>>(&mut self, tag: U) {
        self.bits = self.bits | tag.mask();
    }

    pub fn remove<U: FlagBitmask<Storage = T>>(&mut self, tag: U) {
        self.bits = self.bits & !tag.mask();
    }

    pub fn has<U: FlagBitmask<Storage = T>>(&self, tag: U) -> bool {
        (self.bits & tag.mask()) != T::zero()
    }

    /// Sets or clears `tag` depending on `on`.
    pub fn set<U: FlagBitmask<Storage = T>>(&mut self, tag: U, on: bool) {
        if on {
            self.add(tag);
        } else {
            self.remove(tag);
        }
    }

    pub fn has_any<U: FlagBitmask<Storage = T> + Copy>(&self, tags: &[U]) -> bool {
        if tags.is_empty() {
            return false;
        }
        let combined = tags.iter().fold(T::zero(), |acc, t| acc | t.mask());
        (self.bits & combined) != T::zero()
    }
}

/// Declare a flag enum with explicit bit positions and implement `FlagBitmask` for it.
///
/// Example:
/// ```rust,ignore
/// define_bitmask_flags!(DoorFlag, u16, {
///     Locked = 0,
///     Open = 3,
/// });
/// ```
#[macro_export]
macro_rules! define_bitmask_flags {
    ($name:ident, $storage:ty, { $($variant:ident = $bit:expr),* $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        #[repr(u8)]
        pub enum $name {
            $($variant = $bit),*
        }

        impl $crate::bitmask_flags::FlagBitmask for $name {
            type Storage = $storage;

            fn bit_index(&self) -> u8 {
                *self as u8
            }
        }
    };
}

define_bitmask_flags!(ObjectFlag, u32, {
    Destroyed = 5,
    Invisible = 6,
    InitiallyInvisible = 7,
});

/// Runtime state bits of an [`Object`](crate::Object).
pub type ObjectFlags = BitmaskFlags<u32>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_flags_use_fixed_bit_positions() {
        assert_eq!(ObjectFlag::Destroyed.mask(), 0x20);
        assert_eq!(ObjectFlag::Invisible.mask(), 0x40);
        assert_eq!(ObjectFlag::InitiallyInvisible.mask(), 0x80);
    }

    #[test]
    fn set_and_remove_leave_unknown_bits_alone() {
        let mut flags = ObjectFlags::new(0x0001_0003);
        flags.set(ObjectFlag::Destroyed, true);
        assert!(flags.has(ObjectFlag::Destroyed));
        assert_eq!(flags.bits, 0x0001_0023);

        flags.set(ObjectFlag::Destroyed, false);
        assert_eq!(flags.bits, 0x0001_0003);
    }

    #[test]
    fn has_any_is_false_for_empty_slice() {
        let flags = ObjectFlags::new(u32::MAX);
        assert!(!flags.has_any::<ObjectFlag>(&[]));
        assert!(flags.has_any(&[ObjectFlag::Invisible, ObjectFlag::Destroyed]));
    }
}
