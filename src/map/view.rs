use std::fmt::{self, Debug, Formatter};
use std::hash::BuildHasher;

use super::map::CellarMap;

/// A read-only view of one slot: occupancy, key length, the inline key prefix, the chain link
/// and the value. This is the surface debug tooling and the test suite use to assert exact
/// layouts.
pub struct SlotView<'a, V, B: BuildHasher> {
    map: &'a CellarMap<V, B>,
    index: usize,
}

impl<'a, V, B: BuildHasher> SlotView<'a, V, B> {
    /// The index of the viewed slot.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Whether the slot holds a live entry.
    pub fn used(&self) -> bool {
        self.map.slots[self.index].used
    }

    /// The total length of the stored key, overflow included. Stale (but harmless) on an
    /// unused slot.
    pub fn key_len(&self) -> usize {
        self.map.slots[self.index].key_len
    }

    /// The inline portion of the stored key, at most [`KEY_PREFIX_CAP`](super::KEY_PREFIX_CAP)
    /// bytes.
    pub fn key_prefix(&self) -> &'a [u8] {
        self.map.slots[self.index].key_prefix_bytes()
    }

    /// The index of the next slot in this slot's collision chain, if any.
    pub fn chain_next(&self) -> Option<usize> {
        self.map.slots[self.index].chain_next
    }

    /// The stored value, if the slot is occupied.
    pub fn value(&self) -> Option<&'a V> {
        self.map.slots[self.index].value.as_ref()
    }
}

impl<V, B: BuildHasher> CellarMap<V, B> {
    /// Returns a read-only view of the slot at `index`.
    ///
    /// # Panics
    /// Panics if `index` is not below [`cap`](CellarMap::cap).
    pub fn slot(&self, index: usize) -> SlotView<'_, V, B> {
        assert!(index < self.slots.len(), "slot index {index} out of bounds");

        SlotView { map: self, index }
    }

    /// Returns an iterator of read-only views over every slot, home region first, in index
    /// order.
    pub fn slots(&self) -> Slots<'_, V, B> {
        Slots { map: self, index: 0 }
    }
}

/// An iterator of [`SlotView`]s over a map's whole slot array.
pub struct Slots<'a, V, B: BuildHasher> {
    map: &'a CellarMap<V, B>,
    index: usize,
}

impl<'a, V, B: BuildHasher> Iterator for Slots<'a, V, B> {
    type Item = SlotView<'a, V, B>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.map.slots.len() {
            return None;
        }

        let view = SlotView {
            map: self.map,
            index: self.index,
        };
        self.index += 1;
        Some(view)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.map.slots.len() - self.index;
        (left, Some(left))
    }
}

impl<V, B: BuildHasher> ExactSizeIterator for Slots<'_, V, B> {}

impl<V: Debug, B: BuildHasher> Debug for CellarMap<V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellarMap")
            .field("taken", &self.taken)
            .field("home_cap", &self.home_cap)
            .field("cap", &self.slots.len())
            .field("slots", &SlotsDebug(self))
            .finish()
    }
}

struct SlotsDebug<'a, V, B: BuildHasher>(&'a CellarMap<V, B>);

impl<V: Debug, B: BuildHasher> Debug for SlotsDebug<'_, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.0.slots().map(SlotLine))
            .finish()
    }
}

struct SlotLine<'a, V, B: BuildHasher>(SlotView<'a, V, B>);

impl<V: Debug, B: BuildHasher> Debug for SlotLine<'_, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if !self.0.used() {
            return write!(f, "-");
        }

        write!(
            f,
            "({}{}: ",
            self.0.key_prefix().escape_ascii(),
            if self.0.key_len() > self.0.key_prefix().len() { ".." } else { "" },
        )?;

        match self.0.value() {
            Some(value) => write!(f, "{value:?}")?,
            None => write!(f, "?")?,
        }

        match self.0.chain_next() {
            Some(next) => write!(f, " -> {next})"),
            None => write!(f, ")"),
        }
    }
}
