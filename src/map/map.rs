use std::hash::BuildHasher;

use super::{InsertError, InvalidLayout, KeyAlreadyExists, MapFull, MapOptions};
use super::slot::{KEY_PREFIX_CAP, Slot};
use crate::arena::Arena;
use crate::hash::SeededFnv;

/// A fixed-capacity map from byte-string keys to values, resolving collisions by coalesced
/// hashing.
///
/// The slot array is laid out once at construction and never grows, shrinks or rehashes. Its
/// prefix `0..home_cap` is the *home* region (the only indices a hash can map to directly),
/// and the remainder is the *cellar*, claimed for collision overflow from the highest index
/// downward. A key's first [`KEY_PREFIX_CAP`] bytes are stored inline in its slot; longer keys
/// spill into the map's bump [`Arena`].
///
/// Exhaustion is an ordinary result: inserting a new key when no cellar slot is free reports
/// [`MapFull`] and changes nothing.
///
/// The map is single-threaded; callers that share one across threads must serialize access
/// themselves.
///
/// # Time Complexity
/// For this analysis, `c` is the length of the collision chain visited by an operation. It is
/// bounded by the cellar size, and is 1 when the home slot resolves the key directly.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `get` / `contains` | `O(c)` |
/// | `insert_new` / `insert` | `O(c)`* |
/// | `remove` | `O(c)`* |
///
/// \* Claiming or re-homing a cellar slot additionally scans the cellar backward for a free
/// index, and removal re-homes every surviving member of the removed entry's chain.
pub struct CellarMap<V, B: BuildHasher = SeededFnv> {
    pub(crate) slots: Box<[Slot<V>]>,
    pub(crate) arena: Arena,
    pub(crate) home_cap: usize,
    pub(crate) taken: usize,
    pub(crate) min_overflow: usize,
    pub(crate) hasher: B,
}

/// Which of the flag combinations a resolution runs under: return-existing, create,
/// create-or-return-existing, or mark-deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Resolve {
    Existing,
    Create,
    CreateOrExisting,
    Delete,
}

pub(crate) enum Resolved<V> {
    Found(usize),
    Created(usize),
    Removed(V),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ResolveFail {
    NotFound,
    AlreadyExists,
    Full,
}

impl<V, B: BuildHasher + Default> CellarMap<V, B> {
    /// Creates a map with `cap_total` slots, default [`MapOptions`] and the default hasher.
    pub fn with_cap(cap_total: usize) -> Result<CellarMap<V, B>, InvalidLayout> {
        CellarMap::with_options(cap_total, MapOptions::default())
    }

    /// Creates a map with `cap_total` slots split per `options`, using the default hasher.
    pub fn with_options(
        cap_total: usize,
        options: MapOptions,
    ) -> Result<CellarMap<V, B>, InvalidLayout> {
        CellarMap::with_options_and_hasher(cap_total, options, B::default())
    }
}

impl<V, B: BuildHasher> CellarMap<V, B> {
    /// Creates a map with `cap_total` slots, default [`MapOptions`] and the provided `hasher`.
    pub fn with_cap_and_hasher(
        cap_total: usize,
        hasher: B,
    ) -> Result<CellarMap<V, B>, InvalidLayout> {
        CellarMap::with_options_and_hasher(cap_total, MapOptions::default(), hasher)
    }

    /// Creates a map with `cap_total` slots split per `options`, hashing keys with `hasher`.
    ///
    /// Fails with [`InvalidLayout`] unless `cap_total > 0`, `options.address_scale` is finite
    /// and strictly between 0 and 1, and the resulting home region holds at least one slot.
    /// Those conditions together guarantee a non-empty cellar as well.
    pub fn with_options_and_hasher(
        cap_total: usize,
        options: MapOptions,
        hasher: B,
    ) -> Result<CellarMap<V, B>, InvalidLayout> {
        let scale = options.address_scale;

        let invalid = InvalidLayout {
            cap_total,
            address_scale: scale,
        };

        if cap_total == 0 || !scale.is_finite() || scale <= 0.0 || scale >= 1.0 {
            return Err(invalid);
        }

        let home_cap = (cap_total as f64 * scale) as usize;
        if home_cap == 0 {
            return Err(invalid);
        }

        let slots = (0..cap_total)
            .map(|_| Slot::empty())
            .collect::<Vec<_>>()
            .into_boxed_slice();

        Ok(CellarMap {
            slots,
            arena: Arena::new(),
            home_cap,
            taken: 0,
            min_overflow: options.average_key_len.saturating_sub(KEY_PREFIX_CAP),
            hasher,
        })
    }

    /// Returns the number of occupied slots.
    pub const fn len(&self) -> usize {
        self.taken
    }

    /// Returns true if no slot is occupied.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if every slot is occupied.
    pub fn is_full(&self) -> bool {
        self.taken == self.slots.len()
    }

    /// Returns the total number of slots, home region and cellar together.
    pub fn cap(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of directly addressable (home) slots.
    pub const fn home_cap(&self) -> usize {
        self.home_cap
    }

    /// Returns the number of cellar slots.
    pub fn cellar_cap(&self) -> usize {
        self.slots.len() - self.home_cap
    }

    /// Returns the arena backing overflow key storage.
    pub const fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Returns a reference to the value stored for `key`, or None if the key is absent.
    pub fn get(&self, key: &[u8]) -> Option<&V> {
        let index = self.find_slot(key)?;
        self.slots[index].value.as_ref()
    }

    /// Returns a mutable reference to the value stored for `key`, or None if the key is
    /// absent.
    pub fn get_mut(&mut self, key: &[u8]) -> Option<&mut V> {
        match self.resolve_slot(key, Resolve::Existing) {
            Ok(Resolved::Found(index)) => self.slots[index].value.as_mut(),
            _ => None,
        }
    }

    /// Returns true if the map holds an entry for `key`.
    pub fn contains(&self, key: &[u8]) -> bool {
        self.find_slot(key).is_some()
    }

    /// Inserts an entry for a key that must not already be present.
    ///
    /// Fails with [`KeyAlreadyExists`] when `key` is live (the existing entry is untouched)
    /// and with [`MapFull`] when no cellar slot is free for a collision. Either way the map is
    /// unchanged.
    pub fn insert_new(&mut self, key: &[u8], value: V) -> Result<(), InsertError> {
        match self.resolve_slot(key, Resolve::Create) {
            Ok(Resolved::Created(index)) => {
                self.slots[index].value = Some(value);
                Ok(())
            },
            Err(ResolveFail::AlreadyExists) => Err(KeyAlreadyExists.into()),
            Err(ResolveFail::Full) => Err(MapFull.into()),
            _ => unreachable!("creating resolves to a created slot or fails"),
        }
    }

    /// Inserts an entry for `key`, overwriting and returning the previous value if the key was
    /// already present.
    ///
    /// Fails with [`MapFull`] only when `key` is genuinely new and no cellar slot is free; an
    /// overwrite of a live key always succeeds.
    pub fn insert(&mut self, key: &[u8], value: V) -> Result<Option<V>, MapFull> {
        match self.resolve_slot(key, Resolve::CreateOrExisting) {
            Ok(Resolved::Found(index)) => Ok(self.slots[index].value.replace(value)),
            Ok(Resolved::Created(index)) => {
                self.slots[index].value = Some(value);
                Ok(None)
            },
            Err(ResolveFail::Full) => Err(MapFull),
            _ => unreachable!("create-or-existing resolves to a slot or a full map"),
        }
    }

    /// Removes the entry for `key`, returning its value, or None if the key is absent.
    ///
    /// Removal re-homes the surviving members of the removed entry's chain, so afterwards no
    /// live chain references the freed slot.
    pub fn remove(&mut self, key: &[u8]) -> Option<V> {
        match self.resolve_slot(key, Resolve::Delete) {
            Ok(Resolved::Removed(value)) => Some(value),
            _ => None,
        }
    }
}

impl<V, B: BuildHasher> CellarMap<V, B> {
    /// The single routine behind every mutating operation, parameterized by the intent in
    /// `mode`. Lookup and search are shared with the read-only paths through
    /// [`find_slot`](CellarMap::find_slot).
    pub(crate) fn resolve_slot(
        &mut self,
        key: &[u8],
        mode: Resolve,
    ) -> Result<Resolved<V>, ResolveFail> {
        match (self.find_slot(key), mode) {
            (Some(found), Resolve::Delete) => Ok(Resolved::Removed(self.release_slot(found, key))),
            (Some(found), Resolve::Existing | Resolve::CreateOrExisting) => {
                Ok(Resolved::Found(found))
            },
            (Some(_), Resolve::Create) => Err(ResolveFail::AlreadyExists),
            (None, Resolve::Create | Resolve::CreateOrExisting) => {
                self.claim_slot(key).map(Resolved::Created)
            },
            (None, Resolve::Existing | Resolve::Delete) => Err(ResolveFail::NotFound),
        }
    }

    /// Finds the slot holding `key` by checking its home slot and then walking the collision
    /// chain, or None if no entry matches.
    pub(crate) fn find_slot(&self, key: &[u8]) -> Option<usize> {
        let mut at = self.home_index(key);

        if !self.slots[at].used {
            // An unoccupied home slot can't root a chain.
            return None;
        }

        loop {
            if self.slots[at].key_matches(&self.arena, key) {
                return Some(at);
            }

            at = self.slots[at].chain_next?;
        }
    }

    /// Claims a slot for a key known to be absent: the free home slot directly, or a cellar
    /// slot linked behind the home chain's tail. Fails with no mutation when the cellar is
    /// exhausted.
    fn claim_slot(&mut self, key: &[u8]) -> Result<usize, ResolveFail> {
        let home = self.home_index(key);

        if !self.slots[home].used {
            self.occupy(home, key);
            return Ok(home);
        }

        let mut tail = home;
        while let Some(next) = self.slots[tail].chain_next {
            tail = next;
        }

        let Some(dest) = self.free_cellar_slot() else {
            return Err(ResolveFail::Full);
        };

        self.occupy(dest, key);
        self.slots[tail].chain_next = Some(dest);
        Ok(dest)
    }

    /// Stores `key` into the free slot at `index` and marks it live with an empty chain link.
    /// The value is written afterwards by the caller.
    fn occupy(&mut self, index: usize, key: &[u8]) {
        let min_overflow = self.min_overflow;
        self.slots[index].store_key(&mut self.arena, key, min_overflow);

        let slot = &mut self.slots[index];
        slot.used = true;
        slot.chain_next = None;

        self.taken += 1;
    }

    /// Calculates the home index for `key`: its 64-bit hash taken modulo the home capacity.
    /// Cellar indices can never be produced here.
    pub(crate) fn home_index(&self, key: &[u8]) -> usize {
        (self.hasher.hash_one(key) % self.home_cap as u64) as usize
    }

    /// Scans the cellar from its highest index downward for the first free slot. The backward
    /// direction is deterministic and observable, so layouts reproduce exactly.
    pub(crate) fn free_cellar_slot(&self) -> Option<usize> {
        (self.home_cap..self.slots.len())
            .rev()
            .find(|&index| !self.slots[index].used)
    }
}
