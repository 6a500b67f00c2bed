//! Deletion-time recompaction.
//!
//! Unlinking a removed slot is not enough in coalesced hashing: the slots chained behind it
//! would become unreachable the moment the chain stops passing through it. Instead, freeing a
//! slot re-homes every *other* member of its chain, head included, in chain order. Each member
//! either stays where it is (it already heads its own chain), moves into its now-free home
//! slot, or is re-chained into a freshly claimed cellar slot. Rebuilding the whole chain does
//! slightly more work than the minimum, and is much easier to reason about.

use std::hash::BuildHasher;

use super::map::CellarMap;
use super::slot::KEY_PREFIX_CAP;

/// What happened to one chain member during re-homing. One outcome per work-list entry, in
/// order, so the algorithm can be audited and unit-tested step by step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rehome {
    /// The member's recomputed home is the slot it already occupies; it was re-marked used
    /// without moving.
    AlreadyHome { index: usize },
    /// The member's home slot was free; its key and value were copied there and the old slot
    /// left free.
    MovedToHome { from: usize, to: usize },
    /// The member's home slot was occupied; it was copied into a cellar slot (possibly its own
    /// just-vacated one) and linked as the new chain tail.
    ChainedToCellar { from: usize, to: usize },
}

impl<V, B: BuildHasher> CellarMap<V, B> {
    /// Frees the slot at `index`, which holds `key`, returning its value after re-homing the
    /// surviving members of its chain.
    pub(crate) fn release_slot(&mut self, index: usize, key: &[u8]) -> V {
        let home = self.home_index(key);

        // Collect the survivors in chain order before any link is touched.
        let mut survivors = Vec::new();
        let mut at = Some(home);
        while let Some(member) = at {
            if member != index {
                survivors.push(member);
            }
            at = self.slots[member].chain_next;
        }

        let slot = &mut self.slots[index];
        let value = match slot.value.take() {
            Some(value) => value,
            None => unreachable!("an occupied slot always holds a value"),
        };
        slot.used = false;
        slot.chain_next = None;
        self.taken -= 1;

        for survivor in survivors {
            self.rehome(survivor);
        }

        value
    }

    /// Re-homes the single chain member at `from`: vacates it, recomputes its true home from
    /// the stored key, and puts it back by the cheapest correct route.
    pub(crate) fn rehome(&mut self, from: usize) -> Rehome {
        let home = self.home_of_slot(from);

        let slot = &mut self.slots[from];
        slot.used = false;
        slot.chain_next = None;

        if home == from {
            self.slots[from].used = true;
            return Rehome::AlreadyHome { index: from };
        }

        if !self.slots[home].used {
            self.move_slot(from, home);
            return Rehome::MovedToHome { from, to: home };
        }

        let mut tail = home;
        while let Some(next) = self.slots[tail].chain_next {
            tail = next;
        }

        let to = match self.free_cellar_slot() {
            Some(to) => to,
            // The slot vacated above is itself a free cellar slot.
            None => unreachable!("a vacated cellar slot is always available while re-homing"),
        };

        if to == from {
            self.slots[from].used = true;
        } else {
            self.move_slot(from, to);
        }
        self.slots[tail].chain_next = Some(to);

        Rehome::ChainedToCellar { from, to }
    }

    /// Copies the entry at `from` into the free slot at `to`, leaving `from` free. The
    /// overflow span handle travels with the key; a span retained by `to` from an earlier
    /// tenant is abandoned to the arena when displaced.
    fn move_slot(&mut self, from: usize, to: usize) {
        debug_assert!(!self.slots[to].used, "moving into an occupied slot");

        let source = &mut self.slots[from];
        let key_len = source.key_len;
        let key_prefix = source.key_prefix;
        let key_overflow = source.key_overflow.take();
        let value = source.value.take();
        source.key_len = 0;

        let dest = &mut self.slots[to];
        dest.used = true;
        dest.key_len = key_len;
        dest.key_prefix = key_prefix;
        if key_overflow.is_some() {
            dest.key_overflow = key_overflow;
        }
        dest.value = value;
        dest.chain_next = None;
    }

    /// Recomputes the home index of the slot at `index` by rehashing its stored key. Long keys
    /// are reassembled into a transient buffer, since the hasher consumes one contiguous span.
    fn home_of_slot(&self, index: usize) -> usize {
        let slot = &self.slots[index];

        let hash = if slot.key_len <= KEY_PREFIX_CAP {
            self.hasher.hash_one(&slot.key_prefix[..slot.key_len])
        } else {
            let span = match slot.key_overflow {
                Some(span) => span,
                None => unreachable!("a key longer than the prefix always has an overflow span"),
            };

            let mut key = Vec::with_capacity(slot.key_len);
            key.extend_from_slice(&slot.key_prefix);
            key.extend_from_slice(&self.arena.bytes(span)[..slot.key_len - KEY_PREFIX_CAP]);
            self.hasher.hash_one(&key)
        };

        (hash % self.home_cap as u64) as usize
    }
}
