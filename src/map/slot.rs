use crate::arena::{Arena, Span};

/// The number of key bytes stored inline in a slot. Keys at most this long never touch the
/// arena; longer keys keep their first `KEY_PREFIX_CAP` bytes inline and spill the rest into
/// an overflow span.
pub const KEY_PREFIX_CAP: usize = 47;

/// One record of the fixed slot array: occupancy, split key storage, the collision chain link
/// and the value payload.
///
/// Slots are never moved or reallocated; entries migrate between slots by copying these fields.
/// `key_overflow` is deliberately *not* cleared when a slot is freed: the span is retained so
/// the next long key stored here can reuse it without allocating.
#[derive(Debug)]
pub(crate) struct Slot<V> {
    pub(crate) used: bool,
    pub(crate) key_len: usize,
    pub(crate) key_prefix: [u8; KEY_PREFIX_CAP],
    pub(crate) key_overflow: Option<Span>,
    pub(crate) chain_next: Option<usize>,
    pub(crate) value: Option<V>,
}

impl<V> Slot<V> {
    pub(crate) const fn empty() -> Slot<V> {
        Slot {
            used: false,
            key_len: 0,
            key_prefix: [0; KEY_PREFIX_CAP],
            key_overflow: None,
            chain_next: None,
            value: None,
        }
    }

    /// Copies `key` into this slot: up to [`KEY_PREFIX_CAP`] bytes inline, the remainder into
    /// the overflow span.
    ///
    /// An existing span is reused in place whenever it is long enough; otherwise a fresh span
    /// of `max(2 * remainder, min_overflow)` bytes is allocated and the old one abandoned to
    /// the arena. Growing by twice the *required* size (rather than twice the old capacity)
    /// amortizes repeated growth while keeping the abandoned tail small.
    pub(crate) fn store_key(&mut self, arena: &mut Arena, key: &[u8], min_overflow: usize) {
        self.key_len = key.len();

        let inline = key.len().min(KEY_PREFIX_CAP);
        self.key_prefix[..inline].copy_from_slice(&key[..inline]);

        let rest = &key[inline..];
        if !rest.is_empty() {
            let span = match self.key_overflow {
                Some(span) if span.len() >= rest.len() => span,
                _ => arena.alloc((rest.len() * 2).max(min_overflow)),
            };

            arena.bytes_mut(span)[..rest.len()].copy_from_slice(rest);
            self.key_overflow = Some(span);
        }
        // A short key leaves any retained span in place for a later tenant.
    }

    /// Returns true if this slot's stored key is byte-for-byte equal to `key`. Read-only;
    /// never allocates.
    pub(crate) fn key_matches(&self, arena: &Arena, key: &[u8]) -> bool {
        if self.key_len != key.len() {
            return false;
        }

        let inline = key.len().min(KEY_PREFIX_CAP);
        if self.key_prefix[..inline] != key[..inline] {
            return false;
        }

        if key.len() > KEY_PREFIX_CAP {
            match self.key_overflow {
                Some(span) => arena.bytes(span)[..key.len() - KEY_PREFIX_CAP] == key[inline..],
                None => false,
            }
        } else {
            true
        }
    }

    /// The inline portion of the stored key.
    pub(crate) fn key_prefix_bytes(&self) -> &[u8] {
        &self.key_prefix[..self.key_len.min(KEY_PREFIX_CAP)]
    }
}
