/// Construction-time configuration for a [`CellarMap`](super::CellarMap).
///
/// There is no ambient or global configuration; everything the map needs is passed here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapOptions {
    /// The fraction of the total capacity that is directly addressable by a hash (the home
    /// region); the rest of the slots form the cellar. Must be strictly between 0 and 1 so
    /// that both regions are non-empty.
    pub address_scale: f64,

    /// A hint for the expected key length, used to pre-size overflow buffers for keys longer
    /// than the inline prefix. 0 means no hint.
    pub average_key_len: usize,
}

/// The default addressable fraction. Cellar sizes around 14% of the table are the classic
/// sweet spot for coalesced hashing.
pub const DEFAULT_ADDRESS_SCALE: f64 = 0.863;

impl Default for MapOptions {
    fn default() -> Self {
        MapOptions {
            address_scale: DEFAULT_ADDRESS_SCALE,
            average_key_len: 0,
        }
    }
}
