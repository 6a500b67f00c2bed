//! Deterministic seeded hashing for byte-string keys.
//!
//! [`CellarMap`](crate::map::CellarMap) is generic over [`BuildHasher`] like any other map, but
//! its default is deliberately *not* randomized: slot layout (which key lands in which home
//! slot and which collision claims which cellar slot) is observable through the introspection
//! API, and reproducibility of that layout is part of the contract. [`SeededFnv`] provides a fixed
//! 64-bit FNV-1a digest, with an optional seed for callers that want distinct-but-deterministic
//! layouts per map.

use std::hash::{BuildHasher, Hasher};

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// A [`BuildHasher`] producing deterministic seeded FNV-1a 64 hashes.
///
/// Two maps built with the same seed hash every key identically, run to run and build to build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeededFnv {
    seed: u64,
}

impl SeededFnv {
    /// Creates a builder whose hashers fold `seed` into the FNV offset basis.
    pub const fn new(seed: u64) -> SeededFnv {
        SeededFnv { seed }
    }
}

impl BuildHasher for SeededFnv {
    type Hasher = Fnv1aHasher;

    fn build_hasher(&self) -> Self::Hasher {
        Fnv1aHasher {
            state: FNV_OFFSET_BASIS ^ self.seed,
        }
    }
}

/// The streaming state of a single FNV-1a 64 digest.
#[derive(Debug)]
pub struct Fnv1aHasher {
    state: u64,
}

impl Hasher for Fnv1aHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.state ^= *byte as u64;
            self.state = self.state.wrapping_mul(FNV_PRIME);
        }
    }
}
