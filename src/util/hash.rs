use std::hash::{BuildHasher, Hasher};

/// A test hasher whose digest is simply the first byte written, so a key's home index can be
/// chosen by its first character. Length-prefix writes from slice hashing are discarded.
#[derive(Debug)]
#[allow(unused)]
pub struct FirstByteHasher {
    first: u64,
    seen: bool,
}

impl Hasher for FirstByteHasher {
    fn finish(&self) -> u64 {
        self.first
    }

    fn write(&mut self, bytes: &[u8]) {
        if !self.seen && !bytes.is_empty() {
            self.first = bytes[0] as u64;
            self.seen = true;
        }
    }

    fn write_usize(&mut self, _: usize) {
        // Slice hashing prefixes the data with its length; home indices should depend on the
        // key bytes alone.
    }
}

#[derive(Debug, Default)]
#[allow(unused)]
pub struct FirstByteHasherBuilder;

impl BuildHasher for FirstByteHasherBuilder {
    type Hasher = FirstByteHasher;

    fn build_hasher(&self) -> Self::Hasher {
        FirstByteHasher {
            first: 0,
            seen: false,
        }
    }
}
