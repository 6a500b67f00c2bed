const DEFAULT_CHUNK_SIZE: usize = 4096;

/// A monotonic bump allocator over a list of byte chunks.
///
/// Allocation only ever moves forward: each [`alloc`](Arena::alloc) claims the next `len` bytes
/// of the current chunk, starting a new chunk when the current one can't fit the request.
/// Individual allocations cannot be freed; the entire arena is released when it is dropped.
///
/// Because a [`Span`] records a chunk index and an offset instead of a pointer, later
/// allocations (including ones that open new chunks) never invalidate earlier spans.
#[derive(Debug)]
pub struct Arena {
    pub(crate) chunks: Vec<Vec<u8>>,
    chunk_size: usize,
    allocated: usize,
}

/// A byte range handed out by an [`Arena`]: a chunk index, a start offset and a length.
///
/// A Span is a plain value; reading or writing the bytes it names goes back through the arena
/// via [`Arena::bytes`] and [`Arena::bytes_mut`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub(crate) chunk: u32,
    pub(crate) start: u32,
    pub(crate) len: u32,
}

impl Span {
    /// The empty span. Valid for any arena, names no bytes.
    pub const EMPTY: Span = Span { chunk: 0, start: 0, len: 0 };

    /// Returns the number of bytes this span names.
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Returns true if the span names no bytes.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Arena {
    /// Creates a new Arena with the default chunk size. No memory is allocated until the first
    /// [`alloc`](Arena::alloc).
    pub const fn new() -> Arena {
        Arena::with_chunk_size(DEFAULT_CHUNK_SIZE)
    }

    /// Creates a new Arena whose chunks are at least `chunk_size` bytes. A single allocation
    /// larger than `chunk_size` gets a chunk of its own.
    pub const fn with_chunk_size(chunk_size: usize) -> Arena {
        Arena {
            chunks: Vec::new(),
            chunk_size,
            allocated: 0,
        }
    }

    /// Claims the next `len` bytes, zeroed, and returns the [`Span`] naming them.
    ///
    /// The bytes stay reserved for the lifetime of the arena. A caller that outgrows a span is
    /// expected to `alloc` a bigger one and abandon the old: the abandoned bytes are garbage
    /// until the arena is dropped, which is the documented cost of never fragmenting and never
    /// moving.
    pub fn alloc(&mut self, len: usize) -> Span {
        if len == 0 {
            return Span::EMPTY;
        }

        let fits_in_last = match self.chunks.last() {
            Some(chunk) => chunk.capacity() - chunk.len() >= len,
            None => false,
        };

        if !fits_in_last {
            self.chunks.push(Vec::with_capacity(len.max(self.chunk_size)));
        }

        // UNCHECKED: a chunk was pushed above if the list was empty.
        let chunk_index = self.chunks.len() - 1;
        let chunk = &mut self.chunks[chunk_index];

        let start = chunk.len();
        chunk.resize(start + len, 0);
        self.allocated += len;

        Span {
            chunk: chunk_index as u32,
            start: start as u32,
            len: len as u32,
        }
    }

    /// Returns the bytes named by `span`.
    ///
    /// # Panics
    /// Panics if `span` was produced by a different arena and is out of range for this one.
    pub fn bytes(&self, span: Span) -> &[u8] {
        if span.is_empty() {
            return &[];
        }

        &self.chunks[span.chunk as usize][span.start as usize..(span.start + span.len) as usize]
    }

    /// Returns the bytes named by `span`, mutably.
    ///
    /// # Panics
    /// Panics if `span` was produced by a different arena and is out of range for this one.
    pub fn bytes_mut(&mut self, span: Span) -> &mut [u8] {
        if span.is_empty() {
            return &mut [];
        }

        &mut self.chunks[span.chunk as usize]
            [span.start as usize..(span.start + span.len) as usize]
    }

    /// Returns the total number of bytes handed out so far, abandoned spans included.
    pub const fn allocated(&self) -> usize {
        self.allocated
    }

    /// Returns the number of chunks backing the arena.
    pub const fn chunk_count(&self) -> usize {
        self.chunks.len()
    }
}

impl Default for Arena {
    fn default() -> Self {
        Arena::new()
    }
}
