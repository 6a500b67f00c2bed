#![cfg(test)]

use super::*;

#[test]
fn test_alloc_is_zeroed_and_sequential() {
    let mut arena = Arena::with_chunk_size(64);

    let a = arena.alloc(8);
    let b = arena.alloc(8);

    assert_eq!(a, Span { chunk: 0, start: 0, len: 8 });
    assert_eq!(
        b,
        Span { chunk: 0, start: 8, len: 8 },
        "Allocations within a chunk should be bumped forward back to back."
    );
    assert_eq!(arena.bytes(a), &[0; 8], "Fresh allocations should be zeroed.");
    assert_eq!(arena.allocated(), 16);
    assert_eq!(arena.chunk_count(), 1);
}

#[test]
fn test_spans_survive_chunk_growth() {
    let mut arena = Arena::with_chunk_size(16);

    let first = arena.alloc(10);
    arena.bytes_mut(first).copy_from_slice(b"0123456789");

    // Doesn't fit in the remainder of the first chunk.
    let second = arena.alloc(12);
    assert_eq!(second.chunk, 1, "An allocation that doesn't fit should open a new chunk.");

    arena.bytes_mut(second).copy_from_slice(b"abcdefghijkl");
    assert_eq!(
        arena.bytes(first),
        b"0123456789",
        "Growing the arena shouldn't disturb bytes behind earlier spans."
    );
    assert_eq!(arena.bytes(second), b"abcdefghijkl");
    assert_eq!(arena.chunk_count(), 2);
}

#[test]
fn test_oversized_alloc_gets_own_chunk() {
    let mut arena = Arena::with_chunk_size(16);

    let big = arena.alloc(100);
    assert_eq!(big.len(), 100);
    assert_eq!(arena.bytes(big).len(), 100);
    assert_eq!(arena.chunk_count(), 1, "A request above the chunk size should be granted whole.");

    let small = arena.alloc(4);
    arena.bytes_mut(small).copy_from_slice(b"abcd");
    assert_eq!(arena.bytes(small), b"abcd");
    assert_eq!(arena.allocated(), 104);
}

#[test]
fn test_empty_span() {
    let mut arena = Arena::new();

    let empty = arena.alloc(0);
    assert!(empty.is_empty());
    assert_eq!(arena.bytes(empty), &[] as &[u8], "An empty span should read as no bytes.");
    assert_eq!(arena.allocated(), 0, "Zero-length allocations shouldn't consume anything.");
    assert_eq!(arena.chunk_count(), 0);
}
