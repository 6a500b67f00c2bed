//! A fixed-capacity map from byte-string keys to values, built on coalesced hashing.
//!
//! # Purpose
//! Most hash maps buy their ergonomics with reallocation: exceed the load factor and the whole
//! table is rebuilt somewhere else. This crate is for the situations where that is exactly what
//! you don't want, such as interning tables whose capacity is decided once up front and where
//! "full" is an answer rather than a trigger. The table is sized at
//! construction and never moves; running out of room is the ordinary, recoverable
//! [`MapFull`](map::MapFull) result.
//!
//! # Method
//! The slot array is split into an addressable *home* region, which hashes can target directly,
//! and a *cellar*, which only ever receives collision overflow. Keys that collide on a home slot
//! are linked into a chain of cellar slots, claimed deterministically from the highest cellar
//! index downward. Deleting an entry re-homes every other member of its chain so that no live
//! chain ever passes through a freed slot; see [`map`] for the details.
//!
//! Keys are plain byte strings. The first 47 bytes of a key live inline in its slot; anything
//! longer spills into a bump [`Arena`](arena::Arena) that is only torn down with the map itself.
//!
//! # Error Handling
//! Operations that can genuinely fail return strongly typed errors (enums and ZST structs
//! implementing [`Error`](std::error::Error)) rather than anything dynamic. Lookup misses are
//! not errors: `get` and `remove` return [`Option`], the same way the standard library's maps
//! report an absent key.
//!
//! # Dependencies
//! Hashing goes through [`std::hash::BuildHasher`], with a deterministic seeded FNV-1a default
//! ([`SeededFnv`](hash::SeededFnv)) because reproducible slot layouts are part of this crate's
//! contract. The only third-party dependency is a set of derive macros for the error types.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod arena;
pub mod hash;
pub mod map;

pub(crate) mod util;
