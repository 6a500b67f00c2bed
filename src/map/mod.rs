//! A module containing [`CellarMap`] and associated types.
//!
//! The map resolves collisions by coalesced hashing: the slot array is split at construction
//! into an addressable *home* region and a *cellar*, and keys whose home slot is taken are
//! linked into a chain of cellar slots claimed from the highest cellar index downward. Removal
//! re-homes the rest of the removed entry's chain so that a live chain never passes through a
//! freed slot.
//!
//! Besides the map itself, the module holds its construction [`MapOptions`], the error types,
//! and the read-only [`SlotView`]/[`Slots`] introspection surface that debug tooling and the
//! test suite assert exact layouts through.
//!
//! [`CellarMap`] is also re-exported under the parent module.

mod error;
mod map;
mod options;
mod recompact;
mod slot;
mod view;

pub use error::*;
pub use map::*;
pub use options::*;
pub use slot::KEY_PREFIX_CAP;
pub use view::*;
