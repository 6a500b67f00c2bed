//! A module containing [`Arena`] and [`Span`], the bump allocator behind overflow key storage.
//!
//! The arena hands out byte ranges addressed by chunk and offset rather than by pointer, so a
//! [`Span`] stays valid no matter how the arena grows afterwards. Nothing is ever freed
//! individually: dropping the arena releases everything at once, and a buffer abandoned by a
//! grow simply stays garbage until then. That trade is deliberate; see [`Arena::alloc`].

mod arena;
mod tests;

pub use arena::*;
