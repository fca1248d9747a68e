//! A small cursor-style iteration protocol.
//!
//! Implement [`Cursor`] by answering [`Cursor::has_next`] and
//! [`Cursor::next`]; draining, native `for`-loop support, and the optional
//! `remove`/`reset` capabilities come with it. Collections implement
//! [`Iterable`] to hand out independent cursors.

pub mod adapter;
pub mod cursor;
pub mod error;
pub mod guard;
pub mod iterable;

#[cfg(test)]
mod test_utils;

pub use adapter::{from_std, FromIter, Iter};
pub use cursor::{Cursor, CursorState};
pub use error::{Error, Result};
pub use guard::ModificationGuard;
pub use iterable::{Iterable, SinglePassIterable};
