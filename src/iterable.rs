use crate::{adapter::Iter, cursor::Cursor};

/// A type that hands out cursors over its elements.
///
/// Every call to [`Iterable::cursor`] starts a new traversal whose position
/// is independent of any other cursor obtained from the same value.
pub trait Iterable {
    // The cursor may borrow from `self`, so both the cursor and what it
    // yields are generic over that borrow.
    type Item<'a>
    where
        Self: 'a;

    type Cursor<'a>: Cursor<Item = Self::Item<'a>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_>;

    /// Native iterator over a fresh cursor, for use with `for` loops and the
    /// std adapters.
    fn iter(&self) -> Iter<Self::Cursor<'_>> {
        Iter::new(self.cursor())
    }
}

/// A type that can only be traversed once because it is its own cursor.
///
/// Every [`Cursor`] is single-pass iterable: [`SinglePassIterable::cursor`]
/// returns the cursor itself, so a second traversal continues where the first
/// one stopped.
pub trait SinglePassIterable {
    type Cursor: Cursor + ?Sized;

    fn cursor(&mut self) -> &mut Self::Cursor;
}

impl<C: Cursor + ?Sized> SinglePassIterable for C {
    type Cursor = C;

    fn cursor(&mut self) -> &mut C {
        self
    }
}
