//! Bridges between [`Cursor`] and [`std::iter::Iterator`].

use crate::cursor::Cursor;

/// Native iterator over any cursor, created by [`Cursor::iter`],
/// [`Cursor::into_native`] or [`crate::Iterable::iter`].
///
/// Each step consults [`Cursor::has_next`] before pulling an element, so a
/// cursor that reports exhaustion is never advanced. Not fused: resetting
/// the cursor through [`Iter::get_mut`] after `None` resumes iteration.
#[derive(Debug, Clone)]
pub struct Iter<C> {
    cursor: C,
}

impl<C> Iter<C>
where
    C: Cursor,
{
    /// Wraps `cursor` without moving it.
    pub fn new(cursor: C) -> Iter<C> {
        Iter { cursor }
    }

    /// The wrapped cursor, e.g. to ask [`Cursor::state`].
    pub fn get_ref(&self) -> &C {
        &self.cursor
    }

    /// Gives access to the wrapped cursor, e.g. to call [`Cursor::remove`]
    /// on the element the iterator just produced.
    pub fn get_mut(&mut self) -> &mut C {
        &mut self.cursor
    }

    /// Unwraps the cursor, positioned where iteration stopped.
    pub fn into_inner(self) -> C {
        self.cursor
    }
}

impl<C> Iterator for Iter<C>
where
    C: Cursor,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.cursor.has_next() {
            tracing::trace!("cursor exhausted");
            return None;
        }
        self.cursor.next()
    }
}

/// Cursor over a native iterator, created by [`from_std`].
///
/// Holds one element of lookahead so [`Cursor::has_next`] can answer without
/// advancing anything observable.
#[derive(Debug, Clone)]
pub struct FromIter<I: Iterator> {
    iter: I,
    peeked: Option<I::Item>,
}

/// Turns any std iterator into a [`Cursor`]. Pulls the first element
/// eagerly.
pub fn from_std<I: IntoIterator>(iterable: I) -> FromIter<I::IntoIter> {
    let mut iter = iterable.into_iter();
    let peeked = iter.next();
    FromIter { iter, peeked }
}

impl<I: Iterator> Cursor for FromIter<I> {
    type Item = I::Item;

    fn has_next(&self) -> bool {
        self.peeked.is_some()
    }

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.peeked.take()?;
        self.peeked = self.iter.next();
        Some(current)
    }
}
