//! The cursor protocol and the behaviour every cursor gets for free.
//!
//! A [`Cursor`] only has to answer two questions: is there another element
//! ([`Cursor::has_next`]) and what is it ([`Cursor::next`]). Draining,
//! native iteration, and the optional `remove`/`reset` capabilities are
//! provided on top of those two.

use crate::{
    adapter::Iter,
    error::{Error, Result},
};

/// Observable position of a cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    /// A call to [`Cursor::next`] yields an element.
    Active,
    /// The cursor has passed its last element. Only a supported
    /// [`Cursor::reset`] leaves this state.
    Exhausted,
}

/// A stateful cursor over a sequence of elements.
///
/// Successive calls to [`Cursor::next`] produce elements in a stable order.
/// Exhaustion is signalled by `None`, so a sequence of `Option<T>` is
/// traversed as `Some(Some(_))`/`Some(None)` and never confused with the end.
///
/// `remove` and `reset` are optional. An implementor that overrides one of
/// them must also override the matching `supports_remove`/`supports_reset`
/// to return `true`; the two are not linked automatically.
///
/// [`Cursor::for_each`] and [`Cursor::iter`] share names with
/// [`Iterator::for_each`] and [`crate::Iterable::iter`]. A type implementing
/// `Cursor` alongside either trait has to call them with qualified syntax,
/// e.g. `Cursor::for_each(&mut c, f)`.
pub trait Cursor {
    type Item;

    /// Returns true if the following call to [`Cursor::next`] yields an
    /// element. Repeated calls without an intervening `next` agree.
    fn has_next(&self) -> bool;

    /// Returns the next element and advances one position, or `None` once
    /// the cursor is exhausted.
    fn next(&mut self) -> Option<Self::Item>;

    /// Applies `f` to every remaining element in traversal order, leaving the
    /// cursor exhausted.
    fn for_each<F>(&mut self, mut f: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        for element in Iter::new(self) {
            f(element);
        }
    }

    /// Removes the element last returned by [`Cursor::next`] from the
    /// underlying structure and returns it.
    ///
    /// Fails with [`Error::Unsupported`] unless overridden. Implementations
    /// should fail with [`Error::IllegalState`] when there is no element to
    /// remove.
    fn remove(&mut self) -> Result<Self::Item> {
        let err = Error::unsupported::<Self>("remove");
        tracing::debug!("{}", err);
        Err(err)
    }

    /// Rewinds to the initial position. Removals already applied through
    /// [`Cursor::remove`] stay applied.
    ///
    /// Fails with [`Error::Unsupported`] unless overridden.
    fn reset(&mut self) -> Result<()> {
        let err = Error::unsupported::<Self>("reset");
        tracing::debug!("{}", err);
        Err(err)
    }

    /// Whether [`Cursor::remove`] is overridden. Override together with it.
    fn supports_remove(&self) -> bool {
        false
    }

    /// Whether [`Cursor::reset`] is overridden. Override together with it.
    fn supports_reset(&self) -> bool {
        false
    }

    fn state(&self) -> CursorState {
        if self.has_next() {
            CursorState::Active
        } else {
            CursorState::Exhausted
        }
    }

    /// Borrows the cursor as a native [`std::iter::Iterator`].
    ///
    /// The cursor stays usable afterwards, positioned wherever the native
    /// iteration stopped.
    fn iter(&mut self) -> Iter<&mut Self>
    where
        Self: Sized,
    {
        Iter::new(self)
    }

    /// Converts the cursor into a native [`std::iter::Iterator`].
    fn into_native(self) -> Iter<Self>
    where
        Self: Sized,
    {
        Iter::new(self)
    }
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Item = C::Item;

    fn has_next(&self) -> bool {
        (**self).has_next()
    }

    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }

    fn remove(&mut self) -> Result<Self::Item> {
        (**self).remove()
    }

    fn reset(&mut self) -> Result<()> {
        (**self).reset()
    }

    fn supports_remove(&self) -> bool {
        (**self).supports_remove()
    }

    fn supports_reset(&self) -> bool {
        (**self).supports_reset()
    }
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Item = C::Item;

    fn has_next(&self) -> bool {
        (**self).has_next()
    }

    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }

    fn remove(&mut self) -> Result<Self::Item> {
        (**self).remove()
    }

    fn reset(&mut self) -> Result<()> {
        (**self).reset()
    }

    fn supports_remove(&self) -> bool {
        (**self).supports_remove()
    }

    fn supports_reset(&self) -> bool {
        (**self).supports_reset()
    }
}
