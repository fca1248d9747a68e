use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{
    cursor::Cursor,
    error::{Error, Result},
    iterable::Iterable,
};

pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env())
        .try_init();
}

/// Counts down from `n` to 1. Supports nothing beyond the required methods.
pub struct Countdown {
    remaining: u32,
}

impl Countdown {
    pub fn new(n: u32) -> Countdown {
        Countdown { remaining: n }
    }
}

impl Cursor for Countdown {
    type Item = u32;

    fn has_next(&self) -> bool {
        self.remaining > 0
    }

    fn next(&mut self) -> Option<u32> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.remaining;
        self.remaining -= 1;
        Some(current)
    }
}

/// Cursor over a borrowed `Vec` that supports `remove` and `reset`.
pub struct VecCursor<'a, T> {
    items: &'a mut Vec<T>,
    pos: usize,
    last: Option<usize>,
}

impl<'a, T> VecCursor<'a, T> {
    pub fn new(items: &'a mut Vec<T>) -> VecCursor<'a, T> {
        VecCursor {
            items,
            pos: 0,
            last: None,
        }
    }
}

impl<'a, T: Clone> Cursor for VecCursor<'a, T> {
    type Item = T;

    fn has_next(&self) -> bool {
        self.pos < self.items.len()
    }

    fn next(&mut self) -> Option<T> {
        let item = self.items.get(self.pos)?.clone();
        self.last = Some(self.pos);
        self.pos += 1;
        Some(item)
    }

    fn remove(&mut self) -> Result<T> {
        let idx = self.last.take().ok_or(Error::IllegalState {
            operation: "remove",
            reason: "no element returned since the last remove or reset",
        })?;
        self.pos = idx;
        Ok(self.items.remove(idx))
    }

    fn reset(&mut self) -> Result<()> {
        self.pos = 0;
        self.last = None;
        Ok(())
    }

    fn supports_remove(&self) -> bool {
        true
    }

    fn supports_reset(&self) -> bool {
        true
    }
}

/// Read-only collection handing out independent slice cursors.
pub struct Shelf<T> {
    items: Vec<T>,
}

impl<T> Shelf<T> {
    pub fn new(items: Vec<T>) -> Shelf<T> {
        Shelf { items }
    }
}

pub struct ShelfCursor<'a, T> {
    items: &'a [T],
    pos: usize,
}

impl<'a, T> Cursor for ShelfCursor<'a, T> {
    type Item = &'a T;

    fn has_next(&self) -> bool {
        self.pos < self.items.len()
    }

    fn next(&mut self) -> Option<&'a T> {
        let item = self.items.get(self.pos)?;
        self.pos += 1;
        Some(item)
    }
}

impl<T> Iterable for Shelf<T> {
    type Item<'a> = &'a T where Self: 'a;
    type Cursor<'a> = ShelfCursor<'a, T> where Self: 'a;

    fn cursor(&self) -> ShelfCursor<'_, T> {
        ShelfCursor {
            items: &self.items,
            pos: 0,
        }
    }
}
