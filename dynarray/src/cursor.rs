//! Cursors that can modify a [`DynamicArray`] while walking it.
//!
//! A cursor sits *between* elements. `next` yields the element after the
//! cursor and moves past it, `previous` yields the element before it and
//! moves back. The element yielded last is the *current* element, which can
//! be removed or replaced. Removing or inserting through the cursor keeps its
//! position consistent with the new contents.
//!
//! A cursor borrows the array mutably, so nothing else can change the array
//! while a traversal is in progress.

use crate::error::{DynamicArrayError, Result};
use crate::DynamicArray;

/// Bidirectional cursor over a [`DynamicArray`].
#[derive(Debug)]
pub struct ListCursor<'a, T> {
    array: &'a mut DynamicArray<T>,
    /// Index of the element `next` would yield.
    next: usize,
    /// Index of the current element, if there is one.
    last_returned: Option<usize>,
}

impl<'a, T> ListCursor<'a, T> {
    pub(crate) fn new(array: &'a mut DynamicArray<T>, index: usize) -> Self {
        debug_assert!(index <= array.len());
        Self {
            array,
            next: index,
            last_returned: None,
        }
    }

    pub fn has_next(&self) -> bool {
        self.next < self.array.len()
    }

    pub fn has_previous(&self) -> bool {
        self.next > 0
    }

    /// Moves past the next element and returns it.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<&T> {
        if !self.has_next() {
            return Err(DynamicArrayError::NoSuchElement);
        }
        let index = self.next;
        self.next += 1;
        self.last_returned = Some(index);
        self.array.get(index)
    }

    /// Moves back over the previous element and returns it.
    pub fn previous(&mut self) -> Result<&T> {
        if !self.has_previous() {
            return Err(DynamicArrayError::NoSuchElement);
        }
        self.next -= 1;
        self.last_returned = Some(self.next);
        self.array.get(self.next)
    }

    /// Index of the element a call to [`next`](Self::next) would return.
    pub fn next_index(&self) -> usize {
        self.next
    }

    /// Index of the element a call to [`previous`](Self::previous) would
    /// return, `None` at the start.
    pub fn previous_index(&self) -> Option<usize> {
        self.next.checked_sub(1)
    }

    /// Removes the current element.
    ///
    /// Fails with [`IllegalState`](DynamicArrayError::IllegalState) if no
    /// element was yielded yet, or the current one was already removed or
    /// followed by an insertion.
    pub fn remove_current(&mut self) -> Result<T> {
        let index = self.last_returned.ok_or(DynamicArrayError::IllegalState)?;
        let value = self
            .array
            .shift_out(index)
            .ok_or(DynamicArrayError::IllegalState)?;
        if index < self.next {
            self.next -= 1;
        }
        self.last_returned = None;
        Ok(value)
    }

    /// Replaces the current element, returning the old one.
    pub fn set_current(&mut self, value: T) -> Result<T> {
        let index = self.last_returned.ok_or(DynamicArrayError::IllegalState)?;
        self.array.set(index, value)
    }

    /// Inserts `value` at the cursor position and moves past it.
    ///
    /// A following [`next`](Self::next) is unaffected, a following
    /// [`previous`](Self::previous) returns the new element.
    pub fn insert_before(&mut self, value: T) {
        self.array.shift_in(self.next, value);
        self.next += 1;
        self.last_returned = None;
    }
}

/// Forward-only cursor over a [`DynamicArray`].
#[derive(Debug)]
pub struct ForwardCursor<'a, T> {
    inner: ListCursor<'a, T>,
}

impl<'a, T> ForwardCursor<'a, T> {
    pub(crate) fn new(array: &'a mut DynamicArray<T>) -> Self {
        Self {
            inner: ListCursor::new(array, 0),
        }
    }

    pub fn has_next(&self) -> bool {
        self.inner.has_next()
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<&T> {
        self.inner.next()
    }

    /// Removes the element last returned by [`next`](Self::next).
    pub fn remove_current(&mut self) -> Result<T> {
        self.inner.remove_current()
    }
}
