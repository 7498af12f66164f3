//! Borrowing and owning iterators over [`DynamicArray`](crate::DynamicArray).
//!
//! All of them walk the live slots only, front to back (or back to front).

use std::iter::FusedIterator;

#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    slots: std::slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(slots: &'a [Option<T>]) -> Self {
        Self {
            slots: slots.iter(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.by_ref().flatten().next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.slots.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.by_ref().rev().flatten().next()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

#[derive(Debug)]
pub struct IterMut<'a, T> {
    slots: std::slice::IterMut<'a, Option<T>>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(slots: &'a mut [Option<T>]) -> Self {
        Self {
            slots: slots.iter_mut(),
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.by_ref().flatten().next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.slots.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.by_ref().rev().flatten().next()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator, created by `DynamicArray::into_iter`.
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    slots: std::vec::IntoIter<Option<T>>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(slots: Box<[Option<T>]>, len: usize) -> Self {
        let mut slots = slots.into_vec();
        slots.truncate(len);
        Self {
            slots: slots.into_iter(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.by_ref().flatten().next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.slots.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.by_ref().rev().flatten().next()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
