//! Small capability traits shared by sequence containers.
//!
//! Generic code is written against these instead of a concrete collection, so
//! that `Vec`, slices, `SmallVec`, `ArrayVec` and `dynarray::DynamicArray` can
//! be used interchangeably.

#![forbid(clippy::unconditional_recursion)]

pub mod array;
pub mod sets;
pub mod slice;
pub mod vec;

#[cfg(feature = "arrayvec")]
pub mod arrayvec;
#[cfg(feature = "smallvec")]
pub mod smallvec;

pub trait HasLength {
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
}

/// Ordered containers that can grow and shrink.
///
/// Index-based methods panic when the index is out of bounds, same as the
/// corresponding `Vec` methods.
pub trait Resizable {
    type Item;
    fn resize_with(&mut self, new_len: usize, f: impl FnMut() -> Self::Item);
    fn push(&mut self, item: Self::Item);
    fn pop(&mut self) -> Option<Self::Item>;
    fn insert(&mut self, index: usize, item: Self::Item);
    fn remove(&mut self, index: usize) -> Self::Item;
    fn swap_remove(&mut self, index: usize) -> Self::Item;
    /// Replaces the item at `index`, returning the old one
    fn replace(&mut self, index: usize, item: Self::Item) -> Self::Item;
    fn swap(&mut self, a: usize, b: usize);
}

/// Containers that can be traversed front to back by reference.
pub trait Iterable {
    type Item;
    fn iter(&self) -> impl Iterator<Item = &Self::Item>;
}

/// Membership test used by bulk remove/retain operations.
pub trait Contains<T: ?Sized> {
    fn contains(&self, item: &T) -> bool;
}

impl<T: ?Sized, C: Contains<T> + ?Sized> Contains<T> for &C {
    fn contains(&self, item: &T) -> bool {
        C::contains(*self, item)
    }
}
