use crate::{Contains, HasLength, Iterable, Resizable};
use smallvec::SmallVec;

impl<const N: usize, T> Resizable for SmallVec<[T; N]> {
    type Item = T;

    fn resize_with(&mut self, new_len: usize, f: impl FnMut() -> Self::Item) {
        self.resize_with(new_len, f)
    }

    fn push(&mut self, item: Self::Item) {
        self.push(item)
    }

    fn pop(&mut self) -> Option<Self::Item> {
        self.pop()
    }

    fn insert(&mut self, index: usize, item: Self::Item) {
        self.insert(index, item)
    }

    fn remove(&mut self, index: usize) -> Self::Item {
        self.remove(index)
    }

    fn swap_remove(&mut self, index: usize) -> Self::Item {
        self.swap_remove(index)
    }

    fn replace(&mut self, index: usize, item: Self::Item) -> Self::Item {
        std::mem::replace(&mut self[index], item)
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b)
    }
}

impl<const N: usize, T> HasLength for SmallVec<[T; N]> {
    fn len(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

impl<const N: usize, T> Iterable for SmallVec<[T; N]> {
    type Item = T;

    fn iter(&self) -> impl Iterator<Item = &Self::Item> {
        self.as_slice().iter()
    }
}

impl<const N: usize, T: PartialEq> Contains<T> for SmallVec<[T; N]> {
    fn contains(&self, item: &T) -> bool {
        self.as_slice().contains(item)
    }
}
