use crate::{Contains, HasLength, Iterable, Resizable};
use std::collections::VecDeque;

impl<T> Resizable for Vec<T> {
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

#[duplicate::duplicate_item(
    ty(T);
    [ Vec<T> ];
    [ VecDeque<T> ];
)]
impl<T> HasLength for ty([T]) {
    fn len(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Iterable for Vec<T> {
    type Item = T;

    fn iter(&self) -> impl Iterator<Item = &Self::Item> {
        self.as_slice().iter()
    }
}

impl<T> Iterable for VecDeque<T> {
    type Item = T;

    fn iter(&self) -> impl Iterator<Item = &Self::Item> {
        VecDeque::iter(self)
    }
}

impl<T: PartialEq> Contains<T> for Vec<T> {
    fn contains(&self, item: &T) -> bool {
        self.as_slice().contains(item)
    }
}

impl<T: PartialEq> Contains<T> for VecDeque<T> {
    fn contains(&self, item: &T) -> bool {
        VecDeque::contains(self, item)
    }
}
