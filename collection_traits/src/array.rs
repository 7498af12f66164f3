use crate::{Contains, HasLength, Iterable};

impl<const N: usize, T> HasLength for [T; N] {
    fn len(&self) -> usize {
        N
    }

    fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<const N: usize, T> Iterable for [T; N] {
    type Item = T;

    fn iter(&self) -> impl Iterator<Item = &Self::Item> {
        self.as_slice().iter()
    }
}

impl<const N: usize, T: PartialEq> Contains<T> for [T; N] {
    fn contains(&self, item: &T) -> bool {
        self.as_slice().contains(item)
    }
}
