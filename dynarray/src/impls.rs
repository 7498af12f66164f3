use crate::iter::{IntoIter, Iter, IterMut};
use crate::DynamicArray;
use collection_traits::{Contains, HasLength, Iterable, Resizable};
use itertools::Itertools;
use std::cmp::Ordering;
use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};

impl<T: Display> Display for DynamicArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.iter().format(", "))
    }
}

impl<T: Debug> Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, U> PartialEq<DynamicArray<U>> for DynamicArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &DynamicArray<U>) -> bool {
        self.len() == other.len() && itertools::equal(self.iter(), other.iter())
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

#[duplicate::duplicate_item(
    rhs;
    [ [U] ];
    [ &[U] ];
    [ Vec<U> ];
)]
impl<T, U> PartialEq<rhs> for DynamicArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &rhs) -> bool {
        self.len() == other.len() && itertools::equal(self.iter(), other.iter())
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for DynamicArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.len() == N && itertools::equal(self.iter(), other.iter())
    }
}

#[duplicate::duplicate_item(
    lhs;
    [ [T] ];
    [ &[T] ];
    [ Vec<T> ];
)]
impl<T, U> PartialEq<DynamicArray<U>> for lhs
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &DynamicArray<U>) -> bool {
        self.len() == other.len() && itertools::equal(self.iter(), other.iter())
    }
}

impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T: PartialOrd> PartialOrd for DynamicArray<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for DynamicArray<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    fn from(values: Vec<T>) -> Self {
        let mut array = Self::with_capacity(values.len());
        array.extend(values);
        array
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    fn from(values: [T; N]) -> Self {
        let mut array = Self::with_capacity(N);
        array.extend(values);
        array
    }
}

impl<T> From<DynamicArray<T>> for Vec<T> {
    fn from(array: DynamicArray<T>) -> Self {
        array.into_iter().collect()
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let len = self.len();
        IntoIter::new(self.into_slots(), len)
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> HasLength for DynamicArray<T> {
    fn len(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Iterable for DynamicArray<T> {
    type Item = T;

    fn iter(&self) -> impl Iterator<Item = &Self::Item> {
        DynamicArray::iter(self)
    }
}

impl<T: PartialEq> Contains<T> for DynamicArray<T> {
    fn contains(&self, item: &T) -> bool {
        DynamicArray::contains(self, item)
    }
}

impl<T> Resizable for DynamicArray<T> {
    type Item = T;

    fn resize_with(&mut self, new_len: usize, mut f: impl FnMut() -> Self::Item) {
        if self.len() > new_len {
            self.truncate(new_len);
        } else {
            self.reserve(new_len - self.len());
            while self.len() < new_len {
                self.push(f());
            }
        }
    }

    fn push(&mut self, item: Self::Item) {
        self.push(item);
    }

    fn pop(&mut self) -> Option<Self::Item> {
        self.pop()
    }

    fn insert(&mut self, index: usize, item: Self::Item) {
        DynamicArray::insert(self, index, item).unwrap_or_else(|err| panic!("{err}"));
    }

    fn remove(&mut self, index: usize) -> Self::Item {
        DynamicArray::remove(self, index).unwrap_or_else(|err| panic!("{err}"))
    }

    fn swap_remove(&mut self, index: usize) -> Self::Item {
        DynamicArray::swap_remove(self, index).unwrap_or_else(|err| panic!("{err}"))
    }

    fn replace(&mut self, index: usize, item: Self::Item) -> Self::Item {
        self.set(index, item).unwrap_or_else(|err| panic!("{err}"))
    }

    fn swap(&mut self, a: usize, b: usize) {
        DynamicArray::swap(self, a, b).unwrap_or_else(|err| panic!("{err}"));
    }
}
