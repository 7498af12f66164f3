use crate::{Contains, HasLength};
use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};

#[allow(clippy::disallowed_types)]
impl<T, S> HasLength for HashSet<T, S> {
    fn len(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

#[allow(clippy::disallowed_types)]
impl<T: Eq + Hash, S: BuildHasher> Contains<T> for HashSet<T, S> {
    fn contains(&self, item: &T) -> bool {
        HashSet::contains(self, item)
    }
}

impl<T> HasLength for BTreeSet<T> {
    fn len(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Ord> Contains<T> for BTreeSet<T> {
    fn contains(&self, item: &T) -> bool {
        BTreeSet::contains(self, item)
    }
}
