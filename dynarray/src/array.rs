use crate::cursor::{ForwardCursor, ListCursor};
use crate::error::{DynamicArrayError, Result};
use crate::iter::{Iter, IterMut};
use crate::policy::GrowthPolicy;
use collection_traits::{Contains, Iterable};
use tracing::{debug, trace};
use utils::hash::ElementHash;
use utils::sequence::{sequence_eq, sequence_hash};

/// A contiguous, growable, index-addressable sequence.
///
/// Storage is a boxed slice of slots. Slots `[0, len)` hold the elements in
/// order, slots `[len, capacity)` are always empty, so removed elements are
/// dropped right away instead of lingering in the buffer.
///
/// The buffer never grows on construction and never shrinks. Growth happens
/// on the first insert into a full buffer and follows the container's
/// [`GrowthPolicy`].
#[derive(Clone)]
pub struct DynamicArray<T> {
    slots: Box<[Option<T>]>,
    len: usize,
    policy: GrowthPolicy,
}

impl<T> DynamicArray<T> {
    /// Creates an empty array without allocating.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty array with exactly `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: empty_slots(capacity),
            len: 0,
            policy: GrowthPolicy::default(),
        }
    }

    /// Creates an empty array with exactly `capacity` slots, rejecting
    /// negative capacities.
    pub fn try_with_capacity(capacity: isize) -> Result<Self> {
        Self::try_with_capacity_and_policy(capacity, GrowthPolicy::default())
    }

    pub fn with_policy(policy: GrowthPolicy) -> Result<Self> {
        Self::try_with_capacity_and_policy(0, policy)
    }

    pub fn try_with_capacity_and_policy(capacity: isize, policy: GrowthPolicy) -> Result<Self> {
        let Ok(capacity) = usize::try_from(capacity) else {
            debug!(capacity, "rejected negative capacity");
            return Err(DynamicArrayError::InvalidArgument(format!(
                "Invalid capacity {capacity}"
            )));
        };
        if let Err(err) = policy.validate() {
            debug!(?policy, "rejected growth policy");
            return Err(err);
        }
        Ok(Self {
            slots: empty_slots(capacity),
            len: 0,
            policy,
        })
    }

    /// Creates an array holding `n` clones of `elem`.
    pub fn from_elem(elem: T, n: usize) -> Self
    where
        T: Clone,
    {
        let mut array = Self::with_capacity(n);
        for slot in array.slots.iter_mut() {
            *slot = Some(elem.clone());
        }
        array.len = n;
        array
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn policy(&self) -> &GrowthPolicy {
        &self.policy
    }

    /// Grows the buffer until it fits `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        let required = self.len.saturating_add(additional);
        if required > self.capacity() {
            let mut capacity = self.capacity();
            while capacity < required {
                capacity = self.policy.next_capacity(capacity);
            }
            self.reallocate(capacity);
        }
    }

    /// Appends an element to the back.
    pub fn push(&mut self, value: T) {
        self.ensure_free_slot();
        self.slots[self.len] = Some(value);
        self.len += 1;
    }

    /// Inserts an element at `index`, shifting everything after it to the
    /// right.
    ///
    /// Accepts `0..=len`; inserting at `len` is the same as [`push`].
    ///
    /// [`push`]: Self::push
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len {
            return Err(DynamicArrayError::out_of_bounds(index, self.len));
        }
        self.shift_in(index, value);
        Ok(())
    }

    /// Inserts all `values` starting at `index`, keeping their order.
    ///
    /// Accepts `0..=len`.
    pub fn insert_all(&mut self, index: usize, values: impl IntoIterator<Item = T>) -> Result<()> {
        if index > self.len {
            return Err(DynamicArrayError::out_of_bounds(index, self.len));
        }
        let old_len = self.len;
        self.extend(values);
        // appended block is moved in front of the old tail
        self.slots[index..self.len].rotate_right(self.len - old_len);
        Ok(())
    }

    /// Appends every element of `values` in iteration order.
    ///
    /// Always returns `true`.
    pub fn add_all(&mut self, values: impl IntoIterator<Item = T>) -> bool {
        self.extend(values);
        true
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        self.live()
            .get(index)
            .and_then(Option::as_ref)
            .ok_or(DynamicArrayError::out_of_bounds(index, self.len))
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len;
        self.slots[..len]
            .get_mut(index)
            .and_then(Option::as_mut)
            .ok_or(DynamicArrayError::out_of_bounds(index, len))
    }

    pub fn first(&self) -> Option<&T> {
        self.get(0).ok()
    }

    pub fn last(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|idx| self.get(idx).ok())
    }

    /// Replaces the element at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, value))
    }

    /// Removes and returns the element at `index`, shifting everything after
    /// it to the left.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        self.shift_out(index)
            .ok_or(DynamicArrayError::out_of_bounds(index, self.len))
    }

    /// Removes the element at `index` and moves the last element into its
    /// place.
    pub fn swap_remove(&mut self, index: usize) -> Result<T> {
        if index >= self.len {
            return Err(DynamicArrayError::out_of_bounds(index, self.len));
        }
        self.slots.swap(index, self.len - 1);
        self.pop()
            .ok_or(DynamicArrayError::out_of_bounds(index, self.len))
    }

    pub fn pop(&mut self) -> Option<T> {
        let last = self.len.checked_sub(1)?;
        let value = self.slots[last].take();
        self.len = last;
        value
    }

    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        for index in [a, b] {
            if index >= self.len {
                return Err(DynamicArrayError::out_of_bounds(index, self.len));
            }
        }
        self.slots.swap(a, b);
        Ok(())
    }

    /// Drops every element past `len`. Does nothing if the array is not
    /// longer than `len`.
    pub fn truncate(&mut self, len: usize) {
        while self.len > len {
            self.pop();
        }
    }

    /// Drops all elements. The capacity is kept.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Removes the first element equal to `value`.
    pub fn remove_item<U: ?Sized>(&mut self, value: &U) -> bool
    where
        T: PartialEq<U>,
    {
        match self.index_of(value) {
            Some(index) => self.shift_out(index).is_some(),
            None => false,
        }
    }

    pub fn index_of<U: ?Sized>(&self, value: &U) -> Option<usize>
    where
        T: PartialEq<U>,
    {
        self.iter().position(|item| item == value)
    }

    pub fn last_index_of<U: ?Sized>(&self, value: &U) -> Option<usize>
    where
        T: PartialEq<U>,
    {
        self.iter().rposition(|item| item == value)
    }

    pub fn contains<U: ?Sized>(&self, value: &U) -> bool
    where
        T: PartialEq<U>,
    {
        self.index_of(value).is_some()
    }

    pub fn contains_all<'a, U: 'a + ?Sized>(&self, values: impl IntoIterator<Item = &'a U>) -> bool
    where
        T: PartialEq<U>,
    {
        values.into_iter().all(|value| self.contains(value))
    }

    /// Removes every element contained in `values`.
    ///
    /// Always returns `true`.
    pub fn remove_all<C: Contains<T> + ?Sized>(&mut self, values: &C) -> bool {
        self.remove_by_membership(values, true)
    }

    /// Removes every element not contained in `values`.
    ///
    /// Always returns `true`.
    pub fn retain_all<C: Contains<T> + ?Sized>(&mut self, values: &C) -> bool {
        self.remove_by_membership(values, false)
    }

    /// Copies `[from, to)` into a new array.
    pub fn sub_list(&self, from: usize, to: usize) -> Result<Self>
    where
        T: Clone,
    {
        if to > self.len {
            return Err(DynamicArrayError::out_of_bounds(to, self.len));
        }
        if from > to {
            return Err(DynamicArrayError::out_of_bounds(from, to));
        }
        let mut sub = Self::with_capacity(to - from);
        sub.policy = self.policy;
        sub.extend(self.iter().skip(from).take(to - from).cloned());
        Ok(sub)
    }

    pub fn to_boxed_slice(&self) -> Box<[T]>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Clones all elements into the front of `dest`. Elements of `dest` past
    /// [`len`](Self::len) are left untouched.
    pub fn copy_to_slice(&self, dest: &mut [T]) -> Result<()>
    where
        T: Clone,
    {
        if dest.len() < self.len {
            return Err(DynamicArrayError::DestinationTooSmall {
                required: self.len,
                available: dest.len(),
            });
        }
        for (target, item) in dest.iter_mut().zip(self.iter()) {
            target.clone_from(item);
        }
        Ok(())
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.live())
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let len = self.len;
        IterMut::new(&mut self.slots[..len])
    }

    /// A forward cursor positioned before the first element.
    pub fn cursor(&mut self) -> ForwardCursor<'_, T> {
        ForwardCursor::new(self)
    }

    /// A bidirectional cursor positioned before the first element.
    pub fn list_cursor(&mut self) -> ListCursor<'_, T> {
        ListCursor::new(self, 0)
    }

    /// A bidirectional cursor positioned before `index`.
    ///
    /// Accepts `0..=len`; `len` positions the cursor past the last element.
    pub fn list_cursor_at(&mut self, index: usize) -> Result<ListCursor<'_, T>> {
        if index > self.len {
            return Err(DynamicArrayError::out_of_bounds(index, self.len));
        }
        Ok(ListCursor::new(self, index))
    }

    /// Element-by-element equality against any [`Iterable`] sequence.
    pub fn sequence_eq<S: Iterable + ?Sized>(&self, other: &S) -> bool
    where
        T: PartialEq<S::Item>,
    {
        sequence_eq(self, other)
    }

    /// `31 * hash + element_hash(e)` over all elements, seeded at 1.
    ///
    /// Matches [`utils::sequence::sequence_hash`] of any equal sequence.
    pub fn structural_hash(&self) -> u64
    where
        T: ElementHash,
    {
        sequence_hash(self)
    }
}

impl<T> DynamicArray<T> {
    pub(crate) fn into_slots(self) -> Box<[Option<T>]> {
        self.slots
    }

    fn live(&self) -> &[Option<T>] {
        &self.slots[..self.len]
    }

    fn ensure_free_slot(&mut self) {
        if self.len == self.capacity() {
            self.grow();
        }
    }

    fn grow(&mut self) {
        let capacity = self.policy.next_capacity(self.capacity());
        self.reallocate(capacity);
    }

    fn reallocate(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.len);
        let mut slots = empty_slots(capacity);
        for (target, slot) in slots.iter_mut().zip(self.slots[..self.len].iter_mut()) {
            *target = slot.take();
        }
        trace!(
            old_capacity = self.slots.len(),
            new_capacity = capacity,
            len = self.len,
            "grew buffer"
        );
        self.slots = slots;
    }

    /// Inserts at `index` without bounds checking. `index` must be `<= len`.
    pub(crate) fn shift_in(&mut self, index: usize, value: T) {
        debug_assert!(index <= self.len);
        self.ensure_free_slot();
        self.slots[self.len] = Some(value);
        self.slots[index..=self.len].rotate_right(1);
        self.len += 1;
    }

    /// Removes the element at `index`, or returns `None` if there is none.
    pub(crate) fn shift_out(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        let value = self.slots[index].take();
        // the emptied slot travels to the end of the live region
        self.slots[index..self.len].rotate_left(1);
        self.len -= 1;
        value
    }

    fn remove_by_membership<C: Contains<T> + ?Sized>(
        &mut self,
        values: &C,
        remove_members: bool,
    ) -> bool {
        let mut cursor = self.list_cursor();
        while let Ok(item) = cursor.next() {
            if values.contains(item) == remove_members {
                let removed = cursor.remove_current();
                debug_assert!(removed.is_ok());
            }
        }
        true
    }
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}
