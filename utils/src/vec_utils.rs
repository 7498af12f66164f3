use collection_traits::{HasLength, Resizable};

/// A single scripted edit of an ordered container.
///
/// Scripts of these are replayed against two containers to check that they
/// behave the same.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum VecOperation<T> {
    ShiftRemove(usize),
    SwapRemove(usize),
    Push(T),
    Pop,
    Insert(usize, T),
    Replace(usize, T),
    Move(usize, usize),
    Swap(usize, usize),
}

impl<T> VecOperation<T> {
    pub fn apply<Col: Resizable<Item = T>>(self, vec: &mut Col) {
        match self {
            VecOperation::ShiftRemove(idx) => {
                vec.remove(idx);
            }
            VecOperation::SwapRemove(idx) => {
                vec.swap_remove(idx);
            }
            VecOperation::Push(data) => vec.push(data),
            VecOperation::Pop => {
                vec.pop();
            }
            VecOperation::Insert(idx, data) => vec.insert(idx, data),
            VecOperation::Replace(idx, data) => {
                vec.replace(idx, data);
            }
            VecOperation::Move(from, to) => {
                if to == from {
                    return;
                }
                let data = vec.remove(from);
                vec.insert(to, data);
            }
            VecOperation::Swap(from, to) => {
                vec.swap(from, to);
            }
        }
    }

    /// Wraps every index of the operation into the valid range for a
    /// container of length `len`.
    ///
    /// Returns `None` when the operation has no valid form, e.g. removing
    /// from an empty container.
    pub fn fit_to(self, len: usize) -> Option<Self> {
        let existing = |idx: usize| (len > 0).then(|| idx % len);
        Some(match self {
            VecOperation::ShiftRemove(idx) => VecOperation::ShiftRemove(existing(idx)?),
            VecOperation::SwapRemove(idx) => VecOperation::SwapRemove(existing(idx)?),
            VecOperation::Push(data) => VecOperation::Push(data),
            VecOperation::Pop => VecOperation::Pop,
            VecOperation::Insert(idx, data) => VecOperation::Insert(idx % (len + 1), data),
            VecOperation::Replace(idx, data) => VecOperation::Replace(existing(idx)?, data),
            VecOperation::Move(from, to) => VecOperation::Move(existing(from)?, existing(to)?),
            VecOperation::Swap(a, b) => VecOperation::Swap(existing(a)?, existing(b)?),
        })
    }

    /// [`fit_to`](Self::fit_to) the current length of `vec`, then apply.
    pub fn apply_fitted<Col: Resizable<Item = T> + HasLength>(self, vec: &mut Col) {
        if let Some(op) = self.fit_to(vec.len()) {
            op.apply(vec);
        }
    }
}
