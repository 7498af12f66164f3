//! A contiguous, growable, index-addressable sequence container.
//!
//! [`DynamicArray`] behaves like a standard dynamic-array list: amortized
//! O(1) [`push`](DynamicArray::push), index-shifting insert and remove,
//! linear lookups, bulk set-like operations, and two cursors that can edit
//! the array while walking it ([`ForwardCursor`] and [`ListCursor`]).
//!
//! Index-based operations return [`Result`] instead of panicking. Only the
//! `Index`/`IndexMut` operators panic, the same way `Vec` does.
//!
//! ```
//! use dynarray::dynarray;
//!
//! let mut array = dynarray!["Test", "TestTest", "Test"];
//! assert_eq!(array.remove(2), Ok("Test"));
//! assert!(array.remove_item(&"Test"));
//! assert_eq!(array.to_string(), "[TestTest]");
//! ```

#![deny(unsafe_code)]

pub mod array;
pub mod cursor;
pub mod error;
mod impls;
pub mod iter;
pub mod policy;

#[cfg(test)]
mod tests;

pub use array::DynamicArray;
pub use cursor::{ForwardCursor, ListCursor};
pub use error::{DynamicArrayError, Result};
pub use policy::GrowthPolicy;

/// Create a [`DynamicArray`] containing the arguments, like `vec!`.
#[macro_export]
macro_rules! dynarray {
    () => {
        $crate::DynamicArray::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::DynamicArray::from_elem($elem, $n)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::DynamicArray::from([$($x),+])
    };
}
