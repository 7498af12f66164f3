use crate::map::hash_of;
use crate::sequence::sequence_hash;
use std::rc::Rc;
use std::sync::Arc;

/// Per-element contribution to a structural sequence hash.
///
/// Absent values (`None`) contribute `0`. Everything else defers to
/// [`hash_of`], so two values that are equal under `Eq` produce the same
/// contribution.
pub trait ElementHash {
    fn element_hash(&self) -> u64;
}

#[duplicate::duplicate_item(
    ty;
    [ bool ];
    [ char ];
    [ u8 ];
    [ u16 ];
    [ u32 ];
    [ u64 ];
    [ u128 ];
    [ usize ];
    [ i8 ];
    [ i16 ];
    [ i32 ];
    [ i64 ];
    [ i128 ];
    [ isize ];
    [ str ];
    [ String ];
    [ () ];
)]
impl ElementHash for ty {
    fn element_hash(&self) -> u64 {
        hash_of(self)
    }
}

impl<T: ElementHash> ElementHash for Option<T> {
    fn element_hash(&self) -> u64 {
        match self {
            None => 0,
            Some(value) => value.element_hash(),
        }
    }
}

#[duplicate::duplicate_item(
    ty(T);
    [ &T ];
    [ Box<T> ];
    [ Rc<T> ];
    [ Arc<T> ];
)]
impl<T: ElementHash + ?Sized> ElementHash for ty([T]) {
    fn element_hash(&self) -> u64 {
        T::element_hash(self)
    }
}

// Nested sequences hash structurally, like their elements
impl<T: ElementHash> ElementHash for [T] {
    fn element_hash(&self) -> u64 {
        sequence_hash(self)
    }
}

impl<T: ElementHash> ElementHash for Vec<T> {
    fn element_hash(&self) -> u64 {
        sequence_hash(self)
    }
}
