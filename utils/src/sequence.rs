use crate::hash::ElementHash;
use collection_traits::Iterable;

/// Element-by-element equality of two sequences, regardless of their
/// concrete types.
pub fn sequence_eq<A, B>(a: &A, b: &B) -> bool
where
    A: Iterable + ?Sized,
    B: Iterable + ?Sized,
    A::Item: PartialEq<B::Item>,
{
    itertools::equal(a.iter(), b.iter())
}

/// Structural hash: `31 * hash + element_hash(e)` over all elements, seeded
/// at 1.
///
/// Sequences that are [`sequence_eq`] hash equal, whatever container holds
/// them.
pub fn sequence_hash<S>(seq: &S) -> u64
where
    S: Iterable + ?Sized,
    S::Item: ElementHash,
{
    seq.iter().fold(1u64, |hash, item| {
        hash.wrapping_mul(31).wrapping_add(item.element_hash())
    })
}
