use std::hash::BuildHasher as _;

#[allow(clippy::disallowed_types)]
pub type Hasher = ahash::AHasher;
pub type BuildHasher = std::hash::BuildHasherDefault<Hasher>;

// DOS is of no concern to us
#[allow(clippy::disallowed_types)]
pub type HashMap<K, V> = std::collections::HashMap<K, V, BuildHasher>;
#[allow(clippy::disallowed_types)]
pub type HashSet<V> = std::collections::HashSet<V, BuildHasher>;

/// Fixed seeds, so hashes are stable between runs of the same build.
static STABLE_STATE: ahash::RandomState = ahash::RandomState::with_seeds(
    0x243f_6a88_85a3_08d3,
    0x1319_8a2e_0370_7344,
    0xa409_3822_299f_31d0,
    0x082e_fa98_ec4e_6c89,
);

pub fn hash_of<T: std::hash::Hash + ?Sized>(t: &T) -> u64 {
    STABLE_STATE.hash_one(t)
}
