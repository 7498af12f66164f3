pub mod hash;
pub mod map;
pub mod sequence;
pub mod vec_utils;
