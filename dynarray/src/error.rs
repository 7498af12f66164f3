use thiserror::Error;

pub type Result<T, E = DynamicArrayError> = std::result::Result<T, E>;

/// Errors reported by [`DynamicArray`](crate::DynamicArray) and its cursors.
///
/// Every error is raised before the container is touched, so a failed call
/// leaves the contents and length unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DynamicArrayError {
    #[error("Invalid argument: {}", .0)]
    InvalidArgument(String),
    #[error("Index {} out of bounds for length {}", .index, .len)]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("Cursor has no element in the requested direction")]
    NoSuchElement,
    #[error("Cursor has no current element. Call `next` or `previous` first")]
    IllegalState,
    #[error("Destination holds {} elements, but {} are required", .available, .required)]
    DestinationTooSmall { required: usize, available: usize },
}

impl DynamicArrayError {
    pub(crate) fn out_of_bounds(index: usize, len: usize) -> Self {
        Self::IndexOutOfBounds { index, len }
    }
}
