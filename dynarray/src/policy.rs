use crate::error::{DynamicArrayError, Result};

/// Controls how a [`DynamicArray`](crate::DynamicArray) grows its buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthPolicy {
    /// Smallest capacity the buffer grows to from an empty or small buffer.
    pub min_capacity: usize,
    /// Multiplier applied to the current capacity on every growth.
    ///
    /// Must be finite and greater than `1.0`.
    pub factor: f64,
}

impl GrowthPolicy {
    pub const DEFAULT_MIN_CAPACITY: usize = 16;
    pub const DEFAULT_FACTOR: f64 = 1.75;

    pub fn validate(&self) -> Result<()> {
        if self.min_capacity == 0 {
            return Err(DynamicArrayError::InvalidArgument(
                "Growth policy minimum capacity must be positive".to_string(),
            ));
        }
        if !self.factor.is_finite() || self.factor <= 1.0 {
            return Err(DynamicArrayError::InvalidArgument(format!(
                "Growth factor must be a finite number above 1, got {}",
                self.factor
            )));
        }
        Ok(())
    }

    /// Capacity the buffer grows to when it is full at `current`.
    ///
    /// Buffers below [`min_capacity`](Self::min_capacity) jump to at least
    /// the minimum. The result is always strictly greater than `current`.
    pub fn next_capacity(&self, current: usize) -> usize {
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            clippy::cast_precision_loss
        )]
        let scaled = (current as f64 * self.factor).floor() as usize;
        let grown = if current < self.min_capacity {
            scaled.max(self.min_capacity)
        } else {
            scaled
        };
        grown.max(current.saturating_add(1))
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self {
            min_capacity: Self::DEFAULT_MIN_CAPACITY,
            factor: Self::DEFAULT_FACTOR,
        }
    }
}
