//! Bounded cyclic mode counter.

use crate::types::ModeError;

/// Number of modes used when no count is given.
pub const DEFAULT_MODE_COUNT: usize = 4;

/// Mode index in `0..N` that wraps back to 0 after the last mode.
///
/// `N == 0` is rejected at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModeCounter<const N: usize = DEFAULT_MODE_COUNT> {
    index: usize,
}

impl<const N: usize> ModeCounter<N> {
    const NON_EMPTY: () = assert!(N > 0, "mode count must be at least 1");

    /// Creates a counter at mode 0.
    pub const fn new() -> Self {
        let () = Self::NON_EMPTY;
        Self { index: 0 }
    }

    /// Creates a counter at the given mode.
    pub fn with_index(index: usize) -> Result<Self, ModeError> {
        let mut counter = Self::new();
        counter.set(index)?;
        Ok(counter)
    }

    /// Current mode index.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of modes.
    #[inline]
    pub const fn count(&self) -> usize {
        N
    }

    /// Moves to the next mode, wrapping after the last one. Returns the new index.
    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % N;
        self.index
    }

    /// Jumps to a specific mode.
    pub fn set(&mut self, index: usize) -> Result<(), ModeError> {
        if index >= N {
            return Err(ModeError::OutOfRange { index, count: N });
        }
        self.index = index;
        Ok(())
    }

    /// Returns to mode 0.
    pub fn reset(&mut self) {
        self.index = 0;
    }
}

impl<const N: usize> Default for ModeCounter<N> {
    fn default() -> Self {
        Self::new()
    }
}
