//! Stage navigation.
//!
//! Holds the current stage index and moves it within `[0, count - 1]`.
//! There is no wraparound: stepping past either end does nothing.

use crate::error::{Error, Result};

/// Bounded cursor over the stage catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageNavigator {
    current: usize,
    count: usize,
}

impl StageNavigator {
    /// Create a navigator at stage 0. A zero count is treated as one stage.
    pub fn new(count: usize) -> Self {
        Self {
            current: 0,
            count: count.max(1),
        }
    }

    /// Create a navigator positioned at `start`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidStage` if `start` is out of range.
    pub fn with_start(count: usize, start: usize) -> Result<Self> {
        let mut nav = Self::new(count);
        nav.jump_to(start)?;
        Ok(nav)
    }

    /// Move to the next stage. Returns whether the index changed.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Move to the previous stage. Returns whether the index changed.
    pub fn retreat(&mut self) -> bool {
        if !self.can_retreat() {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Jump to `index`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidStage` and leaves the index unchanged if
    /// `index` is out of range.
    pub fn jump_to(&mut self, index: usize) -> Result<()> {
        if index >= self.count {
            return Err(Error::InvalidStage {
                index,
                count: self.count,
            });
        }
        self.current = index;
        Ok(())
    }

    /// Current stage index.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of stages.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Check if `advance` would move.
    pub fn can_advance(&self) -> bool {
        self.current + 1 < self.count
    }

    /// Check if `retreat` would move.
    pub fn can_retreat(&self) -> bool {
        self.current > 0
    }

    /// Check if the last stage is showing.
    pub fn is_last(&self) -> bool {
        !self.can_advance()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_stage_is_fixed() {
        let mut nav = StageNavigator::new(1);
        assert!(!nav.advance());
        assert!(!nav.retreat());
        assert!(nav.is_last());
    }

    #[test]
    fn test_zero_count_treated_as_one() {
        let nav = StageNavigator::new(0);
        assert_eq!(nav.count(), 1);
        assert_eq!(nav.current(), 0);
    }

    #[test]
    fn test_with_start_out_of_range() {
        assert!(matches!(
            StageNavigator::with_start(5, 5),
            Err(Error::InvalidStage { index: 5, count: 5 })
        ));
        assert_eq!(StageNavigator::with_start(5, 4).unwrap().current(), 4);
    }
}
