//! `ShareCount` newtype

use crate::error::SolveError;

/// Upper bound on share indices in a test case (n >= 1)
///
/// This is not the number of shares present: shares are sparse, and only
/// indices `1..=n` are considered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ShareCount(u64);

impl ShareCount {
    /// Creates a new share count
    ///
    /// # Errors
    /// Returns [`SolveError::MalformedTestCase`] if count is 0
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hashira::domain::ShareCount;
    ///
    /// let count = ShareCount::new(10).unwrap();
    /// assert_eq!(*count, 10);
    ///
    /// assert!(ShareCount::new(0).is_err());
    /// ```
    pub fn new(value: u64) -> Result<Self, SolveError> {
        if value == 0 {
            return Err(SolveError::malformed("n must be at least 1 (got 0)"));
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for ShareCount {
    type Target = u64;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
