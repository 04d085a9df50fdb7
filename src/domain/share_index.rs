//! `ShareIndex` newtype

use crate::error::SolveError;

/// Position of a share (1-based)
///
/// The index doubles as the share's x coordinate. Zero is rejected because
/// the polynomial's value at x = 0 is the secret itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShareIndex(u64);

impl ShareIndex {
    /// Creates a new share index
    ///
    /// # Errors
    /// Returns [`SolveError::MalformedTestCase`] if the index is 0
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hashira::domain::ShareIndex;
    ///
    /// let index = ShareIndex::new(6).unwrap();
    /// assert_eq!(*index, 6);
    ///
    /// assert!(ShareIndex::new(0).is_err());
    /// ```
    pub fn new(value: u64) -> Result<Self, SolveError> {
        if value == 0 {
            return Err(SolveError::malformed("share index must be at least 1"));
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for ShareIndex {
    type Target = u64;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ShareIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
