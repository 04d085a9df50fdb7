//! Threshold newtype

use crate::error::SolveError;

/// Number of points needed to pin down the polynomial (k >= 1)
///
/// A threshold of k determines a polynomial of degree k - 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Threshold(usize);

impl Threshold {
    /// Creates a new threshold, returning an error if value is 0
    ///
    /// # Errors
    /// Returns [`SolveError::MalformedTestCase`] if the threshold is 0
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hashira::domain::Threshold;
    ///
    /// let threshold = Threshold::new(3).unwrap();
    /// assert_eq!(*threshold, 3);
    /// assert_eq!(threshold.degree(), 2);
    ///
    /// assert!(Threshold::new(0).is_err());
    /// ```
    pub fn new(value: usize) -> Result<Self, SolveError> {
        if value == 0 {
            return Err(SolveError::malformed("k must be at least 1 (got 0)"));
        }
        Ok(Self(value))
    }

    /// Degree of the polynomial this threshold determines
    #[must_use]
    pub fn degree(&self) -> usize {
        self.0 - 1
    }
}

impl std::ops::Deref for Threshold {
    type Target = usize;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
