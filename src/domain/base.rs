//! `Base` newtype for share values

use crate::error::SolveError;

/// Numeral base of a share value (2..=36)
///
/// Digits are drawn from `0-9` followed by `a-z`, so 36 is the largest base
/// the alphabet can express.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Base(u32);

impl Base {
    /// Smallest supported base
    pub const MIN: u32 = 2;

    /// Largest supported base
    pub const MAX: u32 = 36;

    /// Creates a new base
    ///
    /// # Errors
    /// Returns [`SolveError::InvalidBase`] if the value is outside 2..=36
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hashira::domain::Base;
    ///
    /// let hex = Base::new(16).unwrap();
    /// assert_eq!(*hex, 16);
    ///
    /// assert!(Base::new(1).is_err());
    /// assert!(Base::new(37).is_err());
    /// ```
    pub fn new(value: u32) -> Result<Self, SolveError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(SolveError::InvalidBase {
                index: None,
                base: value,
            });
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for Base {
    type Target = u32;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for Base {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
