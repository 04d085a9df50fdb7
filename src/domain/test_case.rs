//! A single reconstruction problem

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use super::{CaseParams, Share, ShareIndex};
use crate::error::SolveError;

/// Parameters plus a sparse, index-ordered set of shares
///
/// Not every index in `1..=n` needs a share. Shares beyond `n` may be
/// stored but are never extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    params: CaseParams,
    shares: BTreeMap<ShareIndex, Share>,
}

impl TestCase {
    /// Creates a test case from its parameters and shares
    ///
    /// # Errors
    /// Returns [`SolveError::MalformedTestCase`] if two shares carry the same index
    pub fn new(
        params: CaseParams,
        shares: impl IntoIterator<Item = Share>,
    ) -> Result<Self, SolveError> {
        let mut by_index = BTreeMap::new();
        for share in shares {
            match by_index.entry(share.index()) {
                Entry::Vacant(slot) => {
                    slot.insert(share);
                }
                Entry::Occupied(slot) => {
                    return Err(SolveError::malformed(format!(
                        "duplicate share index {}",
                        slot.key()
                    )));
                }
            }
        }
        Ok(Self {
            params,
            shares: by_index,
        })
    }

    /// Gets the validated n and k
    #[must_use]
    pub fn params(&self) -> CaseParams {
        self.params
    }

    /// Shares in ascending index order, including any beyond n
    pub fn shares(&self) -> impl Iterator<Item = &Share> {
        self.shares.values()
    }

    /// Shares whose index lies in `1..=n`, in ascending order
    pub fn shares_in_range(&self) -> impl Iterator<Item = &Share> {
        let n = *self.params.share_count();
        self.shares
            .values()
            .take_while(move |share| *share.index() <= n)
    }
}
