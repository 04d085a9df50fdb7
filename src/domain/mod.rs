//! Domain types for secret reconstruction
//!
//! This module contains validated newtypes and value objects:
//! - [`Base`] - Numeral base of a share value (2..=36)
//! - [`ShareIndex`] - 1-based share position, used as the x coordinate
//! - [`Threshold`] - Points needed to determine the polynomial (k >= 1)
//! - [`ShareCount`] - Upper bound on share indices (n >= 1)
//! - [`CaseParams`] - Validated n/k pair
//! - [`Share`], [`Point`], [`TestCase`] - Values flowing through a solve

mod base;
mod config;
mod share;
mod share_count;
mod share_index;
mod test_case;
mod threshold;

pub use base::Base;
pub use config::CaseParams;
pub use share::{Point, Share};
pub use share_count::ShareCount;
pub use share_index::ShareIndex;
pub use test_case::TestCase;
pub use threshold::Threshold;
