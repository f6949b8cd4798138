//! Basis matrices from subset parity.
//!
//! The deterministic and probabilistic schemes encode each secret pixel by
//! handing every share one row of an n x m boolean matrix, m = 2^(n-1):
//!
//! - `B0` (white pixels): column j is the membership vector of the j-th
//!   subset of `{0, .., n-1}` with **even** cardinality, the empty set
//!   included.
//! - `B1` (black pixels): column j is the membership vector of the j-th
//!   subset with **odd** cardinality.
//!
//! Removing any single row leaves both matrices with the same multiset of
//! columns, which is why fewer than n shares reveal nothing. Stacking all n
//! rows turns every column of `B1` black but leaves the empty-set column of
//! `B0` white, which is the contrast that makes the secret visible.
//!
//! Both the subsets and the matrices are generated in a fixed binary
//! counting order. Randomness is applied later, per pixel, by permuting
//! rows and columns.

mod matrices;
mod subsets;

pub use matrices::{BasisMatrices, build_basis_matrices};
pub use subsets::{Subset, SubsetCollection, build_subsets};

/// Smallest supported ground set (number of shares).
pub const MIN_SHARES: usize = 2;

/// Largest supported ground set: `2^(n-1)` columns must stay shufflable with
/// single-byte samples.
pub const MAX_SHARES: usize = 8;

pub(crate) fn check_share_count(n: usize) -> crate::error::Result<()> {
    if !(MIN_SHARES..=MAX_SHARES).contains(&n) {
        return Err(crate::error::ParamError::ShareCount {
            shares: n,
            min: MIN_SHARES,
            max: MAX_SHARES,
        }
        .into());
    }

    Ok(())
}
