//! Share stacking.
//!
//! Printing shares on transparencies and laying them on top of each other
//! turns a sub-pixel black as soon as any layer is black: a pixel-wise OR.

use super::PixelMatrix;
use crate::error::{ParamError, Result};

/// Overlays shares with a pixel-wise OR.
///
/// All shares must have identical dimensions; at least one is required.
pub fn stack(shares: &[PixelMatrix]) -> Result<PixelMatrix> {
    let (first, rest) = shares.split_first().ok_or(ParamError::EmptyShareSet)?;

    let mut out = first.clone();
    for share in rest {
        if share.dimensions() != out.dimensions() {
            return Err(ParamError::DimensionMismatch {
                expected: out.dimensions(),
                found: share.dimensions(),
            }
            .into());
        }

        out.as_mut_slice()
            .iter_mut()
            .zip(share.as_slice())
            .for_each(|(o, s)| *o |= *s);
    }

    Ok(out)
}
