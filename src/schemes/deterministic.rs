//! Naor-Shamir (n, n) scheme with pixel expansion.
//!
//! Each secret pixel becomes a block of `m = 2^(n-1)` sub-pixels in every
//! share. The block contents are one row of `B1` (black pixel) or `B0`
//! (white pixel) after a fresh random column permutation, and each share
//! gets a different row through a fresh random row permutation.
//!
//! Stacking all shares makes a black pixel's block entirely black and leaves
//! exactly one white sub-pixel in a white pixel's block. Any `n - 1` shares
//! see the same distribution of blocks whatever the secret.

use super::params::block_shape;
use super::scratch::{PermutationScratch, allocate_shares};
use crate::basis::build_basis_matrices;
use crate::error::{ParamError, Result};
use crate::pixels::PixelMatrix;
use crate::rng::{EntropyEngine, EntropySource};

pub(crate) fn split<S: EntropySource>(
    secret: &PixelMatrix,
    n: usize,
    engine: &mut EntropyEngine<S>,
) -> Result<Vec<PixelMatrix>> {
    let basis = build_basis_matrices(n)?;
    let (block_height, block_width) = block_shape(n)?;
    let m = basis.columns();

    let overflow = || ParamError::Dimensions {
        height: secret.height(),
        width: secret.width(),
    };
    let height = secret.height().checked_mul(block_height).ok_or_else(overflow)?;
    let width = secret.width().checked_mul(block_width).ok_or_else(overflow)?;

    let mut shares = allocate_shares(n, height, width)?;
    let mut scratch = PermutationScratch::new(n, m);

    for row in 0..secret.height() {
        for col in 0..secret.width() {
            let matrix = basis.for_pixel(secret.get(row, col));

            scratch.permute_columns(engine)?;
            scratch.permute_rows(engine)?;

            for (share, &basis_row) in shares.iter_mut().zip(&scratch.rows) {
                let values = matrix.row(basis_row);

                for (sub, &column) in scratch.columns.iter().enumerate() {
                    share.set(
                        row * block_height + sub / block_width,
                        col * block_width + sub % block_width,
                        values[column],
                    );
                }
            }
        }
    }

    Ok(shares)
}
