//! Non-expanding probabilistic scheme.
//!
//! Instead of handing each share a whole row of the basis matrix, a single
//! column is picked at random per pixel and each share receives one entry of
//! it. Shares keep the secret's size; contrast holds on average over the
//! image rather than inside every block.

use super::scratch::{PermutationScratch, allocate_shares};
use crate::basis::build_basis_matrices;
use crate::error::Result;
use crate::pixels::PixelMatrix;
use crate::rng::{EntropyEngine, EntropySource};

pub(crate) fn split<S: EntropySource>(
    secret: &PixelMatrix,
    n: usize,
    engine: &mut EntropyEngine<S>,
) -> Result<Vec<PixelMatrix>> {
    let basis = build_basis_matrices(n)?;
    let m = basis.columns();

    let mut shares = allocate_shares(n, secret.height(), secret.width())?;
    let mut scratch = PermutationScratch::new(n, 0);

    for (index, &pixel) in secret.as_slice().iter().enumerate() {
        let matrix = basis.for_pixel(pixel);
        let column = engine.sample(0, m)?;
        scratch.permute_rows(engine)?;

        for (share, &basis_row) in shares.iter_mut().zip(&scratch.rows) {
            share.as_mut_slice()[index] = matrix.row(basis_row)[column];
        }
    }

    Ok(shares)
}
