use super::subsets::{Subset, build_subsets};
use crate::error::Result;
use crate::pixels::{BLACK, PixelMatrix};

/// The `(B0, B1)` pair for one share count.
#[derive(Debug, Clone)]
pub struct BasisMatrices {
    white: PixelMatrix,
    black: PixelMatrix,
}

impl BasisMatrices {
    /// `B0`, used for white secret pixels.
    pub fn white(&self) -> &PixelMatrix {
        &self.white
    }

    /// `B1`, used for black secret pixels.
    pub fn black(&self) -> &PixelMatrix {
        &self.black
    }

    /// `B1` if `pixel` is black, `B0` otherwise.
    #[inline]
    pub fn for_pixel(&self, pixel: u8) -> &PixelMatrix {
        if pixel == BLACK { &self.black } else { &self.white }
    }

    /// Number of rows (shares).
    pub fn rows(&self) -> usize {
        self.white.height()
    }

    /// Number of columns, `2^(n-1)`.
    pub fn columns(&self) -> usize {
        self.white.width()
    }
}

fn incidence(subsets: &[Subset], n: usize) -> Result<PixelMatrix> {
    let mut matrix = PixelMatrix::new(n, subsets.len())?;

    for (col, subset) in subsets.iter().enumerate() {
        for &element in subset.elements() {
            matrix.set(element as usize, col, BLACK);
        }
    }

    Ok(matrix)
}

/// Builds `B0` and `B1` for `n` shares.
///
/// `B0[i][j] = 1` iff element `i` belongs to the j-th even subset, and
/// likewise for `B1` with odd subsets. Deterministic for a given `n`.
pub fn build_basis_matrices(n: usize) -> Result<BasisMatrices> {
    let subsets = build_subsets(n)?;

    let white = incidence(subsets.even(), n)?;
    let black = incidence(subsets.odd(), n)?;
    tracing::trace!(n, columns = white.width(), "built basis matrices");

    Ok(BasisMatrices { white, black })
}
