use crate::error::Result;
use crate::pixels::PixelMatrix;
use crate::rng::{EntropyEngine, EntropySource};

/// Per-run index buffers, overwritten for every pixel.
pub(crate) struct PermutationScratch {
    pub(crate) rows: Vec<usize>,
    pub(crate) columns: Vec<usize>,
}

impl PermutationScratch {
    pub(crate) fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows: (0..rows).collect(),
            columns: (0..columns).collect(),
        }
    }

    /// Fresh uniform permutation of the row indices.
    pub(crate) fn permute_rows<S: EntropySource>(
        &mut self,
        engine: &mut EntropyEngine<S>,
    ) -> Result<()> {
        reset(&mut self.rows);
        engine.shuffle(&mut self.rows)
    }

    /// Fresh uniform permutation of the column indices.
    pub(crate) fn permute_columns<S: EntropySource>(
        &mut self,
        engine: &mut EntropyEngine<S>,
    ) -> Result<()> {
        reset(&mut self.columns);
        engine.shuffle(&mut self.columns)
    }
}

fn reset(indices: &mut [usize]) {
    indices.iter_mut().enumerate().for_each(|(i, v)| *v = i);
}

/// Allocates `count` white shares of `height x width`.
pub(crate) fn allocate_shares(count: usize, height: usize, width: usize) -> Result<Vec<PixelMatrix>> {
    (0..count).map(|_| PixelMatrix::new(height, width)).collect()
}
