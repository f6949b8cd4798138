//! Unbiased sampling on top of a raw byte stream.
//!
//! Every random decision a scheme makes goes through [`EntropyEngine`]:
//! bounded integers, coin flips, permutations and draws without replacement.
//! All of them are derived from single bytes with rejection sampling, so no
//! value in a range is ever more likely than another. A single modulo-biased
//! draw would be enough to leak information about the secret through the
//! shares.
//!
//! Bytes are pulled from the underlying source in chunks of up to
//! [`ENTROPY_CHUNK`] and handed out strictly in order. A short chunk is
//! used as is; the engine reports exhaustion only when a refill yields
//! nothing. Bytes still buffered
//! when the engine is dropped are discarded, never replayed.

use super::source::EntropySource;
use crate::error::{Error, ParamError, Result};

/// Number of bytes requested from the source per refill.
pub const ENTROPY_CHUNK: usize = 64;

/// Width of one raw sample: the number of distinct byte values.
const BYTE_WIDTH: usize = 256;

/// Bounded-range sampling, shuffling and drawing without replacement.
pub struct EntropyEngine<S> {
    source: S,
    buffer: [u8; ENTROPY_CHUNK],
    cursor: usize,
    // Valid bytes in `buffer`; a refill may come back short.
    len: usize,
}

impl<S: EntropySource> EntropyEngine<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            buffer: [0u8; ENTROPY_CHUNK],
            cursor: 0,
            len: 0,
        }
    }

    /// Gives the source back. Buffered bytes are wiped, not returned.
    pub fn into_inner(mut self) -> S {
        self.buffer.fill(0);
        let Self { source, .. } = self;
        source
    }

    /// Returns the next raw byte of the stream.
    pub fn next_byte(&mut self) -> Result<u8> {
        if self.cursor == self.len {
            let read = self.source.read_bytes(&mut self.buffer)?;
            if read == 0 {
                tracing::warn!("entropy source exhausted");
                return Err(Error::EntropyExhausted);
            }
            self.len = read;
            self.cursor = 0;
        }

        let byte = self.buffer[self.cursor];
        self.buffer[self.cursor] = 0;
        self.cursor += 1;

        Ok(byte)
    }

    /// Returns an integer uniformly distributed in `[min, max)`.
    ///
    /// The range must hold between 1 and 256 values. Each attempt reads one
    /// byte `b`; the candidate is `min + b % range`. The byte is rejected
    /// when the block of `range` consecutive byte values containing `b` runs
    /// past the end of the byte range, because values in that partial block
    /// would otherwise be over-represented.
    ///
    /// A single-valued range returns `min` without reading the stream.
    pub fn sample(&mut self, min: usize, max: usize) -> Result<usize> {
        if max <= min || max - min > BYTE_WIDTH {
            return Err(ParamError::SampleRange { min, max }.into());
        }

        let range = max - min;
        if range == 1 {
            return Ok(min);
        }

        loop {
            let byte = self.next_byte()? as usize;
            let offset = byte % range;

            if byte - offset + range <= BYTE_WIDTH {
                return Ok(min + offset);
            }
        }
    }

    /// One unbiased coin flip as a pixel value (0 or 1).
    #[inline]
    pub fn coin(&mut self) -> Result<u8> {
        Ok(self.sample(0, 2)? as u8)
    }

    /// Uniform in-place permutation (Fisher-Yates, top index down).
    pub fn shuffle<T>(&mut self, items: &mut [T]) -> Result<()> {
        if items.len() > BYTE_WIDTH {
            return Err(ParamError::PermutationLength { len: items.len() }.into());
        }

        for i in (1..items.len()).rev() {
            let j = self.sample(0, i + 1)?;
            items.swap(i, j);
        }

        Ok(())
    }

    /// Draws `count` distinct unused indices of `checklist` uniformly.
    ///
    /// For each draw a rank is sampled in `[1, remaining]`, the rank-th
    /// unused entry is marked used with [`choose_without_replacement`], and
    /// `place(position, index)` is called, `position` being the draw number
    /// starting at 0. What "placing" means (copying a column, assigning a
    /// share) is up to the caller.
    pub fn draw_without_replacement<F>(
        &mut self,
        checklist: &mut [bool],
        count: usize,
        mut place: F,
    ) -> Result<()>
    where
        F: FnMut(usize, usize),
    {
        let mut remaining = checklist.iter().filter(|used| !**used).count();
        if count > remaining {
            return Err(ParamError::NotEnoughUnused {
                requested: count,
                available: remaining,
            }
            .into());
        }

        for position in 0..count {
            let rank = self.sample(1, remaining + 1)?;
            let index = choose_without_replacement(checklist, rank).ok_or(
                ParamError::NotEnoughUnused {
                    requested: rank,
                    available: remaining,
                },
            )?;

            place(position, index);
            remaining -= 1;
        }

        Ok(())
    }
}

/// Returns the `rank`-th (1-based) unused index and marks it used.
///
/// `None` if `rank` is zero or larger than the number of unused entries; the
/// checklist is left untouched in that case.
pub fn choose_without_replacement(checklist: &mut [bool], rank: usize) -> Option<usize> {
    if rank == 0 {
        return None;
    }

    let index = checklist
        .iter()
        .enumerate()
        .filter(|(_, used)| !**used)
        .nth(rank - 1)
        .map(|(i, _)| i)?;

    checklist[index] = true;
    Some(index)
}
