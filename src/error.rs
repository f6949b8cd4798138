//! Error types for share generation.
//!
//! Errors fall into two groups:
//!
//! - [`Error::InvalidParameter`]  
//!   The caller asked for something the schemes cannot do (share count out
//!   of range, malformed pixel buffer, unknown scheme name). These are
//!   detected before any buffer is allocated or any entropy is consumed,
//!   and the caller may correct the input and retry.
//!
//! - Everything else  
//!   Allocation failure, an exhausted entropy source or an I/O failure.
//!   These abort the current run. Every share buffer owned by the run is
//!   released as the error propagates; no partially filled share is ever
//!   returned.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort or reject a share generation run.
#[derive(Debug, Error)]
pub enum Error {
    /// A parameter was rejected before any work was done.
    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] ParamError),

    /// A pixel buffer could not be allocated.
    #[error("failed to allocate {bytes} bytes for a pixel buffer")]
    AllocationFailure { bytes: usize },

    /// The entropy source could not supply another byte.
    #[error("entropy source exhausted")]
    EntropyExhausted,

    /// The operating system or an underlying reader failed.
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns `true` if the error aborts the run rather than rejecting input.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Error::InvalidParameter(_))
    }
}

/// Reasons a parameter or input buffer is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    /// Share count outside the supported range.
    #[error("share count {shares} outside {min}..={max}")]
    ShareCount { shares: usize, min: usize, max: usize },

    /// Threshold `k` outside `2..=n`.
    #[error("threshold {threshold} outside 2..={shares}")]
    Threshold { threshold: usize, shares: usize },

    /// `sample` was asked for an empty range or one wider than a byte.
    #[error("sample range [{min}, {max}) is empty or wider than 256")]
    SampleRange { min: usize, max: usize },

    /// A sequence too long to be shuffled from single-byte samples.
    #[error("cannot permute {len} elements (at most 256)")]
    PermutationLength { len: usize },

    /// More draws were requested than unused entries remain.
    #[error("requested {requested} draws but only {available} entries are unused")]
    NotEnoughUnused { requested: usize, available: usize },

    /// Zero-sized or overflowing image dimensions.
    #[error("invalid dimensions {height}x{width}")]
    Dimensions { height: usize, width: usize },

    /// Two matrices that must agree in size do not.
    #[error("dimension mismatch: {expected:?} vs {found:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    /// A pixel buffer has the wrong number of entries.
    #[error("buffer holds {found} values, expected {expected}")]
    BufferLength { expected: usize, found: usize },

    /// A pixel value other than 0 (white) or 1 (black).
    #[error("pixel value {value} at index {index} is not binary")]
    PixelValue { index: usize, value: u8 },

    /// A block size that does not tile the matrix.
    #[error("block {block_height}x{block_width} does not tile {height}x{width}")]
    BlockSize {
        block_height: usize,
        block_width: usize,
        height: usize,
        width: usize,
    },

    /// An operation that needs at least one share got none.
    #[error("no shares supplied")]
    EmptyShareSet,

    /// A scheme name that does not parse.
    #[error("unknown scheme `{0}`")]
    UnknownScheme(String),
}
