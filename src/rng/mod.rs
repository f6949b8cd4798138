//! Randomness for share generation.
//!
//! The module is layered:
//!
//! - [`EntropySource`]  
//!   Raw uniform bytes. Implemented by [`OsEntropy`] (kernel generator),
//!   [`ReaderSource`] (any byte stream, e.g. `/dev/urandom`) and [`Csprng`]
//!   (ChaCha20 expansion of a 256-bit seed).
//!
//! - [`EntropyEngine`]  
//!   Turns raw bytes into the unbiased decisions the schemes need: bounded
//!   integers through rejection sampling, coin flips, Fisher-Yates shuffles
//!   and draws without replacement.
//!
//! Sources are consumed strictly in order and are never rewound. A run that
//! needs reproducible output (tests, audits) seeds a [`Csprng`]; production
//! runs use the operating system.

pub(crate) mod chacha20;
mod csprng;
mod engine;
mod source;

pub use csprng::Csprng;
pub use engine::{ENTROPY_CHUNK, EntropyEngine, choose_without_replacement};
pub use source::{EntropySource, OsEntropy, ReaderSource};
