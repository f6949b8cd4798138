//! Visual secret sharing for binary images
//!
//! This crate splits a black and white secret image into `n` share images.
//! Stacking a qualified set of shares (a pixel-wise OR, the same thing as
//! overlaying printed transparencies) reveals the secret to the naked eye,
//! while any non-qualified set carries no information about it.
//!
//! The focus is on **correct randomness and exact constructions**: every
//! random decision is made with rejection sampling on an unbiased byte
//! stream, and the encoding matrices are derived combinatorially rather than
//! hard-coded.
//!
//! # Module overview
//!
//! - `rng`  
//!   Entropy sources (operating system, arbitrary readers, a ChaCha20
//!   CSPRNG) and the [`rng::EntropyEngine`] that turns raw bytes into
//!   unbiased bounded integers, coin flips, permutations and draws without
//!   replacement.
//!
//! - `pixels`  
//!   The [`PixelMatrix`] buffer used for secrets and shares, RGB
//!   thresholding, and share stacking.
//!
//! - `basis`  
//!   Subsets of `{0, .., n-1}` split by parity, and the `B0`/`B1` basis
//!   matrices derived from them.
//!
//! - `schemes`  
//!   The constructions:
//!   - deterministic (Naor-Shamir) with pixel expansion
//!   - probabilistic, without expansion
//!   - random grid (n, n), (2, n) and (k, n), each in two fill orders
//!
//! # Example
//!
//! ```
//! use visualcrypt::pixels::{PixelMatrix, stack};
//! use visualcrypt::rng::Csprng;
//! use visualcrypt::schemes::{Scheme, ShareParams, split};
//!
//! let secret = PixelMatrix::from_pixels(2, 2, vec![1, 0, 0, 1])?;
//! let params = ShareParams::new(Scheme::Deterministic, 3)?;
//!
//! let shares = split(&secret, &params, Csprng::from_seed([7u8; 32]))?;
//! let (h, w) = params.expansion()?;
//! let revealed = stack(&shares)?.collapse_blocks(h, w)?;
//!
//! assert_eq!(revealed, secret);
//! # Ok::<(), visualcrypt::Error>(())
//! ```
//!
//! # Scope
//!
//! Reading and writing image files, color images, and cheating detection
//! are out of scope. Callers decode their images into [`PixelMatrix`] values
//! and serialize the returned shares themselves.

mod os;

pub mod basis;
pub mod error;
pub mod pixels;
pub mod rng;
pub mod schemes;

pub use error::{Error, ParamError, Result};
pub use pixels::PixelMatrix;
