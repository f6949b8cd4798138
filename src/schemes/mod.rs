//! Visual secret sharing schemes.
//!
//! A scheme turns one binary secret into `n` binary shares. Printed on
//! transparencies and stacked, a qualified set of shares shows the secret;
//! any other set is indistinguishable from noise.
//!
//! Three families are provided:
//!
//! - **Deterministic** (Naor-Shamir)  
//!   Every pixel expands to a block of `2^(n-1)` sub-pixels taken from the
//!   basis matrices of [`crate::basis`]. Stacking all `n` shares always
//!   shows black pixels as fully black blocks.
//!
//! - **Probabilistic**  
//!   Same basis matrices, one random column per pixel, no expansion.
//!
//! - **Random grid**  
//!   Built from coin flips only, no expansion. Available as (n, n), (2, n)
//!   and (k, n) threshold schemes, each in share-major and pixel-major
//!   (alternate) fill order.
//!
//! All randomness goes through [`EntropyEngine`](crate::rng::EntropyEngine),
//! so every decision is unbiased.

mod core;
mod deterministic;
mod params;
mod probabilistic;
mod random_grid;
mod scratch;

pub use self::core::{split, split_with_os_entropy};
pub use params::{FillOrder, GridThreshold, Scheme, ShareParams, block_shape};
