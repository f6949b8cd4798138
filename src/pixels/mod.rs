//! Binary pixel buffers.
//!
//! Secrets and shares are both [`PixelMatrix`] values: row-major buffers of
//! [`WHITE`] (0) and [`BLACK`] (1). Decoding bitmap files into this form and
//! writing shares back out are left to the caller; this module only provides
//! the buffer itself, the luminance threshold used to binarize a 24-bit
//! image, and the stacking operations used to reconstruct a secret.

mod matrix;
mod stack;

pub use matrix::{BLACK, PixelMatrix, WHITE};
pub use stack::stack;
