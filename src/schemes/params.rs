//! Scheme selection and parameter validation.
//!
//! [`ShareParams`] is the whole configuration of a run: which construction
//! to use and how many shares to produce. It is validated before anything is
//! allocated or any entropy is read, so a bad request never costs more than
//! the check itself.
//!
//! Schemes also have a compact textual form (see [`Scheme`]'s `FromStr`
//! implementation), intended for command lines and configuration files.

use std::fmt;
use std::str::FromStr;

use crate::basis::{MAX_SHARES, MIN_SHARES, check_share_count};
use crate::error::{Error, ParamError, Result};

/// How many shares a random-grid run needs to reveal the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridThreshold {
    /// (n, n): all shares.
    All,
    /// (2, n): any two shares.
    Pair,
    /// (k, n): any `k` shares.
    Of(usize),
}

/// Order in which random-grid shares are filled.
///
/// Both orders produce the same distribution per pixel and per share; they
/// differ only in the order entropy is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillOrder {
    /// Complete one share over every pixel before starting the next.
    #[default]
    ShareMajor,
    /// Compute every share's value for one pixel before moving on
    /// (the "alternate" formulation).
    PixelMajor,
}

/// A visual secret sharing construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scheme {
    /// Naor-Shamir: each pixel expands to a block of `2^(n-1)` sub-pixels.
    #[default]
    Deterministic,
    /// One random basis column per pixel, no expansion.
    Probabilistic,
    /// Coin-flip constructions without basis matrices, no expansion.
    RandomGrid {
        threshold: GridThreshold,
        order: FillOrder,
    },
}

impl Scheme {
    /// Whether shares are larger than the secret.
    pub fn is_expanding(&self) -> bool {
        matches!(self, Scheme::Deterministic)
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scheme::Deterministic => f.write_str("deterministic"),
            Scheme::Probabilistic => f.write_str("probabilistic"),
            Scheme::RandomGrid { threshold, order } => {
                let alt = match order {
                    FillOrder::ShareMajor => "",
                    FillOrder::PixelMajor => "-alt",
                };
                match threshold {
                    GridThreshold::All => write!(f, "rg-nn{alt}"),
                    GridThreshold::Pair => write!(f, "rg-2n{alt}"),
                    GridThreshold::Of(k) => write!(f, "rg-kn{alt}:{k}"),
                }
            }
        }
    }
}

impl FromStr for Scheme {
    type Err = Error;

    /// Parses `deterministic`, `probabilistic`, `rg-nn`, `rg-2n` or
    /// `rg-kn:<k>`. Random-grid names accept an `-alt` suffix before the
    /// threshold for the pixel-major order, e.g. `rg-kn-alt:3`.
    fn from_str(s: &str) -> Result<Self> {
        let unknown = || Error::from(ParamError::UnknownScheme(s.to_owned()));
        let lower = s.trim().to_ascii_lowercase();

        let (name, k) = match lower.split_once(':') {
            Some((name, k)) => (name, Some(k.parse::<usize>().map_err(|_| unknown())?)),
            None => (lower.as_str(), None),
        };

        let (base, order) = match name.strip_suffix("-alt") {
            Some(base) => (base, FillOrder::PixelMajor),
            None => (name, FillOrder::ShareMajor),
        };

        let threshold = match (base, k) {
            ("deterministic", None) if order == FillOrder::ShareMajor => {
                return Ok(Scheme::Deterministic);
            }
            ("probabilistic", None) if order == FillOrder::ShareMajor => {
                return Ok(Scheme::Probabilistic);
            }
            ("rg-nn", None) => GridThreshold::All,
            ("rg-2n", None) => GridThreshold::Pair,
            ("rg-kn", Some(k)) => GridThreshold::Of(k),
            _ => return Err(unknown()),
        };

        Ok(Scheme::RandomGrid { threshold, order })
    }
}

/// Everything a share generation run needs besides the secret and entropy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareParams {
    /// Construction to use.
    pub scheme: Scheme,
    /// Number of shares `n` (2..=8).
    pub shares: usize,
}

impl ShareParams {
    /// Builds and validates parameters.
    pub fn new(scheme: Scheme, shares: usize) -> Result<Self> {
        let params = Self { scheme, shares };
        params.validate()?;
        Ok(params)
    }

    /// Checks share count and threshold.
    pub fn validate(&self) -> std::result::Result<(), ParamError> {
        if !(MIN_SHARES..=MAX_SHARES).contains(&self.shares) {
            return Err(ParamError::ShareCount {
                shares: self.shares,
                min: MIN_SHARES,
                max: MAX_SHARES,
            });
        }

        if let Scheme::RandomGrid {
            threshold: GridThreshold::Of(k),
            ..
        } = self.scheme
        {
            if !(2..=self.shares).contains(&k) {
                return Err(ParamError::Threshold {
                    threshold: k,
                    shares: self.shares,
                });
            }
        }

        Ok(())
    }

    /// Pixel expansion `(height, width)` of each share relative to the
    /// secret. `(1, 1)` for non-expanding schemes.
    pub fn expansion(&self) -> Result<(usize, usize)> {
        self.validate()?;

        if self.scheme.is_expanding() {
            block_shape(self.shares)
        } else {
            Ok((1, 1))
        }
    }
}

impl Default for ShareParams {
    /// Deterministic scheme, two shares.
    fn default() -> Self {
        Self {
            scheme: Scheme::Deterministic,
            shares: MIN_SHARES,
        }
    }
}

fn ceil_sqrt(value: usize) -> usize {
    let root = value.isqrt();
    if root * root < value { root + 1 } else { root }
}

/// Sub-pixel block shape of the deterministic scheme for `n` shares.
///
/// With `m = 2^(n-1)`: odd `n` gives a square `ceil(sqrt m)` block, even `n`
/// a block `ceil(sqrt(m/2))` high and twice as wide. Either way the block
/// holds exactly `m` sub-pixels.
pub fn block_shape(n: usize) -> Result<(usize, usize)> {
    check_share_count(n)?;

    let m = 1usize << (n - 1);
    if n % 2 == 1 {
        let side = ceil_sqrt(m);
        Ok((side, side))
    } else {
        let side = ceil_sqrt(m / 2);
        Ok((side, 2 * side))
    }
}
