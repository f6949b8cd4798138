//! Entry points for share generation.
//!
//! [`split`] is the single place where a run starts: it validates the
//! parameters, wraps the entropy source in an [`EntropyEngine`], dispatches
//! to the selected construction and hands back the finished shares.
//!
//! A run either returns all `n` shares or an error. On error every buffer
//! allocated so far is dropped before the error reaches the caller.

use super::params::{GridThreshold, Scheme, ShareParams};
use super::{deterministic, probabilistic, random_grid};
use crate::error::Result;
use crate::pixels::PixelMatrix;
use crate::rng::{EntropyEngine, EntropySource, OsEntropy};

/// Splits `secret` into `params.shares` shares using bytes from `source`.
///
/// # Arguments
///
/// - `secret`  
///   Binary secret image.
/// - `params`  
///   Scheme and share count. Validated before anything else happens.
/// - `source`  
///   Entropy, consumed strictly in order. Pass `&mut source` to keep using
///   the source after the run.
///
/// # Returns
///
/// The shares, in participant order. Deterministic-scheme shares are
/// [`ShareParams::expansion`] times larger than the secret; all others have
/// the secret's dimensions.
///
/// # Errors
///
/// - [`Error::InvalidParameter`](crate::Error::InvalidParameter) if the
///   share count or threshold is out of range. No entropy is consumed.
/// - [`Error::EntropyExhausted`](crate::Error::EntropyExhausted),
///   [`Error::Io`](crate::Error::Io) or
///   [`Error::AllocationFailure`](crate::Error::AllocationFailure) if the run
///   had to be aborted.
pub fn split<S: EntropySource>(
    secret: &PixelMatrix,
    params: &ShareParams,
    source: S,
) -> Result<Vec<PixelMatrix>> {
    params.validate()?;

    let n = params.shares;
    let mut engine = EntropyEngine::new(source);

    tracing::debug!(
        scheme = %params.scheme,
        shares = n,
        height = secret.height(),
        width = secret.width(),
        "splitting secret"
    );

    let result = match params.scheme {
        Scheme::Deterministic => deterministic::split(secret, n, &mut engine),
        Scheme::Probabilistic => probabilistic::split(secret, n, &mut engine),
        Scheme::RandomGrid { threshold, order } => match threshold {
            GridThreshold::All => random_grid::split_all(secret, n, order, &mut engine),
            GridThreshold::Pair => random_grid::split_pair(secret, n, order, &mut engine),
            GridThreshold::Of(k) => {
                random_grid::split_threshold(secret, k, n, order, &mut engine)
            }
        },
    };

    match &result {
        Ok(shares) => tracing::debug!(
            scheme = %params.scheme,
            share_height = shares[0].height(),
            share_width = shares[0].width(),
            "shares generated"
        ),
        Err(err) => tracing::debug!(scheme = %params.scheme, %err, "share generation aborted"),
    }

    result
}

/// [`split`] with bytes from the operating system generator.
pub fn split_with_os_entropy(
    secret: &PixelMatrix,
    params: &ShareParams,
) -> Result<Vec<PixelMatrix>> {
    split(secret, params, OsEntropy)
}
