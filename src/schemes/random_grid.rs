//! Random-grid constructions.
//!
//! No basis matrices and no pixel expansion: shares are built from
//! independent coin flips and the secret bit alone.
//!
//! The building block is the (2, 2) rule. The first grid is pure noise; the
//! second copies it where the secret is white and complements it where the
//! secret is black. Stacked, black pixels are always black and white pixels
//! are black half of the time.
//!
//! - (n, n) chains the rule: each new grid is derived from the running
//!   "virtual secret", which is then folded into it.
//! - (2, n) derives every share from the first one.
//! - (k, n) builds k helpers with the (k, k) construction and scatters them
//!   over a random choice of k shares per pixel; the other shares get noise.
//!
//! Every variant comes in two fill orders (see [`FillOrder`]) with the same
//! distribution per pixel and per share.

use super::params::FillOrder;
use super::scratch::allocate_shares;
use crate::error::Result;
use crate::pixels::{BLACK, PixelMatrix};
use crate::rng::{EntropyEngine, EntropySource};

fn random_grid<S: EntropySource>(
    template: &PixelMatrix,
    engine: &mut EntropyEngine<S>,
) -> Result<PixelMatrix> {
    let mut grid = template.blank_like()?;
    for pixel in grid.as_mut_slice() {
        *pixel = engine.coin()?;
    }
    Ok(grid)
}

/// (n, n): all shares needed.
pub(crate) fn split_all<S: EntropySource>(
    secret: &PixelMatrix,
    n: usize,
    order: FillOrder,
    engine: &mut EntropyEngine<S>,
) -> Result<Vec<PixelMatrix>> {
    match order {
        FillOrder::ShareMajor => all_share_major(secret, n, engine),
        FillOrder::PixelMajor => all_pixel_major(secret, n, engine),
    }
}

fn all_share_major<S: EntropySource>(
    secret: &PixelMatrix,
    n: usize,
    engine: &mut EntropyEngine<S>,
) -> Result<Vec<PixelMatrix>> {
    let mut shares = Vec::with_capacity(n);

    let mut carry = secret.blank_like()?;
    carry.as_mut_slice().copy_from_slice(secret.as_slice());

    for _ in 1..n {
        let grid = random_grid(secret, engine)?;

        // (2, 2) rule with `carry` as the secret: the derived grid replaces it.
        carry
            .as_mut_slice()
            .iter_mut()
            .zip(grid.as_slice())
            .for_each(|(c, g)| *c ^= *g);

        shares.push(grid);
    }

    shares.push(carry);
    Ok(shares)
}

fn all_pixel_major<S: EntropySource>(
    secret: &PixelMatrix,
    n: usize,
    engine: &mut EntropyEngine<S>,
) -> Result<Vec<PixelMatrix>> {
    let mut shares = allocate_shares(n, secret.height(), secret.width())?;

    for (index, &pixel) in secret.as_slice().iter().enumerate() {
        let mut carry = pixel;

        for share in &mut shares[..n - 1] {
            let bit = engine.coin()?;
            share.as_mut_slice()[index] = bit;
            carry ^= bit;
        }

        shares[n - 1].as_mut_slice()[index] = carry;
    }

    Ok(shares)
}

/// (2, n): any two shares reveal the secret.
pub(crate) fn split_pair<S: EntropySource>(
    secret: &PixelMatrix,
    n: usize,
    order: FillOrder,
    engine: &mut EntropyEngine<S>,
) -> Result<Vec<PixelMatrix>> {
    match order {
        FillOrder::ShareMajor => pair_share_major(secret, n, engine),
        FillOrder::PixelMajor => pair_pixel_major(secret, n, engine),
    }
}

fn pair_share_major<S: EntropySource>(
    secret: &PixelMatrix,
    n: usize,
    engine: &mut EntropyEngine<S>,
) -> Result<Vec<PixelMatrix>> {
    let mut shares = Vec::with_capacity(n);
    let first = random_grid(secret, engine)?;

    for _ in 1..n {
        let mut share = secret.blank_like()?;

        for ((out, &pixel), &base) in share
            .as_mut_slice()
            .iter_mut()
            .zip(secret.as_slice())
            .zip(first.as_slice())
        {
            *out = if pixel == BLACK { engine.coin()? } else { base };
        }

        shares.push(share);
    }

    shares.insert(0, first);
    Ok(shares)
}

fn pair_pixel_major<S: EntropySource>(
    secret: &PixelMatrix,
    n: usize,
    engine: &mut EntropyEngine<S>,
) -> Result<Vec<PixelMatrix>> {
    let mut shares = allocate_shares(n, secret.height(), secret.width())?;

    for (index, &pixel) in secret.as_slice().iter().enumerate() {
        let base = engine.coin()?;
        shares[0].as_mut_slice()[index] = base;

        for share in &mut shares[1..] {
            share.as_mut_slice()[index] = if pixel == BLACK { engine.coin()? } else { base };
        }
    }

    Ok(shares)
}

/// (k, n): any `k` shares reveal the secret, fewer reveal nothing.
pub(crate) fn split_threshold<S: EntropySource>(
    secret: &PixelMatrix,
    k: usize,
    n: usize,
    order: FillOrder,
    engine: &mut EntropyEngine<S>,
) -> Result<Vec<PixelMatrix>> {
    match order {
        FillOrder::ShareMajor => threshold_share_major(secret, k, n, engine),
        FillOrder::PixelMajor => threshold_pixel_major(secret, k, n, engine),
    }
}

fn threshold_share_major<S: EntropySource>(
    secret: &PixelMatrix,
    k: usize,
    n: usize,
    engine: &mut EntropyEngine<S>,
) -> Result<Vec<PixelMatrix>> {
    let helpers = all_share_major(secret, k, engine)?;
    let mut shares = allocate_shares(n, secret.height(), secret.width())?;
    let mut order: Vec<usize> = (0..n).collect();

    for index in 0..secret.len() {
        engine.shuffle(&mut order)?;

        for (helper, &share) in helpers.iter().zip(&order[..k]) {
            shares[share].as_mut_slice()[index] = helper.as_slice()[index];
        }
        for &share in &order[k..] {
            shares[share].as_mut_slice()[index] = engine.coin()?;
        }
    }

    Ok(shares)
}

fn threshold_pixel_major<S: EntropySource>(
    secret: &PixelMatrix,
    k: usize,
    n: usize,
    engine: &mut EntropyEngine<S>,
) -> Result<Vec<PixelMatrix>> {
    let mut shares = allocate_shares(n, secret.height(), secret.width())?;
    let mut bits = vec![0u8; k];
    let mut checklist = vec![false; n];

    for (index, &pixel) in secret.as_slice().iter().enumerate() {
        // (k, k) bits for this pixel.
        let mut carry = pixel;
        for bit in &mut bits[..k - 1] {
            *bit = engine.coin()?;
            carry ^= *bit;
        }
        bits[k - 1] = carry;

        checklist.fill(false);
        engine.draw_without_replacement(&mut checklist, k, |position, share| {
            shares[share].as_mut_slice()[index] = bits[position];
        })?;

        for (share, _) in shares.iter_mut().zip(&checklist).filter(|(_, used)| !**used) {
            share.as_mut_slice()[index] = engine.coin()?;
        }
    }

    Ok(shares)
}
