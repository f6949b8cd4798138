use std::io::Cursor;

use visualcrypt::pixels::{PixelMatrix, stack};
use visualcrypt::rng::{Csprng, EntropySource, ReaderSource};
use visualcrypt::schemes::{Scheme, ShareParams, split, split_with_os_entropy};
use visualcrypt::{Error, ParamError, Result};

/// Counts how many bytes were requested.
struct Counting {
    inner: Csprng,
    requested: usize,
}

impl EntropySource for Counting {
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<()> {
        self.requested += buf.len();
        self.inner.fill_bytes(buf);
        Ok(())
    }
}

fn counting() -> Counting {
    Counting {
        inner: Csprng::from_seed([1u8; 32]),
        requested: 0,
    }
}

fn secret() -> PixelMatrix {
    PixelMatrix::from_pixels(3, 3, vec![1, 0, 1, 0, 1, 0, 1, 0, 1]).unwrap()
}

#[test]
fn test_invalid_parameters_consume_no_entropy() {
    let bad = [
        ShareParams {
            scheme: Scheme::Deterministic,
            shares: 9,
        },
        ShareParams {
            scheme: Scheme::Probabilistic,
            shares: 1,
        },
        ShareParams {
            scheme: "rg-kn:6".parse().unwrap(),
            shares: 5,
        },
        ShareParams {
            scheme: "rg-kn-alt:1".parse().unwrap(),
            shares: 5,
        },
    ];

    for params in &bad {
        let mut source = counting();
        let err = split(&secret(), params, &mut source).unwrap_err();

        assert!(matches!(err, Error::InvalidParameter(_)), "{params:?}");
        assert!(!err.is_fatal());
        assert_eq!(source.requested, 0);
    }
}

#[test]
fn test_exhausted_source_aborts_the_run() {
    let big = PixelMatrix::new(32, 32).unwrap();

    for name in ["deterministic", "probabilistic", "rg-nn", "rg-2n-alt", "rg-kn:2"] {
        let params = ShareParams::new(name.parse().unwrap(), 3).unwrap();
        let source = ReaderSource::new(Cursor::new(vec![0x5au8; 256]));

        let err = split(&big, &params, source).unwrap_err();
        assert!(matches!(err, Error::EntropyExhausted), "{name}");
        assert!(err.is_fatal());
    }
}

#[test]
fn test_source_stays_usable_after_a_run() {
    let params = ShareParams::new(Scheme::Probabilistic, 3).unwrap();
    let mut source = counting();

    let first = split(&secret(), &params, &mut source).unwrap();
    let used = source.requested;
    let second = split(&secret(), &params, &mut source).unwrap();

    assert!(used > 0);
    assert!(source.requested > used);
    assert_ne!(first, second);
}

#[test]
fn test_all_shares_reconstruct_black() {
    let names = [
        "deterministic",
        "probabilistic",
        "rg-nn",
        "rg-nn-alt",
        "rg-kn:3",
        "rg-kn-alt:3",
    ];
    let secret = secret();

    for name in names {
        let params = ShareParams::new(name.parse().unwrap(), 4).unwrap();
        let shares = split(&secret, &params, Csprng::from_seed([2u8; 32])).unwrap();
        let (h, w) = params.expansion().unwrap();

        assert_eq!(shares.len(), 4);
        let stacked = stack(&shares).unwrap();
        assert_eq!(stacked.dimensions(), (3 * h, 3 * w));

        for row in 0..3 {
            for col in 0..3 {
                if secret.is_black(row, col) {
                    for r in 0..h {
                        for c in 0..w {
                            assert!(stacked.is_black(row * h + r, col * w + c), "{name}");
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn test_os_entropy_run() {
    let params = ShareParams::new(Scheme::Deterministic, 2).unwrap();
    let shares = split_with_os_entropy(&secret(), &params).unwrap();

    let (h, w) = params.expansion().unwrap();
    let recovered = stack(&shares).unwrap().collapse_blocks(h, w).unwrap();

    assert_eq!(recovered, secret());
}

#[test]
fn test_unknown_scheme_is_a_parameter_error() {
    let err = "rg-3n".parse::<Scheme>().unwrap_err();

    assert!(matches!(
        err,
        Error::InvalidParameter(ParamError::UnknownScheme(ref name)) if name == "rg-3n"
    ));
}
