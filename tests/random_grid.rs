use visualcrypt::pixels::{BLACK, PixelMatrix, WHITE, stack};
use visualcrypt::rng::Csprng;
use visualcrypt::schemes::{FillOrder, GridThreshold, Scheme, ShareParams, split};

const SIDE: usize = 96;
const ORDERS: [FillOrder; 2] = [FillOrder::ShareMajor, FillOrder::PixelMajor];

fn solid(value: u8) -> PixelMatrix {
    PixelMatrix::from_pixels(SIDE, SIDE, vec![value; SIDE * SIDE]).unwrap()
}

fn grid(threshold: GridThreshold, order: FillOrder, n: usize) -> ShareParams {
    ShareParams::new(Scheme::RandomGrid { threshold, order }, n).unwrap()
}

fn shares_for(params: &ShareParams, color: u8, seed: u8) -> Vec<PixelMatrix> {
    split(&solid(color), params, Csprng::from_seed([seed; 32])).unwrap()
}

fn stacked_rate(shares: &[PixelMatrix], pick: &[usize]) -> f64 {
    let subset: Vec<PixelMatrix> = pick.iter().map(|&i| shares[i].clone()).collect();
    let stacked = stack(&subset).unwrap();
    stacked.count_black() as f64 / stacked.len() as f64
}

fn assert_rate(rate: f64, expected: f64, what: &str) {
    assert!(
        (rate - expected).abs() < 0.03,
        "{what}: rate {rate}, expected {expected}"
    );
}

#[test]
fn test_two_two_contrast() {
    for order in ORDERS {
        let params = grid(GridThreshold::All, order, 2);

        let black = shares_for(&params, BLACK, 1);
        let white = shares_for(&params, WHITE, 2);

        assert_eq!(stacked_rate(&black, &[0, 1]), 1.0);
        assert_rate(stacked_rate(&white, &[0, 1]), 0.5, "white");
    }
}

#[test]
fn test_n_n_reconstructs_black_for_every_n() {
    for order in ORDERS {
        for n in 2..=8 {
            let params = grid(GridThreshold::All, order, n);
            let shares = shares_for(&params, BLACK, n as u8);
            let all: Vec<usize> = (0..n).collect();

            assert_eq!(stacked_rate(&shares, &all), 1.0, "n = {n}, {order:?}");
        }
    }
}

#[test]
fn test_n_n_white_shows_through() {
    for order in ORDERS {
        let params = grid(GridThreshold::All, order, 3);
        let shares = shares_for(&params, WHITE, 11);

        assert_rate(stacked_rate(&shares, &[0, 1, 2]), 0.75, "white (3,3)");
    }
}

#[test]
fn test_n_n_missing_share_hides_secret() {
    for order in ORDERS {
        let params = grid(GridThreshold::All, order, 4);
        let black = shares_for(&params, BLACK, 21);
        let white = shares_for(&params, WHITE, 22);

        for missing in 0..4 {
            let pick: Vec<usize> = (0..4).filter(|&i| i != missing).collect();

            assert_rate(stacked_rate(&black, &pick), 0.875, "black");
            assert_rate(stacked_rate(&white, &pick), 0.875, "white");
        }
    }
}

#[test]
fn test_every_share_is_a_fair_coin() {
    let schemes = [
        (GridThreshold::All, 5),
        (GridThreshold::Pair, 5),
        (GridThreshold::Of(3), 5),
    ];

    for order in ORDERS {
        for (threshold, n) in schemes {
            let params = grid(threshold, order, n);

            for color in [WHITE, BLACK] {
                let shares = shares_for(&params, color, 31);

                for i in 0..n {
                    assert_rate(stacked_rate(&shares, &[i]), 0.5, "single share");
                }
            }
        }
    }
}

#[test]
fn test_pair_any_two_reveal() {
    for order in ORDERS {
        let params = grid(GridThreshold::Pair, order, 4);
        let black = shares_for(&params, BLACK, 41);
        let white = shares_for(&params, WHITE, 42);

        for a in 0..4 {
            for b in a + 1..4 {
                assert_rate(stacked_rate(&black, &[a, b]), 0.75, "black pair");
                assert_rate(stacked_rate(&white, &[a, b]), 0.5, "white pair");
            }
        }
    }
}

#[test]
fn test_pair_white_copies_first_share() {
    for order in ORDERS {
        let params = grid(GridThreshold::Pair, order, 5);
        let shares = shares_for(&params, WHITE, 43);

        for share in &shares[1..] {
            assert_eq!(share, &shares[0]);
        }
    }
}

#[test]
fn test_threshold_all_shares_reconstruct_black() {
    for order in ORDERS {
        let params = grid(GridThreshold::Of(3), order, 6);
        let shares = shares_for(&params, BLACK, 51);
        let all: Vec<usize> = (0..6).collect();

        assert_eq!(stacked_rate(&shares, &all), 1.0);
    }
}

#[test]
fn test_threshold_below_k_leaks_nothing() {
    // k = 3, n = 5: any two shares are independent fair coins.
    for order in ORDERS {
        let params = grid(GridThreshold::Of(3), order, 5);
        let black = shares_for(&params, BLACK, 61);
        let white = shares_for(&params, WHITE, 62);

        for a in 0..5 {
            for b in a + 1..5 {
                assert_rate(stacked_rate(&black, &[a, b]), 0.75, "black pair");
                assert_rate(stacked_rate(&white, &[a, b]), 0.75, "white pair");
            }
        }
    }
}

#[test]
fn test_threshold_k_shares_reveal() {
    // For a fixed 3-subset, one pixel in C(5,3) = 10 uses exactly those
    // shares as the qualified set:
    //   black: 0.1 * 1 + 0.9 * 7/8 = 0.8875
    //   white: 0.1 * 3/4 + 0.9 * 7/8 = 0.8625
    for order in ORDERS {
        let params = grid(GridThreshold::Of(3), order, 5);
        let black = shares_for(&params, BLACK, 71);
        let white = shares_for(&params, WHITE, 72);

        for pick in [[0, 1, 2], [0, 2, 4], [1, 3, 4]] {
            assert_rate(stacked_rate(&black, &pick), 0.8875, "black triple");
            assert_rate(stacked_rate(&white, &pick), 0.8625, "white triple");
            assert!(stacked_rate(&black, &pick) > stacked_rate(&white, &pick));
        }
    }
}

#[test]
fn test_threshold_equal_to_n_matches_all() {
    for order in ORDERS {
        let params = grid(GridThreshold::Of(4), order, 4);
        let black = shares_for(&params, BLACK, 81);
        let white = shares_for(&params, WHITE, 82);

        assert_eq!(stacked_rate(&black, &[0, 1, 2, 3]), 1.0);
        assert_rate(stacked_rate(&white, &[0, 1, 2, 3]), 0.875, "white");
    }
}

#[test]
fn test_orders_consume_entropy_differently() {
    let secret = solid(BLACK);
    let share_major = grid(GridThreshold::Of(2), FillOrder::ShareMajor, 3);
    let pixel_major = grid(GridThreshold::Of(2), FillOrder::PixelMajor, 3);

    let a = split(&secret, &share_major, Csprng::from_seed([9u8; 32])).unwrap();
    let b = split(&secret, &pixel_major, Csprng::from_seed([9u8; 32])).unwrap();

    assert_ne!(a, b);
}
