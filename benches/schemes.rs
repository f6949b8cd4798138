use visualcrypt::pixels::PixelMatrix;
use visualcrypt::rng::{Csprng, EntropyEngine};
use visualcrypt::schemes::{Scheme, ShareParams, split};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn checkerboard(side: usize) -> PixelMatrix {
    let pixels = (0..side * side)
        .map(|i| ((i / side + i % side) % 2) as u8)
        .collect();
    PixelMatrix::from_pixels(side, side, pixels).unwrap()
}

pub fn bench_schemes(c: &mut Criterion) {
    let secret = checkerboard(64);

    for name in ["deterministic", "probabilistic", "rg-nn", "rg-2n", "rg-kn:3", "rg-kn-alt:3"] {
        let params = ShareParams::new(name.parse::<Scheme>().unwrap(), 4).unwrap();
        let mut rng = Csprng::from_seed([0x42u8; 32]);

        c.bench_function(&format!("{name} 64x64, 4 shares"), |b| {
            b.iter(|| split(black_box(&secret), &params, &mut rng).unwrap())
        });
    }
}

pub fn bench_sampling(c: &mut Criterion) {
    let mut engine = EntropyEngine::new(Csprng::from_seed([0x42u8; 32]));
    let mut columns: Vec<usize> = (0..128).collect();

    c.bench_function("shuffle 128 columns", |b| {
        b.iter(|| engine.shuffle(black_box(&mut columns)).unwrap())
    });
}

criterion_group!(benches, bench_schemes, bench_sampling);
criterion_main!(benches);
