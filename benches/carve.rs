use criterion::{black_box, criterion_group, criterion_main, Criterion};
use seamcarve::{reduce, DynamicSeamFinder, EnergyField, Pixel, PixelGrid, SeamFinder};

// Something with structure in it, so the seams wander.
fn noisy(width: u32, height: u32) -> PixelGrid {
    let pixels = (0..width * height)
        .map(|i| {
            let v = i.wrapping_mul(2_654_435_761) >> 24;
            Pixel::opaque(v as u8, (v >> 1) as u8, (i % 251) as u8)
        })
        .collect();
    PixelGrid::from_pixels(width, height, pixels).unwrap()
}

fn bench_energy(c: &mut Criterion) {
    let grid = noisy(256, 256);
    c.bench_function("energy 256x256", |b| {
        b.iter(|| EnergyField::compute(black_box(&grid)))
    });
}

fn bench_seam(c: &mut Criterion) {
    let energy = EnergyField::compute(&noisy(256, 256));
    let finder = DynamicSeamFinder::new();
    c.bench_function("seam 256x256", |b| {
        b.iter(|| finder.find_seam(black_box(&energy)).unwrap())
    });
}

fn bench_reduce(c: &mut Criterion) {
    let grid = noisy(128, 96);
    c.bench_function("reduce 128x96 by 16x8", |b| {
        b.iter(|| reduce(black_box(&grid), 16, 8).unwrap())
    });
}

criterion_group!(benches, bench_energy, bench_seam, bench_reduce);
criterion_main!(benches);
