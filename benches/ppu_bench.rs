// PPU benchmarks: per-dot clock throughput, since `Ppu::step` runs three
// times per CPU cycle and is the hottest inner loop in the core.

use criterion::{criterion_group, criterion_main, Criterion};
use nes_core::{Cartridge, Ppu};
use std::hint::black_box;

const DOTS_PER_FRAME: u32 = 341 * 262;

fn test_cartridge() -> Cartridge {
    let mut data = vec![0x4E, 0x45, 0x53, 0x1A, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
    data.extend(vec![0u8; 16 * 1024]);
    data.extend(vec![0xAAu8; 8 * 1024]);
    Cartridge::load(&data).unwrap()
}

fn bench_ppu_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("ppu_step");

    group.bench_function("single_dot", |b| {
        let mut ppu = Ppu::new();
        let mut cart = test_cartridge();
        b.iter(|| {
            black_box(ppu.step(Some(&mut cart)));
        });
    });

    group.bench_function("one_scanline", |b| {
        let mut ppu = Ppu::new();
        let mut cart = test_cartridge();
        b.iter(|| {
            for _ in 0..341 {
                black_box(ppu.step(Some(&mut cart)));
            }
        });
    });

    group.finish();
}

fn bench_full_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("ppu_rendering");
    group.sample_size(20);

    group.bench_function("full_frame_via_step", |b| {
        let mut ppu = Ppu::new();
        let mut cart = test_cartridge();

        b.iter(|| {
            for _ in 0..DOTS_PER_FRAME {
                black_box(ppu.step(Some(&mut cart)));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_ppu_step, bench_full_frame);
criterion_main!(benches);
