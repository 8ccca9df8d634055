// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `easel_pixmap` and the color conversions in `easel_style`.

use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use easel_pixmap::{BlitRect, Extent, Pixmap, clamp_blit, swap_red_blue};
use easel_style::Color;

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn next_i32(&mut self, lo: i32, hi: i32) -> i32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        let span = u64::from((hi - lo) as u32);
        lo + ((self.0 >> 32) % span) as i32
    }
}

fn requests(n: usize, seed: u64) -> Vec<BlitRect> {
    let mut rng = Lcg(seed);
    (0..n)
        .map(|_| BlitRect {
            dst_x: rng.next_i32(-600, 600),
            dst_y: rng.next_i32(-600, 600),
            src_x: rng.next_i32(-600, 600),
            src_y: rng.next_i32(-600, 600),
            width: rng.next_i32(-50, 1200),
            height: rng.next_i32(-50, 1200),
        })
        .collect()
}

fn bench_clamp(c: &mut Criterion) {
    let mut group = c.benchmark_group("easel_pixmap/clamp_blit");
    let reqs = requests(1024, 7);
    group.throughput(Throughput::Elements(reqs.len() as u64));
    group.bench_function("random_1024", |b| {
        b.iter(|| {
            let mut area = 0_i64;
            for &r in &reqs {
                let out = clamp_blit(Extent::new(512, 384), Extent::new(640, 480), black_box(r));
                area += i64::from(out.width) * i64::from(out.height);
            }
            black_box(area)
        });
    });
    group.finish();
}

fn bench_blit(c: &mut Criterion) {
    let mut group = c.benchmark_group("easel_pixmap/blit");
    for &side in &[64_i32, 256, 1024] {
        let mut src = Pixmap::new(side, side).unwrap();
        src.fill(Color::from_rgb(0x10, 0x80, 0xF0));
        let dst = Pixmap::new(side, side).unwrap();
        group.throughput(Throughput::Bytes((side * side * 4) as u64));
        group.bench_with_input(BenchmarkId::new("full", side), &side, |b, &side| {
            b.iter_batched(
                || dst.clone(),
                |mut dst| {
                    let rect = BlitRect {
                        dst_x: 0,
                        dst_y: 0,
                        src_x: 0,
                        src_y: 0,
                        width: side,
                        height: side,
                    };
                    black_box(dst.blit(&src, rect));
                    dst
                },
                BatchSize::LargeInput,
            );
        });
        group.bench_with_input(BenchmarkId::new("half_offscreen", side), &side, |b, &side| {
            b.iter_batched(
                || dst.clone(),
                |mut dst| {
                    let rect = BlitRect {
                        dst_x: -side / 2,
                        dst_y: side / 2,
                        src_x: 0,
                        src_y: 0,
                        width: side,
                        height: side,
                    };
                    black_box(dst.blit(&src, rect));
                    dst
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_swap(c: &mut Criterion) {
    let mut group = c.benchmark_group("easel_pixmap/swap_red_blue");
    for &side in &[256_usize, 1024] {
        let bytes = vec![0x5A_u8; side * side * 4];
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(side), &bytes, |b, bytes| {
            b.iter_batched(
                || bytes.clone(),
                |mut bytes| {
                    swap_red_blue(&mut bytes);
                    bytes
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_color_css(c: &mut Criterion) {
    let mut group = c.benchmark_group("easel_style/color_css");
    let colors: Vec<Color> = (0..4096_u32)
        .map(|i| Color(i.wrapping_mul(2_654_435_761)))
        .collect();
    let strings: Vec<String> = colors.iter().map(|c| c.to_css()).collect();
    group.throughput(Throughput::Elements(colors.len() as u64));
    group.bench_function("encode", |b| {
        b.iter(|| {
            for &c in &colors {
                black_box(c.to_css());
            }
        });
    });
    group.bench_function("decode", |b| {
        b.iter(|| {
            for s in &strings {
                black_box(Color::from_css(s).unwrap());
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_clamp, bench_blit, bench_swap, bench_color_css);
criterion_main!(benches);
