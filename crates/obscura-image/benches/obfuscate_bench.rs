// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the obfuscation pipeline. Covers the pure pixel
// path on a canvas-sized source and the resample-heavy path on a large one.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use image::{DynamicImage, Rgb, RgbImage};

use obscura_image::ImageObfuscator;

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Synthetic source: dark background with a bright rectangle, giving the
/// edge stage real work along four borders.
fn synthetic(width: u32, height: u32) -> DynamicImage {
    let mut img = RgbImage::from_pixel(width, height, Rgb([30, 30, 30]));
    for y in height / 6..height * 5 / 6 {
        for x in width / 6..width * 5 / 6 {
            img.put_pixel(x, y, Rgb([240, 230, 220]));
        }
    }
    DynamicImage::ImageRgb8(img)
}

fn bench_obfuscate_canvas_sized(c: &mut Criterion) {
    let source = synthetic(512, 512);
    let obfuscator = ImageObfuscator::default();

    c.bench_function("obfuscate_image (512x512)", |b| {
        b.iter(|| {
            let out = obfuscator.obfuscate_image(black_box(&source));
            black_box(out.ok());
        });
    });
}

fn bench_obfuscate_large(c: &mut Criterion) {
    let source = synthetic(3000, 2000);
    let obfuscator = ImageObfuscator::default();

    c.bench_function("obfuscate_image (3000x2000)", |b| {
        b.iter(|| {
            let out = obfuscator.obfuscate_image(black_box(&source));
            black_box(out.ok());
        });
    });
}

criterion_group!(benches, bench_obfuscate_canvas_sized, bench_obfuscate_large);
criterion_main!(benches);
