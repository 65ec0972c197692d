// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Fixed-size Gaussian smoothing.
//
// `imageproc::filter::gaussian_blur_f32` picks its kernel width from sigma.
// The pipeline needs an explicit kernel size, so the separable convolution is
// done here with a caller-chosen width and reflect-101 borders.

use image::{GrayImage, Luma};
use tracing::debug;

use super::saturate_u8;

/// Normalised 1-D Gaussian weights of length `size` (odd) centred on `size / 2`.
pub fn gaussian_kernel(size: u32, sigma: f32) -> Vec<f32> {
    let center = (size / 2) as f32;
    let denom = 2.0 * sigma * sigma;
    let mut kernel: Vec<f32> = (0..size)
        .map(|i| {
            let d = i as f32 - center;
            (-(d * d) / denom).exp()
        })
        .collect();

    let sum: f32 = kernel.iter().sum();
    if sum > 0.0 {
        for w in &mut kernel {
            *w /= sum;
        }
    }
    kernel
}

/// Smooth `gray` with a `size` x `size` Gaussian of standard deviation `sigma`.
pub fn gaussian_blur_exact(gray: &GrayImage, size: u32, sigma: f32) -> GrayImage {
    let (w, h) = gray.dimensions();
    if w == 0 || h == 0 {
        return gray.clone();
    }

    let kernel = gaussian_kernel(size, sigma);
    let radius = (size / 2) as i64;
    debug!(size, sigma, ?kernel, "Gaussian kernel built");

    let (wu, hu) = (w as usize, h as usize);
    let src = gray.as_raw();

    // Horizontal pass into an f32 scratch buffer.
    let mut tmp = vec![0.0f32; wu * hu];
    for y in 0..hu {
        let row = &src[y * wu..(y + 1) * wu];
        for x in 0..wu {
            let mut acc = 0.0f32;
            for (k, weight) in kernel.iter().enumerate() {
                let sx = reflect_101(x as i64 + k as i64 - radius, wu);
                acc += weight * row[sx] as f32;
            }
            tmp[y * wu + x] = acc;
        }
    }

    // Vertical pass.
    let mut out = GrayImage::new(w, h);
    for y in 0..hu {
        for x in 0..wu {
            let mut acc = 0.0f32;
            for (k, weight) in kernel.iter().enumerate() {
                let sy = reflect_101(y as i64 + k as i64 - radius, hu);
                acc += weight * tmp[sy * wu + x];
            }
            out.put_pixel(x as u32, y as u32, Luma([saturate_u8(acc)]));
        }
    }

    out
}

/// Mirror an out-of-range index without repeating the edge sample
/// (`dcb|abcd|cba`).
fn reflect_101(mut i: i64, len: usize) -> usize {
    let n = len as i64;
    if n == 1 {
        return 0;
    }
    while i < 0 || i >= n {
        if i < 0 {
            i = -i;
        }
        if i >= n {
            i = 2 * n - 2 - i;
        }
    }
    i as usize
}
