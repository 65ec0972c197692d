// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Binary/grayscale dilation with a square, all-ones structuring element.

use image::GrayImage;

/// Dilate `mask` with a `size` x `size` all-ones element, `iterations` times.
///
/// The element is anchored at `(size / 2, size / 2)`, so each output pixel is
/// the maximum over source columns `x - size/2 .. x - size/2 + size` and the
/// matching rows. For a 2x2 element that grows bright regions by one pixel
/// toward +x and +y. Neighbours outside the image are ignored.
///
/// A square max filter is separable, so rows and columns are processed in two
/// passes.
pub fn dilate_square(mask: &GrayImage, size: u32, iterations: u32) -> GrayImage {
    let mut current = mask.clone();
    if size <= 1 {
        return current;
    }
    for _ in 0..iterations {
        current = dilate_once(&current, size as usize);
    }
    current
}

fn dilate_once(src: &GrayImage, size: usize) -> GrayImage {
    let (w, h) = src.dimensions();
    let (wu, hu) = (w as usize, h as usize);
    let anchor = size / 2;
    let data = src.as_raw();

    // Horizontal max.
    let mut tmp = vec![0u8; wu * hu];
    for y in 0..hu {
        let row = &data[y * wu..(y + 1) * wu];
        for x in 0..wu {
            let (lo, hi) = window(x, anchor, size, wu);
            tmp[y * wu + x] = row[lo..hi].iter().copied().max().unwrap_or(0);
        }
    }

    // Vertical max.
    let mut out = vec![0u8; wu * hu];
    for y in 0..hu {
        let (lo, hi) = window(y, anchor, size, hu);
        for x in 0..wu {
            out[y * wu + x] = (lo..hi).map(|sy| tmp[sy * wu + x]).max().unwrap_or(0);
        }
    }

    GrayImage::from_raw(w, h, out).unwrap_or_else(|| src.clone())
}

/// Half-open source range covered by the element at `pos`, clipped to `[0, len)`.
fn window(pos: usize, anchor: usize, size: usize, len: usize) -> (usize, usize) {
    let lo = pos.saturating_sub(anchor);
    let hi = (pos + size - anchor).min(len);
    (lo, hi)
}
