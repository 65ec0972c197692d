// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Per-pixel arithmetic: linear enhance, mask broadcast, weighted blend.
// All results saturate into [0, 255]; nothing wraps.

use image::{GrayImage, Rgb, RgbImage};
use obscura_core::error::{ObscuraError, Result};

use super::saturate_u8;

/// `alpha * pixel + beta` on every channel, saturated.
pub fn enhance(rgb: &RgbImage, alpha: f32, beta: f32) -> RgbImage {
    // Only 256 distinct inputs, so precompute them.
    let lut: [u8; 256] = std::array::from_fn(|v| saturate_u8(alpha * v as f32 + beta));
    let mut out = rgb.clone();
    for channel in out.iter_mut() {
        *channel = lut[*channel as usize];
    }
    out
}

/// Replicate a single-channel mask into three identical channels.
pub fn broadcast_mask(mask: &GrayImage) -> RgbImage {
    RgbImage::from_fn(mask.width(), mask.height(), |x, y| {
        let v = mask.get_pixel(x, y).0[0];
        Rgb([v, v, v])
    })
}

/// `weight_a * a + weight_b * b` per channel, saturated.
///
/// The weights need not sum to one.
pub fn blend_weighted(a: &RgbImage, weight_a: f32, b: &RgbImage, weight_b: f32) -> Result<RgbImage> {
    if a.dimensions() != b.dimensions() {
        return Err(ObscuraError::Processing(format!(
            "cannot blend {:?} with {:?}",
            a.dimensions(),
            b.dimensions()
        )));
    }

    let mut out = a.clone();
    for (dst, &src) in out.iter_mut().zip(b.iter()) {
        *dst = saturate_u8(weight_a * *dst as f32 + weight_b * src as f32);
    }
    Ok(out)
}
