// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Luminance conversion with ITU-R BT.601 weights.
//
// `DynamicImage::to_luma8` uses BT.709 weights, so BT.601 is computed here.

use image::{GrayImage, Luma, Rgb, RgbImage};

use super::saturate_u8;

pub const LUMA_R: f32 = 0.299;
pub const LUMA_G: f32 = 0.587;
pub const LUMA_B: f32 = 0.114;

/// Single-channel luminance of an RGB image.
pub fn to_luma_bt601(rgb: &RgbImage) -> GrayImage {
    GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
        let Rgb([r, g, b]) = *rgb.get_pixel(x, y);
        let luma = LUMA_R * r as f32 + LUMA_G * g as f32 + LUMA_B * b as f32;
        Luma([saturate_u8(luma)])
    })
}
