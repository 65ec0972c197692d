// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Filter stages of the obfuscation pipeline. Each stage is a free function
// over `image` buffers so it can be exercised on its own.

pub mod blend;
pub mod blur;
pub mod canny;
pub mod grayscale;
pub mod marker;
pub mod morphology;

pub use blend::{blend_weighted, broadcast_mask, enhance};
pub use blur::{gaussian_blur_exact, gaussian_kernel};
pub use canny::canny;
pub use grayscale::to_luma_bt601;
pub use marker::draw_marker;
pub use morphology::dilate_square;

/// Round to nearest (halves away from zero) and saturate into `u8`.
#[inline]
pub(crate) fn saturate_u8(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
