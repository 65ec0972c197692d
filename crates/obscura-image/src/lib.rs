// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// obscura-image — Image obfuscation for Obscura.
//
// Provides image I/O (decode, resample to the canonical canvas, PNG encode,
// atomic file output), the individual filter stages (grayscale, Gaussian
// smoothing, Canny edges, dilation, enhance/blend, centre marker), and the
// `ImageObfuscator` pipeline that chains them.

pub mod filter;
pub mod image;
pub mod obfuscator;

// Re-export the primary entry points so callers can use `obscura_image::obfuscate` etc.
pub use crate::image::processor::ImageProcessor;
pub use obfuscator::pipeline::{ImageObfuscator, obfuscate, obfuscate_to_default};
