// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pipeline parameters. The constants below are the canonical filter settings;
// `ObfuscationParams::default()` reproduces them exactly.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ObscuraError, Result};

/// File written when the caller does not name an output path.
pub const DEFAULT_OUTPUT_PATH: &str = "obfuscated.png";

/// Width and height of the normalised canvas.
pub const CANVAS_SIZE: u32 = 512;

pub const BLUR_KERNEL_SIZE: u32 = 5;
pub const BLUR_SIGMA: f32 = 1.2;

pub const CANNY_LOW_THRESHOLD: f32 = 40.0;
pub const CANNY_HIGH_THRESHOLD: f32 = 100.0;

/// Side length of the square, all-ones structuring element.
pub const DILATE_SIZE: u32 = 2;
pub const DILATE_ITERATIONS: u32 = 1;

/// `enhanced = alpha * pixel + beta`
pub const CONTRAST_ALPHA: f32 = 1.1;
pub const CONTRAST_BETA: f32 = 10.0;

/// `composite = image_weight * enhanced + edge_weight * edges`
/// The weights intentionally do not sum to 1; bright edges clip.
pub const IMAGE_WEIGHT: f32 = 0.85;
pub const EDGE_WEIGHT: f32 = 0.5;

pub const MARKER_CENTER: (i32, i32) = (256, 256);
pub const MARKER_RADIUS: i32 = 3;
pub const MARKER_COLOR: [u8; 3] = [255, 255, 255];

/// Upper bounds accepted by `ObfuscationParams::validate`.
pub const MAX_CANVAS_SIZE: u32 = 8192;
pub const MAX_BLUR_KERNEL_SIZE: u32 = 255;
pub const MAX_DILATE_SIZE: u32 = 255;
pub const MAX_DILATE_ITERATIONS: u32 = 64;
pub const MAX_MARKER_RADIUS: i32 = MAX_CANVAS_SIZE as i32;
/// Marker centre coordinates must lie within this distance of the origin.
pub const MAX_MARKER_OFFSET: i32 = 4 * MAX_CANVAS_SIZE as i32;

/// Tunable settings for the obfuscation pipeline.
///
/// Missing fields in a JSON document fall back to the defaults, so a
/// parameter file only needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObfuscationParams {
    /// Output width and height in pixels.
    pub canvas_size: u32,
    /// Gaussian kernel width/height (odd).
    pub blur_kernel_size: u32,
    /// Gaussian standard deviation.
    pub blur_sigma: f32,
    /// Hysteresis low threshold.
    pub canny_low: f32,
    /// Hysteresis high threshold.
    pub canny_high: f32,
    /// Side of the square structuring element.
    pub dilate_size: u32,
    /// Number of dilation passes.
    pub dilate_iterations: u32,
    /// Enhance gain.
    pub contrast_alpha: f32,
    /// Enhance offset.
    pub contrast_beta: f32,
    /// Blend weight of the enhanced image.
    pub image_weight: f32,
    /// Blend weight of the edge mask.
    pub edge_weight: f32,
    /// Marker centre as `(x, y)`.
    pub marker_center: (i32, i32),
    /// Marker radius in pixels.
    pub marker_radius: i32,
    /// Marker RGB colour.
    pub marker_color: [u8; 3],
}

impl Default for ObfuscationParams {
    fn default() -> Self {
        Self {
            canvas_size: CANVAS_SIZE,
            blur_kernel_size: BLUR_KERNEL_SIZE,
            blur_sigma: BLUR_SIGMA,
            canny_low: CANNY_LOW_THRESHOLD,
            canny_high: CANNY_HIGH_THRESHOLD,
            dilate_size: DILATE_SIZE,
            dilate_iterations: DILATE_ITERATIONS,
            contrast_alpha: CONTRAST_ALPHA,
            contrast_beta: CONTRAST_BETA,
            image_weight: IMAGE_WEIGHT,
            edge_weight: EDGE_WEIGHT,
            marker_center: MARKER_CENTER,
            marker_radius: MARKER_RADIUS,
            marker_color: MARKER_COLOR,
        }
    }
}

impl ObfuscationParams {
    /// Load parameters from a JSON file and validate them.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&data)
    }

    /// Parse parameters from a JSON string and validate them.
    pub fn from_json_str(data: &str) -> Result<Self> {
        let params: Self = serde_json::from_str(data)?;
        params.validate()?;
        Ok(params)
    }

    /// Pretty-printed JSON representation.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject settings the pipeline cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.canvas_size == 0 || self.canvas_size > MAX_CANVAS_SIZE {
            return Err(invalid(format!(
                "canvas_size must be in 1..={MAX_CANVAS_SIZE}, got {}",
                self.canvas_size
            )));
        }
        if self.blur_kernel_size == 0
            || self.blur_kernel_size % 2 == 0
            || self.blur_kernel_size > MAX_BLUR_KERNEL_SIZE
        {
            return Err(invalid(format!(
                "blur_kernel_size must be odd and at most {MAX_BLUR_KERNEL_SIZE}, got {}",
                self.blur_kernel_size
            )));
        }
        if !self.blur_sigma.is_finite() || self.blur_sigma <= 0.0 {
            return Err(invalid(format!(
                "blur_sigma must be positive, got {}",
                self.blur_sigma
            )));
        }
        for (name, value) in [("canny_low", self.canny_low), ("canny_high", self.canny_high)] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(format!("{name} must be non-negative, got {value}")));
            }
        }
        if self.canny_low > self.canny_high {
            return Err(invalid(format!(
                "canny_low ({}) exceeds canny_high ({})",
                self.canny_low, self.canny_high
            )));
        }
        if self.dilate_size == 0 || self.dilate_size > MAX_DILATE_SIZE {
            return Err(invalid(format!(
                "dilate_size must be in 1..={MAX_DILATE_SIZE}, got {}",
                self.dilate_size
            )));
        }
        if self.dilate_iterations > MAX_DILATE_ITERATIONS {
            return Err(invalid(format!(
                "dilate_iterations must be at most {MAX_DILATE_ITERATIONS}, got {}",
                self.dilate_iterations
            )));
        }
        for (name, value) in [
            ("contrast_alpha", self.contrast_alpha),
            ("contrast_beta", self.contrast_beta),
            ("image_weight", self.image_weight),
            ("edge_weight", self.edge_weight),
        ] {
            if !value.is_finite() {
                return Err(invalid(format!("{name} must be finite, got {value}")));
            }
        }
        if !(0..=MAX_MARKER_RADIUS).contains(&self.marker_radius) {
            return Err(invalid(format!(
                "marker_radius must be in 0..={MAX_MARKER_RADIUS}, got {}",
                self.marker_radius
            )));
        }
        let (cx, cy) = self.marker_center;
        let limit = MAX_MARKER_OFFSET.unsigned_abs();
        if cx.unsigned_abs() > limit || cy.unsigned_abs() > limit {
            return Err(invalid(format!(
                "marker_center must lie within {MAX_MARKER_OFFSET} of the origin, got ({cx}, {cy})"
            )));
        }
        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> ObscuraError {
    ObscuraError::InvalidParams(msg.into())
}
