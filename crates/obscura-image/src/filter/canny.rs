// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Canny edge detection on an already-smoothed image.
//
// `imageproc::edges::canny` blurs its input internally; the pipeline smooths
// with its own kernel first, so only the gradient, suppression, and hysteresis
// stages are run here.
//
// 1. Sobel 3x3 gradients (imageproc), L1 magnitude |gx| + |gy|
// 2. Non-maximum suppression along the gradient direction quantised to
//    0/45/90/135 degrees; neighbours outside the image have zero magnitude
// 3. Double-threshold hysteresis, 8-connected

use image::{GrayImage, Luma};
use imageproc::gradients::{horizontal_sobel, vertical_sobel};
use tracing::debug;

const TAN_22_5_DEG: f32 = 0.414_213_56;

/// Marker values in the hysteresis state map.
const NOT_EDGE: u8 = 0;
const CANDIDATE: u8 = 1;
const EDGE: u8 = 2;

/// Binary edge map (0 or 255) of `smoothed`.
///
/// Pixels whose suppressed magnitude exceeds `high` seed edges; pixels above
/// `low` are kept when 8-connected to a seed. Every pixel, including the
/// image frame, takes part; magnitude outside the image counts as zero.
pub fn canny(smoothed: &GrayImage, low: f32, high: f32) -> GrayImage {
    let (w, h) = smoothed.dimensions();
    let mut out = GrayImage::new(w, h);
    if w == 0 || h == 0 {
        return out;
    }

    let gx = horizontal_sobel(smoothed);
    let gy = vertical_sobel(smoothed);

    let (wu, hu) = (w as usize, h as usize);
    let mag: Vec<f32> = gx
        .as_raw()
        .iter()
        .zip(gy.as_raw().iter())
        .map(|(&dx, &dy)| (dx as f32).abs() + (dy as f32).abs())
        .collect();

    let mag_at = |x: isize, y: isize| -> f32 {
        if x < 0 || y < 0 || x >= wu as isize || y >= hu as isize {
            0.0
        } else {
            mag[y as usize * wu + x as usize]
        }
    };

    let mut state = vec![NOT_EDGE; wu * hu];
    let mut seeds: Vec<usize> = Vec::new();

    for y in 0..hu {
        for x in 0..wu {
            let idx = y * wu + x;
            let m = mag[idx];
            if m <= low {
                continue;
            }

            let dx = gx.as_raw()[idx] as f32;
            let dy = gy.as_raw()[idx] as f32;
            let (ox, oy) = gradient_offset(dx, dy);
            let (xi, yi) = (x as isize, y as isize);
            let before = mag_at(xi - ox, yi - oy);
            let after = mag_at(xi + ox, yi + oy);

            // Strict against the earlier neighbour, non-strict against the
            // later one, so a two-pixel plateau keeps exactly one pixel.
            if m > before && m >= after {
                if m > high {
                    state[idx] = EDGE;
                    seeds.push(idx);
                } else {
                    state[idx] = CANDIDATE;
                }
            }
        }
    }

    debug!(seeds = seeds.len(), low, high, "Non-maximum suppression complete");

    // Grow edges from the strong seeds into connected candidates.
    while let Some(idx) = seeds.pop() {
        let (x, y) = (idx % wu, idx / wu);
        for ny in y.saturating_sub(1)..=(y + 1).min(hu - 1) {
            for nx in x.saturating_sub(1)..=(x + 1).min(wu - 1) {
                let n = ny * wu + nx;
                if state[n] == CANDIDATE {
                    state[n] = EDGE;
                    seeds.push(n);
                }
            }
        }
    }

    for (dst, &s) in out.pixels_mut().zip(state.iter()) {
        if s == EDGE {
            *dst = Luma([255]);
        }
    }

    out
}

/// Step `(ox, oy)` along the quantised gradient direction. The neighbour at
/// `-offset` precedes the one at `+offset` in raster order.
fn gradient_offset(dx: f32, dy: f32) -> (isize, isize) {
    let (ax, ay) = (dx.abs(), dy.abs());
    if ay <= ax * TAN_22_5_DEG {
        // Gradient roughly horizontal: compare left/right.
        (1, 0)
    } else if ax <= ay * TAN_22_5_DEG {
        // Gradient roughly vertical: compare up/down.
        (0, 1)
    } else if (dx > 0.0) == (dy > 0.0) {
        // Down-right diagonal.
        (1, 1)
    } else {
        // Down-left diagonal.
        (-1, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertical_step(w: u32, h: u32, split: u32) -> GrayImage {
        GrayImage::from_fn(w, h, |x, _| if x < split { Luma([0]) } else { Luma([255]) })
    }

    #[test]
    fn flat_field_has_no_edges() {
        let img = GrayImage::from_pixel(32, 32, Luma([90]));
        let edges = canny(&img, 40.0, 100.0);
        assert!(edges.pixels().all(|p| p.0[0] == 0));
    }

    #[test]
    fn output_is_binary() {
        let img = GrayImage::from_fn(40, 40, |x, y| Luma([((x * 7 + y * 13) % 256) as u8]));
        let edges = canny(&img, 40.0, 100.0);
        assert!(edges.pixels().all(|p| p.0[0] == 0 || p.0[0] == 255));
    }

    #[test]
    fn step_edge_is_one_pixel_wide() {
        let img = vertical_step(20, 20, 10);
        let edges = canny(&img, 40.0, 100.0);

        for y in 0..20 {
            let row: Vec<u32> = (0..20).filter(|&x| edges.get_pixel(x, y).0[0] == 255).collect();
            assert_eq!(row, vec![9], "row {y}");
        }
    }

    #[test]
    fn edge_reaches_the_image_frame() {
        // Horizontal step: the edge must run all the way to columns 0 and 19.
        let img = GrayImage::from_fn(20, 20, |_, y| if y < 10 { Luma([0]) } else { Luma([255]) });
        let edges = canny(&img, 40.0, 100.0);

        for x in [0, 5, 19] {
            let col: Vec<u32> = (0..20).filter(|&y| edges.get_pixel(x, y).0[0] == 255).collect();
            assert_eq!(col, vec![9], "column {x}");
        }
    }

    #[test]
    fn step_at_first_column_marks_frame_pixel() {
        let img = vertical_step(12, 12, 1);
        let edges = canny(&img, 40.0, 100.0);
        assert!((0..12).all(|y| edges.get_pixel(0, y).0[0] == 255));
    }

    #[test]
    fn weak_step_below_high_threshold_is_dropped() {
        // Sobel L1 magnitude across a step of 10 is 40, under both thresholds.
        let img = GrayImage::from_fn(20, 20, |x, _| if x < 10 { Luma([100]) } else { Luma([110]) });
        let edges = canny(&img, 40.0, 100.0);
        assert!(edges.pixels().all(|p| p.0[0] == 0));
    }

    #[test]
    fn tiny_flat_images_yield_empty_map() {
        let img = GrayImage::from_pixel(2, 5, Luma([255]));
        let edges = canny(&img, 40.0, 100.0);
        assert_eq!(edges.dimensions(), (2, 5));
        assert!(edges.pixels().all(|p| p.0[0] == 0));
    }

    #[test]
    fn offsets_follow_gradient() {
        assert_eq!(gradient_offset(5.0, 5.0), (1, 1));
        assert_eq!(gradient_offset(-5.0, 5.0), (-1, 1));
        assert_eq!(gradient_offset(5.0, 0.0), (1, 0));
        assert_eq!(gradient_offset(0.0, -5.0), (0, 1));
    }
}
