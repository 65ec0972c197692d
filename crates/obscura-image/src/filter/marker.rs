// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Centre marker stamp.

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_circle_mut;

/// Overwrite a filled disc of `radius` at `center` (x, y) with `color`.
/// Pixels falling outside the canvas are clipped.
pub fn draw_marker(canvas: &mut RgbImage, center: (i32, i32), radius: i32, color: [u8; 3]) {
    draw_filled_circle_mut(canvas, center, radius, Rgb(color));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disc_covers_centre_and_radius() {
        let mut img = RgbImage::new(32, 32);
        draw_marker(&mut img, (16, 16), 3, [255, 255, 255]);

        // Every pixel within distance 3 of the centre, e.g. (2, 2) and (1, 3).
        for dy in -3i32..=3 {
            for dx in -3i32..=3 {
                if dx * dx + dy * dy <= 9 {
                    let p = img.get_pixel((16 + dx) as u32, (16 + dy) as u32);
                    assert_eq!(p.0, [255, 255, 255], "({dx}, {dy})");
                }
            }
        }
        // Well outside the disc nothing is painted.
        assert_eq!(img.get_pixel(16 + 5, 16).0, [0, 0, 0]);
        assert_eq!(img.get_pixel(16 + 3, 16 + 3).0, [0, 0, 0]);
    }

    #[test]
    fn marker_partly_off_canvas_is_clipped() {
        let mut img = RgbImage::new(8, 8);
        draw_marker(&mut img, (0, 0), 3, [1, 2, 3]);
        assert_eq!(img.get_pixel(0, 0).0, [1, 2, 3]);
        assert_eq!(img.get_pixel(7, 7).0, [0, 0, 0]);
    }
}
