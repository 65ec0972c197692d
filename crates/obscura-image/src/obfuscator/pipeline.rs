// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The fixed obfuscation pipeline. Every intermediate lives only for the
// duration of one call; the obfuscator itself holds nothing but parameters.

use std::path::{Path, PathBuf};

use image::{DynamicImage, RgbImage};
use obscura_core::config::DEFAULT_OUTPUT_PATH;
use obscura_core::error::Result;
use obscura_core::ObfuscationParams;
use tracing::{debug, info, instrument};

use crate::filter::{
    blend_weighted, broadcast_mask, canny, dilate_square, draw_marker, enhance,
    gaussian_blur_exact, to_luma_bt601,
};
use crate::image::output::write_atomic;
use crate::image::processor::{ImageProcessor, encode_png, normalize_rgb};

/// Deterministic photo obfuscator.
///
/// Given the same input bytes and parameters it always produces the same
/// output bytes.
#[derive(Debug, Clone, Default)]
pub struct ImageObfuscator {
    params: ObfuscationParams,
}

impl ImageObfuscator {
    /// Build an obfuscator after validating `params`.
    pub fn new(params: ObfuscationParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &ObfuscationParams {
        &self.params
    }

    /// Run the pixel pipeline on a decoded image.
    ///
    /// ## Pipeline
    ///
    /// 1. Convert to 8-bit RGB and resample to the square canvas
    /// 2. BT.601 grayscale
    /// 3. Gaussian smoothing at the configured kernel size
    /// 4. Canny edges with double-threshold hysteresis
    /// 5. Dilate the edge map with a square all-ones element
    /// 6. Broadcast edges to three channels
    /// 7. Enhance: `alpha * pixel + beta`
    /// 8. Blend: `image_weight * enhanced + edge_weight * edges`
    /// 9. Stamp the centre marker
    #[instrument(skip(self, image), fields(width = image.width(), height = image.height()))]
    pub fn obfuscate_image(&self, image: &DynamicImage) -> Result<RgbImage> {
        let p = &self.params;

        let normalized = normalize_rgb(image, p.canvas_size)?;
        debug!(size = p.canvas_size, "Normalised onto canvas");

        let gray = to_luma_bt601(&normalized);
        let smoothed = gaussian_blur_exact(&gray, p.blur_kernel_size, p.blur_sigma);
        let edges = canny(&smoothed, p.canny_low, p.canny_high);
        let edges = dilate_square(&edges, p.dilate_size, p.dilate_iterations);
        let edge_pixels = edges.pixels().filter(|px| px.0[0] != 0).count();
        debug!(edge_pixels, "Edge mask built");

        let edge_mask = broadcast_mask(&edges);
        let enhanced = enhance(&normalized, p.contrast_alpha, p.contrast_beta);
        let mut composite =
            blend_weighted(&enhanced, p.image_weight, &edge_mask, p.edge_weight)?;

        draw_marker(&mut composite, p.marker_center, p.marker_radius, p.marker_color);

        info!(
            width = composite.width(),
            height = composite.height(),
            edge_pixels,
            "Obfuscation complete"
        );
        Ok(composite)
    }

    /// Decode `data`, obfuscate it, and return the composite as PNG bytes.
    #[instrument(skip(self, data), fields(data_len = data.len()))]
    pub fn obfuscate_bytes(&self, data: &[u8]) -> Result<Vec<u8>> {
        let source = ImageProcessor::from_bytes(data)?;
        let composite = self.obfuscate_image(source.as_dynamic())?;
        encode_png(&composite)
    }

    /// Read `input`, obfuscate it, and write a PNG to `output`.
    ///
    /// The output is encoded fully in memory before anything touches the
    /// destination, and then swapped in atomically; on any error an existing
    /// file at `output` is left as it was.
    #[instrument(skip_all, fields(input = %input.as_ref().display(), output = %output.as_ref().display()))]
    pub fn obfuscate_file(&self, input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<()> {
        let source = ImageProcessor::open(input.as_ref())?;
        let composite = self.obfuscate_image(source.as_dynamic())?;
        let png = encode_png(&composite)?;
        write_atomic(output.as_ref(), &png)?;
        info!(bytes = png.len(), "Obfuscated image written");
        Ok(())
    }
}

/// Obfuscate `input` with the default parameters and write the PNG to `output`.
pub fn obfuscate(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<()> {
    ImageObfuscator::default().obfuscate_file(input, output)
}

/// Obfuscate `input` into `obfuscated.png` in the working directory.
pub fn obfuscate_to_default(input: impl AsRef<Path>) -> Result<PathBuf> {
    let output = PathBuf::from(DEFAULT_OUTPUT_PATH);
    obfuscate(input, &output)?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use obscura_core::ErrorKind;

    fn black(w: u32, h: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::new(w, h))
    }

    #[test]
    fn black_input_gives_flat_background_and_marker() {
        let out = ImageObfuscator::default().obfuscate_image(&black(512, 512)).unwrap();
        assert_eq!(out.dimensions(), (512, 512));

        let white = out.pixels().filter(|p| p.0 == [255, 255, 255]).count();
        let background = out.pixels().filter(|p| p.0 == [9, 9, 9]).count();
        assert!(white > 0);
        assert_eq!(white + background, 512 * 512);
        assert_eq!(out.get_pixel(256, 256).0, [255, 255, 255]);
        assert_eq!(out.get_pixel(0, 0).0, [9, 9, 9]);
    }

    #[test]
    fn edges_brighten_the_composite() {
        // Left quarter dark grey, the rest mid grey: a strong vertical edge.
        let img = RgbImage::from_fn(512, 512, |x, _| {
            if x < 128 { Rgb([20, 20, 20]) } else { Rgb([180, 180, 180]) }
        });
        let out = ImageObfuscator::default()
            .obfuscate_image(&DynamicImage::ImageRgb8(img))
            .unwrap();

        // Flat regions: round(0.85 * round(1.1 * v + 10)).
        assert_eq!(out.get_pixel(40, 40).0, [27, 27, 27]);
        assert_eq!(out.get_pixel(400, 40).0, [177, 177, 177]);

        // Somewhere along the boundary an edge lifted the value past the flat levels.
        let row = 40;
        let boosted = (120..136).any(|x| out.get_pixel(x, row).0[0] > 177);
        assert!(boosted, "expected an edge highlight near x=128");
    }

    #[test]
    fn non_square_input_is_stretched() {
        let out = ImageObfuscator::default().obfuscate_image(&black(100, 30)).unwrap();
        assert_eq!(out.dimensions(), (512, 512));
    }

    #[test]
    fn custom_canvas_and_marker() {
        let params = ObfuscationParams {
            canvas_size: 64,
            marker_center: (10, 10),
            marker_radius: 1,
            marker_color: [255, 0, 0],
            ..Default::default()
        };
        let out = ImageObfuscator::new(params).unwrap().obfuscate_image(&black(20, 20)).unwrap();
        assert_eq!(out.dimensions(), (64, 64));
        assert_eq!(out.get_pixel(10, 10).0, [255, 0, 0]);
        assert_eq!(out.get_pixel(32, 32).0, [9, 9, 9]);
    }

    #[test]
    fn invalid_params_rejected_up_front() {
        let params = ObfuscationParams {
            blur_kernel_size: 6,
            ..Default::default()
        };
        let err = ImageObfuscator::new(params).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[test]
    fn bytes_round_trip_is_deterministic() {
        let src = RgbImage::from_fn(80, 60, |x, y| Rgb([(x * 3) as u8, (y * 4) as u8, ((x + y) % 256) as u8]));
        let png = encode_png(&src).unwrap();

        let obfuscator = ImageObfuscator::default();
        let first = obfuscator.obfuscate_bytes(&png).unwrap();
        let second = obfuscator.obfuscate_bytes(&png).unwrap();
        assert_eq!(first, second);

        let decoded = image::load_from_memory(&first).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (512, 512));
        assert_eq!(decoded.color(), image::ColorType::Rgb8);
    }

    #[test]
    fn undecodable_bytes_are_io_errors() {
        let err = ImageObfuscator::default().obfuscate_bytes(b"\x89PNG broken").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
