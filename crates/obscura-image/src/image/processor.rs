// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image processor — decode from file or memory, normalise onto the square
// working canvas, and encode the result as PNG. Operates on in-memory images
// using the `image` crate.

use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat, ImageReader, RgbImage};
use obscura_core::error::{ObscuraError, Result};
use tracing::{debug, info, instrument};

/// Interpolation used when resampling onto the working canvas.
pub const RESAMPLE_FILTER: FilterType = FilterType::Triangle;

/// A single decoded source image.
///
/// ```ignore
/// let source = ImageProcessor::open("photo.jpg")?;
/// let canvas = normalize_rgb(source.as_dynamic(), 512)?;
/// ```
pub struct ImageProcessor {
    /// The decoded image, in whatever colour type the codec produced.
    image: DynamicImage,
}

impl ImageProcessor {
    // -- Construction ---------------------------------------------------------

    /// Load an image from a file path.
    ///
    /// The format is sniffed from the file contents, so a missing or
    /// misleading extension does not prevent decoding.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let read_error = |reason: String| ObscuraError::ImageRead {
            path: path.display().to_string(),
            reason,
        };

        let img = ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|err| read_error(err.to_string()))?
            .decode()
            .map_err(|err| read_error(err.to_string()))?;
        info!(
            width = img.width(),
            height = img.height(),
            color = ?img.color(),
            "Image loaded"
        );
        Ok(Self { image: img })
    }

    /// Create a processor from raw encoded bytes (JPEG, PNG, BMP, etc.).
    #[instrument(skip(data), fields(data_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let img = image::load_from_memory(data)
            .map_err(|err| ObscuraError::ImageDecode(err.to_string()))?;
        debug!(
            width = img.width(),
            height = img.height(),
            "Image decoded from bytes"
        );
        Ok(Self { image: img })
    }

    // -- Accessors ------------------------------------------------------------

    /// Borrow the underlying `DynamicImage`.
    pub fn as_dynamic(&self) -> &DynamicImage {
        &self.image
    }
}

/// Drop alpha and any extra channels, then resample to `size` x `size`
/// with bilinear interpolation. Aspect ratio is not preserved.
#[instrument(skip(image), fields(from_w = image.width(), from_h = image.height()))]
pub fn normalize_rgb(image: &DynamicImage, size: u32) -> Result<RgbImage> {
    if image.width() == 0 || image.height() == 0 {
        return Err(ObscuraError::Processing(format!(
            "cannot resample a {}x{} image",
            image.width(),
            image.height()
        )));
    }
    if size == 0 {
        return Err(ObscuraError::Processing(
            "target canvas size must be greater than zero".into(),
        ));
    }

    let rgb = image.to_rgb8();
    if rgb.dimensions() == (size, size) {
        debug!("Source already matches canvas, skipping resample");
        return Ok(rgb);
    }

    let resized = imageops::resize(&rgb, size, size, RESAMPLE_FILTER);
    debug!(size, "Resample complete");
    Ok(resized)
}

/// Encode an RGB buffer as PNG bytes.
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>> {
    encode_to_format(&DynamicImage::ImageRgb8(image.clone()), ImageFormat::Png)
}

/// Encode a `DynamicImage` into the specified format, returning the raw bytes.
fn encode_to_format(image: &DynamicImage, format: ImageFormat) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut cursor = std::io::Cursor::new(&mut buffer);
    image
        .write_to(&mut cursor, format)
        .map_err(|err| ObscuraError::Processing(format!("image encoding failed: {}", err)))?;
    Ok(buffer)
}
