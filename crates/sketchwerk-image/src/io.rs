// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Codec boundary — decode uploaded JPEG/PNG photographs and encode finished
// sketches for display or download. Uses the `image` crate for both.

use std::path::Path;

use image::{DynamicImage, GrayImage, ImageFormat, RgbImage};
use sketchwerk_core::error::{Result, SketchError};
use sketchwerk_core::types::{SketchFormat, SketchParams};
use tracing::{debug, info, instrument};

use crate::sketch::pencil_sketch;

/// A decoded input photograph, ready to be sketched any number of times.
///
/// The pixels are held as 8-bit RGB; alpha and higher bit depths are dropped
/// at load time.
#[derive(Debug, Clone)]
pub struct Photo {
    image: RgbImage,
}

impl Photo {
    // -- Construction ---------------------------------------------------------

    /// Load a photograph from a file path.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let img = image::open(path.as_ref()).map_err(|err| {
            SketchError::InvalidImage(format!(
                "failed to open {}: {}",
                path.as_ref().display(),
                err
            ))
        })?;
        let photo = Self::from_dynamic(&img)?;
        info!(
            width = photo.width(),
            height = photo.height(),
            "Photo loaded"
        );
        Ok(photo)
    }

    /// Decode a photograph from raw encoded bytes (JPEG, PNG).
    #[instrument(skip(data), fields(data_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let img = image::load_from_memory(data).map_err(|err| {
            SketchError::InvalidImage(format!("failed to decode image: {}", err))
        })?;
        let photo = Self::from_dynamic(&img)?;
        debug!(
            width = photo.width(),
            height = photo.height(),
            "Photo decoded from bytes"
        );
        Ok(photo)
    }

    /// Wrap an already-decoded image, converting it to 8-bit RGB.
    pub fn from_dynamic(image: &DynamicImage) -> Result<Self> {
        Self::from_rgb(image.to_rgb8())
    }

    /// Wrap an RGB buffer. Rejects images without pixels.
    pub fn from_rgb(image: RgbImage) -> Result<Self> {
        if image.width() == 0 || image.height() == 0 {
            return Err(SketchError::InvalidImage(format!(
                "image has zero dimensions ({}x{})",
                image.width(),
                image.height()
            )));
        }
        Ok(Self { image })
    }

    // -- Accessors ------------------------------------------------------------

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn as_rgb(&self) -> &RgbImage {
        &self.image
    }

    // -- Transform ------------------------------------------------------------

    /// Produce a fresh sketch of this photo. The photo itself is untouched.
    pub fn sketch(&self, params: &SketchParams) -> Result<GrayImage> {
        pencil_sketch(&self.image, params)
    }
}

// -- Output -------------------------------------------------------------------

/// Encode a sketch as JPEG bytes with the given quality (1-100).
pub fn encode_jpeg(sketch: &GrayImage, quality: u8) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let encoder =
        image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buffer, quality.clamp(1, 100));
    sketch
        .write_with_encoder(encoder)
        .map_err(|err| SketchError::Encode(format!("JPEG encoding failed: {}", err)))?;
    Ok(buffer)
}

/// Encode a sketch as PNG bytes.
pub fn encode_png(sketch: &GrayImage) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut cursor = std::io::Cursor::new(&mut buffer);
    sketch
        .write_to(&mut cursor, ImageFormat::Png)
        .map_err(|err| SketchError::Encode(format!("PNG encoding failed: {}", err)))?;
    Ok(buffer)
}

/// Encode a sketch in the requested format.
pub fn encode(sketch: &GrayImage, format: SketchFormat, quality: u8) -> Result<Vec<u8>> {
    match format {
        SketchFormat::Jpeg => encode_jpeg(sketch, quality),
        SketchFormat::Png => encode_png(sketch),
    }
}

/// Write a sketch to a file. The format is inferred from the extension,
/// defaulting to JPEG when the extension is missing or unknown.
#[instrument(skip(sketch, path), fields(path = %path.as_ref().display()))]
pub fn save(sketch: &GrayImage, path: impl AsRef<Path>, quality: u8) -> Result<SketchFormat> {
    let format = path
        .as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(SketchFormat::from_extension)
        .unwrap_or(SketchFormat::Jpeg);

    let bytes = encode(sketch, format, quality)?;
    std::fs::write(path.as_ref(), &bytes)?;
    info!(bytes = bytes.len(), mime = format.mime_type(), "Sketch saved");
    Ok(format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgb, Rgba, RgbaImage};

    fn png_bytes(img: &DynamicImage) -> Vec<u8> {
        let mut buf = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut buf), ImageFormat::Png)
            .unwrap();
        buf
    }

    #[test]
    fn from_bytes_decodes_png() {
        let src = DynamicImage::ImageRgb8(RgbImage::from_pixel(6, 4, Rgb([1, 2, 3])));
        let photo = Photo::from_bytes(&png_bytes(&src)).unwrap();
        assert_eq!((photo.width(), photo.height()), (6, 4));
        assert_eq!(photo.as_rgb().get_pixel(0, 0), &Rgb([1, 2, 3]));
    }

    #[test]
    fn from_bytes_rejects_garbage() {
        let err = Photo::from_bytes(b"definitely not an image").unwrap_err();
        assert!(matches!(err, SketchError::InvalidImage(_)));
    }

    #[test]
    fn from_dynamic_drops_alpha() {
        let src = DynamicImage::ImageRgba8(RgbaImage::from_pixel(2, 2, Rgba([9, 8, 7, 0])));
        let photo = Photo::from_dynamic(&src).unwrap();
        assert_eq!(photo.as_rgb().get_pixel(1, 1), &Rgb([9, 8, 7]));
    }

    #[test]
    fn from_rgb_rejects_empty() {
        assert!(matches!(
            Photo::from_rgb(RgbImage::new(0, 0)),
            Err(SketchError::InvalidImage(_))
        ));
    }

    #[test]
    fn open_missing_file_is_invalid_image() {
        let dir = tempfile::tempdir().unwrap();
        let err = Photo::open(dir.path().join("nope.png")).unwrap_err();
        assert!(matches!(err, SketchError::InvalidImage(_)));
    }

    #[test]
    fn sketch_keeps_photo_dimensions() {
        let photo = Photo::from_rgb(RgbImage::from_pixel(10, 7, Rgb([50, 100, 150]))).unwrap();
        let sketch = photo.sketch(&SketchParams::default()).unwrap();
        assert_eq!(sketch.dimensions(), (10, 7));
    }

    #[test]
    fn encoders_emit_format_signatures() {
        let sketch = GrayImage::from_pixel(8, 8, Luma([128u8]));
        let jpeg = encode_jpeg(&sketch, 90).unwrap();
        assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);
        let png = encode_png(&sketch).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn png_output_is_lossless() {
        let sketch = GrayImage::from_fn(5, 5, |x, y| Luma([(x * 40 + y) as u8]));
        let decoded = image::load_from_memory(&encode_png(&sketch).unwrap())
            .unwrap()
            .to_luma8();
        assert_eq!(decoded.as_raw(), sketch.as_raw());
    }

    #[test]
    fn save_infers_format_from_extension() {
        let dir = tempfile::tempdir().unwrap();
        let sketch = GrayImage::from_pixel(4, 4, Luma([200u8]));

        let png_path = dir.path().join("out.png");
        assert_eq!(save(&sketch, &png_path, 90).unwrap(), SketchFormat::Png);
        assert_eq!(
            image::ImageFormat::from_path(&png_path).unwrap(),
            ImageFormat::Png
        );

        let jpg_path = dir.path().join("pencil_sketch.jpg");
        assert_eq!(save(&sketch, &jpg_path, 90).unwrap(), SketchFormat::Jpeg);
        let reopened = image::open(&jpg_path).unwrap();
        assert_eq!((reopened.width(), reopened.height()), (4, 4));

        let bare = dir.path().join("sketch");
        assert_eq!(save(&sketch, &bare, 90).unwrap(), SketchFormat::Jpeg);
    }
}
