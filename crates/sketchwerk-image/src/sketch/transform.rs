// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The pencil-sketch transform. A pure function from (RGB image, parameters) to
// a single-channel sketch of the same size.

use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};
use imageproc::map::{map_colors, map_colors2};
use sketchwerk_core::error::{Result, SketchError};
use sketchwerk_core::types::{BLUR_SIGMA, SketchParams};
use tracing::{debug, instrument};

use super::blur::gaussian_blur;

/// Convert an RGB photograph into a pencil sketch.
///
/// ## Pipeline
///
/// 1. BT.601 luminance grayscale (`gray`)
/// 2. Invert (`255 - gray`)
/// 3. Gaussian blur, kernel side `blur_radius`, sigma 10
/// 4. Invert the blurred image
/// 5. Colour-dodge divide `gray * scale / inverted_blurred`, saturated
/// 6. Darkness rescale by `1 - darkness / 100`
///
/// The output always has the input's dimensions. Identical inputs give
/// bit-identical outputs.
///
/// # Errors
///
/// [`SketchError::InvalidImage`] for an image without pixels and
/// [`SketchError::InvalidParameter`] for out-of-range controls.
#[instrument(skip(image, params), fields(width = image.width(), height = image.height(), params = %params))]
pub fn pencil_sketch(image: &RgbImage, params: &SketchParams) -> Result<GrayImage> {
    if image.width() == 0 || image.height() == 0 {
        return Err(SketchError::InvalidImage(format!(
            "image has zero dimensions ({}x{})",
            image.width(),
            image.height()
        )));
    }
    params.validate()?;

    let gray = grayscale_bt601(image);
    let inverted = invert(&gray);
    let blurred = gaussian_blur(&inverted, params.blur_radius, BLUR_SIGMA);
    debug!(kernel = params.blur_radius, sigma = BLUR_SIGMA, "Blurred inverted grayscale");

    let inverted_blurred = invert(&blurred);
    let sketch = color_dodge(&gray, &inverted_blurred, params.scale)?;
    debug!(scale = params.scale, "Colour-dodge applied");

    if params.darkness == 0 {
        return Ok(sketch);
    }
    let alpha = params.alpha();
    debug!(alpha, "Rescaling darkness");
    Ok(rescale_darkness(&sketch, alpha))
}

/// Run [`pencil_sketch`] on any decoded image, dropping alpha and converting
/// to 8-bit RGB first.
pub fn pencil_sketch_dynamic(image: &DynamicImage, params: &SketchParams) -> Result<GrayImage> {
    pencil_sketch(&image.to_rgb8(), params)
}

/// Luminance grayscale with BT.601 weights in 14-bit fixed point
/// (`0.299 R + 0.587 G + 0.114 B`, rounded).
///
/// `image::DynamicImage::to_luma8` uses Rec. 709 weights, which render skin
/// and foliage noticeably differently.
pub fn grayscale_bt601(image: &RgbImage) -> GrayImage {
    const R: u32 = 4899;
    const G: u32 = 9617;
    const B: u32 = 1868;
    const SHIFT: u32 = 14;

    map_colors(image, |Rgb([r, g, b])| {
        let y = (u32::from(r) * R + u32::from(g) * G + u32::from(b) * B + (1 << (SHIFT - 1)))
            >> SHIFT;
        Luma([y as u8])
    })
}

/// Per-pixel `255 - v`.
pub fn invert(image: &GrayImage) -> GrayImage {
    map_colors(image, |Luma([v])| Luma([255 - v]))
}

/// Colour-dodge divide: `round(base * scale / blend)`, saturated to `0..=255`.
///
/// A zero `blend` pixel (fully white blurred region) saturates to 255.
///
/// # Errors
///
/// [`SketchError::InvalidImage`] when the two images differ in size.
pub fn color_dodge(base: &GrayImage, blend: &GrayImage, scale: u32) -> Result<GrayImage> {
    if base.dimensions() != blend.dimensions() {
        return Err(SketchError::InvalidImage(format!(
            "dodge layers differ in size: {:?} vs {:?}",
            base.dimensions(),
            blend.dimensions()
        )));
    }

    let scale = f64::from(scale);
    Ok(map_colors2(base, blend, |Luma([b]), Luma([d])| {
        if d == 0 {
            return Luma([u8::MAX]);
        }
        Luma([saturate_u8(f64::from(b) * scale / f64::from(d))])
    }))
}

/// Multiply every pixel by `alpha` and take the absolute value, saturated.
pub fn rescale_darkness(image: &GrayImage, alpha: f64) -> GrayImage {
    map_colors(image, |Luma([v])| Luma([saturate_u8((alpha * f64::from(v)).abs())]))
}

/// Round half-to-even and clamp into the `u8` range.
#[inline]
fn saturate_u8(value: f64) -> u8 {
    value.round_ties_even().clamp(0.0, 255.0) as u8
}
