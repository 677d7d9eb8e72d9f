// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the pencil-sketch transform.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SketchError};

/// Accepted Gaussian kernel sides. Only odd values are valid.
pub const BLUR_RADIUS_RANGE: RangeInclusive<u32> = 3..=49;

/// Accepted dodge intensity multipliers.
pub const SCALE_RANGE: RangeInclusive<u32> = 200..=250;

/// Accepted darkness percentages.
pub const DARKNESS_RANGE: RangeInclusive<u32> = 0..=100;

/// Standard deviation of the Gaussian blur, independent of kernel size.
pub const BLUR_SIGMA: f64 = 10.0;

/// The three user-adjustable controls of the sketch transform.
///
/// Supplied fresh on every invocation; there is no identity or history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchParams {
    /// Side length of the square Gaussian kernel (odd, 3..=49).
    pub blur_radius: u32,
    /// Dodge intensity multiplier (200..=250). 256 would be a linear dodge.
    pub scale: u32,
    /// Global darkening in percent (0..=100).
    pub darkness: u32,
}

impl Default for SketchParams {
    fn default() -> Self {
        Self {
            blur_radius: 21,
            scale: 210,
            darkness: 0,
        }
    }
}

impl SketchParams {
    pub fn new(blur_radius: u32, scale: u32, darkness: u32) -> Self {
        Self {
            blur_radius,
            scale,
            darkness,
        }
    }

    pub fn with_blur_radius(self, blur_radius: u32) -> Self {
        Self {
            blur_radius,
            ..self
        }
    }

    pub fn with_scale(self, scale: u32) -> Self {
        Self { scale, ..self }
    }

    pub fn with_darkness(self, darkness: u32) -> Self {
        Self { darkness, ..self }
    }

    /// Check every control against its documented bounds.
    ///
    /// Reports the first offending field as [`SketchError::InvalidParameter`].
    pub fn validate(&self) -> Result<()> {
        if !BLUR_RADIUS_RANGE.contains(&self.blur_radius) {
            return Err(out_of_range("blur_radius", self.blur_radius, &BLUR_RADIUS_RANGE));
        }
        if self.blur_radius % 2 == 0 {
            return Err(SketchError::InvalidParameter {
                name: "blur_radius",
                reason: format!("{} is even; the kernel side must be odd", self.blur_radius),
            });
        }
        if !SCALE_RANGE.contains(&self.scale) {
            return Err(out_of_range("scale", self.scale, &SCALE_RANGE));
        }
        if !DARKNESS_RANGE.contains(&self.darkness) {
            return Err(out_of_range("darkness", self.darkness, &DARKNESS_RANGE));
        }
        Ok(())
    }

    /// Snap every control into its bounds the way a stepped slider would.
    ///
    /// An even blur radius is rounded up to the next odd value. Both range
    /// bounds are odd, so the result stays in range.
    pub fn clamped(self) -> Self {
        let mut blur_radius = self
            .blur_radius
            .clamp(*BLUR_RADIUS_RANGE.start(), *BLUR_RADIUS_RANGE.end());
        if blur_radius % 2 == 0 {
            blur_radius += 1;
        }
        Self {
            blur_radius,
            scale: self.scale.clamp(*SCALE_RANGE.start(), *SCALE_RANGE.end()),
            darkness: self
                .darkness
                .clamp(*DARKNESS_RANGE.start(), *DARKNESS_RANGE.end()),
        }
    }

    /// Multiplier applied by the darkness rescale: `1 - darkness / 100`.
    pub fn alpha(&self) -> f64 {
        1.0 - f64::from(self.darkness) / 100.0
    }
}

impl std::fmt::Display for SketchParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "blur={} scale={} darkness={}%",
            self.blur_radius, self.scale, self.darkness
        )
    }
}

fn out_of_range(name: &'static str, value: u32, range: &RangeInclusive<u32>) -> SketchError {
    SketchError::InvalidParameter {
        name,
        reason: format!(
            "{} is outside {}..={}",
            value,
            range.start(),
            range.end()
        ),
    }
}

/// Output encodings offered for export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SketchFormat {
    Jpeg,
    Png,
}

impl SketchFormat {
    /// MIME type string for download headers.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
        }
    }

    /// Infer the format from a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_slider_defaults() {
        let params = SketchParams::default();
        assert_eq!(params, SketchParams::new(21, 210, 0));
        assert!(params.validate().is_ok());
    }

    #[test]
    fn validate_rejects_even_blur_radius() {
        let err = SketchParams::default()
            .with_blur_radius(20)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            SketchError::InvalidParameter { name: "blur_radius", .. }
        ));
    }

    #[test]
    fn validate_rejects_out_of_range_fields() {
        let cases = [
            (SketchParams::default().with_blur_radius(1), "blur_radius"),
            (SketchParams::default().with_blur_radius(51), "blur_radius"),
            (SketchParams::default().with_scale(199), "scale"),
            (SketchParams::default().with_scale(251), "scale"),
            (SketchParams::default().with_darkness(101), "darkness"),
        ];
        for (params, field) in cases {
            match params.validate() {
                Err(SketchError::InvalidParameter { name, .. }) => assert_eq!(name, field),
                other => panic!("expected InvalidParameter for {field}, got {other:?}"),
            }
        }
    }

    #[test]
    fn validate_accepts_bounds() {
        assert!(SketchParams::new(3, 200, 0).validate().is_ok());
        assert!(SketchParams::new(49, 250, 100).validate().is_ok());
    }

    #[test]
    fn clamped_snaps_into_range() {
        assert_eq!(SketchParams::new(0, 0, 500).clamped(), SketchParams::new(3, 200, 100));
        assert_eq!(SketchParams::new(20, 300, 50).clamped(), SketchParams::new(21, 250, 50));
        assert_eq!(SketchParams::new(60, 210, 0).clamped().blur_radius, 49);
        assert_eq!(SketchParams::new(48, 210, 0).clamped().blur_radius, 49);
        assert!(SketchParams::new(8, 1, 1000).clamped().validate().is_ok());
    }

    #[test]
    fn alpha_tracks_darkness() {
        assert_eq!(SketchParams::default().alpha(), 1.0);
        assert_eq!(SketchParams::default().with_darkness(100).alpha(), 0.0);
        assert!((SketchParams::default().with_darkness(25).alpha() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn params_deserialize_with_missing_fields() {
        let params: SketchParams = serde_json::from_str(r#"{"scale": 240}"#).unwrap();
        assert_eq!(params, SketchParams::default().with_scale(240));
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(SketchFormat::from_extension("JPG"), Some(SketchFormat::Jpeg));
        assert_eq!(SketchFormat::from_extension("png"), Some(SketchFormat::Png));
        assert_eq!(SketchFormat::from_extension("gif"), None);
        assert_eq!(SketchFormat::Jpeg.mime_type(), "image/jpeg");
    }
}
