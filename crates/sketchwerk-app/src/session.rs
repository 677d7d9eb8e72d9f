// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Sketch session — one loaded photo, the current controls, and the sketch they
// produce. The front end calls `update` whenever a control changes; the
// transform is re-run only when the parameters actually differ.

use image::GrayImage;
use sketchwerk_core::error::Result;
use sketchwerk_core::types::{SketchFormat, SketchParams};
use sketchwerk_image::{Photo, encode};
use tracing::{debug, info};

/// State held by the front end between control changes.
#[derive(Debug)]
pub struct SketchSession {
    /// The decoded upload. Never modified.
    photo: Photo,
    /// Controls that produced `sketch`.
    params: SketchParams,
    /// Latest rendered sketch.
    sketch: GrayImage,
    /// How many times the transform has run for this photo.
    renders: usize,
}

impl SketchSession {
    /// Load a photo and render it once with the initial controls.
    pub fn new(photo: Photo, params: SketchParams) -> Result<Self> {
        let sketch = photo.sketch(&params)?;
        info!(%params, "Initial sketch rendered");
        Ok(Self {
            photo,
            params,
            sketch,
            renders: 1,
        })
    }

    /// Apply new controls. Returns `true` when the sketch was re-rendered.
    ///
    /// On error the previous controls and sketch are kept.
    pub fn update(&mut self, params: SketchParams) -> Result<bool> {
        if params == self.params {
            debug!(%params, "Controls unchanged; keeping current sketch");
            return Ok(false);
        }
        let sketch = self.photo.sketch(&params)?;
        debug!(from = %self.params, to = %params, "Controls changed; sketch re-rendered");
        self.params = params;
        self.sketch = sketch;
        self.renders += 1;
        Ok(true)
    }

    pub fn params(&self) -> SketchParams {
        self.params
    }

    pub fn output(&self) -> &GrayImage {
        &self.sketch
    }

    pub fn renders(&self) -> usize {
        self.renders
    }

    /// Encode the current sketch for download.
    pub fn export(&self, format: SketchFormat, quality: u8) -> Result<Vec<u8>> {
        encode(&self.sketch, format, quality)
    }
}
