// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Harness configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::types::SketchParams;

/// Conventional file name for an exported sketch.
pub const DEFAULT_OUTPUT_NAME: &str = "pencil_sketch.jpg";

/// Persistent harness settings. Missing JSON fields fall back to defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    /// Initial transform parameters.
    pub params: SketchParams,
    /// JPEG quality (1-100) for exports.
    pub jpeg_quality: u8,
    /// File name used when no explicit output path is given.
    pub output_name: String,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            params: SketchParams::default(),
            jpeg_quality: 90,
            output_name: DEFAULT_OUTPUT_NAME.to_string(),
        }
    }
}

impl SketchConfig {
    /// Read a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&data)?;
        debug!(path = %path.as_ref().display(), params = %config.params, "Config loaded");
        Ok(config)
    }

    /// Write the config as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        Ok(())
    }
}
