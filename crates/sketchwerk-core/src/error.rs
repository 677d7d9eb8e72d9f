// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Sketchwerk.

use thiserror::Error;

/// Top-level error type for all Sketchwerk operations.
#[derive(Debug, Error)]
pub enum SketchError {
    // -- Transform errors --
    #[error("invalid image: {0}")]
    InvalidImage(String),

    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    // -- Harness errors --
    #[error("image encoding failed: {0}")]
    Encode(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, SketchError>;
