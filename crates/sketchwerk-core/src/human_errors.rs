// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for the harness.
//
// Every technical error is mapped to plain English with a suggestion. The
// harness shows these in place of the sketch; no partial output is produced.

use crate::error::SketchError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The user can fix it (pick another file, move a slider).
    ActionRequired,
    /// Retrying with the same input will fail the same way.
    Permanent,
}

/// A human-readable error with a plain English message and a suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (shown as a heading).
    pub message: String,
    /// What the user should try (shown as body text).
    pub suggestion: String,
    /// Drives how prominently the harness displays it.
    pub severity: Severity,
}

impl std::fmt::Display for HumanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.message, self.suggestion)
    }
}

/// Convert a `SketchError` into a `HumanError`.
pub fn humanize_error(err: &SketchError) -> HumanError {
    match err {
        SketchError::InvalidImage(detail) => HumanError {
            message: "We couldn't read this picture.".into(),
            suggestion: format!("Choose a JPEG or PNG photo and try again. ({detail})"),
            severity: Severity::ActionRequired,
        },

        SketchError::InvalidParameter { name, reason } => HumanError {
            message: format!("The {} setting is out of range.", setting_label(name)),
            suggestion: format!("Move it back within its allowed values. ({reason})"),
            severity: Severity::ActionRequired,
        },

        SketchError::Encode(detail) => HumanError {
            message: "The sketch was made but couldn't be saved.".into(),
            suggestion: format!("Try saving as PNG instead of JPEG. ({detail})"),
            severity: Severity::Permanent,
        },

        SketchError::Io(io) => HumanError {
            message: "A file couldn't be read or written.".into(),
            suggestion: format!("Check the path exists and you have permission to use it. ({io})"),
            severity: Severity::ActionRequired,
        },

        SketchError::Serialization(detail) => HumanError {
            message: "The settings file is damaged.".into(),
            suggestion: format!("Fix or delete the settings file to use the defaults. ({detail})"),
            severity: Severity::ActionRequired,
        },
    }
}

fn setting_label(name: &str) -> &str {
    match name {
        "blur_radius" => "blur level",
        "scale" => "sketch scale",
        "darkness" => "darkness",
        other => other,
    }
}
