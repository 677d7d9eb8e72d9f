// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// sketchwerk-image — The pencil-sketch transform and the codec helpers around it.
//
// Provides the sketch pipeline (BT.601 grayscale, invert, Gaussian blur,
// colour-dodge divide, darkness rescale) and JPEG/PNG decode/encode for the
// harness.

pub mod io;
pub mod sketch;

// Re-export the primary items so callers can use `sketchwerk_image::pencil_sketch` etc.
pub use io::{Photo, encode, encode_jpeg, encode_png, save};
pub use sketch::{pencil_sketch, pencil_sketch_dynamic};
