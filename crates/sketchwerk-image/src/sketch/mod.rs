// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Sketch module — grayscale, invert, Gaussian blur, colour-dodge divide and
// darkness rescale.

pub mod blur;
pub mod transform;

pub use transform::{pencil_sketch, pencil_sketch_dynamic};
