// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// sketchwerk-app — front-end state shared by the `sketchwerk` binary and any
// interactive shell built on top of it.

pub mod session;

pub use session::SketchSession;
