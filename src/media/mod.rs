// SPDX-License-Identifier: GPL-3.0-only

//! Pure image transforms: capture-format conversion, rotation and filters
//!
//! Everything in this module is free of shared state. Each function takes an
//! input buffer and returns a newly-owned output, so callers can move results
//! across threads without aliasing concerns.

pub mod convert;
pub mod filters;
pub mod rotate;

pub use convert::nv21_to_rgb;
pub use filters::{detect_edges, grayscale_display};
pub use rotate::rotate;
