// SPDX-License-Identifier: GPL-3.0-only

//! Pipeline-wide constants

/// Width of the fixed GPU frame texture.
///
/// The presenter always rescales incoming frames to this size; the texture is
/// allocated once at surface creation and never reallocated per frame.
pub const TEXTURE_WIDTH: u32 = 1024;

/// Height of the fixed GPU frame texture.
pub const TEXTURE_HEIGHT: u32 = 512;

/// Width of the placeholder frame returned when a store slot is empty.
pub const FALLBACK_WIDTH: u32 = 640;

/// Height of the placeholder frame.
pub const FALLBACK_HEIGHT: u32 = 480;

/// Fill color (RGB) of the placeholder frame.
///
/// Solid blue, unmistakable on screen when the capture side has not produced
/// a frame yet.
pub const FALLBACK_COLOR: [u8; 3] = [0, 0, 255];

/// Lower gradient-magnitude threshold for edge detection (0-255 scale).
///
/// Pixels between the low and high thresholds are kept only when connected to
/// a strong edge.
pub const EDGE_LOW_THRESHOLD: u32 = 100;

/// Upper gradient-magnitude threshold for edge detection (0-255 scale).
pub const EDGE_HIGH_THRESHOLD: u32 = 200;

/// Rotation angles the geometry transform supports, in degrees.
pub const SUPPORTED_ROTATIONS: [u32; 4] = [0, 90, 180, 270];
