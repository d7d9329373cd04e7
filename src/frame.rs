// SPDX-License-Identifier: GPL-3.0-only

//! Owned frame buffer type shared by the pipeline, store and presenter

use crate::errors::FrameError;

/// Packed pixel layout of a [`FrameBuffer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelLayout {
    /// Single-channel intensity
    Gray,
    /// Packed 3-channel RGB
    Rgb,
    /// Packed 4-channel RGBA
    Rgba,
}

impl PixelLayout {
    /// Number of bytes per pixel for this layout
    #[inline]
    pub fn channels(&self) -> usize {
        match self {
            PixelLayout::Gray => 1,
            PixelLayout::Rgb => 3,
            PixelLayout::Rgba => 4,
        }
    }
}

/// An owned 2-D grid of pixels with contiguous byte storage
///
/// Invariant: `data.len() == width * height * layout.channels()`. The
/// constructor enforces this, so every `FrameBuffer` in the system is safe to
/// index by row and column. Frames never alias caller-owned memory: the
/// ingest boundary copies out of borrowed input before returning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    layout: PixelLayout,
    data: Vec<u8>,
}

impl FrameBuffer {
    /// Create a frame buffer, validating the byte-length invariant
    pub fn new(
        width: u32,
        height: u32,
        layout: PixelLayout,
        data: Vec<u8>,
    ) -> Result<Self, FrameError> {
        let expected = width as usize * height as usize * layout.channels();
        if data.len() != expected {
            return Err(FrameError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            layout,
            data,
        })
    }

    /// Create a solid-fill frame (used for the placeholder image)
    pub fn solid(width: u32, height: u32, color: [u8; 3]) -> Self {
        let pixels = width as usize * height as usize;
        let mut data = Vec::with_capacity(pixels * 3);
        for _ in 0..pixels {
            data.extend_from_slice(&color);
        }
        Self {
            width,
            height,
            layout: PixelLayout::Rgb,
            data,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn layout(&self) -> PixelLayout {
        self.layout
    }

    /// Raw pixel bytes, row-major, no padding
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the frame and return its byte storage
    #[inline]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// True when the frame holds no pixels
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_length() {
        let ok = FrameBuffer::new(2, 2, PixelLayout::Rgb, vec![0u8; 12]);
        assert!(ok.is_ok());

        let short = FrameBuffer::new(2, 2, PixelLayout::Rgb, vec![0u8; 11]);
        assert_eq!(
            short.unwrap_err(),
            FrameError::LengthMismatch {
                expected: 12,
                actual: 11
            }
        );
    }

    #[test]
    fn test_solid_fill() {
        let frame = FrameBuffer::solid(4, 2, [10, 20, 30]);
        assert_eq!(frame.width(), 4);
        assert_eq!(frame.height(), 2);
        assert_eq!(frame.layout(), PixelLayout::Rgb);
        for pixel in frame.data().chunks_exact(3) {
            assert_eq!(pixel, &[10, 20, 30]);
        }
    }

    #[test]
    fn test_is_empty() {
        let empty = FrameBuffer::new(0, 0, PixelLayout::Gray, vec![]).unwrap();
        assert!(empty.is_empty());

        let full = FrameBuffer::solid(1, 1, [0, 0, 0]);
        assert!(!full.is_empty());
    }
}
