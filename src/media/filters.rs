// SPDX-License-Identifier: GPL-3.0-only

//! Grayscale and edge-detection filters
//!
//! Both filters output 3-channel frames so every stored variant shares a
//! channel count and the presenter can use one upload path for all of them.

use crate::constants::{EDGE_HIGH_THRESHOLD, EDGE_LOW_THRESHOLD};
use crate::errors::TransformError;
use crate::frame::{FrameBuffer, PixelLayout};
use tracing::warn;

/// Convert a frame to grayscale, re-expanded to 3 channels
///
/// Uses integer BT.601 luma weights. The output has R == G == B per pixel.
pub fn grayscale_display(frame: &FrameBuffer) -> Result<FrameBuffer, TransformError> {
    if frame.is_empty() {
        return Err(TransformError::EmptyFrame);
    }

    let luma = luma_plane(frame);
    let mut rgb = Vec::with_capacity(luma.len() * 3);
    for &value in &luma {
        rgb.extend_from_slice(&[value, value, value]);
    }

    Ok(FrameBuffer::new(
        frame.width(),
        frame.height(),
        PixelLayout::Rgb,
        rgb,
    )?)
}

/// Detect edges in a frame and return a binary 0/255 map as a 3-channel frame
///
/// Grayscale, 3x3 Gaussian smoothing, Sobel gradient magnitude, then
/// double-threshold hysteresis with the fixed low/high sensitivity thresholds.
/// On internal failure the contract is to return the input unchanged rather
/// than propagate: the display keeps showing a coherent image.
pub fn detect_edges(frame: &FrameBuffer) -> FrameBuffer {
    match detect_edges_inner(frame) {
        Ok(edges) => edges,
        Err(e) => {
            warn!(
                error = %e,
                width = frame.width(),
                height = frame.height(),
                "edge detection failed, returning input unchanged"
            );
            frame.clone()
        }
    }
}

fn detect_edges_inner(frame: &FrameBuffer) -> Result<FrameBuffer, TransformError> {
    if frame.is_empty() {
        return Err(TransformError::EmptyFrame);
    }

    let w = frame.width() as usize;
    let h = frame.height() as usize;

    let luma = luma_plane(frame);
    let smoothed = gaussian_3x3(&luma, w, h);
    let magnitude = sobel_magnitude(&smoothed, w, h);
    let edges = hysteresis(&magnitude, w, h);

    let mut rgb = Vec::with_capacity(w * h * 3);
    for &value in &edges {
        rgb.extend_from_slice(&[value, value, value]);
    }

    Ok(FrameBuffer::new(
        frame.width(),
        frame.height(),
        PixelLayout::Rgb,
        rgb,
    )?)
}

/// Extract a single-channel luma plane from any supported layout
fn luma_plane(frame: &FrameBuffer) -> Vec<u8> {
    let data = frame.data();
    match frame.layout() {
        PixelLayout::Gray => data.to_vec(),
        PixelLayout::Rgb => data
            .chunks_exact(3)
            .map(|p| luma(p[0], p[1], p[2]))
            .collect(),
        PixelLayout::Rgba => data
            .chunks_exact(4)
            .map(|p| luma(p[0], p[1], p[2]))
            .collect(),
    }
}

#[inline]
fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((77 * r as u32 + 150 * g as u32 + 29 * b as u32) >> 8) as u8
}

/// 3x3 Gaussian blur (kernel 1-2-1 / 2-4-2 / 1-2-1, divisor 16), edges clamped
fn gaussian_3x3(plane: &[u8], w: usize, h: usize) -> Vec<u8> {
    let sample = |x: isize, y: isize| -> u32 {
        let x = x.clamp(0, w as isize - 1) as usize;
        let y = y.clamp(0, h as isize - 1) as usize;
        plane[y * w + x] as u32
    };

    let mut out = vec![0u8; w * h];
    for py in 0..h {
        for px in 0..w {
            let x = px as isize;
            let y = py as isize;
            let sum = sample(x - 1, y - 1)
                + 2 * sample(x, y - 1)
                + sample(x + 1, y - 1)
                + 2 * sample(x - 1, y)
                + 4 * sample(x, y)
                + 2 * sample(x + 1, y)
                + sample(x - 1, y + 1)
                + 2 * sample(x, y + 1)
                + sample(x + 1, y + 1);
            out[py * w + px] = (sum / 16) as u8;
        }
    }
    out
}

/// Sobel gradient magnitude per pixel, clamped to the 0-255 scale
fn sobel_magnitude(plane: &[u8], w: usize, h: usize) -> Vec<u8> {
    let sample = |x: isize, y: isize| -> i32 {
        let x = x.clamp(0, w as isize - 1) as usize;
        let y = y.clamp(0, h as isize - 1) as usize;
        plane[y * w + x] as i32
    };

    let mut out = vec![0u8; w * h];
    for py in 0..h {
        for px in 0..w {
            let x = px as isize;
            let y = py as isize;

            let tl = sample(x - 1, y - 1);
            let tm = sample(x, y - 1);
            let tr = sample(x + 1, y - 1);
            let ml = sample(x - 1, y);
            let mr = sample(x + 1, y);
            let bl = sample(x - 1, y + 1);
            let bm = sample(x, y + 1);
            let br = sample(x + 1, y + 1);

            let gx = (tr + 2 * mr + br) - (tl + 2 * ml + bl);
            let gy = (bl + 2 * bm + br) - (tl + 2 * tm + tr);
            let magnitude = ((gx * gx + gy * gy) as f32).sqrt();
            out[py * w + px] = magnitude.min(255.0) as u8;
        }
    }
    out
}

/// Double-threshold hysteresis on the gradient magnitude
///
/// Pixels at or above the high threshold are edges; pixels between the
/// thresholds become edges only when 8-connected to one.
fn hysteresis(magnitude: &[u8], w: usize, h: usize) -> Vec<u8> {
    let low = EDGE_LOW_THRESHOLD as u8;
    let high = EDGE_HIGH_THRESHOLD as u8;

    let mut out = vec![0u8; w * h];
    let mut stack = Vec::new();

    for (idx, &m) in magnitude.iter().enumerate() {
        if m >= high {
            out[idx] = 255;
            stack.push(idx);
        }
    }

    while let Some(idx) = stack.pop() {
        let px = idx % w;
        let py = idx / w;
        for dy in -1isize..=1 {
            for dx in -1isize..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = px as isize + dx;
                let ny = py as isize + dy;
                if nx < 0 || ny < 0 || nx >= w as isize || ny >= h as isize {
                    continue;
                }
                let n = ny as usize * w + nx as usize;
                if out[n] == 0 && magnitude[n] >= low {
                    out[n] = 255;
                    stack.push(n);
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Half-black, half-white test frame with one vertical boundary
    fn step_frame(width: u32, height: u32) -> FrameBuffer {
        let mut data = Vec::with_capacity((width * height * 3) as usize);
        for _y in 0..height {
            for x in 0..width {
                let value = if x < width / 2 { 0 } else { 255 };
                data.extend_from_slice(&[value, value, value]);
            }
        }
        FrameBuffer::new(width, height, PixelLayout::Rgb, data).unwrap()
    }

    #[test]
    fn test_grayscale_replicates_channels() {
        let mut data = Vec::new();
        for i in 0..16u32 {
            data.extend_from_slice(&[(i * 16) as u8, (i * 8) as u8, (i * 4) as u8]);
        }
        let frame = FrameBuffer::new(4, 4, PixelLayout::Rgb, data).unwrap();
        let gray = grayscale_display(&frame).unwrap();
        assert_eq!(gray.layout(), PixelLayout::Rgb);
        for pixel in gray.data().chunks_exact(3) {
            assert_eq!(pixel[0], pixel[1]);
            assert_eq!(pixel[1], pixel[2]);
        }
    }

    #[test]
    fn test_grayscale_rejects_empty() {
        let empty = FrameBuffer::new(0, 0, PixelLayout::Rgb, vec![]).unwrap();
        assert_eq!(grayscale_display(&empty), Err(TransformError::EmptyFrame));
    }

    #[test]
    fn test_edges_are_binary() {
        let frame = step_frame(32, 16);
        let edges = detect_edges(&frame);
        assert_eq!(edges.width(), 32);
        assert_eq!(edges.height(), 16);
        for &b in edges.data() {
            assert!(b == 0 || b == 255, "edge output must be binary, got {b}");
        }
    }

    #[test]
    fn test_step_boundary_is_detected() {
        let frame = step_frame(32, 16);
        let edges = detect_edges(&frame);
        // Edge pixels concentrate around the x = 16 boundary
        let w = 32usize;
        let mid_row = 8usize;
        let boundary = (0..w).any(|x| {
            let idx = (mid_row * w + x) * 3;
            edges.data()[idx] == 255 && (14..=18).contains(&x)
        });
        assert!(boundary, "expected edge response at the step boundary");
    }

    #[test]
    fn test_solid_frame_has_no_edges() {
        let frame = FrameBuffer::solid(16, 16, [90, 90, 90]);
        let edges = detect_edges(&frame);
        assert!(edges.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_empty_frame_falls_back_to_input() {
        let empty = FrameBuffer::new(0, 0, PixelLayout::Rgb, vec![]).unwrap();
        let result = detect_edges(&empty);
        assert_eq!(result, empty);
    }
}
