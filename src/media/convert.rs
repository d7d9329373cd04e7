// SPDX-License-Identifier: GPL-3.0-only

//! NV21 to packed RGB conversion
//!
//! NV21 is the planar 4:2:0 layout delivered by the capture side: a full
//! resolution Y plane followed by an interleaved VU plane at quarter
//! resolution, for a logical height of `height + height / 2` rows. The
//! conversion uses integer fixed-point BT.601 coefficients so it stays exact
//! and allocation-bounded on the capture thread.

use crate::errors::PipelineError;
use crate::frame::{FrameBuffer, PixelLayout};

/// Convert an NV21 buffer to a packed 3-channel RGB frame
///
/// Rejects zero or odd dimensions (chroma is subsampled 2x2) and buffers
/// shorter than the planar layout requires. Extra trailing bytes (row padding
/// from some sensors) are ignored.
pub fn nv21_to_rgb(data: &[u8], width: u32, height: u32) -> Result<FrameBuffer, PipelineError> {
    if width == 0 || height == 0 || width % 2 != 0 || height % 2 != 0 {
        return Err(PipelineError::InvalidDimensions { width, height });
    }

    let w = width as usize;
    let h = height as usize;
    let y_size = w * h;
    let expected = y_size + y_size / 2;
    if data.len() < expected {
        return Err(PipelineError::ShortBuffer {
            expected,
            actual: data.len(),
        });
    }

    let y_plane = &data[..y_size];
    let vu_plane = &data[y_size..expected];
    let mut rgb = vec![0u8; w * h * 3];

    // Two Y rows share one VU row; walking them together keeps the chroma
    // reads hot in cache.
    for y_idx in (0..h).step_by(2) {
        let vu_row = y_idx / 2;
        convert_row(y_plane, vu_plane, &mut rgb, y_idx, vu_row, w);
        if y_idx + 1 < h {
            convert_row(y_plane, vu_plane, &mut rgb, y_idx + 1, vu_row, w);
        }
    }

    Ok(FrameBuffer::new(width, height, PixelLayout::Rgb, rgb)?)
}

#[inline]
fn convert_row(
    y_plane: &[u8],
    vu_plane: &[u8],
    rgb: &mut [u8],
    y_idx: usize,
    vu_row: usize,
    width: usize,
) {
    let y_row_start = y_idx * width;
    let vu_row_start = vu_row * width;
    let rgb_row_start = y_idx * width * 3;

    for x_idx in (0..width).step_by(2) {
        let vu_offset = vu_row_start + (x_idx / 2) * 2;

        // NV21 interleaves V before U
        let v = vu_plane[vu_offset] as i32 - 128;
        let u = vu_plane[vu_offset + 1] as i32 - 128;

        let r_v = (179 * v) >> 7;
        let g_u = (44 * u) >> 7;
        let g_v = (91 * v) >> 7;
        let b_u = (227 * u) >> 7;

        let y1 = ((y_plane[y_row_start + x_idx] as i32 - 16) * 149) >> 7;
        let out = rgb_row_start + x_idx * 3;
        rgb[out] = (y1 + r_v).clamp(0, 255) as u8;
        rgb[out + 1] = (y1 - g_u - g_v).clamp(0, 255) as u8;
        rgb[out + 2] = (y1 + b_u).clamp(0, 255) as u8;

        if x_idx + 1 < width {
            let y2 = ((y_plane[y_row_start + x_idx + 1] as i32 - 16) * 149) >> 7;
            let out2 = rgb_row_start + (x_idx + 1) * 3;
            rgb[out2] = (y2 + r_v).clamp(0, 255) as u8;
            rgb[out2 + 1] = (y2 - g_u - g_v).clamp(0, 255) as u8;
            rgb[out2 + 2] = (y2 + b_u).clamp(0, 255) as u8;
        }
    }
}
