// SPDX-License-Identifier: GPL-3.0-only

//! Right-angle frame rotation

use crate::frame::FrameBuffer;
use tracing::warn;

/// Rotate a frame clockwise by a right angle
///
/// Supports exactly 0, 90, 180 and 270 degrees. Any other angle logs a
/// warning and returns an unrotated copy. Angle 0 is also a copy, never a
/// reference, so callers always own the result regardless of the angle.
pub fn rotate(frame: &FrameBuffer, angle_degrees: u32) -> FrameBuffer {
    match angle_degrees {
        0 => frame.clone(),
        90 => rotate_90(frame),
        180 => rotate_180(frame),
        270 => rotate_270(frame),
        other => {
            warn!(
                angle = other,
                "unsupported rotation angle, returning unrotated copy"
            );
            frame.clone()
        }
    }
}

fn rotate_90(frame: &FrameBuffer) -> FrameBuffer {
    let w = frame.width() as usize;
    let h = frame.height() as usize;
    let c = frame.layout().channels();
    let src = frame.data();
    let mut dst = vec![0u8; src.len()];

    // Destination is h wide and w tall; dst(x, y) <- src(y, h - 1 - x)
    for dy in 0..w {
        for dx in 0..h {
            let sx = dy;
            let sy = h - 1 - dx;
            let s = (sy * w + sx) * c;
            let d = (dy * h + dx) * c;
            dst[d..d + c].copy_from_slice(&src[s..s + c]);
        }
    }

    framebuffer_with_swapped_dims(frame, dst)
}

fn rotate_180(frame: &FrameBuffer) -> FrameBuffer {
    let w = frame.width() as usize;
    let h = frame.height() as usize;
    let c = frame.layout().channels();
    let src = frame.data();
    let mut dst = vec![0u8; src.len()];

    for dy in 0..h {
        for dx in 0..w {
            let s = ((h - 1 - dy) * w + (w - 1 - dx)) * c;
            let d = (dy * w + dx) * c;
            dst[d..d + c].copy_from_slice(&src[s..s + c]);
        }
    }

    // Dimensions unchanged for a half turn
    match FrameBuffer::new(frame.width(), frame.height(), frame.layout(), dst) {
        Ok(rotated) => rotated,
        Err(_) => frame.clone(),
    }
}

fn rotate_270(frame: &FrameBuffer) -> FrameBuffer {
    let w = frame.width() as usize;
    let h = frame.height() as usize;
    let c = frame.layout().channels();
    let src = frame.data();
    let mut dst = vec![0u8; src.len()];

    // dst(x, y) <- src(w - 1 - y, x)
    for dy in 0..w {
        for dx in 0..h {
            let sx = w - 1 - dy;
            let sy = dx;
            let s = (sy * w + sx) * c;
            let d = (dy * h + dx) * c;
            dst[d..d + c].copy_from_slice(&src[s..s + c]);
        }
    }

    framebuffer_with_swapped_dims(frame, dst)
}

fn framebuffer_with_swapped_dims(frame: &FrameBuffer, data: Vec<u8>) -> FrameBuffer {
    match FrameBuffer::new(frame.height(), frame.width(), frame.layout(), data) {
        Ok(rotated) => rotated,
        Err(_) => frame.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::PixelLayout;

    fn gradient_frame(width: u32, height: u32) -> FrameBuffer {
        let mut data = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                data.push((x * 7 + y * 13) as u8);
                data.push((x * 3) as u8);
                data.push((y * 5) as u8);
            }
        }
        FrameBuffer::new(width, height, PixelLayout::Rgb, data).unwrap()
    }

    #[test]
    fn test_zero_is_an_owned_copy() {
        let frame = gradient_frame(4, 2);
        let copy = rotate(&frame, 0);
        assert_eq!(copy, frame);
        assert_ne!(copy.data().as_ptr(), frame.data().as_ptr());
    }

    #[test]
    fn test_right_angle_swaps_dimensions() {
        let frame = gradient_frame(6, 4);
        for angle in [90, 270] {
            let rotated = rotate(&frame, angle);
            assert_eq!(rotated.width(), 4);
            assert_eq!(rotated.height(), 6);
        }
        let half = rotate(&frame, 180);
        assert_eq!(half.width(), 6);
        assert_eq!(half.height(), 4);
    }

    #[test]
    fn test_round_trip_restores_frame() {
        let frame = gradient_frame(6, 4);
        for angle in [0u32, 90, 180, 270] {
            let inverse = (360 - angle) % 360;
            let round_trip = rotate(&rotate(&frame, angle), inverse);
            assert_eq!(round_trip, frame, "round trip failed for {angle}");
        }
    }

    #[test]
    fn test_ninety_moves_top_left_to_top_right() {
        // 2x2 gray frame with distinct corners
        let frame = FrameBuffer::new(2, 2, PixelLayout::Gray, vec![1, 2, 3, 4]).unwrap();
        let rotated = rotate(&frame, 90);
        // Clockwise quarter turn: [1 2; 3 4] -> [3 1; 4 2]
        assert_eq!(rotated.data(), &[3, 1, 4, 2]);
    }

    #[test]
    fn test_unsupported_angle_returns_copy() {
        let frame = gradient_frame(4, 4);
        let result = rotate(&frame, 45);
        assert_eq!(result, frame);
    }
}
