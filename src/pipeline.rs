// SPDX-License-Identifier: GPL-3.0-only

//! Frame ingest pipeline
//!
//! Runs on the capture thread. Each ingest decodes the incoming NV21 buffer,
//! applies the capture rotation, derives the grayscale and edge variants and
//! publishes all three to the shared store. The caller keeps ownership of the
//! input buffer; everything published is copied out before `ingest` returns.

use crate::errors::PipelineError;
use crate::media::{convert, filters, rotate};
use crate::session::CameraSession;
use std::sync::Arc;
use tracing::{debug, warn};

/// Orchestrates decode, rotation, variant derivation and publish
#[derive(Debug, Clone)]
pub struct FramePipeline {
    session: Arc<CameraSession>,
}

impl FramePipeline {
    pub fn new(session: Arc<CameraSession>) -> Self {
        Self { session }
    }

    /// Ingest one raw NV21 capture buffer
    ///
    /// Failure semantics follow the degrade-to-fallback policy:
    /// - empty input or capture-format conversion failure aborts the whole
    ///   ingest and leaves the store unchanged (the previous frame keeps
    ///   rendering);
    /// - an unsupported rotation angle degrades to the unrotated frame;
    /// - grayscale or edge-detection failure degrades that variant to a copy
    ///   of the raw frame.
    ///
    /// The three variants are published in a single store critical section,
    /// so a concurrent reader never observes slots from different
    /// generations.
    pub fn ingest(
        &self,
        data: &[u8],
        width: u32,
        height: u32,
        rotation_degrees: u32,
    ) -> Result<(), PipelineError> {
        if data.is_empty() {
            warn!("ingest called with an empty frame buffer, skipping");
            return Err(PipelineError::EmptyInput);
        }

        debug!(
            width,
            height,
            rotation = rotation_degrees,
            bytes = data.len(),
            "ingesting frame"
        );

        // The one stage whose failure is fatal to the frame: every variant
        // depends on the converted image.
        let rgb = convert::nv21_to_rgb(data, width, height).map_err(|e| {
            warn!(
                error = %e,
                width,
                height,
                "capture format conversion failed, dropping frame"
            );
            e
        })?;

        let rotated = if rotation_degrees != 0 {
            rotate::rotate(&rgb, rotation_degrees)
        } else {
            rgb
        };

        let grayscale = match filters::grayscale_display(&rotated) {
            Ok(gray) => gray,
            Err(e) => {
                warn!(error = %e, "grayscale conversion failed, falling back to raw");
                rotated.clone()
            }
        };

        // detect_edges degrades to its input internally, which is exactly the
        // raw-frame fallback the store expects
        let processed = filters::detect_edges(&rotated);

        self.session.store().publish_all(rotated, grayscale, processed);

        debug!("frame variants published");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::RenderMode;
    use crate::store::Variant;

    fn nv21_pattern(width: usize, height: usize) -> Vec<u8> {
        let y_size = width * height;
        let mut data = Vec::with_capacity(y_size + y_size / 2);
        for _y in 0..height {
            for x in 0..width {
                // Vertical bars give the edge filter something to find
                data.push(if (x / 8) % 2 == 0 { 40 } else { 220 });
            }
        }
        data.resize(y_size + y_size / 2, 128);
        data
    }

    #[test]
    fn test_empty_input_is_rejected_without_publishing() {
        let session = Arc::new(CameraSession::new());
        let pipeline = FramePipeline::new(session.clone());

        assert_eq!(
            pipeline.ingest(&[], 640, 480, 0),
            Err(PipelineError::EmptyInput)
        );
        assert!(session.store().slot(Variant::Raw).is_none());
    }

    #[test]
    fn test_conversion_failure_leaves_store_unchanged() {
        let session = Arc::new(CameraSession::new());
        let pipeline = FramePipeline::new(session.clone());

        let data = nv21_pattern(32, 16);
        pipeline.ingest(&data, 32, 16, 0).unwrap();
        let before = session.store().slot(Variant::Raw).unwrap();

        // Short buffer for the claimed dimensions
        let result = pipeline.ingest(&data[..16], 64, 64, 0);
        assert!(matches!(result, Err(PipelineError::ShortBuffer { .. })));
        assert_eq!(session.store().slot(Variant::Raw).unwrap(), before);
    }

    #[test]
    fn test_successful_ingest_fills_all_slots() {
        let session = Arc::new(CameraSession::new());
        let pipeline = FramePipeline::new(session.clone());

        pipeline.ingest(&nv21_pattern(32, 16), 32, 16, 0).unwrap();

        for variant in [Variant::Raw, Variant::Grayscale, Variant::Processed] {
            let frame = session.store().slot(variant).unwrap();
            assert_eq!(frame.width(), 32);
            assert_eq!(frame.height(), 16);
        }

        let gray = session.store().read_latest(RenderMode::Grayscale);
        for pixel in gray.data().chunks_exact(3) {
            assert_eq!(pixel[0], pixel[1]);
            assert_eq!(pixel[1], pixel[2]);
        }
    }

    #[test]
    fn test_rotation_swaps_published_dimensions() {
        let session = Arc::new(CameraSession::new());
        let pipeline = FramePipeline::new(session.clone());

        pipeline.ingest(&nv21_pattern(32, 16), 32, 16, 90).unwrap();

        let raw = session.store().slot(Variant::Raw).unwrap();
        assert_eq!(raw.width(), 16);
        assert_eq!(raw.height(), 32);
    }

    #[test]
    fn test_unsupported_rotation_degrades_to_unrotated() {
        let session = Arc::new(CameraSession::new());
        let pipeline = FramePipeline::new(session.clone());

        pipeline.ingest(&nv21_pattern(32, 16), 32, 16, 45).unwrap();

        let raw = session.store().slot(Variant::Raw).unwrap();
        assert_eq!(raw.width(), 32);
        assert_eq!(raw.height(), 16);
    }
}
