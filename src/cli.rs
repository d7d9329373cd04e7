// SPDX-License-Identifier: GPL-3.0-only

//! CLI command implementations
//!
//! The `run` command stands in for the host environment: a capture thread
//! feeding synthetic NV21 frames into the pipeline and a render loop driving
//! the presenter's surface lifecycle, exactly the way a camera callback and a
//! display surface would.

use edgecam::config::Config;
use edgecam::pipeline::FramePipeline;
use edgecam::render::Presenter;
use edgecam::session::{CameraSession, Orientation, RenderMode};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::{info, warn};

/// Options for the `run` demo
pub struct RunOptions {
    pub frames: u32,
    pub width: u32,
    pub height: u32,
    pub rotation: u32,
    /// Initial render mode; falls back to the configured default
    pub mode: Option<RenderMode>,
    /// Initial orientation; falls back to the configured default
    pub orientation: Option<Orientation>,
    pub output: Option<PathBuf>,
}

/// Run the synthetic capture/render demo
pub fn run(options: RunOptions) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default_path()
        .map(|path| Config::load(&path))
        .unwrap_or_default();

    let mode = options.mode.unwrap_or(config.default_mode);
    let orientation = options.orientation.unwrap_or(config.default_orientation);
    let session = Arc::new(CameraSession::with_defaults(mode, orientation));
    let pipeline = FramePipeline::new(session.clone());

    info!(
        frames = options.frames,
        width = options.width,
        height = options.height,
        rotation = options.rotation,
        mode = mode.display_name(),
        orientation = orientation.display_name(),
        "starting demo run"
    );

    // Capture thread: the producer side of the pipeline
    let done = Arc::new(AtomicBool::new(false));
    let producer_done = done.clone();
    let frames = options.frames;
    let (width, height, rotation) = (options.width, options.height, options.rotation);
    let producer = std::thread::spawn(move || {
        for index in 0..frames {
            let buffer = synthetic_nv21(width, height, index);
            if let Err(e) = pipeline.ingest(&buffer, width, height, rotation) {
                warn!(error = %e, frame = index, "ingest failed");
            }
            // Roughly 30 fps capture cadence
            std::thread::sleep(Duration::from_millis(33));
        }
        producer_done.store(true, Ordering::Relaxed);
    });

    // Render loop: the consumer side, on this thread
    let mut presenter = Presenter::new(session.clone(), config);
    presenter.on_surface_created();
    presenter.on_surface_resized(options.width, options.height);

    let mut drawn = 0u32;
    while !done.load(Ordering::Relaxed) {
        presenter.on_draw_frame();
        drawn += 1;
        // Roughly 60 fps display cadence
        std::thread::sleep(Duration::from_millis(16));
    }
    presenter.on_draw_frame();
    drawn += 1;

    if let Err(e) = producer.join() {
        warn!("capture thread panicked: {:?}", e);
    }

    info!(frames_drawn = drawn, "demo run finished");

    if let Some(path) = options.output {
        match presenter.read_target_rgba() {
            Ok(target) => {
                let image = image::RgbaImage::from_raw(
                    target.width(),
                    target.height(),
                    target.into_data(),
                )
                .ok_or("failed to wrap target frame as an image")?;
                image.save(&path)?;
                info!(path = %path.display(), "saved presented frame");
            }
            Err(e) => warn!(error = %e, "no presented frame to save"),
        }
    }

    presenter.on_surface_destroyed();
    session.reset();
    Ok(())
}

/// List render modes and orientations
pub fn list_modes() -> Result<(), Box<dyn std::error::Error>> {
    println!("Render modes:");
    for mode in RenderMode::ALL {
        println!("  {:>2}  {}", mode as u8, mode.display_name());
    }
    println!("Orientations:");
    for orientation in Orientation::ALL {
        println!("  {:>2}  {}", orientation as u8, orientation.display_name());
    }
    Ok(())
}

/// Generate one synthetic NV21 test frame
///
/// A luma checkerboard that drifts with the frame index plus mildly colored
/// chroma, so every render mode has visible structure and the edge filter has
/// boundaries to find.
pub fn synthetic_nv21(width: u32, height: u32, frame_index: u32) -> Vec<u8> {
    let w = width as usize;
    let h = height as usize;
    let shift = (frame_index * 2) as usize;

    let mut data = Vec::with_capacity(w * h + w * h / 2);
    for y in 0..h {
        for x in 0..w {
            let cell = ((x + shift) / 16 + y / 16) % 2;
            data.push(if cell == 0 { 48 } else { 216 });
        }
    }
    // Interleaved VU plane, gently off-neutral
    for y in 0..h / 2 {
        for x in 0..w / 2 {
            data.push(128u8.wrapping_add((x % 16) as u8)); // V
            data.push(128u8.wrapping_sub((y % 16) as u8)); // U
        }
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_frame_has_planar_length() {
        let data = synthetic_nv21(64, 32, 0);
        assert_eq!(data.len(), 64 * 32 + 64 * 32 / 2);
    }

    #[test]
    fn test_synthetic_frame_drifts_with_index() {
        let a = synthetic_nv21(64, 32, 0);
        let b = synthetic_nv21(64, 32, 10);
        assert_ne!(a, b);
    }
}
