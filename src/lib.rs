// SPDX-License-Identifier: GPL-3.0-only

//! edgecam - real-time camera frame pipeline with edge detection and GPU
//! preview
//!
//! The core of a camera viewer: a capture thread feeds raw NV21 frames into
//! the pipeline, which converts, rotates and derives grayscale and
//! edge-detected variants into a shared store; a render thread draws the
//! selected variant onto a fixed-size GPU texture at its own cadence. There
//! is no queue between the two sides: the store always holds the newest
//! frame, and a slow consumer simply redraws it.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`media`]: pure image transforms (format conversion, rotation, filters)
//! - [`frame`]: the owned frame buffer type
//! - [`store`]: mutex-guarded storage for the frame variants
//! - [`session`]: shared session state (store + mode/orientation cells)
//! - [`pipeline`]: the capture-side ingest orchestration
//! - [`render`]: the GPU presenter state machine
//! - [`config`]: user configuration handling
//!
//! # Example
//!
//! ```no_run
//! use edgecam::{CameraSession, Config, FramePipeline, Presenter, RenderMode};
//! use std::sync::Arc;
//!
//! let session = Arc::new(CameraSession::new());
//! let pipeline = FramePipeline::new(session.clone());
//!
//! // Capture side (host camera callback)
//! let nv21 = vec![128u8; 640 * 480 * 3 / 2];
//! pipeline.ingest(&nv21, 640, 480, 90).ok();
//!
//! // Control side
//! session.set_render_mode(RenderMode::Grayscale);
//!
//! // Render side (host surface lifecycle)
//! let mut presenter = Presenter::new(session, Config::default());
//! presenter.on_surface_created();
//! presenter.on_surface_resized(1280, 720);
//! presenter.on_draw_frame();
//! presenter.on_surface_destroyed();
//! ```

pub mod config;
pub mod constants;
pub mod errors;
pub mod frame;
pub mod gpu;
pub mod media;
pub mod pipeline;
pub mod render;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use config::Config;
pub use frame::{FrameBuffer, PixelLayout};
pub use pipeline::FramePipeline;
pub use render::Presenter;
pub use session::{CameraSession, Orientation, RenderMode};
pub use store::{FrameStore, Variant};
