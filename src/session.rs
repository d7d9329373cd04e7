// SPDX-License-Identifier: GPL-3.0-only

//! Capture session state: frame store plus render-mode and orientation cells
//!
//! A [`CameraSession`] is the single object shared between the capture,
//! render and control threads. The frame store carries the heavyweight state
//! behind its own mutex; render mode and orientation are plain atomic scalars
//! because a torn read is impossible for values of this size and the only
//! race — a render tick using the value effective just before or just after a
//! concurrent set — is acceptable for visual mode switches.

use crate::store::FrameStore;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU8, Ordering};
use tracing::info;

/// Which stored variant (and draw style) the presenter should use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum RenderMode {
    /// Camera frame as converted, no filtering
    RawCamera = 0,
    /// Edge-detected frame
    #[default]
    EdgeDetection = 1,
    /// Grayscale frame
    Grayscale = 2,
    /// Processed frame with the standard draw style
    Default = 3,
    /// Processed frame drawn with half-texel-inset texture coordinates
    Inset = 4,
    /// Processed frame with a 1-px black border cleared before upload
    BorderFix = 5,
}

impl RenderMode {
    /// All modes, for UI iteration and the CLI listing
    pub const ALL: [RenderMode; 6] = [
        RenderMode::RawCamera,
        RenderMode::EdgeDetection,
        RenderMode::Grayscale,
        RenderMode::Default,
        RenderMode::Inset,
        RenderMode::BorderFix,
    ];

    /// Decode a mode from its wire value; unknown values map to the default
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => RenderMode::RawCamera,
            1 => RenderMode::EdgeDetection,
            2 => RenderMode::Grayscale,
            3 => RenderMode::Default,
            4 => RenderMode::Inset,
            5 => RenderMode::BorderFix,
            _ => RenderMode::default(),
        }
    }

    /// Get display name for the mode
    pub fn display_name(&self) -> &'static str {
        match self {
            RenderMode::RawCamera => "Raw camera",
            RenderMode::EdgeDetection => "Edge detection",
            RenderMode::Grayscale => "Grayscale",
            RenderMode::Default => "Default",
            RenderMode::Inset => "Inset",
            RenderMode::BorderFix => "Border fix",
        }
    }
}

/// Texture-coordinate mapping compensating for sensor-vs-display rotation
///
/// Independent of any pixel-level rotation already applied during capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Orientation {
    /// Direct mapping
    Normal = 0,
    /// Vertical flip, the most common fix for upside-down sensors
    #[default]
    FlippedVertical = 1,
    /// Quarter turn clockwise
    Rotated90 = 2,
    /// Half turn
    Rotated180 = 3,
    /// Quarter turn counter-clockwise
    Rotated270 = 4,
}

impl Orientation {
    /// All orientations, in cycle order
    pub const ALL: [Orientation; 5] = [
        Orientation::Normal,
        Orientation::FlippedVertical,
        Orientation::Rotated90,
        Orientation::Rotated180,
        Orientation::Rotated270,
    ];

    /// Decode an orientation from its wire value; unknown values map to the
    /// default
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => Orientation::Normal,
            1 => Orientation::FlippedVertical,
            2 => Orientation::Rotated90,
            3 => Orientation::Rotated180,
            4 => Orientation::Rotated270,
            _ => Orientation::default(),
        }
    }

    /// The next orientation in cycle order
    pub fn next(&self) -> Self {
        Orientation::from_u8((*self as u8 + 1) % Orientation::ALL.len() as u8)
    }

    /// Get display name for the orientation
    pub fn display_name(&self) -> &'static str {
        match self {
            Orientation::Normal => "Normal",
            Orientation::FlippedVertical => "Flipped vertical",
            Orientation::Rotated90 => "Rotated 90",
            Orientation::Rotated180 => "Rotated 180",
            Orientation::Rotated270 => "Rotated 270",
        }
    }
}

/// Shared state for one capture/render session
///
/// Created once per session and shared by `Arc` between the capture thread
/// (via the pipeline), the render thread (via the presenter) and whatever
/// control surface flips modes.
#[derive(Debug)]
pub struct CameraSession {
    store: FrameStore,
    mode: AtomicU8,
    orientation: AtomicU8,
}

impl Default for CameraSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraSession {
    /// Create a session with an empty store and default mode/orientation
    pub fn new() -> Self {
        Self::with_defaults(RenderMode::default(), Orientation::default())
    }

    /// Create a session with explicit initial mode and orientation
    pub fn with_defaults(mode: RenderMode, orientation: Orientation) -> Self {
        Self {
            store: FrameStore::new(),
            mode: AtomicU8::new(mode as u8),
            orientation: AtomicU8::new(orientation as u8),
        }
    }

    /// The shared frame store
    pub fn store(&self) -> &FrameStore {
        &self.store
    }

    /// Select which variant the presenter reads; callable from any thread
    pub fn set_render_mode(&self, mode: RenderMode) {
        self.mode.store(mode as u8, Ordering::Relaxed);
        info!(mode = mode.display_name(), "render mode changed");
    }

    /// The most recently set render mode
    pub fn render_mode(&self) -> RenderMode {
        RenderMode::from_u8(self.mode.load(Ordering::Relaxed))
    }

    /// Select the draw-time orientation mapping; callable from any thread
    pub fn set_orientation(&self, orientation: Orientation) {
        self.orientation.store(orientation as u8, Ordering::Relaxed);
        info!(
            orientation = orientation.display_name(),
            "orientation changed"
        );
    }

    /// The most recently set orientation
    pub fn orientation(&self) -> Orientation {
        Orientation::from_u8(self.orientation.load(Ordering::Relaxed))
    }

    /// Step to the next orientation and return it
    pub fn cycle_orientation(&self) -> Orientation {
        let next = self.orientation().next();
        self.set_orientation(next);
        next
    }

    /// Release every stored frame; callable independently of the surface
    /// lifecycle (e.g. on capture-session teardown)
    pub fn reset(&self) {
        self.store.clear();
        info!("session reset, stored frames released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_round_trip() {
        for mode in RenderMode::ALL {
            assert_eq!(RenderMode::from_u8(mode as u8), mode);
        }
        assert_eq!(RenderMode::from_u8(200), RenderMode::EdgeDetection);
    }

    #[test]
    fn test_orientation_cycle_wraps() {
        let session = CameraSession::with_defaults(RenderMode::default(), Orientation::Normal);
        let mut seen = vec![session.orientation()];
        for _ in 0..Orientation::ALL.len() {
            seen.push(session.cycle_orientation());
        }
        // Full cycle returns to the start
        assert_eq!(seen.first(), seen.last());
        assert_eq!(seen.len(), Orientation::ALL.len() + 1);
    }

    #[test]
    fn test_session_defaults() {
        let session = CameraSession::new();
        assert_eq!(session.render_mode(), RenderMode::EdgeDetection);
        assert_eq!(session.orientation(), Orientation::FlippedVertical);
    }

    #[test]
    fn test_set_and_read_mode() {
        let session = CameraSession::new();
        session.set_render_mode(RenderMode::Grayscale);
        assert_eq!(session.render_mode(), RenderMode::Grayscale);
    }
}
