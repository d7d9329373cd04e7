// SPDX-License-Identifier: GPL-3.0-only

//! Shared frame store
//!
//! Holds the raw, grayscale and processed variants of the latest ingested
//! frame behind a single mutex. The capture thread publishes, the render
//! thread reads; both sides only ever hold the lock for memcpy-bounded work.
//! There is no queue: a publish overwrites whatever was there, and a read
//! returns the newest available frame (drop-oldest, read-latest).

use crate::constants::{FALLBACK_COLOR, FALLBACK_HEIGHT, FALLBACK_WIDTH};
use crate::frame::FrameBuffer;
use crate::session::RenderMode;
use std::sync::Mutex;
use tracing::debug;

/// Named slot within the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Camera frame after capture-format conversion and rotation
    Raw,
    /// Grayscale rendition of the raw frame
    Grayscale,
    /// Edge-detected rendition of the raw frame
    Processed,
}

#[derive(Debug, Default)]
struct Slots {
    raw: Option<FrameBuffer>,
    grayscale: Option<FrameBuffer>,
    processed: Option<FrameBuffer>,
}

/// Mutex-guarded storage for the three frame variants
///
/// Every read returns an independent copy; the store never hands out a
/// reference a caller could mutate concurrently with a future publish.
#[derive(Debug)]
pub struct FrameStore {
    slots: Mutex<Slots>,
    fallback: FrameBuffer,
}

impl Default for FrameStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameStore {
    /// Create an empty store with the default placeholder image
    pub fn new() -> Self {
        Self::with_fallback(FALLBACK_WIDTH, FALLBACK_HEIGHT, FALLBACK_COLOR)
    }

    /// Create an empty store with a custom placeholder image
    pub fn with_fallback(width: u32, height: u32, color: [u8; 3]) -> Self {
        Self {
            slots: Mutex::new(Slots::default()),
            fallback: FrameBuffer::solid(width, height, color),
        }
    }

    /// Overwrite a single slot
    pub fn publish(&self, variant: Variant, frame: FrameBuffer) {
        let mut slots = self.lock_slots();
        match variant {
            Variant::Raw => slots.raw = Some(frame),
            Variant::Grayscale => slots.grayscale = Some(frame),
            Variant::Processed => slots.processed = Some(frame),
        }
    }

    /// Overwrite all three slots within one critical section
    ///
    /// A concurrent reader sees either the previous generation of every slot
    /// or the new one, never a torn mix.
    pub fn publish_all(&self, raw: FrameBuffer, grayscale: FrameBuffer, processed: FrameBuffer) {
        let mut slots = self.lock_slots();
        slots.raw = Some(raw);
        slots.grayscale = Some(grayscale);
        slots.processed = Some(processed);
    }

    /// Copy out the newest frame for the given render mode
    ///
    /// Mode resolution: `RawCamera` reads the raw slot, `Grayscale` the
    /// grayscale slot, every other mode the processed slot. An empty slot
    /// yields the placeholder image so the presenter always has something to
    /// draw.
    pub fn read_latest(&self, mode: RenderMode) -> FrameBuffer {
        let slots = self.lock_slots();
        let chosen = match mode {
            RenderMode::RawCamera => &slots.raw,
            RenderMode::Grayscale => &slots.grayscale,
            _ => &slots.processed,
        };
        match chosen {
            Some(frame) => frame.clone(),
            None => {
                debug!(mode = mode.display_name(), "slot empty, using placeholder");
                self.fallback.clone()
            }
        }
    }

    /// Copy out a specific slot, or `None` when it has not been published yet
    pub fn slot(&self, variant: Variant) -> Option<FrameBuffer> {
        let slots = self.lock_slots();
        match variant {
            Variant::Raw => slots.raw.clone(),
            Variant::Grayscale => slots.grayscale.clone(),
            Variant::Processed => slots.processed.clone(),
        }
    }

    /// Release every stored frame
    pub fn clear(&self) {
        let mut slots = self.lock_slots();
        *slots = Slots::default();
    }

    fn lock_slots(&self) -> std::sync::MutexGuard<'_, Slots> {
        match self.slots.lock() {
            Ok(guard) => guard,
            // A writer panicking mid-publish leaves whole frames behind, so
            // the data is still usable
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
