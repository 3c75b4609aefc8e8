// Copyright 2025 the Bedview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Camera frames handed from capture threads to the UI thread.
//!
//! Each camera gets one [`LatestFrame`] slot. A capture thread publishes into
//! the slot as frames arrive; the UI thread reads whatever is newest when it
//! repaints. Publishing never blocks and a reader never sees a partial frame.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use arc_swap::ArcSwapOption;
use hashbrown::HashMap;

use crate::machine::CameraId;

/// Errors constructing a [`Frame`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FrameError {
    /// The pixel buffer does not hold `width * height` RGBA8 pixels.
    #[error("frame buffer holds {actual} bytes, expected {expected}")]
    SizeMismatch {
        /// Bytes required by the dimensions.
        expected: usize,
        /// Bytes supplied.
        actual: usize,
    },
    /// The dimensions overflow `usize`.
    #[error("frame dimensions {width} x {height} are too large")]
    TooLarge {
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
    },
}

/// An immutable RGBA8 image, rows top to bottom.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Arc<[u8]>,
}

impl Frame {
    /// Bytes per pixel.
    pub const BYTES_PER_PIXEL: usize = 4;

    /// Wraps an RGBA8 buffer of exactly `width * height * 4` bytes.
    pub fn new(width: u32, height: u32, pixels: impl Into<Arc<[u8]>>) -> Result<Self, FrameError> {
        let expected = usize::try_from(width)
            .ok()
            .zip(usize::try_from(height).ok())
            .and_then(|(w, h)| w.checked_mul(h))
            .and_then(|n| n.checked_mul(Self::BYTES_PER_PIXEL))
            .ok_or(FrameError::TooLarge { width, height })?;
        let pixels = pixels.into();
        if pixels.len() != expected {
            return Err(FrameError::SizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The RGBA8 pixel data.
    pub fn pixels(&self) -> &Arc<[u8]> {
        &self.pixels
    }
}

/// Single-slot holder for the newest frame of one camera.
#[derive(Debug, Default)]
pub struct LatestFrame {
    slot: ArcSwapOption<Frame>,
    generation: AtomicU64,
}

impl LatestFrame {
    /// An empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current frame.
    pub fn publish(&self, frame: Frame) {
        self.publish_arc(Arc::new(frame));
    }

    /// Replaces the current frame with an already shared one.
    pub fn publish_arc(&self, frame: Arc<Frame>) {
        #[cfg(feature = "tracing")]
        tracing::trace!(width = frame.width, height = frame.height, "camera frame published");
        self.slot.store(Some(frame));
        self.generation.fetch_add(1, Ordering::Release);
    }

    /// The newest frame, if any has been published since the last [`clear`](Self::clear).
    pub fn latest(&self) -> Option<Arc<Frame>> {
        self.slot.load_full()
    }

    /// Drops the current frame.
    pub fn clear(&self) {
        self.slot.store(None);
        self.generation.fetch_add(1, Ordering::Release);
    }

    /// Counter bumped on every publish or clear.
    ///
    /// Compare against a previously seen value to decide whether to repaint.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }
}

/// Frame slots for all cameras, keyed by [`CameraId`].
///
/// Slots are created on the UI thread before capture starts; each capture
/// thread keeps the `Arc` returned by [`slot`](Self::slot).
#[derive(Debug, Default)]
pub struct CameraFrames {
    slots: HashMap<CameraId, Arc<LatestFrame>>,
}

impl CameraFrames {
    /// No slots.
    pub fn new() -> Self {
        Self::default()
    }

    /// The slot for `camera`, created empty on first use.
    pub fn slot(&mut self, camera: CameraId) -> Arc<LatestFrame> {
        Arc::clone(self.slots.entry(camera).or_default())
    }

    /// Removes the slot for `camera`. Capture threads holding it keep publishing into a detached slot.
    pub fn remove(&mut self, camera: CameraId) -> Option<Arc<LatestFrame>> {
        self.slots.remove(&camera)
    }

    /// The newest frame for `camera`.
    pub fn latest(&self, camera: CameraId) -> Option<Arc<Frame>> {
        self.slots.get(&camera)?.latest()
    }

    /// Sum of all slot generations.
    pub fn generation(&self) -> u64 {
        self.slots
            .values()
            .fold(0_u64, |acc, s| acc.wrapping_add(s.generation()))
    }
}
