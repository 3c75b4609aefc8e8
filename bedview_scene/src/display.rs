// Copyright 2025 the Bedview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel-space draw operations.

use std::sync::Arc;

use kurbo::{Point, Rect, Size, Vec2};
use peniko::Color;

use crate::frame::Frame;
use crate::machine::CameraId;

/// One drawing operation, in viewport pixels (y down).
#[derive(Clone, Debug, PartialEq)]
pub enum DisplayOp {
    /// Fill the whole viewport.
    Clear {
        /// Fill color.
        color: Color,
    },
    /// Fill an axis-aligned rectangle.
    FillRect {
        /// Rectangle to fill.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// Two one-pixel lines crossing at `center`, each extending `arm` pixels
    /// in both directions.
    Crosshair {
        /// Crossing point.
        center: Point,
        /// Half length of each line.
        arm: f64,
        /// Line color.
        color: Color,
    },
    /// Draw a camera frame stretched over `rect`.
    Image {
        /// Camera the frame came from.
        camera: CameraId,
        /// The frame to draw; row 0 goes at the top of `rect`.
        frame: Arc<Frame>,
        /// Destination rectangle.
        rect: Rect,
        /// Alpha multiplier in `0.0..=1.0`.
        opacity: f32,
    },
}

impl DisplayOp {
    /// Pixel area this op may touch, or `None` for [`DisplayOp::Clear`].
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Clear { .. } => None,
            Self::FillRect { rect, .. } | Self::Image { rect, .. } => Some(*rect),
            Self::Crosshair { center, arm, .. } => {
                let half = Vec2::new(*arm, *arm);
                Some(Rect::from_points(*center - half, *center + half))
            }
        }
    }
}

/// An ordered list of [`DisplayOp`]s for one repaint, back to front.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisplayList {
    viewport: Size,
    ops: Vec<DisplayOp>,
}

impl DisplayList {
    /// An empty list for a viewport of `viewport` pixels.
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            ops: Vec::new(),
        }
    }

    /// Viewport size the ops were built for.
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Appends `op` unless its bounds fall entirely outside the viewport.
    ///
    /// Returns whether the op was kept.
    pub fn push(&mut self, op: DisplayOp) -> bool {
        if let Some(bounds) = op.bounds() {
            let view = self.viewport.to_rect();
            let misses = !bounds.is_finite()
                || bounds.x1 < view.x0
                || bounds.x0 > view.x1
                || bounds.y1 < view.y0
                || bounds.y0 > view.y1;
            if misses {
                return false;
            }
        }
        self.ops.push(op);
        true
    }

    /// The ops, back to front.
    pub fn ops(&self) -> &[DisplayOp] {
        &self.ops
    }

    /// Number of ops.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Iterates the ops, back to front.
    pub fn iter(&self) -> core::slice::Iter<'_, DisplayOp> {
        self.ops.iter()
    }
}

impl<'a> IntoIterator for &'a DisplayList {
    type Item = &'a DisplayOp;
    type IntoIter = core::slice::Iter<'a, DisplayOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

impl IntoIterator for DisplayList {
    type Item = DisplayOp;
    type IntoIter = std::vec::IntoIter<DisplayOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}
