// Copyright 2025 the Bedview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

use crate::error::ViewError;

/// Rectangular workspace in logical (machine) units, Y-up.
///
/// Bounds are validated on construction: both corners must be finite and
/// `top_right` must lie strictly above and to the right of `bottom_left`.
/// A value of this type is therefore always usable as a fitting target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorkspaceBounds {
    bottom_left: Point,
    top_right: Point,
}

impl WorkspaceBounds {
    /// Creates bounds from the bottom-left and top-right corners.
    pub fn new(bottom_left: Point, top_right: Point) -> Result<Self, ViewError> {
        if !is_finite_point(bottom_left) || !is_finite_point(top_right) {
            return Err(ViewError::InvalidInput {
                what: "workspace corner",
            });
        }
        let width = top_right.x - bottom_left.x;
        let height = top_right.y - bottom_left.y;
        // Also rejects extents that overflow to infinity.
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            return Err(ViewError::DegenerateBounds { width, height });
        }
        Ok(Self {
            bottom_left,
            top_right,
        })
    }

    /// Creates bounds spanning `(0, 0)` to `(width, height)`.
    ///
    /// This matches how machine extents are usually configured: a bed size
    /// measured from the homing corner.
    pub fn from_extents(width: f64, height: f64) -> Result<Self, ViewError> {
        Self::new(Point::ZERO, Point::new(width, height))
    }

    /// Returns the bottom-left (minimum) corner.
    #[must_use]
    pub fn bottom_left(&self) -> Point {
        self.bottom_left
    }

    /// Returns the top-right (maximum) corner.
    #[must_use]
    pub fn top_right(&self) -> Point {
        self.top_right
    }

    /// Width in logical units. Always positive.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.top_right.x - self.bottom_left.x
    }

    /// Height in logical units. Always positive.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.top_right.y - self.bottom_left.y
    }

    /// Geometric center of the workspace.
    #[must_use]
    pub fn center(&self) -> Point {
        self.bottom_left.midpoint(self.top_right)
    }

    /// The four corners, counter-clockwise from bottom-left.
    #[must_use]
    pub fn corners(&self) -> [Point; 4] {
        [
            self.bottom_left,
            Point::new(self.top_right.x, self.bottom_left.y),
            self.top_right,
            Point::new(self.bottom_left.x, self.top_right.y),
        ]
    }

    /// Returns `true` if `pt` lies inside or on the edge of the workspace.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.bottom_left.x
            && pt.x <= self.top_right.x
            && pt.y >= self.bottom_left.y
            && pt.y <= self.top_right.y
    }

    /// The workspace as a kurbo rectangle in logical coordinates.
    #[must_use]
    pub fn to_rect(&self) -> Rect {
        Rect::from_points(self.bottom_left, self.top_right)
    }
}

impl Default for WorkspaceBounds {
    /// A 400 x 400 bed anchored at the origin.
    fn default() -> Self {
        Self {
            bottom_left: Point::ZERO,
            top_right: Point::new(400.0, 400.0),
        }
    }
}

impl TryFrom<Rect> for WorkspaceBounds {
    type Error = ViewError;

    fn try_from(rect: Rect) -> Result<Self, Self::Error> {
        Self::new(Point::new(rect.x0, rect.y0), Point::new(rect.x1, rect.y1))
    }
}

fn is_finite_point(pt: Point) -> bool {
    pt.x.is_finite() && pt.y.is_finite()
}
