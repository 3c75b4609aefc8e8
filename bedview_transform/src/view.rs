// Copyright 2025 the Bedview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size};

use crate::bounds::WorkspaceBounds;
use crate::config::{ViewConfig, ZoomOutcome};
use crate::error::ViewError;

/// Smallest viewport extent, in pixels, accepted by [`ViewTransform::set_viewport_size`].
const MIN_VIEWPORT_EXTENT: f64 = 1.0;

/// Bidirectional mapping between a pixel viewport and a machine workspace.
///
/// Pixel space has its origin at the top-left of the viewport with Y growing
/// down. Logical space is the machine's coordinate system with Y growing up.
/// The mapping is determined by four pieces of state:
///
/// - the workspace bounds,
/// - the logical `center` shown at the viewport's pixel center,
/// - the user `scale` multiplier (clamped to the configured limits),
/// - the viewport size, from which the base fit factor is derived.
///
/// The affine map is rebuilt from that state on every query, so it can never
/// disagree with the state it was derived from.
#[derive(Clone, Debug)]
pub struct ViewTransform {
    bounds: WorkspaceBounds,
    config: ViewConfig,
    center: Point,
    scale: f64,
    viewport_size: Size,
}

impl ViewTransform {
    /// Creates a view over `bounds` with the default scale limits.
    ///
    /// - Center is the workspace centroid.
    /// - Scale is `1.0` (exactly fitted).
    /// - The viewport is `1 x 1` until the host reports its real size.
    #[must_use]
    pub fn new(bounds: WorkspaceBounds) -> Self {
        Self {
            bounds,
            config: ViewConfig::default(),
            center: bounds.center(),
            scale: 1.0,
            viewport_size: Size::new(MIN_VIEWPORT_EXTENT, MIN_VIEWPORT_EXTENT),
        }
    }

    /// Creates a view over `bounds` with custom scale limits.
    pub fn with_config(bounds: WorkspaceBounds, config: ViewConfig) -> Result<Self, ViewError> {
        let config = config.validated()?;
        let mut view = Self::new(bounds);
        view.config = config;
        Ok(view)
    }

    /// Returns the workspace bounds.
    #[must_use]
    pub fn bounds(&self) -> WorkspaceBounds {
        self.bounds
    }

    /// Returns the scale limits.
    #[must_use]
    pub fn config(&self) -> ViewConfig {
        self.config
    }

    /// Returns the logical point shown at the viewport's pixel center.
    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Returns the user scale multiplier.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the configured scale floor.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.config.min_scale
    }

    /// Returns the current viewport size in pixels.
    #[must_use]
    pub fn viewport_size(&self) -> Size {
        self.viewport_size
    }

    /// Pixel coordinates of the viewport center.
    #[must_use]
    pub fn viewport_center(&self) -> Point {
        Point::new(self.viewport_size.width / 2.0, self.viewport_size.height / 2.0)
    }

    /// Scale that fits the whole workspace on the viewport's tighter axis.
    #[must_use]
    pub fn base_scale(&self) -> f64 {
        let sx = self.viewport_size.width / self.bounds.width();
        let sy = self.viewport_size.height / self.bounds.height();
        sx.min(sy)
    }

    /// Pixels per logical unit: the base fit factor times the user scale.
    #[must_use]
    pub fn combined_scale(&self) -> f64 {
        self.base_scale() * self.scale
    }

    /// Logical units covered by one pixel at the current zoom.
    ///
    /// Useful for choosing marker sizes and pick tolerances in machine units.
    #[must_use]
    pub fn logical_units_per_pixel(&self) -> f64 {
        1.0 / self.combined_scale()
    }

    /// Updates the viewport size.
    ///
    /// Only the base fit factor changes; `center` and the user scale are kept.
    /// Non-finite, zero or negative extents clamp to one pixel.
    pub fn set_viewport_size(&mut self, width: f64, height: f64) {
        self.viewport_size = Size::new(sanitize_extent(width), sanitize_extent(height));
    }

    /// Replaces the workspace bounds and recenters on the new workspace.
    ///
    /// The user scale is kept, so a machine that grows or shrinks keeps the
    /// same relative zoom.
    pub fn set_bounds(&mut self, bounds: WorkspaceBounds) {
        if self.bounds == bounds {
            return;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            width = bounds.width(),
            height = bounds.height(),
            "workspace bounds replaced"
        );
        self.bounds = bounds;
        self.center = bounds.center();
    }

    /// Validates and installs new workspace bounds.
    ///
    /// On error the previous bounds and view state are left untouched.
    pub fn try_set_bounds(&mut self, bottom_left: Point, top_right: Point) -> Result<(), ViewError> {
        match WorkspaceBounds::new(bottom_left, top_right) {
            Ok(bounds) => {
                self.set_bounds(bounds);
                Ok(())
            }
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(%err, "rejected workspace bounds");
                Err(err)
            }
        }
    }

    /// Validates and installs new scale limits, clamping the current scale into them.
    pub fn set_config(&mut self, config: ViewConfig) -> Result<(), ViewError> {
        self.config = config.validated()?;
        self.scale = self.config.clamp(self.scale);
        Ok(())
    }

    /// Sets the user scale directly, clamped to the configured limits.
    ///
    /// Non-finite values are ignored. The view keeps its `center`, so this
    /// zooms about the viewport center.
    pub fn set_scale(&mut self, scale: f64) {
        if scale.is_finite() {
            self.scale = self.config.clamp(scale);
        }
    }

    /// Shows `pt` at the viewport center. Non-finite points are ignored.
    pub fn center_on(&mut self, pt: Point) {
        if pt.x.is_finite() && pt.y.is_finite() {
            self.center = pt;
        }
    }

    /// Moves the view back onto the workspace centroid without changing the scale.
    pub fn recenter(&mut self) {
        self.center = self.bounds.center();
    }

    /// Resets to the fitted view: scale `1.0`, centered on the workspace.
    pub fn fit_to_window(&mut self) {
        self.scale = 1.0;
        self.center = self.bounds.center();
    }

    /// Pans by a delta in pixels.
    ///
    /// Dragging content right (positive `dx`) moves `center` left in machine
    /// X; dragging down (positive `dy`) moves `center` up in machine Y,
    /// because pixel Y is flipped relative to logical Y.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        if !(dx.is_finite() && dy.is_finite()) {
            return;
        }
        let s = self.combined_scale();
        self.center.x -= dx / s;
        self.center.y += dy / s;
    }

    /// Changes the user scale by `delta_scale`, keeping the logical point under
    /// pixel `(px, py)` fixed on screen.
    ///
    /// The new scale is clamped to the configured limits, and never exceeds
    /// [`SCALE_LIMIT`](crate::SCALE_LIMIT). A zoom out that ends on the floor
    /// reports [`ZoomOutcome::AtFloor`] whether or not it was clamped. The anchor is
    /// preserved by measuring the logical point under the cursor before and
    /// after the scale change and shifting `center` by the difference, since
    /// `center` and scale both feed the forward transform.
    ///
    /// Non-finite pointer coordinates anchor at the viewport center.
    pub fn zoom_at(&mut self, px: f64, py: f64, delta_scale: f64) -> ZoomOutcome {
        if !delta_scale.is_finite() || delta_scale == 0.0 {
            return ZoomOutcome::Unchanged;
        }
        let requested = self.scale + delta_scale;
        let clamped = self.config.clamp(requested);
        if !(self.base_scale() * clamped).is_finite() {
            return ZoomOutcome::Unchanged;
        }
        let outcome = if delta_scale < 0.0 && clamped <= self.config.min_scale {
            ZoomOutcome::AtFloor
        } else if clamped < requested {
            ZoomOutcome::AtCeiling
        } else {
            ZoomOutcome::Zoomed
        };

        let anchor = self.sanitize_pixel(px, py);
        let before = self.pixel_to_logical(anchor.x, anchor.y);
        let previous = self.scale;
        self.scale = clamped;
        let after = self.pixel_to_logical(anchor.x, anchor.y);
        let shift = before - after;
        if !(shift.x.is_finite() && shift.y.is_finite()) {
            self.scale = previous;
            return ZoomOutcome::Unchanged;
        }
        self.center += shift;

        #[cfg(feature = "tracing")]
        {
            if outcome == ZoomOutcome::AtFloor {
                tracing::debug!(scale = self.scale, "zoom clamped at minimum scale");
            }
        }
        outcome
    }

    /// The logical → pixel affine map for the current state.
    ///
    /// Applied to a point, this translates so `center` sits at the origin,
    /// scales by [`Self::combined_scale`], flips Y, then moves the origin to
    /// the viewport's pixel center. The order matters: the flip comes after
    /// the scale so handedness is preserved.
    #[must_use]
    pub fn logical_to_pixel_transform(&self) -> Affine {
        Affine::translate(self.viewport_center().to_vec2())
            * Affine::FLIP_Y
            * Affine::scale(self.combined_scale())
            * Affine::translate(-self.center.to_vec2())
    }

    /// The pixel → logical affine map; the inverse of [`Self::logical_to_pixel_transform`].
    #[must_use]
    pub fn pixel_to_logical_transform(&self) -> Affine {
        // Built from the reciprocal scale rather than `Affine::inverse`, whose
        // determinant (`combined_scale²`) overflows long before the scale does.
        let inv = self.combined_scale().recip();
        Affine::translate(self.center.to_vec2())
            * Affine::scale_non_uniform(inv, -inv)
            * Affine::translate(-self.viewport_center().to_vec2())
    }

    /// Converts a logical (machine) point into pixel coordinates.
    ///
    /// Points outside the workspace or the viewport are mapped too; nothing
    /// is clipped.
    #[must_use]
    pub fn logical_to_pixel(&self, lx: f64, ly: f64) -> Point {
        self.logical_to_pixel_transform() * Point::new(lx, ly)
    }

    /// Converts a pixel point into logical (machine) coordinates.
    ///
    /// Non-finite pixel coordinates are replaced with the viewport center's.
    #[must_use]
    pub fn pixel_to_logical(&self, px: f64, py: f64) -> Point {
        self.pixel_to_logical_transform() * self.sanitize_pixel(px, py)
    }

    /// Converts a logical rectangle into the pixel rectangle covering it.
    #[must_use]
    pub fn logical_rect_to_pixel(&self, rect: Rect) -> Rect {
        // Axis-aligned with a uniform scale: two opposite corners are enough,
        // and `from_points` reorders them after the Y flip.
        let t = self.logical_to_pixel_transform();
        Rect::from_points(t * Point::new(rect.x0, rect.y0), t * Point::new(rect.x1, rect.y1))
    }

    /// Converts a pixel rectangle into the logical rectangle covering it.
    #[must_use]
    pub fn pixel_rect_to_logical(&self, rect: Rect) -> Rect {
        let t = self.pixel_to_logical_transform();
        Rect::from_points(t * Point::new(rect.x0, rect.y0), t * Point::new(rect.x1, rect.y1))
    }

    /// The logical rectangle currently covered by the viewport.
    #[must_use]
    pub fn visible_logical_rect(&self) -> Rect {
        self.pixel_rect_to_logical(Rect::from_origin_size(Point::ZERO, self.viewport_size))
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewTransformDebugInfo {
        ViewTransformDebugInfo {
            bounds: self.bounds,
            center: self.center,
            scale: self.scale,
            min_scale: self.config.min_scale,
            max_scale: self.config.max_scale,
            viewport_size: self.viewport_size,
            base_scale: self.base_scale(),
            combined_scale: self.combined_scale(),
            visible_logical_rect: self.visible_logical_rect(),
        }
    }

    fn sanitize_pixel(&self, px: f64, py: f64) -> Point {
        let fallback = self.viewport_center();
        Point::new(
            if px.is_finite() { px } else { fallback.x },
            if py.is_finite() { py } else { fallback.y },
        )
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new(WorkspaceBounds::default())
    }
}

fn sanitize_extent(v: f64) -> f64 {
    if v.is_finite() {
        v.max(MIN_VIEWPORT_EXTENT)
    } else {
        MIN_VIEWPORT_EXTENT
    }
}

/// Debug snapshot of a [`ViewTransform`].
#[derive(Clone, Copy, Debug)]
pub struct ViewTransformDebugInfo {
    /// Workspace bounds in logical units.
    pub bounds: WorkspaceBounds,
    /// Logical point at the viewport center.
    pub center: Point,
    /// User scale multiplier.
    pub scale: f64,
    /// Scale floor.
    pub min_scale: f64,
    /// Scale ceiling, if any.
    pub max_scale: Option<f64>,
    /// Viewport size in pixels.
    pub viewport_size: Size,
    /// Fit-to-window factor for the current viewport size.
    pub base_scale: f64,
    /// `base_scale * scale`.
    pub combined_scale: f64,
    /// Logical rectangle covered by the viewport.
    pub visible_logical_rect: Rect,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size};

    use super::ViewTransform;
    use crate::{SCALE_LIMIT, ViewConfig, WorkspaceBounds, ZoomOutcome};

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    fn square_bed_800() -> ViewTransform {
        let bounds = WorkspaceBounds::from_extents(400.0, 400.0).unwrap();
        let mut view = ViewTransform::new(bounds);
        view.set_viewport_size(800.0, 800.0);
        view
    }

    #[test]
    fn square_bed_maps_corners_to_viewport_corners() {
        let view = square_bed_800();
        assert_eq!(view.base_scale(), 2.0);
        assert_eq!(view.center(), Point::new(200.0, 200.0));
        assert!(close(view.logical_to_pixel(200.0, 200.0), Point::new(400.0, 400.0)));
        assert!(close(view.logical_to_pixel(0.0, 0.0), Point::new(0.0, 800.0)));
        assert!(close(view.logical_to_pixel(400.0, 400.0), Point::new(800.0, 0.0)));
    }

    #[test]
    fn y_axis_is_flipped() {
        let view = square_bed_800();
        let low = view.logical_to_pixel(100.0, 10.0);
        let high = view.logical_to_pixel(100.0, 20.0);
        assert!(high.y < low.y, "higher machine Y must be drawn further up");
        let left = view.logical_to_pixel(10.0, 100.0);
        let right = view.logical_to_pixel(20.0, 100.0);
        assert!(right.x > left.x, "X keeps its direction");
    }

    #[test]
    fn roundtrip_outside_viewport() {
        let mut view = square_bed_800();
        view.pan(37.0, -12.5);
        view.zoom_at(100.0, 700.0, 2.25);
        for pt in [
            Point::new(-5000.0, 12.0),
            Point::new(1.0e6, -3.0e5),
            Point::new(200.0, 200.0),
        ] {
            let px = view.logical_to_pixel(pt.x, pt.y);
            let back = view.pixel_to_logical(px.x, px.y);
            assert!((back.x - pt.x).abs() <= 1e-9 * pt.x.abs().max(1.0));
            assert!((back.y - pt.y).abs() <= 1e-9 * pt.y.abs().max(1.0));
        }
    }

    #[test]
    fn resize_keeps_center_and_scale() {
        let mut view = square_bed_800();
        view.zoom_at(10.0, 10.0, 0.75);
        let center = view.center();
        let scale = view.scale();

        view.set_viewport_size(1024.0, 300.0);
        assert_eq!(view.center(), center);
        assert_eq!(view.scale(), scale);
        assert_eq!(view.base_scale(), 300.0 / 400.0);
    }

    #[test]
    fn degenerate_viewport_sizes_clamp_to_one_pixel() {
        let mut view = square_bed_800();
        view.set_viewport_size(0.0, -20.0);
        assert_eq!(view.viewport_size(), Size::new(1.0, 1.0));
        view.set_viewport_size(f64::NAN, f64::INFINITY);
        assert_eq!(view.viewport_size(), Size::new(1.0, 1.0));
        assert!(view.combined_scale() > 0.0);
    }

    #[test]
    fn zoom_at_cursor_keeps_anchor() {
        let mut view = square_bed_800();
        let anchor = (123.0, 611.0);
        let before = view.pixel_to_logical(anchor.0, anchor.1);

        assert_eq!(view.zoom_at(anchor.0, anchor.1, 0.8), ZoomOutcome::Zoomed);
        let after = view.pixel_to_logical(anchor.0, anchor.1);
        assert!(close(before, after));
        assert!((view.scale() - 1.8).abs() < 1e-12);
    }

    #[test]
    fn zoom_in_then_out_restores_state() {
        let mut view = square_bed_800();
        view.zoom_at(400.0, 400.0, 0.5);
        view.zoom_at(400.0, 400.0, -0.5);
        assert!((view.scale() - 1.0).abs() < 1e-12);
        assert!(close(view.center(), Point::new(200.0, 200.0)));
    }

    #[test]
    fn zoom_clamps_at_floor() {
        let mut view = square_bed_800();
        assert_eq!(view.zoom_at(50.0, 50.0, -100.0), ZoomOutcome::AtFloor);
        assert_eq!(view.scale(), view.min_scale());
        // Still anchored even though the clamp engaged.
        assert_eq!(view.zoom_at(50.0, 50.0, -1.0), ZoomOutcome::AtFloor);
        assert_eq!(view.scale(), view.min_scale());
    }

    #[test]
    fn zoom_landing_exactly_on_floor_reports_floor() {
        let mut view = square_bed_800();
        view.set_scale(0.2);
        assert_eq!(view.zoom_at(400.0, 400.0, -0.1), ZoomOutcome::AtFloor);
        assert_eq!(view.scale(), view.min_scale());
        // Zooming back in from the floor is an ordinary zoom.
        assert_eq!(view.zoom_at(400.0, 400.0, 0.1), ZoomOutcome::Zoomed);
    }

    #[test]
    fn huge_finite_zoom_stays_finite() {
        let mut view = square_bed_800();
        assert_eq!(view.zoom_at(400.0, 400.0, 1.0e308), ZoomOutcome::AtCeiling);
        assert_eq!(view.zoom_at(400.0, 400.0, 1.0e308), ZoomOutcome::AtCeiling);
        assert_eq!(view.scale(), SCALE_LIMIT);
        assert_eq!(view.center(), Point::new(200.0, 200.0));
        assert_eq!(view.logical_to_pixel(200.0, 200.0), Point::new(400.0, 400.0));

        assert_eq!(view.zoom_at(400.0, 400.0, 1.0e8), ZoomOutcome::AtCeiling);
        view.pan(10.0, -10.0);
        let center = view.center();
        assert!(center.x.is_finite() && center.y.is_finite(), "center {center:?}");
        assert!(center != Point::new(200.0, 200.0), "pan still moves the view");
    }

    #[test]
    fn huge_zoom_off_center_keeps_anchor() {
        let mut view = square_bed_800();
        let anchor = (123.0, 611.0);
        let before = view.pixel_to_logical(anchor.0, anchor.1);
        assert_eq!(view.zoom_at(anchor.0, anchor.1, 1.0e300), ZoomOutcome::AtCeiling);
        let after = view.pixel_to_logical(anchor.0, anchor.1);
        assert!(close(before, after), "{before:?} vs {after:?}");
        let px = view.logical_to_pixel(after.x, after.y);
        assert!((px.x - anchor.0).abs() < 1e-3 && (px.y - anchor.1).abs() < 1e-3, "{px:?}");
    }

    #[test]
    fn zoom_clamps_at_ceiling() {
        let bounds = WorkspaceBounds::default();
        let config = ViewConfig::default().with_max_scale(Some(4.0));
        let mut view = ViewTransform::with_config(bounds, config).unwrap();
        view.set_viewport_size(400.0, 400.0);
        assert_eq!(view.zoom_at(0.0, 0.0, 10.0), ZoomOutcome::AtCeiling);
        assert_eq!(view.scale(), 4.0);
    }

    #[test]
    fn non_finite_inputs_are_sanitized() {
        let mut view = square_bed_800();
        assert_eq!(view.zoom_at(0.0, 0.0, f64::NAN), ZoomOutcome::Unchanged);
        assert_eq!(view.zoom_at(0.0, 0.0, 0.0), ZoomOutcome::Unchanged);

        view.pan(f64::INFINITY, 1.0);
        assert_eq!(view.center(), Point::new(200.0, 200.0));

        // A NaN pointer anchors at the viewport center, which maps to `center`.
        assert_eq!(view.zoom_at(f64::NAN, f64::NAN, 1.0), ZoomOutcome::Zoomed);
        assert!(close(view.center(), Point::new(200.0, 200.0)));
        assert!(close(view.pixel_to_logical(f64::NAN, f64::NAN), view.center()));

        view.set_scale(f64::NAN);
        assert_eq!(view.scale(), 2.0);
        view.center_on(Point::new(f64::NAN, 3.0));
        assert!(close(view.center(), Point::new(200.0, 200.0)));
    }

    #[test]
    fn pan_moves_content_with_pointer() {
        let mut view = square_bed_800();
        let target = Point::new(120.0, 80.0);
        let before = view.logical_to_pixel(target.x, target.y);
        view.pan(30.0, -40.0);
        let after = view.logical_to_pixel(target.x, target.y);
        assert!(close(after, Point::new(before.x + 30.0, before.y - 40.0)));

        view.pan(-30.0, 40.0);
        assert!(close(view.center(), Point::new(200.0, 200.0)));
    }

    #[test]
    fn fit_to_window_resets_scale_and_center() {
        let mut view = square_bed_800();
        view.zoom_at(10.0, 20.0, 3.0);
        view.pan(100.0, 100.0);
        view.fit_to_window();
        assert_eq!(view.scale(), 1.0);
        assert_eq!(view.center(), Point::new(200.0, 200.0));
    }

    #[test]
    fn wide_viewport_fits_on_height() {
        let bounds = WorkspaceBounds::from_extents(430.0, 410.0).unwrap();
        let mut view = ViewTransform::new(bounds);
        view.set_viewport_size(1200.0, 410.0);
        view.fit_to_window();
        assert_eq!(view.base_scale(), 1.0);

        let visible = view.visible_logical_rect();
        let bed = bounds.to_rect();
        assert!(visible.x0 <= bed.x0 && visible.x1 >= bed.x1);
        assert!((visible.y0 - bed.y0).abs() < 1e-9);
        assert!((visible.y1 - bed.y1).abs() < 1e-9);
    }

    #[test]
    fn set_bounds_recenters_and_keeps_scale() {
        let mut view = square_bed_800();
        view.zoom_at(400.0, 400.0, 1.0);
        view.set_bounds(WorkspaceBounds::from_extents(600.0, 200.0).unwrap());
        assert_eq!(view.center(), Point::new(300.0, 100.0));
        assert_eq!(view.scale(), 2.0);
    }

    #[test]
    fn rejected_bounds_leave_state_untouched() {
        let mut view = square_bed_800();
        view.pan(5.0, 5.0);
        let center = view.center();
        let err = view.try_set_bounds(Point::new(0.0, 0.0), Point::new(0.0, 100.0));
        assert!(err.is_err());
        assert_eq!(view.bounds(), WorkspaceBounds::default());
        assert_eq!(view.center(), center);
    }

    #[test]
    fn set_config_clamps_current_scale() {
        let mut view = square_bed_800();
        view.set_scale(10.0);
        view.set_config(ViewConfig::default().with_max_scale(Some(3.0)))
            .unwrap();
        assert_eq!(view.scale(), 3.0);

        let rejected = view.set_config(ViewConfig::default().with_min_scale(-1.0));
        assert!(rejected.is_err());
        assert_eq!(view.config().max_scale, Some(3.0));
    }

    #[test]
    fn rect_conversions_normalize_after_flip() {
        let view = square_bed_800();
        let px = view.logical_rect_to_pixel(Rect::new(0.0, 0.0, 100.0, 50.0));
        assert!((px.x0 - 0.0).abs() < 1e-9);
        assert!((px.x1 - 200.0).abs() < 1e-9);
        assert!((px.y0 - 700.0).abs() < 1e-9);
        assert!((px.y1 - 800.0).abs() < 1e-9);

        let back = view.pixel_rect_to_logical(px);
        assert!((back.width() - 100.0).abs() < 1e-9);
        assert!((back.height() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn debug_info_reflects_state() {
        let mut view = square_bed_800();
        view.zoom_at(400.0, 400.0, 1.0);
        let info = view.debug_info();
        assert_eq!(info.scale, 2.0);
        assert_eq!(info.base_scale, 2.0);
        assert_eq!(info.combined_scale, 4.0);
        assert_eq!(info.viewport_size, Size::new(800.0, 800.0));
        assert!((info.visible_logical_rect.width() - 200.0).abs() < 1e-9);
        assert_eq!(view.logical_units_per_pixel(), 0.25);
    }
}
