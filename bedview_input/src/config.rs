// Copyright 2025 the Bedview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Default fraction of the current scale applied per wheel notch.
pub const DEFAULT_SCROLL_INCREMENT: f64 = 0.01;

/// Default pointer travel, in pixels, before a press turns into a drag.
pub const DEFAULT_DRAG_THRESHOLD: f64 = 3.0;

/// Which wheel direction zooms in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ZoomDirection {
    /// Rotating the wheel away from the user zooms in.
    #[default]
    Natural,
    /// Rotating the wheel toward the user zooms in.
    Inverted,
}

impl ZoomDirection {
    pub(crate) fn sign(self) -> f64 {
        match self {
            Self::Natural => 1.0,
            Self::Inverted => -1.0,
        }
    }
}

/// How one wheel notch turns into a scale delta.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ZoomStep {
    /// Each notch changes the scale by `scroll_increment` times the current
    /// scale, so zooming feels uniform at every level.
    #[default]
    Proportional,
    /// Each notch changes the scale by exactly `scroll_increment`.
    Linear,
}

/// What to do when a wheel zoom runs into the minimum scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FloorPolicy {
    /// Recenter on the workspace so a user who zoomed all the way out can
    /// find the bed again.
    #[default]
    Recenter,
    /// Keep the cursor anchor; only the scale is clamped.
    Hold,
}

/// Tuning for [`crate::NavController`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavInputConfig {
    /// Scale change per wheel notch; see [`ZoomStep`].
    pub scroll_increment: f64,
    /// How notches turn into scale deltas.
    pub zoom_step: ZoomStep,
    /// Which wheel direction zooms in.
    pub zoom_direction: ZoomDirection,
    /// Recovery when zooming out hits the scale floor.
    pub floor_policy: FloorPolicy,
    /// Pointer travel in pixels before a press becomes a pan instead of a click.
    pub drag_threshold: f64,
}

impl Default for NavInputConfig {
    fn default() -> Self {
        Self {
            scroll_increment: DEFAULT_SCROLL_INCREMENT,
            zoom_step: ZoomStep::default(),
            zoom_direction: ZoomDirection::default(),
            floor_policy: FloorPolicy::default(),
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
        }
    }
}

impl NavInputConfig {
    /// Sets the per-notch increment.
    #[must_use]
    pub fn with_scroll_increment(mut self, increment: f64) -> Self {
        self.scroll_increment = increment;
        self
    }

    /// Sets the notch-to-delta mapping.
    #[must_use]
    pub fn with_zoom_step(mut self, step: ZoomStep) -> Self {
        self.zoom_step = step;
        self
    }

    /// Sets which wheel direction zooms in.
    #[must_use]
    pub fn with_zoom_direction(mut self, direction: ZoomDirection) -> Self {
        self.zoom_direction = direction;
        self
    }

    /// Sets the floor recovery policy.
    #[must_use]
    pub fn with_floor_policy(mut self, policy: FloorPolicy) -> Self {
        self.floor_policy = policy;
        self
    }

    /// Sets the click/drag threshold in pixels.
    #[must_use]
    pub fn with_drag_threshold(mut self, threshold: f64) -> Self {
        self.drag_threshold = threshold;
        self
    }

    /// Scale delta for `rotation` wheel notches at the current `scale`.
    ///
    /// Non-finite results collapse to zero so a bad event never reaches the view.
    pub(crate) fn wheel_delta(&self, rotation: f64, scale: f64) -> f64 {
        let per_notch = match self.zoom_step {
            ZoomStep::Proportional => scale * self.scroll_increment,
            ZoomStep::Linear => self.scroll_increment,
        };
        let delta = -rotation * per_notch * self.zoom_direction.sign();
        if delta.is_finite() { delta } else { 0.0 }
    }
}
