// Copyright 2025 the Bedview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::error::ViewError;

/// Default floor for the user zoom multiplier.
///
/// At `0.1` the whole workspace shrinks to a tenth of its fitted size, which
/// is still large enough to find again.
pub const DEFAULT_MIN_SCALE: f64 = 0.1;

/// Absolute ceiling for the user zoom multiplier.
///
/// Applies even when [`ViewConfig::max_scale`] is `None` or larger, keeping the
/// combined scale and its reciprocal finite.
pub const SCALE_LIMIT: f64 = 1.0e9;

/// Scale limits for a [`crate::ViewTransform`].
///
/// The user scale is a multiplier on top of the base fit factor, so `1.0`
/// always means "exactly fitted". Limits must bracket `1.0` so that
/// [`crate::ViewTransform::fit_to_window`] is always reachable.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewConfig {
    /// Smallest allowed user scale. Must be positive and at most `1.0`.
    pub min_scale: f64,
    /// Largest allowed user scale, or `None` to zoom in up to [`SCALE_LIMIT`].
    pub max_scale: Option<f64>,
}

impl ViewConfig {
    /// Checks the limits, returning the config unchanged if they are usable.
    pub fn validated(self) -> Result<Self, ViewError> {
        if !(self.min_scale.is_finite() && self.min_scale > 0.0 && self.min_scale <= 1.0) {
            return Err(ViewError::InvalidInput { what: "min_scale" });
        }
        if let Some(max) = self.max_scale {
            if !(max.is_finite() && max >= 1.0) {
                return Err(ViewError::InvalidInput { what: "max_scale" });
            }
        }
        Ok(self)
    }

    /// Sets the scale floor.
    #[must_use]
    pub fn with_min_scale(mut self, min_scale: f64) -> Self {
        self.min_scale = min_scale;
        self
    }

    /// Sets the scale ceiling.
    #[must_use]
    pub fn with_max_scale(mut self, max_scale: Option<f64>) -> Self {
        self.max_scale = max_scale;
        self
    }

    /// The ceiling actually enforced: `max_scale`, capped at [`SCALE_LIMIT`].
    #[must_use]
    pub fn effective_max_scale(&self) -> f64 {
        self.max_scale.map_or(SCALE_LIMIT, |max| max.min(SCALE_LIMIT))
    }

    pub(crate) fn clamp(&self, scale: f64) -> f64 {
        scale.max(self.min_scale).min(self.effective_max_scale())
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: None,
        }
    }
}

/// What a [`crate::ViewTransform::zoom_at`] call did to the scale.
///
/// Hosts use this to apply their own recovery policy, for example
/// recentering the workspace when the user zooms all the way out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomOutcome {
    /// The scale changed by the requested amount.
    Zoomed,
    /// The scale ended on the floor, either clamped there or landing on it exactly.
    AtFloor,
    /// The requested scale exceeded the ceiling and was clamped to it.
    AtCeiling,
    /// The delta was zero or not finite; nothing changed.
    Unchanged,
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_MIN_SCALE, SCALE_LIMIT, ViewConfig};

    #[test]
    fn default_is_valid() {
        let config = ViewConfig::default();
        assert_eq!(config.min_scale, DEFAULT_MIN_SCALE);
        assert!(config.validated().is_ok());
    }

    #[test]
    fn limits_must_bracket_fit_scale() {
        assert!(ViewConfig::default().with_min_scale(0.0).validated().is_err());
        assert!(ViewConfig::default().with_min_scale(1.5).validated().is_err());
        assert!(
            ViewConfig::default()
                .with_min_scale(f64::NAN)
                .validated()
                .is_err()
        );
        assert!(
            ViewConfig::default()
                .with_max_scale(Some(0.5))
                .validated()
                .is_err()
        );
        assert!(
            ViewConfig::default()
                .with_max_scale(Some(40.0))
                .validated()
                .is_ok()
        );
    }

    #[test]
    fn clamp_respects_both_limits() {
        let config = ViewConfig::default().with_max_scale(Some(8.0));
        assert_eq!(config.clamp(0.01), DEFAULT_MIN_SCALE);
        assert_eq!(config.clamp(2.0), 2.0);
        assert_eq!(config.clamp(100.0), 8.0);
    }

    #[test]
    fn unbounded_config_still_has_a_finite_ceiling() {
        let config = ViewConfig::default();
        assert_eq!(config.effective_max_scale(), SCALE_LIMIT);
        assert_eq!(config.clamp(f64::INFINITY), SCALE_LIMIT);
        assert_eq!(config.clamp(1.0e300), SCALE_LIMIT);

        let huge = ViewConfig::default().with_max_scale(Some(1.0e200));
        assert!(huge.validated().is_ok());
        assert_eq!(huge.clamp(1.0e250), SCALE_LIMIT);
    }
}
