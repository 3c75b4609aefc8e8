// Copyright 2025 the Bedview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Configuration errors for [`crate::ViewTransform`] and its inputs.
///
/// These are only produced when configuring a view (bounds, scale limits).
/// Pan, zoom and coordinate conversion sanitize their inputs instead of
/// failing, so a configured view always stays paintable.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ViewError {
    /// A coordinate or dimension was non-finite or out of range.
    #[error("invalid input: {what}")]
    InvalidInput {
        /// Which value was rejected.
        what: &'static str,
    },
    /// Workspace bounds with zero or negative width or height.
    #[error("degenerate workspace bounds: {width} x {height}")]
    DegenerateBounds {
        /// Width of the rejected bounds (`top_right.x - bottom_left.x`).
        width: f64,
        /// Height of the rejected bounds (`top_right.y - bottom_left.y`).
        height: f64,
    },
}
