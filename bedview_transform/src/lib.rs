// Copyright 2025 the Bedview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bedview_transform --heading-base-level=0

//! Bedview Transform: pixel/machine coordinate mapping for navigation views.
//!
//! This crate provides a small, headless model of a 2D view onto a machine
//! bed. A [`ViewTransform`] maps between:
//! - **pixel space**: the display surface, origin top-left, Y down;
//! - **logical space**: machine coordinates, Y up, bounded by a
//!   [`WorkspaceBounds`] rectangle.
//!
//! It supports pan, zoom anchored at the cursor, fit-to-window, and point and
//! rectangle conversion in both directions.
//!
//! It does **not** render anything or listen to input. Callers are expected
//! to:
//! - Report the display surface size with [`ViewTransform::set_viewport_size`].
//! - Forward pointer input as pan/zoom calls (or use `bedview_input`).
//! - Use [`ViewTransform::logical_to_pixel`] to place drawn elements and
//!   [`ViewTransform::pixel_to_logical`] to interpret clicks.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use bedview_transform::{ViewTransform, WorkspaceBounds};
//!
//! // A 400 x 400 mm bed shown in an 800 x 800 pixel window.
//! let bed = WorkspaceBounds::from_extents(400.0, 400.0).unwrap();
//! let mut view = ViewTransform::new(bed);
//! view.set_viewport_size(800.0, 800.0);
//!
//! // The machine origin is the bottom-left pixel corner.
//! assert_eq!(view.logical_to_pixel(0.0, 0.0), Point::new(0.0, 800.0));
//!
//! // Zoom in by one step around a cursor position; the machine point
//! // under the cursor stays put.
//! let before = view.pixel_to_logical(120.0, 300.0);
//! view.zoom_at(120.0, 300.0, 0.5);
//! let after = view.pixel_to_logical(120.0, 300.0);
//! assert!((before - after).hypot() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - The transform is a pure function of bounds, center, scale and viewport
//!   size. Nothing derived is cached between calls.
//! - Scale is a multiplier on the fit-to-window factor, so `1.0` always means
//!   "the whole workspace fits" regardless of window size.
//! - Query and mutation methods sanitize non-finite input rather than
//!   failing; only configuration ([`WorkspaceBounds::new`],
//!   [`ViewConfig::validated`]) returns [`ViewError`].
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events for reconfiguration and zoom clamping.
//! - `serde`: derive `Serialize`/`Deserialize` for [`ViewConfig`].
//!
//! This crate is `no_std`.

#![no_std]

mod bounds;
mod config;
mod error;
mod view;

pub use bounds::WorkspaceBounds;
pub use config::{DEFAULT_MIN_SCALE, SCALE_LIMIT, ViewConfig, ZoomOutcome};
pub use error::ViewError;
pub use view::{ViewTransform, ViewTransformDebugInfo};
