// Copyright 2025 the Bedview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bedview_input --heading-base-level=0

//! Bedview Input: pointer input for a machine navigation view.
//!
//! [`NavController`] turns toolkit-neutral [`NavInput`] values into changes on
//! a [`bedview_transform::ViewTransform`] and into [`NavCommand`]s for the
//! host:
//!
//! | Input | Effect |
//! |-------|--------|
//! | Wheel | Zoom anchored at the pointer, proportional to the current scale |
//! | Drag | Pan; content follows the pointer |
//! | Ctrl + click | [`NavCommand::Jog`] to the machine point under the pointer |
//! | Click | [`NavCommand::ToggleCameraDim`] |
//! | Resize / fit | Forwarded to the view |
//!
//! ## Example
//!
//! ```rust
//! use bedview_input::{NavCommand, NavController, NavInput, NavModifiers};
//! use bedview_transform::{ViewTransform, WorkspaceBounds};
//! use kurbo::Point;
//!
//! let mut view = ViewTransform::new(WorkspaceBounds::from_extents(400.0, 400.0).unwrap());
//! let mut nav = NavController::default();
//! nav.process(NavInput::Resize { width: 800.0, height: 800.0 }, &mut view);
//!
//! // Ctrl-click in the middle of the window asks the host to jog there.
//! let at = Point::new(400.0, 400.0);
//! nav.process(NavInput::Press { position: at, modifiers: NavModifiers::CTRL }, &mut view);
//! let response = nav.process(
//!     NavInput::Release { position: at, modifiers: NavModifiers::CTRL },
//!     &mut view,
//! );
//! assert_eq!(response.command, Some(NavCommand::Jog { target: Point::new(200.0, 200.0) }));
//! ```
//!
//! ## Features
//!
//! - `ui_events_adapter` (default): [`nav_input_from_pointer_event`] converts
//!   `ui-events` pointer events into [`NavInput`].
//! - `tracing`: emit `tracing` events for jogs and floor recovery.
//! - `serde`: derive `Serialize`/`Deserialize` for [`NavInputConfig`].
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(feature = "ui_events_adapter")]
mod adapter;
mod config;
mod controller;
pub mod drag;
mod input;

#[cfg(feature = "ui_events_adapter")]
pub use adapter::{NOTCHES_PER_PAGE, PIXELS_PER_NOTCH, nav_input_from_pointer_event, nav_modifiers};
pub use config::{
    DEFAULT_DRAG_THRESHOLD, DEFAULT_SCROLL_INCREMENT, FloorPolicy, NavInputConfig, ZoomDirection,
    ZoomStep,
};
pub use controller::{NavCommand, NavController, NavResponse};
pub use input::{NavInput, NavModifiers};
