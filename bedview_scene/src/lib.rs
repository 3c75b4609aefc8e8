// Copyright 2025 the Bedview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bedview_scene --heading-base-level=0

//! Bedview Scene: what the navigation view draws.
//!
//! The host fills a [`MachineSnapshot`] from its machine and job model, then
//! asks [`NavScene::build`] for a [`DisplayList`] of pixel-space
//! [`DisplayOp`]s using the current [`bedview_transform::ViewTransform`].
//! Any 2D renderer can replay the list: a background clear, the bed, board
//! and placement markers, feeders, fixed cameras and the live head camera
//! images.
//!
//! Camera images arrive on capture threads. Each camera publishes into its
//! own [`LatestFrame`] slot, registered in [`CameraFrames`]; the UI thread
//! reads whatever is newest while building the list.
//!
//! All machine geometry is converted to millimeters before it reaches the
//! transform. [`Location`] carries its own [`LengthUnit`].
//!
//! ## Example
//!
//! ```rust
//! use bedview_scene::{
//!     BoardLocation, CameraFrames, DisplayOp, Location, MachineSnapshot, NavScene, hit_test,
//!     HitTarget,
//! };
//! use bedview_transform::{ViewTransform, WorkspaceBounds};
//! use kurbo::Point;
//!
//! let bed = WorkspaceBounds::from_extents(400.0, 400.0).unwrap();
//! let mut view = ViewTransform::new(bed);
//! view.set_viewport_size(800.0, 800.0);
//!
//! let machine = MachineSnapshot {
//!     bed,
//!     boards: vec![BoardLocation { location: Location::mm(100.0, 100.0), ..Default::default() }],
//!     ..Default::default()
//! };
//!
//! let list = NavScene::default().build(&machine, &view, &CameraFrames::new(), false);
//! assert!(matches!(list.ops()[2], DisplayOp::Crosshair { center, .. } if center == Point::new(200.0, 600.0)));
//!
//! let hit = hit_test(&machine, &view, Point::new(201.0, 599.0), 4.0);
//! assert_eq!(hit, Some(HitTarget::Board { board: 0 }));
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit a trace-level event for each published frame.

mod board;
mod display;
mod frame;
mod machine;
mod scene;
mod units;

pub use board::{BoardLocation, BoardSide, Placement, board_placement_location};
pub use display::{DisplayList, DisplayOp};
pub use frame::{CameraFrames, Frame, FrameError, LatestFrame};
pub use machine::{
    CameraId, CameraSnapshot, FeederSnapshot, HeadSnapshot, MachineSnapshot, camera_footprint,
    jog_location,
};
pub use scene::{HitTarget, NavScene, SceneStyle, hit_test};
pub use units::{LengthUnit, Location};
