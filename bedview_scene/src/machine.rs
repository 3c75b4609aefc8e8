// Copyright 2025 the Bedview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A read-only snapshot of the machine for one repaint.

use bedview_transform::WorkspaceBounds;
use kurbo::{Point, Rect, Size};

use crate::board::BoardLocation;
use crate::units::{LengthUnit, Location};

/// Identifier for a camera.
///
/// Keys the camera's [`LatestFrame`](crate::LatestFrame) slot in
/// [`CameraFrames`](crate::CameraFrames).
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CameraId(pub u32);

/// A camera and the geometry of its image.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraSnapshot {
    /// Frame slot key.
    pub id: CameraId,
    /// Display name.
    pub name: String,
    /// Where the camera is looking.
    pub location: Location,
    /// Size of one image pixel; only `x` and `y` are used.
    pub units_per_pixel: Location,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
}

impl CameraSnapshot {
    /// Machine size of the camera image, in millimeters.
    pub fn footprint_size(&self) -> Size {
        let upp = self.units_per_pixel.to_millimeters();
        Size::new(
            f64::from(self.width) * upp.x.abs(),
            f64::from(self.height) * upp.y.abs(),
        )
    }
}

/// Logical rectangle, in millimeters, covered by `camera`'s image.
///
/// Centered on the camera location.
pub fn camera_footprint(camera: &CameraSnapshot) -> Rect {
    Rect::from_center_size(camera.location.xy_mm(), camera.footprint_size())
}

/// Location to move `camera` to so it looks at `target_mm`.
///
/// The result is in the camera's units; Z and rotation are kept from the
/// camera's current location.
pub fn jog_location(camera: &CameraSnapshot, target_mm: Point) -> Location {
    let units = camera.location.units;
    camera.location.with_xy(
        LengthUnit::Millimeters.convert(target_mm.x, units),
        LengthUnit::Millimeters.convert(target_mm.y, units),
    )
}

/// A feeder. `pick_location` is `None` when the feeder cannot report one.
#[derive(Clone, Debug, PartialEq)]
pub struct FeederSnapshot {
    /// Display name.
    pub name: String,
    /// Where parts are picked from.
    pub pick_location: Option<Location>,
}

/// A head and the tools mounted on it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HeadSnapshot {
    /// Nozzle locations.
    pub nozzles: Vec<Location>,
    /// Cameras that move with the head.
    pub cameras: Vec<CameraSnapshot>,
    /// Actuator locations.
    pub actuators: Vec<Location>,
}

/// Everything the navigation view draws.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MachineSnapshot {
    /// Bed extent, in millimeters.
    pub bed: WorkspaceBounds,
    /// Boards in the current job.
    pub boards: Vec<BoardLocation>,
    /// Configured feeders.
    pub feeders: Vec<FeederSnapshot>,
    /// Cameras fixed to the machine frame.
    pub fixed_cameras: Vec<CameraSnapshot>,
    /// Heads.
    pub heads: Vec<HeadSnapshot>,
}

impl MachineSnapshot {
    /// The camera a jog moves: the first camera on the first head.
    pub fn jog_camera(&self) -> Option<&CameraSnapshot> {
        self.heads.first()?.cameras.first()
    }

    /// Feeder pick points, in millimeters, with their indices.
    ///
    /// Feeders without a pick location are skipped.
    pub fn feeder_points(&self) -> impl Iterator<Item = (usize, Point)> + '_ {
        self.feeders
            .iter()
            .enumerate()
            .filter_map(|(i, f)| Some((i, f.pick_location?.xy_mm())))
    }

    /// All head cameras as `(head index, camera)`.
    pub fn head_cameras(&self) -> impl Iterator<Item = (usize, &CameraSnapshot)> + '_ {
        self.heads
            .iter()
            .enumerate()
            .flat_map(|(h, head)| head.cameras.iter().map(move |c| (h, c)))
    }
}
