// Copyright 2025 the Bedview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Builds the navigation view's display list and answers hit tests.

use bedview_transform::ViewTransform;
use kurbo::Point;
use peniko::Color;

use crate::board::board_placement_location;
use crate::display::{DisplayList, DisplayOp};
use crate::frame::CameraFrames;
use crate::machine::{MachineSnapshot, camera_footprint};

/// Colors and sizes used by [`NavScene`].
#[derive(Clone, Debug, PartialEq)]
pub struct SceneStyle {
    /// Viewport background.
    pub background: Color,
    /// Machine bed fill.
    pub bed: Color,
    /// Board origins.
    pub board: Color,
    /// Placements on the up side of a board.
    pub placement: Color,
    /// Feeder pick points.
    pub feeder: Color,
    /// Fixed cameras.
    pub fixed_camera: Color,
    /// Nozzles, when `show_nozzles` is set.
    pub nozzle: Color,
    /// Actuators, when `show_actuators` is set.
    pub actuator: Color,
    /// Crosshair half length in logical units; scales with zoom.
    pub crosshair_arm: f64,
    /// Opacity of head camera images while dimmed.
    pub dimmed_opacity: f32,
    /// Draw nozzle crosshairs.
    pub show_nozzles: bool,
    /// Draw actuator crosshairs.
    pub show_actuators: bool,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            background: Color::BLACK,
            bed: Color::from_rgba8(192, 192, 192, 255),
            board: Color::from_rgba8(0, 255, 0, 255),
            placement: Color::from_rgba8(255, 0, 255, 255),
            feeder: Color::WHITE,
            fixed_camera: Color::from_rgba8(0, 255, 255, 255),
            nozzle: Color::from_rgba8(255, 0, 0, 255),
            actuator: Color::from_rgba8(255, 255, 0, 255),
            crosshair_arm: 3.0,
            dimmed_opacity: 0.1,
            show_nozzles: false,
            show_actuators: false,
        }
    }
}

/// Something on the machine the pointer can land on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HitTarget {
    /// Origin of `boards[board]`.
    Board {
        /// Board index.
        board: usize,
    },
    /// `boards[board].placements[placement]`.
    Placement {
        /// Board index.
        board: usize,
        /// Placement index within the board.
        placement: usize,
    },
    /// Pick point of `feeders[feeder]`.
    Feeder {
        /// Feeder index.
        feeder: usize,
    },
    /// `fixed_cameras[camera]`.
    FixedCamera {
        /// Camera index.
        camera: usize,
    },
    /// `heads[head].cameras[camera]`.
    HeadCamera {
        /// Head index.
        head: usize,
        /// Camera index within the head.
        camera: usize,
    },
}

/// Display-list builder for the navigation view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavScene {
    style: SceneStyle,
}

impl NavScene {
    /// A scene drawn with `style`.
    pub fn new(style: SceneStyle) -> Self {
        Self { style }
    }

    /// Current style.
    pub fn style(&self) -> &SceneStyle {
        &self.style
    }

    /// Mutable access to the style.
    pub fn style_mut(&mut self) -> &mut SceneStyle {
        &mut self.style
    }

    /// Builds the display list for one repaint.
    ///
    /// Back to front: background, bed, each board followed by its up-side
    /// placements, feeders, fixed cameras, then per head the optional nozzle
    /// and actuator markers and the head camera images. Camera images without
    /// a published frame are skipped. Ops entirely outside the viewport are
    /// dropped.
    pub fn build(
        &self,
        machine: &MachineSnapshot,
        view: &ViewTransform,
        frames: &CameraFrames,
        dim_cameras: bool,
    ) -> DisplayList {
        let style = &self.style;
        let mut list = DisplayList::new(view.viewport_size());
        let arm = style.crosshair_arm * view.combined_scale();
        let crosshair = |list: &mut DisplayList, at: Point, color: Color| {
            list.push(DisplayOp::Crosshair {
                center: view.logical_to_pixel(at.x, at.y),
                arm,
                color,
            });
        };

        list.push(DisplayOp::Clear {
            color: style.background,
        });
        list.push(DisplayOp::FillRect {
            rect: view.logical_rect_to_pixel(machine.bed.to_rect()),
            color: style.bed,
        });

        for board in &machine.boards {
            crosshair(&mut list, board.location.xy_mm(), style.board);
            for (_, _, loc) in board.visible_placements() {
                crosshair(&mut list, loc.xy_mm(), style.placement);
            }
        }

        for (_, at) in machine.feeder_points() {
            crosshair(&mut list, at, style.feeder);
        }

        for camera in &machine.fixed_cameras {
            crosshair(&mut list, camera.location.xy_mm(), style.fixed_camera);
        }

        let opacity = if dim_cameras { style.dimmed_opacity } else { 1.0 };
        for head in &machine.heads {
            if style.show_nozzles {
                for nozzle in &head.nozzles {
                    crosshair(&mut list, nozzle.xy_mm(), style.nozzle);
                }
            }
            if style.show_actuators {
                for actuator in &head.actuators {
                    crosshair(&mut list, actuator.xy_mm(), style.actuator);
                }
            }
            for camera in &head.cameras {
                let Some(frame) = frames.latest(camera.id) else {
                    continue;
                };
                list.push(DisplayOp::Image {
                    camera: camera.id,
                    frame,
                    rect: view.logical_rect_to_pixel(camera_footprint(camera)),
                    opacity,
                });
            }
        }

        list
    }
}

/// Finds the marker nearest to `pixel` within `tolerance_px` pixels.
///
/// Boards, placements on the up side, feeders, fixed cameras and head
/// cameras are considered. On equal distance the marker drawn later wins.
pub fn hit_test(
    machine: &MachineSnapshot,
    view: &ViewTransform,
    pixel: Point,
    tolerance_px: f64,
) -> Option<HitTarget> {
    if !tolerance_px.is_finite() || tolerance_px < 0.0 || !pixel.is_finite() {
        return None;
    }
    let limit = tolerance_px * tolerance_px;
    let mut best: Option<(f64, HitTarget)> = None;
    let mut consider = |at: Point, target: HitTarget| {
        let d2 = (view.logical_to_pixel(at.x, at.y) - pixel).hypot2();
        if d2 <= limit && best.is_none_or(|(b, _)| d2 <= b) {
            best = Some((d2, target));
        }
    };

    for (b, board) in machine.boards.iter().enumerate() {
        consider(board.location.xy_mm(), HitTarget::Board { board: b });
        for (p, placement) in board.placements.iter().enumerate() {
            if placement.side != board.side {
                continue;
            }
            let at = board_placement_location(board, placement).xy_mm();
            consider(at, HitTarget::Placement {
                board: b,
                placement: p,
            });
        }
    }
    for (feeder, at) in machine.feeder_points() {
        consider(at, HitTarget::Feeder { feeder });
    }
    for (camera, snapshot) in machine.fixed_cameras.iter().enumerate() {
        consider(snapshot.location.xy_mm(), HitTarget::FixedCamera { camera });
    }
    for (head, h) in machine.heads.iter().enumerate() {
        for (camera, snapshot) in h.cameras.iter().enumerate() {
            consider(snapshot.location.xy_mm(), HitTarget::HeadCamera { head, camera });
        }
    }

    best.map(|(_, target)| target)
}
