// Copyright 2025 the Bedview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bedview_transform::{ViewTransform, ZoomOutcome};
use kurbo::Point;

use crate::config::{FloorPolicy, NavInputConfig};
use crate::drag::DragTracker;
use crate::input::{NavInput, NavModifiers};

/// Request for the host that a pointer gesture produced.
///
/// The controller never talks to the machine itself; the host decides how
/// (and on which thread) to carry these out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavCommand {
    /// Move the head camera so it looks at `target`, in workspace units.
    Jog {
        /// Logical point that was under the pointer.
        target: Point,
    },
    /// Camera images should switch between dimmed and full opacity.
    ToggleCameraDim {
        /// Dim state after the toggle.
        dimmed: bool,
    },
}

/// Result of feeding one [`NavInput`] to a [`NavController`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavResponse {
    /// The view transform changed and the host should repaint.
    pub view_changed: bool,
    /// A command for the host, if the input completed one.
    pub command: Option<NavCommand>,
}

impl NavResponse {
    fn changed(view_changed: bool) -> Self {
        Self {
            view_changed,
            command: None,
        }
    }

    fn command(command: NavCommand) -> Self {
        Self {
            view_changed: false,
            command: Some(command),
        }
    }
}

/// Interprets navigation input against a [`ViewTransform`].
///
/// - Wheel: zoom anchored at the pointer, with floor recovery per
///   [`FloorPolicy`].
/// - Drag: pan, once the pointer leaves the click threshold.
/// - Click: with Ctrl, jog to the clicked machine point; otherwise toggle
///   camera dimming.
///
/// The controller does not own the view; it is passed in on each call so the
/// host keeps a single owner for all view state.
#[derive(Clone, Debug, Default)]
pub struct NavController {
    config: NavInputConfig,
    drag: DragTracker,
    cameras_dimmed: bool,
}

impl NavController {
    /// Creates a controller with the given tuning.
    #[must_use]
    pub fn new(config: NavInputConfig) -> Self {
        Self {
            config,
            drag: DragTracker::default(),
            cameras_dimmed: false,
        }
    }

    /// Returns the tuning in use.
    #[must_use]
    pub fn config(&self) -> NavInputConfig {
        self.config
    }

    /// Replaces the tuning. An in-progress gesture continues under the new values.
    pub fn set_config(&mut self, config: NavInputConfig) {
        self.config = config;
    }

    /// Whether camera images are currently dimmed.
    #[must_use]
    pub fn cameras_dimmed(&self) -> bool {
        self.cameras_dimmed
    }

    /// Returns `true` while a drag is panning the view.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.drag.is_panning()
    }

    /// Applies one input to `view`, returning what changed and any host command.
    pub fn process(&mut self, input: NavInput, view: &mut ViewTransform) -> NavResponse {
        match input {
            NavInput::Resize { width, height } => {
                let before = view.viewport_size();
                view.set_viewport_size(width, height);
                NavResponse::changed(view.viewport_size() != before)
            }
            NavInput::Wheel { position, rotation } => {
                NavResponse::changed(self.wheel(position, rotation, view))
            }
            NavInput::Press { position, .. } => {
                self.drag.press(position);
                NavResponse::default()
            }
            NavInput::Move { position, .. } => {
                match self.drag.update(position, self.config.drag_threshold) {
                    Some(delta) => {
                        view.pan(delta.x, delta.y);
                        NavResponse::changed(true)
                    }
                    None => NavResponse::default(),
                }
            }
            NavInput::Release {
                position,
                modifiers,
            } => {
                if self.drag.release() {
                    NavResponse::command(self.click(position, modifiers, view))
                } else {
                    NavResponse::default()
                }
            }
            NavInput::Cancel => {
                self.drag.cancel();
                NavResponse::default()
            }
            NavInput::FitToWindow => {
                view.fit_to_window();
                NavResponse::changed(true)
            }
        }
    }

    fn wheel(&mut self, position: Point, rotation: f64, view: &mut ViewTransform) -> bool {
        let delta = self.config.wheel_delta(rotation, view.scale());
        match view.zoom_at(position.x, position.y, delta) {
            ZoomOutcome::Unchanged => false,
            ZoomOutcome::AtFloor => {
                if self.config.floor_policy == FloorPolicy::Recenter {
                    #[cfg(feature = "tracing")]
                    tracing::debug!("minimum scale reached, recentering on workspace");
                    view.recenter();
                }
                true
            }
            ZoomOutcome::Zoomed | ZoomOutcome::AtCeiling => true,
        }
    }

    fn click(&mut self, position: Point, modifiers: NavModifiers, view: &ViewTransform) -> NavCommand {
        if modifiers.contains(NavModifiers::CTRL) {
            let target = view.pixel_to_logical(position.x, position.y);
            #[cfg(feature = "tracing")]
            tracing::debug!(x = target.x, y = target.y, "jog requested");
            NavCommand::Jog { target }
        } else {
            self.cameras_dimmed = !self.cameras_dimmed;
            NavCommand::ToggleCameraDim {
                dimmed: self.cameras_dimmed,
            }
        }
    }
}
