// Copyright 2025 the Bedview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Press/drag tracking that tells clicks apart from pans.
//!
//! A press starts tracking. Until the pointer has travelled more than the
//! threshold from the press position, the gesture is still a potential click.
//! Once past the threshold it becomes a pan and every later move reports its
//! delta.

use kurbo::{Point, Vec2};

/// Phase of the current pointer gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum GesturePhase {
    /// No button is down.
    #[default]
    Idle,
    /// A button is down but the pointer has not left the click slop.
    Pressed {
        /// Where the button went down.
        start: Point,
    },
    /// The pointer left the click slop; moves pan the view.
    Panning {
        /// Where the button went down.
        start: Point,
        /// Last reported pointer position.
        last: Point,
    },
}

/// Tracks one pointer gesture for [`crate::NavController`].
#[derive(Clone, Copy, Debug, Default)]
pub struct DragTracker {
    phase: GesturePhase,
}

impl DragTracker {
    /// Start tracking a gesture at `pos`. Any earlier gesture is dropped.
    pub fn press(&mut self, pos: Point) {
        self.phase = GesturePhase::Pressed { start: pos };
    }

    /// Feed a pointer move, returning the pan delta to apply, if any.
    ///
    /// The move that crosses the threshold reports the whole offset from the
    /// press position so no travel is lost.
    pub fn update(&mut self, pos: Point, threshold: f64) -> Option<Vec2> {
        match self.phase {
            GesturePhase::Idle => None,
            GesturePhase::Pressed { start } => {
                let offset = pos - start;
                if offset.hypot2() > threshold * threshold {
                    self.phase = GesturePhase::Panning { start, last: pos };
                    Some(offset)
                } else {
                    None
                }
            }
            GesturePhase::Panning { start, last } => {
                self.phase = GesturePhase::Panning { start, last: pos };
                Some(pos - last)
            }
        }
    }

    /// End the gesture. Returns `true` if it was a click (pressed, never panned).
    pub fn release(&mut self) -> bool {
        let was_click = matches!(self.phase, GesturePhase::Pressed { .. });
        self.phase = GesturePhase::Idle;
        was_click
    }

    /// Drop the gesture without reporting a click.
    pub fn cancel(&mut self) {
        self.phase = GesturePhase::Idle;
    }

    /// Current gesture phase.
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Returns `true` while a drag is panning the view.
    pub fn is_panning(&self) -> bool {
        matches!(self.phase, GesturePhase::Panning { .. })
    }
}
