// Copyright 2025 the Bedview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversion from `ui-events` pointer events to [`NavInput`].

use ui_events::ScrollDelta;
use ui_events::keyboard::Modifiers;
use ui_events::pointer::{PointerEvent, PointerScrollEvent};

use crate::input::{NavInput, NavModifiers};

/// Logical pixels of scroll treated as one wheel notch.
pub const PIXELS_PER_NOTCH: f64 = 20.0;

/// Wheel notches treated as one page of scroll.
pub const NOTCHES_PER_PAGE: f64 = 10.0;

/// Converts a `ui-events` pointer event into navigation input.
///
/// Gesture, enter and leave events have no navigation meaning and map to
/// `None`. Scroll deltas are normalized to wheel notches with positive values
/// toward the user; `ui-events` reports positive Y for scrolling away, so the
/// sign is flipped.
pub fn nav_input_from_pointer_event(event: &PointerEvent) -> Option<NavInput> {
    match event {
        PointerEvent::Down(e) => Some(NavInput::Press {
            position: e.state.logical_point(),
            modifiers: nav_modifiers(e.state.modifiers),
        }),
        PointerEvent::Move(e) => Some(NavInput::Move {
            position: e.current.logical_point(),
            modifiers: nav_modifiers(e.current.modifiers),
        }),
        PointerEvent::Up(e) => Some(NavInput::Release {
            position: e.state.logical_point(),
            modifiers: nav_modifiers(e.state.modifiers),
        }),
        PointerEvent::Scroll(e) => Some(NavInput::Wheel {
            position: e.state.logical_point(),
            rotation: -scroll_notches(e),
        }),
        PointerEvent::Cancel(_) => Some(NavInput::Cancel),
        PointerEvent::Gesture(_) | PointerEvent::Enter(_) | PointerEvent::Leave(_) => None,
    }
}

/// Maps `ui-events` modifier state onto [`NavModifiers`].
pub fn nav_modifiers(modifiers: Modifiers) -> NavModifiers {
    let mut out = NavModifiers::empty();
    out.set(NavModifiers::CTRL, modifiers.ctrl());
    out.set(NavModifiers::SHIFT, modifiers.shift());
    out.set(NavModifiers::ALT, modifiers.alt());
    out.set(NavModifiers::META, modifiers.meta());
    out
}

fn scroll_notches(event: &PointerScrollEvent) -> f64 {
    match &event.delta {
        ScrollDelta::PixelDelta(pos) => {
            let dy: f64 = pos.to_logical(event.state.scale_factor).y;
            dy / PIXELS_PER_NOTCH
        }
        ScrollDelta::LineDelta(_, y) => f64::from(*y),
        ScrollDelta::PageDelta(_, y) => f64::from(*y) * NOTCHES_PER_PAGE,
    }
}
