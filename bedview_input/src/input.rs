// Copyright 2025 the Bedview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

bitflags::bitflags! {
    /// Modifier keys held during a pointer event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct NavModifiers: u8 {
        /// Control key. Turns a click into a jog.
        const CTRL = 1 << 0;
        /// Shift key.
        const SHIFT = 1 << 1;
        /// Alt / Option key.
        const ALT = 1 << 2;
        /// Meta / Command / Super key.
        const META = 1 << 3;
    }
}

/// Toolkit-neutral pointer and window input for a navigation view.
///
/// Positions are in the viewport's pixel coordinates (origin top-left).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavInput {
    /// The display surface changed size.
    Resize {
        /// New width in pixels.
        width: f64,
        /// New height in pixels.
        height: f64,
    },
    /// Mouse wheel or trackpad scroll over the view.
    Wheel {
        /// Pointer position when the wheel moved.
        position: Point,
        /// Wheel rotation in notches. Positive values are rotation toward the
        /// user (scrolling down), negative values away from the user.
        rotation: f64,
    },
    /// A pointer button went down.
    Press {
        /// Pointer position.
        position: Point,
        /// Modifiers held at the time.
        modifiers: NavModifiers,
    },
    /// The pointer moved.
    Move {
        /// Pointer position.
        position: Point,
        /// Modifiers held at the time.
        modifiers: NavModifiers,
    },
    /// A pointer button went up.
    Release {
        /// Pointer position.
        position: Point,
        /// Modifiers held at the time.
        modifiers: NavModifiers,
    },
    /// The pointer interaction was cancelled by the platform.
    Cancel,
    /// Explicit request to show the whole workspace.
    FitToWindow,
}
