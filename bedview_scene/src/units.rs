// Copyright 2025 the Bedview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Length units and machine locations.

use kurbo::Point;

/// Unit of length a [`Location`] is expressed in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    /// Millimeters; the unit the navigation view renders in.
    #[default]
    Millimeters,
    /// Centimeters.
    Centimeters,
    /// Meters.
    Meters,
    /// Inches.
    Inches,
    /// Thousandths of an inch.
    Mils,
    /// Micrometers.
    Microns,
}

impl LengthUnit {
    /// Length of one unit in millimeters.
    pub const fn millimeters_per_unit(self) -> f64 {
        match self {
            Self::Millimeters => 1.0,
            Self::Centimeters => 10.0,
            Self::Meters => 1000.0,
            Self::Inches => 25.4,
            Self::Mils => 0.0254,
            Self::Microns => 0.001,
        }
    }

    /// Converts `value` from `self` into `to`.
    pub fn convert(self, value: f64, to: Self) -> f64 {
        if self == to {
            value
        } else {
            value * self.millimeters_per_unit() / to.millimeters_per_unit()
        }
    }
}

/// A machine position: X/Y/Z in `units`, plus a rotation in degrees.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Location {
    /// Unit of `x`, `y` and `z`.
    pub units: LengthUnit,
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
    /// Rotation in degrees, counter-clockwise.
    pub rotation: f64,
}

impl Location {
    /// Creates a location.
    pub const fn new(units: LengthUnit, x: f64, y: f64, z: f64, rotation: f64) -> Self {
        Self {
            units,
            x,
            y,
            z,
            rotation,
        }
    }

    /// Creates a millimeter location on the XY plane with no rotation.
    pub const fn mm(x: f64, y: f64) -> Self {
        Self::new(LengthUnit::Millimeters, x, y, 0.0, 0.0)
    }

    /// Returns this location expressed in `units`. Rotation is unchanged.
    pub fn convert_to_units(&self, units: LengthUnit) -> Self {
        let from = self.units;
        Self {
            units,
            x: from.convert(self.x, units),
            y: from.convert(self.y, units),
            z: from.convert(self.z, units),
            rotation: self.rotation,
        }
    }

    /// Shorthand for `convert_to_units(LengthUnit::Millimeters)`.
    pub fn to_millimeters(&self) -> Self {
        self.convert_to_units(LengthUnit::Millimeters)
    }

    /// The XY position in millimeters.
    pub fn xy_mm(&self) -> Point {
        let mm = self.to_millimeters();
        Point::new(mm.x, mm.y)
    }

    /// Copy with X and Y replaced, in this location's units.
    pub fn with_xy(&self, x: f64, y: f64) -> Self {
        Self { x, y, ..*self }
    }

    /// Rotates the XY position about the origin by `degrees`.
    pub fn rotate_xy(&self, degrees: f64) -> Self {
        if degrees == 0.0 {
            return *self;
        }
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
            ..*self
        }
    }

    /// Adds `other`'s coordinates and rotation, converting it to these units first.
    pub fn add_with_rotation(&self, other: &Self) -> Self {
        let other = other.convert_to_units(self.units);
        Self {
            units: self.units,
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
            rotation: self.rotation + other.rotation,
        }
    }
}
