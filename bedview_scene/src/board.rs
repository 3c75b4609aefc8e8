// Copyright 2025 the Bedview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boards on the machine bed and the placements they carry.

use crate::units::Location;

/// Which side of a board faces up.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoardSide {
    /// Component side up.
    #[default]
    Top,
    /// Board flipped; placement X coordinates are mirrored.
    Bottom,
}

/// A part placement, relative to its board's origin.
#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    /// Reference designator or other identifier.
    pub id: String,
    /// Side of the board the part goes on.
    pub side: BoardSide,
    /// Board-relative location.
    pub location: Location,
}

/// A board positioned on the machine.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoardLocation {
    /// Machine location of the board origin; `rotation` rotates the board.
    pub location: Location,
    /// Side facing up.
    pub side: BoardSide,
    /// Placements defined on the board.
    pub placements: Vec<Placement>,
}

impl BoardLocation {
    /// Placements on the side currently facing up, with their machine locations.
    pub fn visible_placements(&self) -> impl Iterator<Item = (usize, &Placement, Location)> + '_ {
        self.placements
            .iter()
            .enumerate()
            .filter(move |(_, p)| p.side == self.side)
            .map(move |(i, p)| (i, p, board_placement_location(self, p)))
    }
}

/// Machine location of `placement` on `board`.
///
/// The placement is converted to the board's units, mirrored in X when the
/// board is bottom side up, rotated by the board rotation, then offset by the
/// board location. Rotations add.
pub fn board_placement_location(board: &BoardLocation, placement: &Placement) -> Location {
    let mut loc = placement.location.convert_to_units(board.location.units);
    if board.side == BoardSide::Bottom {
        loc.x = -loc.x;
    }
    loc.rotate_xy(board.location.rotation)
        .add_with_rotation(&board.location)
}
