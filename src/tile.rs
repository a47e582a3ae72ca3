/*
tile.rs

Copyright 2025 Hervé Quatremain

This file is part of Taquin.

Taquin is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Taquin is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Taquin. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Puzzle tile.
//!
//! A tile carries two independent keys:
//!
//! * the number, which is the label painted on the tile and never changes while playing,
//! * the slot ([`Tile::tile_id`]) where the tile currently sits, with the matching grid and
//!   pixel coordinates.
//!
//! Sliding a tile exchanges the slot attributes of the tile and of the blank; the numbers stay
//! attached to their tiles.
//! A tile is at its place when its slot matches its number.

use serde::{Deserialize, Serialize};

use crate::generator::coordinates::{self, TileCoords};

/// Puzzle tile.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Tile {
    /// Slot where the tile currently sits, in row-major order.
    pub tile_id: usize,

    /// Label of the tile, from 1 to N². The number N² is the blank.
    pub number: usize,

    /// Row of the slot.
    pub row: usize,

    /// Column of the slot.
    pub column: usize,

    /// Vertical offset in pixels.
    pub top: usize,

    /// Horizontal offset in pixels.
    pub left: usize,

    /// Width in pixels.
    pub width: usize,

    /// Height in pixels.
    pub height: usize,
}

impl Tile {
    /// Create a [`Tile`] object for the tile with the given number sitting in slot `tile_id`.
    pub fn new(tile_id: usize, number: usize, grid_size: usize, tile_size: usize) -> Self {
        let coords: TileCoords = coordinates::tile_coords(tile_id, grid_size, tile_size);
        Self {
            tile_id,
            number,
            row: coords.row,
            column: coords.column,
            top: coords.top,
            left: coords.left,
            width: tile_size,
            height: tile_size,
        }
    }

    /// Whether the tile sits in its final slot.
    pub fn is_correct(&self) -> bool {
        self.tile_id + 1 == self.number
    }

    /// Whether the tile must be drawn. The blank is never drawn.
    pub fn is_visible(&self, grid_size: usize) -> bool {
        self.number < grid_size * grid_size
    }

    /// Whether the tile is the blank.
    pub fn is_blank(&self, grid_size: usize) -> bool {
        self.number == grid_size * grid_size
    }

    /// Move the tile to the slot of `other`. The number is not changed.
    pub(crate) fn take_position(&mut self, other: &Tile) {
        self.tile_id = other.tile_id;
        self.row = other.row;
        self.column = other.column;
        self.top = other.top;
        self.left = other.left;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tile_gets_slot_coordinates() {
        let tile: Tile = Tile::new(5, 3, 4, 90);
        assert_eq!(tile.tile_id, 5);
        assert_eq!(tile.number, 3);
        assert_eq!((tile.row, tile.column), (1, 1));
        assert_eq!((tile.top, tile.left), (90, 90));
        assert_eq!((tile.width, tile.height), (90, 90));
    }

    #[test]
    fn correct_and_visible_flags() {
        assert!(Tile::new(0, 1, 2, 10).is_correct());
        assert!(!Tile::new(0, 2, 2, 10).is_correct());

        let blank: Tile = Tile::new(1, 4, 2, 10);
        assert!(blank.is_blank(2));
        assert!(!blank.is_visible(2));
        assert!(Tile::new(3, 3, 2, 10).is_visible(2));
    }

    #[test]
    fn take_position_keeps_number() {
        let mut tile: Tile = Tile::new(0, 7, 3, 10);
        let other: Tile = Tile::new(8, 9, 3, 10);
        tile.take_position(&other);
        assert_eq!(tile.number, 7);
        assert_eq!(tile.tile_id, 8);
        assert_eq!((tile.row, tile.column, tile.top, tile.left), (2, 2, 20, 20));
    }
}
