/*
coordinates.rs

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

//! Convert a linear slot index into grid and pixel coordinates.

use serde::{Deserialize, Serialize};

/// Position of a slot in the grid.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct TileCoords {
    /// Row, starting at 0 for the top row.
    pub row: usize,

    /// Column, starting at 0 for the left column.
    pub column: usize,

    /// Vertical offset in pixels.
    pub top: usize,

    /// Horizontal offset in pixels.
    pub left: usize,
}

/// Return the coordinates of the slot at `index` in a `grid_size` x `grid_size` grid of
/// `tile_size` pixel tiles.
pub fn tile_coords(index: usize, grid_size: usize, tile_size: usize) -> TileCoords {
    let row: usize = index / grid_size;
    let column: usize = index % grid_size;
    TileCoords {
        row,
        column,
        top: row * tile_size,
        left: column * tile_size,
    }
}

/// Return the slot index of the given row and column.
pub fn slot_index(row: usize, column: usize, grid_size: usize) -> usize {
    row * grid_size + column
}

/// Return the slot indexes orthogonally adjacent to `index`.
pub fn adjacent_slots(index: usize, grid_size: usize) -> Vec<usize> {
    let row: usize = index / grid_size;
    let column: usize = index % grid_size;
    let mut slots: Vec<usize> = Vec::with_capacity(4);

    if row > 0 {
        slots.push(slot_index(row - 1, column, grid_size));
    }
    if row + 1 < grid_size {
        slots.push(slot_index(row + 1, column, grid_size));
    }
    if column > 0 {
        slots.push(slot_index(row, column - 1, grid_size));
    }
    if column + 1 < grid_size {
        slots.push(slot_index(row, column + 1, grid_size));
    }
    slots
}
