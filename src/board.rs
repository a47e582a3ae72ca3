/*
board.rs

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

//! Puzzle engine: the tile list, tile slides, and the win condition.
//!
//! The board does not know about the game status. See [`crate::game`] for the rules that decide
//! when a slide is accepted.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::generator::level::Level;
use crate::tile::Tile;

/// Result of the adjacency test between two tiles.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Adjacency {
    /// Whether the tiles share an edge.
    pub neighbours: bool,
}

/// Whether the two tiles are orthogonally adjacent on the grid.
///
/// The test uses the current row and column of the tiles, not their numbers.
pub fn find_adjacency(tile1: &Tile, tile2: &Tile) -> Adjacency {
    let distance: usize = tile1.row.abs_diff(tile2.row) + tile1.column.abs_diff(tile2.column);
    Adjacency {
        neighbours: distance == 1,
    }
}

/// Whether every tile of the list sits in its final slot.
pub fn is_game_over(tiles: &[Tile]) -> bool {
    tiles.iter().all(Tile::is_correct)
}

/// Tile list of the puzzle in progress.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Tiles, in the order of the level they were loaded from. Slides do not reorder the list.
    tiles: Vec<Tile>,

    /// Number of rows (and columns).
    grid_size: usize,

    /// Tile size in pixels.
    tile_size: usize,
}

impl Board {
    /// Create the tile list for the given level.
    ///
    /// The tile at index `i` of the level sits in slot `i`.
    pub fn load_level(level: &Level, grid_size: usize, tile_size: usize) -> Self {
        let tiles: Vec<Tile> = level
            .get()
            .iter()
            .enumerate()
            .map(|(index, number)| Tile::new(index, *number, grid_size, tile_size))
            .collect();
        Self {
            tiles,
            grid_size,
            tile_size,
        }
    }

    /// Return the tiles.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Return the number of rows (and columns).
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Return the tile size in pixels.
    pub fn tile_size(&self) -> usize {
        self.tile_size
    }

    /// Return the number of the blank tile.
    pub fn blank_number(&self) -> usize {
        self.grid_size * self.grid_size
    }

    /// Return the tile with the given number.
    pub fn tile_by_number(&self, number: usize) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.number == number)
    }

    /// Return the blank tile.
    pub fn blank(&self) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.is_blank(self.grid_size))
    }

    /// Return the tile sitting in the given slot.
    pub fn tile_at(&self, tile_id: usize) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.tile_id == tile_id)
    }

    /// Whether the tile with the given number is next to the blank and can slide.
    pub fn can_slide(&self, number: usize) -> bool {
        match (self.tile_by_number(number), self.blank()) {
            (Some(tile), Some(blank)) => find_adjacency(tile, blank).neighbours,
            _ => false,
        }
    }

    /// Return the numbers of the tiles that can slide into the blank.
    pub fn movable_numbers(&self) -> Vec<usize> {
        let mut numbers: Vec<usize> = self
            .tiles
            .iter()
            .filter(|t| self.can_slide(t.number))
            .map(|t| t.number)
            .collect();
        numbers.sort_unstable();
        numbers
    }

    /// Slide the tile with the given number into the blank.
    ///
    /// The tile and the blank exchange their slot, row, column, and pixel offsets. All the other
    /// tiles are left untouched.
    ///
    /// Return `false` and do nothing if the tile does not exist or is not next to the blank.
    pub fn swap_with_blank(&mut self, number: usize) -> bool {
        let blank_number: usize = self.blank_number();
        let tile_index: Option<usize> = self.tiles.iter().position(|t| t.number == number);
        let blank_index: Option<usize> = self.tiles.iter().position(|t| t.number == blank_number);

        let (Some(ti), Some(bi)) = (tile_index, blank_index) else {
            debug!("Tile {number} or blank not found");
            return false;
        };
        let tile: Tile = self.tiles[ti];
        let blank: Tile = self.tiles[bi];
        if !find_adjacency(&tile, &blank).neighbours {
            debug!(
                "Tile {number} at ({}, {}) is not next to the blank at ({}, {})",
                tile.row, tile.column, blank.row, blank.column
            );
            return false;
        }

        self.tiles[ti].take_position(&blank);
        self.tiles[bi].take_position(&tile);
        debug!(
            "Tile {number} slid from slot {} to slot {}",
            tile.tile_id, blank.tile_id
        );
        true
    }

    /// Whether every tile sits in its final slot.
    pub fn is_game_over(&self) -> bool {
        is_game_over(&self.tiles)
    }

    /// Rewrite the number of every tile so that it matches its slot, ignoring the slide rules.
    pub(crate) fn force_solved(&mut self) {
        for tile in &mut self.tiles {
            tile.number = tile.tile_id + 1;
        }
    }

    /// Return the tile numbers in slot order.
    pub fn arrangement(&self) -> Vec<usize> {
        let mut numbers: Vec<usize> = vec![0; self.tiles.len()];
        for tile in &self.tiles {
            if let Some(n) = numbers.get_mut(tile.tile_id) {
                *n = tile.number;
            }
        }
        numbers
    }
}
