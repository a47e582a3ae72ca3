/*
level.rs

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

//! Starting arrangement of a puzzle.
//!
//! A [`Level`] is the list of the tile numbers, in slot order.
//! Numbers go from 1 to N², and the number N² is the blank slot.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

use crate::config::MIN_GRID_SIZE;

/// Type of errors.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum LevelError {
    /// The number of tiles is not a perfect square, or the grid is smaller than 2x2.
    InvalidSize(usize),

    /// The tile numbers are not a permutation of 1..=N².
    InvalidTileSet,
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LevelError::InvalidSize(size) => write!(
                f,
                "invalid puzzle size {size}: the number of tiles must be a perfect square of at least {}",
                MIN_GRID_SIZE * MIN_GRID_SIZE
            ),
            LevelError::InvalidTileSet => {
                write!(f, "the tile numbers are not a permutation of 1..=N²")
            }
        }
    }
}

impl Error for LevelError {}

/// Return the grid size (number of rows) for a puzzle of `size` tiles.
///
/// # Errors
///
/// Return [`LevelError::InvalidSize`] if `size` is not a perfect square or if the grid would be
/// smaller than 2x2.
pub fn grid_size_for(size: usize) -> Result<usize, LevelError> {
    if size < MIN_GRID_SIZE * MIN_GRID_SIZE {
        return Err(LevelError::InvalidSize(size));
    }
    // isqrt(size)² never exceeds size, so the product cannot overflow
    let root: usize = size.isqrt();
    if root * root == size {
        Ok(root)
    } else {
        Err(LevelError::InvalidSize(size))
    }
}

/// Generated starting arrangement.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Level {
    /// Tile numbers, indexed by slot.
    tile_set: Vec<usize>,
}

impl Level {
    /// Create the solved arrangement for a `grid_size` x `grid_size` puzzle.
    pub fn solved(grid_size: usize) -> Self {
        Self {
            tile_set: (1..=grid_size * grid_size).collect(),
        }
    }

    /// Create a [`Level`] object from a list of tile numbers.
    ///
    /// # Errors
    ///
    /// Return an error if the length is not a valid puzzle size, or if the numbers are not a
    /// permutation of 1..=N².
    pub fn from_vec(tile_set: Vec<usize>) -> Result<Self, LevelError> {
        let size: usize = tile_set.len();
        grid_size_for(size)?;

        let mut seen: Vec<bool> = vec![false; size];
        for number in &tile_set {
            if *number == 0 || *number > size || seen[number - 1] {
                return Err(LevelError::InvalidTileSet);
            }
            seen[number - 1] = true;
        }
        Ok(Self { tile_set })
    }

    /// Return the tile numbers, in slot order.
    pub fn get(&self) -> &[usize] {
        &self.tile_set
    }

    /// Return the number of tiles, blank included.
    pub fn len(&self) -> usize {
        self.tile_set.len()
    }

    /// Whether the level has no tiles. Never true for a level built by this module.
    pub fn is_empty(&self) -> bool {
        self.tile_set.is_empty()
    }

    /// Return the number that marks the blank slot.
    pub fn blank_number(&self) -> usize {
        self.tile_set.len()
    }

    /// Return the slot of the blank.
    pub fn blank_slot(&self) -> Option<usize> {
        let blank: usize = self.blank_number();
        self.tile_set.iter().position(|n| *n == blank)
    }

    /// Whether every number sits in its own slot.
    pub fn is_solved(&self) -> bool {
        self.tile_set
            .iter()
            .enumerate()
            .all(|(slot, number)| slot + 1 == *number)
    }

    /// Exchange the numbers of two slots.
    pub(crate) fn swap(&mut self, slot1: usize, slot2: usize) {
        self.tile_set.swap(slot1, slot2);
    }

    /// Whether the arrangement can be brought back to the solved state with legal slides.
    ///
    /// For an odd grid width, the number of inversions must be even.
    /// For an even grid width, the number of inversions plus the row of the blank (counted from
    /// the bottom, starting at 1) must be odd.
    pub fn is_solvable(&self, grid_size: usize) -> bool {
        let inversions: usize = self.count_inversions();

        if grid_size % 2 == 1 {
            return inversions % 2 == 0;
        }
        match self.blank_slot() {
            Some(slot) => {
                let row_from_bottom: usize = grid_size - slot / grid_size;
                (inversions + row_from_bottom) % 2 == 1
            }
            None => false,
        }
    }

    /// Count the pairs of numbers, blank excluded, that are in the wrong relative order.
    fn count_inversions(&self) -> usize {
        let blank: usize = self.blank_number();
        self.tile_set
            .iter()
            .enumerate()
            .filter(|&(_, &number)| number != blank)
            .map(|(i, &number)| {
                self.tile_set[i + 1..]
                    .iter()
                    .filter(|&&next| next != blank && next < number)
                    .count()
            })
            .sum()
    }
}
