/*
config.rs

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

//! Build-time constants.

use std::time::Duration;

pub const COPYRIGHT_NOTICE: &str = "Copyright 2025 Hervé Quatremain

This program is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.";

/// Number of rows (and columns) of the grid when nothing else is configured.
pub const DEFAULT_GRID_SIZE: usize = 4;

/// Smallest supported grid: 2x2.
pub const MIN_GRID_SIZE: usize = 2;

/// Size of a tile in pixels. Only carried through for front-ends that position tiles.
pub const DEFAULT_TILE_SIZE: usize = 90;

/// Number of random slides applied to the solved arrangement to build a level.
pub const DEFAULT_SHUFFLE_MOVES: usize = 1000;

/// Period of the game timer.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);
