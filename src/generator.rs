/*
generator.rs

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

//! Generate random levels.
//!
//! A level is represented by a [`level::Level`] object: the list of the tile numbers in slot
//! order, where the highest number marks the blank slot.
//!
//! To play, a random level must be created.
//! You create it with the [`random_walk::generate`] function, or by creating a
//! [`random_walk::RandomWalk`] object and by using its [`random_walk::RandomWalk::generate`]
//! method when you need to control the number of slides or the random generator.
//! The number of tiles must be a perfect square of at least 4, otherwise a
//! [`level::LevelError::InvalidSize`] error is returned.
//!
//! The [`coordinates`] module converts slot indexes into grid and pixel coordinates.

pub mod coordinates;
pub mod level;
pub mod random_walk;
