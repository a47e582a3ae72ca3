/*
lib.rs

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

//! Sliding tile puzzle (taquin).
//!
//! The puzzle is an N×N grid of numbered tiles with one empty slot. The player slides the tiles
//! next to the empty slot until the numbers are in ascending order.
//!
//! * [`generator`] builds shuffled levels that can always be solved.
//! * [`board`] holds the tile list, slides tiles, and detects the solved arrangement.
//! * [`game`] is the game status (idle, started, paused, over), the move counter, and the timer.
//! * [`terminal`] is a text front-end that renders the game and forwards the player's actions.
//!
//! # Example
//!
//! ```
//! use taquin::game::{Game, GameState, MoveResult};
//! use taquin::settings::Settings;
//!
//! let mut game = Game::new(&Settings::default()).unwrap();
//! assert_eq!(game.state(), GameState::Idle);
//!
//! // Slide one of the tiles next to the blank
//! let number = game.board().movable_numbers()[0];
//! assert!(matches!(
//!     game.attempt_move(number),
//!     MoveResult::Moved | MoveResult::Won
//! ));
//! assert_eq!(game.moves(), 1);
//! ```

pub mod board;
pub mod cli_options;
pub mod config;
pub mod game;
pub mod generator;
pub mod input;
pub mod settings;
pub mod terminal;
pub mod tile;
pub mod timer;
