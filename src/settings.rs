/*
settings.rs

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

//! Game settings.
//!
//! The settings start from the defaults in [`crate::config`], can be overridden by a JSON
//! settings file, and finally by the command-line options (see [`crate::cli_options`]).
//!
//! Example of a settings file. Missing fields keep their default value:
//!
//! ```json
//! { "grid_size": 3, "shuffle_moves": 500 }
//! ```

use log::debug;
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_GRID_SIZE, DEFAULT_SHUFFLE_MOVES, DEFAULT_TILE_SIZE};
use crate::generator::level::{self, LevelError};

/// Game settings.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Number of rows (and columns) of the grid.
    pub grid_size: usize,

    /// Tile size in pixels.
    pub tile_size: usize,

    /// Number of random slides used to shuffle a new level.
    pub shuffle_moves: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            tile_size: DEFAULT_TILE_SIZE,
            shuffle_moves: DEFAULT_SHUFFLE_MOVES,
        }
    }
}

impl Settings {
    /// Return the number of tiles, blank included.
    ///
    /// # Errors
    ///
    /// Return [`LevelError::InvalidSize`] if the grid is smaller than 2x2 or if the number of
    /// tiles does not fit in a `usize`.
    pub fn size(&self) -> Result<usize, LevelError> {
        // A saturated product is never a perfect square, so the check below rejects it
        let size: usize = self.grid_size.saturating_mul(self.grid_size);
        level::grid_size_for(size)?;
        Ok(size)
    }

    /// Verify that the grid size can be played.
    ///
    /// # Errors
    ///
    /// Return [`LevelError::InvalidSize`] if the grid is smaller than 2x2 or too large.
    pub fn validate(&self) -> Result<(), LevelError> {
        self.size().map(|_| ())
    }
}

/// Object to read the settings file.
pub struct SettingsFile {
    /// Path to the settings file.
    path: PathBuf,
}

impl SettingsFile {
    /// Create a [`SettingsFile`] object.
    pub fn new(path: &Path) -> Self {
        debug!("Settings file: {path:?}");
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Retrieve the [`Settings`] object from the settings file.
    ///
    /// Return the [`Settings`] object or None if the settings file does not exist.
    pub fn get_settings(&self) -> Result<Option<Settings>, Box<dyn Error>> {
        let file: File;
        match File::open(&self.path) {
            Ok(f) => file = f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        }
        let reader: BufReader<File> = BufReader::new(file);
        let settings: Settings = serde_json::from_reader(reader)?;
        debug!("Settings from file: {settings:?}");
        Ok(Some(settings))
    }
}
