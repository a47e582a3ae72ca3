/*
cli_options.rs

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

//! Process command-line options.
//!
//! # Examples
//!
//! Play a 3x3 puzzle:
//!
//! ```text
//! $ taquin --size 3
//! ```
//!
//! Print the tile numbers of a 4x4 level in slot order, always the same level for a given seed,
//! and exit:
//!
//! ```text
//! $ taquin --print --seed 42
//! ```

use clap::Parser;
use log::{LevelFilter, debug};
use std::error::Error;
use std::path::PathBuf;

use crate::config::COPYRIGHT_NOTICE;
use crate::settings::{Settings, SettingsFile};

/// Sliding tile puzzle.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
pub struct Args {
    /// Number of rows and columns of the grid
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Tile size in pixels, reported in the JSON output
    #[arg(short, long)]
    pub tile_size: Option<usize>,

    /// Number of random slides used to shuffle a level
    #[arg(short = 'm', long)]
    pub shuffle_moves: Option<usize>,

    /// Seed for the level generator, to replay the same levels
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON settings file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print a generated level and exit
    #[arg(short, long, default_value_t = false)]
    pub print: bool,

    /// Render the game as JSON snapshots instead of a text grid
    #[arg(short, long, default_value_t = false)]
    pub json: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    pub debug: bool,
}

/// Parse the command-line options and initialize the logger.
pub fn parse() -> Args {
    let args: Args = Args::parse();
    init_logger(args.debug);
    debug!("Command line: {args:?}");
    args
}

/// Initialize the logger. `RUST_LOG` applies unless `debug` is set.
fn init_logger(debug: bool) {
    let mut builder: env_logger::Builder = env_logger::Builder::from_default_env();
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

impl Args {
    /// Build the game settings: defaults, then the settings file, then the command line.
    pub fn settings(&self) -> Result<Settings, Box<dyn Error>> {
        let mut settings: Settings = match &self.config {
            Some(path) => SettingsFile::new(path).get_settings()?.unwrap_or_default(),
            None => Settings::default(),
        };
        if let Some(s) = self.size {
            settings.grid_size = s;
        }
        if let Some(t) = self.tile_size {
            settings.tile_size = t;
        }
        if let Some(m) = self.shuffle_moves {
            settings.shuffle_moves = m;
        }
        settings.validate()?;
        debug!("Settings: {settings:?}");
        Ok(settings)
    }
}
