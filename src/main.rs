/*
main.rs

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

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::process::ExitCode;

use taquin::cli_options;
use taquin::game::Game;
use taquin::generator::level::{Level, LevelError};
use taquin::generator::random_walk::RandomWalk;
use taquin::settings::Settings;
use taquin::terminal::{self, Render};

fn main() -> ExitCode {
    let args: cli_options::Args = cli_options::parse();

    let settings: Settings = match args.settings() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(1);
        }
    };

    // A seed makes every level of the session reproducible
    let mut rng: StdRng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    if args.print {
        let walk: Result<RandomWalk, LevelError> = settings
            .size()
            .and_then(|size| RandomWalk::new(size, settings.shuffle_moves));
        return match walk {
            Ok(mut walk) => {
                let level: Level = walk.generate_with_rng(&mut rng);
                debug!("Generated in {} slides", walk.iteration);
                println!("{:?}", level.get());
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::from(1)
            }
        };
    }

    let game: Game = match Game::with_rng(&settings, &mut rng) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(1);
        }
    };
    let render: Render = if args.json {
        Render::Json
    } else {
        Render::Text
    };

    match terminal::run(game, rng, render) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}
