/*
game_scenarios.rs

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

//! Game scenarios played through the public API.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use taquin::board::{self, Board};
use taquin::game::{Game, GameState, Intent, MoveResult, Outcome, RejectReason};
use taquin::generator::level::{Level, LevelError};
use taquin::generator::random_walk::{self, RandomWalk};
use taquin::settings::Settings;
use taquin::tile::Tile;
use taquin::timer::TimerHandle;

fn settings(grid_size: usize) -> Settings {
    Settings {
        grid_size,
        tile_size: 90,
        shuffle_moves: 1000,
    }
}

/// Return a tile number that is neither the blank nor next to it.
fn far_tile(game: &Game) -> usize {
    let movable: Vec<usize> = game.board().movable_numbers();
    let blank: usize = game.board().blank_number();
    game.board()
        .tiles()
        .iter()
        .map(|t| t.number)
        .find(|n| *n != blank && !movable.contains(n))
        .unwrap()
}

#[test]
fn four_by_four_first_moves() {
    let mut rng: StdRng = StdRng::seed_from_u64(2025);
    let mut game: Game = Game::with_rng(&settings(4), &mut rng).unwrap();

    let mut numbers: Vec<usize> = game.original().get().to_vec();
    numbers.sort_unstable();
    assert_eq!(numbers, (1..=16).collect::<Vec<usize>>());
    assert_eq!(game.state(), GameState::Idle);
    assert_eq!(game.timer_handle(), None);

    let number: usize = game.board().movable_numbers()[0];
    assert!(matches!(
        game.attempt_move(number),
        MoveResult::Moved | MoveResult::Won
    ));
    if game.state() == GameState::Over {
        // The level was one slide away from solved
        return;
    }
    assert_eq!(game.state(), GameState::Started);
    assert_eq!(game.moves(), 1);

    let handle: TimerHandle = game.timer_handle().unwrap();
    assert!(game.tick(handle));
    assert_eq!(game.seconds(), 1);

    let far: usize = far_tile(&game);
    assert_eq!(
        game.attempt_move(far),
        MoveResult::Rejected(RejectReason::NotAdjacent)
    );
    assert_eq!(game.moves(), 1);
}

#[test]
fn playing_the_walk_backwards_wins() {
    let mut rng: StdRng = StdRng::seed_from_u64(77);
    let mut walk: RandomWalk = RandomWalk::new(9, 60).unwrap();
    let level: Level = walk.generate_with_rng(&mut rng);
    let path: Vec<usize> = walk.path().to_vec();
    let mut game: Game = Game::from_level(level, &settings(3)).unwrap();

    let mut won: bool = false;
    for pair in path.windows(2).rev() {
        let number: usize = game.board().tile_at(pair[0]).unwrap().number;
        match game.attempt_move(number) {
            MoveResult::Moved => (),
            MoveResult::Won => {
                won = true;
                break;
            }
            MoveResult::Rejected(r) => panic!("legal slide rejected: {r}"),
        }
    }
    assert!(won);
    assert_eq!(game.state(), GameState::Over);
    assert_eq!(game.timer_handle(), None);
    assert!(game.board().is_game_over());
    assert!(!game.solved_by_override());

    let moves: usize = game.moves();
    let before: Board = game.board().clone();
    for number in 1..=9 {
        assert_eq!(
            game.attempt_move(number),
            MoveResult::Rejected(RejectReason::Over)
        );
    }
    assert_eq!(game.moves(), moves);
    assert_eq!(game.board(), &before);
}

#[test]
fn pause_and_resume_keep_the_seconds() {
    let level: Level = Level::from_vec(vec![1, 2, 3, 4, 5, 6, 7, 8, 16, 9, 10, 11, 13, 14, 15, 12])
        .unwrap();
    let mut game: Game = Game::from_level(level, &settings(4)).unwrap();

    assert_eq!(game.attempt_move(9), MoveResult::Moved);
    let handle: TimerHandle = game.timer_handle().unwrap();
    for _ in 0..5 {
        game.tick(handle);
    }
    assert_eq!(game.seconds(), 5);

    assert_eq!(game.handle(Intent::Pause), Outcome::Paused);
    assert_eq!(game.state(), GameState::Paused);
    assert_eq!(game.timer_handle(), None);

    let before: Board = game.board().clone();
    for number in 1..=16 {
        assert_eq!(
            game.attempt_move(number),
            MoveResult::Rejected(RejectReason::Paused)
        );
    }
    assert_eq!(game.board(), &before);
    assert_eq!(game.moves(), 1);
    assert!(!game.tick(handle));

    assert_eq!(game.handle(Intent::Pause), Outcome::Resumed);
    assert_eq!(game.state(), GameState::Started);
    let resumed: TimerHandle = game.timer_handle().unwrap();
    assert!(game.tick(resumed));
    assert_eq!(game.seconds(), 6);
}

#[test]
fn random_clicks_change_two_tiles_or_nothing() {
    let mut rng: StdRng = StdRng::seed_from_u64(11);
    let mut game: Game = Game::with_rng(&settings(4), &mut rng).unwrap();

    for _ in 0..500 {
        if game.state() == GameState::Over {
            game.reset();
        }
        let before: Vec<Tile> = game.board().tiles().to_vec();
        let moves: usize = game.moves();
        let number: usize = rng.random_range(1..=17);

        match game.attempt_move(number) {
            MoveResult::Rejected(_) => {
                assert_eq!(game.board().tiles(), before.as_slice());
                assert_eq!(game.moves(), moves);
            }
            MoveResult::Moved | MoveResult::Won => {
                let changed: Vec<&Tile> = game
                    .board()
                    .tiles()
                    .iter()
                    .zip(before.iter())
                    .filter(|(a, b)| a != b)
                    .map(|(a, _)| a)
                    .collect();
                assert_eq!(changed.len(), 2);
                assert!(changed.iter().any(|t| t.number == 16));
                assert!(changed.iter().any(|t| t.number == number));
                assert_eq!(game.moves(), moves + 1);

                // Numbers stay with their tile
                for (a, b) in game.board().tiles().iter().zip(before.iter()) {
                    assert_eq!(a.number, b.number);
                }
            }
        }
        assert!(!game.solved_by_override());
    }
}

#[test]
fn reset_after_moves_restores_the_level() {
    let mut rng: StdRng = StdRng::seed_from_u64(5);
    let mut game: Game = Game::with_rng(&settings(4), &mut rng).unwrap();
    let original: Vec<usize> = game.original().get().to_vec();

    for _ in 0..20 {
        if game.state() == GameState::Over {
            break;
        }
        let movable: Vec<usize> = game.board().movable_numbers();
        let number: usize = movable[rng.random_range(0..movable.len())];
        game.attempt_move(number);
    }
    if let Some(h) = game.timer_handle() {
        game.tick(h);
    }

    assert_eq!(game.handle(Intent::Reset), Outcome::Reset);
    assert_eq!(game.board().arrangement(), original);
    assert_eq!(game.original().get(), original.as_slice());
    assert_eq!(game.moves(), 0);
    assert_eq!(game.seconds(), 0);
    assert_eq!(game.state(), GameState::Idle);
    assert_eq!(
        game.board(),
        &Board::load_level(game.original(), 4, 90)
    );
}

#[test]
fn solve_override_is_a_separate_action() {
    let mut rng: StdRng = StdRng::seed_from_u64(8);
    let mut game: Game = Game::with_rng(&settings(3), &mut rng).unwrap();
    let number: usize = game.board().movable_numbers()[0];
    game.attempt_move(number);

    assert_eq!(game.handle(Intent::Solve), Outcome::Solved);
    assert_eq!(game.state(), GameState::Over);
    assert!(game.solved_by_override());
    assert!(board::is_game_over(game.board().tiles()));
    assert_eq!(game.timer_handle(), None);

    assert_eq!(game.handle(Intent::New), Outcome::NewGame);
    assert_eq!(game.state(), GameState::Idle);
    assert!(!game.solved_by_override());
}

#[test]
fn game_over_iff_every_tile_is_correct() {
    let solved: Vec<Tile> = (0..9).map(|i| Tile::new(i, i + 1, 3, 10)).collect();
    assert!(board::is_game_over(&solved));

    let mut swapped: Vec<Tile> = solved.clone();
    swapped[0].number = 2;
    swapped[1].number = 1;
    assert!(!board::is_game_over(&swapped));
    assert_eq!(swapped.iter().filter(|t| !t.is_correct()).count(), 2);
}

#[test]
fn generator_sizes() {
    for grid_size in 2..=7 {
        let level: Level = random_walk::generate(grid_size * grid_size).unwrap();
        assert!(level.is_solvable(grid_size));
        assert!(!level.is_solved());
    }
    assert_eq!(random_walk::generate(20), Err(LevelError::InvalidSize(20)));
    assert_eq!(random_walk::generate(0), Err(LevelError::InvalidSize(0)));
}
