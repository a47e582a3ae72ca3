/*
game.rs

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

//! Manage the status of a game in progress.
//!
//! The [`Game`] object owns the tile list, the move counter, and the timer, and decides which
//! player actions are accepted:
//!
//! ```text
//!            first slide            pause
//!   Idle ----------------> Started ------> Paused
//!                           |  ^   <------
//!                   winning |  |    resume
//!                    slide  v
//!                           Over
//! ```
//!
//! Reset and new game go back to `Idle` from any status. The debug solve action goes to `Over`
//! from any status.

use log::{debug, info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::board::Board;
use crate::generator::level::{Level, LevelError};
use crate::generator::random_walk::RandomWalk;
use crate::settings::Settings;
use crate::tile::Tile;
use crate::timer::{Timer, TimerHandle};

/// Status of the game.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Default, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GameState {
    /// Level loaded, no slide yet, timer not running.
    #[default]
    Idle,

    /// Timer running, slides accepted.
    Started,

    /// Timer stopped, slides rejected.
    Paused,

    /// Puzzle solved. Nothing but reset and new game is accepted.
    Over,
}

/// Why a slide was refused.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Display)]
pub enum RejectReason {
    /// The game is paused.
    Paused,

    /// The game is over.
    Over,

    /// No tile has that number.
    UnknownTile,

    /// The tile does not share an edge with the blank.
    NotAdjacent,
}

/// Result of a tile click.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveResult {
    /// The tile slid into the blank.
    Moved,

    /// The tile slid into the blank and the puzzle is solved.
    Won,

    /// Nothing changed.
    Rejected(RejectReason),
}

/// Player actions forwarded by the front-end.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Intent {
    /// The player clicked the tile with the given number.
    TileClick(usize),

    /// The pause/continue button.
    Pause,

    /// Restart the current level.
    Reset,

    /// Start a new level.
    New,

    /// Debug action that solves the puzzle without playing.
    Solve,
}

/// What happened after an [`Intent`] was processed.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A tile click was processed.
    Move(MoveResult),

    /// The game is paused.
    Paused,

    /// The game continues after a pause.
    Resumed,

    /// The level restarted from its original arrangement.
    Reset,

    /// A new level is loaded.
    NewGame,

    /// The debug action solved the puzzle.
    Solved,

    /// The action is not available in the current status.
    Ignored,
}

/// Tile as exposed to the front-end.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct TileView {
    #[serde(flatten)]
    pub tile: Tile,

    /// Whether the tile sits in its final slot.
    pub correct: bool,

    /// Whether the tile must be drawn (the blank is not).
    pub visible: bool,
}

/// Read-only copy of the game for rendering.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub grid_size: usize,
    pub tile_size: usize,
    pub tiles: Vec<TileView>,
    pub state: GameState,
    pub moves: usize,
    pub seconds: u64,
    pub solved_by_override: bool,
}

/// Manage the status of the game in progress.
#[derive(Debug)]
pub struct Game {
    /// Level as generated. Used by reset.
    original: Level,

    /// Tile list in progress.
    board: Board,

    /// Current status.
    state: GameState,

    /// Number of accepted slides.
    moves: usize,

    /// Elapsed time.
    timer: Timer,

    /// Level generator for new games.
    walk: RandomWalk,

    /// Tile size in pixels.
    tile_size: usize,

    /// Whether the game ended through the debug solve action instead of a winning slide.
    solved_by_override: bool,
}

impl Game {
    /// Create a [`Game`] object with a new random level.
    ///
    /// # Errors
    ///
    /// Return [`LevelError::InvalidSize`] if the grid size in the settings cannot be played.
    pub fn new(settings: &Settings) -> Result<Self, LevelError> {
        Self::with_rng(settings, &mut rand::rng())
    }

    /// Create a [`Game`] object with a new level generated with the provided random generator.
    ///
    /// # Errors
    ///
    /// Return [`LevelError::InvalidSize`] if the grid size in the settings cannot be played.
    pub fn with_rng<R: Rng>(settings: &Settings, rng: &mut R) -> Result<Self, LevelError> {
        let mut walk: RandomWalk = RandomWalk::new(settings.size()?, settings.shuffle_moves)?;
        let level: Level = walk.generate_with_rng(rng);
        Ok(Self::build(level, walk, settings.tile_size))
    }

    /// Create a [`Game`] object for the provided level.
    ///
    /// # Errors
    ///
    /// Return [`LevelError::InvalidSize`] if the level does not match the grid size in the
    /// settings.
    pub fn from_level(level: Level, settings: &Settings) -> Result<Self, LevelError> {
        let size: usize = settings.size()?;
        if level.len() != size {
            return Err(LevelError::InvalidSize(level.len()));
        }
        let walk: RandomWalk = RandomWalk::new(size, settings.shuffle_moves)?;
        Ok(Self::build(level, walk, settings.tile_size))
    }

    fn build(level: Level, walk: RandomWalk, tile_size: usize) -> Self {
        let board: Board = Board::load_level(&level, walk.grid_size, tile_size);
        debug!("New game: {:?}", level.get());
        Self {
            original: level,
            board,
            state: GameState::Idle,
            moves: 0,
            timer: Timer::new(),
            walk,
            tile_size,
            solved_by_override: false,
        }
    }

    /// Return the current status.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Return the number of accepted slides.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Return the elapsed seconds.
    pub fn seconds(&self) -> u64 {
        self.timer.seconds()
    }

    /// Return the tile list.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Return the level as it was generated.
    pub fn original(&self) -> &Level {
        &self.original
    }

    /// Return the handle of the running timer. The front-end must deliver one tick per period
    /// with this handle (see [`Game::tick`]).
    pub fn timer_handle(&self) -> Option<TimerHandle> {
        self.timer.handle()
    }

    /// Whether the game ended through [`Game::solve`].
    pub fn solved_by_override(&self) -> bool {
        self.solved_by_override
    }

    /// Process a player action.
    pub fn handle(&mut self, intent: Intent) -> Outcome {
        match intent {
            Intent::TileClick(number) => Outcome::Move(self.attempt_move(number)),
            Intent::Pause => self.toggle_pause(),
            Intent::Reset => {
                self.reset();
                Outcome::Reset
            }
            Intent::New => {
                self.new_game();
                Outcome::NewGame
            }
            Intent::Solve => {
                self.solve();
                Outcome::Solved
            }
        }
    }

    /// Slide the tile with the given number into the blank.
    ///
    /// Nothing changes if the game is paused or over, or if the tile is not next to the blank.
    /// The first accepted slide starts the timer.
    pub fn attempt_move(&mut self, number: usize) -> MoveResult {
        match self.state {
            GameState::Paused => return MoveResult::Rejected(RejectReason::Paused),
            GameState::Over => return MoveResult::Rejected(RejectReason::Over),
            GameState::Idle | GameState::Started => (),
        }
        if self.board.tile_by_number(number).is_none() {
            return MoveResult::Rejected(RejectReason::UnknownTile);
        }
        if !self.board.swap_with_blank(number) {
            return MoveResult::Rejected(RejectReason::NotAdjacent);
        }

        self.moves += 1;
        if self.state == GameState::Idle {
            self.timer.start();
            self.state = GameState::Started;
        }

        if self.board.is_game_over() {
            self.timer.stop();
            self.state = GameState::Over;
            info!(
                "Puzzle solved in {} moves and {} seconds",
                self.moves,
                self.timer.seconds()
            );
            return MoveResult::Won;
        }
        MoveResult::Moved
    }

    /// Pause the game.
    ///
    /// Return `false` if the game is not started.
    pub fn pause(&mut self) -> bool {
        if self.state != GameState::Started {
            debug!("Cannot pause a game in the {} state", self.state);
            return false;
        }
        self.timer.stop();
        self.state = GameState::Paused;
        true
    }

    /// Resume the game. The timer continues from the paused value.
    ///
    /// Return `false` if the game is not paused.
    pub fn resume(&mut self) -> bool {
        if self.state != GameState::Paused {
            debug!("Cannot resume a game in the {} state", self.state);
            return false;
        }
        self.timer.start();
        self.state = GameState::Started;
        true
    }

    /// Pause a started game, or continue a paused one.
    pub fn toggle_pause(&mut self) -> Outcome {
        if self.pause() {
            Outcome::Paused
        } else if self.resume() {
            Outcome::Resumed
        } else {
            Outcome::Ignored
        }
    }

    /// Restart the current level from its original arrangement.
    pub fn reset(&mut self) {
        self.timer.reset();
        self.board = Board::load_level(&self.original, self.walk.grid_size, self.tile_size);
        self.moves = 0;
        self.state = GameState::Idle;
        self.solved_by_override = false;
        debug!("Game reset: {:?}", self.original.get());
    }

    /// Replace the level with a new random one.
    pub fn new_game(&mut self) {
        self.new_game_with_rng(&mut rand::rng());
    }

    /// Replace the level with a new one generated with the provided random generator.
    pub fn new_game_with_rng<R: Rng>(&mut self, rng: &mut R) {
        self.timer.reset();
        self.original = self.walk.generate_with_rng(rng);
        self.board = Board::load_level(&self.original, self.walk.grid_size, self.tile_size);
        self.moves = 0;
        self.state = GameState::Idle;
        self.solved_by_override = false;
        debug!("New game: {:?}", self.original.get());
    }

    /// Debug action: put every number in its final slot without playing, and end the game.
    pub fn solve(&mut self) {
        warn!(
            "Puzzle solved by the debug override after {} moves (state was {})",
            self.moves, self.state
        );
        self.timer.stop();
        self.board.force_solved();
        self.state = GameState::Over;
        self.solved_by_override = true;
    }

    /// Count one timer period.
    ///
    /// Return `false` and do nothing if the handle is not the active timer or if the game is
    /// not started.
    pub fn tick(&mut self, handle: TimerHandle) -> bool {
        if self.state != GameState::Started {
            return false;
        }
        self.timer.tick(handle)
    }

    /// Return a copy of the game for rendering.
    pub fn snapshot(&self) -> GameSnapshot {
        let grid_size: usize = self.board.grid_size();
        GameSnapshot {
            grid_size,
            tile_size: self.board.tile_size(),
            tiles: self
                .board
                .tiles()
                .iter()
                .map(|t| TileView {
                    tile: *t,
                    correct: t.is_correct(),
                    visible: t.is_visible(grid_size),
                })
                .collect(),
            state: self.state,
            moves: self.moves,
            seconds: self.timer.seconds(),
            solved_by_override: self.solved_by_override,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(grid_size: usize) -> Settings {
        Settings {
            grid_size,
            tile_size: 10,
            shuffle_moves: 50,
        }
    }

    /// 3x3 game with the blank in the center.
    fn center_blank_game() -> Game {
        let level: Level = Level::from_vec(vec![1, 2, 3, 4, 9, 5, 6, 7, 8]).unwrap();
        Game::from_level(level, &settings(3)).unwrap()
    }

    #[test]
    fn new_game_is_idle() {
        let game: Game = Game::new(&settings(4)).unwrap();
        assert_eq!(game.state(), GameState::Idle);
        assert_eq!(game.moves(), 0);
        assert_eq!(game.seconds(), 0);
        assert_eq!(game.timer_handle(), None);
        assert_eq!(game.board().tiles().len(), 16);
    }

    #[test]
    fn invalid_settings() {
        assert_eq!(
            Game::new(&settings(1)).unwrap_err(),
            LevelError::InvalidSize(1)
        );
        let level: Level = Level::solved(3);
        assert_eq!(
            Game::from_level(level, &settings(4)).unwrap_err(),
            LevelError::InvalidSize(9)
        );
        assert_eq!(
            Game::new(&settings(1 << 32)).unwrap_err(),
            LevelError::InvalidSize(usize::MAX)
        );
    }

    #[test]
    fn first_move_starts_the_timer() {
        let mut game: Game = center_blank_game();
        assert_eq!(game.attempt_move(2), MoveResult::Moved);
        assert_eq!(game.state(), GameState::Started);
        assert_eq!(game.moves(), 1);
        assert!(game.timer_handle().is_some());
    }

    #[test]
    fn rejected_moves() {
        let mut game: Game = center_blank_game();
        assert_eq!(
            game.attempt_move(1),
            MoveResult::Rejected(RejectReason::NotAdjacent)
        );
        assert_eq!(
            game.attempt_move(9),
            MoveResult::Rejected(RejectReason::NotAdjacent)
        );
        assert_eq!(
            game.attempt_move(10),
            MoveResult::Rejected(RejectReason::UnknownTile)
        );
        assert_eq!(game.state(), GameState::Idle);
        assert_eq!(game.moves(), 0);
        assert_eq!(game.timer_handle(), None);
    }

    #[test]
    fn pause_only_from_started() {
        let mut game: Game = center_blank_game();
        assert!(!game.pause());
        assert_eq!(game.handle(Intent::Pause), Outcome::Ignored);
        assert!(!game.resume());

        game.attempt_move(4);
        assert!(game.pause());
        assert_eq!(game.timer_handle(), None);
        assert_eq!(
            game.attempt_move(1),
            MoveResult::Rejected(RejectReason::Paused)
        );
        assert!(game.resume());
        assert_eq!(game.state(), GameState::Started);
    }

    #[test]
    fn pause_intent_toggles() {
        let mut game: Game = center_blank_game();
        game.attempt_move(4);
        assert_eq!(game.handle(Intent::Pause), Outcome::Paused);
        assert_eq!(game.handle(Intent::Pause), Outcome::Resumed);
        assert_eq!(game.state(), GameState::Started);
    }

    #[test]
    fn ticks_only_count_while_started() {
        let mut game: Game = center_blank_game();
        game.attempt_move(5);
        let h: TimerHandle = game.timer_handle().unwrap();
        assert!(game.tick(h));
        assert!(game.tick(h));
        game.pause();
        assert!(!game.tick(h));
        assert_eq!(game.seconds(), 2);

        game.resume();
        let h2: TimerHandle = game.timer_handle().unwrap();
        assert!(!game.tick(h));
        assert!(game.tick(h2));
        assert_eq!(game.seconds(), 3);
    }

    #[test]
    fn winning_move_ends_the_game() {
        let level: Level = Level::from_vec(vec![1, 2, 3, 4, 5, 6, 7, 9, 8]).unwrap();
        let mut game: Game = Game::from_level(level, &settings(3)).unwrap();
        assert_eq!(game.attempt_move(8), MoveResult::Won);
        assert_eq!(game.state(), GameState::Over);
        assert_eq!(game.timer_handle(), None);
        assert!(!game.solved_by_override());
        assert_eq!(
            game.attempt_move(6),
            MoveResult::Rejected(RejectReason::Over)
        );
        assert!(!game.pause());
        assert_eq!(game.handle(Intent::Pause), Outcome::Ignored);
    }

    #[test]
    fn reset_restores_original() {
        let mut game: Game = center_blank_game();
        let original: Board = game.board().clone();
        game.attempt_move(2);
        game.attempt_move(1);
        let h: TimerHandle = game.timer_handle().unwrap();
        game.tick(h);

        game.reset();
        assert_eq!(game.board(), &original);
        assert_eq!(game.moves(), 0);
        assert_eq!(game.seconds(), 0);
        assert_eq!(game.state(), GameState::Idle);
        assert_eq!(game.timer_handle(), None);
        assert!(!game.tick(h));
    }

    #[test]
    fn solve_override() {
        let mut game: Game = center_blank_game();
        game.attempt_move(2);
        assert_eq!(game.handle(Intent::Solve), Outcome::Solved);
        assert_eq!(game.state(), GameState::Over);
        assert!(game.board().is_game_over());
        assert!(game.solved_by_override());
        assert_eq!(game.timer_handle(), None);

        game.reset();
        assert!(!game.solved_by_override());
        assert!(!game.board().is_game_over());
    }

    #[test]
    fn new_game_replaces_original() {
        use rand::SeedableRng;
        use rand::rngs::StdRng;

        let mut game: Game = center_blank_game();
        game.attempt_move(2);
        game.new_game_with_rng(&mut StdRng::seed_from_u64(9));
        assert_eq!(game.state(), GameState::Idle);
        assert_eq!(game.moves(), 0);
        assert_eq!(game.seconds(), 0);
        assert!(!game.original().is_solved());
        assert_eq!(game.board().arrangement(), game.original().get());
        assert!(game.original().is_solvable(3));
    }

    #[test]
    fn snapshot_flags() {
        let game: Game = center_blank_game();
        let snap: GameSnapshot = game.snapshot();
        assert_eq!(snap.tiles.len(), 9);
        assert_eq!(snap.state, GameState::Idle);
        let blank: &TileView = snap.tiles.iter().find(|v| v.tile.number == 9).unwrap();
        assert!(!blank.visible);
        assert!(!blank.correct);
        assert!(snap.tiles[0].correct);
        assert!(!snap.tiles[5].correct);
        assert_eq!((snap.tiles[5].tile.row, snap.tiles[5].tile.column), (1, 2));
    }

    #[test]
    fn snapshot_serializes_flat_tiles() {
        let game: Game = center_blank_game();
        let json: serde_json::Value = serde_json::to_value(game.snapshot()).unwrap();
        assert_eq!(json["state"], "idle");
        assert_eq!(json["tiles"][0]["tile_id"], 0);
        assert_eq!(json["tiles"][0]["number"], 1);
        assert_eq!(json["tiles"][0]["correct"], true);
        assert_eq!(json["tiles"][4]["visible"], false);
    }

    #[test]
    fn state_display() {
        assert_eq!(GameState::Started.to_string(), "started");
        assert_eq!(GameState::Over.to_string(), "over");
    }
}
