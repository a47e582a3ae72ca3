/*
random_walk.rs

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

//! Generate a random level.
//!
//! The level is built by sliding random tiles into the blank, starting from the solved
//! arrangement. Because every step is a legal slide, the resulting level can always be solved.

use log::debug;
use rand::Rng;
use std::time::Instant;

use super::coordinates;
use super::level::{self, Level, LevelError};
use crate::config::DEFAULT_SHUFFLE_MOVES;

/// Generate a level of `size` tiles (`size` is the square of the grid size).
///
/// # Errors
///
/// Return [`LevelError::InvalidSize`] if `size` is not a perfect square of at least 4.
pub fn generate(size: usize) -> Result<Level, LevelError> {
    let mut walk: RandomWalk = RandomWalk::new(size, DEFAULT_SHUFFLE_MOVES)?;
    Ok(walk.generate())
}

/// [`RandomWalk`] object.
#[derive(Debug, Clone)]
pub struct RandomWalk {
    /// Number of rows (and columns) of the grid.
    pub grid_size: usize,

    /// Number of random slides to perform.
    pub steps: usize,

    /// Number of slides performed for the last level. Can be higher than
    /// [`RandomWalk::steps`] when the walk ended on the solved arrangement and had to continue.
    pub iteration: usize,

    /// Duration in seconds it took to generate the last level.
    pub duration: f32,

    /// Successive slots of the blank during the last walk, starting with its solved slot.
    path: Vec<usize>,
}

impl RandomWalk {
    /// Create the object for a level of `size` tiles and a walk of `steps` slides.
    ///
    /// # Errors
    ///
    /// Return [`LevelError::InvalidSize`] if `size` is not a perfect square of at least 4.
    pub fn new(size: usize, steps: usize) -> Result<Self, LevelError> {
        let grid_size: usize = level::grid_size_for(size)?;
        Ok(Self {
            grid_size,
            steps,
            iteration: 0,
            duration: 0.0,
            path: Vec::new(),
        })
    }

    /// Generate and return a random level by using the thread-local random generator.
    pub fn generate(&mut self) -> Level {
        self.generate_with_rng(&mut rand::rng())
    }

    /// Generate and return a random level by using the provided random generator.
    pub fn generate_with_rng<R: Rng>(&mut self, rng: &mut R) -> Level {
        let start: Instant = Instant::now();
        let mut level: Level = Level::solved(self.grid_size);
        let mut blank: usize = level.len() - 1;

        self.iteration = 0;
        self.path.clear();
        self.path.reserve(self.steps + 1);
        self.path.push(blank);

        debug!(
            "Generating a {}x{} level with {} slides",
            self.grid_size, self.grid_size, self.steps
        );

        // Keep walking if the last slide brought the tiles back in order
        while self.iteration < self.steps || level.is_solved() {
            let neighbours: Vec<usize> = coordinates::adjacent_slots(blank, self.grid_size);
            let next: usize = neighbours[rng.random_range(0..neighbours.len())];
            level.swap(blank, next);
            blank = next;
            self.path.push(blank);
            self.iteration += 1;
        }

        self.duration = start.elapsed().as_secs_f32();
        debug!(
            "Iterations = {}  Duration = {}  Level = {:?}",
            self.iteration,
            self.duration,
            level.get()
        );
        level
    }

    /// Return the successive slots of the blank during the last walk.
    ///
    /// Sliding the blank back along this path, in reverse order, solves the level.
    pub fn path(&self) -> &[usize] {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn is_permutation(level: &Level) -> bool {
        let mut numbers: Vec<usize> = level.get().to_vec();
        numbers.sort_unstable();
        numbers == (1..=level.len()).collect::<Vec<usize>>()
    }

    #[test]
    fn generated_levels_are_solvable_permutations() {
        let mut rng: StdRng = StdRng::seed_from_u64(42);
        for grid_size in 2..=6 {
            let mut walk: RandomWalk = RandomWalk::new(grid_size * grid_size, 1000).unwrap();
            for _ in 0..10 {
                let level: Level = walk.generate_with_rng(&mut rng);
                assert_eq!(level.len(), grid_size * grid_size);
                assert!(is_permutation(&level));
                assert!(level.is_solvable(grid_size), "{:?}", level.get());
                assert!(!level.is_solved());
            }
        }
    }

    #[test]
    fn reverse_replay_solves_the_level() {
        let mut rng: StdRng = StdRng::seed_from_u64(7);
        let mut walk: RandomWalk = RandomWalk::new(16, 200).unwrap();
        let mut level: Level = walk.generate_with_rng(&mut rng);

        let path: &[usize] = walk.path();
        assert_eq!(path.len(), walk.iteration + 1);
        assert_eq!(level.blank_slot(), path.last().copied());

        for pair in path.windows(2).rev() {
            level.swap(pair[1], pair[0]);
        }
        assert!(level.is_solved());
    }

    #[test]
    fn path_only_uses_adjacent_slots() {
        let mut rng: StdRng = StdRng::seed_from_u64(3);
        let mut walk: RandomWalk = RandomWalk::new(9, 100).unwrap();
        walk.generate_with_rng(&mut rng);
        for pair in walk.path().windows(2) {
            assert!(coordinates::adjacent_slots(pair[0], 3).contains(&pair[1]));
        }
    }

    #[test]
    fn same_seed_same_level() {
        let mut walk: RandomWalk = RandomWalk::new(16, 1000).unwrap();
        let a: Level = walk.generate_with_rng(&mut StdRng::seed_from_u64(1234));
        let b: Level = walk.generate_with_rng(&mut StdRng::seed_from_u64(1234));
        assert_eq!(a, b);
    }

    #[test]
    fn zero_steps_still_shuffles() {
        let mut rng: StdRng = StdRng::seed_from_u64(5);
        let mut walk: RandomWalk = RandomWalk::new(4, 0).unwrap();
        let level: Level = walk.generate_with_rng(&mut rng);
        assert!(!level.is_solved());
        assert_eq!(walk.iteration, 1);
    }

    #[test]
    fn invalid_size() {
        assert_eq!(generate(15), Err(LevelError::InvalidSize(15)));
        assert_eq!(generate(1), Err(LevelError::InvalidSize(1)));
        assert!(RandomWalk::new(12, 10).is_err());
        assert_eq!(
            generate(usize::MAX),
            Err(LevelError::InvalidSize(usize::MAX))
        );
    }

    #[test]
    fn default_generation() {
        let level: Level = generate(16).unwrap();
        assert!(is_permutation(&level));
        assert!(level.is_solvable(4));
    }
}
