/*
timer.rs

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

//! Game timer.
//!
//! The timer counts the elapsed seconds of a game. It does not own a clock: the front-end
//! delivers a tick every [`crate::config::TICK_PERIOD`], tagged with the [`TimerHandle`] it was
//! started for.
//! At most one handle is active at a time, and a handle is never reused, so ticks that were
//! scheduled for a stopped timer are ignored.

use log::debug;
use serde::{Deserialize, Serialize};

/// Subscription to the timer.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

/// Elapsed time counter.
#[derive(Debug, Default, Clone)]
pub struct Timer {
    /// Number of seconds counted so far.
    seconds: u64,

    /// Active subscription, if the timer is running.
    handle: Option<TimerHandle>,

    /// Identifier for the next subscription.
    next_id: u64,
}

impl Timer {
    /// Create a [`Timer`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the timer and return the active handle.
    ///
    /// If the timer is already running, the active handle is returned and no new subscription
    /// is created.
    pub fn start(&mut self) -> TimerHandle {
        if let Some(h) = self.handle {
            debug!("Timer already running with handle {h:?}");
            return h;
        }
        let h: TimerHandle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.handle = Some(h);
        debug!("Timer started with handle {h:?} at {}s", self.seconds);
        h
    }

    /// Stop the timer. The elapsed seconds are kept.
    pub fn stop(&mut self) {
        if let Some(h) = self.handle.take() {
            debug!("Timer handle {h:?} cancelled at {}s", self.seconds);
        }
    }

    /// Stop the timer and set the elapsed seconds back to zero.
    pub fn reset(&mut self) {
        self.stop();
        self.seconds = 0;
    }

    /// Count one period for the given handle.
    ///
    /// Return `false` and do nothing if the handle is not the active one.
    pub fn tick(&mut self, handle: TimerHandle) -> bool {
        if self.handle != Some(handle) {
            debug!("Ignoring tick from stale handle {handle:?}");
            return false;
        }
        self.seconds += 1;
        true
    }

    /// Whether the timer is running.
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Return the active handle.
    pub fn handle(&self) -> Option<TimerHandle> {
        self.handle
    }

    /// Return the elapsed seconds.
    pub fn seconds(&self) -> u64 {
        self.seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_is_idempotent() {
        let mut timer: Timer = Timer::new();
        let h1: TimerHandle = timer.start();
        let h2: TimerHandle = timer.start();
        assert_eq!(h1, h2);
        assert!(timer.is_running());
    }

    #[test]
    fn ticks_count_while_running() {
        let mut timer: Timer = Timer::new();
        let h: TimerHandle = timer.start();
        assert!(timer.tick(h));
        assert!(timer.tick(h));
        assert_eq!(timer.seconds(), 2);
    }

    #[test]
    fn stale_handles_are_ignored() {
        let mut timer: Timer = Timer::new();
        let old: TimerHandle = timer.start();
        timer.tick(old);
        timer.stop();
        assert!(!timer.tick(old));
        assert_eq!(timer.seconds(), 1);

        let new: TimerHandle = timer.start();
        assert_ne!(old, new);
        assert!(!timer.tick(old));
        assert!(timer.tick(new));
        assert_eq!(timer.seconds(), 2);
    }

    #[test]
    fn reset_clears_seconds_and_handle() {
        let mut timer: Timer = Timer::new();
        let h: TimerHandle = timer.start();
        timer.tick(h);
        timer.reset();
        assert_eq!(timer.seconds(), 0);
        assert_eq!(timer.handle(), None);
        assert!(!timer.tick(h));
    }
}
