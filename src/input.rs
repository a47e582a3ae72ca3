/*
input.rs

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

//! Translate the player's terminal input into game actions.
//!
//! On an interactive terminal the keys are read one at a time:
//!
//! | Key | Action |
//! |-----|--------|
//! | digits, then `Enter` | slide the tile with that number |
//! | `Backspace` | erase the last digit |
//! | `p` | pause or continue |
//! | `r` | restart the level |
//! | `n` | new level |
//! | `h`, `?` | show the commands |
//! | `q`, `Esc`, `Ctrl+C` | leave |
//! | `Ctrl+Alt+F` | debug: solve the puzzle |
//!
//! When the input is not a terminal, each line is a command: a tile number or one of the words
//! `pause`, `reset`, `new`, `help`, `quit` (or their first letter).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::game::Intent;

/// Terminal command.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    /// Action for the game.
    Play(Intent),

    /// A digit of the tile number being typed.
    Digit(char),

    /// Erase the last typed digit.
    Erase,

    /// Slide the tile whose number was typed.
    Submit,

    /// Display the list of commands.
    Help,

    /// Leave the program.
    Quit,
}

/// Whether the key is the debug solve chord (Ctrl+Alt+F).
pub fn is_solve_chord(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('f') | KeyCode::Char('F'))
        && key
            .modifiers
            .contains(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

/// Map a key press to a command. Key releases and repeats are ignored.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if is_solve_chord(key) {
        return Some(Command::Play(Intent::Solve));
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Command::Quit);
    }
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    match key.code {
        KeyCode::Char(c) if c.is_ascii_digit() => Some(Command::Digit(c)),
        KeyCode::Backspace => Some(Command::Erase),
        KeyCode::Enter => Some(Command::Submit),

        KeyCode::Char('p') | KeyCode::Char('P') => Some(Command::Play(Intent::Pause)),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Play(Intent::Reset)),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(Command::Play(Intent::New)),

        KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('?') => Some(Command::Help),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),

        _ => None,
    }
}

/// Parse a line of input. Return None if the line is not a command.
pub fn parse_command(line: &str) -> Option<Command> {
    let word: &str = line.trim();

    if let Ok(number) = word.parse::<usize>() {
        return Some(Command::Play(Intent::TileClick(number)));
    }
    match word.to_lowercase().as_str() {
        "p" | "pause" => Some(Command::Play(Intent::Pause)),
        "r" | "reset" => Some(Command::Play(Intent::Reset)),
        "n" | "new" => Some(Command::Play(Intent::New)),
        "h" | "help" | "?" => Some(Command::Help),
        "q" | "quit" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

/// Return the help text.
pub fn help_text() -> &'static str {
    "Commands:
  <number>   type a tile number, then Enter, to slide it into the blank
  p          pause or continue the game
  r          restart the current level
  n          start a new level
  h          show this help
  q          leave"
}
