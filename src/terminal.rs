/*
terminal.rs

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

//! Terminal front-end.
//!
//! All the events (keys or input lines, and timer ticks) go through a single channel and are
//! processed one at a time by [`Terminal::process`], so the game is only modified from the main
//! thread.
//!
//! On an interactive terminal the screen is redrawn in raw mode after every key and every
//! second. Otherwise each command is a line of input and the board is printed after it.
//!
//! A ticker thread is running only while the game timer is running. It is replaced every
//! time the game timer handle changes, and cancelled when the handle goes away.

use crossterm::QueueableCommand;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::KeyEvent;
use crossterm::style::Print;
use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use log::debug;
use rand::rngs::StdRng;
use serde::Serialize;
use std::error::Error;
use std::io::{self, BufRead, IsTerminal, Write};
use std::mem;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use async_channel::Sender;

use crate::config::TICK_PERIOD;
use crate::game::{
    Game, GameSnapshot, GameState, Intent, MoveResult, Outcome, RejectReason, TileView,
};
use crate::input::{self, Command};
use crate::timer::TimerHandle;

/// Longest tile number that can be typed.
const MAX_TYPED_DIGITS: usize = 6;

/// Events processed by the main loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A line typed by the player.
    Line(String),

    /// A key pressed on an interactive terminal.
    Key(KeyEvent),

    /// One timer period elapsed for the given handle.
    Tick(TimerHandle),

    /// The player closed the input.
    InputClosed,
}

/// How the game is displayed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Render {
    /// Text grid.
    Text,

    /// One JSON object per line.
    Json,
}

/// Thread that sends a tick for a timer handle every period.
struct Ticker {
    handle: TimerHandle,
    cancelled: Arc<AtomicBool>,
}

impl Ticker {
    fn spawn(handle: TimerHandle, sender: Sender<Event>) -> Self {
        let cancelled: Arc<AtomicBool> = Arc::new(AtomicBool::new(false));
        let flag: Arc<AtomicBool> = Arc::clone(&cancelled);
        debug!("Starting ticker for {handle:?}");
        thread::spawn(move || {
            loop {
                thread::sleep(TICK_PERIOD);
                if flag.load(Ordering::Relaxed) {
                    break;
                }
                if sender.send_blocking(Event::Tick(handle)).is_err() {
                    break;
                }
            }
        });
        Self { handle, cancelled }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        debug!("Cancelling ticker for {:?}", self.handle);
        self.cancelled.store(true, Ordering::Relaxed);
    }
}

/// JSON output line.
#[derive(Serialize)]
struct JsonFrame<'a> {
    outcome: Option<Outcome>,
    message: Option<String>,
    snapshot: &'a GameSnapshot,
}

/// Format the status line.
pub fn status_line(snapshot: &GameSnapshot) -> String {
    format!(
        "State: {}  Moves: {}  Time elapsed: {}s\n",
        snapshot.state, snapshot.moves, snapshot.seconds
    )
}

/// Format the grid and the status line. Tiles at their final place are marked with `*`.
pub fn render_text(snapshot: &GameSnapshot) -> String {
    let grid_size: usize = snapshot.grid_size;
    let separator: String = format!("{}+\n", "+----".repeat(grid_size));
    let mut cells: Vec<Option<&TileView>> = vec![None; grid_size * grid_size];
    for view in &snapshot.tiles {
        if view.visible
            && let Some(cell) = cells.get_mut(view.tile.tile_id)
        {
            *cell = Some(view);
        }
    }

    let mut text: String = String::new();
    for row in cells.chunks(grid_size.max(1)) {
        text.push_str(&separator);
        for cell in row {
            match cell {
                Some(v) if v.correct => text.push_str(&format!("|{:>3}*", v.tile.number)),
                Some(v) => text.push_str(&format!("|{:>3} ", v.tile.number)),
                None => text.push_str("|    "),
            }
        }
        text.push_str("|\n");
    }
    text.push_str(&separator);
    text.push_str(&status_line(snapshot));
    text
}

/// Return the message to display for an outcome, if any.
fn outcome_message(outcome: Outcome, game: &Game) -> Option<String> {
    match outcome {
        Outcome::Move(MoveResult::Moved) => None,
        Outcome::Move(MoveResult::Won) | Outcome::Solved => Some(format!(
            "Congratulations! You've solved the puzzle in {} moves in {} seconds!",
            game.moves(),
            game.seconds()
        )),
        Outcome::Move(MoveResult::Rejected(reason)) => Some(match reason {
            RejectReason::Paused => "The game is currently paused.".to_string(),
            RejectReason::Over => "The game is over. Start a new game or reset it.".to_string(),
            RejectReason::UnknownTile => "There is no such tile.".to_string(),
            RejectReason::NotAdjacent => "This tile is not next to the empty slot.".to_string(),
        }),
        Outcome::Paused => Some("The game is currently paused.".to_string()),
        Outcome::Resumed => Some("Game on!".to_string()),
        Outcome::Reset => Some("Level reset.".to_string()),
        Outcome::NewGame => Some("New game.".to_string()),
        Outcome::Ignored => match game.state() {
            GameState::Idle => Some("Slide a tile to start the game.".to_string()),
            _ => Some("The game is over.".to_string()),
        },
    }
}

/// Terminal session.
pub struct Terminal<W: Write> {
    game: Game,
    rng: StdRng,
    render: Render,
    out: W,
    sender: Sender<Event>,
    ticker: Option<Ticker>,

    /// Whether the whole screen is redrawn (raw mode) instead of printing lines.
    screen: bool,

    /// Digits of the tile number being typed.
    typed: String,

    /// Last message, kept on screen until the next action.
    message: Option<String>,
}

impl<W: Write> Terminal<W> {
    /// Create a [`Terminal`] object. Ticks are sent to `sender`.
    pub fn new(game: Game, rng: StdRng, render: Render, out: W, sender: Sender<Event>) -> Self {
        Self {
            game,
            rng,
            render,
            out,
            sender,
            ticker: None,
            screen: false,
            typed: String::new(),
            message: None,
        }
    }

    /// Redraw the whole screen after every event. Only used with [`Render::Text`].
    pub fn with_screen(mut self, screen: bool) -> Self {
        self.screen = screen && self.render == Render::Text;
        self
    }

    /// Return the game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Display the help and the initial board.
    pub fn start(&mut self) -> Result<(), Box<dyn Error>> {
        if self.render == Render::Text && !self.screen {
            writeln!(self.out, "{}", input::help_text())?;
        }
        self.show(None, None)
    }

    /// Process one event. Return `false` when the session must end.
    pub fn process(&mut self, event: Event) -> Result<bool, Box<dyn Error>> {
        match event {
            Event::Tick(handle) => {
                if self.game.tick(handle) {
                    self.show_time()?;
                }
                Ok(true)
            }
            Event::InputClosed => {
                self.ticker = None;
                Ok(false)
            }
            Event::Key(key) => match input::handle_key_event(key) {
                Some(command) => self.command(command),
                None => {
                    debug!("Key not bound: {key:?}");
                    Ok(true)
                }
            },
            Event::Line(line) => match input::parse_command(&line) {
                Some(command) => self.command(command),
                None => {
                    debug!("Unknown command {line:?}");
                    writeln!(self.out, "Unknown command. Type h for help.")?;
                    Ok(true)
                }
            },
        }
    }

    fn command(&mut self, command: Command) -> Result<bool, Box<dyn Error>> {
        match command {
            Command::Quit => {
                self.ticker = None;
                return Ok(false);
            }
            Command::Help => {
                if self.screen {
                    // The help is always part of the screen
                    self.redraw()?;
                } else {
                    writeln!(self.out, "{}", input::help_text())?;
                }
            }
            Command::Play(intent) => self.apply(intent)?,
            Command::Digit(digit) => {
                if self.typed.len() < MAX_TYPED_DIGITS {
                    self.typed.push(digit);
                }
                self.redraw_typing()?;
            }
            Command::Erase => {
                self.typed.pop();
                self.redraw_typing()?;
            }
            Command::Submit => {
                let typed: String = mem::take(&mut self.typed);
                match typed.parse::<usize>() {
                    Ok(number) => self.apply(Intent::TileClick(number))?,
                    Err(_) => self.redraw_typing()?,
                }
            }
        }
        Ok(true)
    }

    fn apply(&mut self, intent: Intent) -> Result<(), Box<dyn Error>> {
        let outcome: Outcome = self.play(intent);
        self.sync_ticker();
        let message: Option<String> = outcome_message(outcome, &self.game);
        self.show(Some(outcome), message)
    }

    fn play(&mut self, intent: Intent) -> Outcome {
        match intent {
            // New levels come from the session generator so that --seed replays them
            Intent::New => {
                self.game.new_game_with_rng(&mut self.rng);
                Outcome::NewGame
            }
            _ => self.game.handle(intent),
        }
    }

    /// Make the ticker follow the game timer.
    fn sync_ticker(&mut self) {
        let active: Option<TimerHandle> = self.game.timer_handle();
        if self.ticker.as_ref().map(|t| t.handle) != active {
            // Dropping the previous ticker cancels it
            self.ticker = active.map(|h| Ticker::spawn(h, self.sender.clone()));
        }
    }

    /// Display the board after an action.
    fn show(
        &mut self,
        outcome: Option<Outcome>,
        message: Option<String>,
    ) -> Result<(), Box<dyn Error>> {
        if self.screen {
            self.message = message;
            return self.redraw();
        }
        let snapshot: GameSnapshot = self.game.snapshot();
        match self.render {
            Render::Text => {
                if let Some(m) = &message {
                    writeln!(self.out, "{m}")?;
                }
                write!(self.out, "{}", render_text(&snapshot))?;
            }
            Render::Json => self.write_frame(outcome, message, &snapshot)?,
        }
        self.out.flush()?;
        Ok(())
    }

    /// Display the new elapsed time.
    fn show_time(&mut self) -> Result<(), Box<dyn Error>> {
        if self.screen {
            return self.redraw();
        }
        let snapshot: GameSnapshot = self.game.snapshot();
        match self.render {
            Render::Text => write!(self.out, "{}", status_line(&snapshot))?,
            Render::Json => self.write_frame(None, None, &snapshot)?,
        }
        self.out.flush()?;
        Ok(())
    }

    /// Only the screen shows the number being typed.
    fn redraw_typing(&mut self) -> Result<(), Box<dyn Error>> {
        if self.screen {
            self.redraw()
        } else {
            Ok(())
        }
    }

    fn write_frame(
        &mut self,
        outcome: Option<Outcome>,
        message: Option<String>,
        snapshot: &GameSnapshot,
    ) -> Result<(), Box<dyn Error>> {
        let frame: JsonFrame = JsonFrame {
            outcome,
            message,
            snapshot,
        };
        serde_json::to_writer(&mut self.out, &frame)?;
        writeln!(self.out)?;
        Ok(())
    }

    /// Clear the screen and draw the board, the last message, the typed number, and the help.
    fn redraw(&mut self) -> Result<(), Box<dyn Error>> {
        let mut text: String = render_text(&self.game.snapshot());
        if let Some(m) = &self.message {
            text.push_str(m);
            text.push('\n');
        }
        text.push_str(&format!("Tile: {}\n\n", self.typed));
        text.push_str(input::help_text());
        text.push('\n');

        // Raw mode does not return the carriage by itself
        self.out.queue(Clear(ClearType::All))?;
        self.out.queue(MoveTo(0, 0))?;
        self.out.queue(Print(text.replace('\n', "\r\n")))?;
        self.out.flush()?;
        Ok(())
    }
}

/// Tell the main loop that no more input will come.
fn close_input(sender: &Sender<Event>) {
    if let Err(e) = sender.send_blocking(Event::InputClosed) {
        debug!("Cannot report the end of the input: {e}");
    }
}

/// Forward the input lines to the main loop.
fn read_lines(sender: Sender<Event>) {
    for line in io::stdin().lock().lines() {
        match line {
            Ok(l) => {
                if sender.send_blocking(Event::Line(l)).is_err() {
                    return;
                }
            }
            Err(e) => {
                debug!("Cannot read the input: {e}");
                break;
            }
        }
    }
    close_input(&sender);
}

/// Forward the key presses to the main loop.
fn read_keys(sender: Sender<Event>) {
    loop {
        match crossterm::event::read() {
            Ok(crossterm::event::Event::Key(key)) => {
                if sender.send_blocking(Event::Key(key)).is_err() {
                    return;
                }
            }
            Ok(_) => (),
            Err(e) => {
                debug!("Cannot read the keyboard: {e}");
                break;
            }
        }
    }
    close_input(&sender);
}

fn enter_screen(out: &mut impl Write) -> io::Result<()> {
    enable_raw_mode()?;
    out.queue(EnterAlternateScreen)?;
    out.queue(Hide)?;
    out.flush()
}

fn leave_screen(out: &mut impl Write) -> io::Result<()> {
    out.queue(Show)?;
    out.queue(LeaveAlternateScreen)?;
    out.flush()?;
    disable_raw_mode()
}

/// Play in the terminal until the player quits or closes the input.
///
/// Keys are read directly from the keyboard when the input is a terminal and the game is
/// rendered as text. In all other cases, commands are read line by line.
pub fn run(game: Game, rng: StdRng, render: Render) -> Result<(), Box<dyn Error>> {
    let (sender, receiver) = async_channel::unbounded::<Event>();
    let screen: bool = render == Render::Text && io::stdin().is_terminal();

    let input_sender: Sender<Event> = sender.clone();
    let mut terminal: Terminal<io::Stdout> =
        Terminal::new(game, rng, render, io::stdout(), sender).with_screen(screen);
    if screen {
        enter_screen(&mut terminal.out)?;
        thread::spawn(move || read_keys(input_sender));
    } else {
        thread::spawn(move || read_lines(input_sender));
    }

    let mut result: Result<(), Box<dyn Error>> = terminal.start();
    if result.is_ok() {
        while let Ok(event) = receiver.recv_blocking() {
            match terminal.process(event) {
                Ok(true) => (),
                Ok(false) => break,
                Err(e) => {
                    result = Err(e);
                    break;
                }
            }
        }
    }

    // Always restore the terminal, even after an error
    if screen && let Err(e) = leave_screen(&mut terminal.out) {
        debug!("Cannot restore the terminal: {e}");
    }
    result
}
