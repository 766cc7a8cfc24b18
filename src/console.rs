/*
console.rs

Copyright 2025 Hervé Quatremain

This file is part of Walktrace.

Walktrace is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Walktrace is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Walktrace. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Play a round in the terminal.
//!
//! The console reads one command per line:
//!
//! * a cell linear index (`7`) or coordinate (`1,2`) enters that cell,
//! * `up`, `down`, `left`, `right` (or `k`, `j`, `h`, `l`) move the focus and enter the cell,
//! * `show` prints the board, `solution` prints the hidden paths,
//! * `reset` restarts the round, `quit` stops.
//!
//! On the board, `@` is the focused cell and `#` a traced cell.

use log::debug;
use std::io::{self, BufRead, Write};

use walktrace::game::{Game, Transition};
use walktrace::generator::coordinate::{Coordinate, Direction};
use walktrace::tracker::Outcome;

/// Player commands.
#[derive(Debug, Copy, Clone, PartialEq)]
enum Command {
    Enter(usize),
    EnterCoordinate(Coordinate),
    Move(Direction),
    Show,
    Solution,
    Reset,
    Quit,
}

impl Command {
    /// Parse a command line. Return None for an unknown command.
    fn parse(line: &str) -> Option<Self> {
        let line: &str = line.trim();
        let command: Command = match line {
            "up" | "k" => Command::Move(Direction::Up),
            "down" | "j" => Command::Move(Direction::Down),
            "left" | "h" => Command::Move(Direction::Left),
            "right" | "l" => Command::Move(Direction::Right),
            "show" | "s" => Command::Show,
            "solution" => Command::Solution,
            "reset" | "r" => Command::Reset,
            "quit" | "q" => Command::Quit,
            _ => match line.split_once(',') {
                Some((x, y)) => Command::EnterCoordinate(Coordinate::new(
                    x.trim().parse().ok()?,
                    y.trim().parse().ok()?,
                )),
                None => Command::Enter(line.parse().ok()?),
            },
        };
        Some(command)
    }
}

/// Text rendering layer for a [`Game`] object.
pub struct Console {
    game: Game,

    /// Cell with the keyboard focus.
    focus: usize,
}

impl Console {
    /// Create a [`Console`] object for the provided round.
    pub fn new(game: Game) -> Self {
        Self { game, focus: 0 }
    }

    /// Read commands until the round is over, the player quits, or the input ends.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> io::Result<()> {
        self.draw(output)?;
        for line in input.lines() {
            let line: String = line?;
            if line.trim().is_empty() {
                continue;
            }
            let Some(command) = Command::parse(&line) else {
                writeln!(output, "Unknown command: {}", line.trim())?;
                continue;
            };
            debug!("Command {command:?}");

            match command {
                Command::Quit => break,
                Command::Show => self.draw(output)?,
                Command::Solution => write!(output, "{}", self.game.grid())?,
                Command::Reset => {
                    self.game.reset();
                    writeln!(output, "Round restarted")?;
                }
                Command::Enter(index) => self.enter(index, output)?,
                Command::EnterCoordinate(c) => match self.game.grid().index(c) {
                    Some(index) => self.enter(index, output)?,
                    None => writeln!(output, "Cell {c} is outside the grid")?,
                },
                Command::Move(direction) => {
                    if let Some(index) = self.game.grid().neighbor(self.focus, direction) {
                        self.enter(index, output)?;
                    }
                }
            }

            if self.game.is_completed() {
                writeln!(
                    output,
                    "All paths traced! Fails: {}",
                    self.game.fail_counts().iter().sum::<usize>()
                )?;
                break;
            }
        }
        Ok(())
    }

    /// Move the focus to the cell and report the transitions.
    fn enter<W: Write>(&mut self, index: usize, output: &mut W) -> io::Result<()> {
        if !self.game.grid().contains(index) {
            return writeln!(output, "Cell {index} is outside the grid");
        }
        self.focus = index;
        let transitions: Vec<Transition> = self.game.enter_position(index);
        for t in &transitions {
            let completeness: f64 = self.game.path_completeness(t.path).unwrap_or(0.0);
            match t.outcome {
                Outcome::PathFail => {
                    let fails: usize = self.game.fail_counts()[t.path];
                    writeln!(output, "path {}: {} (fails: {fails})", t.path, t.outcome)?
                }
                _ => writeln!(
                    output,
                    "path {}: {} ({:.0}%)",
                    t.path,
                    t.outcome,
                    completeness * 100.0
                )?,
            }
        }
        Ok(())
    }

    /// Print the board: the focus and the traced cells.
    fn draw<W: Write>(&self, output: &mut W) -> io::Result<()> {
        let width: usize = self.game.grid().width();
        for index in 0..self.game.grid().len() {
            let traced: bool = match self.game.path_at(index) {
                Some((path, step)) => self
                    .game
                    .tracker(path)
                    .and_then(|t| t.progress().cursor())
                    .is_some_and(|cursor| step <= cursor + 1),
                None => false,
            };
            let symbol: char = if index == self.focus {
                '@'
            } else if traced {
                '#'
            } else {
                '.'
            };
            write!(output, "{symbol}")?;
            if (index + 1) % width == 0 {
                writeln!(output)?;
            }
        }
        writeln!(
            output,
            "Progress: {:.0}%",
            self.game.completeness() * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use walktrace::generator::path::Path;

    fn play(input: &str) -> String {
        let game = Game::from_paths(4, 4, vec![Path::from_cells(&[0, 1, 5, 6, 10])]).unwrap();
        let mut output: Vec<u8> = Vec::new();
        Console::new(game)
            .run(Cursor::new(input), &mut output)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn parse_commands() {
        assert_eq!(Command::parse("12"), Some(Command::Enter(12)));
        assert_eq!(
            Command::parse(" 2, 3 "),
            Some(Command::EnterCoordinate(Coordinate::new(2, 3)))
        );
        assert_eq!(Command::parse("k"), Some(Command::Move(Direction::Up)));
        assert_eq!(Command::parse("quit"), Some(Command::Quit));
        assert_eq!(Command::parse("jump"), None);
        assert_eq!(Command::parse("1,x"), None);
    }

    #[test]
    fn trace_with_focus_moves() {
        let out = play("0\nright\ndown\nright\ndown\n");
        assert!(out.contains("path 0: path-start (0%)"));
        assert!(out.contains("path 0: path-continue (50%)"));
        assert!(out.contains("path 0: path-complete (100%)"));
        assert!(out.contains("All paths traced! Fails: 0"));
    }

    #[test]
    fn fail_and_reset() {
        let out = play("0\n2\nreset\nshow\nq\n");
        assert!(out.contains("path 0: path-fail (fails: 1)"));
        assert!(out.contains("Round restarted"));
        assert!(!out.contains("All paths traced"));
    }

    #[test]
    fn board_shows_traced_cells() {
        let out = play("0,0\n1,0\nshow\n");
        assert!(out.contains("#@..\n....\n"));
        assert!(out.contains("Progress: 25%"));
    }

    #[test]
    fn unknown_and_outside_cells() {
        let out = play("fly\n99\n9,9\nsolution\n");
        assert!(out.contains("Unknown command: fly"));
        assert!(out.contains("Cell 99 is outside the grid"));
        assert!(out.contains("Cell (9, 9) is outside the grid"));
        assert!(out.contains(" 1  2  0  0 \n"));
    }
}
