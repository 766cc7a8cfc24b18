/*
cli_options.rs

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

//! Process command-line options.
//!
//! # Examples
//!
//! Print a random 6x6 grid with one hidden path:
//!
//! ```text
//! $ walktrace --length 9
//!  0  0  0  0  0  0
//!  0  0  6  7  8  0
//!  0  4  5  0  9  0
//!  0  3  2  1  0  0
//!  0  0  0  0  0  0
//!  0  0  0  0  0  0
//! ```
//!
//! Play a round with two paths in an 8x8 grid:
//!
//! ```text
//! $ walktrace --width 8 --height 8 --paths 2 --play
//! ```
//!
//! Measure the path generation on 100 large grids:
//!
//! ```text
//! $ walktrace --width 20 --height 20 --length 300 -c 100 -s
//! ```

use clap::Parser;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::env;
use std::error::Error;
use std::io;
use std::path::PathBuf;

use walktrace::config::GameConfig;
use walktrace::game::Game;

use crate::console::Console;

/// Retrace the random paths hidden in a grid.
#[derive(Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// JSON file with the game parameters (the other options override it)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of columns
    #[arg(long)]
    width: Option<usize>,

    /// Number of rows
    #[arg(long)]
    height: Option<usize>,

    /// Number of paths to hide in the grid
    #[arg(short, long)]
    paths: Option<usize>,

    /// Length of every path (by default, a random length in [min-length, max-length))
    #[arg(short, long)]
    length: Option<usize>,

    /// Shortest random path length
    #[arg(long)]
    min_length: Option<usize>,

    /// Longest random path length (exclusive)
    #[arg(long)]
    max_length: Option<usize>,

    /// Fraction of the grid that a path can cover
    #[arg(long)]
    fill: Option<f64>,

    /// Number of attempts for generating a path before giving up
    #[arg(long)]
    max_attempts: Option<usize>,

    /// Seed for the random number generator, to reproduce a game
    #[arg(long)]
    seed: Option<u64>,

    /// Print the game in JSON format
    #[arg(short, long, default_value_t = false, conflicts_with = "play")]
    json: bool,

    /// Play the game in the terminal
    #[arg(long, default_value_t = false)]
    play: bool,

    /// Number of games to generate
    #[arg(
        short,
        long,
        default_value_t = 1,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..),
        conflicts_with = "play"
    )]
    count: usize,

    /// Print some statistics after generating the games
    #[arg(short, long, default_value_t = false, conflicts_with = "play")]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

impl Args {
    /// Build the game parameters from the configuration file and the options.
    fn game_config(&self) -> Result<GameConfig, Box<dyn Error>> {
        let mut config: GameConfig = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };
        if let Some(v) = self.width {
            config.width = v;
        }
        if let Some(v) = self.height {
            config.height = v;
        }
        if let Some(v) = self.paths {
            config.path_count = v;
        }
        if self.length.is_some() {
            config.length = self.length;
        }
        if let Some(v) = self.min_length {
            config.min_length = v;
        }
        if let Some(v) = self.max_length {
            config.max_length = v;
        }
        if let Some(v) = self.fill {
            config.fill_fraction = v;
        }
        if let Some(v) = self.max_attempts {
            config.max_attempts = v;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Parse and process command-line options. Return the exit code.
pub fn run() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let config: GameConfig = match args.game_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            return 2;
        }
    };
    debug!("Configuration: {config:?}");

    let mut rng: StdRng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    if args.count > 1 || args.summary {
        return generate_games(&args, &config, &mut rng);
    }

    let game: Game = match Game::new_with_rng(&config, &mut rng) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };

    if args.json {
        return match serde_json::to_string_pretty(&game) {
            Ok(s) => {
                println!("{s}");
                0
            }
            Err(e) => {
                eprintln!("Error: {e}");
                1
            }
        };
    }

    if args.play {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        if let Err(e) = Console::new(game).run(stdin.lock(), &mut stdout) {
            eprintln!("Error: {e}");
            return 1;
        }
        return 0;
    }

    print!("{}", game.grid());
    0
}

/// Generate several games and print their grids and some statistics.
fn generate_games(args: &Args, config: &GameConfig, rng: &mut StdRng) -> u8 {
    let mut total: f32 = 0.0;
    let mut max: f32 = 0.0;
    let mut attempts: usize = 0;
    let mut errors: usize = 0;

    for i in 0..args.count {
        debug!("Game {i}");
        match Game::new_with_rng(config, rng) {
            Ok(game) => {
                let duration: f32 = game.generation_durations().iter().sum();
                total += duration;
                if duration > max {
                    max = duration;
                }
                attempts += game.generation_attempts().iter().sum::<usize>();
                println!("{}", game.grid());
            }
            Err(e) => {
                errors += 1;
                debug!("ERROR generating game {i}: {e}");
            }
        }
    }

    if args.summary {
        let generated: usize = args.count - errors;
        println!(
            "
        total time = {}s
      average time = {}s
          max time = {}s
average attempts = {}
            errors = {}",
            total,
            total / generated.max(1) as f32,
            max,
            attempts / generated.max(1),
            errors
        );
    }
    if errors == args.count { 1 } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_must_be_positive() {
        assert!(Args::try_parse_from(["walktrace", "-c", "0", "-s"]).is_err());
        let args = Args::try_parse_from(["walktrace", "-c", "3", "-s"]).unwrap();
        assert_eq!(args.count, 3);
        assert!(args.summary);
        assert_eq!(Args::try_parse_from(["walktrace"]).unwrap().count, 1);
    }

    #[test]
    fn options_override_defaults() {
        let args =
            Args::try_parse_from(["walktrace", "--width", "9", "-p", "2", "-l", "8"]).unwrap();
        let config = args.game_config().unwrap();
        assert_eq!(config.width, 9);
        assert_eq!(config.height, 6);
        assert_eq!(config.path_count, 2);
        assert_eq!(config.length, Some(8));
        assert!(
            Args::try_parse_from(["walktrace", "--fill", "2.0"])
                .unwrap()
                .game_config()
                .is_err()
        );
    }
}
