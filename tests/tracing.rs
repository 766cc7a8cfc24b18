/*
tracing.rs

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

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use walktrace::config::GameConfig;
use walktrace::game::{Game, Transition};
use walktrace::generator::coordinate::Coordinate;
use walktrace::generator::path::Path;
use walktrace::tracker::Outcome;

fn tags(transitions: &[Transition]) -> Vec<&'static str> {
    transitions.iter().map(|t| t.outcome.into()).collect()
}

#[test]
fn sample_grid_round() {
    let cells: Vec<usize> = [(0, 0), (1, 0), (1, 1), (2, 1), (2, 2)]
        .iter()
        .map(|(x, y)| Coordinate::new(*x, *y).to_index(4))
        .collect();
    assert_eq!(cells, vec![0, 1, 5, 6, 10]);

    let mut game = Game::from_paths(4, 4, vec![Path::from_cells(&cells)]).unwrap();
    let mut all: Vec<&'static str> = Vec::new();
    for c in &cells {
        all.extend(tags(&game.enter_position(*c)));
    }
    assert_eq!(
        all,
        vec![
            "path-start",
            "path-continue",
            "path-continue",
            "path-continue",
            "path-complete"
        ]
    );

    let mut game = Game::from_paths(4, 4, vec![Path::from_cells(&cells)]).unwrap();
    assert_eq!(tags(&game.enter_position(0)), vec!["path-start"]);
    assert_eq!(tags(&game.enter_position(2)), vec!["path-fail"]);
}

#[test]
fn generated_round_can_be_traced() {
    let config = GameConfig {
        width: 6,
        height: 6,
        path_count: 2,
        ..GameConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(2025);
    let mut game = Game::new_with_rng(&config, &mut rng).unwrap();

    let paths: Vec<Vec<usize>> = game
        .trackers()
        .iter()
        .map(|t| t.path().get().to_vec())
        .collect();
    for (i, cells) in paths.iter().enumerate() {
        for c in cells {
            let transitions = game.enter_position(*c);
            assert!(transitions.iter().all(|t| t.path == i));
        }
        assert!(game.tracker(i).unwrap().progress().is_completed());
    }
    assert!(game.is_completed());
    assert_eq!(game.fail_counts(), vec![0, 0]);
}

proptest! {
    #[test]
    fn prop_full_trace_completes(seed in any::<u64>(), length in 2usize..20) {
        let config = GameConfig {
            width: 7,
            height: 5,
            length: Some(length),
            ..GameConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = Game::new_with_rng(&config, &mut rng).unwrap();
        let cells: Vec<usize> = game.trackers()[0].path().get().to_vec();

        let mut outcomes: Vec<Outcome> = Vec::new();
        for c in &cells {
            let transitions = game.enter_position(*c);
            prop_assert_eq!(transitions.len(), 1);
            outcomes.push(transitions[0].outcome);
            // Entering the same cell again changes nothing
            prop_assert!(game.enter_position(*c).is_empty());
        }

        prop_assert_eq!(outcomes[0], Outcome::PathStart);
        prop_assert_eq!(outcomes[length - 1], Outcome::PathComplete);
        prop_assert!(outcomes[1..length - 1].iter().all(|o| *o == Outcome::PathContinue));
        prop_assert_eq!(game.completeness(), 1.0);
    }

    #[test]
    fn prop_miss_before_start_keeps_cursor(seed in any::<u64>(), cell in 0usize..36) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = Game::new_with_rng(&GameConfig::default(), &mut rng).unwrap();
        let head = game.trackers()[0].path().first().unwrap();
        prop_assume!(cell != head);

        let transitions = game.enter_position(cell);
        prop_assert_eq!(tags(&transitions), vec!["path-fail"]);
        prop_assert_eq!(game.trackers()[0].progress().cursor(), None);
        prop_assert_eq!(game.fail_counts(), vec![0]);
    }
}
