// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Args;
use clap::Parser;
use league_scheduler_domain::{Conference, Division, League, Team};
use league_scheduler_persistence::save_league;
use std::path::{Path, PathBuf};

pub fn create_test_division(id: &str) -> Division {
    let teams: Vec<Team> = (1..=5)
        .map(|n| Team::new(&format!("{id}{n}"), &format!("{id} Team {n}")).unwrap())
        .collect();
    Division::new(id, &format!("{id} Division"), teams).unwrap()
}

pub fn create_test_conference(id: &str) -> Conference {
    let divisions: Vec<Division> = (1..=3)
        .map(|n| create_test_division(&format!("{id}{n}")))
        .collect();
    Conference::new(id, &format!("{id} Conference"), divisions).unwrap()
}

/// Conferences E and W, divisions E1..E3 and W1..W3, teams E11..W35.
pub fn create_test_league() -> League {
    League::new(vec![create_test_conference("E"), create_test_conference("W")]).unwrap()
}

/// Writes the test league into `dir` and returns its path.
pub fn write_test_league(dir: &Path) -> PathBuf {
    let path: PathBuf = dir.join("league.json");
    save_league(&path, &create_test_league()).unwrap();
    path
}

pub fn parse_args(args: &[&str]) -> Args {
    Args::try_parse_from(std::iter::once("league-scheduler").chain(args.iter().copied()))
        .unwrap()
}
