// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use league_scheduler_domain::{Conference, Division, League, Team, TeamId};
use rand::SeedableRng;
use rand::rngs::StdRng;
use time::{Date, Month};

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

pub fn create_test_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn team(id: &str) -> TeamId {
    TeamId::new(id)
}

pub fn date(year: i32, month: Month, day: u8) -> Date {
    Date::from_calendar_date(year, month, day).unwrap()
}
