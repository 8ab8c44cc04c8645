// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Conference, Division, League, Team, TeamId};
use time::{Date, Month};

pub fn create_test_teams(prefix: &str, count: usize) -> Vec<Team> {
    (1..=count)
        .map(|n| Team::new(&format!("{prefix}{n}"), &format!("{prefix} Team {n}")).unwrap())
        .collect()
}

pub fn create_test_division(id: &str) -> Division {
    Division::new(id, &format!("{id} Division"), create_test_teams(id, 5)).unwrap()
}

pub fn create_test_conference(id: &str) -> Conference {
    let divisions: Vec<Division> = (1..=3)
        .map(|n| create_test_division(&format!("{id}{n}")))
        .collect();
    Conference::new(id, &format!("{id} Conference"), divisions).unwrap()
}

/// Two conferences (E, W), three divisions each (E1..E3, W1..W3), teams E11..W35.
pub fn create_test_league() -> League {
    League::new(vec![create_test_conference("E"), create_test_conference("W")]).unwrap()
}

pub fn team(id: &str) -> TeamId {
    TeamId::new(id)
}

pub fn date(year: i32, month: Month, day: u8) -> Date {
    Date::from_calendar_date(year, month, day).unwrap()
}
