// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use league_scheduler_domain::{Calendar, Conference, Division, Game, League, Team, TeamId};
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

pub fn team(id: &str) -> TeamId {
    TeamId::new(id)
}

pub fn date(year: i32, month: Month, day: u8) -> Date {
    Date::from_calendar_date(year, month, day).unwrap()
}

/// A 2023 calendar with one exhibition and two regular games.
pub fn create_test_calendar(league: &League) -> Calendar {
    let mut calendar: Calendar = Calendar::new(2023).unwrap();
    let games: [(bool, Date, &str, &str); 3] = [
        (false, date(2023, Month::October, 1), "E11", "W11"),
        (true, date(2023, Month::November, 2), "E11", "E12"),
        (true, date(2024, Month::January, 15), "W21", "E31"),
    ];

    for (regular, day, home, away) in games {
        let (home, away) = (team(home), team(away));
        let opponent = league.relationship(&home, &away).unwrap();
        let game: Game = if regular {
            Game::regular(day, home, away, opponent).unwrap()
        } else {
            Game::exhibition(day, home, away, opponent).unwrap()
        };
        calendar.add(game).unwrap();
    }
    calendar
}
