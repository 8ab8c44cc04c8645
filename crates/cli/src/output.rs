// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text rendering for terminal output.

use league_scheduler::Record;
use league_scheduler_domain::Game;
use time::Date;

/// One line per game: date, kind, away @ home, relationship.
pub fn game_list(games: &[&Game]) -> String {
    games
        .iter()
        .map(|game| {
            format!(
                "{}  {:<10}  {:>5} @ {:<5}  {}\n",
                game.date(),
                game.kind().as_str(),
                game.away().value(),
                game.home().value(),
                game.opponent()
            )
        })
        .collect()
}

/// One date per line.
pub fn date_list(dates: &[Date]) -> String {
    dates.iter().map(|date| format!("{date}\n")).collect()
}

/// Ranked standings with a header row.
pub fn standings_table(records: &[&Record]) -> String {
    let header: String = format!(
        "{:>3}  {:<5}  {:>3}  {:>3}  {:>5}  {:>6}\n",
        "#", "Team", "W", "L", "Pct", "Diff"
    );
    let rows = records.iter().enumerate().map(|(index, record)| {
        format!(
            "{:>3}  {:<5}  {:>3}  {:>3}  {:>5.3}  {:>+6}\n",
            index + 1,
            record.team.value(),
            record.wins,
            record.losses,
            record.win_percentage(),
            record.point_differential
        )
    });

    std::iter::once(header).chain(rows).collect()
}
