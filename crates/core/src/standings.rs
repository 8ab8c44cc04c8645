// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Win/loss bookkeeping over played regular games.

use crate::arena::GameResult;
use crate::error::CoreError;
use league_scheduler_domain::{DomainError, GameKind, League, TeamId};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// One team's season record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    /// The team identifier.
    pub team: TeamId,
    /// Regular games won.
    pub wins: u32,
    /// Regular games lost.
    pub losses: u32,
    /// Regular games won at home.
    pub home_wins: u32,
    /// Points scored minus points allowed.
    pub point_differential: i64,
}

impl Record {
    fn new(team: TeamId) -> Self {
        Self {
            team,
            wins: 0,
            losses: 0,
            home_wins: 0,
            point_differential: 0,
        }
    }

    /// Regular games played.
    #[must_use]
    pub const fn games(&self) -> u32 {
        self.wins + self.losses
    }

    /// Fraction of games won, `0.0` before any game is played.
    #[must_use]
    pub fn win_percentage(&self) -> f64 {
        if self.games() == 0 {
            return 0.0;
        }
        f64::from(self.wins) / f64::from(self.games())
    }

    /// Standings order: win percentage, then wins, then point
    /// differential, then team id.
    fn rank(&self, other: &Self) -> Ordering {
        other
            .win_percentage()
            .total_cmp(&self.win_percentage())
            .then_with(|| other.wins.cmp(&self.wins))
            .then_with(|| other.point_differential.cmp(&self.point_differential))
            .then_with(|| self.team.cmp(&other.team))
    }
}

/// Records for every team of a league.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standings {
    records: BTreeMap<TeamId, Record>,
}

impl Standings {
    /// Tallies regular-game results. Exhibition results are ignored.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::TeamNotFound` if a result names a team that is
    /// not in the league.
    pub fn from_results(league: &League, results: &[GameResult]) -> Result<Self, CoreError> {
        let mut records: BTreeMap<TeamId, Record> = league
            .teams()
            .map(|t| (t.id().clone(), Record::new(t.id().clone())))
            .collect();

        for result in results
            .iter()
            .filter(|r| r.game.kind() == GameKind::Regular)
        {
            let margin: i64 = i64::from(result.home_score) - i64::from(result.away_score);
            let home_won: bool = margin > 0;

            let home: &mut Record = records
                .get_mut(result.game.home())
                .ok_or_else(|| DomainError::TeamNotFound(result.game.home().to_string()))?;
            home.point_differential += margin;
            if home_won {
                home.wins += 1;
                home.home_wins += 1;
            } else {
                home.losses += 1;
            }

            let away: &mut Record = records
                .get_mut(result.game.away())
                .ok_or_else(|| DomainError::TeamNotFound(result.game.away().to_string()))?;
            away.point_differential -= margin;
            if home_won {
                away.losses += 1;
            } else {
                away.wins += 1;
            }
        }

        Ok(Self { records })
    }

    /// Returns a team's record.
    #[must_use]
    pub fn record(&self, team: &TeamId) -> Option<&Record> {
        self.records.get(team)
    }

    /// League-wide table, best record first.
    #[must_use]
    pub fn table(&self) -> Vec<&Record> {
        let mut table: Vec<&Record> = self.records.values().collect();
        table.sort_by(|a, b| a.rank(b));
        table
    }

    /// Table restricted to one conference. Unknown ids give an empty table.
    #[must_use]
    pub fn conference_table(&self, league: &League, conference: &str) -> Vec<&Record> {
        self.table()
            .into_iter()
            .filter(|r| {
                league
                    .conference_of(&r.team)
                    .is_ok_and(|c| c.id() == conference)
            })
            .collect()
    }

    /// Table restricted to one division. Unknown ids give an empty table.
    #[must_use]
    pub fn division_table(&self, league: &League, division: &str) -> Vec<&Record> {
        self.table()
            .into_iter()
            .filter(|r| {
                league
                    .division_of(&r.team)
                    .is_ok_and(|d| d.id() == division)
            })
            .collect()
    }
}
