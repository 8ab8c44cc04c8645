// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Randomized game result simulation.

use crate::error::CoreError;
use league_scheduler_domain::{Calendar, Game, TeamId};
use rand::Rng;
use rand::distr::{Distribution, Uniform};
use serde::{Deserialize, Serialize};

/// Final score of a played game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameResult {
    /// The game that was played.
    pub game: Game,
    /// Points scored by the home team.
    pub home_score: u16,
    /// Points scored by the away team.
    pub away_score: u16,
    /// Overtime periods needed to break a tie.
    pub overtimes: u8,
}

impl GameResult {
    /// The winning team. Results never end tied.
    #[must_use]
    pub fn winner(&self) -> &TeamId {
        if self.home_score > self.away_score {
            self.game.home()
        } else {
            self.game.away()
        }
    }

    /// The losing team.
    #[must_use]
    pub fn loser(&self) -> &TeamId {
        if self.home_score > self.away_score {
            self.game.away()
        } else {
            self.game.home()
        }
    }
}

/// Scoring ranges used to simulate games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Arena {
    /// Fewest regulation points a team can score.
    pub min_points: u16,
    /// Most regulation points a team can score.
    pub max_points: u16,
    /// Fewest points a team can score in one overtime period.
    pub min_overtime_points: u16,
    /// Most points a team can score in one overtime period.
    pub max_overtime_points: u16,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            min_points: 85,
            max_points: 125,
            min_overtime_points: 4,
            max_overtime_points: 16,
        }
    }
}

impl Arena {
    /// Plays a single game.
    ///
    /// Tied regulation scores go to overtime periods until one side leads.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::SimulationFailed` if a scoring range is empty,
    /// or overtime cannot separate the teams.
    pub fn play<R: Rng + ?Sized>(&self, game: &Game, rng: &mut R) -> Result<GameResult, CoreError> {
        let regulation: Uniform<u16> = range(self.min_points, self.max_points)?;
        let overtime: Uniform<u16> = range(self.min_overtime_points, self.max_overtime_points)?;

        let mut home_score: u16 = regulation.sample(rng);
        let mut away_score: u16 = regulation.sample(rng);
        let mut overtimes: u8 = 0;

        while home_score == away_score {
            overtimes = overtimes.checked_add(1).ok_or_else(|| {
                CoreError::SimulationFailed(String::from("overtime never broke the tie"))
            })?;
            home_score = home_score.saturating_add(overtime.sample(rng));
            away_score = away_score.saturating_add(overtime.sample(rng));
        }

        Ok(GameResult {
            game: game.clone(),
            home_score,
            away_score,
            overtimes,
        })
    }

    /// Plays every game of the calendar in date order.
    ///
    /// Games sharing a date keep their calendar order.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by [`Arena::play`].
    pub fn play_calendar<R: Rng + ?Sized>(
        &self,
        calendar: &Calendar,
        rng: &mut R,
    ) -> Result<Vec<GameResult>, CoreError> {
        let mut games: Vec<&Game> = calendar.games().iter().collect();
        games.sort_by_key(|g| g.date());

        games.into_iter().map(|g| self.play(g, rng)).collect()
    }
}

fn range(low: u16, high: u16) -> Result<Uniform<u16>, CoreError> {
    Uniform::new_inclusive(low, high)
        .map_err(|err| CoreError::SimulationFailed(format!("invalid scoring range: {err}")))
}
