// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tunable scheduling constants.

use crate::error::CoreError;
use league_scheduler_domain::{
    CONFERENCES_PER_LEAGUE, DIVISIONS_PER_CONFERENCE, Opponent, TEAMS_PER_DIVISION,
};
use serde::{Deserialize, Serialize};

/// Game counts and limits used by the matchup planner and scheduler.
///
/// The defaults produce an 82-game season for a league of
/// 2 conferences x 3 divisions x 5 teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleRules {
    /// Games against each division opponent.
    pub intra_division_games: u32,
    /// Base games against each same-conference, other-division opponent.
    pub intra_conference_games: u32,
    /// Games against each other-conference opponent.
    pub inter_conference_games: u32,
    /// Cross-division opponents each team plays one extra game against.
    pub bonus_partners: usize,
    /// Cap on randomized bonus-pairing attempts.
    pub max_balance_attempts: u32,
    /// Exhibition games every team must reach.
    pub preseason_min_games: usize,
    /// Exhibition games no team may exceed.
    pub preseason_max_games: usize,
    /// Regular games every team plays.
    pub season_games: u32,
}

impl Default for ScheduleRules {
    fn default() -> Self {
        Self {
            intra_division_games: 4,
            intra_conference_games: 3,
            inter_conference_games: 2,
            bonus_partners: 6,
            max_balance_attempts: 100_000,
            preseason_min_games: 3,
            preseason_max_games: 6,
            season_games: 82,
        }
    }
}

impl ScheduleRules {
    /// Base number of games for a relationship, before bonus games.
    #[must_use]
    pub const fn base_games(&self, opponent: Opponent) -> u32 {
        match opponent {
            Opponent::IntraDivisional => self.intra_division_games,
            Opponent::IntraConference => self.intra_conference_games,
            Opponent::InterConference => self.inter_conference_games,
        }
    }

    /// Checks that the rules are consistent with the fixed league shape.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidRules` if:
    /// - The preseason minimum exceeds the maximum, or the maximum is zero
    /// - The attempt cap is zero
    /// - Teams need more bonus partners than they have cross-division opponents
    /// - The per-team total does not add up to `season_games`
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.preseason_max_games == 0 || self.preseason_min_games > self.preseason_max_games {
            return Err(CoreError::InvalidRules(format!(
                "preseason range {}..={} is empty",
                self.preseason_min_games, self.preseason_max_games
            )));
        }
        if self.max_balance_attempts == 0 {
            return Err(CoreError::InvalidRules(String::from(
                "max_balance_attempts must be greater than 0",
            )));
        }

        let cross_division: usize = (DIVISIONS_PER_CONFERENCE - 1) * TEAMS_PER_DIVISION;
        if self.bonus_partners > cross_division {
            return Err(CoreError::InvalidRules(format!(
                "bonus_partners {} exceeds the {cross_division} cross-division opponents",
                self.bonus_partners
            )));
        }

        // each bonus game is counted by both partners
        if (DIVISIONS_PER_CONFERENCE * TEAMS_PER_DIVISION * self.bonus_partners) % 2 != 0 {
            return Err(CoreError::InvalidRules(format!(
                "bonus_partners {} cannot be paired evenly within a conference",
                self.bonus_partners
            )));
        }

        let total: u64 = self.per_team_total();
        if total != u64::from(self.season_games) {
            return Err(CoreError::InvalidRules(format!(
                "game counts add up to {total} per team, expected {}",
                self.season_games
            )));
        }

        Ok(())
    }

    /// Regular games per team implied by the counts and the league shape.
    #[must_use]
    pub fn per_team_total(&self) -> u64 {
        let division: u64 = (TEAMS_PER_DIVISION - 1) as u64 * u64::from(self.intra_division_games);
        let conference: u64 = ((DIVISIONS_PER_CONFERENCE - 1) * TEAMS_PER_DIVISION) as u64
            * u64::from(self.intra_conference_games);
        let league: u64 = ((CONFERENCES_PER_LEAGUE - 1)
            * DIVISIONS_PER_CONFERENCE
            * TEAMS_PER_DIVISION) as u64
            * u64::from(self.inter_conference_games);

        division + conference + league + self.bonus_partners as u64
    }
}
