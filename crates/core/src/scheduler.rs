// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Two-phase calendar scheduling.
//!
//! Phase 1 pairs teams at random for preseason games until every team
//! reaches the preseason minimum. Phase 2 takes the matchup plan and
//! places each pair's games on mutually free season dates.
//!
//! Any calendar rejection aborts the run. The partially filled calendar
//! is dropped; callers retry with fresh random draws.

use crate::error::CoreError;
use crate::planner::{MatchupEntry, MatchupPlan, plan_matchups};
use crate::rules::ScheduleRules;
use league_scheduler_domain::{Calendar, Game, League, Opponent, Team, TeamId};
use rand::Rng;
use rand::seq::SliceRandom;
use time::Date;
use tracing::{debug, info, warn};

/// Builds league calendars according to a set of rules.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    rules: ScheduleRules,
}

impl Scheduler {
    /// Creates a scheduler with validated rules.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidRules` if the rules are inconsistent.
    pub fn new(rules: ScheduleRules) -> Result<Self, CoreError> {
        rules.validate()?;
        Ok(Self { rules })
    }

    #[must_use]
    pub const fn rules(&self) -> &ScheduleRules {
        &self.rules
    }

    /// Produces a complete calendar for the league year starting in `year`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The year cannot produce a calendar
    /// - A team cannot reach the preseason minimum
    /// - The matchup plan cannot be balanced
    /// - A pair does not share enough free season dates
    /// - The calendar rejects a game
    pub fn schedule<R: Rng + ?Sized>(
        &self,
        league: &League,
        year: i32,
        rng: &mut R,
    ) -> Result<Calendar, CoreError> {
        let mut calendar: Calendar = Calendar::new(year)?;
        info!(year, teams = league.team_count(), "Scheduling league");

        self.assign_preseason(league, &mut calendar, rng)?;
        info!(
            games = calendar.exhibitions_for(None, None).len(),
            "Preseason assigned"
        );

        let plan: MatchupPlan = plan_matchups(league, &self.rules, rng)?;
        self.assign_season(&plan, &mut calendar, rng)?;
        info!(
            games = calendar.regulars_for(None, None).len(),
            "Season assigned"
        );

        Ok(calendar)
    }

    /// Randomly pairs teams for exhibition games.
    ///
    /// Teams are visited in league order. A team below the minimum walks
    /// through a shuffled list of every other team and plays each one that
    /// is below the maximum and shares a free preseason date, stopping once
    /// it reaches the minimum. Opponents without a shared date are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the calendar rejects a game or a team ends the
    /// pass below the minimum.
    pub fn assign_preseason<R: Rng + ?Sized>(
        &self,
        league: &League,
        calendar: &mut Calendar,
        rng: &mut R,
    ) -> Result<(), CoreError> {
        let teams: Vec<&Team> = league.teams().collect();
        let minimum: usize = self.rules.preseason_min_games;
        let maximum: usize = self.rules.preseason_max_games;

        for team in &teams {
            let mut candidates: Vec<&TeamId> = teams
                .iter()
                .map(|t| t.id())
                .filter(|id| *id != team.id())
                .collect();
            candidates.shuffle(rng);

            for opponent in candidates {
                if exhibition_count(calendar, team.id()) >= minimum {
                    break;
                }
                if exhibition_count(calendar, opponent) >= maximum {
                    continue;
                }

                let mut dates: Vec<Date> =
                    calendar.available_preseason_matchup_dates(team.id(), opponent);
                dates.shuffle(rng);
                let Some(date) = dates.first().copied() else {
                    warn!(
                        team = %team.id(),
                        opponent = %opponent,
                        "No shared preseason date, skipping opponent"
                    );
                    continue;
                };

                let mut sides: [&TeamId; 2] = [team.id(), opponent];
                sides.shuffle(rng);
                let relationship: Opponent = league.relationship(team.id(), opponent)?;
                calendar.add(Game::exhibition(
                    date,
                    sides[0].clone(),
                    sides[1].clone(),
                    relationship,
                )?)?;
            }
        }

        for team in &teams {
            let games: usize = exhibition_count(calendar, team.id());
            if games < minimum {
                return Err(CoreError::PreseasonUnderfilled {
                    team: team.id().value().to_string(),
                    games,
                    minimum,
                });
            }
        }

        Ok(())
    }

    /// Places every planned game on a date both teams have free.
    ///
    /// Dates for a pair are drawn without replacement from their shared
    /// free dates. Home and away alternate across the series, starting
    /// from a randomly chosen side.
    ///
    /// # Errors
    ///
    /// Returns an error if a pair shares fewer free dates than it needs
    /// games, or the calendar rejects a game.
    pub fn assign_season<R: Rng + ?Sized>(
        &self,
        plan: &MatchupPlan,
        calendar: &mut Calendar,
        rng: &mut R,
    ) -> Result<(), CoreError> {
        for entry in plan.entries() {
            schedule_series(entry, calendar, rng)?;
        }
        Ok(())
    }
}

fn exhibition_count(calendar: &Calendar, team: &TeamId) -> usize {
    calendar.exhibitions_for(None, Some(team)).len()
}

fn schedule_series<R: Rng + ?Sized>(
    entry: &MatchupEntry,
    calendar: &mut Calendar,
    rng: &mut R,
) -> Result<(), CoreError> {
    let needed: usize = entry.games as usize;
    let mut dates: Vec<Date> = calendar.available_season_matchup_dates(&entry.first, &entry.second);
    if dates.len() < needed {
        return Err(CoreError::InsufficientDates {
            home: entry.first.value().to_string(),
            away: entry.second.value().to_string(),
            needed: entry.games,
            available: dates.len(),
        });
    }

    dates.shuffle(rng);
    dates.truncate(needed);
    dates.sort();

    let mut sides: [&TeamId; 2] = [&entry.first, &entry.second];
    sides.shuffle(rng);

    for (index, date) in dates.into_iter().enumerate() {
        let (home, away) = if index % 2 == 0 {
            (sides[0], sides[1])
        } else {
            (sides[1], sides[0])
        };
        calendar.add(Game::regular(
            date,
            home.clone(),
            away.clone(),
            entry.opponent,
        )?)?;
    }

    debug!(
        first = %entry.first,
        second = %entry.second,
        games = entry.games,
        "Series scheduled"
    );
    Ok(())
}
