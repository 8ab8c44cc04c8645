// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::calendar::Calendar;
use crate::error::DomainError;
use crate::game::Game;
use crate::types::{
    CONFERENCES_PER_LEAGUE, DIVISIONS_PER_CONFERENCE, League, TEAMS_PER_DIVISION, TeamId,
};
use std::collections::HashSet;
use time::Date;

/// Validates that a league has the fixed conference/division/team shape.
///
/// League construction already enforces this; the check is repeated by
/// consumers whose algorithms depend on the exact shape.
///
/// # Arguments
///
/// * `league` - The league to validate
///
/// # Returns
///
/// * `Ok(())` if every level has the expected size
/// * `Err(DomainError)` naming the first level with the wrong size
///
/// # Errors
///
/// Returns `BadConferencesSize`, `BadDivisionsSize` or `BadTeamsSize`.
pub fn validate_league_shape(league: &League) -> Result<(), DomainError> {
    if league.conferences().len() != CONFERENCES_PER_LEAGUE {
        return Err(DomainError::BadConferencesSize {
            expected: CONFERENCES_PER_LEAGUE,
            actual: league.conferences().len(),
        });
    }

    for conference in league.conferences() {
        if conference.divisions().len() != DIVISIONS_PER_CONFERENCE {
            return Err(DomainError::BadDivisionsSize {
                conference: conference.id().to_string(),
                expected: DIVISIONS_PER_CONFERENCE,
                actual: conference.divisions().len(),
            });
        }
        for division in conference.divisions() {
            if division.teams().len() != TEAMS_PER_DIVISION {
                return Err(DomainError::BadTeamsSize {
                    division: division.id().to_string(),
                    expected: TEAMS_PER_DIVISION,
                    actual: division.teams().len(),
                });
            }
        }
    }

    Ok(())
}

/// Re-checks every calendar invariant over the stored games.
///
/// This function is pure and has no side effects. It is meant for
/// calendars that were assembled elsewhere and for test assertions.
///
/// # Errors
///
/// Returns an error if:
/// - A game has the same team on both sides
/// - A game falls outside the window for its kind
/// - A team plays twice on one date
pub fn validate_calendar(calendar: &Calendar) -> Result<(), DomainError> {
    let mut bookings: HashSet<(&TeamId, Date)> = HashSet::new();

    for game in calendar.games() {
        validate_game_bounds(calendar, game)?;

        if game.home() == game.away() {
            return Err(DomainError::SameTeam(game.home().value().to_string()));
        }

        for team in [game.home(), game.away()] {
            if !bookings.insert((team, game.date())) {
                return Err(DomainError::TeamAlreadyBooked {
                    team: team.value().to_string(),
                    date: game.date(),
                });
            }
        }
    }

    Ok(())
}

fn validate_game_bounds(calendar: &Calendar, game: &Game) -> Result<(), DomainError> {
    match calendar.window(game.kind()).violation(game.date()) {
        Some((bound, limit)) => Err(DomainError::OutOfBounds {
            kind: game.kind(),
            date: game.date(),
            bound,
            limit,
        }),
        None => Ok(()),
    }
}
