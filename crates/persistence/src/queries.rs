// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reading league and calendar documents.

use crate::data_models::{CalendarData, ConferenceData, DivisionData, GameData, LeagueData};
use crate::error::PersistenceError;
use league_scheduler_domain::{
    Calendar, Conference, Division, Game, GameKind, League, Opponent, Team, TeamId,
};
use std::path::Path;
use time::Date;
use tracing::{debug, info, warn};

const DATE_FORMAT: &[time::format_description::FormatItem<'_>] =
    time::macros::format_description!("[year]-[month]-[day]");

/// Parses an ISO-8601 calendar date (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns `PersistenceError::InvalidDate` if the value does not parse.
pub fn parse_date(value: &str) -> Result<Date, PersistenceError> {
    Date::parse(value.trim(), DATE_FORMAT).map_err(|err| PersistenceError::InvalidDate {
        value: value.to_string(),
        reason: err.to_string(),
    })
}

/// Formats a date as `YYYY-MM-DD`.
///
/// # Errors
///
/// Returns `PersistenceError::InvalidDate` if the date cannot be formatted.
pub fn format_date(date: Date) -> Result<String, PersistenceError> {
    date.format(DATE_FORMAT)
        .map_err(|err| PersistenceError::InvalidDate {
            value: date.to_string(),
            reason: err.to_string(),
        })
}

fn division_from_data(data: &DivisionData) -> Result<Division, PersistenceError> {
    let teams: Vec<Team> = data
        .teams
        .iter()
        .map(|t| Team::new(&t.id, &t.name))
        .collect::<Result<_, _>>()?;
    Ok(Division::new(&data.id, &data.name, teams)?)
}

fn conference_from_data(data: &ConferenceData) -> Result<Conference, PersistenceError> {
    let divisions: Vec<Division> = data
        .divisions
        .iter()
        .map(division_from_data)
        .collect::<Result<_, _>>()?;
    Ok(Conference::new(&data.id, &data.name, divisions)?)
}

/// Builds a league from its document form, checking every invariant.
///
/// # Errors
///
/// Returns `PersistenceError::Domain` if the hierarchy is malformed.
pub fn league_from_data(data: &LeagueData) -> Result<League, PersistenceError> {
    let conferences: Vec<Conference> = data
        .conferences
        .iter()
        .map(conference_from_data)
        .collect::<Result<_, _>>()?;
    Ok(League::new(conferences)?)
}

/// Parses a league document.
///
/// # Errors
///
/// Returns an error if the JSON is malformed or the hierarchy is invalid.
pub fn parse_league(json: &str) -> Result<League, PersistenceError> {
    let data: LeagueData = serde_json::from_str(json)?;
    league_from_data(&data)
}

/// Loads a league document from disk.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content is invalid.
pub fn load_league(path: &Path) -> Result<League, PersistenceError> {
    let json: String = read(path)?;
    let league: League = parse_league(&json)?;
    info!(path = %path.display(), teams = league.team_count(), "Loaded league");
    Ok(league)
}

fn game_from_data(data: &GameData, league: &League) -> Result<Game, PersistenceError> {
    let kind: GameKind = GameKind::parse(&data.kind)?;
    let date: Date = parse_date(&data.date)?;
    let home: TeamId = TeamId::new(&data.home);
    let away: TeamId = TeamId::new(&data.away);
    let opponent: Opponent = league.relationship(&home, &away)?;

    Ok(Game::new(kind, date, home, away, opponent)?)
}

/// Rebuilds a calendar from its document form.
///
/// Every game goes back through [`Calendar::add`], so a document that
/// breaks a calendar invariant is rejected. Opponent relationships are
/// re-derived from the league.
///
/// # Errors
///
/// Returns an error if a game has an unknown kind, a malformed date, a
/// team outside the league, or is rejected by the calendar.
pub fn calendar_from_data(
    data: &CalendarData,
    league: &League,
) -> Result<Calendar, PersistenceError> {
    for id in data.teams.keys() {
        if league.team(&TeamId::new(id)).is_none() {
            warn!(team = %id, "Calendar document lists a team outside the league");
        }
    }

    let mut calendar: Calendar = Calendar::new(data.year)?;
    for game in &data.games {
        calendar.add(game_from_data(game, league)?)?;
    }

    debug!(games = calendar.games().len(), "Rebuilt calendar");
    Ok(calendar)
}

/// Parses a calendar document.
///
/// # Errors
///
/// Returns an error if the JSON is malformed or a game is invalid.
pub fn parse_calendar(json: &str, league: &League) -> Result<Calendar, PersistenceError> {
    let data: CalendarData = serde_json::from_str(json)?;
    calendar_from_data(&data, league)
}

/// Loads a calendar document from disk.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content is invalid.
pub fn load_calendar(path: &Path, league: &League) -> Result<Calendar, PersistenceError> {
    let json: String = read(path)?;
    let calendar: Calendar = parse_calendar(&json, league)?;
    info!(
        path = %path.display(),
        year = calendar.year(),
        games = calendar.games().len(),
        "Loaded calendar"
    );
    Ok(calendar)
}

fn read(path: &Path) -> Result<String, PersistenceError> {
    std::fs::read_to_string(path).map_err(|source| PersistenceError::Io {
        path: path.to_path_buf(),
        source,
    })
}
