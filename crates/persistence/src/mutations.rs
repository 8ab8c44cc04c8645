// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Writing league and calendar documents.

use crate::data_models::{
    CalendarData, ConferenceData, DivisionData, GameData, LeagueData, TeamData,
};
use crate::error::PersistenceError;
use crate::queries::format_date;
use league_scheduler_domain::{Calendar, League};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

/// Converts a league to its document form.
#[must_use]
pub fn league_to_data(league: &League) -> LeagueData {
    LeagueData {
        conferences: league
            .conferences()
            .iter()
            .map(|c| ConferenceData {
                id: c.id().to_string(),
                name: c.name().to_string(),
                divisions: c
                    .divisions()
                    .iter()
                    .map(|d| DivisionData {
                        id: d.id().to_string(),
                        name: d.name().to_string(),
                        teams: d
                            .teams()
                            .iter()
                            .map(|t| TeamData {
                                id: t.id().value().to_string(),
                                name: t.name().to_string(),
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect(),
    }
}

/// Converts a calendar to its document form.
///
/// The team dictionary lists every team of the league. Games keep their
/// calendar insertion order.
///
/// # Errors
///
/// Returns `PersistenceError::InvalidDate` if a date cannot be formatted.
pub fn calendar_to_data(
    calendar: &Calendar,
    league: &League,
) -> Result<CalendarData, PersistenceError> {
    let teams: BTreeMap<String, String> = league
        .teams()
        .map(|t| (t.id().value().to_string(), t.name().to_string()))
        .collect();

    let games: Vec<GameData> = calendar
        .games()
        .iter()
        .map(|g| {
            Ok(GameData {
                kind: g.kind().as_str().to_string(),
                date: format_date(g.date())?,
                home: g.home().value().to_string(),
                away: g.away().value().to_string(),
            })
        })
        .collect::<Result<_, PersistenceError>>()?;

    Ok(CalendarData {
        year: calendar.year(),
        teams,
        games,
    })
}

/// Renders a calendar document as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if a date cannot be formatted or serialization fails.
pub fn render_calendar(calendar: &Calendar, league: &League) -> Result<String, PersistenceError> {
    Ok(serde_json::to_string_pretty(&calendar_to_data(
        calendar, league,
    )?)?)
}

/// Writes a calendar document to disk, replacing any existing file.
///
/// # Errors
///
/// Returns an error if rendering fails or the file cannot be written.
pub fn save_calendar(
    path: &Path,
    calendar: &Calendar,
    league: &League,
) -> Result<(), PersistenceError> {
    let json: String = render_calendar(calendar, league)?;
    write(path, &json)?;
    info!(
        path = %path.display(),
        games = calendar.games().len(),
        "Saved calendar"
    );
    Ok(())
}

/// Writes a league document to disk, replacing any existing file.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn save_league(path: &Path, league: &League) -> Result<(), PersistenceError> {
    let json: String = serde_json::to_string_pretty(&league_to_data(league))?;
    write(path, &json)?;
    info!(path = %path.display(), "Saved league");
    Ok(())
}

fn write(path: &Path, json: &str) -> Result<(), PersistenceError> {
    std::fs::write(path, json).map_err(|source| PersistenceError::Io {
        path: path.to_path_buf(),
        source,
    })
}
