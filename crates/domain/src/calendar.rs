// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Constraint-checked league calendar.
//!
//! A calendar covers one league year. Its preseason and season windows
//! are derived deterministically from the year:
//!
//! - Exhibition: September 30 through October 14 of `year`
//! - Season: October 18 of `year` through April 29 of `year + 1`
//!
//! Games are appended through [`Calendar::add`], the only mutation
//! point. A game is accepted only if its date lies inside the window for
//! its kind and neither team already plays on that date.

use crate::error::DomainError;
use crate::game::{Game, GameKind};
use crate::types::TeamId;
use std::collections::BTreeSet;
use time::{Date, Month};

const EXHIBITION_START: (Month, u8) = (Month::September, 30);
const EXHIBITION_END: (Month, u8) = (Month::October, 14);
const SEASON_START: (Month, u8) = (Month::October, 18);
const SEASON_END: (Month, u8) = (Month::April, 29);

/// Which side of a date window was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowBound {
    /// The date is before the window start.
    Start,
    /// The date is after the window end.
    End,
}

/// An inclusive range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    /// The first date of the window (inclusive).
    start: Date,
    /// The last date of the window (inclusive).
    end: Date,
}

impl DateWindow {
    /// Creates a new window. `start` must not be after `end`.
    #[must_use]
    pub const fn new(start: Date, end: Date) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub const fn start(&self) -> Date {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> Date {
        self.end
    }

    /// Whether the date falls within the window.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Checks the date against both boundaries.
    ///
    /// # Returns
    ///
    /// * `None` if the date is inside the window
    /// * `Some((bound, limit))` naming the violated side otherwise
    #[must_use]
    pub fn violation(&self, date: Date) -> Option<(WindowBound, Date)> {
        if date < self.start {
            Some((WindowBound::Start, self.start))
        } else if date > self.end {
            Some((WindowBound::End, self.end))
        } else {
            None
        }
    }

    /// Every date of the window in ascending order.
    #[must_use]
    pub fn days(&self) -> Vec<Date> {
        let mut days: Vec<Date> = Vec::new();
        let mut current: Option<Date> = Some(self.start);
        while let Some(day) = current {
            if day > self.end {
                break;
            }
            days.push(day);
            current = day.next_day();
        }
        days
    }
}

/// Builds a window boundary in `year + offset`. Failures name the league
/// year, not the calendar year of the boundary.
fn boundary(year: i32, offset: i32, (month, day): (Month, u8)) -> Result<Date, DomainError> {
    year.checked_add(offset)
        .and_then(|y| Date::from_calendar_date(y, month, day).ok())
        .ok_or(DomainError::InvalidYear(year))
}

/// The calendar of scheduled games for one league year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calendar {
    year: i32,
    exhibition: DateWindow,
    season: DateWindow,
    games: Vec<Game>,
}

impl Calendar {
    /// Creates an empty calendar for the league year starting in `year`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidYear` if the window dates cannot be
    /// represented.
    pub fn new(year: i32) -> Result<Self, DomainError> {
        Ok(Self {
            year,
            exhibition: DateWindow::new(
                boundary(year, 0, EXHIBITION_START)?,
                boundary(year, 0, EXHIBITION_END)?,
            ),
            season: DateWindow::new(
                boundary(year, 0, SEASON_START)?,
                boundary(year, 1, SEASON_END)?,
            ),
            games: Vec::new(),
        })
    }

    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[must_use]
    pub const fn exhibition_start(&self) -> Date {
        self.exhibition.start
    }

    #[must_use]
    pub const fn exhibition_end(&self) -> Date {
        self.exhibition.end
    }

    #[must_use]
    pub const fn season_start(&self) -> Date {
        self.season.start
    }

    #[must_use]
    pub const fn season_end(&self) -> Date {
        self.season.end
    }

    /// Returns the date window a game of `kind` must fall in.
    #[must_use]
    pub const fn window(&self, kind: GameKind) -> DateWindow {
        match kind {
            GameKind::Exhibition => self.exhibition,
            GameKind::Regular => self.season,
        }
    }

    /// Returns every game in insertion order.
    #[must_use]
    pub fn games(&self) -> &[Game] {
        &self.games
    }

    /// Adds a game to the calendar.
    ///
    /// The game is validated in full before it is stored; a rejected game
    /// leaves the calendar untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The date is outside the window for the game kind (`OutOfBounds`)
    /// - Either team already has a game on that date (`TeamAlreadyBooked`)
    pub fn add(&mut self, game: Game) -> Result<(), DomainError> {
        if let Some((bound, limit)) = self.window(game.kind()).violation(game.date()) {
            return Err(DomainError::OutOfBounds {
                kind: game.kind(),
                date: game.date(),
                bound,
                limit,
            });
        }

        for booked in self.games.iter().filter(|g| g.date() == game.date()) {
            for team in [game.home(), game.away()] {
                if booked.involves(team) {
                    return Err(DomainError::TeamAlreadyBooked {
                        team: team.value().to_string(),
                        date: game.date(),
                    });
                }
            }
        }

        self.games.push(game);
        Ok(())
    }

    /// Filters games by optional date and optional participating team.
    ///
    /// With no filter, every game is returned.
    #[must_use]
    pub fn games_for(&self, date: Option<Date>, team: Option<&TeamId>) -> Vec<&Game> {
        self.games
            .iter()
            .filter(|g| date.is_none_or(|d| g.date() == d))
            .filter(|g| team.is_none_or(|t| g.involves(t)))
            .collect()
    }

    /// Like [`Calendar::games_for`], restricted to one game kind.
    #[must_use]
    pub fn games_for_kind(
        &self,
        kind: GameKind,
        date: Option<Date>,
        team: Option<&TeamId>,
    ) -> Vec<&Game> {
        self.games_for(date, team)
            .into_iter()
            .filter(|g| g.kind() == kind)
            .collect()
    }

    /// Exhibition games matching the filters.
    #[must_use]
    pub fn exhibitions_for(&self, date: Option<Date>, team: Option<&TeamId>) -> Vec<&Game> {
        self.games_for_kind(GameKind::Exhibition, date, team)
    }

    /// Regular games matching the filters.
    #[must_use]
    pub fn regulars_for(&self, date: Option<Date>, team: Option<&TeamId>) -> Vec<&Game> {
        self.games_for_kind(GameKind::Regular, date, team)
    }

    /// Teams with a game of any kind on the date.
    #[must_use]
    pub fn teams_playing_on(&self, date: Date) -> BTreeSet<&TeamId> {
        self.games_for(Some(date), None)
            .into_iter()
            .flat_map(|g| [g.home(), g.away()])
            .collect()
    }

    /// Dates in the window for `kind` on which the team has no game of that kind.
    #[must_use]
    pub fn available_dates_for(&self, kind: GameKind, team: &TeamId) -> Vec<Date> {
        let booked: BTreeSet<Date> = self
            .games_for_kind(kind, None, Some(team))
            .into_iter()
            .map(Game::date)
            .collect();

        self.window(kind)
            .days()
            .into_iter()
            .filter(|d| !booked.contains(d))
            .collect()
    }

    #[must_use]
    pub fn available_preseason_dates_for(&self, team: &TeamId) -> Vec<Date> {
        self.available_dates_for(GameKind::Exhibition, team)
    }

    #[must_use]
    pub fn available_season_dates_for(&self, team: &TeamId) -> Vec<Date> {
        self.available_dates_for(GameKind::Regular, team)
    }

    /// Dates in the window for `kind` on which both teams are free.
    #[must_use]
    pub fn available_matchup_dates(&self, kind: GameKind, a: &TeamId, b: &TeamId) -> Vec<Date> {
        let other: BTreeSet<Date> = self.available_dates_for(kind, b).into_iter().collect();

        self.available_dates_for(kind, a)
            .into_iter()
            .filter(|d| other.contains(d))
            .collect()
    }

    #[must_use]
    pub fn available_preseason_matchup_dates(&self, a: &TeamId, b: &TeamId) -> Vec<Date> {
        self.available_matchup_dates(GameKind::Exhibition, a, b)
    }

    #[must_use]
    pub fn available_season_matchup_dates(&self, a: &TeamId, b: &TeamId) -> Vec<Date> {
        self.available_matchup_dates(GameKind::Regular, a, b)
    }
}
