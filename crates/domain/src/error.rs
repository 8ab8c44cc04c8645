// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::calendar::WindowBound;
use crate::game::GameKind;
use time::Date;

/// Errors that can occur while building a league or a calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The league does not have the required number of conferences.
    BadConferencesSize {
        /// The required conference count.
        expected: usize,
        /// The conference count that was supplied.
        actual: usize,
    },
    /// A conference does not have the required number of divisions.
    BadDivisionsSize {
        /// The conference identifier.
        conference: String,
        /// The required division count.
        expected: usize,
        /// The division count that was supplied.
        actual: usize,
    },
    /// A division does not have the required number of teams.
    BadTeamsSize {
        /// The division identifier.
        division: String,
        /// The required team count.
        expected: usize,
        /// The team count that was supplied.
        actual: usize,
    },
    /// A conference identifier appears more than once.
    DuplicateConference(String),
    /// A division identifier appears more than once.
    DuplicateDivision(String),
    /// A team identifier appears more than once.
    DuplicateTeam(String),
    /// An identifier or display name is empty.
    InvalidIdentifier(String),
    /// The team is not part of the league.
    TeamNotFound(String),
    /// A game was built with the same team on both sides.
    SameTeam(String),
    /// A game kind tag was not recognized.
    InvalidGameKind(String),
    /// A game date falls outside the window for its kind.
    OutOfBounds {
        /// The kind of the rejected game.
        kind: GameKind,
        /// The rejected game date.
        date: Date,
        /// The side of the window that was violated.
        bound: WindowBound,
        /// The violated boundary date.
        limit: Date,
    },
    /// A team already has a game on the requested date.
    TeamAlreadyBooked {
        /// The team identifier.
        team: String,
        /// The conflicting date.
        date: Date,
    },
    /// The calendar year cannot produce valid window dates.
    InvalidYear(i32),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadConferencesSize { expected, actual } => {
                write!(
                    f,
                    "League must have exactly {expected} conferences, got {actual}"
                )
            }
            Self::BadDivisionsSize {
                conference,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Conference '{conference}' must have exactly {expected} divisions, got {actual}"
                )
            }
            Self::BadTeamsSize {
                division,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Division '{division}' must have exactly {expected} teams, got {actual}"
                )
            }
            Self::DuplicateConference(id) => write!(f, "Conference '{id}' is defined twice"),
            Self::DuplicateDivision(id) => write!(f, "Division '{id}' is defined twice"),
            Self::DuplicateTeam(id) => write!(f, "Team '{id}' is signed more than once"),
            Self::InvalidIdentifier(msg) => write!(f, "Invalid identifier: {msg}"),
            Self::TeamNotFound(id) => write!(f, "Team '{id}' not found in league"),
            Self::SameTeam(id) => write!(f, "Team '{id}' cannot play against itself"),
            Self::InvalidGameKind(tag) => write!(f, "Unrecognized game kind '{tag}'"),
            Self::OutOfBounds {
                kind,
                date,
                bound,
                limit,
            } => match bound {
                WindowBound::Start => write!(
                    f,
                    "{kind} game on {date} is before the window start {limit}"
                ),
                WindowBound::End => write!(
                    f,
                    "{kind} game on {date} is after the window end {limit}"
                ),
            },
            Self::TeamAlreadyBooked { team, date } => {
                write!(f, "Team '{team}' already has a game on {date}")
            }
            Self::InvalidYear(year) => write!(f, "Invalid calendar year: {year}"),
        }
    }
}

impl std::error::Error for DomainError {}
