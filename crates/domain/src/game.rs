// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Scheduled game records.

use crate::error::DomainError;
use crate::types::TeamId;
use serde::{Serialize, Serializer};
use time::Date;

const DATE_FORMAT: &[time::format_description::FormatItem<'_>] =
    time::macros::format_description!("[year]-[month]-[day]");

fn serialize_date<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
    let formatted: String = date
        .format(DATE_FORMAT)
        .map_err(serde::ser::Error::custom)?;
    serializer.serialize_str(&formatted)
}

/// The kind of a scheduled game.
///
/// Both kinds share one shape; they differ only in the calendar window
/// they are allowed to occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameKind {
    /// A preseason game that does not count in the standings.
    Exhibition,
    /// A standings-counting season game.
    Regular,
}

impl GameKind {
    /// Returns the document tag for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exhibition => "exhibition",
            Self::Regular => "regular",
        }
    }

    /// Parses a kind tag, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidGameKind` for any other tag.
    pub fn parse(tag: &str) -> Result<Self, DomainError> {
        match tag.trim().to_lowercase().as_str() {
            "exhibition" | "preseason" => Ok(Self::Exhibition),
            "regular" | "season" => Ok(Self::Regular),
            _ => Err(DomainError::InvalidGameKind(tag.to_string())),
        }
    }
}

impl std::fmt::Display for GameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How two teams are related inside the league hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Opponent {
    /// Same division.
    IntraDivisional,
    /// Same conference, different division.
    IntraConference,
    /// Different conferences.
    InterConference,
}

impl std::fmt::Display for Opponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IntraDivisional => f.write_str("intra-divisional"),
            Self::IntraConference => f.write_str("intra-conference"),
            Self::InterConference => f.write_str("inter-conference"),
        }
    }
}

/// A single scheduled game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Game {
    kind: GameKind,
    #[serde(serialize_with = "serialize_date")]
    date: Date,
    home: TeamId,
    away: TeamId,
    opponent: Opponent,
}

impl Game {
    /// Creates a new `Game`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SameTeam` if home and away are the same team.
    pub fn new(
        kind: GameKind,
        date: Date,
        home: TeamId,
        away: TeamId,
        opponent: Opponent,
    ) -> Result<Self, DomainError> {
        if home == away {
            return Err(DomainError::SameTeam(home.value().to_string()));
        }

        Ok(Self {
            kind,
            date,
            home,
            away,
            opponent,
        })
    }

    /// Creates a preseason game.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SameTeam` if home and away are the same team.
    pub fn exhibition(
        date: Date,
        home: TeamId,
        away: TeamId,
        opponent: Opponent,
    ) -> Result<Self, DomainError> {
        Self::new(GameKind::Exhibition, date, home, away, opponent)
    }

    /// Creates a season game.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SameTeam` if home and away are the same team.
    pub fn regular(
        date: Date,
        home: TeamId,
        away: TeamId,
        opponent: Opponent,
    ) -> Result<Self, DomainError> {
        Self::new(GameKind::Regular, date, home, away, opponent)
    }

    #[must_use]
    pub const fn kind(&self) -> GameKind {
        self.kind
    }

    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }

    #[must_use]
    pub const fn home(&self) -> &TeamId {
        &self.home
    }

    #[must_use]
    pub const fn away(&self) -> &TeamId {
        &self.away
    }

    #[must_use]
    pub const fn opponent(&self) -> Opponent {
        self.opponent
    }

    /// Whether the team plays in this game, home or away.
    #[must_use]
    pub fn involves(&self, team: &TeamId) -> bool {
        &self.home == team || &self.away == team
    }
}
