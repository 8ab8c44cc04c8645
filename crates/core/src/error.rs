// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use league_scheduler_domain::DomainError;

/// Errors that can occur while planning, scheduling or simulating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The bonus-game search did not converge within the attempt cap.
    CannotBalance {
        /// How many attempts were made.
        attempts: u32,
    },
    /// Two teams do not share enough free season dates.
    InsufficientDates {
        /// The first team of the pair.
        home: String,
        /// The second team of the pair.
        away: String,
        /// Games the matchup plan requires.
        needed: u32,
        /// Mutually free dates that were left.
        available: usize,
    },
    /// A team could not reach the preseason minimum.
    PreseasonUnderfilled {
        /// The team identifier.
        team: String,
        /// Exhibition games the team ended up with.
        games: usize,
        /// The required minimum.
        minimum: usize,
    },
    /// The schedule rules are inconsistent.
    InvalidRules(String),
    /// A game result could not be produced.
    SimulationFailed(String),
}

impl CoreError {
    /// Whether a fresh scheduling attempt with new random draws may succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::CannotBalance { .. }
                | Self::InsufficientDates { .. }
                | Self::PreseasonUnderfilled { .. }
                | Self::DomainViolation(
                    DomainError::TeamAlreadyBooked { .. } | DomainError::OutOfBounds { .. }
                )
        )
    }
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::CannotBalance { attempts } => {
                write!(
                    f,
                    "Could not balance bonus games after {attempts} attempts"
                )
            }
            Self::InsufficientDates {
                home,
                away,
                needed,
                available,
            } => {
                write!(
                    f,
                    "'{home}' and '{away}' need {needed} games but share only {available} free dates"
                )
            }
            Self::PreseasonUnderfilled {
                team,
                games,
                minimum,
            } => {
                write!(
                    f,
                    "Team '{team}' has {games} exhibition games, at least {minimum} required"
                )
            }
            Self::InvalidRules(msg) => write!(f, "Invalid schedule rules: {msg}"),
            Self::SimulationFailed(msg) => write!(f, "Simulation failed: {msg}"),
        }
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DomainViolation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
