// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod calendar;
mod error;
mod game;
mod types;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types
pub use calendar::{Calendar, DateWindow, WindowBound};
pub use error::DomainError;
pub use game::{Game, GameKind, Opponent};
pub use types::{
    CONFERENCES_PER_LEAGUE, Conference, DIVISIONS_PER_CONFERENCE, Division, League,
    TEAMS_PER_DIVISION, Team, TeamId,
};
pub use validation::{validate_calendar, validate_league_shape};
