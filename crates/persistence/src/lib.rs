// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! JSON documents for the league scheduler.
//!
//! Two document shapes are supported:
//!
//! - **League**: `{ conferences: [{ id, name, divisions: [{ id, name, teams: [{ id, name }] }] }] }`
//! - **Calendar**: `{ year, teams: { id: name }, games: [{ kind, date, home, away }] }`
//!
//! Dates are ISO-8601 calendar dates and game kinds are `"exhibition"` or
//! `"regular"`. Loading always rebuilds domain values through their
//! checked constructors; a document can never produce a league or
//! calendar that breaks an invariant.

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

mod data_models;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use data_models::{
    CalendarData, ConferenceData, DivisionData, GameData, LeagueData, TeamData,
};
pub use error::PersistenceError;
pub use mutations::{
    calendar_to_data, league_to_data, render_calendar, save_calendar, save_league,
};
pub use queries::{
    calendar_from_data, format_date, league_from_data, load_calendar, load_league,
    parse_calendar, parse_date, parse_league,
};
