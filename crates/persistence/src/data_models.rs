// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Serializable representation of a Team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamData {
    pub id: String,
    pub name: String,
}

/// Serializable representation of a Division.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivisionData {
    pub id: String,
    pub name: String,
    pub teams: Vec<TeamData>,
}

/// Serializable representation of a Conference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConferenceData {
    pub id: String,
    pub name: String,
    pub divisions: Vec<DivisionData>,
}

/// Serializable representation of the League hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueData {
    pub conferences: Vec<ConferenceData>,
}

/// Serializable representation of a Game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameData {
    /// `"exhibition"` or `"regular"`.
    pub kind: String,
    /// ISO-8601 calendar date.
    pub date: String,
    pub home: String,
    pub away: String,
}

/// Serializable representation of a Calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarData {
    pub year: i32,
    /// Team id to display name.
    pub teams: BTreeMap<String, String>,
    pub games: Vec<GameData>,
}
