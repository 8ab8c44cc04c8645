// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! League hierarchy: conferences, divisions and teams.
//!
//! Every entity is constructed once with its invariants checked and is
//! never mutated afterwards.

use crate::error::DomainError;
use crate::game::Opponent;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Number of conferences in a league.
pub const CONFERENCES_PER_LEAGUE: usize = 2;

/// Number of divisions in a conference.
pub const DIVISIONS_PER_CONFERENCE: usize = 3;

/// Number of teams in a division.
pub const TEAMS_PER_DIVISION: usize = 5;

/// Represents a team identifier.
///
/// Identifiers are normalized to uppercase so that lookups and
/// uniqueness checks are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TeamId {
    value: String,
}

impl TeamId {
    /// Creates a new `TeamId`, normalized to uppercase.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.trim().to_uppercase(),
        }
    }

    /// Returns the normalized identifier.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// A team participating in the league.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    id: TeamId,
    name: String,
}

impl Team {
    /// Creates a new `Team`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidIdentifier` if the id or name is empty.
    pub fn new(id: &str, name: &str) -> Result<Self, DomainError> {
        let id: TeamId = TeamId::new(id);
        if id.value().is_empty() {
            return Err(DomainError::InvalidIdentifier(String::from(
                "Team id cannot be empty",
            )));
        }
        if name.trim().is_empty() {
            return Err(DomainError::InvalidIdentifier(format!(
                "Team '{id}' has an empty name"
            )));
        }

        Ok(Self {
            id,
            name: name.to_string(),
        })
    }

    /// Returns the team identifier.
    #[must_use]
    pub const fn id(&self) -> &TeamId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A division of exactly `TEAMS_PER_DIVISION` teams.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Division {
    id: String,
    name: String,
    teams: Vec<Team>,
}

impl Division {
    /// Creates a new `Division`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The id is empty
    /// - The team count is not `TEAMS_PER_DIVISION`
    /// - A team id appears twice
    pub fn new(id: &str, name: &str, teams: Vec<Team>) -> Result<Self, DomainError> {
        if id.trim().is_empty() {
            return Err(DomainError::InvalidIdentifier(String::from(
                "Division id cannot be empty",
            )));
        }
        if teams.len() != TEAMS_PER_DIVISION {
            return Err(DomainError::BadTeamsSize {
                division: id.to_string(),
                expected: TEAMS_PER_DIVISION,
                actual: teams.len(),
            });
        }

        let mut seen: HashSet<&TeamId> = HashSet::new();
        for team in &teams {
            if !seen.insert(team.id()) {
                return Err(DomainError::DuplicateTeam(team.id().value().to_string()));
            }
        }

        Ok(Self {
            id: id.to_string(),
            name: name.to_string(),
            teams,
        })
    }

    /// Returns the division identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the teams in declaration order.
    #[must_use]
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Whether the team plays in this division.
    #[must_use]
    pub fn contains(&self, team: &TeamId) -> bool {
        self.teams.iter().any(|t| t.id() == team)
    }
}

/// A conference of exactly `DIVISIONS_PER_CONFERENCE` divisions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conference {
    id: String,
    name: String,
    divisions: Vec<Division>,
}

impl Conference {
    /// Creates a new `Conference`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The id is empty
    /// - The division count is not `DIVISIONS_PER_CONFERENCE`
    /// - A division id appears twice
    /// - A team appears in more than one division
    pub fn new(id: &str, name: &str, divisions: Vec<Division>) -> Result<Self, DomainError> {
        if id.trim().is_empty() {
            return Err(DomainError::InvalidIdentifier(String::from(
                "Conference id cannot be empty",
            )));
        }
        if divisions.len() != DIVISIONS_PER_CONFERENCE {
            return Err(DomainError::BadDivisionsSize {
                conference: id.to_string(),
                expected: DIVISIONS_PER_CONFERENCE,
                actual: divisions.len(),
            });
        }

        let mut division_ids: HashSet<&str> = HashSet::new();
        let mut team_ids: HashSet<&TeamId> = HashSet::new();
        for division in &divisions {
            if !division_ids.insert(division.id()) {
                return Err(DomainError::DuplicateDivision(division.id().to_string()));
            }
            for team in division.teams() {
                if !team_ids.insert(team.id()) {
                    return Err(DomainError::DuplicateTeam(team.id().value().to_string()));
                }
            }
        }

        Ok(Self {
            id: id.to_string(),
            name: name.to_string(),
            divisions,
        })
    }

    /// Returns the conference identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the divisions in declaration order.
    #[must_use]
    pub fn divisions(&self) -> &[Division] {
        &self.divisions
    }

    /// Iterates every team of the conference, division by division.
    pub fn teams(&self) -> impl Iterator<Item = &Team> {
        self.divisions.iter().flat_map(|d| d.teams().iter())
    }
}

/// Position of a team inside the hierarchy: (conference index, division index).
type Placement = (usize, usize);

/// The full league: exactly `CONFERENCES_PER_LEAGUE` conferences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct League {
    conferences: Vec<Conference>,
    placements: HashMap<TeamId, Placement>,
}

impl League {
    /// Creates a new `League`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The conference count is not `CONFERENCES_PER_LEAGUE`
    /// - A conference or division id appears twice anywhere in the tree
    /// - A team id appears twice anywhere in the tree
    pub fn new(conferences: Vec<Conference>) -> Result<Self, DomainError> {
        if conferences.len() != CONFERENCES_PER_LEAGUE {
            return Err(DomainError::BadConferencesSize {
                expected: CONFERENCES_PER_LEAGUE,
                actual: conferences.len(),
            });
        }

        let mut conference_ids: HashSet<&str> = HashSet::new();
        let mut division_ids: HashSet<&str> = HashSet::new();
        let mut placements: HashMap<TeamId, Placement> = HashMap::new();

        for (c, conference) in conferences.iter().enumerate() {
            if !conference_ids.insert(conference.id()) {
                return Err(DomainError::DuplicateConference(
                    conference.id().to_string(),
                ));
            }
            for (d, division) in conference.divisions().iter().enumerate() {
                if !division_ids.insert(division.id()) {
                    return Err(DomainError::DuplicateDivision(division.id().to_string()));
                }
                for team in division.teams() {
                    if placements.insert(team.id().clone(), (c, d)).is_some() {
                        return Err(DomainError::DuplicateTeam(team.id().value().to_string()));
                    }
                }
            }
        }

        Ok(Self {
            conferences,
            placements,
        })
    }

    /// Returns the conferences in declaration order.
    #[must_use]
    pub fn conferences(&self) -> &[Conference] {
        &self.conferences
    }

    /// Iterates every team in league order.
    pub fn teams(&self) -> impl Iterator<Item = &Team> {
        self.conferences.iter().flat_map(Conference::teams)
    }

    /// Returns the number of teams in the league.
    #[must_use]
    pub fn team_count(&self) -> usize {
        self.placements.len()
    }

    /// Looks up a team by id.
    #[must_use]
    pub fn team(&self, id: &TeamId) -> Option<&Team> {
        let (c, d) = *self.placements.get(id)?;
        self.conferences[c].divisions()[d]
            .teams()
            .iter()
            .find(|t| t.id() == id)
    }

    fn placement(&self, id: &TeamId) -> Result<Placement, DomainError> {
        self.placements
            .get(id)
            .copied()
            .ok_or_else(|| DomainError::TeamNotFound(id.value().to_string()))
    }

    /// Returns the conference containing the team.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::TeamNotFound` if the team is not in the league.
    pub fn conference_of(&self, id: &TeamId) -> Result<&Conference, DomainError> {
        let (c, _) = self.placement(id)?;
        Ok(&self.conferences[c])
    }

    /// Returns the division containing the team.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::TeamNotFound` if the team is not in the league.
    pub fn division_of(&self, id: &TeamId) -> Result<&Division, DomainError> {
        let (c, d) = self.placement(id)?;
        Ok(&self.conferences[c].divisions()[d])
    }

    /// Teams in the same division, excluding the team itself.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::TeamNotFound` if the team is not in the league.
    pub fn division_opponents(&self, id: &TeamId) -> Result<Vec<&Team>, DomainError> {
        Ok(self
            .division_of(id)?
            .teams()
            .iter()
            .filter(|t| t.id() != id)
            .collect())
    }

    /// Teams in the same conference but a different division.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::TeamNotFound` if the team is not in the league.
    pub fn cross_division_opponents(&self, id: &TeamId) -> Result<Vec<&Team>, DomainError> {
        let (c, d) = self.placement(id)?;
        Ok(self.conferences[c]
            .divisions()
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != d)
            .flat_map(|(_, division)| division.teams().iter())
            .collect())
    }

    /// Teams in the other conference(s).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::TeamNotFound` if the team is not in the league.
    pub fn cross_conference_opponents(&self, id: &TeamId) -> Result<Vec<&Team>, DomainError> {
        let (c, _) = self.placement(id)?;
        Ok(self
            .conferences
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != c)
            .flat_map(|(_, conference)| conference.teams())
            .collect())
    }

    /// Classifies the relationship between two distinct teams.
    ///
    /// # Errors
    ///
    /// Returns an error if either team is unknown or both ids are equal.
    pub fn relationship(&self, a: &TeamId, b: &TeamId) -> Result<Opponent, DomainError> {
        if a == b {
            return Err(DomainError::SameTeam(a.value().to_string()));
        }
        let (ca, da) = self.placement(a)?;
        let (cb, db) = self.placement(b)?;

        Ok(if ca != cb {
            Opponent::InterConference
        } else if da != db {
            Opponent::IntraConference
        } else {
            Opponent::IntraDivisional
        })
    }
}
