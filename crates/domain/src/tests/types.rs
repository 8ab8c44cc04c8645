// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    create_test_conference, create_test_division, create_test_league, create_test_teams, team,
};
use crate::{Conference, Division, DomainError, League, Opponent, Team, TeamId};

#[test]
fn test_team_id_normalized_to_uppercase() {
    let lower: TeamId = TeamId::new("bos");
    let mixed: TeamId = TeamId::new("Bos");

    assert_eq!(lower.value(), "BOS");
    assert_eq!(lower, mixed);
}

#[test]
fn test_team_rejects_empty_id() {
    let result: Result<Team, DomainError> = Team::new("  ", "Nameless");
    assert!(matches!(result, Err(DomainError::InvalidIdentifier(_))));
}

#[test]
fn test_team_rejects_empty_name() {
    let result: Result<Team, DomainError> = Team::new("BOS", "");
    assert!(matches!(result, Err(DomainError::InvalidIdentifier(_))));
}

#[test]
fn test_division_with_four_teams_is_rejected() {
    let result: Result<Division, DomainError> =
        Division::new("E1", "Short", create_test_teams("E1", 4));

    assert_eq!(
        result,
        Err(DomainError::BadTeamsSize {
            division: String::from("E1"),
            expected: 5,
            actual: 4,
        })
    );
}

#[test]
fn test_division_rejects_duplicate_team_ids() {
    let mut teams: Vec<Team> = create_test_teams("E1", 4);
    teams.push(Team::new("e11", "Duplicate").unwrap());

    let result: Result<Division, DomainError> = Division::new("E1", "Dup", teams);
    assert_eq!(result, Err(DomainError::DuplicateTeam(String::from("E11"))));
}

#[test]
fn test_conference_requires_three_divisions() {
    let divisions: Vec<Division> = vec![create_test_division("E1"), create_test_division("E2")];

    let result: Result<Conference, DomainError> = Conference::new("E", "East", divisions);
    assert!(matches!(
        result,
        Err(DomainError::BadDivisionsSize {
            expected: 3,
            actual: 2,
            ..
        })
    ));
}

#[test]
fn test_conference_rejects_duplicate_division_ids() {
    let divisions: Vec<Division> = vec![
        create_test_division("E1"),
        create_test_division("E2"),
        create_test_division("E1"),
    ];

    let result: Result<Conference, DomainError> = Conference::new("E", "East", divisions);
    assert_eq!(result, Err(DomainError::DuplicateDivision(String::from("E1"))));
}

#[test]
fn test_conference_rejects_team_in_two_divisions() {
    let shared: Division =
        Division::new("X1", "Shared", create_test_teams("E1", 5)).unwrap();
    let divisions: Vec<Division> = vec![
        create_test_division("E1"),
        create_test_division("E2"),
        shared,
    ];

    let result: Result<Conference, DomainError> = Conference::new("E", "East", divisions);
    assert_eq!(result, Err(DomainError::DuplicateTeam(String::from("E11"))));
}

#[test]
fn test_league_requires_two_conferences() {
    let result: Result<League, DomainError> = League::new(vec![create_test_conference("E")]);
    assert_eq!(
        result,
        Err(DomainError::BadConferencesSize {
            expected: 2,
            actual: 1,
        })
    );
}

#[test]
fn test_league_rejects_duplicate_conference_ids() {
    let result: Result<League, DomainError> =
        League::new(vec![create_test_conference("E"), create_test_conference("E")]);
    assert_eq!(result, Err(DomainError::DuplicateConference(String::from("E"))));
}

#[test]
fn test_league_rejects_duplicate_division_across_conferences() {
    let east: Conference = Conference::new(
        "E",
        "East",
        vec![
            create_test_division("D1"),
            create_test_division("D2"),
            create_test_division("D3"),
        ],
    )
    .unwrap();
    let west: Conference = Conference::new(
        "W",
        "West",
        vec![
            Division::new("D1", "West 1", create_test_teams("W1", 5)).unwrap(),
            create_test_division("D5"),
            create_test_division("D6"),
        ],
    )
    .unwrap();

    let result: Result<League, DomainError> = League::new(vec![east, west]);
    assert_eq!(result, Err(DomainError::DuplicateDivision(String::from("D1"))));
}

#[test]
fn test_league_rejects_team_signed_in_both_conferences() {
    let west_divisions: Vec<Division> = vec![
        Division::new("W1", "West 1", create_test_teams("E1", 5)).unwrap(),
        create_test_division("W2"),
        create_test_division("W3"),
    ];
    let west: Conference = Conference::new("W", "West", west_divisions).unwrap();

    let result: Result<League, DomainError> =
        League::new(vec![create_test_conference("E"), west]);
    assert_eq!(result, Err(DomainError::DuplicateTeam(String::from("E11"))));
}

#[test]
fn test_league_has_thirty_teams_in_order() {
    let league: League = create_test_league();
    let ids: Vec<&str> = league.teams().map(|t| t.id().value()).collect();

    assert_eq!(league.team_count(), 30);
    assert_eq!(ids.len(), 30);
    assert_eq!(ids[0], "E11");
    assert_eq!(ids[29], "W35");
}

#[test]
fn test_league_lookups() {
    let league: League = create_test_league();
    let id: TeamId = team("e23");

    assert_eq!(league.team(&id).unwrap().name(), "E2 Team 3");
    assert_eq!(league.conference_of(&id).unwrap().id(), "E");
    assert_eq!(league.division_of(&id).unwrap().id(), "E2");
    assert!(league.team(&team("ZZZ")).is_none());
    assert_eq!(
        league.division_of(&team("ZZZ")),
        Err(DomainError::TeamNotFound(String::from("ZZZ")))
    );
}

#[test]
fn test_league_opponent_groups() {
    let league: League = create_test_league();
    let id: TeamId = team("E23");

    let division: Vec<&Team> = league.division_opponents(&id).unwrap();
    let cross_division: Vec<&Team> = league.cross_division_opponents(&id).unwrap();
    let cross_conference: Vec<&Team> = league.cross_conference_opponents(&id).unwrap();

    assert_eq!(division.len(), 4);
    assert!(division.iter().all(|t| t.id() != &id));
    assert_eq!(cross_division.len(), 10);
    assert!(cross_division.iter().all(|t| !t.id().value().starts_with("E2")));
    assert_eq!(cross_conference.len(), 15);
    assert!(cross_conference.iter().all(|t| t.id().value().starts_with('W')));
}

#[test]
fn test_league_relationship() {
    let league: League = create_test_league();

    assert_eq!(
        league.relationship(&team("E11"), &team("E12")),
        Ok(Opponent::IntraDivisional)
    );
    assert_eq!(
        league.relationship(&team("E11"), &team("E31")),
        Ok(Opponent::IntraConference)
    );
    assert_eq!(
        league.relationship(&team("E11"), &team("W11")),
        Ok(Opponent::InterConference)
    );
    assert_eq!(
        league.relationship(&team("E11"), &team("e11")),
        Err(DomainError::SameTeam(String::from("E11")))
    );
}
