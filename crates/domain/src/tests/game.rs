// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{date, team};
use crate::{DomainError, Game, GameKind, Opponent};
use time::Month;

#[test]
fn test_game_rejects_same_home_and_away() {
    let result: Result<Game, DomainError> = Game::regular(
        date(2023, Month::November, 1),
        team("E11"),
        team("e11"),
        Opponent::IntraDivisional,
    );

    assert_eq!(result, Err(DomainError::SameTeam(String::from("E11"))));
}

#[test]
fn test_game_accessors() {
    let game: Game = Game::exhibition(
        date(2023, Month::October, 2),
        team("E11"),
        team("W11"),
        Opponent::InterConference,
    )
    .unwrap();

    assert_eq!(game.kind(), GameKind::Exhibition);
    assert_eq!(game.date(), date(2023, Month::October, 2));
    assert_eq!(game.home(), &team("E11"));
    assert_eq!(game.away(), &team("W11"));
    assert_eq!(game.opponent(), Opponent::InterConference);
    assert!(game.involves(&team("w11")));
    assert!(!game.involves(&team("E12")));
}

#[test]
fn test_game_equality_covers_all_fields() {
    let a: Game = Game::regular(
        date(2023, Month::November, 1),
        team("E11"),
        team("E12"),
        Opponent::IntraDivisional,
    )
    .unwrap();
    let swapped: Game = Game::regular(
        date(2023, Month::November, 1),
        team("E12"),
        team("E11"),
        Opponent::IntraDivisional,
    )
    .unwrap();

    assert_eq!(a, a.clone());
    assert_ne!(a, swapped);
}

#[test]
fn test_game_kind_parse() {
    assert_eq!(GameKind::parse("Exhibition"), Ok(GameKind::Exhibition));
    assert_eq!(GameKind::parse("regular"), Ok(GameKind::Regular));
    assert_eq!(
        GameKind::parse("playoff"),
        Err(DomainError::InvalidGameKind(String::from("playoff")))
    );
    assert_eq!(GameKind::Regular.as_str(), "regular");
}

#[test]
fn test_game_serializes_with_iso_date_and_tags() {
    let game: Game = Game::regular(
        date(2023, Month::November, 2),
        team("e11"),
        team("W21"),
        Opponent::InterConference,
    )
    .unwrap();

    let value: serde_json::Value = serde_json::to_value(&game).unwrap();

    assert_eq!(
        value,
        serde_json::json!({
            "kind": "regular",
            "date": "2023-11-02",
            "home": "E11",
            "away": "W21",
            "opponent": "inter_conference",
        })
    );
}
