// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CoreError, ScheduleRules};
use league_scheduler_domain::Opponent;

#[test]
fn test_default_rules_are_valid() {
    let rules: ScheduleRules = ScheduleRules::default();

    assert!(rules.validate().is_ok());
    assert_eq!(rules.per_team_total(), 82);
}

#[test]
fn test_base_games_by_relationship() {
    let rules: ScheduleRules = ScheduleRules::default();

    assert_eq!(rules.base_games(Opponent::IntraDivisional), 4);
    assert_eq!(rules.base_games(Opponent::IntraConference), 3);
    assert_eq!(rules.base_games(Opponent::InterConference), 2);
}

#[test]
fn test_rules_reject_inverted_preseason_range() {
    let rules: ScheduleRules = ScheduleRules {
        preseason_min_games: 7,
        ..ScheduleRules::default()
    };

    assert!(matches!(rules.validate(), Err(CoreError::InvalidRules(_))));
}

#[test]
fn test_rules_reject_zero_attempts() {
    let rules: ScheduleRules = ScheduleRules {
        max_balance_attempts: 0,
        ..ScheduleRules::default()
    };

    assert!(matches!(rules.validate(), Err(CoreError::InvalidRules(_))));
}

#[test]
fn test_rules_reject_mismatched_season_target() {
    let rules: ScheduleRules = ScheduleRules {
        season_games: 80,
        ..ScheduleRules::default()
    };

    assert!(matches!(rules.validate(), Err(CoreError::InvalidRules(_))));
}

#[test]
fn test_rules_reject_odd_bonus_partners() {
    let rules: ScheduleRules = ScheduleRules {
        bonus_partners: 7,
        season_games: 83,
        ..ScheduleRules::default()
    };

    assert!(matches!(rules.validate(), Err(CoreError::InvalidRules(_))));
}

#[test]
fn test_rules_reject_too_many_bonus_partners() {
    let rules: ScheduleRules = ScheduleRules {
        bonus_partners: 12,
        season_games: 88,
        ..ScheduleRules::default()
    };

    assert!(matches!(rules.validate(), Err(CoreError::InvalidRules(_))));
}

#[test]
fn test_rules_deserialize_with_defaults() {
    let rules: ScheduleRules =
        serde_json::from_str(r#"{ "max_balance_attempts": 500 }"#).unwrap();

    assert_eq!(rules.max_balance_attempts, 500);
    assert_eq!(rules.season_games, 82);
    assert_eq!(rules.preseason_min_games, 3);
}
