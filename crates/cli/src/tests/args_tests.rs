// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::parse_args;
use crate::{Args, Command};
use clap::Parser;
use league_scheduler::ScheduleRules;
use league_scheduler_domain::GameKind;
use std::path::PathBuf;
use time::{Date, Month};

#[test]
fn test_schedule_args_defaults() {
    let args: Args = parse_args(&["schedule", "--league", "league.json", "--year", "2023"]);

    let Command::Schedule(schedule) = args.command else {
        panic!("expected the schedule command");
    };
    assert_eq!(schedule.league, PathBuf::from("league.json"));
    assert_eq!(schedule.year, 2023);
    assert_eq!(schedule.attempts, 10);
    assert!(schedule.output.is_none());
    assert!(schedule.seed.is_none());
    assert_eq!(schedule.rules().unwrap(), ScheduleRules::default());
}

#[test]
fn test_schedule_flags_override_rules() {
    let args: Args = parse_args(&[
        "s",
        "-l",
        "league.json",
        "-y",
        "2023",
        "--preseason-min",
        "2",
        "--preseason-max",
        "4",
        "--max-balance-attempts",
        "50",
    ]);

    let Command::Schedule(schedule) = args.command else {
        panic!("expected the schedule command");
    };
    let rules: ScheduleRules = schedule.rules().unwrap();
    assert_eq!(rules.preseason_min_games, 2);
    assert_eq!(rules.preseason_max_games, 4);
    assert_eq!(rules.max_balance_attempts, 50);
    assert_eq!(rules.season_games, 82);
}

#[test]
fn test_rules_document_keeps_missing_fields_at_default() {
    let dir: tempfile::TempDir = tempfile::tempdir().unwrap();
    let path: PathBuf = dir.path().join("rules.json");
    std::fs::write(&path, r#"{ "preseason_max_games": 5 }"#).unwrap();

    let args: Args = parse_args(&[
        "schedule",
        "--league",
        "league.json",
        "--year",
        "2023",
        "--rules",
        path.to_str().unwrap(),
        "--preseason-min",
        "4",
    ]);

    let Command::Schedule(schedule) = args.command else {
        panic!("expected the schedule command");
    };
    let rules: ScheduleRules = schedule.rules().unwrap();
    assert_eq!(rules.preseason_max_games, 5);
    assert_eq!(rules.preseason_min_games, 4);
    assert_eq!(rules.bonus_partners, 6);
}

#[test]
fn test_query_parses_date_and_kind_alias() {
    let args: Args = parse_args(&[
        "query",
        "--league",
        "league.json",
        "--calendar",
        "calendar.json",
        "--date",
        "2023-10-01",
        "--kind",
        "Preseason",
    ]);

    let Command::Query(query) = args.command else {
        panic!("expected the query command");
    };
    assert_eq!(
        query.date,
        Some(Date::from_calendar_date(2023, Month::October, 1).unwrap())
    );
    assert_eq!(query.kind, Some(GameKind::Exhibition));
}

#[test]
fn test_query_rejects_malformed_date() {
    let result = Args::try_parse_from([
        "league-scheduler",
        "query",
        "--league",
        "league.json",
        "--calendar",
        "calendar.json",
        "--date",
        "10/01/2023",
    ]);

    assert!(result.is_err());
}

#[test]
fn test_query_available_requires_team_and_kind() {
    let result = Args::try_parse_from([
        "league-scheduler",
        "query",
        "--league",
        "league.json",
        "--calendar",
        "calendar.json",
        "--team",
        "E11",
        "--available",
    ]);

    assert!(result.is_err());
}

#[test]
fn test_simulate_conference_and_division_conflict() {
    let result = Args::try_parse_from([
        "league-scheduler",
        "simulate",
        "--league",
        "league.json",
        "--calendar",
        "calendar.json",
        "--conference",
        "E",
        "--division",
        "E1",
    ]);

    assert!(result.is_err());
}

#[test]
fn test_verbosity_flags_adjust_log_level() {
    let quiet: Args = parse_args(&["-q", "schedule", "-l", "league.json", "-y", "2023"]);
    let loud: Args = parse_args(&["-vv", "schedule", "-l", "league.json", "-y", "2023"]);

    assert!(quiet.log_level() < loud.log_level());
}
