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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod output;

#[cfg(test)]
mod tests;

use clap::{Args as ClapArgs, Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{Result, eyre::Context};
use league_scheduler::{
    Arena, GameResult, Record, ScheduleRules, Standings, schedule_with_retries,
};
use league_scheduler_domain::{Calendar, Game, GameKind, League, TeamId};
use league_scheduler_persistence::{
    load_calendar, load_league, parse_date, render_calendar, save_calendar,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use time::Date;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();
    init_tracing(args.log_level());

    match args.run() {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err:#}");
            std::process::exit(1);
        }
    }
    Ok(())
}

/// Logs go to stderr so calendar documents can be piped from stdout.
/// `RUST_LOG` directives take precedence over the verbosity flags.
fn init_tracing(level: LevelFilter) {
    let filter: EnvFilter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

/// League Scheduler - builds and inspects league calendars
#[derive(Debug, Parser)]
#[command(name = "league-scheduler", author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn run(self) -> Result<()> {
        self.command.run()
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build a preseason and season calendar for a league
    #[command(visible_alias = "s")]
    Schedule(ScheduleArgs),

    /// List games or free dates from a saved calendar
    #[command(visible_alias = "q")]
    Query(QueryArgs),

    /// Play a saved calendar and print the standings
    #[command(visible_alias = "sim")]
    Simulate(SimulateArgs),
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::Schedule(args) => args.run(),
            Self::Query(args) => args.run(),
            Self::Simulate(args) => args.run(),
        }
    }
}

#[derive(Debug, ClapArgs)]
struct ScheduleArgs {
    /// Path to the league document
    #[arg(short, long)]
    league: PathBuf,

    /// Where to write the calendar document. Printed to stdout if omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Year the league year starts in
    #[arg(short, long)]
    year: i32,

    /// Seed for the random source. A fresh seed is drawn and logged if omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Full scheduling attempts before giving up
    #[arg(long, default_value_t = 10)]
    attempts: u32,

    /// Path to a JSON rules document. Missing fields keep their defaults.
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Override the preseason minimum games per team
    #[arg(long)]
    preseason_min: Option<usize>,

    /// Override the preseason maximum games per team
    #[arg(long)]
    preseason_max: Option<usize>,

    /// Override the cap on bonus-pairing attempts
    #[arg(long)]
    max_balance_attempts: Option<u32>,
}

impl ScheduleArgs {
    fn run(self) -> Result<()> {
        let league: League = read_league(&self.league)?;
        let rules: ScheduleRules = self.rules()?;
        let seed: u64 = self.seed.unwrap_or_else(rand::random);
        info!(seed, "Seeding random source");

        let mut rng: StdRng = StdRng::seed_from_u64(seed);
        let calendar: Calendar =
            schedule_with_retries(&league, self.year, rules, &mut rng, self.attempts)
                .wrap_err_with(|| format!("failed to schedule the {} league year", self.year))?;

        info!(
            exhibitions = calendar.exhibitions_for(None, None).len(),
            regulars = calendar.regulars_for(None, None).len(),
            "Calendar complete"
        );

        match &self.output {
            Some(path) => save_calendar(path, &calendar, &league)
                .wrap_err_with(|| format!("failed to write calendar to {}", path.display()))?,
            None => println!("{}", render_calendar(&calendar, &league)?),
        }
        Ok(())
    }

    /// Rules from the optional document, then flag overrides.
    fn rules(&self) -> Result<ScheduleRules> {
        let mut rules: ScheduleRules = match &self.rules {
            Some(path) => {
                let json: String = std::fs::read_to_string(path)
                    .wrap_err_with(|| format!("failed to read rules {}", path.display()))?;
                serde_json::from_str(&json)
                    .wrap_err_with(|| format!("failed to parse rules {}", path.display()))?
            }
            None => ScheduleRules::default(),
        };

        if let Some(min) = self.preseason_min {
            rules.preseason_min_games = min;
        }
        if let Some(max) = self.preseason_max {
            rules.preseason_max_games = max;
        }
        if let Some(attempts) = self.max_balance_attempts {
            rules.max_balance_attempts = attempts;
        }
        Ok(rules)
    }
}

#[derive(Debug, ClapArgs)]
struct QueryArgs {
    /// Path to the league document
    #[arg(short, long)]
    league: PathBuf,

    /// Path to the calendar document
    #[arg(short, long)]
    calendar: PathBuf,

    /// Only games involving this team
    #[arg(short, long)]
    team: Option<String>,

    /// Only games on this date (YYYY-MM-DD)
    #[arg(short, long, value_parser = parse_date)]
    date: Option<Date>,

    /// Only games of this kind (exhibition or regular)
    #[arg(short, long, value_parser = GameKind::parse)]
    kind: Option<GameKind>,

    /// List the team's free dates in the window for --kind instead of games
    #[arg(long, requires_all = ["team", "kind"])]
    available: bool,
}

impl QueryArgs {
    fn run(self) -> Result<()> {
        let league: League = read_league(&self.league)?;
        let calendar: Calendar = read_calendar(&self.calendar, &league)?;
        let team: Option<TeamId> = self.team.as_deref().map(TeamId::new);

        if self.available {
            if let (Some(team), Some(kind)) = (&team, self.kind) {
                let dates: Vec<Date> = calendar.available_dates_for(kind, team);
                print!("{}", output::date_list(&dates));
            }
            return Ok(());
        }

        let games: Vec<&Game> = match self.kind {
            Some(kind) => calendar.games_for_kind(kind, self.date, team.as_ref()),
            None => calendar.games_for(self.date, team.as_ref()),
        };
        print!("{}", output::game_list(&games));
        Ok(())
    }
}

#[derive(Debug, ClapArgs)]
struct SimulateArgs {
    /// Path to the league document
    #[arg(short, long)]
    league: PathBuf,

    /// Path to the calendar document
    #[arg(short, long)]
    calendar: PathBuf,

    /// Seed for the random source. A fresh seed is drawn and logged if omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Path to a JSON arena document with scoring ranges
    #[arg(long)]
    arena: Option<PathBuf>,

    /// Only show teams of this conference
    #[arg(long, conflicts_with = "division")]
    conference: Option<String>,

    /// Only show teams of this division
    #[arg(long)]
    division: Option<String>,

    /// Print the standings as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Write every played game with its final score to this JSON file
    #[arg(long)]
    results: Option<PathBuf>,
}

impl SimulateArgs {
    fn run(self) -> Result<()> {
        let league: League = read_league(&self.league)?;
        let calendar: Calendar = read_calendar(&self.calendar, &league)?;
        let arena: Arena = match &self.arena {
            Some(path) => {
                let json: String = std::fs::read_to_string(path)
                    .wrap_err_with(|| format!("failed to read arena {}", path.display()))?;
                serde_json::from_str(&json)
                    .wrap_err_with(|| format!("failed to parse arena {}", path.display()))?
            }
            None => Arena::default(),
        };

        let seed: u64 = self.seed.unwrap_or_else(rand::random);
        info!(seed, "Seeding random source");
        let mut rng: StdRng = StdRng::seed_from_u64(seed);

        let results: Vec<GameResult> = arena
            .play_calendar(&calendar, &mut rng)
            .wrap_err("failed to simulate the calendar")?;
        let standings: Standings = Standings::from_results(&league, &results)?;
        info!(games = results.len(), "Calendar simulated");

        let table: Vec<&Record> = match (&self.conference, &self.division) {
            (Some(conference), _) => standings.conference_table(&league, conference),
            (None, Some(division)) => standings.division_table(&league, division),
            (None, None) => standings.table(),
        };
        if let Some(path) = &self.results {
            let json: String = serde_json::to_string_pretty(&results)?;
            std::fs::write(path, json)
                .wrap_err_with(|| format!("failed to write results to {}", path.display()))?;
            info!(path = %path.display(), "Saved results");
        }

        if self.json {
            println!("{}", serde_json::to_string_pretty(&table)?);
        } else {
            print!("{}", output::standings_table(&table));
        }
        Ok(())
    }
}

fn read_league(path: &Path) -> Result<League> {
    load_league(path).wrap_err_with(|| format!("failed to load league {}", path.display()))
}

fn read_calendar(path: &Path, league: &League) -> Result<Calendar> {
    load_calendar(path, league)
        .wrap_err_with(|| format!("failed to load calendar {}", path.display()))
}
