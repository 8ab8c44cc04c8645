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

mod arena;
mod error;
mod planner;
mod rules;
mod scheduler;
mod standings;

#[cfg(test)]
mod tests;

use league_scheduler_domain::{Calendar, League};
use rand::Rng;
use tracing::warn;

// Re-export public types and functions
pub use arena::{Arena, GameResult};
pub use error::CoreError;
pub use planner::{MatchupEntry, MatchupPlan, Pairing, balance_bonus_pairs, plan_matchups};
pub use rules::ScheduleRules;
pub use scheduler::Scheduler;
pub use standings::{Record, Standings};

/// Schedules a league once with the given rules.
///
/// # Arguments
///
/// * `league` - The league to schedule
/// * `year` - The year the league year starts in
/// * `rules` - Game counts and limits
/// * `rng` - Random source for every randomized choice
///
/// # Errors
///
/// Returns an error if the rules are invalid or any scheduling step fails.
pub fn schedule<R: Rng + ?Sized>(
    league: &League,
    year: i32,
    rules: ScheduleRules,
    rng: &mut R,
) -> Result<Calendar, CoreError> {
    Scheduler::new(rules)?.schedule(league, year, rng)
}

/// Schedules a league, restarting from an empty calendar after a
/// retryable failure.
///
/// Each attempt continues the same random stream, so every attempt
/// draws fresh choices while the whole sequence stays reproducible for
/// a seeded source.
///
/// # Arguments
///
/// * `league` - The league to schedule
/// * `year` - The year the league year starts in
/// * `rules` - Game counts and limits
/// * `rng` - Random source for every randomized choice
/// * `attempts` - Maximum number of full scheduling attempts (at least 1)
///
/// # Errors
///
/// Returns the first non-retryable error, or the last error once all
/// attempts are used.
pub fn schedule_with_retries<R: Rng + ?Sized>(
    league: &League,
    year: i32,
    rules: ScheduleRules,
    rng: &mut R,
    attempts: u32,
) -> Result<Calendar, CoreError> {
    let scheduler: Scheduler = Scheduler::new(rules)?;
    let attempts: u32 = attempts.max(1);

    let mut attempt: u32 = 1;
    loop {
        match scheduler.schedule(league, year, rng) {
            Ok(calendar) => return Ok(calendar),
            Err(err) if err.is_retryable() && attempt < attempts => {
                warn!(attempt, error = %err, "Scheduling attempt failed, retrying");
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}
