// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Regular-season matchup planning.
//!
//! Every pair of teams gets a base game count from its relationship
//! (same division, same conference, other conference). On top of that,
//! each team plays one extra game against exactly `bonus_partners` of its
//! cross-division conference opponents, which brings every team to the
//! season target.
//!
//! No closed-form construction is used for the bonus games. Each attempt
//! shuffles every team's cross-division opponents and greedily pairs teams
//! that both still have spare capacity; an attempt is kept only if every
//! team ends with exactly `bonus_partners` partners. For the reference
//! league shape roughly one attempt in a few hundred succeeds, so the
//! attempt cap is a circuit breaker rather than an expected outcome.

use crate::error::CoreError;
use crate::rules::ScheduleRules;
use league_scheduler_domain::{League, Opponent, TeamId, validate_league_shape};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::{debug, info};

/// An unordered team pair, stored with the smaller id first.
pub type Pairing = (TeamId, TeamId);

fn pairing(a: &TeamId, b: &TeamId) -> Pairing {
    if a <= b {
        (a.clone(), b.clone())
    } else {
        (b.clone(), a.clone())
    }
}

/// Required regular-season games between one pair of teams.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchupEntry {
    /// The team with the smaller id.
    pub first: TeamId,
    /// The team with the larger id.
    pub second: TeamId,
    /// How the two teams are related.
    pub opponent: Opponent,
    /// Total games the pair must play.
    pub games: u32,
    /// Whether the count includes a bonus game.
    pub bonus: bool,
}

/// The finalized mapping from team pair to required game count.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchupPlan {
    entries: BTreeMap<Pairing, MatchupEntry>,
}

impl MatchupPlan {
    /// Returns the entry for a pair, in either order.
    #[must_use]
    pub fn entry(&self, a: &TeamId, b: &TeamId) -> Option<&MatchupEntry> {
        self.entries.get(&pairing(a, b))
    }

    /// Games the two teams must play against each other.
    #[must_use]
    pub fn games_between(&self, a: &TeamId, b: &TeamId) -> u32 {
        self.entry(a, b).map_or(0, |e| e.games)
    }

    /// Every entry, ordered by pair.
    pub fn entries(&self) -> impl Iterator<Item = &MatchupEntry> {
        self.entries.values()
    }

    /// Entries that received a bonus game.
    pub fn bonus_pairs(&self) -> impl Iterator<Item = &MatchupEntry> {
        self.entries.values().filter(|e| e.bonus)
    }

    /// Total regular games planned for the team.
    #[must_use]
    pub fn total_for(&self, team: &TeamId) -> u32 {
        self.entries
            .values()
            .filter(|e| &e.first == team || &e.second == team)
            .map(|e| e.games)
            .sum()
    }

    /// Number of team pairs in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builds the full matchup plan for a league.
///
/// # Arguments
///
/// * `league` - The league to plan for
/// * `rules` - Game counts and the bonus attempt cap
/// * `rng` - Random source for the bonus-game search
///
/// # Errors
///
/// Returns an error if:
/// - The league does not have the fixed shape
/// - The bonus-game search exceeds `rules.max_balance_attempts`
pub fn plan_matchups<R: Rng + ?Sized>(
    league: &League,
    rules: &ScheduleRules,
    rng: &mut R,
) -> Result<MatchupPlan, CoreError> {
    validate_league_shape(league)?;

    let mut entries: BTreeMap<Pairing, MatchupEntry> = BTreeMap::new();
    let teams: Vec<&TeamId> = league.teams().map(|t| t.id()).collect();
    for (index, a) in teams.iter().enumerate() {
        for b in &teams[index + 1..] {
            let opponent: Opponent = league.relationship(a, b)?;
            let (first, second) = pairing(a, b);
            entries.insert(
                (first.clone(), second.clone()),
                MatchupEntry {
                    first,
                    second,
                    opponent,
                    games: rules.base_games(opponent),
                    bonus: false,
                },
            );
        }
    }

    let bonus: BTreeSet<Pairing> = balance_bonus_pairs(league, rules, rng)?;
    for pair in &bonus {
        if let Some(entry) = entries.get_mut(pair) {
            entry.games += 1;
            entry.bonus = true;
        }
    }

    info!(
        pairs = entries.len(),
        bonus_pairs = bonus.len(),
        "Matchup plan built"
    );
    Ok(MatchupPlan { entries })
}

/// Picks the cross-division pairs that receive one bonus game.
///
/// The returned relation is symmetric and every team appears in exactly
/// `rules.bonus_partners` pairs.
///
/// # Errors
///
/// Returns `CoreError::CannotBalance` if no attempt succeeds within
/// `rules.max_balance_attempts`.
pub fn balance_bonus_pairs<R: Rng + ?Sized>(
    league: &League,
    rules: &ScheduleRules,
    rng: &mut R,
) -> Result<BTreeSet<Pairing>, CoreError> {
    let candidates: Vec<(TeamId, Vec<TeamId>)> = league
        .teams()
        .map(|team| {
            league
                .cross_division_opponents(team.id())
                .map(|opponents| {
                    (
                        team.id().clone(),
                        opponents.into_iter().map(|o| o.id().clone()).collect::<Vec<TeamId>>(),
                    )
                })
        })
        .collect::<Result<_, _>>()?;

    for attempt in 1..=rules.max_balance_attempts {
        if let Some(pairs) = try_bonus_pairing(&candidates, rules.bonus_partners, rng) {
            debug!(attempt, "Bonus games balanced");
            return Ok(pairs);
        }
    }

    Err(CoreError::CannotBalance {
        attempts: rules.max_balance_attempts,
    })
}

fn try_bonus_pairing<R: Rng + ?Sized>(
    candidates: &[(TeamId, Vec<TeamId>)],
    partners: usize,
    rng: &mut R,
) -> Option<BTreeSet<Pairing>> {
    let mut counts: HashMap<&TeamId, usize> = HashMap::new();
    let mut pairs: BTreeSet<Pairing> = BTreeSet::new();

    for (team, opponents) in candidates {
        let mut shuffled: Vec<&TeamId> = opponents.iter().collect();
        shuffled.shuffle(rng);

        for opponent in shuffled {
            if counts.get(team).copied().unwrap_or(0) >= partners {
                break;
            }
            if counts.get(opponent).copied().unwrap_or(0) >= partners {
                continue;
            }
            if pairs.insert(pairing(team, opponent)) {
                *counts.entry(team).or_insert(0) += 1;
                *counts.entry(opponent).or_insert(0) += 1;
            }
        }
    }

    candidates
        .iter()
        .all(|(team, _)| counts.get(team).copied().unwrap_or(0) == partners)
        .then_some(pairs)
}
