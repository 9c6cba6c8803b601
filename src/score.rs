//! Scoring model
//!
//! Turns a partition plus the current history into one comparable number.
//! Lower totals are better. Nothing in here draws randomness.

use itertools::Itertools;
use serde::Serialize;

use crate::history::{LeaderHistory, Ledger, PairHistory, TeamHistory};
use crate::model::condition::{Score, Weights};
use crate::model::group::{Partition, Team};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoundMetrics {
    pub balance_penalty: Score,
    pub diversity_penalty: Score,
    pub leader_penalty: Score,
    pub duplicate_penalty: Score,
    pub total_score: Score,
    pub max_sum: u32,
    pub min_sum: u32,
    pub average_sum: Score,
    /// Sum of squared deviations from the mean, not divided by team count.
    pub variance: Score,
}

/// `(pair count + 1)²` over every member pair of the team.
pub fn team_diversity(team: &Team, pairs: &PairHistory) -> Score {
    team.ids()
        .tuple_combinations()
        .map(|(a, b)| {
            let seen = pairs.get_pair([a, b]) as Score + 1.0;
            seen * seen
        })
        .sum()
}

/// `(leader count + 1)²` for whoever sits in slot 0.
pub fn team_leader(team: &Team, leaders: &LeaderHistory) -> Score {
    match team.leader() {
        Some(leader) => {
            let led = leaders.get(leader.id) as Score + 1.0;
            led * led
        }
        None => 0.0,
    }
}

pub fn is_duplicate(team: &Team, teams: &TeamHistory) -> bool {
    teams.get_team(team) > 0
}

/// Shared by [`evaluate`] and the incremental cache so both agree to the bit.
pub(crate) fn combine(
    sums: &[u32],
    diversity_penalty: Score,
    leader_penalty: Score,
    duplicates: usize,
    weights: &Weights,
) -> RoundMetrics {
    let max_sum = sums.iter().copied().max().unwrap_or(0);
    let min_sum = sums.iter().copied().min().unwrap_or(0);
    let average_sum = if sums.is_empty() {
        0.0
    } else {
        sums.iter().map(|sum| *sum as Score).sum::<Score>() / sums.len() as Score
    };
    let variance = sums
        .iter()
        .map(|sum| {
            let deviation = *sum as Score - average_sum;
            deviation * deviation
        })
        .sum::<Score>();

    let balance_penalty = (max_sum - min_sum) as Score * 10.0 + variance;
    let duplicate_penalty = weights.hard_penalty * duplicates as Score;
    let total_score = weights.balance * balance_penalty
        + weights.diversity * diversity_penalty
        + weights.leader * leader_penalty
        + duplicate_penalty;

    RoundMetrics {
        balance_penalty,
        diversity_penalty,
        leader_penalty,
        duplicate_penalty,
        total_score,
        max_sum,
        min_sum,
        average_sum,
        variance,
    }
}

pub fn evaluate(partition: &Partition, ledger: &Ledger, weights: &Weights) -> RoundMetrics {
    let sums = partition.team_sums();
    let diversity = partition.teams.iter().map(|team| team_diversity(team, &ledger.pairs)).sum();
    let leader = partition.teams.iter().map(|team| team_leader(team, &ledger.leaders)).sum();
    let duplicates = partition.teams.iter().filter(|team| is_duplicate(team, &ledger.teams)).count();
    combine(&sums, diversity, leader, duplicates, weights)
}
