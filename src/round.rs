//! Multi-round generation
//!
//! Each round sees the ledger as left by the rounds before it. The ledger
//! is updated only after a round's teams, matchups and report are final.

use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::history::Ledger;
use crate::model::condition::Options;
use crate::model::entity::Player;
use crate::model::group::Team;
use crate::report::{format_round, generate_matchups, Matchup};
use crate::score::RoundMetrics;
use crate::select::generate_round_teams_with_rng;
use crate::summary::{build_summary, Summary};

#[derive(Debug, Clone, Serialize)]
pub struct RoundData {
    /// 1-based
    pub round: usize,
    pub teams: Vec<Team>,
    pub matchups: Vec<Matchup>,
    /// Team without an opponent this round, if the team count is odd.
    pub bye: Option<usize>,
    pub metrics: RoundMetrics,
    pub report: String,
}

/// Runs `round_count` rounds against a caller-owned ledger.
pub fn run_rounds<R: Rng + ?Sized>(
    players: &[Player],
    round_count: usize,
    options: &Options,
    ledger: &mut Ledger,
    rng: &mut R,
) -> Vec<RoundData> {
    let mut rounds = Vec::with_capacity(round_count);
    for round in 1..=round_count {
        let selection = generate_round_teams_with_rng(players, options, ledger, rng);
        debug_assert!(selection.partition.is_valid(players));
        let pairing = generate_matchups(&selection.partition.teams, rng);
        if let Some(bye) = pairing.bye {
            warn!(round, team = bye + 1, "odd team count, party has no opponent");
        }
        let report = format_round(round, &selection.partition.teams, &pairing.matchups);
        ledger.record_round(&selection.partition);
        debug!(
            round,
            total = selection.metrics.total_score,
            max_sum = selection.metrics.max_sum,
            min_sum = selection.metrics.min_sum,
            "round finalized"
        );

        rounds.push(RoundData {
            round,
            teams: selection.partition.teams,
            matchups: pairing.matchups,
            bye: pairing.bye,
            metrics: selection.metrics,
            report,
        });
    }
    rounds
}

pub fn generate_all_rounds_with_rng<R: Rng + ?Sized>(
    players: &[Player],
    round_count: usize,
    options: &Options,
    rng: &mut R,
) -> (Vec<RoundData>, Summary) {
    info!(players = players.len(), rounds = round_count, "generating rounds");
    let mut ledger = Ledger::new();
    let rounds = run_rounds(players, round_count, options, &mut ledger, rng);
    let summary = build_summary(players, &ledger);
    if summary.leader_warning {
        warn!(
            max = summary.max_leader_count,
            min = summary.min_leader_count,
            "leadership spread across roster is uneven"
        );
    }
    (rounds, summary)
}

/// Generates every round with a fresh ledger. Randomness comes from
/// `options.seed`, or entropy when unset.
pub fn generate_all_rounds(players: &[Player], round_count: usize, options: &Options) -> (Vec<RoundData>, Summary) {
    let mut rng = options.rng();
    generate_all_rounds_with_rng(players, round_count, options, &mut rng)
}
