//! Best-of-N candidate selection for a single round

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

use crate::climb::climb;
use crate::history::Ledger;
use crate::leader::resolve_leaders;
use crate::model::condition::{Options, Score};
use crate::model::entity::Player;
use crate::model::group::Partition;
use crate::score::{evaluate, RoundMetrics};
use crate::seed::seed_partition;

#[derive(Debug, Clone)]
pub struct RoundSelection {
    pub partition: Partition,
    pub metrics: RoundMetrics,
    /// Final total of every candidate, in the order they were produced.
    pub candidate_scores: Vec<Score>,
    /// True when no candidate ran and the plain greedy partition was used.
    pub fallback: bool,
}

/// Seeds, climbs and orders leaders once. The roster is shuffled before
/// seeding so equal-score players land differently on every run.
fn run_candidate<R: Rng + ?Sized>(
    players: &[Player],
    options: &Options,
    ledger: &Ledger,
    rng: &mut R,
) -> (Partition, RoundMetrics) {
    let mut order = players.to_vec();
    order.shuffle(rng);
    let seeded = seed_partition(&order, &ledger.pairs);
    let climbed = climb(seeded, options.swap_iterations, ledger, &options.weights, rng);
    let partition = resolve_leaders(climbed.partition, &ledger.leaders, rng);
    let metrics = evaluate(&partition, ledger, &options.weights);
    (partition, metrics)
}

pub fn generate_round_teams_with_rng<R: Rng + ?Sized>(
    players: &[Player],
    options: &Options,
    ledger: &Ledger,
    rng: &mut R,
) -> RoundSelection {
    let mut best: Option<(Partition, RoundMetrics)> = None;
    let mut candidate_scores = Vec::with_capacity(options.candidate_count);

    for candidate in 0..options.candidate_count {
        let (partition, metrics) = run_candidate(players, options, ledger, rng);
        candidate_scores.push(metrics.total_score);
        let improves = match &best {
            Some((_, kept)) => metrics.total_score < kept.total_score,
            None => true,
        };
        if improves {
            debug!(candidate, total = metrics.total_score, "new best candidate");
            best = Some((partition, metrics));
        }
    }

    match best {
        Some((partition, metrics)) => RoundSelection { partition, metrics, candidate_scores, fallback: false },
        None => {
            warn!("no candidates generated, using greedy partition");
            let seeded = seed_partition(players, &ledger.pairs);
            let partition = resolve_leaders(seeded, &ledger.leaders, rng);
            let metrics = evaluate(&partition, ledger, &options.weights);
            RoundSelection { partition, metrics, candidate_scores, fallback: true }
        }
    }
}

/// Single-round entry point for callers that keep their own history.
/// Randomness comes from `options.seed`, or entropy when unset.
pub fn generate_round_teams(players: &[Player], options: &Options, ledger: &Ledger) -> RoundSelection {
    let mut rng = options.rng();
    generate_round_teams_with_rng(players, options, ledger, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entity::Rank;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn roster(ranks: &[Rank]) -> Vec<Player> {
        ranks
            .iter()
            .enumerate()
            .map(|(id, rank)| Player::new(id as u32, format!("p{}", id), *rank))
            .collect()
    }

    #[test]
    fn keeps_the_lowest_candidate() {
        use Rank::*;
        let players = roster(&[S, A, A, B, B, B, C, C, C, D, D, S]);
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let options = Options::default().with_candidates(8).with_iterations(50);
        let selection = generate_round_teams_with_rng(&players, &options, &Ledger::new(), &mut rng);

        assert!(!selection.fallback);
        assert_eq!(selection.candidate_scores.len(), 8);
        assert!(selection.candidate_scores.iter().all(|score| selection.metrics.total_score <= *score));
        assert!(selection.partition.is_valid(&players));
    }

    #[test]
    fn zero_candidates_falls_back_to_greedy() {
        use Rank::*;
        let players = roster(&[S, S, A, A, B, B, D, D]);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let options = Options::default().with_candidates(0);
        let selection = generate_round_teams_with_rng(&players, &options, &Ledger::new(), &mut rng);

        assert!(selection.fallback);
        assert!(selection.candidate_scores.is_empty());
        assert!(selection.partition.is_valid(&players));
        assert_eq!(selection.partition.team_sums(), vec![13, 13]);
    }

    #[test]
    fn same_seed_same_round() {
        use Rank::*;
        let players = roster(&[S, A, B, C, D, S, A, B, C, D, B, B, A, C, D, S]);
        let options = Options::default().with_seed(77).with_candidates(5);
        let first = generate_round_teams(&players, &options, &Ledger::new());
        let second = generate_round_teams(&players, &options, &Ledger::new());
        assert_eq!(first.partition, second.partition);
        assert_eq!(first.candidate_scores, second.candidate_scores);
    }
}
