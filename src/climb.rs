//! Local search over member swaps
//!
//! Plain hill climbing: a swap between two random teams is kept only when it
//! strictly lowers the total score. Restarts live in [`crate::select`].

use rand::Rng;
use tracing::trace;

use crate::action::{Position, Swap};
use crate::cache::PartitionCache;
use crate::history::Ledger;
use crate::model::condition::{Score, Weights};
use crate::model::group::Partition;
use crate::score::RoundMetrics;

/// Draws swaps between two distinct teams, each team and each member slot
/// picked uniformly.
pub struct SwapGenerator {
    sizes: Vec<usize>,
}

impl SwapGenerator {
    pub fn new(partition: &Partition) -> SwapGenerator {
        SwapGenerator { sizes: partition.teams.iter().map(|team| team.len()).collect() }
    }

    /// `None` when fewer than two non-empty teams exist.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Swap> {
        let n_teams = self.sizes.len();
        if n_teams < 2 || self.sizes.iter().any(|size| *size == 0) {
            return None;
        }
        let first = rng.gen_range(0..n_teams);
        let mut second = rng.gen_range(0..n_teams - 1);
        if second >= first {
            second += 1;
        }
        Some(Swap(
            Position { team_index: first, member_index: rng.gen_range(0..self.sizes[first]) },
            Position { team_index: second, member_index: rng.gen_range(0..self.sizes[second]) },
        ))
    }
}

#[derive(Debug, Clone)]
pub struct ClimbOutcome {
    pub partition: Partition,
    pub metrics: RoundMetrics,
    /// Total score of the starting partition followed by each accepted swap.
    pub accepted: Vec<Score>,
}

pub fn climb<R: Rng + ?Sized>(
    partition: Partition,
    iterations: usize,
    ledger: &Ledger,
    weights: &Weights,
    rng: &mut R,
) -> ClimbOutcome {
    let mut current = partition;
    let mut cache = PartitionCache::create(&current, ledger, weights);
    let mut accepted = vec![cache.metrics().total_score];
    let swaps = SwapGenerator::new(&current);

    for n_iterations in 0..iterations {
        let Some(swap) = swaps.draw(rng) else {
            break;
        };
        let simulated = match cache.simulate(&current, &swap, ledger, weights) {
            Ok(simulated) => simulated,
            Err(_) => continue,
        };
        let total = simulated.metrics().total_score;
        if total < cache.metrics().total_score {
            cache.act(&mut current, simulated);
            trace!(iteration = n_iterations, total, "accepted swap");
            accepted.push(total);
        }
    }

    ClimbOutcome { metrics: *cache.metrics(), partition: current, accepted }
}
