use crate::action::{ActionError, Swap};
use crate::history::Ledger;
use crate::model::condition::{Score, Weights};
use crate::model::group::{Partition, Team};
use crate::score::{self, RoundMetrics};

#[derive(Debug, Clone, PartialEq)]
struct TeamCache {
    sum: u32,
    diversity: Score,
    leader: Score,
    duplicate: bool,
}

impl TeamCache {
    fn create(team: &Team, ledger: &Ledger) -> TeamCache {
        TeamCache {
            sum: team.sum(),
            diversity: score::team_diversity(team, &ledger.pairs),
            leader: score::team_leader(team, &ledger.leaders),
            duplicate: score::is_duplicate(team, &ledger.teams),
        }
    }
}

/// Per-team score contributions for one partition, so a swap only has to
/// rescore the two teams it touches.
#[derive(Debug, Clone)]
pub(crate) struct PartitionCache {
    teams: Vec<TeamCache>,
    metrics: RoundMetrics,
}

impl PartitionCache {
    pub fn create(partition: &Partition, ledger: &Ledger, weights: &Weights) -> PartitionCache {
        let teams = partition.teams.iter().map(|team| TeamCache::create(team, ledger)).collect();
        Self::from_teams(teams, weights)
    }

    fn from_teams(teams: Vec<TeamCache>, weights: &Weights) -> PartitionCache {
        let sums: Vec<u32> = teams.iter().map(|team| team.sum).collect();
        let diversity = teams.iter().map(|team| team.diversity).sum();
        let leader = teams.iter().map(|team| team.leader).sum();
        let duplicates = teams.iter().filter(|team| team.duplicate).count();
        let metrics = score::combine(&sums, diversity, leader, duplicates, weights);
        PartitionCache { teams, metrics }
    }

    pub fn metrics(&self) -> &RoundMetrics {
        &self.metrics
    }

    fn updated(&self, swap: &Swap, team1: &Team, team2: &Team, ledger: &Ledger, weights: &Weights) -> PartitionCache {
        let mut teams = self.teams.clone();
        teams[swap.0.team_index] = TeamCache::create(team1, ledger);
        teams[swap.1.team_index] = TeamCache::create(team2, ledger);
        Self::from_teams(teams, weights)
    }

    /// Scores `swap` without applying it. The result can be handed to
    /// [`PartitionCache::act`] to commit it.
    pub fn simulate(
        &self,
        partition: &Partition,
        swap: &Swap,
        ledger: &Ledger,
        weights: &Weights,
    ) -> Result<SimulatedSwap, ActionError> {
        let (team1, team2) = partition.swapped_teams(swap)?;
        let cache = self.updated(swap, &team1, &team2, ledger, weights);
        Ok(SimulatedSwap { swap: *swap, teams: (team1, team2), cache })
    }

    /// Commits a simulated swap to `partition` and takes over its cache.
    pub fn act(&mut self, partition: &mut Partition, simulated: SimulatedSwap) {
        let SimulatedSwap { swap, teams: (team1, team2), cache } = simulated;
        partition.teams[swap.0.team_index] = team1;
        partition.teams[swap.1.team_index] = team2;
        *self = cache;
    }
}

/// A scored swap and the two teams it would produce.
#[derive(Debug, Clone)]
pub(crate) struct SimulatedSwap {
    swap: Swap,
    teams: (Team, Team),
    cache: PartitionCache,
}

impl SimulatedSwap {
    pub fn metrics(&self) -> &RoundMetrics {
        &self.cache.metrics
    }
}
