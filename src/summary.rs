use serde::Serialize;

use crate::history::Ledger;
use crate::model::entity::{Id, Player};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderCount {
    pub id: Id,
    pub name: String,
    pub count: u32,
}

/// Fairness figures over a whole generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Pair repeats beyond each pair's first shared round.
    pub pair_duplicate_total: u32,
    pub max_pair_count: u32,
    /// Compositions that occurred more than once.
    pub duplicate_teams: usize,
    /// One entry per roster player, in roster order.
    pub leader_counts: Vec<LeaderCount>,
    pub max_leader_count: u32,
    pub min_leader_count: u32,
    /// Leadership spread across the roster reached 2 or more.
    pub leader_warning: bool,
}

pub fn build_summary(players: &[Player], ledger: &Ledger) -> Summary {
    let pair_duplicate_total = ledger.pairs.counts().map(|count| count.saturating_sub(1)).sum();
    let max_pair_count = ledger.pairs.counts().max().unwrap_or(0);
    let duplicate_teams = ledger.teams.counts().filter(|count| *count > 1).count();

    let leader_counts: Vec<LeaderCount> = players
        .iter()
        .map(|player| LeaderCount {
            id: player.id,
            name: player.name.clone(),
            count: ledger.leaders.get(player.id),
        })
        .collect();
    let max_leader_count = leader_counts.iter().map(|entry| entry.count).max().unwrap_or(0);
    let min_leader_count = leader_counts.iter().map(|entry| entry.count).min().unwrap_or(0);

    Summary {
        pair_duplicate_total,
        max_pair_count,
        duplicate_teams,
        leader_counts,
        max_leader_count,
        min_leader_count,
        leader_warning: max_leader_count - min_leader_count >= 2,
    }
}
