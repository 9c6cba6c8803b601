use std::cmp::Reverse;

use itertools::Itertools;

use crate::history::PairHistory;
use crate::model::entity::Player;
use crate::model::group::{Partition, Team, TEAM_SIZE};

/// What it costs to drop `player` into `team`: the resulting sum plus the
/// squared repeat cost of every pairing it creates.
fn placement_cost(team: &Team, player: &Player, pairs: &PairHistory) -> u64 {
    let repeats: u64 = team
        .ids()
        .map(|id| {
            let seen = pairs.get_pair([id, player.id]) as u64 + 1;
            seen * seen
        })
        .sum();
    (team.sum() + player.score()) as u64 + repeats
}

/// Greedy starting partition. Strongest players are placed first, each into
/// the open team with the lowest placement cost (lowest index on ties).
/// Players of equal score keep their input order.
pub fn seed_partition(players: &[Player], pairs: &PairHistory) -> Partition {
    let team_count = (players.len() + TEAM_SIZE - 1) / TEAM_SIZE;
    let mut partition = Partition::with_team_count(team_count);

    for player in players.iter().sorted_by_key(|player| Reverse(player.score())) {
        let best = partition
            .teams
            .iter()
            .enumerate()
            .filter(|(_, team)| !team.is_full())
            .min_by_key(|(_, team)| placement_cost(team, player, pairs))
            .map(|(index, _)| index);
        if let Some(index) = best {
            partition.teams[index].push(player.clone());
        }
    }
    partition
}
