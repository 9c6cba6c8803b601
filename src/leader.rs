use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::history::LeaderHistory;
use crate::model::entity::Player;
use crate::model::group::{Partition, Team};

/// Orders members by how often they have led, fewest first. Members with
/// equal counts are shuffled as a group so every tied member is equally
/// likely to take slot 0.
pub fn order_team<R: Rng + ?Sized>(team: Team, leaders: &LeaderHistory, rng: &mut R) -> Team {
    let mut by_count: BTreeMap<u32, Vec<Player>> = BTreeMap::new();
    for member in team.into_members() {
        by_count.entry(leaders.get(member.id)).or_default().push(member);
    }
    let ordered = by_count
        .into_values()
        .flat_map(|mut tied| {
            tied.shuffle(rng);
            tied
        })
        .collect();
    Team::from_members(ordered)
}

pub fn resolve_leaders<R: Rng + ?Sized>(partition: Partition, leaders: &LeaderHistory, rng: &mut R) -> Partition {
    Partition {
        teams: partition.teams.into_iter().map(|team| order_team(team, leaders, rng)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entity::Rank;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn team(ids: [u32; 4]) -> Team {
        Team::from_members(ids.iter().map(|id| Player::new(*id, format!("p{}", id), Rank::A)).collect())
    }

    #[test]
    fn least_frequent_leader_goes_first() {
        let mut leaders = LeaderHistory::new();
        for (id, times) in [(0, 3), (1, 1), (2, 2), (3, 0)] {
            for _ in 0..times {
                leaders.increment(id);
            }
        }
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let ordered = order_team(team([0, 1, 2, 3]), &leaders, &mut rng);
        assert_eq!(ordered.ids().collect::<Vec<_>>(), vec![3, 1, 2, 0]);
        assert_eq!(ordered.sum(), 16);
    }

    #[test]
    fn ties_are_broken_across_all_tied_members() {
        let mut leaders = LeaderHistory::new();
        leaders.increment(3);
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut led = [0usize; 4];
        for _ in 0..4000 {
            let ordered = order_team(team([0, 1, 2, 3]), &leaders, &mut rng);
            let first = ordered.leader().map(|p| p.id).unwrap();
            led[first as usize] += 1;
            assert_eq!(ordered.members()[3].id, 3);
        }
        assert_eq!(led[3], 0);
        for count in &led[..3] {
            assert!((1100..1570).contains(count), "{:?}", led);
        }
    }

    #[test]
    fn resolving_keeps_membership() {
        let partition = Partition { teams: vec![team([0, 1, 2, 3]), team([4, 5, 6, 7])] };
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let resolved = resolve_leaders(partition.clone(), &LeaderHistory::new(), &mut rng);
        for (before, after) in partition.teams.iter().zip(&resolved.teams) {
            assert_eq!(before.key(), after.key());
            assert_eq!(before.sum(), after.sum());
        }
    }
}
