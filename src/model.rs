pub mod entity {
    use std::fmt;

    use serde::{Deserialize, Serialize};

    pub type Id = u32;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
    pub enum Rank {
        S,
        A,
        B,
        C,
        D,
    }

    impl Rank {
        pub const ALL: [Rank; 5] = [Rank::S, Rank::A, Rank::B, Rank::C, Rank::D];

        pub fn score(self) -> u32 {
            match self {
                Rank::S => 5,
                Rank::A => 4,
                Rank::B => 3,
                Rank::C => 2,
                Rank::D => 1,
            }
        }
    }

    impl fmt::Display for Rank {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let letter = match self {
                Rank::S => "S",
                Rank::A => "A",
                Rank::B => "B",
                Rank::C => "C",
                Rank::D => "D",
            };
            f.write_str(letter)
        }
    }

    /// A roster participant. `id` is the only key used by history lookups;
    /// names may repeat.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Player {
        pub id: Id,
        pub name: String,
        pub rank: Rank,
    }

    impl Player {
        pub fn new(id: Id, name: impl Into<String>, rank: Rank) -> Player {
            Player { id, name: name.into(), rank }
        }

        pub fn score(&self) -> u32 {
            self.rank.score()
        }
    }
}


pub mod group {
    use std::collections::{BTreeSet, HashSet};

    use serde::Serialize;

    use super::entity::{Id, Player};

    pub const TEAM_SIZE: usize = 4;

    /// Ordered team members. Slot 0 is the leader. `sum` is kept in step with
    /// `members` by every mutating method.
    #[derive(Debug, Clone, Default, PartialEq, Serialize)]
    pub struct Team {
        members: Vec<Player>,
        sum: u32,
    }

    impl Team {
        pub fn new() -> Team {
            Team { members: Vec::with_capacity(TEAM_SIZE), sum: 0 }
        }

        pub fn from_members(members: Vec<Player>) -> Team {
            let sum = members.iter().map(Player::score).sum();
            Team { members, sum }
        }

        pub fn members(&self) -> &[Player] {
            &self.members
        }

        pub fn into_members(self) -> Vec<Player> {
            self.members
        }

        pub fn sum(&self) -> u32 {
            self.sum
        }

        pub fn len(&self) -> usize {
            self.members.len()
        }

        pub fn is_empty(&self) -> bool {
            self.members.is_empty()
        }

        pub fn is_full(&self) -> bool {
            self.members.len() >= TEAM_SIZE
        }

        pub fn push(&mut self, player: Player) {
            self.sum += player.score();
            self.members.push(player);
        }

        /// Puts `player` at `index` and hands back whoever was there.
        pub fn replace(&mut self, index: usize, player: Player) -> Option<Player> {
            let slot = self.members.get_mut(index)?;
            let removed = std::mem::replace(slot, player);
            self.sum = self.sum - removed.score() + slot.score();
            Some(removed)
        }

        pub fn leader(&self) -> Option<&Player> {
            self.members.first()
        }

        pub fn ids(&self) -> impl Iterator<Item = Id> + Clone + '_ {
            self.members.iter().map(|member| member.id)
        }

        pub fn key(&self) -> BTreeSet<Id> {
            self.ids().collect()
        }
    }

    #[derive(Debug, Clone, Default, PartialEq, Serialize)]
    pub struct Partition {
        pub teams: Vec<Team>,
    }

    impl Partition {
        pub fn with_team_count(team_count: usize) -> Partition {
            Partition { teams: (0..team_count).map(|_| Team::new()).collect() }
        }

        pub fn len(&self) -> usize {
            self.teams.len()
        }

        pub fn is_empty(&self) -> bool {
            self.teams.is_empty()
        }

        pub fn team_sums(&self) -> Vec<u32> {
            self.teams.iter().map(Team::sum).collect()
        }

        pub fn is_valid(&self, roster: &[Player]) -> bool {
            if self.teams.len() * TEAM_SIZE != roster.len() {
                return false;
            }
            if self.teams.iter().any(|team| team.len() != TEAM_SIZE) {
                return false;
            }
            let mut seen = HashSet::new();
            let all_unique = self.teams.iter().flat_map(Team::ids).all(|id| seen.insert(id));
            all_unique && roster.iter().all(|player| seen.contains(&player.id))
        }
    }
}

pub mod condition {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use serde::{Deserialize, Serialize};

    pub type Score = f64;

    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Weights {
        pub balance: Score,
        pub diversity: Score,
        pub leader: Score,
        /// Flat cost per team whose exact composition already happened.
        pub hard_penalty: Score,
    }

    impl Default for Weights {
        fn default() -> Self {
            Self {
                balance: 1.0,
                diversity: 1.0,
                leader: 1.0,
                hard_penalty: 10_000.0,
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Options {
        /// Independent seed+climb runs per round
        pub candidate_count: usize,
        /// Swap attempts per candidate
        pub swap_iterations: usize,
        pub weights: Weights,
        /// Random seed for reproducibility (None = entropy)
        pub seed: Option<u64>,
    }

    impl Default for Options {
        fn default() -> Self {
            Self {
                candidate_count: 20,
                swap_iterations: 200,
                weights: Weights::default(),
                seed: None,
            }
        }
    }

    impl Options {
        pub fn with_seed(mut self, seed: u64) -> Self {
            self.seed = Some(seed);
            self
        }

        pub fn with_candidates(mut self, candidate_count: usize) -> Self {
            self.candidate_count = candidate_count;
            self
        }

        pub fn with_iterations(mut self, swap_iterations: usize) -> Self {
            self.swap_iterations = swap_iterations;
            self
        }

        pub fn with_weights(mut self, weights: Weights) -> Self {
            self.weights = weights;
            self
        }

        pub fn rng(&self) -> SmallRng {
            match self.seed {
                Some(seed) => SmallRng::seed_from_u64(seed),
                None => SmallRng::from_entropy(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::condition::Options;
    use super::entity::{Player, Rank};
    use super::group::{Partition, Team};

    fn player(id: u32, rank: Rank) -> Player {
        Player::new(id, format!("p{}", id), rank)
    }

    #[test]
    fn rank_scores_follow_letter_order() {
        let scores: Vec<u32> = Rank::ALL.iter().map(|rank| rank.score()).collect();
        assert_eq!(scores, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn replace_keeps_sum_in_step() {
        let mut team = Team::from_members(vec![player(0, Rank::S), player(1, Rank::D)]);
        assert_eq!(team.sum(), 6);
        let removed = team.replace(1, player(2, Rank::A));
        assert_eq!(removed.map(|p| p.id), Some(1));
        assert_eq!(team.sum(), 9);
        assert!(team.replace(5, player(3, Rank::B)).is_none());
        assert_eq!(team.sum(), 9);
    }

    #[test]
    fn member_ids_pair_up_without_collecting() {
        use itertools::Itertools;
        let team = Team::from_members((0..4).map(|id| player(id, Rank::C)).collect());
        let pairs: Vec<(u32, u32)> = team.ids().tuple_combinations().collect();
        assert_eq!(pairs.len(), 6);
        assert_eq!(pairs[0], (0, 1));
        assert_eq!(pairs[5], (2, 3));
    }

    #[test]
    fn validity_rejects_missing_and_duplicated_players() {
        let roster: Vec<Player> = (0..8).map(|id| player(id, Rank::B)).collect();
        let good = Partition {
            teams: vec![
                Team::from_members(roster[..4].to_vec()),
                Team::from_members(roster[4..].to_vec()),
            ],
        };
        assert!(good.is_valid(&roster));

        let mut twice = good.clone();
        twice.teams[1].replace(0, roster[0].clone());
        assert!(!twice.is_valid(&roster));

        let short = Partition { teams: vec![Team::from_members(roster[..4].to_vec())] };
        assert!(!short.is_valid(&roster));
    }

    #[test]
    fn options_fill_defaults_from_partial_toml() {
        let options: Options = toml::from_str("candidate_count = 5\n[weights]\nleader = 3.0\n").unwrap();
        assert_eq!(options.candidate_count, 5);
        assert_eq!(options.swap_iterations, 200);
        assert_eq!(options.weights.leader, 3.0);
        assert_eq!(options.weights.hard_penalty, 10_000.0);
        assert_eq!(options.seed, None);
    }
}
