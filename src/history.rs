//! Cross-round history ledger
//!
//! Counters only ever grow. [`Ledger::record_round`] is the single place
//! they change; every other component reads them.

use std::collections::{BTreeSet, HashMap};

use itertools::Itertools;

use crate::model::entity::Id;
use crate::model::group::{Partition, Team};

/// Rounds each unordered pair of players has shared a team.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PairHistory(HashMap<BTreeSet<Id>, u32>);

impl PairHistory {
    pub fn new() -> PairHistory {
        PairHistory(HashMap::new())
    }

    pub fn get_pair(&self, ids: [Id; 2]) -> u32 {
        self.0.get(&BTreeSet::from(ids)).copied().unwrap_or(0)
    }

    pub fn increment(&mut self, ids: [Id; 2]) {
        *self.0.entry(BTreeSet::from(ids)).or_insert(0) += 1;
    }

    pub fn counts(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.values().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamHistory(HashMap<BTreeSet<Id>, u32>);

impl TeamHistory {
    pub fn new() -> TeamHistory {
        TeamHistory(HashMap::new())
    }

    pub fn get(&self, key: &BTreeSet<Id>) -> u32 {
        self.0.get(key).copied().unwrap_or(0)
    }

    pub fn get_team(&self, team: &Team) -> u32 {
        self.get(&team.key())
    }

    pub fn increment(&mut self, key: BTreeSet<Id>) {
        *self.0.entry(key).or_insert(0) += 1;
    }

    pub fn counts(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.values().copied()
    }
}

/// Rounds each player has held the leader slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeaderHistory(HashMap<Id, u32>);

impl LeaderHistory {
    pub fn new() -> LeaderHistory {
        LeaderHistory(HashMap::new())
    }

    pub fn get(&self, id: Id) -> u32 {
        self.0.get(&id).copied().unwrap_or(0)
    }

    pub fn increment(&mut self, id: Id) {
        *self.0.entry(id).or_insert(0) += 1;
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    pub pairs: PairHistory,
    pub teams: TeamHistory,
    pub leaders: LeaderHistory,
}

impl Ledger {
    pub fn new() -> Ledger {
        Ledger::default()
    }

    pub fn from_parts(pairs: PairHistory, teams: TeamHistory, leaders: LeaderHistory) -> Ledger {
        Ledger { pairs, teams, leaders }
    }

    pub fn record_round(&mut self, partition: &Partition) {
        for team in &partition.teams {
            for (a, b) in team.ids().tuple_combinations() {
                self.pairs.increment([a, b]);
            }
            self.teams.increment(team.key());
            if let Some(leader) = team.leader() {
                self.leaders.increment(leader.id);
            }
        }
    }
}
