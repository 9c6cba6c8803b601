use thiserror::Error;

use crate::model::entity::Player;
use crate::model::group::{Partition, Team};

pub type Index = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub team_index: Index,
    pub member_index: Index,
}

/// Exchange of two members sitting in different teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swap(pub Position, pub Position);

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ActionError {
    #[error("Invalid position")]
    InvalidPosition,
    #[error("Both swap positions are in team {0}")]
    SameTeam(Index),
}

impl Partition {
    pub fn get_member(&self, position: &Position) -> Option<&Player> {
        self.teams.get(position.team_index)?.members().get(position.member_index)
    }

    /// The two affected teams as they would look after `swap`, leaving
    /// `self` untouched.
    pub fn swapped_teams(&self, swap: &Swap) -> Result<(Team, Team), ActionError> {
        let Swap(first, second) = swap;
        if first.team_index == second.team_index {
            return Err(ActionError::SameTeam(first.team_index));
        }
        let member1 = self.get_member(first).ok_or(ActionError::InvalidPosition)?.clone();
        let member2 = self.get_member(second).ok_or(ActionError::InvalidPosition)?.clone();

        let mut team1 = self.teams[first.team_index].clone();
        let mut team2 = self.teams[second.team_index].clone();
        team1.replace(first.member_index, member2).ok_or(ActionError::InvalidPosition)?;
        team2.replace(second.member_index, member1).ok_or(ActionError::InvalidPosition)?;
        Ok((team1, team2))
    }

    pub fn apply_swap(&mut self, swap: &Swap) -> Result<(), ActionError> {
        let (team1, team2) = self.swapped_teams(swap)?;
        self.teams[swap.0.team_index] = team1;
        self.teams[swap.1.team_index] = team2;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entity::Rank;

    fn partition() -> Partition {
        let team = |ids: [u32; 2], rank: Rank| {
            Team::from_members(ids.iter().map(|id| Player::new(*id, format!("p{}", id), rank)).collect())
        };
        Partition { teams: vec![team([0, 1], Rank::S), team([2, 3], Rank::D)] }
    }

    #[test]
    fn swap_exchanges_members_and_sums() {
        let mut partition = partition();
        let swap = Swap(
            Position { team_index: 0, member_index: 1 },
            Position { team_index: 1, member_index: 0 },
        );
        partition.apply_swap(&swap).unwrap();
        assert_eq!(partition.teams[0].ids().collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(partition.teams[1].ids().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(partition.team_sums(), vec![6, 6]);
    }

    #[test]
    fn rejected_swaps_leave_partition_untouched() {
        let mut partition = partition();
        let before = partition.clone();
        let same_team = Swap(
            Position { team_index: 1, member_index: 0 },
            Position { team_index: 1, member_index: 1 },
        );
        assert_eq!(partition.apply_swap(&same_team), Err(ActionError::SameTeam(1)));
        let out_of_range = Swap(
            Position { team_index: 0, member_index: 0 },
            Position { team_index: 1, member_index: 7 },
        );
        assert_eq!(partition.apply_swap(&out_of_range), Err(ActionError::InvalidPosition));
        assert_eq!(partition, before);
    }
}
