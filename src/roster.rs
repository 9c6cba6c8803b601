//! Roster checks for callers feeding the generator
//!
//! The generator assumes a valid roster and does not check again.

use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::model::entity::{Id, Player, Rank};

pub const VALID_SIZES: [usize; 4] = [8, 12, 16, 20];

#[derive(Debug, Clone, Error, PartialEq)]
pub enum RosterError {
    #[error("Invalid rank `{0}`, expected one of S, A, B, C, D")]
    InvalidRank(String),
    #[error("Entry {index} has an empty name")]
    EmptyName { index: usize },
    #[error("Roster has {0} participants, expected 8, 12, 16 or 20")]
    InvalidSize(usize),
}

impl FromStr for Rank {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "S" => Ok(Rank::S),
            "A" => Ok(Rank::A),
            "B" => Ok(Rank::B),
            "C" => Ok(Rank::C),
            "D" => Ok(Rank::D),
            _ => Err(RosterError::InvalidRank(s.to_string())),
        }
    }
}

/// One unvalidated roster line as supplied by a caller.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    pub rank: String,
}

/// Validates entries and assigns ids in input order.
pub fn validate_roster(entries: &[RosterEntry]) -> Result<Vec<Player>, RosterError> {
    let players = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let name = entry.name.trim();
            if name.is_empty() {
                return Err(RosterError::EmptyName { index });
            }
            let rank = entry.rank.parse::<Rank>()?;
            Ok(Player::new(index as Id, name, rank))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if !VALID_SIZES.contains(&players.len()) {
        return Err(RosterError::InvalidSize(players.len()));
    }
    Ok(players)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(ranks: &[&str]) -> Vec<RosterEntry> {
        ranks
            .iter()
            .enumerate()
            .map(|(i, rank)| RosterEntry { name: format!("player{}", i), rank: rank.to_string() })
            .collect()
    }

    #[test]
    fn ranks_parse_case_insensitively() {
        assert_eq!("s".parse::<Rank>(), Ok(Rank::S));
        assert_eq!(" D ".parse::<Rank>(), Ok(Rank::D));
        assert_eq!("E".parse::<Rank>(), Err(RosterError::InvalidRank("E".to_string())));
    }

    #[test]
    fn assigns_ids_in_order() {
        let players = validate_roster(&entries(&["S", "A", "B", "C", "D", "a", "b", "c"])).unwrap();
        assert_eq!(players.iter().map(|p| p.id).collect::<Vec<_>>(), (0..8).collect::<Vec<_>>());
        assert_eq!(players[5].rank, Rank::A);
    }

    #[test]
    fn rejects_bad_sizes_names_and_ranks() {
        assert_eq!(validate_roster(&[]), Err(RosterError::InvalidSize(0)));
        assert_eq!(validate_roster(&entries(&["S"; 9])), Err(RosterError::InvalidSize(9)));

        let mut unnamed = entries(&["S"; 8]);
        unnamed[3].name = "  ".to_string();
        assert_eq!(validate_roster(&unnamed), Err(RosterError::EmptyName { index: 3 }));

        let mut bad_rank = entries(&["S"; 8]);
        bad_rank[1].rank = "SS".to_string();
        assert_eq!(validate_roster(&bad_rank), Err(RosterError::InvalidRank("SS".to_string())));
    }
}
