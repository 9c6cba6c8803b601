//! Matchups and round report text
//!
//! The report layout is read by other tools; keep line order and the
//! literal separators stable.

use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::model::group::Team;

/// Head-to-head between two teams, by 0-based index into the round's teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Matchup {
    pub home: usize,
    pub away: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pairing {
    pub matchups: Vec<Matchup>,
    /// Team left over when the team count is odd.
    pub bye: Option<usize>,
}

/// Shuffles team order and pairs neighbours. Within a matchup the lower
/// index comes first.
pub fn generate_matchups<R: Rng + ?Sized>(teams: &[Team], rng: &mut R) -> Pairing {
    let mut order: Vec<usize> = (0..teams.len()).collect();
    order.shuffle(rng);
    let chunks = order.chunks_exact(2);
    let bye = chunks.remainder().first().copied();
    let matchups = chunks
        .map(|pair| Matchup { home: pair[0].min(pair[1]), away: pair[0].max(pair[1]) })
        .collect();
    Pairing { matchups, bye }
}

pub fn format_round(round: usize, teams: &[Team], matchups: &[Matchup]) -> String {
    let mut lines = vec![format!("[Round {}]", round)];
    lines.extend(teams.iter().enumerate().map(|(index, team)| {
        format!("Party {}: {}", index + 1, team.members().iter().map(|member| &member.name).join(" / "))
    }));
    lines.push("Matchups:".to_string());
    lines.extend(
        matchups
            .iter()
            .map(|matchup| format!("- Party {} vs Party {}", matchup.home + 1, matchup.away + 1)),
    );
    lines.join("\n")
}
