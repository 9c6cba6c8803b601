//! Ranked roster to balanced four-player parties, round after round
//!
//! Each round keeps the best of several greedy-seeded, hill-climbed
//! candidates, scored on strength balance, repeated pairings, repeated
//! exact teams and leader rotation.

pub mod action;
mod cache;
pub mod climb;
pub mod history;
pub mod leader;
pub mod model;
pub mod report;
pub mod roster;
pub mod round;
pub mod score;
pub mod seed;
pub mod select;
pub mod summary;

pub use history::{LeaderHistory, Ledger, PairHistory, TeamHistory};
pub use model::condition::{Options, Score, Weights};
pub use model::entity::{Id, Player, Rank};
pub use model::group::{Partition, Team, TEAM_SIZE};
pub use report::{format_round, generate_matchups, Matchup};
pub use round::{generate_all_rounds, generate_all_rounds_with_rng, run_rounds, RoundData};
pub use score::{evaluate, RoundMetrics};
pub use select::{generate_round_teams, generate_round_teams_with_rng, RoundSelection};
pub use summary::{build_summary, Summary};
