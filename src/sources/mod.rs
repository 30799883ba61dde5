pub mod client;

pub use client::HttpStandingsSource;

use anyhow::Result;

use crate::domain::{GameRecord, TeamRow};

/// Capability contract for the standings/history provider.
///
/// The refresh service receives an implementation by injection; the entry
/// point picks one at startup. Both operations must exist on any binding,
/// which the trait guarantees at composition time.
pub trait StandingsSource {
    /// Produce the ranked standings rows, best-ranked first.
    fn compute_rows(&self) -> impl Future<Output = Result<Vec<TeamRow>>> + Send;

    /// Produce the list of recently played game records.
    fn games_played(&self) -> impl Future<Output = Result<Vec<GameRecord>>> + Send;
}
