use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One ranked team's summary row, as produced by the standings source.
///
/// Position in the ranked sequence is the ranking (index 0 = first place).
/// Beyond the team identifier the source decides which stat columns exist
/// (wins, points, ...), so they are carried opaquely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamRow {
    pub team: String,
    #[serde(flatten)]
    pub stats: BTreeMap<String, Value>,
}

/// A played game from the history feed.
///
/// The feed is polymorphic: older entries are plain descriptive strings,
/// newer ones are structured boxscores. Anything else passes through
/// untouched so a feed change cannot drop records silently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GameRecord {
    Boxscore(Boxscore),
    Text(String),
    Other(Value),
}

/// Structured game record with a localized end-of-game timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boxscore {
    pub home_team: String,
    pub away_team: String,
    pub home_score: i64,
    pub away_score: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at_local: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// One playoff series: two participant labels and its game results.
///
/// Quarterfinals carry concrete team identifiers; later rounds carry
/// placeholder labels ("Ganador QF1") until results exist to resolve them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BracketSeries {
    pub teams: [String; 2],
    pub games: Vec<Value>,
}

impl BracketSeries {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            teams: [first.into(), second.into()],
            games: Vec::new(),
        }
    }
}

/// The persisted cache artifact, canonical shape: full standings table,
/// cumulative game history, generation timestamp and playoff bracket.
/// Overwritten wholesale each refresh cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub standings: Vec<TeamRow>,
    pub games_history: Vec<GameRecord>,
    pub last_updated: String,
    pub playoffs: BTreeMap<String, BracketSeries>,
}

/// Legacy cache shape: only the games played today, no playoffs block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodaySnapshot {
    pub standings: Vec<TeamRow>,
    pub games_today: Vec<GameRecord>,
    pub last_updated: String,
}
