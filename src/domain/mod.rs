pub mod filter;
pub mod models;
pub mod playoffs;

pub use filter::{filter_games, ExclusionRule};
pub use models::{Boxscore, BracketSeries, GameRecord, Snapshot, TeamRow, TodaySnapshot};
pub use playoffs::build_playoffs;
