use std::collections::BTreeMap;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use chrono_tz::America::Santiago;
use log::{error, info, warn};
use tokio::time::sleep;

use crate::cache::Cache;
use crate::config::settings::{AppConfig, CacheSchema};
use crate::config::{excluded_strings, exclusion_rules};
use crate::domain::{
    build_playoffs, filter_games, BracketSeries, GameRecord, Snapshot, TeamRow, TodaySnapshot,
};
use crate::sources::StandingsSource;

/// Periodic snapshot refresher.
///
/// Each cycle pulls the ranked table and the game history from the injected
/// source, filters the history through the manual exclusion list, derives
/// the playoff seeding and publishes the result through the cache. Cycles
/// are independent: a failed cycle writes nothing and the previous snapshot
/// stays authoritative on disk.
pub struct RefreshService<S: StandingsSource> {
    config: AppConfig,
    source: S,
    cache: Cache,
}

impl<S: StandingsSource> RefreshService<S> {
    pub fn new(config: AppConfig, source: S) -> Result<Self> {
        let cache = Cache::new(&config.refresh.cache_dir)?;
        Ok(Self {
            config,
            source,
            cache,
        })
    }

    /// Run a single refresh cycle; the outcome becomes the process exit
    /// status in one-shot mode.
    pub async fn run_once(&self) -> Result<()> {
        self.run_cycle().await
    }

    /// Run refresh cycles forever at the configured interval. Cycle
    /// failures are logged and never break the loop; Ctrl-C during the
    /// between-cycle wait ends it cleanly.
    pub async fn run_forever(&self) -> Result<()> {
        self.run_until(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
    }

    /// Loop body of [`Self::run_forever`] with the shutdown signal injected,
    /// so hosts (and tests) can supply their own stop condition. The signal
    /// is only consulted during the between-cycle wait.
    pub async fn run_until(&self, shutdown: impl Future<Output = ()>) -> Result<()> {
        let interval = Duration::from_secs(self.config.refresh.interval_secs);
        tokio::pin!(shutdown);

        loop {
            if let Err(e) = self.run_cycle().await {
                error!("Cache update failed: {e:#}");
            }

            info!("Waiting {} seconds until the next update...", interval.as_secs());
            tokio::select! {
                _ = sleep(interval) => {}
                _ = &mut shutdown => {
                    info!("Stopped by user.");
                    break;
                }
            }
        }

        Ok(())
    }

    async fn run_cycle(&self) -> Result<()> {
        let last_updated = local_timestamp();
        info!("[{last_updated}] Starting cache update...");

        // Standings are mandatory; history is best-effort.
        let rows = self.fetch_rows().await?;
        let games = self.build_games_history().await;
        let playoffs = build_playoffs(&rows);

        self.write_snapshot(rows, games, last_updated, playoffs)?;

        info!("Update completed successfully.");
        Ok(())
    }

    async fn fetch_rows(&self) -> Result<Vec<TeamRow>> {
        self.source
            .compute_rows()
            .await
            .context("Failed to fetch ranked standings rows")
    }

    /// Cumulative list of played games with the manual exclusions applied.
    /// A history fetch failure degrades to an empty list so the standings
    /// still get published.
    async fn build_games_history(&self) -> Vec<GameRecord> {
        let games = match self.source.games_played().await {
            Ok(games) => games,
            Err(e) => {
                warn!("Game history unavailable, continuing with empty history: {e:#}");
                Vec::new()
            }
        };

        filter_games(games, &exclusion_rules(), &excluded_strings())
    }

    fn write_snapshot(
        &self,
        standings: Vec<TeamRow>,
        games: Vec<GameRecord>,
        last_updated: String,
        playoffs: BTreeMap<String, BracketSeries>,
    ) -> Result<()> {
        let key = self.config.refresh.cache_key;
        match self.config.refresh.schema {
            CacheSchema::Cumulative => self.cache.save(
                key,
                &Snapshot {
                    standings,
                    games_history: games,
                    last_updated,
                    playoffs,
                },
            ),
            CacheSchema::Today => self.cache.save(
                key,
                &TodaySnapshot {
                    standings,
                    games_today: games,
                    last_updated,
                },
            ),
        }
    }
}

/// Current wall-clock time in the league's civil zone (America/Santiago),
/// formatted the way the presentation layer displays it.
fn local_timestamp() -> String {
    Utc::now()
        .with_timezone(&Santiago)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}
