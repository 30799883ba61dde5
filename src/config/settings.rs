use std::env;

/// Which snapshot shape gets written to the cache file.
///
/// Two presentation-layer consumers exist: the current one reads the
/// cumulative history plus the playoffs block; a legacy one reads only
/// "today's games" with no playoffs. Cumulative is canonical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheSchema {
    Cumulative,
    Today,
}

impl CacheSchema {
    fn from_env() -> Self {
        match env::var("CACHE_SCHEMA").as_deref() {
            Ok("today") => CacheSchema::Today,
            _ => CacheSchema::Cumulative,
        }
    }
}

/// Upstream standings variant. The ranking service publishes the table
/// under two names; `cascade-points-desc` is the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceVariant {
    CascadePointsDesc,
    CascadePoints,
}

impl SourceVariant {
    pub fn path_segment(&self) -> &'static str {
        match self {
            SourceVariant::CascadePointsDesc => "cascade-points-desc",
            SourceVariant::CascadePoints => "cascade-points",
        }
    }

    fn from_env() -> Self {
        match env::var("STANDINGS_VARIANT").as_deref() {
            Ok("cascade-points") => SourceVariant::CascadePoints,
            _ => SourceVariant::CascadePointsDesc,
        }
    }
}

pub struct RefreshSettings {
    pub interval_secs: u64,
    pub run_once: bool,
    pub cache_dir: String,
    pub cache_key: &'static str,
    pub schema: CacheSchema,
}

impl Default for RefreshSettings {
    fn default() -> Self {
        Self {
            interval_secs: 300,
            run_once: false,
            cache_dir: "cache".to_string(),
            cache_key: "standings_cache",
            schema: CacheSchema::Cumulative,
        }
    }
}

impl RefreshSettings {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            interval_secs: env_u64("UPDATE_INTERVAL_SECONDS", defaults.interval_secs),
            run_once: env::var("RUN_ONCE").as_deref() == Ok("1"),
            cache_dir: env::var("CACHE_DIR").unwrap_or(defaults.cache_dir),
            cache_key: defaults.cache_key,
            schema: CacheSchema::from_env(),
        }
    }
}

pub struct SourceSettings {
    pub base_url: String,
    pub variant: SourceVariant,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            variant: SourceVariant::CascadePointsDesc,
            user_agent: "StandingsCache/1.0",
            timeout_secs: 30,
        }
    }
}

impl SourceSettings {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: env::var("STANDINGS_BASE_URL").unwrap_or(defaults.base_url),
            variant: SourceVariant::from_env(),
            user_agent: defaults.user_agent,
            timeout_secs: defaults.timeout_secs,
        }
    }
}

pub struct AppConfig {
    pub refresh: RefreshSettings,
    pub source: SourceSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    /// Read the full configuration once at startup; everything downstream
    /// receives it by injection rather than via globals.
    pub fn new() -> Self {
        Self {
            refresh: RefreshSettings::from_env(),
            source: SourceSettings::from_env(),
        }
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
