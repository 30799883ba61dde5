pub mod cache;
pub mod cli;
pub mod config;
pub mod domain;
pub mod services;
pub mod sources;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::services::refresh::RefreshService;
use crate::sources::HttpStandingsSource;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_refresh(once: bool) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let run_once = once || config.refresh.run_once;
        let source = HttpStandingsSource::new(&config.source)?;
        let service = RefreshService::new(config, source)?;
        if run_once {
            service.run_once().await
        } else {
            service.run_forever().await
        }
    })
}
