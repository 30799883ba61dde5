use std::time::Duration;

use anyhow::{Context, Result};
use log::info;
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::StandingsSource;
use crate::config::settings::{SourceSettings, SourceVariant};
use crate::domain::{GameRecord, TeamRow};

/// HTTP binding of [`StandingsSource`] against the ranking service.
///
/// The service publishes the table under two variant names; the variant is
/// fixed at construction and scopes every endpoint.
pub struct HttpStandingsSource {
    client: Client,
    base_url: String,
    variant: SourceVariant,
}

impl HttpStandingsSource {
    pub fn new(settings: &SourceSettings) -> Result<Self> {
        let client = Self::build_client(settings)?;
        Ok(Self {
            client,
            base_url: settings.base_url.clone(),
            variant: settings.variant,
        })
    }

    fn build_client(settings: &SourceSettings) -> Result<Client> {
        Client::builder()
            .user_agent(settings.user_agent)
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }

    fn build_url(&self, resource: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            self.variant.path_segment(),
            resource
        )
    }

    async fn fetch_json<T: DeserializeOwned>(&self, resource: &str) -> Result<T> {
        let url = self.build_url(resource);
        info!("Fetching {} from {}", resource, url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to send GET request")?;

        if !response.status().is_success() {
            anyhow::bail!("API returned status: {}", response.status());
        }

        response
            .json()
            .await
            .with_context(|| format!("Failed to decode {resource} response"))
    }
}

impl StandingsSource for HttpStandingsSource {
    async fn compute_rows(&self) -> Result<Vec<TeamRow>> {
        self.fetch_json("standings").await
    }

    async fn games_played(&self) -> Result<Vec<GameRecord>> {
        self.fetch_json("games").await
    }
}
