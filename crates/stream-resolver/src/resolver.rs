use reqwest::Client;
use tracing::{debug, info};

use crate::client::build_client;
use crate::config::ResolverConfig;
use crate::credential::fetch_credential;
use crate::error::{ResolveError, Result};
use crate::manifest::{fetch_manifest, parse_variants};
use crate::media::{ChannelId, Credential, ResolutionResult, StreamVariant};
use crate::quality::{Quality, select};

/// Resolves a channel name and a quality into a playable variant URL.
///
/// Holds no per-call state: each call issues its own credential and manifest
/// requests, so one instance can be shared across tasks.
#[derive(Debug, Clone)]
pub struct Resolver {
    client: Client,
    config: ResolverConfig,
}

impl Resolver {
    pub fn new(config: ResolverConfig) -> Result<Self> {
        let client = build_client(&config)?;
        Ok(Self { client, config })
    }

    pub fn with_client(client: Client, config: ResolverConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub async fn resolve(&self, channel: &str, quality: &str) -> Result<ResolutionResult> {
        let channel = ChannelId::parse(channel)?;
        let quality = Quality::parse(quality)?;

        let variants = self.fetch_variants(&channel).await?;
        let result = select(&variants, quality)?;
        info!(
            "selected {} stream for {}: {}",
            result.selected.quality, channel, result.selected.url
        );
        Ok(result)
    }

    /// Every variant currently offered for `channel`, in playlist order.
    pub async fn streams(&self, channel: &str) -> Result<Vec<StreamVariant>> {
        let channel = ChannelId::parse(channel)?;
        self.fetch_variants(&channel).await
    }

    async fn fetch_variants(&self, channel: &ChannelId) -> Result<Vec<StreamVariant>> {
        let credential = self.credential(channel).await?;
        let raw = fetch_manifest(&self.client, &self.config, channel, &credential).await?;
        debug!("variant playlist for {}: {} bytes", channel, raw.len());
        parse_variants(&raw).map_err(|e| e.with_channel(channel.as_str()))
    }

    async fn credential(&self, channel: &ChannelId) -> Result<Credential> {
        let credential = fetch_credential(&self.client, &self.config, channel).await?;
        // an empty token is how the platform answers for a nonexistent user
        if credential.token.trim().is_empty() {
            return Err(ResolveError::UnknownChannel {
                channel: channel.to_string(),
            });
        }
        Ok(credential)
    }
}
