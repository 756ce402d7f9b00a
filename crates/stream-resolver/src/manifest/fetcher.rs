use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::client::{get, network_error};
use crate::config::ResolverConfig;
use crate::error::{ResolveError, Result};
use crate::media::{ChannelId, Credential};

/// Builds the variant playlist URL. `cache_buster` only defeats intermediate
/// caches and has no effect on the returned playlist.
pub fn manifest_url(
    config: &ResolverConfig,
    channel: &ChannelId,
    credential: &Credential,
    cache_buster: u32,
) -> String {
    format!(
        "{}?player={}&token={}&sig={}&allow_audio_only=true&allow_source=true&type=any&allow_spectre=false&p={}",
        config.manifest_url(channel.as_str()),
        urlencoding::encode(&config.player_type),
        urlencoding::encode(&credential.token),
        credential.signature,
        cache_buster,
    )
}

/// Fetches the raw variant playlist text for a live channel.
///
/// HTTP 404 means the channel exists but is not live.
pub async fn fetch_manifest(
    client: &Client,
    config: &ResolverConfig,
    channel: &ChannelId,
    credential: &Credential,
) -> Result<String> {
    let url = manifest_url(config, channel, credential, rand::random::<u32>());
    // the query carries the token, log the endpoint only
    let endpoint = config.manifest_url(channel.as_str());
    debug!("requesting variant playlist: {}", endpoint);

    let response = get(client, config, &url)
        .send()
        .await
        .map_err(|e| network_error(&endpoint, e))?;

    let status = response.status();
    debug!("variant playlist response status: {}", status);
    match status {
        StatusCode::NOT_FOUND => {
            return Err(ResolveError::NoStreamsForChannel {
                channel: channel.to_string(),
            });
        }
        s if !s.is_success() => {
            return Err(ResolveError::HttpStatus {
                url: endpoint,
                status,
            });
        }
        _ => {}
    }

    response.text().await.map_err(|e| network_error(&endpoint, e))
}
