use reqwest::Client;
use tracing::debug;

use crate::client::{get, network_error};
use crate::config::ResolverConfig;
use crate::error::{ResolveError, Result};
use crate::media::{ChannelId, Credential};

/// Exchanges a channel name for a `(token, signature)` pair.
///
/// A present-but-empty token is returned as-is; deciding that it means
/// "no such channel" is left to the caller.
pub async fn fetch_credential(
    client: &Client,
    config: &ResolverConfig,
    channel: &ChannelId,
) -> Result<Credential> {
    let url = config.token_url(channel.as_str());
    debug!("requesting access token: {}", url);

    let response = get(client, config, &url)
        .send()
        .await
        .map_err(|e| network_error(&url, e))?;

    let status = response.status();
    debug!("access token response status: {}", status);
    if !status.is_success() {
        return Err(ResolveError::HttpStatus { url, status });
    }

    let body = response.text().await.map_err(|e| network_error(&url, e))?;
    let credential: Credential = serde_json::from_str(&body)
        .map_err(|source| ResolveError::MalformedCredential { source })?;

    debug!("credential: {:?}", credential);
    Ok(credential)
}
