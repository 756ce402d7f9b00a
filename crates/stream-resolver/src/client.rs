use reqwest::{Client, RequestBuilder};

use crate::config::ResolverConfig;
use crate::error::{ResolveError, Result};

pub fn build_client(config: &ResolverConfig) -> Result<Client> {
    Client::builder()
        .user_agent(&config.user_agent)
        .timeout(config.timeout)
        .build()
        .map_err(|source| ResolveError::Client { source })
}

/// GET with the per-request timeout and optional `Client-Id` header applied,
/// so a caller-supplied client still honours the configuration.
pub(crate) fn get(client: &Client, config: &ResolverConfig, url: &str) -> RequestBuilder {
    let request = client.get(url).timeout(config.timeout);
    match &config.client_id {
        Some(client_id) => request.header("Client-Id", client_id),
        None => request,
    }
}

pub(crate) fn network_error(url: &str, source: reqwest::Error) -> ResolveError {
    ResolveError::Network {
        url: url.to_owned(),
        source,
    }
}
