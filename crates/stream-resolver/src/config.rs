use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_TOKEN_ENDPOINT: &str =
    "https://api.twitch.tv/api/channels/{channel}/access_token";
pub const DEFAULT_MANIFEST_ENDPOINT: &str =
    "https://usher.ttvnw.net/api/channel/hls/{channel}.m3u8";
pub const DEFAULT_PLAYER_TYPE: &str = "twitchweb";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/142.0.0.0 Safari/537.36";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const CHANNEL_PLACEHOLDER: &str = "{channel}";

/// Configurable options for the resolver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Access token endpoint. `{channel}` is substituted with the channel name,
    /// otherwise `/{channel}` is appended.
    pub token_endpoint: String,

    /// Variant playlist endpoint. `{channel}` is substituted with the channel name,
    /// otherwise `/{channel}.m3u8` is appended.
    pub manifest_endpoint: String,

    /// Value of the `player` query parameter sent with the manifest request
    pub player_type: String,

    /// Optional `Client-Id` header sent with both requests
    pub client_id: Option<String>,

    pub user_agent: String,

    /// Timeout applied to each of the two HTTP requests
    #[serde(rename = "timeout_secs", with = "duration_secs")]
    pub timeout: Duration,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            token_endpoint: DEFAULT_TOKEN_ENDPOINT.to_owned(),
            manifest_endpoint: DEFAULT_MANIFEST_ENDPOINT.to_owned(),
            player_type: DEFAULT_PLAYER_TYPE.to_owned(),
            client_id: None,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ResolverConfig {
    pub fn with_token_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.token_endpoint = endpoint.into();
        self
    }

    pub fn with_manifest_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.manifest_endpoint = endpoint.into();
        self
    }

    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub(crate) fn token_url(&self, channel: &str) -> String {
        expand(&self.token_endpoint, channel, "")
    }

    pub(crate) fn manifest_url(&self, channel: &str) -> String {
        expand(&self.manifest_endpoint, channel, ".m3u8")
    }
}

fn expand(template: &str, channel: &str, suffix: &str) -> String {
    if template.contains(CHANNEL_PLACEHOLDER) {
        template.replace(CHANNEL_PLACEHOLDER, channel)
    } else {
        format!("{}/{channel}{suffix}", template.trim_end_matches('/'))
    }
}

mod duration_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}
