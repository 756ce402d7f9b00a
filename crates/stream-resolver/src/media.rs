use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{ResolveError, Result};

/// A validated, lower-cased channel name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChannelId(String);

impl ChannelId {
    pub fn parse(input: &str) -> Result<Self> {
        let channel = input.trim().to_lowercase();
        if channel.is_empty() {
            return Err(ResolveError::invalid_input("channel name is empty"));
        }
        Ok(Self(channel))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Short-lived access token and its signature, as issued for one channel.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Credential {
    pub token: String,
    #[serde(alias = "sig")]
    pub signature: String,
}

// The token is a signed JSON blob; keep it out of logs.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("token", &format_args!("<{} bytes>", self.token.len()))
            .field("signature", &self.signature)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreamVariant {
    // Lower-cased quality label, e.g. "source", "high", "audio only"
    pub quality: String,
    pub url: Url,
}

impl fmt::Display for StreamVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.quality, self.url)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionResult {
    pub selected: StreamVariant,
    /// `false` when the requested quality was missing and `source` was picked instead
    pub exact_match: bool,
}
