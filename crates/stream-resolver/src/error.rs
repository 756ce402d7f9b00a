use reqwest::StatusCode;
use thiserror::Error;

/// Coarse classification of a [`ResolveError`].
///
/// Callers branch on this rather than on the error variants themselves, so that
/// "channel is offline" and "network is down" never collapse into one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    ConnectionFailed,
    MalformedCredential,
    UnknownChannel,
    NoStreamsForChannel,
    MalformedManifest,
    NoQualityAvailable,
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("failed to build http client: {source}")]
    Client {
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} failed with HTTP {status}")]
    HttpStatus { url: String, status: StatusCode },

    #[error("can't parse access token response: {source}")]
    MalformedCredential {
        #[source]
        source: serde_json::Error,
    },

    #[error("no access token issued for channel `{channel}`")]
    UnknownChannel { channel: String },

    #[error("no streams found for channel `{channel}`")]
    NoStreamsForChannel { channel: String },

    #[error("stream qualities / urls mismatch: {labels} qualities, {urls} urls")]
    VariantCountMismatch { labels: usize, urls: usize },

    #[error("malformed stream url `{url}`: {source}")]
    MalformedUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("neither `{requested}` nor `source` quality is available")]
    NoQualityAvailable { requested: String },
}

impl ResolveError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput { .. } => ErrorKind::InvalidInput,
            Self::Client { .. } | Self::Network { .. } | Self::HttpStatus { .. } => {
                ErrorKind::ConnectionFailed
            }
            Self::MalformedCredential { .. } => ErrorKind::MalformedCredential,
            Self::UnknownChannel { .. } => ErrorKind::UnknownChannel,
            Self::NoStreamsForChannel { .. } => ErrorKind::NoStreamsForChannel,
            Self::VariantCountMismatch { .. } | Self::MalformedUrl { .. } => {
                ErrorKind::MalformedManifest
            }
            Self::NoQualityAvailable { .. } => ErrorKind::NoQualityAvailable,
        }
    }

    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// The channel name to attach to [`ResolveError::NoStreamsForChannel`] is only
    /// known at the resolver level; the parser raises it with an empty channel.
    pub(crate) fn with_channel(self, channel: &str) -> Self {
        match self {
            Self::NoStreamsForChannel { channel: c } if c.is_empty() => {
                Self::NoStreamsForChannel {
                    channel: channel.to_owned(),
                }
            }
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, ResolveError>;
