//! Resolve a Twitch channel name into a playable HLS variant URL.
//!
//! Resolution is a two-step handshake: an access token is requested for the
//! channel, then the variant playlist is fetched with that token and one
//! variant is picked by quality, falling back to `source`.
//!
//! ```no_run
//! # async fn run() -> Result<(), stream_resolver::ResolveError> {
//! use stream_resolver::{Resolver, ResolverConfig};
//!
//! let resolver = Resolver::new(ResolverConfig::default())?;
//! let result = resolver.resolve("some_channel", "best").await?;
//! println!("{}", result.selected.url);
//! # Ok(())
//! # }
//! ```

mod client;
pub mod config;
pub mod credential;
pub mod error;
pub mod manifest;
pub mod media;
pub mod quality;
mod resolver;

pub use client::build_client;
pub use config::ResolverConfig;
pub use error::{ErrorKind, ResolveError, Result};
pub use media::{ChannelId, Credential, ResolutionResult, StreamVariant};
pub use quality::{Quality, SOURCE_QUALITY, select};
pub use resolver::Resolver;
