#[cfg(feature = "colored-output")]
use colored::*;
use serde_json::json;
use stream_resolver::{ErrorKind, ResolutionResult, ResolveError, StreamVariant};

use crate::error::{AppError, Result};

const THANKS_MSG: &str = "—————— Thanks for using twitch-stream! ——————";

pub struct OutputManager {
    #[cfg_attr(not(feature = "colored-output"), allow(dead_code))]
    colored: bool,
    json: bool,
    quiet: bool,
}

impl OutputManager {
    pub fn new(colored: bool, json: bool, quiet: bool) -> Self {
        Self {
            colored,
            json,
            quiet,
        }
    }

    /// Progress lines and the farewell banner; results and errors always print.
    fn shows_progress(&self) -> bool {
        !self.json && !self.quiet
    }

    pub fn info(&self, message: &str) {
        if !self.shows_progress() {
            return;
        }
        println!("{} -- {}", self.tag("[info]", false), message);
    }

    pub fn error(&self, message: &str) {
        if self.json {
            let error_json = json!({ "status": "error", "message": message });
            println!("{error_json}");
            return;
        }
        eprintln!("{} -- {}", self.tag("[error]", true), message);
    }

    pub fn thanks(&self) {
        if self.shows_progress() {
            println!("{THANKS_MSG}");
        }
    }

    pub fn selection(&self, channel: &str, result: &ResolutionResult) -> Result<()> {
        if self.json {
            let value = json!({
                "status": "ok",
                "channel": channel,
                "quality": result.selected.quality,
                "url": result.selected.url,
                "exact_match": result.exact_match,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
            return Ok(());
        }
        self.info(&format!("url found for \"{channel}\" stream"));
        println!("URL: {}", result.selected.url);
        Ok(())
    }

    pub fn streams(&self, channel: &str, streams: &[StreamVariant]) -> Result<()> {
        if self.json {
            let value = json!({ "status": "ok", "channel": channel, "streams": streams });
            println!("{}", serde_json::to_string_pretty(&value)?);
            return Ok(());
        }
        self.info(&format!("{} qualities available for \"{channel}\"", streams.len()));
        let width = streams.iter().map(|s| s.quality.len()).max().unwrap_or(0);
        for stream in streams {
            println!("  {:<width$}  {}", stream.quality, stream.url);
        }
        Ok(())
    }

    #[cfg(feature = "colored-output")]
    fn tag(&self, tag: &str, error: bool) -> String {
        if !self.colored {
            return tag.to_string();
        }
        if error {
            tag.red().bold().to_string()
        } else {
            tag.green().to_string()
        }
    }

    #[cfg(not(feature = "colored-output"))]
    fn tag(&self, tag: &str, _error: bool) -> String {
        tag.to_string()
    }
}

/// One actionable message per failure kind.
pub fn describe(err: &AppError, channel: &str, quality: &str) -> String {
    let AppError::Resolve(err) = err else {
        return err.to_string();
    };
    describe_resolve(err, channel, quality)
}

fn describe_resolve(err: &ResolveError, channel: &str, quality: &str) -> String {
    match err.kind() {
        ErrorKind::InvalidInput => err.to_string(),
        ErrorKind::ConnectionFailed => {
            format!("unable to connect to the stream at twitch.tv/{channel}, try again?")
        }
        ErrorKind::MalformedCredential => format!(
            "unable to read the credentials issued for twitch.tv/{channel}, try again later."
        ),
        ErrorKind::UnknownChannel => format!(
            "no credentials received, check the streamer name at https://www.twitch.tv/{channel} and try again."
        ),
        ErrorKind::NoStreamsForChannel => {
            format!("couldn't find any stream for twitch.tv/{channel}, is the channel live?")
        }
        ErrorKind::MalformedManifest => {
            format!("unable to retrieve stream for twitch.tv/{channel} at \"{quality}\" quality")
        }
        ErrorKind::NoQualityAvailable => format!(
            "neither \"{quality}\" nor \"best\" quality is available for twitch.tv/{channel}"
        ),
    }
}
