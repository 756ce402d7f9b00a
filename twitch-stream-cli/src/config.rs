use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use stream_resolver::ResolverConfig;
use tracing::debug;

use crate::error::{AppError, Result};

/// Settings read from `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub resolver: ResolverConfig,
    /// Player executable, overriding VLC discovery
    pub player: Option<PathBuf>,
}

impl AppConfig {
    /// Load from `path`, or from the default location when `path` is `None`.
    ///
    /// A missing default file yields the defaults; a missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => match Self::default_path() {
                Some(p) => (p, false),
                None => return Ok(Self::default()),
            },
        };

        if !path.is_file() {
            if explicit {
                return Err(AppError::ConfigNotFound(path));
            }
            debug!("no configuration at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config = toml::from_str(&content).map_err(|source| AppError::ConfigParse {
            path: path.clone(),
            source,
        })?;
        debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("twitch-stream").join("config.toml"))
    }

    /// Command-line values win over the file.
    pub fn apply_overrides(&mut self, timeout_secs: Option<u64>, player: Option<PathBuf>) {
        if let Some(secs) = timeout_secs {
            self.resolver.timeout = Duration::from_secs(secs);
        }
        if player.is_some() {
            self.player = player;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stream_resolver::config::DEFAULT_TIMEOUT;

    #[test]
    fn loads_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
player = "/opt/mpv/bin/mpv"

[resolver]
timeout_secs = 4
client_id = "kimne78kx3ncx6brgo4mv6wki5h1ko"
"#,
        )
        .unwrap();

        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(config.player, Some(PathBuf::from("/opt/mpv/bin/mpv")));
        assert_eq!(config.resolver.timeout, Duration::from_secs(4));
        assert_eq!(config.resolver.player_type, "twitchweb");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, AppError::ConfigNotFound(_)));
    }

    #[test]
    fn invalid_toml_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[resolver\n").unwrap();
        let err = AppConfig::load(Some(&path)).unwrap_err();
        assert!(matches!(err, AppError::ConfigParse { .. }));
    }

    #[test]
    fn overrides_replace_file_values() {
        let mut config = AppConfig::default();
        assert_eq!(config.resolver.timeout, DEFAULT_TIMEOUT);
        config.player = Some(PathBuf::from("/usr/bin/vlc"));

        config.apply_overrides(Some(30), None);
        assert_eq!(config.resolver.timeout, Duration::from_secs(30));
        assert_eq!(config.player, Some(PathBuf::from("/usr/bin/vlc")));

        config.apply_overrides(None, Some(PathBuf::from("mpv")));
        assert_eq!(config.player, Some(PathBuf::from("mpv")));
    }
}
