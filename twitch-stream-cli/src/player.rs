use std::path::{Path, PathBuf};

use process_utils::{find_in_path, first_existing, spawn_detached};
use tracing::debug;
use url::Url;

use crate::error::{AppError, Result};

#[cfg(target_os = "macos")]
const VLC_CANDIDATES: &[&str] = &["/Applications/VLC.app/Contents/MacOS/VLC"];

#[cfg(windows)]
const VLC_CANDIDATES: &[&str] = &[
    r"C:\Program Files (x86)\VideoLAN\VLC\vlc.exe",
    r"C:\Program Files\VideoLAN\VLC\vlc.exe",
];

#[cfg(not(any(target_os = "macos", windows)))]
const VLC_CANDIDATES: &[&str] = &[];

const VLC_BINARY: &str = "vlc";

/// Resolve the player to launch: an explicit path (or bare name on `PATH`),
/// else VLC at its usual install location, else `vlc` on `PATH`.
pub fn locate(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        return path
            .to_str()
            .and_then(find_in_path)
            .ok_or_else(|| AppError::PlayerNotFound(path.to_path_buf()));
    }

    first_existing(VLC_CANDIDATES)
        .or_else(|| find_in_path(VLC_BINARY))
        .ok_or(AppError::VlcNotFound)
}

pub fn launch(player: &Path, stream: &Url) -> Result<()> {
    debug!("launching {} with {}", player.display(), stream);
    spawn_detached(player, [stream.as_str()])
        .map(|_| ())
        .map_err(|source| AppError::PlayerLaunch {
            path: player.to_path_buf(),
            source,
        })
}
