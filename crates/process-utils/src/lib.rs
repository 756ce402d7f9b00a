//! Helpers for locating and launching external programs.

use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

use tracing::debug;

#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// Apply the Windows `CREATE_NO_WINDOW` flag to child processes.
///
/// On non-Windows targets this is a no-op.
pub trait NoWindowExt {
    fn no_window(&mut self) -> &mut Self;
}

impl NoWindowExt for Command {
    fn no_window(&mut self) -> &mut Self {
        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            self.creation_flags(CREATE_NO_WINDOW);
        }
        self
    }
}

/// Start `program` with `args`, detached from our stdio, without waiting for it.
pub fn spawn_detached<I, S>(program: impl AsRef<OsStr>, args: I) -> std::io::Result<Child>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .no_window();
    debug!("spawning {:?}", cmd);
    cmd.spawn()
}

/// First candidate that exists as a regular file.
pub fn first_existing<P: AsRef<Path>>(candidates: &[P]) -> Option<PathBuf> {
    candidates
        .iter()
        .map(AsRef::<Path>::as_ref)
        .find(|p| p.is_file())
        .map(Path::to_path_buf)
}

/// Look `name` up in `PATH`, trying `PATHEXT` suffixes on Windows.
pub fn find_in_path(name: &str) -> Option<PathBuf> {
    let path = env::var_os("PATH")?;
    find_in(&path, name)
}

fn find_in(path: &OsStr, name: &str) -> Option<PathBuf> {
    let suffixes = executable_suffixes();
    env::split_paths(path)
        .filter(|dir| !dir.as_os_str().is_empty())
        .find_map(|dir| {
            suffixes
                .iter()
                .map(|suffix| {
                    let mut file = OsString::from(name);
                    file.push(suffix);
                    dir.join(file)
                })
                .find(|candidate| candidate.is_file())
        })
}

#[cfg(windows)]
fn executable_suffixes() -> Vec<String> {
    let mut suffixes = vec![String::new()];
    let pathext = env::var("PATHEXT").unwrap_or_else(|_| ".EXE;.CMD;.BAT;.COM".to_string());
    suffixes.extend(pathext.split(';').filter(|s| !s.is_empty()).map(str::to_owned));
    suffixes
}

#[cfg(not(windows))]
fn executable_suffixes() -> Vec<String> {
    vec![String::new()]
}
