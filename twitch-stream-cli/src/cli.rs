use std::path::PathBuf;

use clap::Parser;

const ABOUT: &str = "Play a Twitch stream in VLC, or print its playable URL";

const LONG_ABOUT: &str = "twitch-stream resolves a Twitch channel into a playable HLS \
URL and opens it in VLC (or any player given with --player). Pass -u to print the \
URL instead, so the stream can be played by any application. Run it several times \
with different streamers to watch multiple streams at once.";

#[derive(Parser, Debug)]
#[command(name = "twitch-stream", version, about = ABOUT, long_about = LONG_ABOUT)]
pub struct Args {
    /// The twitch username of the stream you want to watch
    pub streamer: String,

    /// Stream quality: best, high, medium, low, mobile or audio
    #[arg(default_value = "best")]
    pub quality: String,

    /// Print the stream URL to the console instead of opening a player
    #[arg(short = 'u', long = "url")]
    pub show_url: bool,

    /// List every available quality and its URL
    #[arg(short, long, conflicts_with = "show_url")]
    pub list: bool,

    /// Print machine-readable JSON (with --url or --list)
    #[arg(long)]
    pub json: bool,

    /// Print debug information to the console
    #[arg(short, long)]
    pub debug: bool,

    /// Only print errors and requested results (no progress messages)
    #[arg(short, long, conflicts_with = "debug")]
    pub quiet: bool,

    /// Media player executable to launch instead of VLC
    #[arg(long, value_name = "PATH", env = "TWITCH_STREAM_PLAYER")]
    pub player: Option<PathBuf>,

    /// Timeout for each request to Twitch, in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
