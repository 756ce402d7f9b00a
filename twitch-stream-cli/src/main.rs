mod cli;
mod config;
mod error;
mod output;
mod player;

use std::io::IsTerminal;
use std::process;

use clap::Parser;
use stream_resolver::{ChannelId, Resolver, SOURCE_QUALITY};
use tracing::{Level, debug};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use crate::{cli::Args, config::AppConfig, error::Result, output::OutputManager};

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging(args.debug, args.quiet);

    let output = OutputManager::new(std::io::stdout().is_terminal(), args.json, args.quiet);
    if let Err(e) = run(&args, &output).await {
        debug!("{:?}", e);
        output.error(&output::describe(&e, &args.streamer, &args.quality));
        process::exit(1);
    }
}

async fn run(args: &Args, output: &OutputManager) -> Result<()> {
    let mut config = AppConfig::load(args.config.as_deref())?;
    config.apply_overrides(args.timeout, args.player.clone());
    debug!("configuration: {:?}", config);

    let resolver = Resolver::new(config.resolver.clone())?;
    let channel = ChannelId::parse(&args.streamer)?;

    if args.list {
        output.info(&format!("retrieving available qualities for twitch.tv/{channel}"));
        let streams = resolver.streams(&args.streamer).await?;
        return output.streams(channel.as_str(), &streams);
    }

    output.info(&format!("acquiring credentials to watch twitch.tv/{channel}"));
    let result = resolver.resolve(&args.streamer, &args.quality).await?;

    if !result.exact_match {
        output.info(&format!(
            "quality \"{}\" wasn't available, choosing \"best\" ({})",
            args.quality.trim(),
            SOURCE_QUALITY
        ));
    }

    if args.show_url {
        output.selection(channel.as_str(), &result)?;
        output.thanks();
        return Ok(());
    }

    let player = player::locate(config.player.as_deref())?;
    output.info(&format!(
        "opening {}, please wait until \"{channel}\" stream starts playing...",
        player.display()
    ));
    player::launch(&player, &result.selected.url)?;
    output.thanks();
    Ok(())
}

fn init_logging(debug: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(debug),
        )
        .init();
}
