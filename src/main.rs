//! `podcast-dl <podcastKey>`: download the latest episode of a configured
//! podcast.

use clap::Parser;
use clap::error::ErrorKind;
use podcast_dl::{Config, DownloadTarget, PodcastDownloader, Result, ToExitCode};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Printed on stdout whenever the arguments are wrong
const USAGE: &str = "Usage: podcast-dl <podcastKey>";

/// Exit status when the feed yields no episode URL
const NO_EPISODE_EXIT: u8 = 2;

/// Download the latest episode of a podcast listed in ~/.podcasts.toml
#[derive(Debug, Parser)]
#[command(name = "podcast-dl", version, about)]
struct Cli {
    /// Key of the podcast in the [podcasts] table
    #[arg(allow_hyphen_values = true)]
    podcast_id: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            // Ignore a closed stdout, nothing else to do with --help output
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(_) => {
            println!("{USAGE}");
            return ExitCode::from(1);
        }
    };

    init_tracing();

    match run(&cli.podcast_id).await {
        Ok(Some(_)) => ExitCode::SUCCESS,
        Ok(None) => {
            eprintln!("Could not get the latest episode for {}", cli.podcast_id);
            ExitCode::from(NO_EPISODE_EXIT)
        }
        Err(e) => {
            tracing::debug!(code = e.error_code(), "Aborting");
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(podcast_id: &str) -> Result<Option<DownloadTarget>> {
    let config = Config::instance()?;
    let downloader = PodcastDownloader::new(config)?;

    let Some(target) = downloader.resolve_latest(podcast_id).await? else {
        return Ok(None);
    };

    println!(
        "Downloading {} at {}",
        target.file_name,
        target.path.display()
    );
    downloader.download(&target).await?;

    Ok(Some(target))
}

/// Log to stderr so stdout only carries progress lines. `RUST_LOG` overrides
/// the default filter.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("podcast_dl=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
