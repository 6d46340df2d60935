use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use jelly_sweep::{
    config::Config,
    jellyfin::{self, client::Jellyfin},
    sweep,
};

#[derive(Parser, Debug)]
#[command(version, about = "Deletes watched Jellyfin media past the retention window")]
struct Args {
    /// Report what would be deleted without issuing delete calls
    #[arg(long)]
    dry_run: bool,
}

/// The deletion log sits one level above the directory holding the
/// executable, matching where the original deployment kept it. Falls back to
/// the working directory.
fn log_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().and_then(Path::parent).map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();

    let file_appender = tracing_appender::rolling::never(log_dir(), "deletion_log.log");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(file_appender)
        .with_ansi(false)
        .init();

    match run(args).await {
        Ok(()) => Ok(()),
        Err(err) => {
            // Fatal errors land in the log before the process dies.
            error!("{err}");
            Err(err)
        }
    }
}

async fn run(args: Args) -> Result<(), anyhow::Error> {
    // Captured once; every retention decision in the run compares against it.
    let now = Utc::now().naive_utc();

    let config = Config::from_env()?;
    let mut client = Jellyfin::new(config.base_url.clone(), config.api_token.clone());

    // Deletion needs an access token, not the plain API key.
    let access_token = jellyfin::resolve_access_token(&client, &config).await?;
    client.set_api_key(access_token);

    let user_id = jellyfin::resolve_user_id(&client, &config).await?;
    client.set_user_id(user_id);

    let entries = jellyfin::fetch_watched(&client).await?;
    sweep::sweep(&client, &entries, now, args.dry_run).await?;

    Ok(())
}
