use chrono::NaiveDateTime;
use tracing::{info, warn};

use crate::{jellyfin::client::Jellyfin, media_entry::MediaEntry, retention};

const ITALIC: &str = "\x1b[3m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SweepSummary {
    pub deleted: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Walks the entries in order and deletes those past retention. A delete call
/// answering with a non-success status is a per-item warning, not a fatal
/// error; the batch keeps going.
pub async fn sweep(
    client: &Jellyfin,
    entries: &[MediaEntry],
    now: NaiveDateTime,
    dry_run: bool,
) -> Result<SweepSummary, anyhow::Error> {
    let mut summary = SweepSummary::default();

    for entry in entries {
        let label = entry.label();
        println!("Checking entry {ITALIC}{label}{RESET}");

        if !retention::past_retention(entry.last_played, now) {
            println!("\t{GREEN}Time threshold not met for {label}. Passing{RESET}");
            summary.skipped += 1;
            continue;
        }

        if dry_run {
            println!("Would delete {label}");
            info!("Would delete {label}");
            summary.deleted += 1;
            continue;
        }

        let response = client.delete_item(&entry.id).await?;
        if response.status().is_success() {
            summary.deleted += 1;
            info!("Deleted {label}");
            println!("Deleted {label}");
        } else {
            summary.failed += 1;
            let body = response.text().await.unwrap_or_default();
            println!("{RED}WARN{RESET}: Deletion failed with {body}");
            warn!("Failed to delete {label}");
            warn!("{body}");
        }
    }

    if dry_run {
        info!(
            "Dry run completed. {} item(s) would be deleted",
            summary.deleted
        );
    } else if summary.deleted > 0 {
        info!("Deletion completed");
    } else {
        info!("Script completed. Nothing to delete");
    }

    Ok(summary)
}
