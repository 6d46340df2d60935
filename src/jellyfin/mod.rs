use tracing::warn;

use crate::{
    config::Config,
    error::SweepError,
    media_entry::{MediaEntry, MediaKind},
    retention,
};
use client::Jellyfin;

pub mod client;
pub mod models;

/// Returns the pre-provisioned access token when one is configured, otherwise
/// exchanges the admin credentials for one. Deletion calls reject the plain
/// API key, so the run cannot proceed without this.
pub async fn resolve_access_token(
    client: &Jellyfin,
    config: &Config,
) -> Result<String, anyhow::Error> {
    if let Some(token) = &config.access_token {
        return Ok(token.clone());
    }
    let auth = client
        .authenticate_by_name(&config.admin_user, &config.admin_password)
        .await?;
    Ok(auth.access_token)
}

/// Returns the pre-provisioned user id when one is configured, otherwise scans
/// the full user list for an exact name match.
pub async fn resolve_user_id(client: &Jellyfin, config: &Config) -> Result<String, anyhow::Error> {
    if let Some(user_id) = &config.user_id {
        return Ok(user_id.clone());
    }
    let users = client.users().await?;
    users
        .into_iter()
        .find(|user| user.name == config.user)
        .map(|user| user.id)
        .ok_or_else(|| SweepError::UserNotFound(config.user.clone()).into())
}

/// Fetches the watched, non-favorite items for the resolved user and flattens
/// them into sweep entries. Entries without a parseable LastPlayedDate cannot
/// be aged, so they are skipped with a warning.
pub async fn fetch_watched(client: &Jellyfin) -> Result<Vec<MediaEntry>, anyhow::Error> {
    let response = client.watched_items().await?;

    let mut entries = Vec::with_capacity(response.items.len());
    for item in response.items {
        let Some(user_data) = &item.user_data else {
            warn!(id = %item.id, "item has no UserData, skipping");
            continue;
        };
        let Some(raw_stamp) = &user_data.last_played_date else {
            warn!(id = %item.id, "item has no LastPlayedDate, skipping");
            continue;
        };
        let last_played = match retention::parse_last_played(raw_stamp) {
            Ok(stamp) => stamp,
            Err(error) => {
                warn!(id = %item.id, %error, "skipping item");
                continue;
            }
        };

        let kind = if item.item_type == "Episode" {
            MediaKind::Episode {
                name: item.name,
                number: item.index_number,
                season: item.season_name,
                series: item.series_name,
            }
        } else {
            MediaKind::Other { name: item.name }
        };

        entries.push(MediaEntry {
            id: item.id,
            last_played,
            played: user_data.played,
            kind,
        });
    }

    Ok(entries)
}
