use anyhow::Context;
use chrono::{DateTime, NaiveDateTime};

/// Watched items older than this many whole days are deleted.
pub const RETENTION_DAYS: i64 = 6;

/// Parses a Jellyfin LastPlayedDate, ignoring any timezone offset: the clock
/// time is taken as written. Jellyfin emits RFC 3339 with seven fractional
/// digits ("2024-03-01T19:31:46.1766667Z").
pub fn parse_last_played(raw: &str) -> Result<NaiveDateTime, anyhow::Error> {
    DateTime::parse_from_rfc3339(raw)
        .map(|stamp| stamp.naive_local())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"))
        .with_context(|| format!("unparseable LastPlayedDate {raw:?}"))
}

/// True when `last_played` is strictly more than [`RETENTION_DAYS`] whole days
/// before `now`. Day counting truncates: 6 days 23h elapsed is still 6 days.
pub fn past_retention(last_played: NaiveDateTime, now: NaiveDateTime) -> bool {
    (now - last_played).num_days() > RETENTION_DAYS
}
