use std::fmt;

use chrono::NaiveDateTime;

/// Flattened view of an item returned by the /Items search, carrying only what
/// the sweep loop needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaEntry {
    pub id: String,
    pub last_played: NaiveDateTime,
    pub played: bool,
    pub kind: MediaKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaKind {
    Episode {
        name: String,
        number: Option<i32>,
        season: Option<String>,
        series: Option<String>,
    },
    Other {
        name: String,
    },
}

impl MediaEntry {
    /// Console/log label, e.g. `TV: Severance, Episode 4` or `Movie: Heat`.
    pub fn label(&self) -> EntryLabel<'_> {
        EntryLabel(&self.kind)
    }
}

pub struct EntryLabel<'a>(&'a MediaKind);

impl fmt::Display for EntryLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            MediaKind::Episode { number, series, name, .. } => {
                let series = series.as_deref().unwrap_or(name);
                match number {
                    Some(number) => write!(f, "TV: {series}, Episode {number}"),
                    None => write!(f, "TV: {series}"),
                }
            }
            MediaKind::Other { name } => write!(f, "Movie: {name}"),
        }
    }
}
