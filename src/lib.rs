pub mod config;
pub mod error;
pub mod jellyfin;
pub mod media_entry;
pub mod retention;
pub mod sweep;
