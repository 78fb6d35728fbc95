//! Core business logic module
//!
//! Domain models, configuration, the playlist source abstraction and the
//! extractor that turns a playlist into an export table.

pub mod config;
pub mod extractor;
pub mod models;
pub mod playlist_source;
pub mod youtube_playlist;

#[cfg(test)]
mod export_integration_tests;

// Re-export commonly used types
pub use config::ExporterConfig;
pub use extractor::PlaylistExtractor;
pub use playlist_source::PlaylistSource;
pub use youtube_playlist::YtDlpPlaylistSource;
