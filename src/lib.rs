//! Playlist Exporter - Core Library
//!
//! Lists the videos of a YouTube playlist and saves their identifiers and
//! titles as `<name>.csv` and `<name>.txt`.

pub mod cli;
pub mod commands;
pub mod core;
pub mod utils;
pub mod writers;

// Re-export commonly used types
pub use commands::export::{run_export, ExportOptions};
pub use core::{
    config::ExporterConfig,
    extractor::PlaylistExtractor,
    models::{
        ExportError, ExportEvent, ExportEventCallback, ExportResult, ExportSummary,
        PlaylistExport, VideoDescriptor, VideoRecord,
    },
    playlist_source::PlaylistSource,
    youtube_playlist::YtDlpPlaylistSource,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
