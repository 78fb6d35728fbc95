//! Export command
//!
//! Runs the whole pipeline: extract, optional pause, then write the CSV and
//! text outputs.

use std::path::PathBuf;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::core::extractor::PlaylistExtractor;
use crate::core::models::{ExportEvent, ExportEventCallback, ExportResult, ExportSummary};
use crate::core::playlist_source::PlaylistSource;
use crate::utils::validation::normalize_playlist_id;
use crate::writers::{save_to_csv, save_to_txt};

pub const DEFAULT_BASE_NAME: &str = "playlist";

/// Inputs of a single export run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Playlist identifier or playlist URL
    pub playlist_id: String,
    /// File stem shared by `<base>.csv` and `<base>.txt`
    pub base_name: PathBuf,
    /// Seconds to pause once, after extraction and before writing
    pub wait_seconds: u64,
}

impl ExportOptions {
    pub fn new(playlist_id: impl Into<String>) -> Self {
        Self {
            playlist_id: playlist_id.into(),
            base_name: PathBuf::from(DEFAULT_BASE_NAME),
            wait_seconds: 0,
        }
    }
}

/// Export a playlist to `<base>.csv` and `<base>.txt`.
///
/// Nothing is written if extraction fails. Empty outputs are skipped, which
/// still counts as success.
pub async fn run_export<S: PlaylistSource>(
    source: S,
    options: &ExportOptions,
    event_callback: Option<ExportEventCallback>,
) -> ExportResult<ExportSummary> {
    let start = Instant::now();
    let callback = event_callback.as_ref();

    let playlist_id = normalize_playlist_id(&options.playlist_id)?;
    ExportEvent::ProcessingPlaylist {
        playlist_id: playlist_id.clone(),
    }
    .emit(callback);

    let mut extractor = PlaylistExtractor::new(source);
    if let Some(callback) = &event_callback {
        extractor = extractor.with_event_callback(callback.clone());
    }
    let export = extractor.extract(&playlist_id).await?;
    info!("Extracted {} videos from {}", export.len(), playlist_id);

    if options.wait_seconds > 0 {
        ExportEvent::Waiting {
            seconds: options.wait_seconds,
        }
        .emit(callback);
        tokio::time::sleep(Duration::from_secs(options.wait_seconds)).await;
    }

    let csv_path = if export.is_empty() {
        debug!("Playlist {} is empty, no CSV written", playlist_id);
        None
    } else {
        save_to_csv(export.records(), &options.base_name, callback)?
    };

    let txt_path = if export.ids().is_empty() {
        None
    } else {
        save_to_txt(export.ids(), &options.base_name, callback)?
    };

    let elapsed = start.elapsed();
    ExportEvent::Finished { elapsed }.emit(callback);

    Ok(ExportSummary {
        export,
        csv_path,
        txt_path,
        elapsed,
    })
}
