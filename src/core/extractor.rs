//! Playlist extraction
//!
//! Turns the descriptors yielded by a [`PlaylistSource`] into a
//! [`PlaylistExport`], keeping the source's order and every entry it lists.

use tracing::debug;

use crate::core::models::{
    ExportError, ExportEvent, ExportEventCallback, ExportResult, PlaylistExport, VideoRecord,
};
use crate::core::playlist_source::PlaylistSource;

pub struct PlaylistExtractor<S> {
    source: S,
    event_callback: Option<ExportEventCallback>,
}

impl<S: PlaylistSource> PlaylistExtractor<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            event_callback: None,
        }
    }

    pub fn with_event_callback(mut self, callback: ExportEventCallback) -> Self {
        self.event_callback = Some(callback);
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Build the export table for a playlist.
    ///
    /// Each video's `VideoProcessed` event fires before its record is
    /// appended. Source failures are returned as-is.
    pub async fn extract(&self, playlist_id: &str) -> ExportResult<PlaylistExport> {
        if playlist_id.trim().is_empty() {
            return Err(ExportError::InvalidPlaylistId(playlist_id.to_string()));
        }

        let videos = self.source.list_videos(playlist_id).await?;
        debug!("Source returned {} entries for {}", videos.len(), playlist_id);

        let mut export = PlaylistExport::new();
        for (index, video) in videos.into_iter().enumerate() {
            if video.is_unavailable() {
                ExportEvent::UnavailableVideo {
                    video_id: video.video_id.clone(),
                    title: video.title.clone(),
                }
                .emit(self.event_callback.as_ref());
            }

            ExportEvent::VideoProcessed {
                index,
                title: video.title.clone(),
            }
            .emit(self.event_callback.as_ref());

            export.push(VideoRecord {
                id: video.video_id,
                title: video.title,
            });
        }

        Ok(export)
    }
}
