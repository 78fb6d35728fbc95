//! Playlist source abstraction
//!
//! Anything able to enumerate the videos of a playlist. The production source
//! shells out to yt-dlp (see [`crate::core::youtube_playlist`]); tests plug in
//! a fixture.

use async_trait::async_trait;

use crate::core::models::{ExportResult, VideoDescriptor};

#[async_trait]
pub trait PlaylistSource: Send + Sync {
    /// List the playlist's videos in the order the source enumerates them.
    ///
    /// Failing to resolve the playlist (missing, private, network) must be
    /// reported as an error, never as an empty list.
    async fn list_videos(&self, playlist_id: &str) -> ExportResult<Vec<VideoDescriptor>>;
}
