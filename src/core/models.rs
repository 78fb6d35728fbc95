//! Core data models for the playlist exporter

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// One exported playlist entry.
///
/// Serializes with the `ID` / `Name` column names used by the CSV export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    #[serde(rename = "ID")]
    pub id: String,

    #[serde(rename = "Name")]
    pub title: String,
}

/// Entry as reported by a playlist source

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoDescriptor {
    pub video_id: String,

    pub title: String,

    /// Availability marker reported by the source, if any ("public", "private", ...)
    pub availability: Option<String>,
}

const UNAVAILABLE_TITLES: &[&str] = &["[Private video]", "[Deleted video]"];

const UNAVAILABLE_STATES: &[&str] = &["private", "needs_auth", "premium_only", "subscriber_only"];

impl VideoDescriptor {
    pub fn new(video_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            video_id: video_id.into(),
            title: title.into(),
            availability: None,
        }
    }

    /// Whether the source listed this entry without it being watchable
    pub fn is_unavailable(&self) -> bool {
        UNAVAILABLE_TITLES.contains(&self.title.as_str())
            || self
                .availability
                .as_deref()
                .is_some_and(|state| UNAVAILABLE_STATES.contains(&state))
    }
}

/// Ordered table of exported videos plus the parallel id list.
///
/// Records and ids are only ever appended together, so `ids()[i]` always
/// belongs to `records()[i]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaylistExport {
    records: Vec<VideoRecord>,
    ids: Vec<String>,
}

impl PlaylistExport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: VideoRecord) {
        self.ids.push(record.id.clone());
        self.records.push(record);
    }

    pub fn records(&self) -> &[VideoRecord] {
        &self.records
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<VideoRecord> for PlaylistExport {
    fn from_iter<I: IntoIterator<Item = VideoRecord>>(iter: I) -> Self {
        let mut export = Self::new();
        for record in iter {
            export.push(record);
        }
        export
    }
}

/// Operator-facing events emitted while exporting

#[derive(Debug, Clone, PartialEq)]
pub enum ExportEvent {
    ProcessingPlaylist { playlist_id: String },

    VideoProcessed { index: usize, title: String },

    UnavailableVideo { video_id: String, title: String },

    Waiting { seconds: u64 },

    CsvSaved { path: PathBuf },

    TextSaved { path: PathBuf },

    Finished { elapsed: Duration },
}

impl fmt::Display for ExportEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProcessingPlaylist { playlist_id } => {
                write!(f, "Processing playlist {playlist_id}...")
            }
            Self::VideoProcessed { title, .. } => write!(f, "Processed video: {title}"),
            Self::UnavailableVideo { video_id, title } => write!(
                f,
                "Warning: video {video_id} ({title}) is listed but not available"
            ),
            Self::Waiting { seconds } => {
                write!(f, "Waiting {seconds} seconds before writing output files...")
            }
            Self::CsvSaved { path } => write!(f, "CSV file saved as {}", path.display()),
            Self::TextSaved { path } => write!(f, "Text file saved as {}", path.display()),
            Self::Finished { elapsed } => write!(
                f,
                "--- Total time spent: {} seconds ---",
                elapsed.as_secs_f64()
            ),
        }
    }
}

impl ExportEvent {
    /// Record the event in the trace log and hand it to the callback, if any
    pub fn emit(self, callback: Option<&ExportEventCallback>) {
        match &self {
            Self::UnavailableVideo { .. } => tracing::warn!("{}", self),
            _ => tracing::info!("{}", self),
        }

        if let Some(callback) = callback {
            callback(&self);
        }
    }
}

/// Callback receiving export events in emission order
pub type ExportEventCallback = Arc<dyn Fn(&ExportEvent) + Send + Sync>;

/// Result of a completed export run

#[derive(Debug, Clone)]
pub struct ExportSummary {
    pub export: PlaylistExport,

    pub csv_path: Option<PathBuf>,

    pub txt_path: Option<PathBuf>,

    pub elapsed: Duration,
}

/// Application error types

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Invalid playlist id: {0:?}")]
    InvalidPlaylistId(String),

    #[error("Playlist {playlist_id} does not exist")]
    PlaylistNotFound { playlist_id: String },

    #[error("Playlist {playlist_id} is private or requires sign-in")]
    PlaylistPrivate { playlist_id: String },

    #[error("Network error while fetching playlist {playlist_id}: {message}")]
    Network {
        playlist_id: String,
        message: String,
    },

    #[error("Playlist {playlist_id} could not be fetched: {message}")]
    PlaylistUnavailable {
        playlist_id: String,
        message: String,
    },

    #[error("Playlist source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Malformed playlist entry: {0}")]
    MalformedEntry(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for exporter operations

pub type ExportResult<T> = Result<T, ExportError>;
