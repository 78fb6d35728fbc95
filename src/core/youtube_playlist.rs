//! YouTube playlist source backed by yt-dlp
//!
//! Runs `yt-dlp --flat-playlist --dump-json` against the playlist URL and
//! reads one JSON object per line from its stdout. Flat mode only lists the
//! entries, so no per-video page is fetched.

use async_trait::async_trait;
use serde::Deserialize;
use std::io::ErrorKind;
use std::process::Stdio;
use tracing::{debug, info, warn};

use crate::core::config::{ExporterConfig, YTDLP_ENV_VAR};
use crate::core::models::{ExportError, ExportResult, VideoDescriptor};
use crate::core::playlist_source::PlaylistSource;
use crate::utils::validation::playlist_url;

/// Line emitted by `yt-dlp --flat-playlist --dump-json`
#[derive(Debug, Deserialize)]
struct FlatPlaylistEntry {
    id: Option<String>,
    title: Option<String>,
    availability: Option<String>,
}

/// Playlist source that shells out to yt-dlp
#[derive(Debug, Clone)]
pub struct YtDlpPlaylistSource {
    binary: String,
    extra_args: Vec<String>,
}

impl YtDlpPlaylistSource {
    pub fn new(binary: impl Into<String>, extra_args: Vec<String>) -> ExportResult<Self> {
        let binary = binary.into();
        if binary.trim().is_empty() {
            return Err(ExportError::Config(
                "yt-dlp binary must not be empty".to_string(),
            ));
        }

        Ok(Self { binary, extra_args })
    }

    pub fn from_config(config: &ExporterConfig) -> ExportResult<Self> {
        Self::new(config.ytdlp_binary.clone(), config.extra_ytdlp_args.clone())
    }

    fn build_args(&self, url: &str) -> Vec<String> {
        let mut args: Vec<String> = ["--flat-playlist", "--dump-json", "--no-warnings"]
            .iter()
            .map(|arg| arg.to_string())
            .collect();
        args.extend(self.extra_args.iter().cloned());
        args.push(url.to_string());
        args
    }
}

#[async_trait]
impl PlaylistSource for YtDlpPlaylistSource {
    async fn list_videos(&self, playlist_id: &str) -> ExportResult<Vec<VideoDescriptor>> {
        let url = playlist_url(playlist_id)?;
        let args = self.build_args(url.as_str());
        debug!("Running {} {:?}", self.binary, args);

        let output = tokio::process::Command::new(&self.binary)
            .args(&args)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => ExportError::SourceUnavailable(format!(
                    "'{}' not found; install yt-dlp or point {} at it",
                    self.binary, YTDLP_ENV_VAR
                )),
                _ => ExportError::SourceUnavailable(format!(
                    "Failed to run {}: {}",
                    self.binary, e
                )),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!("yt-dlp exited with {}: {}", output.status, stderr.trim());
            return Err(classify_failure(playlist_id, &stderr));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let videos = parse_flat_playlist_output(&stdout)?;
        info!("Listed {} videos from playlist {}", videos.len(), playlist_id);
        Ok(videos)
    }
}

/// Parse the JSON-lines output of a flat playlist dump
fn parse_flat_playlist_output(output: &str) -> ExportResult<Vec<VideoDescriptor>> {
    let mut videos = Vec::new();

    for line in output.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let entry: FlatPlaylistEntry = serde_json::from_str(line)
            .map_err(|e| ExportError::MalformedEntry(format!("{}: {}", e, line)))?;

        let video_id = entry
            .id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| ExportError::MalformedEntry(format!("entry without id: {}", line)))?;

        videos.push(VideoDescriptor {
            video_id,
            title: entry.title.unwrap_or_default(),
            availability: entry.availability,
        });
    }

    Ok(videos)
}

/// Map yt-dlp's stderr to the matching error
fn classify_failure(playlist_id: &str, stderr: &str) -> ExportError {
    let message = stderr
        .lines()
        .rev()
        .find(|line| line.contains("ERROR"))
        .or_else(|| stderr.lines().rev().find(|line| !line.trim().is_empty()))
        .unwrap_or("yt-dlp failed without output")
        .trim()
        .to_string();
    let lowered = message.to_lowercase();
    let playlist_id = playlist_id.to_string();

    if lowered.contains("does not exist") {
        ExportError::PlaylistNotFound { playlist_id }
    } else if lowered.contains("private") || lowered.contains("sign in") {
        ExportError::PlaylistPrivate { playlist_id }
    } else if [
        "unable to download",
        "urlopen",
        "timed out",
        "getaddrinfo",
        "temporary failure in name resolution",
    ]
    .iter()
    .any(|marker| lowered.contains(marker))
    {
        ExportError::Network {
            playlist_id,
            message,
        }
    } else {
        ExportError::PlaylistUnavailable {
            playlist_id,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flat_playlist_output() {
        let output = concat!(
            r#"{"_type": "url", "ie_key": "Youtube", "id": "abc123", "url": "https://www.youtube.com/watch?v=abc123", "title": "Intro", "availability": null}"#,
            "\n",
            "\n",
            r#"{"_type": "url", "id": "xyz789", "title": "Part, Two"}"#,
            "\n",
            r#"{"_type": "url", "id": "gone00", "title": "[Deleted video]", "availability": "unavailable"}"#,
            "\n",
        );

        let videos = parse_flat_playlist_output(output).unwrap();
        assert_eq!(videos.len(), 3);
        assert_eq!(videos[0], VideoDescriptor::new("abc123", "Intro"));
        assert_eq!(videos[1].title, "Part, Two");
        assert!(videos[2].is_unavailable());
    }

    #[test]
    fn test_parse_empty_output() {
        assert!(parse_flat_playlist_output("").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_lines_are_errors() {
        let result = parse_flat_playlist_output("not json\n");
        assert!(matches!(result, Err(ExportError::MalformedEntry(_))));

        let result = parse_flat_playlist_output(r#"{"title": "No id"}"#);
        assert!(matches!(result, Err(ExportError::MalformedEntry(_))));
    }

    #[test]
    fn test_classify_failure() {
        let err = classify_failure(
            "PLnope",
            "ERROR: [youtube:tab] PLnope: The playlist does not exist.\n",
        );
        assert!(matches!(err, ExportError::PlaylistNotFound { .. }));

        let err = classify_failure(
            "PLsecret",
            "WARNING: something\nERROR: [youtube:tab] PLsecret: This playlist is private\n",
        );
        assert!(matches!(err, ExportError::PlaylistPrivate { .. }));

        let err = classify_failure(
            "PLx",
            "ERROR: [youtube:tab] PLx: Unable to download API page: <urlopen error [Errno -2] Name or service not known>\n",
        );
        assert!(matches!(err, ExportError::Network { .. }));

        let err = classify_failure("PLx", "");
        assert!(matches!(err, ExportError::PlaylistUnavailable { .. }));
    }

    #[test]
    fn test_build_args_puts_url_last() {
        let source =
            YtDlpPlaylistSource::new("yt-dlp", vec!["--cookies".into(), "c.txt".into()]).unwrap();
        let args = source.build_args("https://www.youtube.com/playlist?list=PL1");

        assert_eq!(args[0], "--flat-playlist");
        assert_eq!(args[1], "--dump-json");
        assert_eq!(&args[3..5], &["--cookies".to_string(), "c.txt".to_string()]);
        assert_eq!(
            args.last().map(String::as_str),
            Some("https://www.youtube.com/playlist?list=PL1")
        );
    }

    #[test]
    fn test_empty_binary_rejected() {
        assert!(matches!(
            YtDlpPlaylistSource::new("", Vec::new()),
            Err(ExportError::Config(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_binary_is_source_unavailable() {
        let source =
            YtDlpPlaylistSource::new("playlist-exporter-no-such-binary", Vec::new()).unwrap();
        let result = source.list_videos("PL123").await;
        assert!(matches!(result, Err(ExportError::SourceUnavailable(_))));
    }
}
