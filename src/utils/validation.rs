//! Playlist identifier validation utilities

use url::Url;

use crate::core::models::{ExportError, ExportResult};

const PLAYLIST_BASE_URL: &str = "https://www.youtube.com/playlist";

/// Normalize operator input into a bare playlist identifier.
///
/// Accepts either the identifier itself or any YouTube URL carrying a
/// `list=` query parameter.
pub fn normalize_playlist_id(input: &str) -> ExportResult<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ExportError::InvalidPlaylistId(input.to_string()));
    }

    if let Ok(parsed) = Url::parse(trimmed) {
        if matches!(parsed.scheme(), "http" | "https") {
            return extract_playlist_id(&parsed)
                .ok_or_else(|| ExportError::InvalidPlaylistId(input.to_string()));
        }
    }

    Ok(trimmed.to_string())
}

/// Build the playlist page URL for an identifier
pub fn playlist_url(playlist_id: &str) -> ExportResult<Url> {
    Url::parse_with_params(PLAYLIST_BASE_URL, &[("list", playlist_id)])
        .map_err(|e| ExportError::InvalidPlaylistId(format!("{}: {}", playlist_id, e)))
}

fn extract_playlist_id(url: &Url) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == "list")
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
