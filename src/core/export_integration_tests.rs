//! End-to-end export tests against a fixture playlist source

#[cfg(test)]
mod tests {
    use crate::commands::export::{run_export, ExportOptions};
    use crate::core::models::{ExportError, ExportEvent, ExportEventCallback, VideoRecord};
    use crate::core::playlist_source::fixtures::FixturePlaylistSource;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tempfile::tempdir;

    fn demo_source() -> FixturePlaylistSource {
        FixturePlaylistSource::with_videos(&[("abc123", "Intro"), ("xyz789", "Part, Two")])
    }

    fn options_in(dir: &std::path::Path, base: &str) -> ExportOptions {
        ExportOptions {
            playlist_id: "PLdemo".to_string(),
            base_name: dir.join(base),
            wait_seconds: 0,
        }
    }

    #[tokio::test]
    async fn test_demo_playlist_outputs() {
        let dir = tempdir().unwrap();
        let options = options_in(dir.path(), "demo");

        let summary = run_export(demo_source(), &options, None).await.unwrap();

        let csv = std::fs::read_to_string(dir.path().join("demo.csv")).unwrap();
        let txt = std::fs::read_to_string(dir.path().join("demo.txt")).unwrap();
        assert_eq!(csv, "ID,Name\nabc123,Intro\nxyz789,\"Part, Two\"\n");
        assert_eq!(txt, "abc123\nxyz789\n");
        assert_eq!(summary.csv_path, Some(dir.path().join("demo.csv")));
        assert_eq!(summary.txt_path, Some(dir.path().join("demo.txt")));
    }

    #[tokio::test]
    async fn test_row_counts_match_playlist() {
        let dir = tempdir().unwrap();
        let videos: Vec<(String, String)> = (0..25)
            .map(|i| (format!("vid{:03}", i), format!("Episode {}, take \"{}\"", i, i)))
            .collect();
        let borrowed: Vec<(&str, &str)> = videos
            .iter()
            .map(|(id, title)| (id.as_str(), title.as_str()))
            .collect();

        let options = options_in(dir.path(), "big");
        run_export(FixturePlaylistSource::with_videos(&borrowed), &options, None)
            .await
            .unwrap();

        let mut reader = csv::Reader::from_path(dir.path().join("big.csv")).unwrap();
        let rows: Vec<VideoRecord> = reader.deserialize().map(|r| r.unwrap()).collect();
        let txt = std::fs::read_to_string(dir.path().join("big.txt")).unwrap();
        let lines: Vec<&str> = txt.lines().collect();

        assert_eq!(rows.len(), 25);
        assert_eq!(lines.len(), 25);
        for (i, (row, line)) in rows.iter().zip(&lines).enumerate() {
            assert_eq!(row.id, videos[i].0);
            assert_eq!(row.title, videos[i].1);
            assert_eq!(*line, videos[i].0);
        }
    }

    #[tokio::test]
    async fn test_empty_playlist_writes_nothing() {
        let dir = tempdir().unwrap();
        let options = options_in(dir.path(), "empty");

        let summary = run_export(FixturePlaylistSource::with_videos(&[]), &options, None)
            .await
            .unwrap();

        assert!(summary.export.is_empty());
        assert!(summary.csv_path.is_none());
        assert!(summary.txt_path.is_none());
        assert!(!dir.path().join("empty.csv").exists());
        assert!(!dir.path().join("empty.txt").exists());
    }

    #[tokio::test]
    async fn test_unresolvable_playlist_writes_nothing() {
        let dir = tempdir().unwrap();
        let options = options_in(dir.path(), "missing");

        let result = run_export(FixturePlaylistSource::not_found(), &options, None).await;

        assert!(matches!(result, Err(ExportError::PlaylistNotFound { .. })));
        assert!(!dir.path().join("missing.csv").exists());
        assert!(!dir.path().join("missing.txt").exists());
    }

    #[tokio::test]
    async fn test_playlist_url_is_accepted() {
        let dir = tempdir().unwrap();
        let mut options = options_in(dir.path(), "from_url");
        options.playlist_id = "https://www.youtube.com/playlist?list=PLdemo".to_string();

        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        let callback: ExportEventCallback = Arc::new(move |event: &ExportEvent| {
            sink.lock().unwrap().push(event.clone());
        });

        run_export(demo_source(), &options, Some(callback))
            .await
            .unwrap();

        let events = events.lock().unwrap();
        assert_eq!(
            events.first(),
            Some(&ExportEvent::ProcessingPlaylist {
                playlist_id: "PLdemo".to_string()
            })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_event_sequence() {
        let dir = tempdir().unwrap();
        let mut options = options_in(dir.path(), "events");
        options.wait_seconds = 1;

        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        let callback: ExportEventCallback = Arc::new(move |event: &ExportEvent| {
            sink.lock().unwrap().push(event.to_string());
        });

        run_export(demo_source(), &options, Some(callback))
            .await
            .unwrap();

        let events = events.lock().unwrap();
        assert_eq!(events.len(), 7);
        assert_eq!(events[0], "Processing playlist PLdemo...");
        assert_eq!(events[1], "Processed video: Intro");
        assert_eq!(events[2], "Processed video: Part, Two");
        assert_eq!(events[3], "Waiting 1 seconds before writing output files...");
        assert!(events[4].starts_with("CSV file saved as "));
        assert!(events[5].starts_with("Text file saved as "));
        assert!(events[6].starts_with("--- Total time spent: "));
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_adds_single_pause() {
        let dir = tempdir().unwrap();

        let quick = options_in(dir.path(), "quick");
        let quick_summary = run_export(demo_source(), &quick, None).await.unwrap();

        let mut slow = options_in(dir.path(), "slow");
        slow.wait_seconds = 2;
        let slow_summary = run_export(demo_source(), &slow, None).await.unwrap();

        assert!(slow_summary.elapsed >= quick_summary.elapsed + Duration::from_secs(2));
        // one pause per run, not one per video
        assert!(slow_summary.elapsed < Duration::from_secs(4));

        assert_eq!(
            std::fs::read(dir.path().join("quick.csv")).unwrap(),
            std::fs::read(dir.path().join("slow.csv")).unwrap()
        );
        assert_eq!(
            std::fs::read(dir.path().join("quick.txt")).unwrap(),
            std::fs::read(dir.path().join("slow.txt")).unwrap()
        );
    }

    #[tokio::test]
    async fn test_write_failure_is_fatal() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let mut options = options_in(dir.path(), "unused");
        options.base_name = blocker.join("demo");

        let result = run_export(demo_source(), &options, None).await;

        assert!(matches!(result, Err(ExportError::Io(_))));
        assert!(!blocker.join("demo.txt").exists());
        assert_eq!(std::fs::read_to_string(&blocker).unwrap(), "not a directory");
    }
}
