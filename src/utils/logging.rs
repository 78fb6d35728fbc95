use tracing_subscriber::EnvFilter;

/// Filter used when neither `RUST_LOG` nor a configured level is present
pub const DEFAULT_LOG_FILTER: &str = "playlist_exporter=warn";

pub fn default_filter(level: Option<&str>) -> String {
    match level {
        Some(level) => format!("playlist_exporter={level}"),
        None => DEFAULT_LOG_FILTER.to_string(),
    }
}

/// Install the stderr subscriber. Stdout is reserved for export progress.
pub fn init_tracing(level: Option<&str>) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(level).into());

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
