use anyhow::{Context, Result};
use std::process::ExitCode;
use std::sync::Arc;

use playlist_exporter::cli::Args;
use playlist_exporter::utils::logging::init_tracing;
use playlist_exporter::{
    run_export, ExportEvent, ExportEventCallback, ExporterConfig, YtDlpPlaylistSource,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse_normalized();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let config = ExporterConfig::load(args.config.as_deref())
        .context("Failed to load configuration")?;
    init_tracing(config.log_level.as_deref());

    let source = YtDlpPlaylistSource::from_config(&config)?;
    let print_event: ExportEventCallback = Arc::new(|event: &ExportEvent| match event {
        ExportEvent::UnavailableVideo { .. } => eprintln!("{event}"),
        _ => println!("{event}"),
    });

    let summary = run_export(source, &args.export_options(), Some(print_event))
        .await
        .with_context(|| format!("Failed to export playlist {}", args.playlist_id))?;

    if summary.export.is_empty() {
        tracing::warn!("Playlist {} has no videos, nothing written", args.playlist_id);
    }

    Ok(())
}
