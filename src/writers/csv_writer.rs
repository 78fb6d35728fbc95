//! CSV export of the playlist table

use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::models::{ExportEvent, ExportEventCallback, ExportResult, VideoRecord};
use crate::utils::file_utils::{ensure_parent_dir, output_path};

/// Write records as CSV (`ID,Name` header, `\n` terminated) to any writer
pub fn write_records<W: Write>(records: &[VideoRecord], writer: W) -> ExportResult<()> {
    let mut csv_writer = WriterBuilder::new()
        .has_headers(true)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    for record in records {
        csv_writer.serialize(record)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Save records to `<base>.csv`.
///
/// Returns `None` without touching the filesystem when there is nothing to
/// write.
pub fn save_to_csv(
    records: &[VideoRecord],
    base: &Path,
    callback: Option<&ExportEventCallback>,
) -> ExportResult<Option<PathBuf>> {
    if records.is_empty() {
        debug!("No records, skipping CSV output");
        return Ok(None);
    }

    let path = output_path(base, "csv");
    ensure_parent_dir(&path)?;

    let file = File::create(&path)?;
    write_records(records, file)?;

    ExportEvent::CsvSaved { path: path.clone() }.emit(callback);
    Ok(Some(path))
}
