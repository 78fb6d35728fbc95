//! Plain-text export of video identifiers

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::models::{ExportEvent, ExportEventCallback, ExportResult};
use crate::utils::file_utils::{ensure_parent_dir, output_path};

/// Write one id per line, each terminated by `\n`
pub fn write_ids<W: Write>(ids: &[String], writer: W) -> ExportResult<()> {
    let mut writer = BufWriter::new(writer);
    for id in ids {
        writeln!(writer, "{}", id)?;
    }
    writer.flush()?;
    Ok(())
}

/// Save ids to `<base>.txt`, or return `None` when the list is empty
pub fn save_to_txt(
    ids: &[String],
    base: &Path,
    callback: Option<&ExportEventCallback>,
) -> ExportResult<Option<PathBuf>> {
    if ids.is_empty() {
        debug!("No video ids, skipping text output");
        return Ok(None);
    }

    let path = output_path(base, "txt");
    ensure_parent_dir(&path)?;

    let file = File::create(&path)?;
    write_ids(ids, file)?;

    ExportEvent::TextSaved { path: path.clone() }.emit(callback);
    Ok(Some(path))
}
