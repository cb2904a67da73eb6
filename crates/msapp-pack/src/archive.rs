//! Archive naming and writing.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Local};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::{PackError, PackResult};
use crate::record::CompilationRecord;

/// Name of the generated record entry.
pub const COMPILATION_INFO_ENTRY: &str = "compilation_info.json";

/// Extension of the mock app package.
pub const ARCHIVE_EXTENSION: &str = "msapp";

/// One file stored in the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Path inside the archive, `/`-separated.
    pub name: String,
    pub bytes: Vec<u8>,
}

/// `<app>_<YYYYMMDD_HHMMSS>.msapp`
pub fn archive_file_name(app_name: &str, at: DateTime<Local>) -> String {
    format!(
        "{app_name}_{}.{ARCHIVE_EXTENSION}",
        at.format("%Y%m%d_%H%M%S")
    )
}

/// Write `entries` followed by the serialized `record` to a deflated zip
/// at `path`, replacing any existing file.
pub fn write_archive(
    path: &Path,
    entries: &[ArchiveEntry],
    record: &CompilationRecord,
) -> PackResult<()> {
    let file = File::create(path).map_err(|source| PackError::CreateArchive {
        path: path.to_path_buf(),
        source,
    })?;
    let mut zip = ZipWriter::new(file);
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in entries {
        zip.start_file(entry.name.as_str(), options)?;
        zip.write_all(&entry.bytes)?;
    }

    zip.start_file(COMPILATION_INFO_ENTRY, options)?;
    zip.write_all(&record.to_json_bytes()?)?;
    zip.finish()?;

    tracing::info!(
        path = %path.display(),
        entries = entries.len() + 1,
        "wrote archive"
    );
    Ok(())
}
