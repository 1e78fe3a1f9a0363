//! Loading documents from local files.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::config::is_text_extension;
use crate::error::{Result, SplitterError};
use crate::types::Document;

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Load the documents contained in a file.
///
/// Plain text and Markdown files are read as UTF-8 into a single document,
/// without a leading byte order mark.
/// The document carries `file_name`, `file_path`, `file_type`, `file_size`
/// and `last_modified` metadata.
///
/// # Errors
/// * `SplitterError::UnsupportedFormat` for other extensions
/// * `SplitterError::Io` if the file cannot be read or is not UTF-8
pub fn load_documents(path: &Path) -> Result<Vec<Document>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_lowercase();

    if !is_text_extension(&extension) {
        return Err(SplitterError::UnsupportedFormat(path.display().to_string()));
    }

    let mut text = fs::read_to_string(path)?;
    if text.starts_with(BYTE_ORDER_MARK) {
        text.drain(..BYTE_ORDER_MARK.len_utf8());
    }
    let file_meta = fs::metadata(path)?;

    let mut document = Document::new(text)
        .with_metadata("file_path", path.display().to_string())
        .with_metadata("file_type", extension)
        .with_metadata("file_size", file_meta.len().to_string());

    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
        document = document.with_metadata("file_name", name);
    }

    // Not every platform reports modification times
    if let Ok(modified) = file_meta.modified() {
        let modified: DateTime<Utc> = modified.into();
        document = document.with_metadata("last_modified", modified.to_rfc3339());
    }

    tracing::debug!(
        path = %path.display(),
        bytes = file_meta.len(),
        "Loaded document"
    );

    Ok(vec![document])
}
