//! Load, split and annotate documents in one pass.

use std::path::Path;

use crate::error::Result;
use crate::loader::load_documents;
use crate::strategy::DocumentSplitter;
use crate::types::{ContentType, Document, TextUnit};

/// Metadata key holding a unit's position within its document.
pub const CHUNK_INDEX_KEY: &str = "chunk_index";

/// Metadata key holding the name of the strategy that produced a unit.
pub const STRATEGY_KEY: &str = "split_strategy";

/// Metadata key holding the maximum chunk size of chunking strategies.
pub const CHUNK_SIZE_KEY: &str = "chunk_size";

/// Metadata key holding the chunk overlap of chunking strategies.
pub const CHUNK_OVERLAP_KEY: &str = "chunk_overlap";

/// Load a file and split each of its documents.
///
/// # Errors
/// Loader errors, and numeral errors from structural splitting.
pub fn split_file(path: &Path, splitter: &dyn DocumentSplitter) -> Result<Vec<TextUnit>> {
    let documents = load_documents(path)?;
    split_with_metadata(&documents, splitter)
}

/// Split documents and attach each document's metadata to its units.
pub fn split_with_metadata(
    documents: &[Document],
    splitter: &dyn DocumentSplitter,
) -> Result<Vec<TextUnit>> {
    let mut units = Vec::new();
    for document in documents {
        let split = splitter.split_document(document)?;
        units.extend(attach_metadata(document, split, splitter));
    }

    tracing::debug!(
        documents = documents.len(),
        units = units.len(),
        strategy = splitter.name(),
        "Split documents"
    );

    Ok(units)
}

/// Copy document metadata into units, plus their structural position.
///
/// Structural fields are added as string entries only when set. The
/// splitter's name and chunk settings (if it has any) are recorded on every
/// unit. Existing unit metadata wins over document metadata on key conflicts.
#[must_use]
pub fn attach_metadata(
    document: &Document,
    units: Vec<TextUnit>,
    splitter: &dyn DocumentSplitter,
) -> Vec<TextUnit> {
    let chunk_config = splitter.chunk_config();

    units
        .into_iter()
        .enumerate()
        .map(|(index, mut unit)| {
            let mut metadata = document.metadata.clone();

            for level in ContentType::ALL {
                if let Some(number) = unit.number(level) {
                    metadata.insert(level.as_str().to_string(), number.to_string());
                }
            }
            if let Some(content_type) = unit.content_type {
                metadata.insert("content_type".to_string(), content_type.code().to_string());
            }

            metadata.insert(CHUNK_INDEX_KEY.to_string(), index.to_string());
            metadata.insert(STRATEGY_KEY.to_string(), splitter.name().to_string());
            if let Some((chunk_size, chunk_overlap)) = chunk_config {
                metadata.insert(CHUNK_SIZE_KEY.to_string(), chunk_size.to_string());
                metadata.insert(CHUNK_OVERLAP_KEY.to_string(), chunk_overlap.to_string());
            }
            metadata.append(&mut unit.metadata);

            unit.metadata = metadata;
            unit
        })
        .collect()
}
