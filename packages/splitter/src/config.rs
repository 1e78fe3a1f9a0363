//! Configuration constants and validation functions for the splitter.

use crate::error::{Result, SplitterError};

/// Default chunk size in characters for the sentence strategy.
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// Default overlap in characters between consecutive sentence chunks.
pub const DEFAULT_CHUNK_OVERLAP: usize = 20;

/// Strategy used when none is given on the command line.
pub const DEFAULT_STRATEGY: &str = "legal";

/// Paragraph indent used in Chinese legal text: two ideographic spaces (U+3000).
///
/// Stripped from article bodies when continuation lines are folded in.
pub const ARTICLE_INDENT: &str = "\u{3000}\u{3000}";

/// Formatting characters with no visible glyph.
///
/// A line made up of only these (and whitespace) counts as blank.
pub const ZERO_WIDTH_CHARS: [char; 4] = ['\u{200B}', '\u{200C}', '\u{200D}', '\u{FEFF}'];

/// Wrap width for unit previews printed by the CLI.
pub const PREVIEW_WIDTH: usize = 80;

/// File extensions the loader reads as plain UTF-8 text.
pub const TEXT_EXTENSIONS: [&str; 4] = ["txt", "text", "md", "markdown"];

/// Validate a sentence chunk window.
///
/// # Arguments
/// * `chunk_size` - Maximum chunk length in characters
/// * `chunk_overlap` - Characters carried over from the previous chunk
///
/// # Returns
/// * `Ok(())` if `chunk_size > 0` and `chunk_overlap < chunk_size`
/// * `Err(SplitterError::InvalidChunkConfig)` otherwise
///
/// # Examples
/// ```
/// use legal_splitter::config::validate_chunk_config;
///
/// assert!(validate_chunk_config(1024, 20).is_ok());
/// assert!(validate_chunk_config(20, 20).is_err());
/// ```
pub fn validate_chunk_config(chunk_size: usize, chunk_overlap: usize) -> Result<()> {
    if chunk_size == 0 || chunk_overlap >= chunk_size {
        return Err(SplitterError::InvalidChunkConfig {
            chunk_size,
            chunk_overlap,
        });
    }
    Ok(())
}

/// Check whether a file extension is handled by the text loader.
///
/// Comparison is case-insensitive.
pub fn is_text_extension(extension: &str) -> bool {
    let lower = extension.to_lowercase();
    TEXT_EXTENSIONS.contains(&lower.as_str())
}
