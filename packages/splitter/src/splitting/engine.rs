//! Split engine that walks document lines using the marker registry.

use super::config::CHINESE_LAW_MARKERS;
use super::registry::MarkerRegistry;
use super::types::{LineKind, ScanState};
use crate::config::{ARTICLE_INDENT, ZERO_WIDTH_CHARS};
use crate::error::Result;
use crate::types::{ContentType, Document, TextUnit};

/// Splitter for Chinese legal and regulatory documents.
///
/// Documents containing at least one article line (第…条) are split by
/// structure: one unit per part, chapter and section line, and one unit per
/// article including its body lines. Other documents yield one unit per
/// non-blank line.
#[derive(Debug, Clone)]
pub struct LegalSplitter {
    markers: MarkerRegistry,
}

impl LegalSplitter {
    /// Create a splitter over a custom marker registry.
    #[must_use]
    pub fn new(markers: MarkerRegistry) -> Self {
        Self { markers }
    }

    /// Split documents in order and concatenate their units.
    ///
    /// No boundary marker separates documents in the output.
    pub fn split_documents(&self, documents: &[Document]) -> Result<Vec<TextUnit>> {
        let mut units = Vec::new();
        for document in documents {
            units.extend(self.split_document(document)?);
        }
        Ok(units)
    }

    /// Split a single document.
    pub fn split_document(&self, document: &Document) -> Result<Vec<TextUnit>> {
        let structured = self.has_article_pattern(&document.text);
        let units = if structured {
            self.split_with_markers(&document.text)?
        } else {
            self.split_without_markers(&document.text)
        };

        tracing::debug!(
            structured,
            units = units.len(),
            "Split document"
        );

        Ok(units)
    }

    /// Check whether any non-blank line is an article marker.
    #[must_use]
    pub fn has_article_pattern(&self, text: &str) -> bool {
        split_lines(text)
            .filter(|line| !line.trim().is_empty())
            .any(|line| self.markers.matches_level(ContentType::Article, line))
    }

    /// Split structured text, carrying the structural position forward.
    ///
    /// An article line absorbs the following non-marker lines when it ends
    /// with `:` or when the next line is not a marker.
    ///
    /// # Errors
    /// `SplitterError::InvalidNumeral` if a marker numeral fails to convert.
    pub fn split_with_markers(&self, text: &str) -> Result<Vec<TextUnit>> {
        let lines = effective_lines(text);
        let mut state = ScanState::default();
        let mut units = Vec::with_capacity(lines.len());

        let mut index = 0;
        while index < lines.len() {
            let line = lines[index];
            let kind = self.markers.classify(line)?;
            state.apply(kind);

            let text = if matches!(kind, LineKind::Article(_)) && self.has_more(&lines, index) {
                let mut body = vec![strip_indent(line)];
                while let Some(next) = lines
                    .get(index + 1)
                    .filter(|next| !self.markers.is_marker(next))
                {
                    body.push(strip_indent(next));
                    index += 1;
                }
                body.join("\n")
            } else {
                line.to_string()
            };

            units.push(state.emit(text));
            index += 1;
        }

        Ok(units)
    }

    /// Split unstructured text into one unit per non-blank line.
    #[must_use]
    pub fn split_without_markers(&self, text: &str) -> Vec<TextUnit> {
        effective_lines(text)
            .into_iter()
            .map(TextUnit::plain)
            .collect()
    }

    /// Whether the article at `index` continues on following lines.
    fn has_more(&self, lines: &[&str], index: usize) -> bool {
        lines[index].ends_with(':')
            || lines
                .get(index + 1)
                .is_some_and(|next| !self.markers.is_marker(next))
    }
}

impl Default for LegalSplitter {
    fn default() -> Self {
        Self::new(CHINESE_LAW_MARKERS.clone())
    }
}

/// Check whether `text` has articles (第…条) using the built-in markers.
///
/// # Examples
/// ```
/// use legal_splitter::splitting::has_article_pattern;
///
/// assert!(has_article_pattern("总则\n第一条　目的"));
/// assert!(!has_article_pattern("第一章 总则"));
/// ```
#[must_use]
pub fn has_article_pattern(text: &str) -> bool {
    split_lines(text)
        .filter(|line| !line.trim().is_empty())
        .any(|line| CHINESE_LAW_MARKERS.matches_level(ContentType::Article, line))
}

/// Check whether a line is blank once zero-width characters are removed.
#[must_use]
pub fn is_effectively_blank(line: &str) -> bool {
    line.chars()
        .all(|c| c.is_whitespace() || ZERO_WIDTH_CHARS.contains(&c))
}

/// Split on every Unicode line boundary, not just `\n`.
///
/// `\r\n` yields an extra empty piece, which every caller filters out.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| {
        matches!(
            c,
            '\n' | '\r'
                | '\u{0B}'
                | '\u{0C}'
                | '\u{1C}'
                | '\u{1D}'
                | '\u{1E}'
                | '\u{85}'
                | '\u{2028}'
                | '\u{2029}'
        )
    })
}

/// Trimmed lines that carry visible content.
fn effective_lines(text: &str) -> Vec<&str> {
    split_lines(text)
        .map(str::trim)
        .filter(|line| !is_effectively_blank(line))
        .collect()
}

// No-op on lines from `effective_lines`, which already trims U+3000.
fn strip_indent(line: &str) -> &str {
    line.strip_prefix(ARTICLE_INDENT).unwrap_or(line)
}
