//! Split strategies and the factory that selects one by name.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::validate_chunk_config;
use crate::error::{Result, SplitterError};
use crate::splitting::LegalSplitter;
use crate::types::{Document, TextUnit};

/// Trait for document splitters selectable at runtime.
pub trait DocumentSplitter: Send + Sync {
    /// Strategy name, as accepted by [`StrategyKind::from_str`].
    fn name(&self) -> &'static str;

    /// Split one document into units.
    fn split_document(&self, document: &Document) -> Result<Vec<TextUnit>>;

    /// Chunk size and overlap, for strategies that pack text into chunks.
    fn chunk_config(&self) -> Option<(usize, usize)> {
        None
    }

    /// Split documents in order and concatenate their units.
    fn split_documents(&self, documents: &[Document]) -> Result<Vec<TextUnit>> {
        let mut units = Vec::new();
        for document in documents {
            units.extend(self.split_document(document)?);
        }
        Ok(units)
    }
}

/// Available split strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StrategyKind {
    /// Structural splitting on 编/章/节/条 markers.
    Legal,
    /// Sentence-packed chunks of bounded size.
    Sentence,
    /// One unit per non-blank line.
    Line,
}

impl StrategyKind {
    /// Get the strategy name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Legal => "legal",
            Self::Sentence => "sentence",
            Self::Line => "line",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = SplitterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "legal" => Ok(Self::Legal),
            "sentence" => Ok(Self::Sentence),
            "line" => Ok(Self::Line),
            _ => Err(SplitterError::UnsupportedStrategy(s.to_string())),
        }
    }
}

/// Create a splitter for a strategy.
///
/// `chunk_size` and `chunk_overlap` only apply to [`StrategyKind::Sentence`]
/// and are validated only for it.
///
/// # Examples
/// ```
/// use legal_splitter::strategy::{create_splitter, StrategyKind};
///
/// let splitter = create_splitter(StrategyKind::Legal, 1024, 20).unwrap();
/// assert_eq!(splitter.name(), "legal");
/// assert!(create_splitter(StrategyKind::Sentence, 10, 10).is_err());
/// ```
pub fn create_splitter(
    kind: StrategyKind,
    chunk_size: usize,
    chunk_overlap: usize,
) -> Result<Box<dyn DocumentSplitter>> {
    let splitter: Box<dyn DocumentSplitter> = match kind {
        StrategyKind::Legal => Box::new(LegalSplitter::default()),
        StrategyKind::Sentence => Box::new(SentenceSplitter::new(chunk_size, chunk_overlap)?),
        StrategyKind::Line => Box::new(LineSplitter::default()),
    };
    Ok(splitter)
}

impl DocumentSplitter for LegalSplitter {
    fn name(&self) -> &'static str {
        StrategyKind::Legal.as_str()
    }

    fn split_document(&self, document: &Document) -> Result<Vec<TextUnit>> {
        LegalSplitter::split_document(self, document)
    }
}

/// One unit per non-blank line, without structural detection.
#[derive(Debug, Clone, Default)]
pub struct LineSplitter {
    inner: LegalSplitter,
}

impl DocumentSplitter for LineSplitter {
    fn name(&self) -> &'static str {
        StrategyKind::Line.as_str()
    }

    fn split_document(&self, document: &Document) -> Result<Vec<TextUnit>> {
        Ok(self.inner.split_without_markers(&document.text))
    }
}

/// Break after a terminator unless a closing quote follows.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static TERMINATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([。！？?])([^”’])").expect("valid regex"));

/// Break after a six-dot ellipsis.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DOT_ELLIPSIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\.{6})([^”’])").expect("valid regex"));

/// Break after a Chinese ellipsis (……).
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static CJK_ELLIPSIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(…{2})([^”’])").expect("valid regex"));

/// Break after a terminator and closing quote unless more punctuation follows.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static QUOTED_TERMINATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([。！？?][”’])([^，。！？?])").expect("valid regex"));

/// Split Chinese text into sentences.
///
/// Existing line breaks are kept as sentence boundaries.
///
/// # Examples
/// ```
/// use legal_splitter::strategy::split_sentences;
///
/// assert_eq!(split_sentences("你好。再见！"), vec!["你好。", "再见！"]);
/// ```
#[must_use]
pub fn split_sentences(text: &str) -> Vec<String> {
    let text = TERMINATOR.replace_all(text, "${1}\n${2}");
    let text = DOT_ELLIPSIS.replace_all(&text, "${1}\n${2}");
    let text = CJK_ELLIPSIS.replace_all(&text, "${1}\n${2}");
    let text = QUOTED_TERMINATOR.replace_all(&text, "${1}\n${2}");

    text.trim()
        .split('\n')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Packs sentences into chunks of at most `chunk_size` characters.
///
/// Each chunk after the first starts with the last `chunk_overlap`
/// characters of its predecessor, unless that would push it over the size.
/// A single sentence longer than `chunk_size` becomes its own oversized chunk.
#[derive(Debug, Clone)]
pub struct SentenceSplitter {
    chunk_size: usize,
    chunk_overlap: usize,
}

impl SentenceSplitter {
    /// Create a sentence splitter.
    ///
    /// # Errors
    /// `SplitterError::InvalidChunkConfig` unless `chunk_size` is non-zero and
    /// larger than `chunk_overlap`.
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Result<Self> {
        validate_chunk_config(chunk_size, chunk_overlap)?;
        Ok(Self {
            chunk_size,
            chunk_overlap,
        })
    }

    /// Pack the sentences of `text` into chunks.
    #[must_use]
    pub fn chunk_text(&self, text: &str) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut current = String::new();
        // Whether `current` holds sentences not yet emitted
        let mut fresh = false;

        for sentence in split_sentences(text) {
            let len = sentence.chars().count();

            if fresh && current.chars().count() + len > self.chunk_size {
                let overlap = tail_chars(&current, self.chunk_overlap).to_string();
                chunks.push(std::mem::replace(&mut current, overlap));
                fresh = false;
            }
            if current.chars().count() + len > self.chunk_size {
                current.clear();
            }

            current.push_str(&sentence);
            fresh = true;
        }

        if fresh {
            chunks.push(current);
        }

        chunks
    }
}

impl DocumentSplitter for SentenceSplitter {
    fn name(&self) -> &'static str {
        StrategyKind::Sentence.as_str()
    }

    fn split_document(&self, document: &Document) -> Result<Vec<TextUnit>> {
        let chunks = self.chunk_text(&document.text);
        tracing::debug!(chunks = chunks.len(), "Chunked document by sentence");
        Ok(chunks.into_iter().map(TextUnit::plain).collect())
    }

    fn chunk_config(&self) -> Option<(usize, usize)> {
        Some((self.chunk_size, self.chunk_overlap))
    }
}

/// Last `n` characters of `s`.
fn tail_chars(s: &str, n: usize) -> &str {
    let count = s.chars().count();
    if n >= count {
        return s;
    }
    s.char_indices()
        .nth(count - n)
        .map_or("", |(byte_index, _)| &s[byte_index..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_strategy_kind_from_str() {
        assert_eq!("legal".parse::<StrategyKind>().unwrap(), StrategyKind::Legal);
        assert_eq!(" Sentence ".parse::<StrategyKind>().unwrap(), StrategyKind::Sentence);
        assert_eq!("line".parse::<StrategyKind>().unwrap(), StrategyKind::Line);
        assert!(matches!(
            "semantic".parse::<StrategyKind>(),
            Err(SplitterError::UnsupportedStrategy(s)) if s == "semantic"
        ));
    }

    #[test]
    fn test_create_splitter_names() {
        for kind in [StrategyKind::Legal, StrategyKind::Sentence, StrategyKind::Line] {
            let splitter = create_splitter(kind, 100, 10).unwrap();
            assert_eq!(splitter.name(), kind.as_str());
        }
    }

    #[test]
    fn test_create_splitter_only_validates_sentence() {
        assert!(create_splitter(StrategyKind::Legal, 0, 0).is_ok());
        assert!(matches!(
            create_splitter(StrategyKind::Sentence, 0, 0),
            Err(SplitterError::InvalidChunkConfig { .. })
        ));
    }

    #[test]
    fn test_legal_splitter_through_trait() {
        let splitter = create_splitter(StrategyKind::Legal, 100, 10).unwrap();
        let units = splitter
            .split_documents(&[Document::new("第一条 甲\n乙")])
            .unwrap();
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].text, "第一条 甲\n乙");
        assert_eq!(units[0].article, Some(1));
    }

    #[test]
    fn test_line_splitter_ignores_markers() {
        let splitter = create_splitter(StrategyKind::Line, 100, 10).unwrap();
        let units = splitter
            .split_document(&Document::new("第一条 甲\n乙"))
            .unwrap();
        assert_eq!(units.len(), 2);
        assert!(units.iter().all(|u| !u.is_structured()));
    }

    #[test]
    fn test_split_sentences_terminators() {
        assert_eq!(
            split_sentences("第一句。第二句！第三句？最后"),
            vec!["第一句。", "第二句！", "第三句？", "最后"]
        );
    }

    #[test]
    fn test_split_sentences_closing_quote() {
        assert_eq!(
            split_sentences("他说：“好。”然后走了。"),
            vec!["他说：“好。”", "然后走了。"]
        );
    }

    #[test]
    fn test_split_sentences_ellipsis_and_newlines() {
        assert_eq!(
            split_sentences("等等……然后\n\n新段落"),
            vec!["等等……", "然后", "新段落"]
        );
    }

    #[test]
    fn test_chunk_text_respects_size() {
        let splitter = SentenceSplitter::new(6, 0).unwrap();
        let chunks = splitter.chunk_text("甲乙。丙丁。戊己。庚辛。");

        assert_eq!(chunks, vec!["甲乙。丙丁。", "戊己。庚辛。"]);
        assert!(chunks.iter().all(|c| c.chars().count() <= 6));
    }

    #[test]
    fn test_chunk_text_overlap() {
        let splitter = SentenceSplitter::new(8, 2).unwrap();
        let chunks = splitter.chunk_text("甲乙。丙丁。戊己。庚辛。");

        assert_eq!(chunks, vec!["甲乙。丙丁。", "丁。戊己。庚辛。"]);
        assert!(chunks[1].starts_with(tail_chars(&chunks[0], 2)));
    }

    #[test]
    fn test_chunk_text_oversized_sentence() {
        let splitter = SentenceSplitter::new(3, 1).unwrap();
        let chunks = splitter.chunk_text("甲。很长很长的一句。乙。");

        // Overlap carries the trailing 。 into the last chunk
        assert_eq!(chunks, vec!["甲。", "很长很长的一句。", "。乙。"]);
    }

    #[test]
    fn test_chunk_text_empty() {
        let splitter = SentenceSplitter::new(10, 2).unwrap();
        assert!(splitter.chunk_text("").is_empty());
        assert!(splitter.chunk_text("  \n ").is_empty());
    }

    #[test]
    fn test_tail_chars() {
        assert_eq!(tail_chars("甲乙丙", 2), "乙丙");
        assert_eq!(tail_chars("甲乙丙", 0), "");
        assert_eq!(tail_chars("甲", 5), "甲");
    }
}
