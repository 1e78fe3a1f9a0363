//! Core data types for the splitter.
//!
//! These types represent source documents and the structural text units
//! produced from them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Free-form document metadata, ordered by key for stable output.
pub type Metadata = BTreeMap<String, String>;

/// Structural level of the marker that produced a text unit.
///
/// Serialized as its integer code (1 to 4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ContentType {
    /// Part marker (编).
    Part,

    /// Chapter marker (章).
    Chapter,

    /// Section marker (节).
    Section,

    /// Article marker (条).
    Article,
}

impl ContentType {
    /// All levels, outermost first.
    pub const ALL: [Self; 4] = [Self::Part, Self::Chapter, Self::Section, Self::Article];

    /// Get the integer code.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Part => 1,
            Self::Chapter => 2,
            Self::Section => 3,
            Self::Article => 4,
        }
    }

    /// Get the marker glyph used in source text.
    #[must_use]
    pub fn glyph(self) -> char {
        match self {
            Self::Part => '编',
            Self::Chapter => '章',
            Self::Section => '节',
            Self::Article => '条',
        }
    }

    /// Get the lowercase name, also used as a metadata key.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Part => "part",
            Self::Chapter => "chapter",
            Self::Section => "section",
            Self::Article => "article",
        }
    }
}

impl From<ContentType> for u8 {
    fn from(content_type: ContentType) -> Self {
        content_type.code()
    }
}

impl TryFrom<u8> for ContentType {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Part),
            2 => Ok(Self::Chapter),
            3 => Ok(Self::Section),
            4 => Ok(Self::Article),
            other => Err(format!("unknown content type code {other}")),
        }
    }
}

/// A source document: one text blob plus opaque metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Raw text, possibly spanning many lines.
    pub text: String,

    /// Caller-owned metadata (file name, path, ...). Not read by the splitter.
    pub metadata: Metadata,
}

impl Document {
    /// Create a document without metadata.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            metadata: Metadata::new(),
        }
    }

    /// Add a metadata entry.
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// One emitted chunk of a split document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextUnit {
    /// Unit content; multi-line bodies are joined with `\n`.
    pub text: String,

    /// Part number in scope when the unit was emitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part: Option<u64>,

    /// Chapter number in scope.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapter: Option<u64>,

    /// Section number in scope.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<u64>,

    /// Article number in scope.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article: Option<u64>,

    /// Marker level in scope; `None` for documents without articles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ContentType>,

    /// Metadata attached by the pipeline after splitting.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: Metadata,
}

impl TextUnit {
    /// Create a unit with no structural information.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Number in scope at the given level.
    #[must_use]
    pub fn number(&self, level: ContentType) -> Option<u64> {
        match level {
            ContentType::Part => self.part,
            ContentType::Chapter => self.chapter,
            ContentType::Section => self.section,
            ContentType::Article => self.article,
        }
    }

    /// Whether any structural field is set.
    #[must_use]
    pub fn is_structured(&self) -> bool {
        self.part.is_some()
            || self.chapter.is_some()
            || self.section.is_some()
            || self.article.is_some()
            || self.content_type.is_some()
    }
}
