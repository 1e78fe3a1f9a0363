//! Types for the structural splitting system.

use regex::Regex;

use crate::types::{ContentType, TextUnit};

/// Pattern recognising one structural level at the start of a line.
#[derive(Debug, Clone)]
pub struct LevelPattern {
    /// Level this pattern marks.
    pub level: ContentType,

    /// Line-start anchored pattern.
    pub regex: Regex,

    /// Capture group holding the Chinese numeral.
    pub number_group: usize,
}

impl LevelPattern {
    /// Compile a level pattern.
    ///
    /// # Errors
    /// Returns the regex compile error for an invalid pattern.
    pub fn new(level: ContentType, pattern: &str, number_group: usize) -> Result<Self, regex::Error> {
        Ok(Self {
            level,
            regex: Regex::new(pattern)?,
            number_group,
        })
    }

    /// Extract the numeral text if `line` starts with this marker.
    #[must_use]
    pub fn numeral<'l>(&self, line: &'l str) -> Option<&'l str> {
        self.regex
            .captures(line)
            .and_then(|caps| caps.get(self.number_group))
            .map(|m| m.as_str())
    }
}

/// Classification of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// 第…编
    Part(u64),
    /// 第…章
    Chapter(u64),
    /// 第…节
    Section(u64),
    /// 第…条
    Article(u64),
    /// Anything else: body text belonging to the element in scope.
    Continuation,
}

impl LineKind {
    /// Build the marker variant for a level.
    #[must_use]
    pub fn marker(level: ContentType, number: u64) -> Self {
        match level {
            ContentType::Part => Self::Part(number),
            ContentType::Chapter => Self::Chapter(number),
            ContentType::Section => Self::Section(number),
            ContentType::Article => Self::Article(number),
        }
    }

    /// Marker level, `None` for continuation text.
    #[must_use]
    pub fn level(self) -> Option<ContentType> {
        match self {
            Self::Part(_) => Some(ContentType::Part),
            Self::Chapter(_) => Some(ContentType::Chapter),
            Self::Section(_) => Some(ContentType::Section),
            Self::Article(_) => Some(ContentType::Article),
            Self::Continuation => None,
        }
    }
}

/// Structural position carried forward through a document scan.
///
/// Each field is only ever overwritten by a marker of its own level; a new
/// chapter does not clear the section or article in scope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanState {
    pub part: Option<u64>,
    pub chapter: Option<u64>,
    pub section: Option<u64>,
    pub article: Option<u64>,
    pub content_type: Option<ContentType>,
}

impl ScanState {
    /// Fold a classified line into the state.
    pub fn apply(&mut self, kind: LineKind) {
        match kind {
            LineKind::Part(n) => self.part = Some(n),
            LineKind::Chapter(n) => self.chapter = Some(n),
            LineKind::Section(n) => self.section = Some(n),
            LineKind::Article(n) => self.article = Some(n),
            LineKind::Continuation => return,
        }
        self.content_type = kind.level();
    }

    /// Create a unit stamped with the current position.
    #[must_use]
    pub fn emit(&self, text: impl Into<String>) -> TextUnit {
        TextUnit {
            text: text.into(),
            part: self.part,
            chapter: self.chapter,
            section: self.section,
            article: self.article,
            content_type: self.content_type,
            ..TextUnit::default()
        }
    }
}
