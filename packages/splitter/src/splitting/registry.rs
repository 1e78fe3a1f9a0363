//! Ordered registry of structural marker patterns.

use super::types::{LevelPattern, LineKind};
use crate::error::Result;
use crate::numeral::convert;
use crate::types::ContentType;

/// Marker patterns in evaluation order. First match wins.
#[derive(Debug, Clone, Default)]
pub struct MarkerRegistry {
    patterns: Vec<LevelPattern>,
}

impl MarkerRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Append a pattern after the ones already registered.
    pub fn register(&mut self, pattern: LevelPattern) {
        self.patterns.push(pattern);
    }

    /// Get the pattern for a level.
    #[must_use]
    pub fn get(&self, level: ContentType) -> Option<&LevelPattern> {
        self.patterns.iter().find(|p| p.level == level)
    }

    /// Check whether a line starts with any registered marker.
    #[must_use]
    pub fn is_marker(&self, line: &str) -> bool {
        self.patterns.iter().any(|p| p.regex.is_match(line))
    }

    /// Check whether a line starts with a marker of the given level.
    #[must_use]
    pub fn matches_level(&self, level: ContentType, line: &str) -> bool {
        self.get(level).is_some_and(|p| p.regex.is_match(line))
    }

    /// Classify a line against the patterns in order.
    ///
    /// # Errors
    /// `SplitterError::InvalidNumeral` if a pattern's numeral group holds
    /// something the converter rejects. Patterns only capture numeral glyphs,
    /// so this indicates a broken pattern rather than bad input.
    pub fn classify(&self, line: &str) -> Result<LineKind> {
        for pattern in &self.patterns {
            if let Some(numeral) = pattern.numeral(line) {
                let number = convert(numeral)?;
                return Ok(LineKind::marker(pattern.level, number));
            }
        }
        Ok(LineKind::Continuation)
    }
}
