//! Marker configuration for Chinese legal text.

use std::sync::LazyLock;

use super::registry::MarkerRegistry;
use super::types::LevelPattern;
use crate::types::ContentType;

/// Numeral glyphs allowed inside a marker. 万 and 亿 are deliberately absent.
const MARKER_NUMERALS: &str = "零一二三四五六七八九十百千";

/// Shared registry used by the free functions and `LegalSplitter::default`.
pub(crate) static CHINESE_LAW_MARKERS: LazyLock<MarkerRegistry> =
    LazyLock::new(create_chinese_law_markers);

/// Create the marker registry for Chinese legal structure.
///
/// ```text
/// 第一编  part
/// └── 第一章  chapter
///     └── 第一节  section
///         └── 第一条  article
///             └── body lines
/// ```
///
/// All patterns are anchored at line start and tolerate leading whitespace,
/// ideographic space (U+3000) included. The article pattern keeps the
/// leading whitespace in its own group so the numeral is group 2.
#[must_use]
#[allow(clippy::expect_used)] // Static patterns that are guaranteed to be valid
pub fn create_chinese_law_markers() -> MarkerRegistry {
    let mut registry = MarkerRegistry::new();
    let levels = [
        (ContentType::Part, format!(r"^\s*第([{MARKER_NUMERALS}]+)编"), 1),
        (ContentType::Chapter, format!(r"^\s*第([{MARKER_NUMERALS}]+)章"), 1),
        (ContentType::Section, format!(r"^\s*第([{MARKER_NUMERALS}]+)节"), 1),
        (
            ContentType::Article,
            format!(r"^(\s|\x{{3000}}|\x{{00A0}})*第([{MARKER_NUMERALS}]+)条"),
            2,
        ),
    ];

    for (level, pattern, group) in levels {
        registry.register(LevelPattern::new(level, &pattern, group).expect("valid regex"));
    }

    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::splitting::types::LineKind;

    #[test]
    fn test_create_chinese_law_markers() {
        let registry = create_chinese_law_markers();

        assert_eq!(registry.classify("第一编 总则").unwrap(), LineKind::Part(1));
        assert_eq!(registry.classify("第二章 一般规定").unwrap(), LineKind::Chapter(2));
        assert_eq!(registry.classify("第三节 合同").unwrap(), LineKind::Section(3));
        assert_eq!(registry.classify("第二十一条 内容").unwrap(), LineKind::Article(21));
    }

    #[test]
    fn test_markers_tolerate_leading_whitespace() {
        let registry = create_chinese_law_markers();

        assert_eq!(registry.classify("  第一章").unwrap(), LineKind::Chapter(1));
        assert_eq!(
            registry.classify("\u{3000}\u{3000}第五条　内容").unwrap(),
            LineKind::Article(5)
        );
        assert_eq!(registry.classify("\u{00A0}第六条").unwrap(), LineKind::Article(6));
    }

    #[test]
    fn test_markers_are_line_start_anchored() {
        let registry = create_chinese_law_markers();

        assert_eq!(
            registry.classify("依照本法第十条的规定").unwrap(),
            LineKind::Continuation
        );
    }

    #[test]
    fn test_marker_numerals_exclude_large_units() {
        let registry = create_chinese_law_markers();

        assert_eq!(registry.classify("第一万条").unwrap(), LineKind::Continuation);
        assert_eq!(registry.classify("第一千零一条").unwrap(), LineKind::Article(1001));
    }

    #[test]
    fn test_marker_requires_numeral() {
        let registry = create_chinese_law_markers();

        assert_eq!(registry.classify("第条").unwrap(), LineKind::Continuation);
        assert_eq!(registry.classify("第1条").unwrap(), LineKind::Continuation);
    }
}
