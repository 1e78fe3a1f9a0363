//! End-to-end integration tests for the splitting pipeline.
//!
//! Uses fixture data from an excerpt of the Civil Code (民法典) and an
//! unstructured administrative notice.

use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;

use legal_splitter::output::{render, OutputFormat};
use legal_splitter::pipeline::{split_file, CHUNK_INDEX_KEY};
use legal_splitter::{
    create_splitter, has_article_pattern, ContentType, Document, LegalSplitter, StrategyKind,
    TextUnit,
};

/// Path to a fixture file.
fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Load fixture file content.
fn load_fixture(name: &str) -> String {
    let path = fixture_path(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to load {}: {}", path.display(), e))
}

/// Structural position of a unit as (part, chapter, section, article, content type code).
type Position = (Option<u64>, Option<u64>, Option<u64>, Option<u64>, Option<u8>);

fn position(unit: &TextUnit) -> Position {
    (
        unit.part,
        unit.chapter,
        unit.section,
        unit.article,
        unit.content_type.map(ContentType::code),
    )
}

fn split_civil_code() -> Vec<TextUnit> {
    let doc = Document::new(load_fixture("civil_code.txt"));
    LegalSplitter::default()
        .split_document(&doc)
        .expect("civil code should split")
}

#[test]
fn test_civil_code_is_structured() {
    assert!(has_article_pattern(&load_fixture("civil_code.txt")));
    assert!(!has_article_pattern(&load_fixture("notice.txt")));
}

#[test]
fn test_civil_code_positions() {
    let units = split_civil_code();

    let positions: Vec<Position> = units.iter().map(position).collect();
    assert_eq!(
        positions,
        vec![
            (None, None, None, None, None),                   // title
            (Some(1), None, None, None, Some(1)),             // 第一编
            (Some(1), Some(1), None, None, Some(2)),          // 第一章
            (Some(1), Some(1), None, Some(1), Some(4)),       // 第一条
            (Some(1), Some(1), None, Some(2), Some(4)),       // 第二条
            (Some(1), Some(1), None, Some(3), Some(4)),       // 第三条
            (Some(1), Some(2), None, Some(3), Some(2)),       // 第二章
            (Some(1), Some(2), Some(1), Some(3), Some(3)),    // 第一节
            (Some(1), Some(2), Some(1), Some(13), Some(4)),   // 第十三条
            (Some(1), Some(2), Some(1), Some(17), Some(4)),   // 第十七条
            (Some(1), Some(2), Some(2), Some(17), Some(3)),   // 第二节
            (Some(1), Some(2), Some(2), Some(27), Some(4)),   // 第二十七条
            (Some(2), Some(2), Some(2), Some(27), Some(1)),   // 第二编
            (Some(2), Some(1), Some(2), Some(27), Some(2)),   // 第一章
            (Some(2), Some(1), Some(2), Some(205), Some(4)),  // 第二百零五条
        ]
    );
}

#[test]
fn test_civil_code_article_body_is_folded() {
    let units = split_civil_code();
    let article_27 = units
        .iter()
        .find(|u| u.article == Some(27) && u.content_type == Some(ContentType::Article))
        .expect("article 27 present");

    assert_eq!(
        article_27.text,
        [
            "第二十七条　父母是未成年子女的监护人。",
            "未成年人的父母已经死亡或者没有监护能力的，由下列有监护能力的人按顺序担任监护人：",
            "（一）祖父母、外祖父母；",
            "（二）兄、姐；",
            "（三）其他愿意担任监护人的个人或者组织，但是须经未成年人住所地的居民委员会、村民委员会或者民政部门同意。",
        ]
        .join("\n")
    );
}

#[test]
fn test_civil_code_single_line_articles_are_trimmed() {
    let units = split_civil_code();

    assert_eq!(
        units[4].text,
        "第二条　民法调整平等主体的自然人、法人和非法人组织之间的人身关系和财产关系。"
    );
    assert!(units.iter().all(|u| !u.text.contains('\u{200B}')));
}

#[test]
fn test_notice_falls_back_to_lines() {
    let doc = Document::new(load_fixture("notice.txt"));
    let units = LegalSplitter::default().split_document(&doc).unwrap();

    let texts: Vec<&str> = units.iter().map(|u| u.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "关于开展年度检查工作的通知",
            "第一章 工作安排",
            "各单位：",
            "请于本月底前完成自查。",
            "特此通知。",
        ]
    );
    assert!(units.iter().all(|u| !u.is_structured()));
}

#[test]
fn test_pipeline_attaches_file_metadata() {
    let splitter = create_splitter(StrategyKind::Legal, 1024, 20).unwrap();
    let units = split_file(&fixture_path("civil_code.txt"), splitter.as_ref()).unwrap();

    assert_eq!(units.len(), 15);
    assert!(units
        .iter()
        .all(|u| u.metadata.get("file_name").map(String::as_str) == Some("civil_code.txt")));
    assert_eq!(units[14].metadata["article"], "205");
    assert_eq!(units[14].metadata[CHUNK_INDEX_KEY], "14");
}

#[test]
fn test_sentence_strategy_on_fixture() {
    let splitter = create_splitter(StrategyKind::Sentence, 120, 10).unwrap();
    let units = split_file(&fixture_path("civil_code.txt"), splitter.as_ref()).unwrap();

    assert!(units.len() > 1);
    assert!(units.iter().all(|u| u.content_type.is_none()));
    assert!(units.iter().all(|u| u.metadata["split_strategy"] == "sentence"));
}

#[test]
fn test_rendered_yaml_contains_units() {
    let units = split_civil_code();
    let yaml = render(&units, "legal", OutputFormat::Yaml).unwrap();

    assert!(yaml.contains("count: 15"));
    assert!(yaml.contains("content_type: 4"));
    assert!(yaml.contains("article: 205"));
}
