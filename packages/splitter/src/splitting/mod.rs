//! Structural splitting for Chinese legal documents.
//!
//! Recognises 编/章/节/条 markers (part, chapter, section, article) at line
//! start and emits one text unit per structural element, folding article
//! body lines into their article.

mod config;
mod engine;
mod registry;
mod types;

pub use config::create_chinese_law_markers;
pub use engine::{has_article_pattern, is_effectively_blank, LegalSplitter};
pub use registry::MarkerRegistry;
pub use types::{LevelPattern, LineKind, ScanState};
