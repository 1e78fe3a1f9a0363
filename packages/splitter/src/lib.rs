//! Legal splitter - split Chinese legal documents into structural units.
//!
//! This crate segments Chinese legal and regulatory text into a
//! part → chapter → section → article (编/章/节/条) hierarchy, producing
//! text units ready for embedding and indexing in a retrieval pipeline.
//!
//! # Example
//!
//! ```
//! use legal_splitter::{Document, LegalSplitter, ContentType};
//!
//! let doc = Document::new("第一章 总则\n第一条 为了规范管理，制定本法。");
//! let units = LegalSplitter::default().split_document(&doc).unwrap();
//!
//! assert_eq!(units.len(), 2);
//! assert_eq!(units[1].chapter, Some(1));
//! assert_eq!(units[1].content_type, Some(ContentType::Article));
//! ```
//!
//! # Architecture
//!
//! - [`numeral`]: Chinese numeral conversion
//! - [`splitting`]: Structural marker recognition and splitting
//! - [`types`]: Core data types (Document, TextUnit, ContentType)
//! - [`error`]: Error types and Result alias
//! - [`config`]: Configuration constants and validation
//! - [`strategy`]: Split strategy selection (legal, sentence, line)
//! - [`loader`]: Loading documents from text files
//! - [`pipeline`]: Load, split and attach metadata
//! - [`output`]: YAML and JSON output
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod numeral;
pub mod output;
pub mod pipeline;
pub mod splitting;
pub mod strategy;
pub mod types;

// Re-export commonly used items
pub use error::{Result, SplitterError};
pub use splitting::{has_article_pattern, LegalSplitter};
pub use strategy::{create_splitter, DocumentSplitter, StrategyKind};
pub use types::{ContentType, Document, Metadata, TextUnit};
