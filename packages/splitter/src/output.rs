//! Serialization of text units to YAML or JSON.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::types::TextUnit;

/// Output file format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// YAML document with a `units` sequence.
    #[default]
    Yaml,
    /// Pretty-printed JSON object with a `units` array.
    Json,
}

impl OutputFormat {
    /// File extension for this format.
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
        }
    }
}

/// Top-level output document.
#[derive(Debug, Serialize)]
struct UnitsFile<'a> {
    strategy: &'a str,
    count: usize,
    units: &'a [TextUnit],
}

/// Render units as a string.
///
/// # Examples
/// ```
/// use legal_splitter::output::{render, OutputFormat};
/// use legal_splitter::TextUnit;
///
/// let json = render(&[TextUnit::plain("甲")], "line", OutputFormat::Json).unwrap();
/// assert!(json.contains("\"count\": 1"));
/// ```
pub fn render(units: &[TextUnit], strategy: &str, format: OutputFormat) -> Result<String> {
    let file = UnitsFile {
        strategy,
        count: units.len(),
        units,
    };

    let rendered = match format {
        OutputFormat::Yaml => serde_yaml_ng::to_string(&file)?,
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&file)?;
            json.push('\n');
            json
        }
    };

    Ok(rendered)
}

/// Render units and write them to `path`.
///
/// Parent directories must already exist.
pub fn save(units: &[TextUnit], strategy: &str, format: OutputFormat, path: &Path) -> Result<()> {
    let rendered = render(units, strategy, format)?;
    fs::write(path, rendered)?;

    tracing::debug!(
        path = %path.display(),
        units = units.len(),
        "Saved units"
    );

    Ok(())
}
