//! Command-line interface for the splitter.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE, DEFAULT_STRATEGY, PREVIEW_WIDTH};
use crate::error::{Result, SplitterError};
use crate::loader::load_documents;
use crate::numeral::convert;
use crate::output::{render, save, OutputFormat};
use crate::pipeline::split_file;
use crate::splitting::has_article_pattern;
use crate::strategy::{create_splitter, StrategyKind};
use crate::types::{ContentType, TextUnit};

/// Legal splitter - split Chinese legal documents into structural units.
#[derive(Parser)]
#[command(name = "legal-splitter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split text files into units and print or save them.
    Split {
        /// Input files (.txt, .md)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Split strategy
        #[arg(short, long, value_enum, default_value = DEFAULT_STRATEGY)]
        strategy: StrategyKind,

        /// Maximum chunk size in characters (sentence strategy)
        #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
        chunk_size: usize,

        /// Overlap between chunks in characters (sentence strategy)
        #[arg(long, default_value_t = DEFAULT_CHUNK_OVERLAP)]
        chunk_overlap: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value = "yaml")]
        format: OutputFormat,

        /// Output file (default: print to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print a readable listing instead of serialized output
        #[arg(long)]
        preview: bool,
    },

    /// Report whether a file contains article markers (第…条).
    Detect {
        /// Input file
        file: PathBuf,
    },

    /// Convert a Chinese numeral to an integer.
    Numeral {
        /// Numeral text (e.g. 三百二十一)
        text: String,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Split {
            files,
            strategy,
            chunk_size,
            chunk_overlap,
            format,
            output,
            preview,
        } => split_command(
            &files,
            strategy,
            chunk_size,
            chunk_overlap,
            format,
            output.as_deref(),
            preview,
        ),
        Commands::Detect { file } => detect_command(&file),
        Commands::Numeral { text } => numeral_command(&text),
    }
}

/// Execute the split command.
fn split_command(
    files: &[PathBuf],
    strategy: StrategyKind,
    chunk_size: usize,
    chunk_overlap: usize,
    format: OutputFormat,
    output: Option<&Path>,
    preview: bool,
) -> Result<()> {
    // Validate before reading any input
    let splitter = create_splitter(strategy, chunk_size, chunk_overlap)?;
    if let Some(output_path) = output {
        validate_output_path(output_path)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:30.cyan}] {pos}/{len} {msg}")
            .expect("valid template"),
    );

    let mut units = Vec::new();
    for file in files {
        pb.set_message(file.display().to_string());
        match split_file(file, splitter.as_ref()) {
            Ok(file_units) => units.extend(file_units),
            Err(e) => {
                pb.finish_and_clear();
                return Err(e);
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    eprintln!(
        "{} {} file(s) into {} unit(s) using {}",
        style("Split").bold(),
        files.len(),
        style(units.len()).cyan(),
        style(strategy).green()
    );

    if preview {
        print_preview(&units);
    }

    match output {
        Some(output_path) => {
            save(&units, strategy.as_str(), format, output_path)?;
            eprintln!(
                "{} {}",
                style("Saved to:").green().bold(),
                output_path.display()
            );
        }
        None if !preview => print!("{}", render(&units, strategy.as_str(), format)?),
        None => {}
    }

    Ok(())
}

/// Execute the detect command.
fn detect_command(file: &Path) -> Result<()> {
    let documents = load_documents(file)?;
    let structured = documents.iter().any(|d| has_article_pattern(&d.text));

    if structured {
        println!(
            "{}: {} (article markers found, legal splitting applies)",
            file.display(),
            style("structured").green()
        );
    } else {
        println!(
            "{}: {} (no article markers, one unit per line)",
            file.display(),
            style("unstructured").yellow()
        );
    }

    Ok(())
}

/// Execute the numeral command.
fn numeral_command(text: &str) -> Result<()> {
    println!("{}", convert(text.trim())?);
    Ok(())
}

/// Output file's parent directory must exist and the path must not be a directory.
fn validate_output_path(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Err(SplitterError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("Output path is a directory: {}", path.display()),
        )));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.is_dir() {
            return Err(SplitterError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Output directory does not exist: {}", parent.display()),
            )));
        }
    }

    Ok(())
}

/// Print units as a numbered, wrapped listing.
fn print_preview(units: &[TextUnit]) {
    for (index, unit) in units.iter().enumerate() {
        println!("{} {}", style(format!("#{index}")).dim(), position_label(unit));
        let wrapped = textwrap::fill(&unit.text, PREVIEW_WIDTH.saturating_sub(4));
        println!("{}", textwrap::indent(&wrapped, "    "));
    }
}

/// Compact "编1 章2 节- 条5" style label for a unit.
fn position_label(unit: &TextUnit) -> String {
    if !unit.is_structured() {
        return style("plain").dim().to_string();
    }

    ContentType::ALL
        .iter()
        .map(|&level| match unit.number(level) {
            Some(n) => format!("{}{n}", level.glyph()),
            None => format!("{}-", level.glyph()),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
