//! Batch outline extraction over pre-extracted document dumps.
//!
//! Reads JSON "document dumps" — the span/line structure a document parser
//! produces — runs the outline pipeline on each, and writes one outline JSON
//! per input document.
//!
//! Usage:
//!   cargo run --release --bin extract_outline
//!   cargo run --release --bin extract_outline -- input_dir output_dir
//!
//! Dump format (one document per file):
//!   {
//!     "title": "optional title",
//!     "pages": [
//!       { "number": 1, "lines": [ [ { "text": ..., "font_name": ...,
//!         "font_size": ..., "flags": ..., "bbox": {...} } ] ] }
//!     ]
//!   }

use outline_oxide::layout::{Line, TextSpan};
use outline_oxide::outline::OutlineBuilder;
use outline_oxide::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk shape of one parsed document.
#[derive(Debug, Deserialize)]
struct DocumentDump {
    /// Optional title; the file stem is used when absent.
    title: Option<String>,
    pages: Vec<PageDump>,
}

/// One page of the dump: a page number and its lines, each line an ordered
/// list of spans.
#[derive(Debug, Deserialize)]
struct PageDump {
    number: u32,
    lines: Vec<Vec<TextSpan>>,
}

struct Config {
    input: PathBuf,
    output_dir: PathBuf,
}

impl Config {
    fn from_args() -> Self {
        let args: Vec<String> = std::env::args().collect();
        let input = args
            .get(1)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("input"));
        let output_dir = args
            .get(2)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("output"));
        Self { input, output_dir }
    }
}

/// Run one dump through the outline pipeline and write the result.
fn process_dump(path: &Path, output_dir: &Path) -> Result<()> {
    let raw = fs::read_to_string(path)?;
    let dump: DocumentDump = serde_json::from_str(&raw)?;

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| Error::InvalidDump(format!("unusable file name: {}", path.display())))?;
    let title = dump.title.unwrap_or_else(|| stem.to_string());

    let mut builder = OutlineBuilder::new();
    for page in &dump.pages {
        let lines: Vec<Line> = page
            .lines
            .iter()
            .filter_map(|spans| Line::from_spans(spans.clone()))
            .collect();
        builder.process_page(page.number, &lines);
    }

    log::info!(
        "{}: {} heading candidate(s) across {} page(s)",
        path.display(),
        builder.candidate_count(),
        dump.pages.len()
    );

    let result = builder.finish(title);
    let json = serde_json::to_string_pretty(&result)?;

    let out_path = output_dir.join(format!("{}.json", stem));
    fs::write(&out_path, json)?;
    println!("Processed: {} -> {}", path.display(), out_path.display());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let config = Config::from_args();

    fs::create_dir_all(&config.output_dir)?;

    let mut inputs: Vec<PathBuf> = Vec::new();
    if config.input.is_dir() {
        for entry in fs::read_dir(&config.input)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) == Some("json") {
                inputs.push(path);
            }
        }
        inputs.sort();
    } else {
        inputs.push(config.input.clone());
    }

    if inputs.is_empty() {
        println!("No .json dumps found in {}", config.input.display());
        return Ok(());
    }

    for path in &inputs {
        if let Err(err) = process_dump(path, &config.output_dir) {
            // Keep going: one bad dump should not sink the batch.
            eprintln!("Failed: {} ({})", path.display(), err);
        }
    }

    Ok(())
}
