use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;

use crate::parser::record::JobRecord;

pub const DEFAULT_OUT: &str = "upwork_clean.csv";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Tsv,
    /// One JSON object per line
    Json,
}

impl Format {
    /// Guess from the output file extension, defaulting to CSV.
    pub fn from_path(path: &str) -> Format {
        let ext = Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("tsv") => Format::Tsv,
            Some("json") | Some("jsonl") => Format::Json,
            _ => Format::Csv,
        }
    }
}

/// Write records to `out` (`-` for stdout).
pub fn write_records(records: &[JobRecord], out: &str, format: Format) -> Result<()> {
    let sink: Box<dyn Write> = if out == "-" {
        Box::new(io::stdout().lock())
    } else {
        let file = File::create(out).with_context(|| format!("Failed to create {}", out))?;
        Box::new(BufWriter::new(file))
    };
    write_to(records, sink, format).with_context(|| format!("Failed to write {}", out))
}

pub fn write_to<W: Write>(records: &[JobRecord], mut sink: W, format: Format) -> Result<()> {
    match format {
        Format::Csv => write_delimited(records, sink, b','),
        Format::Tsv => write_delimited(records, sink, b'\t'),
        Format::Json => {
            for r in records {
                serde_json::to_writer(&mut sink, r)?;
                sink.write_all(b"\n")?;
            }
            sink.flush()?;
            Ok(())
        }
    }
}

// Header written by hand so an empty run still yields a header row.
fn write_delimited<W: Write>(records: &[JobRecord], sink: W, delimiter: u8) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_writer(sink);
    wtr.write_record(JobRecord::COLUMNS)?;
    for r in records {
        wtr.serialize(r)?;
    }
    wtr.flush()?;
    Ok(())
}
