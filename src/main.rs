mod document;
mod output;
mod parser;
mod settings;
mod stats;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use output::Format;
use parser::record::JobRecord;
use settings::Settings;

#[derive(Parser)]
#[command(name = "upwork_parser", about = "Extract job postings from saved Upwork search pages")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract postings and write them as a table
    Parse {
        /// Saved search page(s) (HTML)
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
        /// Output path, or "-" for stdout
        #[arg(short, long, default_value = output::DEFAULT_OUT)]
        out: String,
        /// Output format (default: guessed from the output extension)
        #[arg(short, long, value_enum)]
        format: Option<Format>,
        /// Origin used to resolve relative job links
        #[arg(long)]
        base: Option<String>,
    },
    /// Print role / framework / price statistics
    Stats {
        /// Saved search page(s) (HTML)
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
        /// Origin used to resolve relative job links
        #[arg(long)]
        base: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse {
            inputs,
            out,
            format,
            base,
        } => {
            let settings = Settings::load()?.with_base(base);
            debug!(?settings, "settings loaded");
            let records = process_inputs(&inputs, &settings)?;
            let format = format.unwrap_or_else(|| Format::from_path(&out));
            output::write_records(&records, &out, format)?;
            debug!("\n{}", stats::render_markdown(&stats::collect(&records)));
            if out != "-" {
                println!("Wrote {} rows -> {}", records.len(), out);
            }
            Ok(())
        }
        Commands::Stats { inputs, base } => {
            let settings = Settings::load()?.with_base(base);
            let records = process_inputs(&inputs, &settings)?;
            if records.is_empty() {
                println!("No job postings found.");
                return Ok(());
            }
            println!("{}", stats::render_markdown(&stats::collect(&records)));
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        eprintln!("\nDone in {}", format_duration(elapsed));
    }

    result
}

/// Read and extract every input; records keep input order, then document order.
fn process_inputs(inputs: &[PathBuf], settings: &Settings) -> Result<Vec<JobRecord>> {
    use indicatif::{ProgressBar, ProgressStyle};
    use rayon::prelude::*;

    let pb = if inputs.len() > 1 {
        let pb = ProgressBar::new(inputs.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")?
                .progress_chars("#>-"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let per_input: Vec<Result<Vec<JobRecord>>> = inputs
        .par_iter()
        .map(|path| {
            let html = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let records = parser::process_document(&html, settings);
            info!(input = %path.display(), postings = records.len(), "parsed");
            pb.inc(1);
            Ok(records)
        })
        .collect();
    pb.finish_and_clear();

    let mut records = Vec::new();
    for r in per_input {
        records.extend(r?);
    }
    Ok(records)
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("upwork_parser_{}_{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn inputs_concatenate_in_argument_order() {
        let dir = scratch_dir("order");
        let hourly = dir.join("hourly.html");
        let search = dir.join("search.html");
        std::fs::copy("tests/fixtures/hourly_page.html", &hourly).unwrap();
        std::fs::copy("tests/fixtures/search_page.html", &search).unwrap();

        let records = process_inputs(&[hourly, search], &Settings::default()).unwrap();
        std::fs::remove_dir_all(&dir).unwrap();

        let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(
            titles,
            [
                "Data pipeline maintenance",
                "Python Web Scraping Expert for Real Estate Listings",
                "Logo refresh for bakery",
            ]
        );
    }

    #[test]
    fn missing_input_names_the_path() {
        let missing = scratch_dir("missing").join("nope.html");
        let err = process_inputs(
            &[PathBuf::from("tests/fixtures/search_page.html"), missing.clone()],
            &Settings::default(),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), format!("Failed to read {}", missing.display()));
    }

    #[test]
    fn duration_formatting() {
        use std::time::Duration;
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.5s");
        assert_eq!(format_duration(Duration::from_secs(125)), "2m 5s");
        assert_eq!(format_duration(Duration::from_secs(3725)), "1h 2m 5s");
    }
}
