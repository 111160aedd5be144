//! CLI binary for pdf2img.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `ConversionConfig` and prints results.

use anyhow::{bail, Context, Result};
use clap::Parser;
use pdf2img::{convert, ConversionConfig, InputDocument};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn red(s: &str) -> String {
    format!("\x1b[31m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}

/// Render the first page of a PDF document to a PNG image.
#[derive(Parser, Debug)]
#[command(name = "pdf2img", version, about)]
struct Cli {
    /// Input PDF file.
    input: PathBuf,

    /// Output PNG path. Default: input filename with `.pdf` replaced by `.png`.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Password for encrypted PDFs.
    #[arg(long, env = "PDF2IMG_PASSWORD")]
    password: Option<String>,

    /// Print a machine-readable JSON summary instead of the human one.
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Machine-readable summary for `--json`.
#[derive(Serialize)]
struct Summary<'a> {
    input: &'a Path,
    output: &'a Path,
    name: &'a str,
    mime_type: &'a str,
    bytes: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut builder = ConversionConfig::builder();
    if let Some(pwd) = cli.password.clone() {
        builder = builder.password(pwd);
    }
    let config = builder.build();

    let document = InputDocument::from_file(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;

    let result = convert(&document, &config).await;
    let file = match result.file {
        Some(ref file) => file,
        None => {
            let msg = result.error.as_deref().unwrap_or("unknown conversion failure");
            eprintln!("{} {msg}", red("✗"));
            std::process::exit(1);
        }
    };

    let out_path = cli
        .output
        .clone()
        .unwrap_or_else(|| cli.input.with_file_name(&file.name));

    write_atomic(&out_path, &file.bytes)
        .with_context(|| format!("failed to write {}", out_path.display()))?;

    if cli.json {
        let summary = Summary {
            input: &cli.input,
            output: &out_path,
            name: &file.name,
            mime_type: &file.mime_type,
            bytes: file.bytes.len(),
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "{} {}  {}",
            green("✓"),
            out_path.display(),
            dim(&format!("{} bytes", file.bytes.len())),
        );
    }

    // Scoped acquisition: the CLI only needs the bytes on disk.
    result.release();
    Ok(())
}

/// Atomic write: temp file in the destination directory, then rename.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    if tmp.persist(path).is_err() {
        bail!("could not persist temp file to {}", path.display());
    }
    Ok(())
}
