//! Main entry point for the mxlpipe CLI.
//!
//! This binary exposes the library's transcoding path for local files:
//! checking an archive's structural integrity, printing the canonical
//! hex form a storage write would receive, and decoding a stored-text
//! dump back to the original binary.

use anyhow::{Context, Result, bail};
use clap::Parser;
use tokio::io::AsyncWriteExt;
use tracing_subscriber::EnvFilter;

use mxlpipe::{Cli, RawArtifact, StoredValue, ZipIntegrityReport, codec, zip};

/// Application entry point.
///
/// Parses command-line arguments and dispatches to the decode, encode,
/// or check handler. The exit code is non-zero whenever the ingest gate
/// would have rejected the file.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.decode {
        return decode_stored_text(&cli).await;
    }

    let data = tokio::fs::read(&cli.file)
        .await
        .with_context(|| format!("cannot read {}", cli.file))?;

    let report = zip::verify_archive(&data)?;

    if cli.encode {
        let artifact = RawArtifact::new(data)?;
        println!("{}", codec::encode_hex(&artifact));
    } else if !cli.quiet {
        print_report(&cli.file, data.len(), &report);
    }

    if !report.ok {
        bail!("archive is structurally incomplete");
    }

    Ok(())
}

/// Decode a stored-text dump back to the original archive bytes.
///
/// The file content is classified with the same sniffing rule the
/// retrieval pipeline applies to storage reads, so both hex-marker and
/// base64 dumps work without a flag.
async fn decode_stored_text(cli: &Cli) -> Result<()> {
    let text = tokio::fs::read_to_string(&cli.file)
        .await
        .with_context(|| format!("cannot read {}", cli.file))?;

    let artifact = codec::sniff_decode(StoredValue::Text(text.trim().to_owned()))?;

    match &cli.output {
        Some(path) => {
            tokio::fs::write(path, artifact.as_bytes()).await?;
            if !cli.quiet {
                eprintln!("wrote {} bytes to {}", artifact.len(), path);
            }
        }
        None => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(artifact.as_bytes()).await?;
        }
    }

    Ok(())
}

/// Print the integrity report in a short human-readable form.
fn print_report(file: &str, len: usize, report: &ZipIntegrityReport) {
    println!("{file}: {len} bytes");
    match report.eocd_offset {
        Some(offset) => {
            println!(
                "  EOCD at offset {offset}, comment length {}",
                report.comment_len
            );
            if report.ok {
                if report.trailing_bytes > 0 {
                    println!("  complete, {} trailing bytes", report.trailing_bytes);
                } else {
                    println!("  complete");
                }
            } else {
                println!("  TRUNCATED, {} bytes missing", report.missing_bytes);
            }
        }
        None => println!("  no EOCD record found"),
    }
}
