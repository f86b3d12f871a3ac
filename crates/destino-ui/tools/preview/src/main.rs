#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::multiple_crate_versions)]
//! CLI entrypoint for the destination preview renderer.
//!
//! # Design
//! Installs logging from the parsed flags, then delegates to the library and
//! surfaces errors via `anyhow`.

use anyhow::Result;
use clap::Parser;
use destino_preview::Cli;
use destino_telemetry::{GlobalContextGuard, LogFormat, LoggingConfig, build_sha, init_logging};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&LoggingConfig {
        level: &cli.log_level,
        format: cli.log_format.unwrap_or_else(LogFormat::infer),
        build_sha: option_env!("DESTINO_BUILD_SHA").unwrap_or_else(build_sha),
    })?;
    let _context = GlobalContextGuard::new("destino-preview");
    destino_preview::run(&cli).await?;
    Ok(())
}
