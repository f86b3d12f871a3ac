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
//! Render Destino destination buttons to static HTML.
//!
//! # Design
//! - Uses Yew's server renderer so the markup matches what the browser mounts.
//! - Props are built inside the renderer's worker; nothing `!Send` crosses threads.
//! - Renders either one button (`--label`) or the whole demo picker.
//!
//! Failure modes are an empty label and failing to write the output.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use destino_telemetry::{DEFAULT_LOG_LEVEL, LogFormat};
use destino_ui::{
    DestinationButton, DestinationButtonProps, DestinationPicker, DestinationPickerProps, Glyph,
    demo_destinations, glyphs,
};
use thiserror::Error;
use yew::{AttrValue, Callback, ServerRenderer};

const DOCUMENT_TITLE: &str = "Destino preview";
const DAISYUI_CDN: &str = "https://cdn.jsdelivr.net/npm/daisyui@4/dist/full.min.css";
const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

/// Command-line options for the preview renderer.
#[derive(Debug, Parser)]
#[command(name = "destino-preview", about = "Render destination buttons to static HTML")]
pub struct Cli {
    /// Output HTML file; stdout when omitted.
    #[arg(long, env = "DESTINO_PREVIEW_OUT")]
    pub out: Option<PathBuf>,
    /// Render a single button with this label instead of the demo picker.
    #[arg(long)]
    pub label: Option<String>,
    /// Glyph for the single button.
    #[arg(long, value_enum, default_value_t = IconChoice::Home)]
    pub icon: IconChoice,
    /// Selection state passed to the single button.
    #[arg(long)]
    pub selected: bool,
    /// Tracing level; `RUST_LOG` takes precedence.
    #[arg(long, env = "DESTINO_LOG_LEVEL", default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
    /// Log output format (`pretty` or `json`); inferred from the build when omitted.
    #[arg(long, env = "DESTINO_LOG_FORMAT")]
    pub log_format: Option<LogFormat>,
}

/// Built-in glyphs selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IconChoice {
    /// House.
    Home,
    /// Briefcase.
    Work,
    /// School building.
    School,
    /// Shopping cart.
    Market,
    /// Hospital.
    Hospital,
    /// Map pin.
    Pin,
}

impl IconChoice {
    /// Resolve the glyph handle for this choice.
    #[must_use]
    pub fn glyph(self) -> Glyph {
        match self {
            Self::Home => glyphs::home(),
            Self::Work => glyphs::work(),
            Self::School => glyphs::school(),
            Self::Market => glyphs::market(),
            Self::Hospital => glyphs::hospital(),
            Self::Pin => glyphs::pin(),
        }
    }
}

/// Errors returned by the preview renderer.
#[derive(Debug, Error)]
pub enum PreviewError {
    /// `--label` was given but blank.
    #[error("destination label must not be empty")]
    EmptyLabel,
    /// Writing the output file failed.
    #[error("failed to write preview to {}", path.display())]
    Write {
        /// Output path.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// Writing to stdout failed.
    #[error("failed to write preview to stdout")]
    Stdout {
        /// Underlying IO error.
        source: io::Error,
    },
}

/// What to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewRequest {
    /// One destination button.
    Single {
        /// Button label.
        label: String,
        /// Leading glyph.
        glyph: Glyph,
        /// Selection flag forwarded to the button.
        selected: bool,
    },
    /// The demo picker with every built-in destination.
    Gallery,
}

impl PreviewRequest {
    /// Build a request from parsed CLI options.
    ///
    /// # Errors
    /// Returns [`PreviewError::EmptyLabel`] when `--label` is blank.
    pub fn from_cli(cli: &Cli) -> Result<Self, PreviewError> {
        match cli.label.as_deref() {
            None => Ok(Self::Gallery),
            Some(label) if label.trim().is_empty() => Err(PreviewError::EmptyLabel),
            Some(label) => Ok(Self::Single {
                label: label.to_string(),
                glyph: cli.icon.glyph(),
                selected: cli.selected,
            }),
        }
    }
}

/// Server-render the markup for a request.
pub async fn render_markup(request: PreviewRequest) -> String {
    match request {
        PreviewRequest::Single {
            label,
            glyph,
            selected,
        } => {
            ServerRenderer::<DestinationButton>::with_props(move || DestinationButtonProps {
                label: AttrValue::from(label),
                icon: glyph,
                is_selected: selected,
                onclick: Callback::noop(),
            })
            .hydratable(false)
            .render()
            .await
        }
        PreviewRequest::Gallery => {
            ServerRenderer::<DestinationPicker>::with_props(|| DestinationPickerProps {
                destinations: demo_destinations(),
                initial: None,
                on_select: Callback::noop(),
            })
            .hydratable(false)
            .render()
            .await
        }
    }
}

/// Wrap rendered markup in a standalone HTML document.
#[must_use]
pub fn wrap_document(markup: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{DOCUMENT_TITLE}</title>\n\
         <link rel=\"stylesheet\" href=\"{DAISYUI_CDN}\">\n\
         <script src=\"{TAILWIND_CDN}\"></script>\n</head>\n\
         <body class=\"p-6\">\n{markup}\n</body>\n</html>\n"
    )
}

/// Write the document to `out`, or stdout when no path is given.
///
/// # Errors
/// Returns an error if the file or stdout cannot be written.
pub fn write_output(out: Option<&Path>, document: &str) -> Result<(), PreviewError> {
    match out {
        Some(path) => std::fs::write(path, document).map_err(|source| PreviewError::Write {
            path: path.to_path_buf(),
            source,
        }),
        None => io::stdout()
            .lock()
            .write_all(document.as_bytes())
            .map_err(|source| PreviewError::Stdout { source }),
    }
}

/// Render and write a preview for the parsed options.
///
/// # Errors
/// Returns an error for a blank label or when the output cannot be written.
pub async fn run(cli: &Cli) -> Result<(), PreviewError> {
    let request = PreviewRequest::from_cli(cli)?;
    tracing::info!(request = ?request, "rendering preview");
    let markup = render_markup(request).await;
    let document = wrap_document(&markup);
    write_output(cli.out.as_deref(), &document)?;
    let destination = cli
        .out
        .as_deref()
        .map_or_else(|| "stdout".to_string(), |path| path.display().to_string());
    tracing::info!(out = %destination, bytes = document.len(), "preview written");
    Ok(())
}
