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
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Destino Web UI components.
//!
//! The centrepiece is [`DestinationButton`], a stateless secondary button that
//! shows a glyph, a placeholder marker, and a destination label, and forwards
//! activation to its caller. The DaisyUI button primitive and the lucide-style
//! glyph set it renders through live alongside it.

pub mod app;
pub mod components;
pub mod models;

pub use app::{DestinationPicker, DestinationPickerProps};
pub use components::atoms::{
    DestinationButton, DestinationButtonProps, Glyph, IconProps, IconVariant, PLACEHOLDER_MARKER,
    glyphs,
};
pub use models::{Destination, demo_destinations};

#[cfg(target_arch = "wasm32")]
pub use app::run_app;
