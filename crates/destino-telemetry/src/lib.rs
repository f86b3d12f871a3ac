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
//! Logging primitives shared by the Destino native tools.
//!
//! The browser bundle logs through the console; everything that runs natively
//! (the preview renderer, SSR tests) installs a `tracing` subscriber from here.

pub mod init;

pub use init::{
    DEFAULT_LOG_LEVEL, GlobalContextGuard, LogFormat, LoggingConfig, build_sha, init_logging,
};
