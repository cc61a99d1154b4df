//! Tracing configuration.
//!
//! Supports three output formats controlled by `ENUMFORGE_LOG_FORMAT`:
//!
//! - `text` (default): Standard `tracing-subscriber` flat output
//! - `tree`: Hierarchical indented output via `tracing-tree`
//! - `json`: One JSON object per span/event
//!
//! ```bash
//! # See every member as it is assigned
//! ENUMFORGE_LOG=trace ENUMFORGE_LOG_FORMAT=tree cargo test -p enumforge
//!
//! # Only the builders
//! ENUMFORGE_LOG="enumforge_types=debug" my-tool
//! ```
//!
//! The subscriber is only initialised when `ENUMFORGE_LOG` (or `RUST_LOG`) is
//! set, so there is zero overhead in normal use.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Standard flat text lines (default).
    Text,
    /// Hierarchical indented tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    /// Read `ENUMFORGE_LOG_FORMAT`.
    fn from_env() -> Self {
        Self::parse(&std::env::var("ENUMFORGE_LOG_FORMAT").unwrap_or_default())
    }
}

/// `ENUMFORGE_LOG` takes precedence over `RUST_LOG`.
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var("ENUMFORGE_LOG") {
        EnvFilter::builder().parse_lossy(val)
    } else {
        EnvFilter::from_default_env()
    }
}

/// Initialise the global tracing subscriber.
///
/// Does nothing when neither `ENUMFORGE_LOG` nor `RUST_LOG` is set. Output
/// goes to stderr. Calling it twice is harmless: the second subscriber is
/// dropped.
pub fn init_tracing() {
    let has_own_log = std::env::var("ENUMFORGE_LOG").is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_own_log && !has_rust_log {
        return;
    }

    let filter = build_filter();
    match LogFormat::from_env() {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_targets(true)
                .with_writer(std::io::stderr);
            let _ = Registry::default().with(filter).with(tree_layer).try_init();
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);
            let _ = Registry::default().with(filter).with(json_layer).try_init();
        }
        LogFormat::Text => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init();
        }
    }
}
