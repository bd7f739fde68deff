//! The Amalgam compiler driver.
//!
//! Ties the pipeline crates together behind a `Session` and exposes
//! the CLI commands. One `Session` scopes one module compilation;
//! there is no global compiler context.
//!
//! # Architecture
//!
//! ```text
//! line ──► lex_line ──► parse_statement ──► check_module
//!                                               │
//!                                               ▼
//!                          EvalBackend ◄── lower_method
//! ```

use std::sync::Once;

pub mod commands;
pub mod session;

pub use session::Session;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber, gated on `RUST_LOG` so the CLI
/// stays silent by default. Safe to call more than once.
///
/// Enable with e.g. `RUST_LOG=amalgam_parse=trace` or
/// `RUST_LOG=amalgam_machine=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
