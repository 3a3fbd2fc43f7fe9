//! `idswitch` command line front end.
//!
//! Two commands share one generator configuration:
//!
//! - `gen` prints dispatch code for a standalone `key destination` table;
//! - `patch` regenerates `#region Generated ... Switch` blocks in source
//!   files from the id tables declared next to them.

pub mod commands;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Does nothing unless `RUST_LOG` is set, e.g. `RUST_LOG=ids_switch=trace`
/// to log every column choice. Safe to call multiple times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true),
                )
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
