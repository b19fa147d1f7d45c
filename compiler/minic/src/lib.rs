//! Mini command-line runner.
//!
//! Supplies programs to `mini_eval`: reads source files, ships the bundled
//! demo programs, and turns a failed run into the user-facing notice.
//!
//! ```text
//! file / demo text
//!     │
//!     ▼
//! split_lines() ──► Vec<&str>
//!     │
//!     ▼
//! Interpreter::run() ──► RunSummary | RunError
//! ```

pub mod commands;
pub mod demos;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=mini_eval=debug`
/// (per-run outcome) or `RUST_LOG=mini_eval=trace` (every instruction).
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
