//! Subscriber setup for hosts that do not install their own.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Environment variable read before falling back to `RUST_LOG`.
const LOG_ENV: &str = "BROOD_LOG";

/// Initialize tracing for debug output.
///
/// Does nothing unless `BROOD_LOG` or `RUST_LOG` is set. Safe to call
/// multiple times; only the first call installs a subscriber, and an
/// already-installed global subscriber is left alone.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let directives = std::env::var(LOG_ENV).or_else(|_| std::env::var("RUST_LOG"));
        let Ok(directives) = directives else {
            return;
        };

        let filter = EnvFilter::new(directives);
        let installed = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true))
            .with(filter)
            .try_init();
        if installed.is_err() {
            tracing::debug!("global subscriber already set, keeping it");
        }
    });
}
