// ==============================================================================
// logging.rs - Tracing Setup
// ==============================================================================
// Description: Shared tracing subscriber for the command-line tools
// Author: Matt Barham
// Created: 2026-10-18
// Modified: 2026-10-18
// Version: 1.0.0
// ==============================================================================

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber, logging to stderr.
///
/// `RUST_LOG` wins when set; otherwise library events at info (debug when
/// `verbose`) and everything else at warn.
pub fn init_tracing(verbose: bool) {
    let fallback = if verbose {
        "warn,gwas_prep=debug"
    } else {
        "warn,gwas_prep=info"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
