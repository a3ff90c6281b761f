/*
 * Responsibility
 * - tracing subscriber setup (RUST_LOG, else a per-mode default)
 * - panic hook that reports through tracing
 */
use std::panic;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::EngineMode;

pub fn init_tracing(mode: EngineMode) {
    // Prefer RUST_LOG if set.
    // Ex:
    // RUST_LOG=info,health_service=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(mode.default_log_filter()));

    // try_init: a second call (tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

pub fn init_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        // stderr can be hidden depending on how the process is launched.
        tracing::error!(%info, "panic");
        default_hook(info);
    }));
}
