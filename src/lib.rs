#![doc(test(attr(deny(warnings))))]

//! Portal Core implements the record store behind a minimal customer portal:
//! three JSON-file-backed collections (purchases, account movements, and the
//! profile singleton) and the HTTP API that exposes their CRUD contract.

pub mod config;
pub mod core;
pub mod domain;
pub mod http;
pub mod storage;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        init_tracing();
        tracing::info!("Portal Core tracing initialized.");
    });
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::from_default_env().add_directive("portal_core=info".parse().unwrap());

    fmt().with_env_filter(filter).init();
}
