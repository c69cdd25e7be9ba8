//! Backend of the landing page waitlist: signups are validated, stored in Postgres and counted.

mod app;
pub mod config;
pub mod database;
mod error;
pub mod store;
pub mod waitlist;
pub mod web;

pub use app::{App, AppState};
pub use error::{Error, Result};
pub use web::serve;

use tracing_subscriber::EnvFilter;

/// Compact, human readable logs. Defaults to the `debug` level unless `RUST_LOG` says otherwise.
pub fn init_dbg_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    tracing_subscriber::fmt()
        .without_time()
        .with_target(false)
        .with_env_filter(filter)
        .compact()
        .try_init()
        .ok();
}

/// Structured JSON logs, one object per line. Defaults to the `info` level.
pub fn init_production_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .json()
        .with_current_span(true)
        .with_env_filter(filter)
        .try_init()
        .ok();
}
