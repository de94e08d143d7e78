//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide subscriber: compact `fmt` output,
//! no module prefix (`with_target(false)`), level filter from `RUST_LOG`
//! (`info` when unset).
//!
//! ## What Gets Traced
//!
//! - **Gateway actors**: start and shutdown at `info`, each request at `debug`,
//!   failed requests at `warn`
//! - **Client calls**: one span per [`ApiClient`](luma_api::ApiClient) call, tagged
//!   with the resource
//! - **Aggregation**: every absorbed failure at `warn`, one summary line per cycle
//! - **Pages**: applied snapshots, loads and failed mutations
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=debug cargo run          # every request, with payloads
//! RUST_LOG=luma_api=debug cargo run # gateway only
//! ```
//!
//! With `RUST_LOG=info` one refresh cycle against a half-broken API reads:
//!
//! ```text
//! WARN aggregation: Fetch failed, counting as 0 metric="events" error=HTTP 500: no message
//! INFO aggregation: Aggregation complete users=42 events=0 ... api_status=online
//! INFO Snapshot applied generation=3 users=42 api_status=online
//! ```
use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
